use json::JsonValue;
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

use crate::model::matches::{NormalizedMatchRecord, TeamAggregate};

use super::{structured::player_to_json, ExportArtifact, ExportError, XLSX_CONTENT_TYPE, XLSX_FILE_NAME};

/// One row per (match, player) pair under a header that is the union of all row keys,
/// in the order they were first seen.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<JsonValue>>,
}

pub fn flatten(records: &[NormalizedMatchRecord]) -> FlatTable {
    let mut columns: Vec<String> = Vec::new();
    let mut keyed_rows: Vec<Vec<(String, JsonValue)>> = Vec::new();

    for record in records {
        let match_fields = match_columns(record);

        for player in &record.players {
            let mut row = match_fields.clone();
            for (key, value) in player_to_json(player).entries() {
                match row.iter_mut().find(|(k, _)| k.as_str() == key) {
                    Some(cell) => cell.1 = value.clone(),
                    None => row.push((key.to_string(), value.clone())),
                }
            }

            for (key, _) in &row {
                if !columns.contains(key) {
                    columns.push(key.clone());
                }
            }
            keyed_rows.push(row);
        }
    }

    let rows = keyed_rows
        .into_iter()
        .map(|row| {
            columns
                .iter()
                .map(|column| {
                    row.iter()
                        .find(|(key, _)| key == column)
                        .map(|(_, value)| value.clone())
                        .unwrap_or(JsonValue::Null)
                })
                .collect()
        })
        .collect();

    FlatTable { columns, rows }
}

fn match_columns(record: &NormalizedMatchRecord) -> Vec<(String, JsonValue)> {
    let mut fields = vec![
        ("match_id".to_string(), record.match_id.as_str().into()),
        ("game_duration".to_string(), record.game_duration.into()),
        ("game_version".to_string(), record.game_version.as_str().into()),
        ("tier".to_string(), record.tier.as_str().into()),
    ];
    push_team(&mut fields, "blue_team", &record.blue_team);
    push_team(&mut fields, "red_team", &record.red_team);
    fields.push(("blue_team_win".to_string(), record.blue_team_win.into()));
    fields
}

fn push_team(fields: &mut Vec<(String, JsonValue)>, prefix: &str, team: &TeamAggregate) {
    fields.push((format!("{}_kills", prefix), team.kills.into()));
    fields.push((format!("{}_deaths", prefix), team.deaths.into()));
    fields.push((format!("{}_assists", prefix), team.assists.into()));
}

/// Single sheet workbook: header row from the column names, no index column.
pub fn export_xlsx(records: &[NormalizedMatchRecord]) -> Result<ExportArtifact, ExportError> {
    let table = flatten(records);

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    write_table(worksheet, &table)?;

    Ok(ExportArtifact {
        file_name: XLSX_FILE_NAME,
        content_type: XLSX_CONTENT_TYPE,
        bytes: workbook.save_to_buffer()?,
    })
}

fn write_table(worksheet: &mut Worksheet, table: &FlatTable) -> Result<(), XlsxError> {
    for (col, name) in table.columns.iter().enumerate() {
        worksheet.write_string(0, col as u16, name)?;
    }

    for (row_idx, row) in table.rows.iter().enumerate() {
        let row_num = row_idx as u32 + 1;
        for (col, value) in row.iter().enumerate() {
            write_cell(worksheet, row_num, col as u16, value)?;
        }
    }
    Ok(())
}

fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, value: &JsonValue) -> Result<(), XlsxError> {
    match value {
        JsonValue::Null => {}
        JsonValue::Boolean(b) => {
            worksheet.write_boolean(row, col, *b)?;
        }
        JsonValue::Number(_) => {
            if let Some(number) = value.as_f64() {
                worksheet.write_number(row, col, number)?;
            }
        }
        JsonValue::Short(_) | JsonValue::String(_) => {
            worksheet.write_string(row, col, value.as_str().unwrap_or_default())?;
        }
        JsonValue::Object(_) | JsonValue::Array(_) => {
            worksheet.write_string(row, col, value.dump())?;
        }
    }
    Ok(())
}
