use json::{object::Object, JsonValue};

use crate::{
    model::matches::{NormalizedMatchRecord, PlayerRecord, TeamAggregate},
    service::gameapi::parsing::records::parse_match_records,
};

use super::{ExportArtifact, ExportError, JSON_CONTENT_TYPE, JSON_FILE_NAME};

const INDENT: u16 = 4;

/// Pretty printed JSON array of all records. Non-ASCII text is written as is.
pub fn export_json(records: &[NormalizedMatchRecord]) -> ExportArtifact {
    ExportArtifact {
        file_name: JSON_FILE_NAME,
        content_type: JSON_CONTENT_TYPE,
        bytes: records_to_json(records).pretty(INDENT).into_bytes(),
    }
}

/// Reads records back from the bytes produced by [`export_json`].
pub fn load_json(bytes: &[u8]) -> Result<Vec<NormalizedMatchRecord>, ExportError> {
    let text = std::str::from_utf8(bytes)?;
    let json = json::parse(text)?;
    Ok(parse_match_records(&json)?)
}

pub fn records_to_json(records: &[NormalizedMatchRecord]) -> JsonValue {
    JsonValue::Array(records.iter().map(record_to_json).collect())
}

pub fn record_to_json(record: &NormalizedMatchRecord) -> JsonValue {
    let mut obj = Object::new();
    obj.insert("match_id", record.match_id.as_str().into());
    obj.insert("game_duration", record.game_duration.into());
    obj.insert("game_version", record.game_version.as_str().into());
    obj.insert(
        "players",
        JsonValue::Array(record.players.iter().map(player_to_json).collect()),
    );
    obj.insert("blue_team", team_to_json(&record.blue_team));
    obj.insert("red_team", team_to_json(&record.red_team));
    obj.insert("blue_team_win", record.blue_team_win.into());
    obj.insert("tier", record.tier.as_str().into());
    JsonValue::Object(obj)
}

pub(crate) fn player_to_json(player: &PlayerRecord) -> JsonValue {
    let mut obj = Object::new();
    for (field, value) in &player.fields {
        obj.insert(field, value.clone());
    }
    obj.insert("teamId", player.side.team_id().into());
    obj.insert("win", player.win.into());
    obj.insert("position", player.position.as_str().into());
    JsonValue::Object(obj)
}

fn team_to_json(team: &TeamAggregate) -> JsonValue {
    let mut obj = Object::new();
    obj.insert("kills", team.kills.into());
    obj.insert("deaths", team.deaths.into());
    obj.insert("assists", team.assists.into());
    JsonValue::Object(obj)
}
