use json::{object::Object, JsonValue};

use crate::model::{
    ids::MatchId,
    matches::{NormalizedMatchRecord, PlayerRecord, Side, TeamAggregate},
    tier::Tier,
};

use super::ParsingError;

/// Reads back a structured export into match records.
pub fn parse_match_records(json: &JsonValue) -> Result<Vec<NormalizedMatchRecord>, ParsingError> {
    if let JsonValue::Array(array) = json {
        let mut records = Vec::new();

        for record_json in array {
            if let JsonValue::Object(record_obj) = record_json {
                records.push(parse_record_obj(record_obj)?);
            } else {
                return Err(ParsingError::InvalidType("record".into()));
            }
        }

        return Ok(records);
    }

    Err(ParsingError::InvalidType("root".into()))
}

fn parse_record_obj(obj: &Object) -> Result<NormalizedMatchRecord, ParsingError> {
    let match_id = obj["match_id"]
        .as_str()
        .ok_or(ParsingError::InvalidType("match_id".into()))?;
    let game_duration = obj["game_duration"]
        .as_i64()
        .ok_or(ParsingError::InvalidType("game_duration".into()))?;
    let game_version = obj["game_version"]
        .as_str()
        .ok_or(ParsingError::InvalidType("game_version".into()))?;
    let tier_name = obj["tier"].as_str().ok_or(ParsingError::InvalidType("tier".into()))?;
    let tier = tier_name.parse::<Tier>().map_err(|_| ParsingError::InvalidValue {
        field: "tier".into(),
        value: tier_name.to_string(),
    })?;
    let blue_team_win = obj["blue_team_win"]
        .as_bool()
        .ok_or(ParsingError::InvalidType("blue_team_win".into()))?;

    let players = match &obj["players"] {
        JsonValue::Array(players) => players.iter().map(parse_player).collect::<Result<Vec<_>, _>>()?,
        _ => return Err(ParsingError::InvalidType("players".into())),
    };

    Ok(NormalizedMatchRecord {
        match_id: MatchId::from(match_id),
        game_duration,
        game_version: game_version.to_string(),
        tier,
        players,
        blue_team: parse_team(&obj["blue_team"], "blue_team")?,
        red_team: parse_team(&obj["red_team"], "red_team")?,
        blue_team_win,
    })
}

fn parse_player(json: &JsonValue) -> Result<PlayerRecord, ParsingError> {
    if let JsonValue::Object(obj) = json {
        let team_id = obj["teamId"]
            .as_u16()
            .ok_or(ParsingError::InvalidType("teamId".into()))?;
        let side = Side::from_team_id(team_id).ok_or_else(|| ParsingError::InvalidValue {
            field: "teamId".into(),
            value: team_id.to_string(),
        })?;
        let win = obj["win"].as_bool().ok_or(ParsingError::InvalidType("win".into()))?;
        let position = obj["position"]
            .as_str()
            .ok_or(ParsingError::InvalidType("position".into()))?;

        let fields = obj
            .iter()
            .filter(|(key, _)| !matches!(*key, "teamId" | "win" | "position"))
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect();

        return Ok(PlayerRecord {
            fields,
            side,
            win,
            position: position.to_string(),
        });
    }

    Err(ParsingError::InvalidType("player".into()))
}

fn parse_team(json: &JsonValue, name: &str) -> Result<TeamAggregate, ParsingError> {
    let stat = |key: &str| {
        json[key]
            .as_u32()
            .ok_or_else(|| ParsingError::InvalidType(format!("{}/{}", name, key)))
    };

    Ok(TeamAggregate {
        kills: stat("kills")?,
        deaths: stat("deaths")?,
        assists: stat("assists")?,
    })
}
