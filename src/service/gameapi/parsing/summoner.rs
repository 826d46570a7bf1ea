use json::JsonValue;

use crate::model::{
    ids::{MatchId, SummonerId},
    summoner::PlayerHandle,
};

use super::ParsingError;

pub fn parse_player_handle(json: &JsonValue, requested: &SummonerId) -> Result<PlayerHandle, ParsingError> {
    if let JsonValue::Object(obj) = json {
        let puuid = obj["puuid"]
            .as_str()
            .filter(|p| !p.is_empty())
            .ok_or(ParsingError::InvalidType("puuid".into()))?;
        let id = obj["id"].as_str().map(SummonerId::from).unwrap_or_else(|| requested.clone());

        return Ok(PlayerHandle {
            id,
            puuid: puuid.into(),
        });
    }

    Err(ParsingError::InvalidType("root".into()))
}

pub fn parse_match_ids(json: &JsonValue) -> Result<Vec<MatchId>, ParsingError> {
    if let JsonValue::Array(array) = json {
        return array
            .iter()
            .map(|id| {
                id.as_str()
                    .map(MatchId::from)
                    .ok_or(ParsingError::InvalidType("match id".into()))
            })
            .collect();
    }

    Err(ParsingError::InvalidType("root".into()))
}
