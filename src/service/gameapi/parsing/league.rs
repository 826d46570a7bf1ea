use json::{object::Object, JsonValue};

use crate::model::{
    summoner::TierEntry,
    tier::{Division, Tier},
};

use super::ParsingError;

/// Parses a challenger/grandmaster/master league object.
pub fn parse_apex_league(json: &JsonValue, tier: Tier) -> Result<Vec<TierEntry>, ParsingError> {
    if let JsonValue::Object(obj) = json {
        return parse_entry_list(&obj["entries"], tier, None);
    }

    Err(ParsingError::InvalidType("root".into()))
}

/// Parses the entry list of one division of a non-apex tier.
pub fn parse_division_entries(json: &JsonValue, tier: Tier, division: Division) -> Result<Vec<TierEntry>, ParsingError> {
    parse_entry_list(json, tier, Some(division))
}

fn parse_entry_list(json: &JsonValue, tier: Tier, division: Option<Division>) -> Result<Vec<TierEntry>, ParsingError> {
    if let JsonValue::Array(array) = json {
        let mut entries = Vec::new();

        for entry_json in array {
            if let JsonValue::Object(entry_obj) = entry_json {
                match parse_entry_obj(entry_obj, tier, division) {
                    Some(entry) => entries.push(entry),
                    None => tracing::debug!(%tier, "ladder entry without summonerId skipped"),
                }
            } else {
                return Err(ParsingError::InvalidType("entry".into()));
            }
        }

        return Ok(entries);
    }

    Err(ParsingError::InvalidType("entries".into()))
}

fn parse_entry_obj(obj: &Object, tier: Tier, division: Option<Division>) -> Option<TierEntry> {
    let summoner_id = obj["summonerId"].as_str()?;
    if summoner_id.is_empty() {
        return None;
    }

    Some(TierEntry {
        summoner_id: summoner_id.into(),
        tier,
        division,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apex_league_reads_entries_list() {
        let json = json::parse(
            r#"{"tier":"CHALLENGER","entries":[
                {"summonerId":"a","leaguePoints":1500,"rank":"I"},
                {"summonerId":"b","leaguePoints":1200,"rank":"I"}
            ]}"#,
        )
        .unwrap();

        let entries = parse_apex_league(&json, Tier::Challenger).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].summoner_id.as_str(), "a");
        assert_eq!(entries[1].division, None);
    }

    #[test]
    fn apex_league_without_entries_is_invalid() {
        let json = json::parse(r#"{"tier":"MASTER"}"#).unwrap();
        assert_eq!(
            parse_apex_league(&json, Tier::Master),
            Err(ParsingError::InvalidType("entries".into()))
        );
    }

    #[test]
    fn division_entries_keep_service_order_and_skip_missing_ids() {
        let json = json::parse(r#"[{"summonerId":"x"},{"leaguePoints":3},{"summonerId":"y"}]"#).unwrap();

        let entries = parse_division_entries(&json, Tier::Gold, Division::III).unwrap();
        let ids = entries.iter().map(|e| e.summoner_id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["x", "y"]);
        assert!(entries.iter().all(|e| e.division == Some(Division::III) && e.tier == Tier::Gold));
    }
}
