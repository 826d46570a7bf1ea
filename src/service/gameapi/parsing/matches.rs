use json::{object::Object, JsonValue};

use crate::model::{
    fields::FieldSelection,
    ids::MatchId,
    matches::{PlayerRecord, Side, TeamAggregate, UntaggedMatch, UNKNOWN_POSITION},
};

use super::ParsingError;

/// Builds a normalized match from a match-v5 detail payload.
///
/// Payloads without an `info` object yield `Ok(None)`. Every participant contributes one
/// [`PlayerRecord`] with exactly the selected fields (null when the participant lacks one) and
/// adds its kills, deaths and assists to its side's aggregate. The winner is read from the
/// team-level outcome, never from participant flags.
pub fn extract_match(json: &JsonValue, fields: &FieldSelection) -> Result<Option<UntaggedMatch>, ParsingError> {
    let info = match &json["info"] {
        JsonValue::Object(info) => info,
        _ => return Ok(None),
    };

    let match_id = json["metadata"]["matchId"]
        .as_str()
        .ok_or(ParsingError::InvalidType("metadata/matchId".into()))?;
    let game_duration = info["gameDuration"]
        .as_i64()
        .ok_or(ParsingError::InvalidType("gameDuration".into()))?;
    let game_version = info["gameVersion"]
        .as_str()
        .ok_or(ParsingError::InvalidType("gameVersion".into()))?;

    let mut blue_team = TeamAggregate::default();
    let mut red_team = TeamAggregate::default();
    let mut players = Vec::new();

    if let JsonValue::Array(participants) = &info["participants"] {
        for participant_json in participants {
            if let JsonValue::Object(participant) = participant_json {
                let player = parse_participant(participant, fields)?;

                let team = match player.side {
                    Side::Blue => &mut blue_team,
                    Side::Red => &mut red_team,
                };
                team.add(
                    participant["kills"].as_u32().unwrap_or(0),
                    participant["deaths"].as_u32().unwrap_or(0),
                    participant["assists"].as_u32().unwrap_or(0),
                );

                players.push(player);
            } else {
                return Err(ParsingError::InvalidType("participant".into()));
            }
        }
    } else {
        return Err(ParsingError::InvalidType("participants".into()));
    }

    let blue_team_win = parse_blue_team_win(&info["teams"])?;

    Ok(Some(UntaggedMatch {
        match_id: MatchId::from(match_id),
        game_duration,
        game_version: game_version.to_string(),
        players,
        blue_team,
        red_team,
        blue_team_win,
    }))
}

fn parse_participant(obj: &Object, fields: &FieldSelection) -> Result<PlayerRecord, ParsingError> {
    let team_id = obj["teamId"]
        .as_u16()
        .ok_or(ParsingError::InvalidType("teamId".into()))?;
    let side = Side::from_team_id(team_id).ok_or_else(|| ParsingError::InvalidValue {
        field: "teamId".into(),
        value: team_id.to_string(),
    })?;
    let win = obj["win"].as_bool().ok_or(ParsingError::InvalidType("win".into()))?;

    // Empty strings show up for remakes and non-lane queues
    let position = obj["teamPosition"]
        .as_str()
        .filter(|p| !p.is_empty())
        .unwrap_or(UNKNOWN_POSITION);

    Ok(PlayerRecord {
        fields: fields.iter().map(|f| (f.to_string(), obj[f].clone())).collect(),
        side,
        win,
        position: position.to_string(),
    })
}

fn parse_blue_team_win(teams: &JsonValue) -> Result<bool, ParsingError> {
    let blue_team = teams
        .members()
        .find(|team| team["teamId"].as_u16() == Some(Side::Blue.team_id()))
        .or_else(|| teams.members().next());

    blue_team
        .and_then(|team| team["win"].as_bool())
        .ok_or(ParsingError::InvalidType("teams/win".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participant(team_id: u16, win: bool, kills: u32, deaths: u32, assists: u32, position: &str) -> String {
        format!(
            r#"{{"teamId":{team_id},"win":{win},"kills":{kills},"deaths":{deaths},"assists":{assists},
                "championName":"Ahri","goldEarned":12000,"teamPosition":"{position}"}}"#
        )
    }

    fn payload(participants: &[String], teams: &str) -> JsonValue {
        json::parse(&format!(
            r#"{{"metadata":{{"matchId":"KR_100"}},
                "info":{{"gameDuration":1834,"gameVersion":"14.3.561.1234",
                         "participants":[{}],"teams":{}}}}}"#,
            participants.join(","),
            teams
        ))
        .unwrap()
    }

    fn ten_players() -> Vec<String> {
        (0..10u32)
            .map(|i| {
                let team_id = if i < 5 { 100 } else { 200 };
                participant(team_id, i < 5, i, 10 - i, 2 * i, "MIDDLE")
            })
            .collect()
    }

    const TEAMS: &str = r#"[{"teamId":100,"win":true},{"teamId":200,"win":false}]"#;

    #[test]
    fn keeps_every_participant_and_sums_per_side() {
        let fields = FieldSelection::new(["kills", "deaths", "assists"]).unwrap();
        let extracted = extract_match(&payload(&ten_players(), TEAMS), &fields).unwrap().unwrap();

        assert_eq!(extracted.match_id, MatchId::from("KR_100"));
        assert_eq!(extracted.game_duration, 1834);
        assert_eq!(extracted.players.len(), 10);
        assert_eq!(extracted.blue_team, TeamAggregate { kills: 10, deaths: 40, assists: 20 });
        assert_eq!(extracted.red_team, TeamAggregate { kills: 35, deaths: 15, assists: 70 });

        for side in [Side::Blue, Side::Red] {
            let kills: u32 = extracted
                .players
                .iter()
                .filter(|p| p.side == side)
                .map(|p| p.get("kills").and_then(|k| k.as_u32()).unwrap())
                .sum();
            let team = if side == Side::Blue { &extracted.blue_team } else { &extracted.red_team };
            assert_eq!(kills, team.kills);
        }
    }

    #[test]
    fn missing_fields_become_null_but_keep_their_key() {
        let fields = FieldSelection::new(["championName", "visionScore"]).unwrap();
        let extracted = extract_match(&payload(&ten_players(), TEAMS), &fields).unwrap().unwrap();

        let first = &extracted.players[0];
        let keys = first.fields.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>();
        assert_eq!(keys, vec!["championName", "visionScore"]);
        assert_eq!(first.get("championName"), Some(&JsonValue::from("Ahri")));
        assert_eq!(first.get("visionScore"), Some(&JsonValue::Null));
    }

    #[test]
    fn position_defaults_to_unknown() {
        let players = vec![
            participant(100, true, 1, 1, 1, ""),
            r#"{"teamId":200,"win":false,"kills":2}"#.to_string(),
        ];
        let extracted = extract_match(&payload(&players, TEAMS), &FieldSelection::default())
            .unwrap()
            .unwrap();

        assert!(extracted.players.iter().all(|p| p.position == UNKNOWN_POSITION));
        assert_eq!(extracted.red_team, TeamAggregate { kills: 2, deaths: 0, assists: 0 });
    }

    #[test]
    fn blue_win_comes_from_team_outcome() {
        // Participant flags claim blue won; the team entry is authoritative
        let teams = r#"[{"teamId":200,"win":true},{"teamId":100,"win":false}]"#;
        let extracted = extract_match(&payload(&ten_players(), teams), &FieldSelection::default())
            .unwrap()
            .unwrap();
        assert!(!extracted.blue_team_win);
        assert!(extracted.players[0].win);
    }

    #[test]
    fn blue_win_falls_back_to_first_team_entry() {
        let extracted = extract_match(&payload(&ten_players(), r#"[{"win":true},{"win":false}]"#), &FieldSelection::default())
            .unwrap()
            .unwrap();
        assert!(extracted.blue_team_win);
    }

    #[test]
    fn payload_without_info_is_absent() {
        let json = json::parse(r#"{"metadata":{"matchId":"KR_1"}}"#).unwrap();
        assert_eq!(extract_match(&json, &FieldSelection::default()), Ok(None));
        assert_eq!(extract_match(&JsonValue::Null, &FieldSelection::default()), Ok(None));
    }

    #[test]
    fn unknown_team_id_is_malformed() {
        let players = vec![participant(300, true, 1, 1, 1, "TOP")];
        let err = extract_match(&payload(&players, TEAMS), &FieldSelection::default()).unwrap_err();
        assert_eq!(
            err,
            ParsingError::InvalidValue {
                field: "teamId".into(),
                value: "300".into()
            }
        );
    }

    #[test]
    fn missing_team_outcome_is_malformed() {
        let err = extract_match(&payload(&ten_players(), "[]"), &FieldSelection::default()).unwrap_err();
        assert_eq!(err, ParsingError::InvalidType("teams/win".into()));
    }
}
