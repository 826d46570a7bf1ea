#![allow(dead_code)]

use json::JsonValue;

/// Ten participant match-v5 payload. Participant `i` has `i` kills, `10 - i` deaths and
/// `2 * i` assists; the first five play for blue, which wins.
pub fn match_detail(match_id: &str) -> JsonValue {
    match_detail_with_teams(match_id, r#"[{"teamId":100,"win":true},{"teamId":200,"win":false}]"#)
}

pub fn match_detail_with_teams(match_id: &str, teams: &str) -> JsonValue {
    let positions = ["TOP", "JUNGLE", "MIDDLE", "BOTTOM", "UTILITY"];
    let participants = (0..10u32)
        .map(|i| {
            let team_id = if i < 5 { 100 } else { 200 };
            format!(
                r#"{{"teamId":{},"win":{},"kills":{},"deaths":{},"assists":{},
                    "championName":"Champ{}","goldEarned":{},"teamPosition":"{}"}}"#,
                team_id,
                i < 5,
                i,
                10 - i,
                2 * i,
                i,
                8000 + 100 * i,
                positions[(i % 5) as usize]
            )
        })
        .collect::<Vec<_>>()
        .join(",");

    json::parse(&format!(
        r#"{{"metadata":{{"matchId":"{}"}},
            "info":{{"gameDuration":1700,"gameVersion":"14.3.561.1234",
                     "participants":[{}],"teams":{}}}}}"#,
        match_id, participants, teams
    ))
    .unwrap()
}
