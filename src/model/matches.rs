use json::JsonValue;

use super::{ids::MatchId, tier::Tier};

pub const UNKNOWN_POSITION: &str = "UNKNOWN";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Blue,
    Red,
}

impl Side {
    pub fn from_team_id(team_id: u16) -> Option<Side> {
        match team_id {
            100 => Some(Side::Blue),
            200 => Some(Side::Red),
            _ => None,
        }
    }

    pub fn team_id(&self) -> u16 {
        match self {
            Side::Blue => 100,
            Side::Red => 200,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TeamAggregate {
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
}

impl TeamAggregate {
    pub fn add(&mut self, kills: u32, deaths: u32, assists: u32) {
        self.kills += kills;
        self.deaths += deaths;
        self.assists += assists;
    }
}

/// Per-participant row: the selected fields in selection order, followed by the
/// side, win flag and position that every record carries.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    pub fields: Vec<(String, JsonValue)>,
    pub side: Side,
    pub win: bool,
    pub position: String,
}

impl PlayerRecord {
    pub fn get(&self, field: &str) -> Option<&JsonValue> {
        self.fields.iter().find(|(name, _)| name == field).map(|(_, value)| value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedMatchRecord {
    pub match_id: MatchId,
    pub game_duration: i64,
    pub game_version: String,
    pub tier: Tier,
    pub players: Vec<PlayerRecord>,
    pub blue_team: TeamAggregate,
    pub red_team: TeamAggregate,
    pub blue_team_win: bool,
}

impl NormalizedMatchRecord {
    pub fn team(&self, side: Side) -> &TeamAggregate {
        match side {
            Side::Blue => &self.blue_team,
            Side::Red => &self.red_team,
        }
    }
}

/// Extracted match that has not yet been attributed to the tier it was sampled under.
#[derive(Debug, Clone, PartialEq)]
pub struct UntaggedMatch {
    pub match_id: MatchId,
    pub game_duration: i64,
    pub game_version: String,
    pub players: Vec<PlayerRecord>,
    pub blue_team: TeamAggregate,
    pub red_team: TeamAggregate,
    pub blue_team_win: bool,
}

impl UntaggedMatch {
    pub fn tag(self, tier: Tier) -> NormalizedMatchRecord {
        NormalizedMatchRecord {
            match_id: self.match_id,
            game_duration: self.game_duration,
            game_version: self.game_version,
            tier,
            players: self.players,
            blue_team: self.blue_team,
            red_team: self.red_team,
            blue_team_win: self.blue_team_win,
        }
    }
}
