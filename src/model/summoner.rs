use super::{
    ids::{Puuid, SummonerId},
    tier::{Division, Tier},
};

/// One player's placement on a ranked ladder.
#[derive(Debug, Clone, PartialEq)]
pub struct TierEntry {
    pub summoner_id: SummonerId,
    pub tier: Tier,
    pub division: Option<Division>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerHandle {
    pub id: SummonerId,
    pub puuid: Puuid,
}
