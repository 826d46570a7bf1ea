use json::JsonValue;

use crate::model::{
    ids::{MatchId, Puuid, SummonerId},
    summoner::{PlayerHandle, TierEntry},
    tier::Tier,
};

pub mod client;
pub mod parsing;

/// Ladder lookups needed for one collection run.
///
/// Implementations absorb transport and payload failures: they report them and return an
/// empty or absent result instead of an error.
pub trait LadderApi {
    /// All ranked solo entries of a tier. Non-apex tiers are listed division by division, I to IV.
    fn fetch_tier_entries(&self, tier: Tier) -> Vec<TierEntry>;

    fn resolve_player(&self, summoner_id: &SummonerId) -> Option<PlayerHandle>;

    /// Up to `count` most recent match ids, newest first. `None` when the list could not be
    /// loaded; the failure has already been reported.
    fn fetch_match_ids(&self, puuid: &Puuid, count: u8) -> Option<Vec<MatchId>>;

    fn fetch_match_detail(&self, match_id: &MatchId) -> Option<JsonValue>;
}
