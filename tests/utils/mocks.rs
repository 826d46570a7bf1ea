#![allow(dead_code)] // Not every test file uses every fake

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::Rc,
};

use json::JsonValue;

use tierscope::{
    model::{
        ids::{MatchId, Puuid, SummonerId},
        summoner::{PlayerHandle, TierEntry},
        tier::Tier,
    },
    service::{
        gameapi::LadderApi,
        rate_limit::RateLimiter,
        report::{Reporter, Severity},
    },
};

// ============================================================================
// Ladder
// ============================================================================

/// In-memory ladder. Summoner `s` resolves to puuid `p-s` unless listed as unresolvable.
#[derive(Default)]
pub struct FakeLadder {
    entries: HashMap<Tier, Vec<TierEntry>>,
    match_ids: HashMap<String, Vec<MatchId>>,
    details: HashMap<String, JsonValue>,
    unresolvable: Vec<String>,
    failing_lists: Vec<String>,

    pub entry_calls: RefCell<Vec<Tier>>,
    pub resolve_calls: RefCell<Vec<SummonerId>>,
    pub id_calls: RefCell<Vec<(Puuid, u8)>>,
    pub detail_calls: RefCell<Vec<MatchId>>,
}

impl FakeLadder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tier(mut self, tier: Tier, summoners: &[&str]) -> Self {
        let entries = summoners
            .iter()
            .map(|s| TierEntry {
                summoner_id: SummonerId::from(*s),
                tier,
                division: None,
            })
            .collect();
        self.entries.insert(tier, entries);
        self
    }

    /// Registers the recent match ids of a summoner, each with a detail payload.
    pub fn with_matches(mut self, summoner: &str, ids: &[&str]) -> Self {
        for id in ids {
            self.details.entry(id.to_string()).or_insert_with(|| super::match_detail(id));
        }
        self.match_ids
            .insert(format!("p-{}", summoner), ids.iter().map(|id| MatchId::from(*id)).collect());
        self
    }

    pub fn with_detail(mut self, id: &str, detail: JsonValue) -> Self {
        self.details.insert(id.to_string(), detail);
        self
    }

    pub fn without_detail(mut self, id: &str) -> Self {
        self.details.remove(id);
        self
    }

    pub fn with_unresolvable(mut self, summoner: &str) -> Self {
        self.unresolvable.push(summoner.to_string());
        self
    }

    /// The summoner's match list request fails.
    pub fn with_failing_match_list(mut self, summoner: &str) -> Self {
        self.failing_lists.push(format!("p-{}", summoner));
        self
    }

    pub fn detail_count(&self) -> usize {
        self.detail_calls.borrow().len()
    }
}

impl LadderApi for FakeLadder {
    fn fetch_tier_entries(&self, tier: Tier) -> Vec<TierEntry> {
        self.entry_calls.borrow_mut().push(tier);
        self.entries.get(&tier).cloned().unwrap_or_default()
    }

    fn resolve_player(&self, summoner_id: &SummonerId) -> Option<PlayerHandle> {
        self.resolve_calls.borrow_mut().push(summoner_id.clone());
        if self.unresolvable.iter().any(|s| s == summoner_id.as_str()) {
            return None;
        }
        Some(PlayerHandle {
            id: summoner_id.clone(),
            puuid: Puuid::from(format!("p-{}", summoner_id).as_str()),
        })
    }

    fn fetch_match_ids(&self, puuid: &Puuid, count: u8) -> Option<Vec<MatchId>> {
        self.id_calls.borrow_mut().push((puuid.clone(), count));
        if self.failing_lists.iter().any(|p| p == puuid.as_str()) {
            return None;
        }
        let ids = self
            .match_ids
            .get(puuid.as_str())
            .map(|ids| ids.iter().take(count as usize).cloned().collect())
            .unwrap_or_default();
        Some(ids)
    }

    fn fetch_match_detail(&self, match_id: &MatchId) -> Option<JsonValue> {
        self.detail_calls.borrow_mut().push(match_id.clone());
        self.details.get(match_id.as_str()).cloned()
    }
}

// ============================================================================
// Reporter
// ============================================================================

#[derive(Default)]
pub struct RecordingReporter {
    pub reports: RefCell<Vec<(Severity, String)>>,
    pub finished: RefCell<Vec<(Tier, usize)>>,
}

impl RecordingReporter {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.reports.borrow().iter().filter(|(s, _)| *s == severity).count()
    }

    pub fn messages(&self, severity: Severity) -> Vec<String> {
        self.reports
            .borrow()
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, severity: Severity, message: &str) {
        self.reports.borrow_mut().push((severity, message.to_string()));
    }

    fn tier_finished(&self, tier: Tier, collected: usize, _index: usize, _total: usize) {
        self.finished.borrow_mut().push((tier, collected));
    }
}

// ============================================================================
// Rate limiter
// ============================================================================

/// Never sleeps, only counts how often it was asked to.
#[derive(Clone, Default)]
pub struct CountingLimiter {
    calls: Rc<Cell<usize>>,
}

impl CountingLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl RateLimiter for CountingLimiter {
    fn throttle(&mut self) {
        self.calls.set(self.calls.get() + 1);
    }
}
