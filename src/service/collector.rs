use std::{collections::HashSet, rc::Rc};

use chrono::{DateTime, Local};
use json::JsonValue;
use rand::{rngs::StdRng, seq::index, Rng, SeedableRng};

use crate::{
    config::TierConfig,
    model::{
        fields::FieldSelection,
        ids::MatchId,
        matches::{NormalizedMatchRecord, UntaggedMatch},
        summoner::TierEntry,
        tier::{SamplingMode, Tier},
    },
};

use super::{
    gameapi::{parsing::matches::extract_match, LadderApi},
    rate_limit::RateLimiter,
    report::{Reporter, Severity},
};

/// Players sampled per tier. Quotas are small compared to what 20 players yield.
pub const SAMPLE_SIZE: usize = 20;
/// Recent matches looked at per sampled player.
pub const MATCHES_PER_PLAYER: u8 = 5;

/// One collection run over any number of tiers.
///
/// Owns the set of match ids already processed, so a match reachable through several
/// players (or tiers) is fetched once per run. Separate runs never share that state.
pub struct CollectionRun<'a, A: LadderApi> {
    api: &'a A,
    fields: FieldSelection,
    limiter: Box<dyn RateLimiter>,
    reporter: Rc<dyn Reporter>,
    rng: StdRng,
    seen: HashSet<MatchId>,
}

impl<'a, A: LadderApi> CollectionRun<'a, A> {
    pub fn new(api: &'a A, fields: FieldSelection, limiter: Box<dyn RateLimiter>, reporter: Rc<dyn Reporter>) -> Self {
        Self {
            api,
            fields,
            limiter,
            reporter,
            rng: StdRng::from_os_rng(),
            seen: HashSet::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn seen_matches(&self) -> usize {
        self.seen.len()
    }

    /// Collects every configured tier in order. A tier without ladder entries only ends that tier.
    pub fn collect_all(&mut self, configs: &[TierConfig]) -> CollectionOutcome {
        let started_at = Local::now();
        let mut records = Vec::new();
        let mut per_tier = Vec::new();

        for (index, config) in configs.iter().enumerate() {
            self.reporter.tier_started(config.tier, index, configs.len());
            let tier_records = self.collect_tier(config);
            self.reporter
                .tier_finished(config.tier, tier_records.len(), index, configs.len());

            per_tier.push((config.tier, tier_records.len()));
            records.extend(tier_records);
        }

        CollectionOutcome {
            records,
            per_tier,
            started_at,
            finished_at: Local::now(),
        }
    }

    /// Gathers at most `config.quota` new matches for one tier, in discovery order.
    pub fn collect_tier(&mut self, config: &TierConfig) -> Vec<NormalizedMatchRecord> {
        let tier = config.tier;
        let quota = config.quota as usize;
        let mut records = Vec::new();

        let entries = self.api.fetch_tier_entries(tier);
        if entries.is_empty() {
            self.reporter
                .report(Severity::Error, &format!("No ladder entries found for {}", tier));
            return records;
        }

        let selected = select_entries(entries, config.sampling, &mut self.rng);
        tracing::debug!(%tier, players = selected.len(), "sampled ladder entries");

        for entry in selected {
            if records.len() >= quota {
                break;
            }

            let Some(player) = self.api.resolve_player(&entry.summoner_id) else {
                self.reporter.report(
                    Severity::Warning,
                    &format!("Skipping {} player {}: summoner not found", tier, entry.summoner_id),
                );
                continue;
            };

            let Some(match_ids) = self.api.fetch_match_ids(&player.puuid, MATCHES_PER_PLAYER) else {
                continue;
            };
            if match_ids.is_empty() {
                self.reporter
                    .report(Severity::Info, &format!("No recent matches for {} player {}", tier, player.id));
                continue;
            }

            for match_id in match_ids {
                if records.len() >= quota {
                    break;
                }
                if !self.seen.insert(match_id.clone()) {
                    continue;
                }

                let extracted = self
                    .api
                    .fetch_match_detail(&match_id)
                    .and_then(|detail| self.extract(&detail, &match_id));
                if let Some(extracted) = extracted {
                    records.push(extracted.tag(tier));
                }

                self.limiter.throttle();
            }
        }

        if records.len() < quota {
            self.reporter.report(
                Severity::Info,
                &format!("{}: collected {} of {} requested matches", tier, records.len(), quota),
            );
        }
        records
    }

    fn extract(&self, detail: &JsonValue, match_id: &MatchId) -> Option<UntaggedMatch> {
        match extract_match(detail, &self.fields) {
            Ok(Some(extracted)) => Some(extracted),
            Ok(None) => {
                tracing::debug!(%match_id, "match payload without info section");
                None
            }
            Err(err) => {
                self.reporter
                    .report(Severity::Warning, &format!("Match {} is malformed: {}", match_id, err));
                None
            }
        }
    }
}

/// Picks the players a tier is sampled from: a uniform draw without replacement, or the first
/// [`SAMPLE_SIZE`] entries in ladder order.
pub fn select_entries<R: Rng + ?Sized>(entries: Vec<TierEntry>, mode: SamplingMode, rng: &mut R) -> Vec<TierEntry> {
    let amount = SAMPLE_SIZE.min(entries.len());
    match mode {
        SamplingMode::Sequential => entries.into_iter().take(amount).collect(),
        SamplingMode::Random => index::sample(rng, entries.len(), amount)
            .into_iter()
            .map(|i| entries[i].clone())
            .collect(),
    }
}

pub struct CollectionOutcome {
    pub records: Vec<NormalizedMatchRecord>,
    pub per_tier: Vec<(Tier, usize)>,
    pub started_at: DateTime<Local>,
    pub finished_at: DateTime<Local>,
}

impl CollectionOutcome {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn elapsed(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}
