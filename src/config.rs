use std::{path::PathBuf, str::FromStr, time::Duration};

use clap::Parser;
use thiserror::Error;

use crate::{
    model::{
        fields::{FieldError, FieldSelection, DEFAULT_FIELDS},
        tier::{SamplingMode, Tier, TierParseError},
    },
    service::rate_limit::InvalidRate,
};

pub const DEFAULT_QUOTA: u32 = 3;
pub const MAX_QUOTA: u32 = 50;
pub const DEFAULT_DELAY_MS: u64 = 1200;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Tier(#[from] TierParseError),
    #[error("Invalid quota '{0}', expected a number between 1 and 50")]
    InvalidQuota(String),
    #[error("Invalid tier spec '{0}', expected TIER[:QUOTA[:MODE]]")]
    InvalidTierSpec(String),
    #[error("Tier {0} was given more than once")]
    DuplicateTier(Tier),
    #[error(transparent)]
    Fields(#[from] FieldError),
    #[error(transparent)]
    Rate(#[from] InvalidRate),
}

/// Collection settings for one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierConfig {
    pub tier: Tier,
    pub quota: u32,
    pub sampling: SamplingMode,
}

impl TierConfig {
    pub fn new(tier: Tier, quota: u32, sampling: SamplingMode) -> Self {
        Self { tier, quota, sampling }
    }
}

impl FromStr for TierConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s.split(':').collect::<Vec<_>>();
        if parts.is_empty() || parts.len() > 3 {
            return Err(ConfigError::InvalidTierSpec(s.to_string()));
        }

        let tier = parts[0].parse::<Tier>()?;
        let quota = match parts.get(1) {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|q| (1..=MAX_QUOTA).contains(q))
                .ok_or_else(|| ConfigError::InvalidQuota(raw.to_string()))?,
            None => DEFAULT_QUOTA,
        };
        let sampling = match parts.get(2) {
            Some(raw) => raw.parse::<SamplingMode>()?,
            None => SamplingMode::default(),
        };

        Ok(TierConfig { tier, quota, sampling })
    }
}

/// Collect ranked match statistics per tier from the Riot Games API
#[derive(Parser, Debug)]
#[command(name = "tierscope")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Riot Games API key
    #[arg(long = "api-key", env = "RIOT_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Tier to collect as TIER[:QUOTA[:MODE]], MODE being 'top' or 'random'. Repeatable.
    #[arg(short = 't', long = "tier", default_value = "CHALLENGER:3:top")]
    pub tiers: Vec<String>,

    /// Comma separated participant fields to extract
    #[arg(short = 'f', long = "fields", value_delimiter = ',', default_values = DEFAULT_FIELDS)]
    pub fields: Vec<String>,

    /// Platform routing value for league and summoner endpoints
    #[arg(long, default_value = "kr")]
    pub platform: String,

    /// Regional routing value for match endpoints
    #[arg(long, default_value = "asia")]
    pub region: String,

    /// Override the platform base url
    #[arg(long = "platform-url")]
    pub platform_url: Option<String>,

    /// Override the regional base url
    #[arg(long = "region-url")]
    pub region_url: Option<String>,

    /// Fixed pause after every match detail request, in milliseconds
    #[arg(long = "delay-ms", default_value_t = DEFAULT_DELAY_MS)]
    pub delay_ms: u64,

    /// Use a token bucket allowing this many match detail requests per second instead of a fixed pause
    #[arg(long = "rate-per-sec")]
    pub rate_per_sec: Option<f64>,

    /// Seed for random player sampling
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory the export files are written to
    #[arg(short = 'o', long = "out-dir", default_value = ".")]
    pub out_dir: PathBuf,

    /// Skip the spreadsheet export
    #[arg(long = "no-xlsx")]
    pub no_xlsx: bool,

    /// Number of collected matches to print as a preview
    #[arg(long, default_value_t = 5)]
    pub preview: usize,
}

impl Args {
    pub fn tier_configs(&self) -> Result<Vec<TierConfig>, ConfigError> {
        let mut configs: Vec<TierConfig> = Vec::new();
        for spec in &self.tiers {
            let config = spec.parse::<TierConfig>()?;
            if configs.iter().any(|c| c.tier == config.tier) {
                return Err(ConfigError::DuplicateTier(config.tier));
            }
            configs.push(config);
        }
        Ok(configs)
    }

    pub fn field_selection(&self) -> Result<FieldSelection, ConfigError> {
        Ok(FieldSelection::new(&self.fields)?)
    }

    pub fn platform_base_url(&self) -> String {
        self.platform_url
            .clone()
            .unwrap_or_else(|| format!("https://{}.api.riotgames.com", self.platform))
    }

    pub fn regional_base_url(&self) -> String {
        self.region_url
            .clone()
            .unwrap_or_else(|| format!("https://{}.api.riotgames.com", self.region))
    }

    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
