use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TierParseError {
    #[error("Unknown tier: {0}")]
    UnknownTier(String),
    #[error("Unknown sampling mode '{0}', expected 'top', 'sequential' or 'random'")]
    UnknownSamplingMode(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Challenger,
    Grandmaster,
    Master,
    Diamond,
    Emerald,
    Platinum,
    Gold,
    Silver,
    Bronze,
    Iron,
}

impl Tier {
    pub const ALL: [Tier; 10] = [
        Tier::Challenger,
        Tier::Grandmaster,
        Tier::Master,
        Tier::Diamond,
        Tier::Emerald,
        Tier::Platinum,
        Tier::Gold,
        Tier::Silver,
        Tier::Bronze,
        Tier::Iron,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Challenger => "CHALLENGER",
            Tier::Grandmaster => "GRANDMASTER",
            Tier::Master => "MASTER",
            Tier::Diamond => "DIAMOND",
            Tier::Emerald => "EMERALD",
            Tier::Platinum => "PLATINUM",
            Tier::Gold => "GOLD",
            Tier::Silver => "SILVER",
            Tier::Bronze => "BRONZE",
            Tier::Iron => "IRON",
        }
    }

    /// Apex tiers have a single league ladder and no divisions.
    pub fn is_apex(&self) -> bool {
        matches!(self, Tier::Challenger | Tier::Grandmaster | Tier::Master)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Tier {
    type Err = TierParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Tier::ALL
            .into_iter()
            .find(|tier| tier.as_str() == upper)
            .ok_or_else(|| TierParseError::UnknownTier(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Division {
    I,
    II,
    III,
    IV,
}

impl Division {
    /// Request order for non-apex ladders.
    pub const ALL: [Division; 4] = [Division::I, Division::II, Division::III, Division::IV];

    pub fn as_str(&self) -> &'static str {
        match self {
            Division::I => "I",
            Division::II => "II",
            Division::III => "III",
            Division::IV => "IV",
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamplingMode {
    #[default]
    Sequential,
    Random,
}

impl FromStr for SamplingMode {
    type Err = TierParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" | "sequential" => Ok(SamplingMode::Sequential),
            "random" => Ok(SamplingMode::Random),
            _ => Err(TierParseError::UnknownSamplingMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("CHALLENGER", Tier::Challenger)]
    #[case("grandmaster", Tier::Grandmaster)]
    #[case(" Emerald ", Tier::Emerald)]
    #[case("iron", Tier::Iron)]
    fn parses_tier_names(#[case] input: &str, #[case] expected: Tier) {
        assert_eq!(input.parse::<Tier>().unwrap(), expected);
    }

    #[test]
    fn rejects_unknown_tier() {
        assert!(matches!("WOOD".parse::<Tier>(), Err(TierParseError::UnknownTier(_))));
    }

    #[test]
    fn only_top_three_tiers_are_apex() {
        let apex = Tier::ALL.iter().filter(|t| t.is_apex()).count();
        assert_eq!(apex, 3);
        assert!(!Tier::Diamond.is_apex());
    }

    #[rstest]
    #[case("top", SamplingMode::Sequential)]
    #[case("Sequential", SamplingMode::Sequential)]
    #[case("RANDOM", SamplingMode::Random)]
    fn parses_sampling_modes(#[case] input: &str, #[case] expected: SamplingMode) {
        assert_eq!(input.parse::<SamplingMode>().unwrap(), expected);
    }
}
