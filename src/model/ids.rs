use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SummonerId(String);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Puuid(String);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchId(String);

impl SummonerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Puuid {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl MatchId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SummonerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for Puuid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for MatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SummonerId {
    fn from(value: &str) -> Self {
        SummonerId(value.to_string())
    }
}

impl From<String> for SummonerId {
    fn from(value: String) -> Self {
        SummonerId(value)
    }
}

impl From<&str> for Puuid {
    fn from(value: &str) -> Self {
        Puuid(value.to_string())
    }
}

impl From<&str> for MatchId {
    fn from(value: &str) -> Self {
        MatchId(value.to_string())
    }
}

impl From<String> for MatchId {
    fn from(value: String) -> Self {
        MatchId(value)
    }
}
