use std::collections::HashSet;

use once_cell::sync::Lazy;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FieldError {
    #[error("Unknown participant field: {0}")]
    UnknownField(String),
    #[error("At least one participant field must be selected")]
    NoFieldsSelected,
}

/// Participant attributes that can be requested for extraction.
pub const FIELD_CATALOG: [&str; 13] = [
    "championId",
    "championName",
    "kills",
    "deaths",
    "assists",
    "totalDamageDealt",
    "totalDamageTaken",
    "goldEarned",
    "wardsPlaced",
    "wardsKilled",
    "visionScore",
    "totalMinionsKilled",
    "neutralMinionsKilled",
];

pub const DEFAULT_FIELDS: [&str; 4] = ["championName", "kills", "deaths", "assists"];

static CATALOG_LOOKUP: Lazy<HashSet<&'static str>> = Lazy::new(|| FIELD_CATALOG.into_iter().collect());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSelection {
    fields: Vec<String>,
}

impl FieldSelection {
    /// Validates against the catalog; duplicates are dropped keeping first occurrence.
    pub fn new<I, S>(fields: I) -> Result<Self, FieldError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selected: Vec<String> = Vec::new();
        for field in fields {
            let field = field.as_ref().trim();
            if !CATALOG_LOOKUP.contains(field) {
                return Err(FieldError::UnknownField(field.to_string()));
            }
            if !selected.iter().any(|f| f == field) {
                selected.push(field.to_string());
            }
        }

        if selected.is_empty() {
            return Err(FieldError::NoFieldsSelected);
        }
        Ok(Self { fields: selected })
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Default for FieldSelection {
    fn default() -> Self {
        Self {
            fields: DEFAULT_FIELDS.iter().map(|f| f.to_string()).collect(),
        }
    }
}
