use thiserror::Error;

pub mod league;
pub mod matches;
pub mod records;
pub mod summoner;

#[derive(Debug, Error, PartialEq)]
pub enum ParsingError {
    #[error("Invalid type for field: {0}")]
    InvalidType(String),
    #[error("Invalid value for field {field}: {value}")]
    InvalidValue { field: String, value: String },
}
