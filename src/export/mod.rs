use std::{fs, io, path::Path, path::PathBuf};

use thiserror::Error;

use crate::service::gameapi::parsing::ParsingError;

pub mod structured;
pub mod tabular;

pub const JSON_FILE_NAME: &str = "lol_matches_data.json";
pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const XLSX_FILE_NAME: &str = "lol_matches_data.xlsx";
pub const XLSX_CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// An export ready to be handed out: bytes plus the name and content type it is offered under.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    pub file_name: &'static str,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name);
        fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Workbook generation failed: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
    #[error("Export is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
    #[error("Export is not valid JSON: {0}")]
    Json(#[from] json::Error),
    #[error("Export content invalid: {0}")]
    Content(#[from] ParsingError),
    #[error("Writing export failed: {0}")]
    Io(#[from] io::Error),
}
