use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{LogStore, StoreError};
use crate::models::LogRecord;

/// On-disk encoding of the log file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum StoreFormat {
    /// A single JSON array of record objects
    #[default]
    #[serde(rename = "json")]
    Json,
    /// Newline-delimited JSON, one record object per line
    #[serde(rename = "jsonl")]
    JsonLines,
}

impl fmt::Display for StoreFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreFormat::Json => f.write_str("json"),
            StoreFormat::JsonLines => f.write_str("jsonl"),
        }
    }
}

/// Log store backed by a single file on disk.
///
/// The file is opened, read in full and parsed on every call. Nothing is
/// locked, so concurrent calls each see their own snapshot of the file.
#[derive(Debug, Clone)]
pub struct FileLogStore {
    path: PathBuf,
    format: StoreFormat,
}

impl FileLogStore {
    pub fn new(path: impl Into<PathBuf>, format: StoreFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> StoreFormat {
        self.format
    }

    fn malformed(&self, reason: String) -> StoreError {
        StoreError::Malformed {
            path: self.path.clone(),
            reason,
        }
    }
}

#[async_trait]
impl LogStore for FileLogStore {
    async fn load_all(&self) -> Result<Vec<LogRecord>, StoreError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| StoreError::Unavailable {
                path: self.path.clone(),
                source,
            })?;

        let records = parse_records(&bytes, self.format).map_err(|reason| self.malformed(reason))?;

        debug!(
            path = %self.path.display(),
            format = %self.format,
            records = records.len(),
            "Loaded log store"
        );

        Ok(records)
    }
}

/// Parse the raw file content. All-or-nothing: the first bad record fails the whole read.
fn parse_records(bytes: &[u8], format: StoreFormat) -> Result<Vec<LogRecord>, String> {
    let records = match format {
        StoreFormat::Json => serde_json::from_slice::<Vec<LogRecord>>(bytes)
            .map_err(|e| format!("invalid JSON array: {}", e))?,
        StoreFormat::JsonLines => parse_json_lines(bytes)?,
    };

    check_levels(&records)?;
    Ok(records)
}

fn parse_json_lines(bytes: &[u8]) -> Result<Vec<LogRecord>, String> {
    let text = std::str::from_utf8(bytes).map_err(|e| format!("invalid UTF-8: {}", e))?;

    let mut records = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record = serde_json::from_str::<LogRecord>(line)
            .map_err(|e| format!("line {}: {}", idx + 1, e))?;
        records.push(record);
    }

    Ok(records)
}

fn check_levels(records: &[LogRecord]) -> Result<(), String> {
    match records.iter().position(|r| r.level.trim().is_empty()) {
        Some(idx) => Err(format!("record {} has an empty level", idx + 1)),
        None => Ok(()),
    }
}
