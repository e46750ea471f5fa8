//! Log store gateway
//!
//! Translates a persisted log resource into an in-memory, ordered collection
//! of [`LogRecord`]s. The [`LogStore`] trait is the seam between the viewer and
//! whatever backs the records; [`FileLogStore`] is the file-based implementation.

pub mod file;

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use crate::models::LogRecord;

pub use file::{FileLogStore, StoreFormat};

/// Coarse classification of a store failure, stable across backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The backing resource could not be opened or read
    ResourceUnavailable,
    /// The resource was read but its content does not match the expected encoding
    ParseFailure,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("log store {} is unavailable: {}", .path.display(), .source)]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("log store {} is malformed: {}", .path.display(), .reason)]
    Malformed { path: PathBuf, reason: String },
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::Unavailable { .. } => ErrorKind::ResourceUnavailable,
            StoreError::Malformed { .. } => ErrorKind::ParseFailure,
        }
    }
}

/// Read-only access to the full collection of persisted log records.
///
/// Every call performs a fresh read: implementations must not cache results
/// across calls, and a call either returns every record or fails.
#[async_trait]
pub trait LogStore: Send + Sync + 'static {
    /// Load every record, in the order the resource stores them.
    async fn load_all(&self) -> Result<Vec<LogRecord>, StoreError>;
}
