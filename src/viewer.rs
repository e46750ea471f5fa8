use std::sync::Arc;

use crate::models::LogRecord;
use crate::store::{LogStore, StoreError};

/// Filters the log store by severity level.
///
/// Holds no per-request state; cloning shares the underlying store.
#[derive(Clone)]
pub struct ViewerUseCase {
    store: Arc<dyn LogStore>,
}

impl ViewerUseCase {
    pub fn new(store: Arc<dyn LogStore>) -> Self {
        Self { store }
    }

    /// Return every record whose level equals `level` exactly, in store order.
    ///
    /// No normalization is applied: `"info"` does not match `"INFO"`. A level
    /// no record carries yields an empty collection, not an error. Store errors
    /// are returned unchanged.
    pub async fn view_by_level(&self, level: &str) -> Result<Vec<LogRecord>, StoreError> {
        let records = self.store.load_all().await?;

        Ok(records
            .into_iter()
            .filter(|record| record.has_level(level))
            .collect())
    }
}
