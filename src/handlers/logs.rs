use axum::{
    extract::{
        path::ErrorKind as PathErrorKind,
        rejection::PathRejection,
        Path, State,
    },
    Json,
};
use tracing::debug;

use crate::error::AppError;
use crate::models::LogRecord;
use crate::viewer::ViewerUseCase;

/// Shared state for the log routes
#[derive(Clone)]
pub struct AppState {
    pub viewer: ViewerUseCase,
}

/// Handle GET /logs/{level}
///
/// The path segment arrives percent-decoded. Responds with the matching
/// records as a JSON array, `[]` when nothing matches. Store failures
/// become a 500.
///
/// A level that decodes to invalid UTF-8 is treated like any other unknown
/// level: stored levels are always UTF-8, so it matches nothing.
pub async fn get_logs_by_level(
    State(state): State<AppState>,
    level: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<LogRecord>>, AppError> {
    let level = match level {
        Ok(Path(level)) => level,
        Err(PathRejection::FailedToDeserializePathParams(err))
            if matches!(err.kind(), PathErrorKind::InvalidUtf8InPathParam { .. }) =>
        {
            debug!("Requested level is not valid UTF-8, nothing matches");
            return Ok(Json(Vec::new()));
        }
        Err(rejection) => return Err(AppError::InternalError(rejection.body_text())),
    };

    let records = state.viewer.view_by_level(&level).await?;
    debug!(level = %level, matched = records.len(), "Filtered log records");

    Ok(Json(records))
}
