use crate::config::AppConfig;
use crate::version::{self, VersionRecord};
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::path::Path;
use std::sync::Arc;

/// Publishes the version record. A missing overlay file degrades to the base
/// record; a malformed one is a request-level failure.
pub async fn publish_version(
    Extension(config): Extension<Arc<AppConfig>>,
) -> Result<(StatusCode, Json<VersionRecord>), (StatusCode, String)> {
    match version::compose(&config.flapper_version, Path::new(&config.version_file)) {
        Ok(record) => Ok((StatusCode::ACCEPTED, Json(record))),
        Err(error) => {
            tracing::error!("Failed to compose version data: {error}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to compose version data: {error}"),
            ))
        }
    }
}
