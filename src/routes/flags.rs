use crate::flags::{self, FlagRecord};
use axum::Json;
use axum::http::StatusCode;
use std::env;

/// Publishes the flags derived from a fresh snapshot of the process
/// environment. An environment with no matching entries yields `[]`.
pub async fn publish_flags() -> (StatusCode, Json<Vec<FlagRecord>>) {
    (StatusCode::ACCEPTED, Json(flags::classify(env::vars())))
}
