use crate::config::AppConfig;
use crate::routes;
use axum::http::{HeaderValue, header};
use axum::middleware::map_response;
use axum::response::Response;
use axum::routing::get;
use axum::{Extension, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Builds the router. The two publishing routes are registered at the
/// config-supplied prefixes, which `AppConfig::validate` has already checked
/// for distinctness.
pub fn create_app(config: Arc<AppConfig>) -> Router<()> {
    let mut app = Router::new()
        .route(&config.env_var_prefix, get(routes::flags::publish_flags))
        .route(
            &config.version_prefix,
            get(routes::version::publish_version),
        )
        .route("/health", get(routes::infra::health))
        .layer(Extension(config.clone()))
        .layer(map_response(map_json_charset));

    if config.cors_permissive {
        app = app.layer(CorsLayer::permissive());
    }

    app
}

async fn map_json_charset(mut response: Response) -> Response {
    let Some(content_type) = response.headers_mut().get_mut(header::CONTENT_TYPE) else {
        return response;
    };

    const APPLICATION_JSON: HeaderValue = HeaderValue::from_static("application/json");
    if &*content_type == APPLICATION_JSON {
        *content_type = HeaderValue::from_static("application/json; charset=utf-8");
    }

    response
}
