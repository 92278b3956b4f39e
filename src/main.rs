use config::{Config, Environment};
use flapper::config::AppConfig;
use flapper::{app, telemetry};
use std::net::SocketAddr;
use std::sync::Arc;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let settings = Config::builder()
        .add_source(Environment::default().separator("__").try_parsing(true))
        .build()
        .expect("Failed to build settings");

    let cfg: AppConfig = settings
        .try_deserialize()
        .expect("Invalid environment variables");

    telemetry::setup().ok();

    if let Err(error) = cfg.validate() {
        tracing::error!("Invalid configuration: {error:?}");
        panic!("Invalid configuration");
    }

    tracing::info!("Starting Flapper v{}", cfg.flapper_version);
    tracing::info!("Serving environment flags at {}", cfg.env_var_prefix);
    tracing::info!("Serving version data at {}", cfg.version_prefix);

    let listener_address = SocketAddr::from(([0, 0, 0, 0], cfg.server_port));
    let app = app::create_app(Arc::new(cfg));

    tracing::info!("🚀 Listening on http://{listener_address}");
    let server_result = axum_server::bind(listener_address)
        .serve(app.into_make_service())
        .await;

    if let Err(error) = server_result {
        tracing::error!("Server exited with an error: {error:?}");
    }
}
