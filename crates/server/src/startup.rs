use std::{env, net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use service::{
    file::{
        config_store::{ConfigStore, JsonConfigStore},
        grade_store::{GradeStore, JsonGradeStore},
    },
    runtime,
};

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

/// The original system allowed its pages to be embedded anywhere.
fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load the app config from `config.toml`, falling back to defaults plus
/// `SERVER_HOST`/`SERVER_PORT` env vars when the file is absent.
fn load_app_config() -> configs::AppConfig {
    match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(_) => {
            let mut cfg = configs::AppConfig::default();
            if let Ok(host) = env::var("SERVER_HOST") {
                cfg.server.host = host;
            }
            if let Some(port) = env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
                cfg.server.port = port;
            }
            cfg
        }
    }
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let app_config = load_app_config();

    runtime::ensure_env("frontend", &app_config.storage.data_dir).await?;

    let config_store: Arc<dyn ConfigStore> =
        Arc::new(JsonConfigStore::new(&app_config.storage.config_file));
    let grade_store: Arc<dyn GradeStore> =
        Arc::new(JsonGradeStore::new(&app_config.storage.grades_file));
    let state = routes::ServerState::new(config_store, grade_store);

    let cors = build_cors();
    let app: Router = routes::build_router(cors, state);

    let addr: SocketAddr =
        format!("{}:{}", app_config.server.host, app_config.server.port).parse()?;
    info!(%addr, "starting grade portal server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
