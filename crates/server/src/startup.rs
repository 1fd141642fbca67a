use std::{future::Future, net::SocketAddr, sync::Arc};

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use configs::{AppConfig, CorsConfig, ServerConfig};
use models::db::{connect_migrated, DatabaseConfig};
use service::{
    catalog::FeaturedPolicy,
    credentials::{CredentialConfig, CredentialService},
    seed::seed_sample_data,
    store::SeaOrmStore,
};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

/// Credentialed CORS for exactly one origin.
pub fn build_cors(cfg: &CorsConfig) -> Result<CorsLayer, StartupError> {
    let origin = HeaderValue::from_str(cfg.allowed_origin.trim())
        .map_err(|e| StartupError::InvalidConfig(format!("cors.allowed_origin: {e}")))?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]))
}

fn bind_addr(cfg: &ServerConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.host, cfg.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server bind address: {e}")))
}

/// Open the database, create the schema, load the sample rows and wire the
/// services together.
pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<ServerState> {
    let credentials = CredentialService::new(CredentialConfig::from(&cfg.credentials))?;
    let db = connect_migrated(&DatabaseConfig::from(&cfg.database)).await?;
    let store = SeaOrmStore::new(db);
    seed_sample_data(&store, &credentials).await?;
    Ok(ServerState::new(Arc::new(store), credentials, FeaturedPolicy::from(&cfg.catalog)))
}

pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let state = build_state(cfg).await?;
    let cors = build_cors(&cfg.cors)?;
    Ok(routes::build_router(state, cors))
}

/// Serve until `shutdown` resolves, then let in-flight requests finish.
pub async fn run_until<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_app(&cfg).await?;

    let addr = bind_addr(&cfg.server)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, allowed_origin = %cfg.cors.allowed_origin, "listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    info!("http server drained");
    Ok(())
}

/// Serve until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    run_until(cfg, ctrl_c()).await
}

async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "ctrl_c listener failed; serving until killed");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, draining");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_from_config() {
        let addr = bind_addr(&ServerConfig::default()).unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:3001");

        let bad = ServerConfig { host: "not a host".into(), ..ServerConfig::default() };
        assert!(matches!(bind_addr(&bad), Err(StartupError::InvalidConfig(_))));
    }

    #[test]
    fn cors_rejects_unencodable_origin() {
        let cfg = CorsConfig { allowed_origin: "http://bad\norigin".into() };
        assert!(matches!(build_cors(&cfg), Err(StartupError::InvalidConfig(_))));
        assert!(build_cors(&CorsConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn run_until_stops_on_signal() -> anyhow::Result<()> {
        let mut cfg = AppConfig::default();
        cfg.server.port = 0;
        cfg.credentials = configs::CredentialsConfig::low_cost();
        run_until(cfg, async {}).await
    }
}
