//! HTTP server assembly: routes plus middleware.

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method};
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::responder::SupportResponder;
use super::routes::{panic_response, support_routes};
use crate::config::ServerConfig;
use crate::error::{ConfigError, Result};

/// Full application router for the given configuration.
pub fn app(
    config: &ServerConfig,
    responder: Arc<SupportResponder>,
) -> std::result::Result<Router, ConfigError> {
    with_middleware(support_routes(responder), config)
}

fn with_middleware(
    router: Router,
    config: &ServerConfig,
) -> std::result::Result<Router, ConfigError> {
    Ok(router
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(cors_layer(config)?)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http()))
}

fn cors_layer(config: &ServerConfig) -> std::result::Result<CorsLayer, ConfigError> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    if config.allows_any_origin() {
        return Ok(layer.allow_origin(Any));
    }

    let origins = config
        .cors_origins
        .iter()
        .map(|o| {
            HeaderValue::from_str(o).map_err(|e| ConfigError::InvalidValue {
                key: "SUPPORT_CORS_ORIGINS".to_string(),
                message: format!("{:?}: {}", o, e),
            })
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(layer.allow_origin(AllowOrigin::list(origins)))
}

/// Bind and serve until Ctrl-C.
pub async fn serve(config: ServerConfig, responder: SupportResponder) -> Result<()> {
    let app = app(&config, Arc::new(responder))?;

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!(addr = %listener.local_addr()?, "Support server started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Support server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
