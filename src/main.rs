use anyhow::Context;

use agent_market_support::config::{ResponderConfig, ServerConfig};
use agent_market_support::support::SupportResponder;
use agent_market_support::support::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let server_config = ServerConfig::from_env().context("loading server configuration")?;
    let responder_config =
        ResponderConfig::from_env().context("loading responder configuration")?;

    eprintln!("🛟 Agent Market Support v{}", env!("CARGO_PKG_VERSION"));
    eprintln!(
        "   Chat API: http://{}/api/support/chat",
        server_config.bind_addr()
    );
    eprintln!(
        "   CORS: {}",
        if server_config.allows_any_origin() {
            "any origin".to_string()
        } else {
            server_config.cors_origins.join(", ")
        }
    );
    eprintln!(
        "   History kept in context: {} turns\n",
        responder_config.max_history_turns
    );

    let responder = SupportResponder::new(responder_config);
    server::serve(server_config, responder)
        .await
        .context("support server failed")?;

    Ok(())
}
