mod auth;
mod config;
mod errors;
mod justify;
mod quota;
mod routes;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{TokenStore, UsageStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_log_directive(&config.rust_log))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Justify API v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Daily word limit: {} words per token",
        config.daily_word_limit
    );

    // Build app state — token and usage stores live in memory for the
    // lifetime of the process.
    let state = AppState {
        tokens: TokenStore::new(),
        usage: UsageStore::new(),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Default `EnvFilter` directive when `RUST_LOG` is unset.
///
/// Tracing targets use the crate's module path, so the package name's hyphen
/// must become an underscore or the directive matches nothing.
fn default_log_directive(level: &str) -> String {
    format!("{}={}", env!("CARGO_PKG_NAME").replace('-', "_"), level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_directive_targets_this_crate() {
        // module_path! starts with the actual tracing target prefix for
        // events emitted from this crate.
        let crate_target = module_path!().split("::").next().unwrap();
        assert_eq!(
            default_log_directive("info"),
            format!("{crate_target}=info")
        );
    }

    #[test]
    fn test_default_log_directive_has_no_hyphens() {
        assert_eq!(default_log_directive("debug"), "justify_api=debug");
    }
}

