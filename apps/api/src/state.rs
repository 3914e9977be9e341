use crate::config::Config;
use crate::store::{TokenStore, UsageStore};

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Both stores are cheap to clone (shared `Arc` internals), so cloning the
/// state per request shares the underlying maps.
#[derive(Clone)]
pub struct AppState {
    pub tokens: TokenStore,
    pub usage: UsageStore,
    pub config: Config,
}
