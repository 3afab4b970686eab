use std::sync::Arc;

use crate::analytics::snapshot::{demo_snapshot, AnalyticsSnapshot};
use crate::auth::providers::ProviderRegistry;
use crate::auth::session::SessionKeys;
use crate::config::Config;
use crate::store::Store;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    /// Read-only dashboard figures.
    pub analytics: Arc<AnalyticsSnapshot>,
    /// Providers that passed the credential checks at startup.
    pub providers: Arc<ProviderRegistry>,
    pub sessions: SessionKeys,
}

impl AppState {
    pub fn new(config: &Config, store: Store) -> Self {
        Self {
            store: Arc::new(store),
            analytics: Arc::new(demo_snapshot()),
            providers: Arc::new(ProviderRegistry::from_credentials(&config.oauth)),
            sessions: SessionKeys::new(&config.session_secret, config.session_ttl_hours),
        }
    }
}
