use std::sync::Arc;

use crate::auth::provider::AuthProvider;
use crate::config::AppConfig;
use crate::store::StatusStore;

/// Handler context, passed explicitly through axum state. The store and auth
/// provider sit behind trait objects so tests can substitute in-memory fakes.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn StatusStore>,
    pub auth: Arc<dyn AuthProvider>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn from_parts(
        store: Arc<dyn StatusStore>,
        auth: Arc<dyn AuthProvider>,
        config: Arc<AppConfig>,
    ) -> Self {
        Self {
            store,
            auth,
            config,
        }
    }
}
