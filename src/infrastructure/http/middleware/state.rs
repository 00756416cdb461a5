use std::sync::Arc;

use crate::config::Config;
use crate::services::BusinessClock;

/// Shared, immutable state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub clock: BusinessClock,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            clock: BusinessClock::new(config.business_timezone),
            config: Arc::new(config),
        }
    }
}
