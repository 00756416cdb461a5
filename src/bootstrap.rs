use crate::config::Config;
use crate::infrastructure::http::middleware::AppState;

pub fn build_app_state(config: Config) -> AppState {
    tracing::info!(
        timezone = %config.business_timezone,
        option_days = config.delivery_option_days,
        "Delivery scheduling configured"
    );

    AppState::new(config)
}
