use dormshop::bootstrap;
use dormshop::config::Config;
use dormshop::infrastructure::http::router::build_router;
use dormshop::infrastructure::observability;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    observability::init_tracing();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let addr = config.server_address();
    let state = bootstrap::build_app_state(config);

    let app = build_router(state);

    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
