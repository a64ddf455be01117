use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chat_relay::config::Config;
use chat_relay::routes;
use chat_relay::services::provider::OpenAiProvider;
use chat_relay::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("chat_relay=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    info!("Model: {}", config.model);

    let provider = OpenAiProvider::new(&config.api_key, &config.api_base);
    let state = Arc::new(AppState::new(config.clone(), Arc::new(provider)));

    let mut app = routes::create_router().with_state(state);
    if let Some(origin) = &config.cors_origin {
        info!("CORS enabled for {origin}");
        app = app.layer(routes::cors_layer(origin)?);
    }

    let listener = TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("failed to bind port {}", config.port))?;

    info!("API listening on http://localhost:{}", config.port);
    axum::serve(listener, app).await?;
    Ok(())
}
