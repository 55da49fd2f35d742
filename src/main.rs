use anyhow::Result;
use global_onboard::{api, config::Config};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when the variables come from the environment)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("global_onboard=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    info!("Starting onboarding preview service");

    let config = Config::from_env()?;
    info!(
        "Translating with model {} (timeout {}s)",
        config.openai_model, config.translation_timeout_secs
    );
    if config.api_key.is_none() {
        info!("API_KEY not set, session API is unauthenticated");
    }

    api::serve(config).await
}
