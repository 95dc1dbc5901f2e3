use roster_api::api::{self, state::AppState, state::AuthSettings};
use roster_api::config::AppConfig;
use roster_api::infrastructure::database;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    // Connect to database
    tracing::info!("Opening database {}", config.database_url);
    let pool = database::connect(&config.database_url).await?;
    database::migrate(&pool).await?;
    tracing::info!("Database ready");

    let auth = AuthSettings::from_config(&config)?;
    let app = api::router(AppState::new(pool, auth));

    // Start server
    tracing::info!("Server listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
