mod model;
mod server;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let auth_client = startup::setup_auth_client(&config)?;

    let app = router::router(AppState::new(db, auth_client), config.request_timeout);

    let listener = tokio::net::TcpListener::bind(config.server_address).await?;
    tracing::info!("Listening on {}", config.server_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
