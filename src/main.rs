use holocron::server::{config::Config, error::Error, model::app::AppState, router, startup};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let state = AppState::new(db, &config);

    let app = router::routes().with_state(state);

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Starting server on port {}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
