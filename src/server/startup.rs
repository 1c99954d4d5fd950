use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::Error};

/// Default log filter when `RUST_LOG` is not set
static DEFAULT_LOG_FILTER: &str = "holocron=info,tower_http=info";

/// Initialize the tracing subscriber, honoring `RUST_LOG`
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    migrate(&db).await?;

    Ok(db)
}

/// Apply every pending migration
pub async fn migrate(db: &DatabaseConnection) -> Result<(), Error> {
    use migration::{Migrator, MigratorTrait};

    Migrator::up(db, None).await?;

    tracing::info!("Database migrations applied");

    Ok(())
}
