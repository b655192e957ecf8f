use std::{str::FromStr, sync::Arc};

use anyhow::Result;
use library_catalog::{settings::AppConfig, MIGRATOR};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    pretty_env_logger::init();

    let config = AppConfig::new()?;
    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    MIGRATOR.run(&pool).await?;

    let app = library_catalog::app(Arc::new(pool), Some(&config.static_dir));

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    log::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
