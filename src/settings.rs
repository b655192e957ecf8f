use config::{builder::DefaultState, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub bind_address: String,
    pub database_url: String,
    pub static_dir: String,
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        let builder = ConfigBuilder::<DefaultState>::default()
            .set_default("bind_address", "0.0.0.0:3000")?
            .set_default("database_url", "sqlite:catalog.db")?
            .set_default("static_dir", "public")?
            .add_source(File::with_name("config/default.toml").required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        builder.try_deserialize::<AppConfig>()
    }
}
