use super::{
    cors_config, database_config::DatabaseConfig, server_config::ServerConfig,
    stripe_config::StripeConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub database: DatabaseConfig,
    pub stripe: StripeConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            database: DatabaseConfig::from_env(),
            stripe: StripeConfig::from_env(),
        }
    }
}
