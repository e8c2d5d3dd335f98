use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use business::domain::product::generator::DEFAULT_CATALOG_SIZE;
use persistence::db::JsonDatabase;

/// Location of the JSON database file and how to seed it.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub path: PathBuf,
    pub seed_products: usize,
    pub seed_rng: Option<u64>,
}

impl DatabaseConfig {
    /// Environment variables:
    /// - DB_PATH: database file (default: "db.json")
    /// - SEED_PRODUCTS: catalog size written when the file is missing (default: 1000)
    /// - SEED_RNG: fixed seed for a reproducible catalog (default: random)
    pub fn from_env() -> Self {
        let path = env::var("DB_PATH").unwrap_or_else(|_| "db.json".to_string());
        let seed_products = env::var("SEED_PRODUCTS")
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_CATALOG_SIZE);
        let seed_rng = env::var("SEED_RNG").ok().and_then(|v| v.trim().parse().ok());

        Self {
            path: PathBuf::from(path),
            seed_products,
            seed_rng,
        }
    }
}

/// Opens the database file, seeding a catalog first when it does not exist.
pub async fn init_database(config: &DatabaseConfig) -> anyhow::Result<Arc<JsonDatabase>> {
    let db = Arc::new(JsonDatabase::new(config.path.clone()));
    if db
        .ensure_seeded(config.seed_products, config.seed_rng)
        .await?
    {
        tracing::info!(
            path = %config.path.display(),
            products = config.seed_products,
            "Created database with generated catalog"
        );
    }
    Ok(db)
}
