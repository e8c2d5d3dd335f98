use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Mutex;

use business::domain::errors::RepositoryError;
use business::domain::product::generator::generate_catalog;

use crate::order::entity::OrderEntity;
use crate::product::entity::ProductEntity;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.read_error")]
    ReadError,
    #[error("database.write_error")]
    WriteError,
    #[error("database.malformed_document")]
    MalformedDocument,
}

impl From<DatabaseError> for RepositoryError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::MalformedDocument => RepositoryError::malformed_document(),
            DatabaseError::ReadError | DatabaseError::WriteError => RepositoryError::persistence(),
        }
    }
}

/// Whole contents of the database file.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DbDocument {
    #[serde(default)]
    pub products: Vec<ProductEntity>,
    #[serde(default)]
    pub orders: Vec<OrderEntity>,
}

/// Single JSON file holding every product and order.
///
/// Each operation reads the whole document and mutations write it back in
/// full. Read-modify-write cycles of one process never interleave; several
/// processes sharing the file still race, last write wins.
pub struct JsonDatabase {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonDatabase {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current document. A missing file reads as an empty one.
    pub async fn read(&self) -> Result<DbDocument, DatabaseError> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    /// Runs `change` against the current document and persists the result.
    ///
    /// Nothing is written when `change` fails.
    pub async fn update<T, E, F>(&self, change: F) -> Result<T, E>
    where
        F: FnOnce(&mut DbDocument) -> Result<T, E>,
        E: From<DatabaseError>,
    {
        let _guard = self.lock.lock().await;
        let mut document = self.load().await?;
        let value = change(&mut document)?;
        self.store(&document).await?;
        Ok(value)
    }

    /// Creates the file with a generated catalog of `count` products when it
    /// does not exist yet. Returns whether a catalog was written.
    pub async fn ensure_seeded(
        &self,
        count: usize,
        seed: Option<u64>,
    ) -> Result<bool, DatabaseError> {
        let _guard = self.lock.lock().await;
        match tokio::fs::try_exists(&self.path).await {
            Ok(true) => return Ok(false),
            Ok(false) => {}
            Err(_) => return Err(DatabaseError::ReadError),
        }

        let products = match seed {
            Some(seed) => generate_catalog(&mut StdRng::seed_from_u64(seed), count),
            None => generate_catalog(&mut rand::rng(), count),
        };
        let document = DbDocument {
            products: products.iter().map(ProductEntity::from_domain).collect(),
            orders: Vec::new(),
        };
        self.store(&document).await?;

        tracing::info!(
            path = %self.path.display(),
            products = document.products.len(),
            "Seeded catalog database"
        );
        Ok(true)
    }

    async fn load(&self) -> Result<DbDocument, DatabaseError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(DbDocument::default()),
            Err(err) => {
                tracing::error!(path = %self.path.display(), error = %err, "Error reading database");
                return Err(DatabaseError::ReadError);
            }
        };

        serde_json::from_slice(&bytes).map_err(|err| {
            tracing::error!(path = %self.path.display(), error = %err, "Malformed database file");
            DatabaseError::MalformedDocument
        })
    }

    async fn store(&self, document: &DbDocument) -> Result<(), DatabaseError> {
        let json = serde_json::to_vec_pretty(document).map_err(|_| DatabaseError::WriteError)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|_| DatabaseError::WriteError)?;
        }

        // Written next to the target and renamed so readers never see half a file.
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, json).await.map_err(|err| {
            tracing::error!(path = %tmp.display(), error = %err, "Error writing database");
            DatabaseError::WriteError
        })?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|_| DatabaseError::WriteError)
    }
}
