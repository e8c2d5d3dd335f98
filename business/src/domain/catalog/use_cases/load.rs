use async_trait::async_trait;

use crate::domain::catalog::browser::CatalogBrowser;

#[async_trait]
pub trait LoadCatalogUseCase: Send + Sync {
    /// Fetches the catalog once and resolves the browser's pending load.
    /// Failures end up in the browser's load state, never as an error.
    async fn execute(&self, browser: &mut CatalogBrowser);
}
