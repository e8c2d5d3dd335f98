use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::browser::CatalogBrowser;
use crate::domain::catalog::source::CatalogSource;
use crate::domain::catalog::use_cases::load::LoadCatalogUseCase;
use crate::domain::logger::Logger;

/// Message shown to shoppers when the catalog cannot be fetched.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load products";

pub struct LoadCatalogUseCaseImpl {
    pub source: Arc<dyn CatalogSource>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoadCatalogUseCase for LoadCatalogUseCaseImpl {
    async fn execute(&self, browser: &mut CatalogBrowser) {
        if !browser.load_state().is_pending() {
            self.logger.debug("Catalog already loaded, skipping fetch");
            return;
        }

        self.logger.info("Loading catalog");
        match self.source.fetch_products().await {
            Ok(products) => {
                self.logger
                    .info(&format!("Catalog loaded with {} products", products.len()));
                browser.resolve::<&str>(Ok(products));
            }
            Err(err) => {
                self.logger.error(&format!(
                    "Error fetching products: {} ({})",
                    err,
                    err.reason()
                ));
                browser.resolve(Err(LOAD_FAILED_MESSAGE));
            }
        }
    }
}
