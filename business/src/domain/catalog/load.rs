use crate::domain::product::model::Product;

/// Lifecycle of the one-shot catalog fetch.
///
/// Starts `Pending` and resolves exactly once; nothing partial is ever
/// exposed to filtering.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CatalogLoad {
    #[default]
    Pending,
    Ready(Vec<Product>),
    Failed(String),
}

impl CatalogLoad {
    /// Moves out of `Pending`. Returns `false` (and changes nothing) when the
    /// load was already resolved.
    pub fn resolve<E: std::fmt::Display>(&mut self, result: Result<Vec<Product>, E>) -> bool {
        if !self.is_pending() {
            return false;
        }
        *self = match result {
            Ok(products) => CatalogLoad::Ready(products),
            Err(err) => CatalogLoad::Failed(err.to_string()),
        };
        true
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, CatalogLoad::Pending)
    }

    /// Loaded products, or an empty slice until the load succeeded.
    pub fn products(&self) -> &[Product] {
        match self {
            CatalogLoad::Ready(products) => products,
            CatalogLoad::Pending | CatalogLoad::Failed(_) => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            CatalogLoad::Failed(reason) => Some(reason.as_str()),
            _ => None,
        }
    }
}
