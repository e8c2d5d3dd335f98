#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.unavailable")]
    Unavailable { reason: String },
    #[error("catalog.malformed_response")]
    MalformedResponse { reason: String },
}

impl CatalogError {
    /// Transport-level detail for logs; never shown to shoppers.
    pub fn reason(&self) -> &str {
        match self {
            CatalogError::Unavailable { reason } | CatalogError::MalformedResponse { reason } => {
                reason
            }
        }
    }
}
