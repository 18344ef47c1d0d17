use super::domain::{Scheme, SchemeId};

/// Read-only view of the scheme catalog so matching can be exercised in
/// isolation from whatever persistence backs it.
pub trait SchemeCatalog: Send + Sync {
    /// Active schemes in catalog order. Matching preserves this order.
    fn active_schemes(&self) -> Result<Vec<Scheme>, CatalogError>;
    /// Looks up one scheme regardless of its active flag.
    fn find(&self, id: &SchemeId) -> Result<Option<Scheme>, CatalogError>;
}

/// Error enumeration for catalog read failures.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}
