use crate::ProductId;
use std::fmt;

/// Result type for paneshop-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Id does not belong to the catalog
    UnknownProduct(ProductId),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownProduct(id) => write!(f, "Product {} is not in the catalog", id),
        }
    }
}

impl std::error::Error for Error {}
