//! Domain-specific errors for the product catalog.
//!
//! Label lookups never fail, so every variant here comes from building a
//! catalog out of untrusted product records:
//! - Presence errors (empty price identifier)
//! - Invariant errors (duplicate price identifier)
//! - Decoding errors (malformed JSON catalog)

use std::fmt;

#[derive(Debug)]
pub enum Error {
    DuplicatePriceId(String),
    EmptyPriceId { name: String },
    InvalidCatalog(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DuplicatePriceId(price_id) => {
                write!(f, "duplicate price identifier: {}", price_id)
            }
            Error::EmptyPriceId { name } => write!(f, "product '{}' has no price identifier", name),
            Error::InvalidCatalog(err) => write!(f, "invalid catalog: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidCatalog(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidCatalog(err)
    }
}
