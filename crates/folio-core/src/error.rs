//! Folio error types

use thiserror::Error;

/// Result alias used throughout folio-core
pub type Result<T> = std::result::Result<T, FolioError>;

/// Folio error type
#[derive(Debug, Error)]
pub enum FolioError {
    /// Threshold outside (0, 1]
    #[error("threshold must be in (0, 1], got {0}")]
    InvalidThreshold(f64),

    /// Negative or non-finite root margin
    #[error("root margin must be a non-negative number, got {0}")]
    InvalidRootMargin(f64),

    /// Negative or non-finite look-ahead
    #[error("look-ahead must be a non-negative number, got {0}")]
    InvalidLookAhead(f64),

    /// Negative or non-finite scrolled threshold
    #[error("scrolled threshold must be a non-negative number, got {0}")]
    InvalidScrolledThreshold(f64),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("config parse error: {0}")]
    ConfigParse(#[source] toml::de::Error),

    /// Section document could not be parsed
    #[error("document parse error: {0}")]
    DocumentParse(#[source] toml::de::Error),

    /// Section document declares no sections
    #[error("document has no sections")]
    EmptyDocument,

    /// Two sections share an id
    #[error("duplicate section id: {0}")]
    DuplicateSection(String),
}

/// Reject NaN, infinities and negatives
pub(crate) fn non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
