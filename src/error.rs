// src/error.rs
// Standardized error types for folio

use thiserror::Error;

/// Main error type for the folio library
#[derive(Error, Debug)]
pub enum FolioError {
    /// Lookup-miss: the requested slug has no record in the catalog
    #[error("{kind} not found: {slug}")]
    NotFound { kind: &'static str, slug: String },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Result using FolioError
pub type Result<T> = std::result::Result<T, FolioError>;

impl FolioError {
    pub fn project_not_found(slug: impl Into<String>) -> Self {
        FolioError::NotFound {
            kind: "project",
            slug: slug.into(),
        }
    }

    pub fn article_not_found(slug: impl Into<String>) -> Self {
        FolioError::NotFound {
            kind: "article",
            slug: slug.into(),
        }
    }

    /// True for the lookup-miss variant
    pub fn is_not_found(&self) -> bool {
        matches!(self, FolioError::NotFound { .. })
    }
}
