//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("registry is empty")]
    EmptyRegistry,

    #[error("duplicate slug in registry: `{0}`")]
    DuplicateSlug(String),

    #[error("slug is not url-safe (lowercase letters, digits, hyphens): `{0}`")]
    UnsafeSlug(String),

    #[error("source directory not found: `{0}`")]
    MissingSourceRoot(PathBuf),
}
