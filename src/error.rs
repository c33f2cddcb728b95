/*
 * Error Module
 *
 * Errors surfaced while loading, saving or applying a field configuration.
 * The running engine itself never fails: a missing drawing surface is a
 * silent no-op, not an error.
 */

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A configuration value is out of its accepted range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Reading or writing a config file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A config file is not valid JSON for `FieldConfig`.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
