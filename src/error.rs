// SPDX-License-Identifier: PMPL-1.0-or-later
//! Error types for wcagcheck

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CheckError>;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The parsed tree contains no element node at all. This is a caller
    /// precondition failure, not an accessibility finding.
    #[error("document is not traversable: no element content")]
    UnusableDocument,
}
