//! Error types.

use thiserror::Error;

/// Errors raised while configuring a page edit view.
///
/// The view itself performs no fallible operation; failures of fetch, save
/// or delete belong to the external handlers.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid page edit configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("invalid keyboard shortcut: {0:?}")]
    InvalidShortcut(String),
}

pub type Result<T> = std::result::Result<T, Error>;
