//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`PersonsError`] via `From`, so callers only ever match on one enum.

use std::error::Error;

/// Top-level error returned by ports and services.
#[derive(Debug, thiserror::Error)]
pub enum PersonsError {
    /// The addressed record does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The backing store failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn Error + Send + Sync>),
}

/// No record of kind `entity` exists under `id`.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
