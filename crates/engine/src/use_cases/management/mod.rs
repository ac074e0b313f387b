//! Management use cases for CRUD-style operations.
//!
//! These use cases keep HTTP handlers thin while coordinating validation,
//! derived fields and storage.

mod player;

pub use player::PlayerCrud;

use roster_domain::DomainError;

use crate::infrastructure::ports::RepoError;

/// Shared error type for management use cases.
#[derive(Debug, thiserror::Error)]
pub enum ManagementError {
    #[error("Not found")]
    NotFound,
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

/// Every domain rejection is a caller mistake.
impl From<DomainError> for ManagementError {
    fn from(err: DomainError) -> Self {
        Self::BadRequest(err.message())
    }
}

/// Container for management use cases.
pub struct ManagementUseCases {
    pub player: PlayerCrud,
}

impl ManagementUseCases {
    pub fn new(player: PlayerCrud) -> Self {
        Self { player }
    }
}
