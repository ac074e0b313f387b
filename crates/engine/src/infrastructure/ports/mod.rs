//! Port traits for infrastructure boundaries.
//!
//! Ports exist for database access only; the player use cases depend on
//! `Arc<dyn PlayerRepo>` and nothing else.

mod error;
mod repos;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::PlayerRepo;

// =============================================================================
// Test-Only Mock Repositories (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::MockPlayerRepo;

// =============================================================================
// Error Types
// =============================================================================
pub use error::RepoError;
