//! Roster Engine library.
//!
//! Server-side code for the player catalog.
//!
//! ## Structure
//!
//! - `use_cases/` - Player CRUD orchestration (validation, level, storage)
//! - `infrastructure/` - Configuration, port traits and the SQLite adapter
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// Test fixtures shared by unit tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
