//! SQLite adapters.

mod player_repo;

pub use player_repo::SqlitePlayerRepo;
