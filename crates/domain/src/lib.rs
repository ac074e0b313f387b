//! Roster Domain - the Player record and the pure rules around it.
//!
//! Nothing in this crate performs I/O. Storage and transport live in
//! `roster-engine`; wire types live in `roster-shared`.

extern crate self as roster_domain;

pub mod entities;
pub mod error;
pub mod filter;
pub mod ids;
pub mod level;
pub mod paging;
pub mod validation;

// Re-export entities (explicit list in entities/mod.rs)
pub use entities::{Player, PlayerDraft, PlayerPatch, Profession, Race};

pub use error::DomainError;

pub use filter::{PlayerFilter, PlayerPredicate, RangeBound};

pub use ids::PlayerId;

pub use level::{compute_level, LevelProgress};

pub use paging::{Page, PageRequest, PlayerOrder};
