//! Domain entities.

mod player;

pub use player::{Player, PlayerDraft, PlayerPatch, Profession, Race};
