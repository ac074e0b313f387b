//! Roster Shared - wire types for the player REST API
//!
//! - Request bodies for create and update
//! - Query parameters for listing and counting
//! - The player response body
//!
//! Field names are camelCase and timestamps are epoch milliseconds.

pub mod requests;
pub mod responses;

pub use requests::{PlayerBody, PlayerListQuery};
pub use responses::PlayerResponse;
