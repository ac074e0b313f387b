//! Inbound request types.

mod player;
mod query;

pub use player::PlayerBody;
pub use query::PlayerListQuery;
