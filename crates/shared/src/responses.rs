//! Outbound response types.

use serde::{Deserialize, Serialize};

use roster_domain::{Player, Profession, Race};

/// JSON representation of a stored player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    /// Epoch milliseconds
    pub birthday: i64,
    pub experience: i32,
    pub level: i32,
    pub until_next_level: i32,
    pub banned: bool,
}

impl From<&Player> for PlayerResponse {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id.map(i64::from),
            name: player.name.clone(),
            title: player.title.clone(),
            race: player.race,
            profession: player.profession,
            birthday: player.birthday.timestamp_millis(),
            experience: player.experience,
            level: player.level,
            until_next_level: player.until_next_level,
            banned: player.banned,
        }
    }
}

impl From<Player> for PlayerResponse {
    fn from(player: Player) -> Self {
        Self::from(&player)
    }
}
