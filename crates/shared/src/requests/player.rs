use chrono::DateTime;
use serde::{Deserialize, Serialize};

use roster_domain::{DomainError, PlayerDraft, Profession, Race};

/// Body of `POST /rest/players` and `POST /rest/players/{id}`.
///
/// Every field is optional on the wire; which ones are required depends on
/// the operation. Unknown fields such as `level` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerBody {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub race: Option<Race>,
    #[serde(default)]
    pub profession: Option<Profession>,
    /// Epoch milliseconds
    #[serde(default)]
    pub birthday: Option<i64>,
    #[serde(default)]
    pub experience: Option<i32>,
    #[serde(default)]
    pub banned: Option<bool>,
}

impl TryFrom<PlayerBody> for PlayerDraft {
    type Error = DomainError;

    fn try_from(body: PlayerBody) -> Result<Self, Self::Error> {
        let birthday = body
            .birthday
            .map(|millis| {
                DateTime::from_timestamp_millis(millis)
                    .ok_or_else(|| DomainError::validation("Date is invalid"))
            })
            .transpose()?;

        Ok(PlayerDraft {
            name: body.name,
            title: body.title,
            race: body.race,
            profession: body.profession,
            birthday,
            experience: body.experience,
            banned: body.banned,
        })
    }
}
