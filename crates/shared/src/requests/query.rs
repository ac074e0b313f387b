use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize};

use roster_domain::paging::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};
use roster_domain::{PageRequest, PlayerFilter, PlayerOrder, PlayerPredicate, Profession, Race};

/// Query string of `GET /rest/players` and `GET /rest/players/count`.
///
/// `after` and `before` are epoch-millisecond birthday bounds. `race`,
/// `profession` and `order` accept their names in any case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerListQuery {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "parse_optional")]
    pub race: Option<Race>,
    #[serde(default, deserialize_with = "parse_optional")]
    pub profession: Option<Profession>,
    #[serde(default)]
    pub after: Option<i64>,
    #[serde(default)]
    pub before: Option<i64>,
    #[serde(default)]
    pub banned: Option<bool>,
    #[serde(default)]
    pub min_experience: Option<i32>,
    #[serde(default)]
    pub max_experience: Option<i32>,
    #[serde(default)]
    pub min_level: Option<i32>,
    #[serde(default)]
    pub max_level: Option<i32>,
    #[serde(default, deserialize_with = "parse_optional")]
    pub order: Option<PlayerOrder>,
    #[serde(default)]
    pub page_number: Option<u32>,
    #[serde(default)]
    pub page_size: Option<u32>,
}

impl PlayerListQuery {
    /// Conjunction of every supplied filter parameter.
    pub fn filter(&self) -> PlayerFilter {
        PlayerFilter::all()
            .and(PlayerPredicate::by_name_contains(self.name.as_deref()))
            .and(PlayerPredicate::by_title_contains(self.title.as_deref()))
            .and(PlayerPredicate::by_race(self.race))
            .and(PlayerPredicate::by_profession(self.profession))
            .and(PlayerPredicate::by_birthday_range(self.after, self.before))
            .and(PlayerPredicate::by_banned(self.banned))
            .and(PlayerPredicate::by_experience_range(
                self.min_experience,
                self.max_experience,
            ))
            .and(PlayerPredicate::by_level_range(self.min_level, self.max_level))
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(
            self.page_number.unwrap_or(DEFAULT_PAGE_NUMBER),
            self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            self.order.unwrap_or_default(),
        )
    }
}

fn parse_optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| raw.parse().map_err(de::Error::custom))
        .transpose()
}
