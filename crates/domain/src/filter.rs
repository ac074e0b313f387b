//! Composable player filters.
//!
//! Each constructor takes optional parameters and returns a [`PlayerPredicate`].
//! Absent parameters yield [`PlayerPredicate::Any`], which is dropped when
//! predicates are combined, so it is the identity under conjunction.
//!
//! A [`PlayerFilter`] is evaluated in memory with [`PlayerFilter::matches`]
//! and translated into a query by storage adapters, which walk
//! [`PlayerFilter::predicates`].

use chrono::{DateTime, Utc};

use crate::entities::{Player, Profession, Race};

/// Inclusive range with optional ends. At least one end is always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeBound<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T: PartialOrd + Copy> RangeBound<T> {
    /// `None` when both ends are absent.
    pub fn new(min: Option<T>, max: Option<T>) -> Option<Self> {
        if min.is_none() && max.is_none() {
            return None;
        }
        Some(Self { min, max })
    }

    pub fn contains(&self, value: T) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

/// A single condition over player fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerPredicate {
    /// Matches every player
    Any,
    /// Case-sensitive substring of `name`
    NameContains(String),
    /// Case-sensitive substring of `title`
    TitleContains(String),
    Race(Race),
    Profession(Profession),
    Experience(RangeBound<i32>),
    Level(RangeBound<i32>),
    Birthday(RangeBound<DateTime<Utc>>),
    Banned(bool),
}

impl PlayerPredicate {
    pub fn by_name_contains(fragment: Option<&str>) -> Self {
        fragment.map_or(Self::Any, |f| Self::NameContains(f.to_string()))
    }

    pub fn by_title_contains(fragment: Option<&str>) -> Self {
        fragment.map_or(Self::Any, |f| Self::TitleContains(f.to_string()))
    }

    pub fn by_race(race: Option<Race>) -> Self {
        race.map_or(Self::Any, Self::Race)
    }

    pub fn by_profession(profession: Option<Profession>) -> Self {
        profession.map_or(Self::Any, Self::Profession)
    }

    pub fn by_experience_range(min: Option<i32>, max: Option<i32>) -> Self {
        RangeBound::new(min, max).map_or(Self::Any, Self::Experience)
    }

    pub fn by_level_range(min: Option<i32>, max: Option<i32>) -> Self {
        RangeBound::new(min, max).map_or(Self::Any, Self::Level)
    }

    /// Bounds are epoch milliseconds. A bound outside the representable
    /// timestamp range is clamped to the nearest representable instant.
    pub fn by_birthday_range(min_millis: Option<i64>, max_millis: Option<i64>) -> Self {
        let min = min_millis.map(clamp_millis);
        let max = max_millis.map(clamp_millis);
        RangeBound::new(min, max).map_or(Self::Any, Self::Birthday)
    }

    pub fn by_banned(banned: Option<bool>) -> Self {
        banned.map_or(Self::Any, Self::Banned)
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    pub fn matches(&self, player: &Player) -> bool {
        match self {
            Self::Any => true,
            Self::NameContains(fragment) => player.name.contains(fragment.as_str()),
            Self::TitleContains(fragment) => player.title.contains(fragment.as_str()),
            Self::Race(race) => player.race == *race,
            Self::Profession(profession) => player.profession == *profession,
            Self::Experience(range) => range.contains(player.experience),
            Self::Level(range) => range.contains(player.level),
            Self::Birthday(range) => range.contains(player.birthday),
            Self::Banned(banned) => player.banned == *banned,
        }
    }
}

fn clamp_millis(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or(if millis < 0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}

/// Conjunction of predicates. The empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerFilter {
    predicates: Vec<PlayerPredicate>,
}

impl PlayerFilter {
    pub fn all() -> Self {
        Self::default()
    }

    /// AND another predicate onto this filter. `Any` leaves it unchanged.
    pub fn and(mut self, predicate: PlayerPredicate) -> Self {
        if !predicate.is_any() {
            self.predicates.push(predicate);
        }
        self
    }

    pub fn predicates(&self) -> &[PlayerPredicate] {
        &self.predicates
    }

    pub fn is_unrestricted(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn matches(&self, player: &Player) -> bool {
        self.predicates.iter().all(|p| p.matches(player))
    }
}

impl FromIterator<PlayerPredicate> for PlayerFilter {
    fn from_iter<I: IntoIterator<Item = PlayerPredicate>>(iter: I) -> Self {
        iter.into_iter().fold(Self::all(), Self::and)
    }
}

impl From<PlayerPredicate> for PlayerFilter {
    fn from(predicate: PlayerPredicate) -> Self {
        Self::all().and(predicate)
    }
}
