//! Player entity - a game character in the catalog

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::PlayerId;
use crate::level::compute_level;

/// A catalogued player character.
///
/// `level` and `until_next_level` are derived from `experience` and must be
/// refreshed with [`Player::recompute_level`] whenever experience changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Assigned by storage on first save
    pub id: Option<PlayerId>,
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    pub birthday: DateTime<Utc>,
    pub experience: i32,
    pub level: i32,
    pub until_next_level: i32,
    pub banned: bool,
}

impl Player {
    /// Create an unsaved player with derived fields already computed.
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        race: Race,
        profession: Profession,
        birthday: DateTime<Utc>,
        experience: i32,
    ) -> Self {
        let mut player = Self {
            id: None,
            name: name.into(),
            title: title.into(),
            race,
            profession,
            birthday,
            experience,
            level: 0,
            until_next_level: 0,
            banned: false,
        };
        player.recompute_level();
        player
    }

    pub fn with_id(mut self, id: PlayerId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_banned(mut self, banned: bool) -> Self {
        self.banned = banned;
        self
    }

    /// Overwrite `level` and `until_next_level` from the current experience.
    pub fn recompute_level(&mut self) {
        let progress = compute_level(self.experience);
        self.level = progress.level;
        self.until_next_level = progress.until_next_level;
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

impl TryFrom<PlayerDraft> for Player {
    type Error = DomainError;

    /// Builds a player from a draft whose fields have already been validated.
    /// Missing required fields are still reported rather than defaulted.
    fn try_from(draft: PlayerDraft) -> Result<Self, Self::Error> {
        let name = draft
            .name
            .ok_or_else(|| DomainError::validation("Name is incorrect"))?;
        let title = draft
            .title
            .ok_or_else(|| DomainError::validation("Title is invalid"))?;
        let race = draft
            .race
            .ok_or_else(|| DomainError::validation("Race is invalid"))?;
        let profession = draft
            .profession
            .ok_or_else(|| DomainError::validation("Profession is invalid"))?;
        let birthday = draft
            .birthday
            .ok_or_else(|| DomainError::validation("Date is invalid"))?;
        let experience = draft
            .experience
            .ok_or_else(|| DomainError::validation("Experience is invalid"))?;

        Ok(Player::new(name, title, race, profession, birthday, experience)
            .with_banned(draft.banned.unwrap_or(false)))
    }
}

/// Caller-supplied player fields. `None` means "not supplied".
///
/// Used both as the creation input and as the partial-update patch; a
/// supplied `level` or `until_next_level` is never accepted, so neither
/// appears here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerDraft {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    pub birthday: Option<DateTime<Utc>>,
    pub experience: Option<i32>,
    pub banned: Option<bool>,
}

/// Partial update input; same shape as the creation draft.
pub type PlayerPatch = PlayerDraft;

// ============================================================================
// Race
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Race {
    Human,
    Dwarf,
    Elf,
    Giant,
    Orc,
    Troll,
    Hobbit,
}

impl Race {
    pub const ALL: [Race; 7] = [
        Race::Human,
        Race::Dwarf,
        Race::Elf,
        Race::Giant,
        Race::Orc,
        Race::Troll,
        Race::Hobbit,
    ];

    /// Canonical upper-case name, as stored and sent over the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Human => "HUMAN",
            Self::Dwarf => "DWARF",
            Self::Elf => "ELF",
            Self::Giant => "GIANT",
            Self::Orc => "ORC",
            Self::Troll => "TROLL",
            Self::Hobbit => "HOBBIT",
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Race {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "HUMAN" => Ok(Self::Human),
            "DWARF" => Ok(Self::Dwarf),
            "ELF" => Ok(Self::Elf),
            "GIANT" => Ok(Self::Giant),
            "ORC" => Ok(Self::Orc),
            "TROLL" => Ok(Self::Troll),
            "HOBBIT" => Ok(Self::Hobbit),
            _ => Err(DomainError::parse(format!("Unknown race: {}", s))),
        }
    }
}

// ============================================================================
// Profession
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Profession {
    Warrior,
    Rogue,
    Sorcerer,
    Cleric,
    Paladin,
    Nazgul,
    Warlock,
    Druid,
}

impl Profession {
    pub const ALL: [Profession; 8] = [
        Profession::Warrior,
        Profession::Rogue,
        Profession::Sorcerer,
        Profession::Cleric,
        Profession::Paladin,
        Profession::Nazgul,
        Profession::Warlock,
        Profession::Druid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warrior => "WARRIOR",
            Self::Rogue => "ROGUE",
            Self::Sorcerer => "SORCERER",
            Self::Cleric => "CLERIC",
            Self::Paladin => "PALADIN",
            Self::Nazgul => "NAZGUL",
            Self::Warlock => "WARLOCK",
            Self::Druid => "DRUID",
        }
    }
}

impl fmt::Display for Profession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profession {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "WARRIOR" => Ok(Self::Warrior),
            "ROGUE" => Ok(Self::Rogue),
            "SORCERER" => Ok(Self::Sorcerer),
            "CLERIC" => Ok(Self::Cleric),
            "PALADIN" => Ok(Self::Paladin),
            "NAZGUL" => Ok(Self::Nazgul),
            "WARLOCK" => Ok(Self::Warlock),
            "DRUID" => Ok(Self::Druid),
            _ => Err(DomainError::parse(format!("Unknown profession: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn birthday() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2010, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn new_player_has_derived_level_fields() {
        let player = Player::new("Ix", "Conqueror", Race::Human, Profession::Warrior, birthday(), 5000);
        assert_eq!(player.level, 9);
        assert_eq!(player.until_next_level, 500);
        assert!(!player.banned);
        assert!(!player.is_persisted());
    }

    #[test]
    fn recompute_overwrites_stale_level() {
        let mut player =
            Player::new("Ix", "Conqueror", Race::Human, Profession::Warrior, birthday(), 0);
        player.level = 40;
        player.until_next_level = -3;
        player.recompute_level();
        assert_eq!((player.level, player.until_next_level), (0, 100));
    }

    #[test]
    fn draft_conversion_defaults_banned_to_false() {
        let draft = PlayerDraft {
            name: Some("Ix".into()),
            title: Some("Conqueror".into()),
            race: Some(Race::Elf),
            profession: Some(Profession::Druid),
            birthday: Some(birthday()),
            experience: Some(100),
            banned: None,
        };
        let player = Player::try_from(draft).unwrap();
        assert!(!player.banned);
        assert_eq!(player.level, 1);
        assert_eq!(player.id, None);
    }

    #[test]
    fn draft_conversion_reports_missing_field() {
        let err = Player::try_from(PlayerDraft::default()).unwrap_err();
        assert_eq!(err, DomainError::validation("Name is incorrect"));
    }

    #[test]
    fn enums_round_trip_through_their_names() {
        for race in Race::ALL {
            assert_eq!(race.as_str().parse::<Race>().unwrap(), race);
        }
        for profession in Profession::ALL {
            assert_eq!(profession.to_string().parse::<Profession>().unwrap(), profession);
        }
        assert_eq!("hobbit".parse::<Race>().unwrap(), Race::Hobbit);
        assert!("WIZARD".parse::<Profession>().is_err());
    }

    #[test]
    fn enums_serialize_upper_case() {
        assert_eq!(serde_json::to_string(&Race::Troll).unwrap(), "\"TROLL\"");
        assert_eq!(
            serde_json::from_str::<Profession>("\"NAZGUL\"").unwrap(),
            Profession::Nazgul
        );
    }
}
