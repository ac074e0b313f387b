//! Common test helpers for building players.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::players;
//!
//! let ix = players::ix();
//! ```

pub mod players {
    use chrono::{DateTime, TimeZone, Utc};
    use roster_domain::{Player, PlayerDraft, PlayerId, Profession, Race};

    pub fn birthday_2010() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2010, 1, 1, 0, 0, 0).unwrap()
    }

    /// Unsaved level-0 warrior.
    pub fn ix() -> Player {
        Player::new("Ix", "Conqueror", Race::Human, Profession::Warrior, birthday_2010(), 0)
    }

    pub fn stored_ix(id: i64) -> Player {
        ix().with_id(PlayerId::new(id).unwrap())
    }

    /// Creation input equivalent to [`ix`].
    pub fn ix_draft() -> PlayerDraft {
        PlayerDraft {
            name: Some("Ix".into()),
            title: Some("Conqueror".into()),
            race: Some(Race::Human),
            profession: Some(Profession::Warrior),
            birthday: Some(birthday_2010()),
            experience: Some(0),
            banned: Some(false),
        }
    }

    /// A small, varied catalog for filter and paging tests.
    pub fn roster() -> Vec<Player> {
        vec![
            ix(),
            Player::new(
                "Nix",
                "Keeper",
                Race::Dwarf,
                Profession::Rogue,
                Utc.with_ymd_and_hms(2005, 6, 15, 12, 0, 0).unwrap(),
                1_500,
            )
            .with_banned(true),
            Player::new(
                "Arwen",
                "Evenstar",
                Race::Elf,
                Profession::Druid,
                Utc.with_ymd_and_hms(2015, 3, 1, 0, 0, 0).unwrap(),
                40_000,
            ),
            Player::new(
                "ixia",
                "Wanderer",
                Race::Hobbit,
                Profession::Warrior,
                Utc.with_ymd_and_hms(2200, 1, 1, 0, 0, 0).unwrap(),
                10_000_000,
            ),
            Player::new(
                "Gorbag",
                "Captain",
                Race::Orc,
                Profession::Nazgul,
                Utc.with_ymd_and_hms(2001, 2, 3, 4, 5, 6).unwrap(),
                300,
            )
            .with_banned(true),
        ]
    }
}
