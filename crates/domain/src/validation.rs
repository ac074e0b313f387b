//! Field validation rules for player records.
//!
//! Every check is a pure predicate over one field. `None` stands for a field
//! the caller did not supply and is rejected by the per-field checks; callers
//! doing partial validation only invoke a check when the field is present.

use chrono::{DateTime, Utc};

use crate::entities::{PlayerDraft, Profession, Race};
use crate::error::DomainError;

pub const MAX_NAME_LENGTH: usize = 12;
pub const MAX_TITLE_LENGTH: usize = 30;
pub const MIN_EXPERIENCE: i32 = 0;
pub const MAX_EXPERIENCE: i32 = 10_000_000;

/// Exclusive lower bound for birthdays, in epoch milliseconds (turn of 2000).
pub const BIRTHDAY_AFTER_MILLIS: i64 = 946_674_000_482;
/// Exclusive upper bound for birthdays, in epoch milliseconds (turn of 3000).
pub const BIRTHDAY_BEFORE_MILLIS: i64 = 32_535_205_199_494;

pub fn validate_id(id: i64) -> Result<(), DomainError> {
    if id <= 0 {
        return Err(DomainError::invalid_id("Id is invalid"));
    }
    Ok(())
}

pub fn validate_name(name: Option<&str>) -> Result<(), DomainError> {
    match name {
        Some(name) if !name.is_empty() && name.chars().count() <= MAX_NAME_LENGTH => Ok(()),
        _ => Err(DomainError::validation("Name is incorrect")),
    }
}

pub fn validate_title(title: Option<&str>) -> Result<(), DomainError> {
    match title {
        Some(title) if !title.is_empty() && title.chars().count() <= MAX_TITLE_LENGTH => Ok(()),
        _ => Err(DomainError::validation("Title is invalid")),
    }
}

pub fn validate_race(race: Option<Race>) -> Result<(), DomainError> {
    race.map(|_| ())
        .ok_or_else(|| DomainError::validation("Race is invalid"))
}

pub fn validate_profession(profession: Option<Profession>) -> Result<(), DomainError> {
    profession
        .map(|_| ())
        .ok_or_else(|| DomainError::validation("Profession is invalid"))
}

pub fn validate_experience(experience: Option<i32>) -> Result<(), DomainError> {
    match experience {
        Some(exp) if (MIN_EXPERIENCE..=MAX_EXPERIENCE).contains(&exp) => Ok(()),
        _ => Err(DomainError::validation("Experience is invalid")),
    }
}

/// Birthday must lie strictly between the two epoch-millisecond bounds.
pub fn validate_birthday(birthday: Option<DateTime<Utc>>) -> Result<(), DomainError> {
    match birthday.map(|date| date.timestamp_millis()) {
        Some(millis) if millis > BIRTHDAY_AFTER_MILLIS && millis < BIRTHDAY_BEFORE_MILLIS => Ok(()),
        _ => Err(DomainError::validation("Date is invalid")),
    }
}

/// Creation-time bundle: profession, race, experience, date, title, experience.
///
/// Name is not part of this bundle and experience is checked twice; callers
/// that need the name enforced run [`validate_name`] themselves.
pub fn validate_full(draft: &PlayerDraft) -> Result<(), DomainError> {
    validate_profession(draft.profession)?;
    validate_race(draft.race)?;
    validate_experience(draft.experience)?;
    validate_birthday(draft.birthday)?;
    validate_title(draft.title.as_deref())?;
    validate_experience(draft.experience)?;
    Ok(())
}
