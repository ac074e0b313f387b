//! Player CRUD operations.

use std::sync::Arc;

use roster_domain::validation::{
    validate_birthday, validate_experience, validate_full, validate_name,
    validate_profession, validate_race, validate_title,
};
use roster_domain::{
    Page, PageRequest, Player, PlayerDraft, PlayerFilter, PlayerId, PlayerOrder, PlayerPatch,
};

use crate::infrastructure::ports::PlayerRepo;

use super::ManagementError;

/// Player catalog operations. The only component that touches storage.
pub struct PlayerCrud {
    repo: Arc<dyn PlayerRepo>,
}

impl PlayerCrud {
    pub fn new(repo: Arc<dyn PlayerRepo>) -> Self {
        Self { repo }
    }

    /// Load one player. Non-positive ids are a bad request, unknown ids are not found.
    pub async fn get(&self, id: i64) -> Result<Player, ManagementError> {
        let player_id = PlayerId::new(id)?;
        self.repo
            .get(player_id)
            .await?
            .ok_or(ManagementError::NotFound)
    }

    /// Every matching player, ordered by id.
    pub async fn list(&self, filter: &PlayerFilter) -> Result<Vec<Player>, ManagementError> {
        Ok(self.repo.list(filter, PlayerOrder::Id).await?)
    }

    pub async fn list_page(
        &self,
        filter: &PlayerFilter,
        page: &PageRequest,
    ) -> Result<Page<Player>, ManagementError> {
        let result = self.repo.list_page(filter, page).await?;
        tracing::debug!(
            total = result.total,
            total_pages = result.total_pages(),
            last = result.is_last(),
            "Listed player page"
        );
        Ok(result)
    }

    pub async fn count(&self, filter: &PlayerFilter) -> Result<u64, ManagementError> {
        Ok(self.repo.count(filter).await?)
    }

    pub async fn create(&self, draft: PlayerDraft) -> Result<Player, ManagementError> {
        if let Err(e) = validate_full(&draft).and_then(|_| validate_name(draft.name.as_deref())) {
            tracing::debug!(error = %e, "Rejected player creation");
            return Err(e.into());
        }

        // Player::new derives level and until_next_level from experience.
        let player = Player::try_from(draft)?;
        let stored = self.repo.save(&player).await?;

        tracing::info!(
            player_id = ?stored.id,
            name = %stored.name,
            level = stored.level,
            "Player created"
        );
        Ok(stored)
    }

    /// Apply the fields present in `patch`, validating each one.
    ///
    /// `banned` is only ever switched on here: a patch carrying `false` leaves
    /// an existing ban in place.
    pub async fn update(&self, id: i64, patch: PlayerPatch) -> Result<Player, ManagementError> {
        let mut player = self.get(id).await?;

        if let Some(name) = patch.name {
            validate_name(Some(&name))?;
            player.name = name;
        }
        if let Some(title) = patch.title {
            validate_title(Some(&title))?;
            player.title = title;
        }
        if let Some(birthday) = patch.birthday {
            validate_birthday(Some(birthday))?;
            player.birthday = birthday;
        }
        if let Some(race) = patch.race {
            validate_race(Some(race))?;
            player.race = race;
        }
        if let Some(profession) = patch.profession {
            validate_profession(Some(profession))?;
            player.profession = profession;
        }
        if patch.banned == Some(true) {
            player.banned = true;
        }
        if let Some(experience) = patch.experience {
            validate_experience(Some(experience))?;
            player.experience = experience;
        }

        player.recompute_level();
        let stored = self.repo.save(&player).await?;

        tracing::info!(player_id = id, level = stored.level, "Player updated");
        Ok(stored)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ManagementError> {
        let player = self.get(id).await?;
        let player_id = player.id.ok_or(ManagementError::NotFound)?;

        match self.repo.delete(player_id).await {
            Ok(()) => {
                tracing::info!(player_id = id, "Player deleted");
                Ok(())
            }
            Err(e) if e.is_not_found() => Err(ManagementError::NotFound),
            Err(e) => Err(e.into()),
        }
    }
}
