//! Repository port traits for database access.

use async_trait::async_trait;
use roster_domain::{Page, PageRequest, Player, PlayerFilter, PlayerId, PlayerOrder};

use super::error::RepoError;

// =============================================================================
// Database Ports
// =============================================================================

/// Player storage.
///
/// Filters are opaque predicate values; implementations translate
/// [`PlayerFilter::predicates`] into their native query form and must agree
/// with [`PlayerFilter::matches`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlayerRepo: Send + Sync {
    async fn get(&self, id: PlayerId) -> Result<Option<Player>, RepoError>;

    async fn list(
        &self,
        filter: &PlayerFilter,
        order: PlayerOrder,
    ) -> Result<Vec<Player>, RepoError>;

    async fn list_page(
        &self,
        filter: &PlayerFilter,
        page: &PageRequest,
    ) -> Result<Page<Player>, RepoError>;

    async fn count(&self, filter: &PlayerFilter) -> Result<u64, RepoError>;

    /// Insert when `player.id` is `None`, otherwise insert-or-replace by id.
    /// Returns the stored record with its id.
    async fn save(&self, player: &Player) -> Result<Player, RepoError>;

    /// Remove by id atomically. `RepoError::NotFound` when no row exists.
    async fn delete(&self, id: PlayerId) -> Result<(), RepoError>;
}
