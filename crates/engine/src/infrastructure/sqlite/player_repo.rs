//! SQLite-backed player storage.

use async_trait::async_trait;
use chrono::DateTime;
use roster_domain::{
    Page, PageRequest, Player, PlayerFilter, PlayerId, PlayerOrder, PlayerPredicate, RangeBound,
};
use sqlx::sqlite::{SqlitePoolOptions, SqliteRow};
use sqlx::{Encode, QueryBuilder, Row, Sqlite, SqlitePool, Type};

use crate::infrastructure::ports::{PlayerRepo, RepoError};

const PLAYER_COLUMNS: &str =
    "id, name, title, race, profession, birthday, experience, level, until_next_level, banned";

/// SQLite implementation of [`PlayerRepo`].
///
/// Birthdays are stored as epoch milliseconds so range filters compare integers.
#[derive(Clone)]
pub struct SqlitePlayerRepo {
    pool: SqlitePool,
}

impl SqlitePlayerRepo {
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, RepoError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(|e| RepoError::database("players.connect", e))?;
        Self::from_pool(pool).await
    }

    /// Wrap an existing pool, creating the schema if needed.
    pub async fn from_pool(pool: SqlitePool) -> Result<Self, RepoError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS players (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                title TEXT NOT NULL,
                race TEXT NOT NULL,
                profession TEXT NOT NULL,
                birthday INTEGER NOT NULL,
                experience INTEGER NOT NULL,
                level INTEGER NOT NULL,
                until_next_level INTEGER NOT NULL,
                banned INTEGER NOT NULL DEFAULT 0
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| RepoError::database("players.schema", e))?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl PlayerRepo for SqlitePlayerRepo {
    async fn get(&self, id: PlayerId) -> Result<Option<Player>, RepoError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM players WHERE id = ?",
            PLAYER_COLUMNS
        ))
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::database("players.get", e))?;

        row.as_ref().map(row_to_player).transpose()
    }

    async fn list(
        &self,
        filter: &PlayerFilter,
        order: PlayerOrder,
    ) -> Result<Vec<Player>, RepoError> {
        let mut query =
            QueryBuilder::<Sqlite>::new(format!("SELECT {} FROM players", PLAYER_COLUMNS));
        push_where(&mut query, filter);
        push_order(&mut query, order);

        let rows = query
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("players.list", e))?;

        rows.iter().map(row_to_player).collect()
    }

    async fn list_page(
        &self,
        filter: &PlayerFilter,
        page: &PageRequest,
    ) -> Result<Page<Player>, RepoError> {
        let total = self.count(filter).await?;

        let mut query =
            QueryBuilder::<Sqlite>::new(format!("SELECT {} FROM players", PLAYER_COLUMNS));
        push_where(&mut query, filter);
        push_order(&mut query, page.order);
        query
            .push(" LIMIT ")
            .push_bind(i64::from(page.page_size))
            .push(" OFFSET ")
            .push_bind(i64::try_from(page.offset()).unwrap_or(i64::MAX));

        let rows = query
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("players.list_page", e))?;

        let items = rows.iter().map(row_to_player).collect::<Result<Vec<_>, _>>()?;
        Ok(Page::new(items, total, page))
    }

    async fn count(&self, filter: &PlayerFilter) -> Result<u64, RepoError> {
        let mut query = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM players");
        push_where(&mut query, filter);

        let count: i64 = query
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepoError::database("players.count", e))?;

        u64::try_from(count).map_err(RepoError::serialization)
    }

    async fn save(&self, player: &Player) -> Result<Player, RepoError> {
        let result = sqlx::query(
            r#"
            INSERT INTO players (id, name, title, race, profession, birthday, experience, level, until_next_level, banned)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                title = excluded.title,
                race = excluded.race,
                profession = excluded.profession,
                birthday = excluded.birthday,
                experience = excluded.experience,
                level = excluded.level,
                until_next_level = excluded.until_next_level,
                banned = excluded.banned
            "#,
        )
        .bind(player.id.map(PlayerId::get))
        .bind(&player.name)
        .bind(&player.title)
        .bind(player.race.as_str())
        .bind(player.profession.as_str())
        .bind(player.birthday.timestamp_millis())
        .bind(player.experience)
        .bind(player.level)
        .bind(player.until_next_level)
        .bind(player.banned)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("players.save", e))?;

        let id = match player.id {
            Some(id) => id,
            None => PlayerId::new(result.last_insert_rowid())
                .map_err(|e| RepoError::database("players.save", e))?,
        };

        let mut stored = player.clone();
        stored.id = Some(id);
        Ok(stored)
    }

    async fn delete(&self, id: PlayerId) -> Result<(), RepoError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepoError::database("players.delete", e))?;

        let result = sqlx::query("DELETE FROM players WHERE id = ?")
            .bind(id.get())
            .execute(&mut *tx)
            .await
            .map_err(|e| RepoError::database("players.delete", e))?;

        if result.rows_affected() == 0 {
            tx.rollback()
                .await
                .map_err(|e| RepoError::database("players.delete", e))?;
            return Err(RepoError::not_found("Player", id));
        }

        tx.commit()
            .await
            .map_err(|e| RepoError::database("players.delete", e))?;
        Ok(())
    }
}

// =============================================================================
// Query translation
// =============================================================================

fn push_where(query: &mut QueryBuilder<'_, Sqlite>, filter: &PlayerFilter) {
    for (index, predicate) in filter.predicates().iter().enumerate() {
        query.push(if index == 0 { " WHERE " } else { " AND " });
        match predicate {
            PlayerPredicate::Any => {
                query.push("1 = 1");
            }
            // instr() is case-sensitive, LIKE is not
            PlayerPredicate::NameContains(fragment) => {
                query.push("instr(name, ").push_bind(fragment.clone()).push(") > 0");
            }
            PlayerPredicate::TitleContains(fragment) => {
                query.push("instr(title, ").push_bind(fragment.clone()).push(") > 0");
            }
            PlayerPredicate::Race(race) => {
                query.push("race = ").push_bind(race.as_str());
            }
            PlayerPredicate::Profession(profession) => {
                query.push("profession = ").push_bind(profession.as_str());
            }
            PlayerPredicate::Experience(range) => push_range(query, "experience", *range),
            PlayerPredicate::Level(range) => push_range(query, "level", *range),
            PlayerPredicate::Birthday(range) => push_range(
                query,
                "birthday",
                RangeBound {
                    min: range.min.map(|d| d.timestamp_millis()),
                    max: range.max.map(|d| d.timestamp_millis()),
                },
            ),
            PlayerPredicate::Banned(banned) => {
                query.push("banned = ").push_bind(*banned);
            }
        }
    }
}

fn push_range<'args, T>(
    query: &mut QueryBuilder<'args, Sqlite>,
    column: &'static str,
    range: RangeBound<T>,
) where
    T: 'args + Encode<'args, Sqlite> + Type<Sqlite> + Send,
{
    match (range.min, range.max) {
        (Some(min), Some(max)) => {
            query
                .push(column)
                .push(" BETWEEN ")
                .push_bind(min)
                .push(" AND ")
                .push_bind(max);
        }
        (Some(min), None) => {
            query.push(column).push(" >= ").push_bind(min);
        }
        (None, Some(max)) => {
            query.push(column).push(" <= ").push_bind(max);
        }
        (None, None) => {
            query.push("1 = 1");
        }
    }
}

fn push_order(query: &mut QueryBuilder<'_, Sqlite>, order: PlayerOrder) {
    let column = match order {
        PlayerOrder::Id => "id",
        PlayerOrder::Name => "name",
        PlayerOrder::Experience => "experience",
        PlayerOrder::Birthday => "birthday",
        PlayerOrder::Level => "level",
    };
    query.push(" ORDER BY ").push(column);
    if order != PlayerOrder::Id {
        query.push(", id");
    }
}

fn row_to_player(row: &SqliteRow) -> Result<Player, RepoError> {
    let id: i64 = row.try_get("id").map_err(RepoError::serialization)?;
    let race: String = row.try_get("race").map_err(RepoError::serialization)?;
    let profession: String = row.try_get("profession").map_err(RepoError::serialization)?;
    let birthday: i64 = row.try_get("birthday").map_err(RepoError::serialization)?;

    Ok(Player {
        id: Some(PlayerId::new(id).map_err(RepoError::serialization)?),
        name: row.try_get("name").map_err(RepoError::serialization)?,
        title: row.try_get("title").map_err(RepoError::serialization)?,
        race: race.parse().map_err(RepoError::serialization)?,
        profession: profession.parse().map_err(RepoError::serialization)?,
        birthday: DateTime::from_timestamp_millis(birthday).ok_or_else(|| {
            RepoError::serialization(format!("birthday out of range: {}", birthday))
        })?,
        experience: row.try_get("experience").map_err(RepoError::serialization)?,
        level: row.try_get("level").map_err(RepoError::serialization)?,
        until_next_level: row.try_get("until_next_level").map_err(RepoError::serialization)?,
        banned: row.try_get("banned").map_err(RepoError::serialization)?,
    })
}
