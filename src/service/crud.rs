//! Single-row CRUD against the `characters` table.
//!
//! Every operation checks a connection out of the pool for its own duration.
//! The `PoolConnection` guard returns it on drop, so it is released on the
//! error paths as well. One statement per call, no retries.

use crate::error::AppError;
use crate::model::{Character, CharacterFields, CharacterPatch};
use crate::sql;
use sqlx::pool::PoolConnection;
use sqlx::types::Json;
use sqlx::{Sqlite, SqlitePool};

pub struct CharacterStore;

impl CharacterStore {
    /// All rows, ordered by id.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Character>, AppError> {
        let mut conn = Self::acquire(pool).await?;
        let q = sql::select_list();
        tracing::debug!(sql = %q, "query");
        let rows = sqlx::query_as::<_, Character>(&q)
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows)
    }

    /// Fetch one row by id.
    pub async fn get(pool: &SqlitePool, id: i64) -> Result<Character, AppError> {
        let mut conn = Self::acquire(pool).await?;
        let q = sql::select_by_id();
        tracing::debug!(sql = %q, id, "query");
        sqlx::query_as::<_, Character>(&q)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Insert one row. Returns it with the storage-assigned id.
    pub async fn create(pool: &SqlitePool, fields: &CharacterFields) -> Result<Character, AppError> {
        let mut conn = Self::acquire(pool).await?;
        let q = sql::insert();
        tracing::debug!(sql = %q, "query");
        let row = sqlx::query_as::<_, Character>(&q)
            .bind(&fields.name)
            .bind(&fields.gender)
            .bind(&fields.favorite_fruit)
            .bind(Json(&fields.favorite_color))
            .bind(&fields.profession)
            .bind(&fields.personality)
            .bind(Json(&fields.pet))
            .bind(&fields.image)
            .fetch_one(&mut *conn)
            .await?;
        Ok(row)
    }

    /// Overwrite every writable field of an existing row.
    pub async fn replace(
        pool: &SqlitePool,
        id: i64,
        fields: &CharacterFields,
    ) -> Result<Character, AppError> {
        let mut conn = Self::acquire(pool).await?;
        let q = sql::update();
        tracing::debug!(sql = %q, id, "query");
        sqlx::query_as::<_, Character>(&q)
            .bind(&fields.name)
            .bind(&fields.gender)
            .bind(&fields.favorite_fruit)
            .bind(Json(&fields.favorite_color))
            .bind(&fields.profession)
            .bind(&fields.personality)
            .bind(Json(&fields.pet))
            .bind(&fields.image)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Overwrite only the fields present in `patch`. An empty patch reads the row back unchanged.
    pub async fn patch(
        pool: &SqlitePool,
        id: i64,
        patch: &CharacterPatch,
    ) -> Result<Character, AppError> {
        if patch.is_empty() {
            return Self::get(pool, id).await;
        }
        let mut conn = Self::acquire(pool).await?;
        let q = sql::merge_update();
        tracing::debug!(sql = %q, id, "query");
        sqlx::query_as::<_, Character>(&q)
            .bind(patch.name.as_deref())
            .bind(patch.gender.as_deref())
            .bind(patch.favorite_fruit.as_deref())
            .bind(patch.favorite_color.as_ref().map(Json))
            .bind(patch.profession.as_deref())
            .bind(patch.personality.as_deref())
            .bind(patch.pet.as_ref().map(Json))
            .bind(patch.image.as_deref())
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Delete one row by id.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
        let mut conn = Self::acquire(pool).await?;
        let q = sql::delete();
        tracing::debug!(sql = %q, id, "query");
        let result = sqlx::query(&q).bind(id).execute(&mut *conn).await?;
        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn acquire(pool: &SqlitePool) -> Result<PoolConnection<Sqlite>, AppError> {
        Ok(pool.acquire().await?)
    }
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("character {}", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OneOrMany;
    use crate::store;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn pool() -> SqlitePool {
        // A single connection keeps the in-memory database alive for the whole test.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        store::ensure_tables(&pool).await.unwrap();
        pool
    }

    fn fields(name: &str) -> CharacterFields {
        CharacterFields {
            name: name.into(),
            gender: "f".into(),
            favorite_fruit: "strawberry".into(),
            favorite_color: vec!["red", "pink"].into(),
            profession: "baker".into(),
            personality: "sweet".into(),
            pet: "cat".into(),
            image: "img.png".into(),
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_same_fields() {
        let pool = pool().await;
        let created = CharacterStore::create(&pool, &fields("Moranguinho")).await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.fields, fields("Moranguinho"));
        let got = CharacterStore::get(&pool, created.id).await.unwrap();
        assert_eq!(got, created);
    }

    #[tokio::test]
    async fn list_is_in_id_order() {
        let pool = pool().await;
        assert!(CharacterStore::list(&pool).await.unwrap().is_empty());
        for name in ["a", "b", "c"] {
            CharacterStore::create(&pool, &fields(name)).await.unwrap();
        }
        let all = CharacterStore::list(&pool).await.unwrap();
        let ids: Vec<i64> = all.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(all[1].fields.name, "b");
    }

    #[tokio::test]
    async fn replace_overwrites_everything_but_id() {
        let pool = pool().await;
        let created = CharacterStore::create(&pool, &fields("a")).await.unwrap();
        let mut next = fields("b");
        next.favorite_color = "blue".into();
        next.pet = vec!["dog", "owl"].into();
        let replaced = CharacterStore::replace(&pool, created.id, &next).await.unwrap();
        assert_eq!(replaced.id, created.id);
        assert_eq!(replaced.fields, next);
        assert_eq!(CharacterStore::get(&pool, created.id).await.unwrap().fields, next);
    }

    #[tokio::test]
    async fn patch_changes_only_supplied_fields() {
        let pool = pool().await;
        let created = CharacterStore::create(&pool, &fields("a")).await.unwrap();
        let patch = CharacterPatch {
            pet: Some(OneOrMany::from(vec!["cat", "dog"])),
            ..CharacterPatch::default()
        };
        let patched = CharacterStore::patch(&pool, created.id, &patch).await.unwrap();
        let mut expected = fields("a");
        expected.pet = vec!["cat", "dog"].into();
        assert_eq!(patched.fields, expected);

        let unchanged = CharacterStore::patch(&pool, created.id, &CharacterPatch::default())
            .await
            .unwrap();
        assert_eq!(unchanged, patched);
    }

    #[tokio::test]
    async fn missing_ids_are_not_found() {
        let pool = pool().await;
        let patch = CharacterPatch {
            name: Some("x".into()),
            ..CharacterPatch::default()
        };
        assert!(matches!(CharacterStore::get(&pool, 7).await, Err(AppError::NotFound(_))));
        assert!(matches!(
            CharacterStore::replace(&pool, 7, &fields("x")).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            CharacterStore::patch(&pool, 7, &patch).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            CharacterStore::patch(&pool, 7, &CharacterPatch::default()).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(CharacterStore::delete(&pool, 7).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let pool = pool().await;
        let created = CharacterStore::create(&pool, &fields("a")).await.unwrap();
        CharacterStore::delete(&pool, created.id).await.unwrap();
        assert!(matches!(
            CharacterStore::get(&pool, created.id).await,
            Err(AppError::NotFound(_))
        ));
        let again = CharacterStore::create(&pool, &fields("b")).await.unwrap();
        assert_ne!(again.id, created.id);
    }

    #[tokio::test]
    async fn connection_is_released_after_error() {
        let pool = pool().await;
        for _ in 0..3 {
            assert!(CharacterStore::get(&pool, 42).await.is_err());
        }
        // With max_connections(1) this times out if a failed call kept its connection.
        CharacterStore::create(&pool, &fields("a")).await.unwrap();
    }
}
