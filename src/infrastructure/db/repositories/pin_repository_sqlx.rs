use async_trait::async_trait;
use sqlx::Row;
use uuid::Uuid;

use crate::application::ports::pin_repository::PinRepository;
use crate::domain::pins::pin::{Pin, PinWithAuthor};
use crate::infrastructure::db::PgPool;

pub struct SqlxPinRepository {
    pub pool: PgPool,
}

impl SqlxPinRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_pin(r: &sqlx::postgres::PgRow) -> Pin {
    Pin {
        id: r.get("id"),
        owner_id: r.get("owner_id"),
        title: r.get("title"),
        description: r.try_get("description").ok(),
        tags: r.get("tags"),
        image_key: r.get("image_key"),
        content_hash: r.get("content_hash"),
        created_at: r.get("created_at"),
    }
}

#[async_trait]
impl PinRepository for SqlxPinRepository {
    async fn insert_pin(
        &self,
        owner_id: Uuid,
        title: &str,
        description: Option<&str>,
        tags: &[String],
        image_key: &str,
        content_hash: &str,
    ) -> anyhow::Result<Pin> {
        let row = sqlx::query(
            r#"INSERT INTO pins (owner_id, title, description, tags, image_key, content_hash)
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING id, owner_id, title, description, tags, image_key, content_hash, created_at"#,
        )
        .bind(owner_id)
        .bind(title)
        .bind(description)
        .bind(tags)
        .bind(image_key)
        .bind(content_hash)
        .fetch_one(&self.pool)
        .await?;
        Ok(map_pin(&row))
    }

    async fn get_with_author(&self, id: Uuid) -> anyhow::Result<Option<PinWithAuthor>> {
        let row = sqlx::query(
            r#"SELECT p.id, p.owner_id, p.title, p.description, p.tags, p.image_key, p.content_hash, p.created_at,
                      u.username AS author_username, u.name AS author_name
               FROM pins p JOIN users u ON u.id = p.owner_id
               WHERE p.id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(|r| PinWithAuthor {
            pin: map_pin(&r),
            author_username: r.get("author_username"),
            author_name: r.get("author_name"),
        }))
    }

    async fn list_for_owner(&self, owner_id: Uuid) -> anyhow::Result<Vec<Pin>> {
        let rows = sqlx::query(
            r#"SELECT id, owner_id, title, description, tags, image_key, content_hash, created_at
               FROM pins WHERE owner_id = $1
               ORDER BY created_at DESC"#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(map_pin).collect())
    }

    async fn list_all(&self, limit: i64) -> anyhow::Result<Vec<PinWithAuthor>> {
        let rows = sqlx::query(
            r#"SELECT p.id, p.owner_id, p.title, p.description, p.tags, p.image_key, p.content_hash, p.created_at,
                      u.username AS author_username, u.name AS author_name
               FROM pins p JOIN users u ON u.id = p.owner_id
               ORDER BY p.created_at DESC
               LIMIT $1"#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|r| PinWithAuthor {
                pin: map_pin(&r),
                author_username: r.get("author_username"),
                author_name: r.get("author_name"),
            })
            .collect())
    }

    async fn get_owner_and_key(&self, id: Uuid) -> anyhow::Result<Option<(Uuid, String)>> {
        let row = sqlx::query(r#"SELECT owner_id, image_key FROM pins WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| (r.get("owner_id"), r.get("image_key"))))
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM pins WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
