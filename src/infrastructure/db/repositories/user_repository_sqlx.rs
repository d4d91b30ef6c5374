use async_trait::async_trait;
use sqlx::Row;
use uuid::Uuid;

use crate::application::ports::user_repository::{UserRepository, UserRow};
use crate::infrastructure::db::PgPool;

pub struct SqlxUserRepository {
    pub pool: PgPool,
}

impl SqlxUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_row(r: &sqlx::postgres::PgRow) -> UserRow {
    UserRow {
        id: r.get("id"),
        username: r.get("username"),
        email: r.get("email"),
        name: r.get("name"),
        contact: r.try_get("contact").ok(),
        avatar_key: r.try_get("avatar_key").ok(),
        password_hash: r.try_get("password_hash").ok(),
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    async fn create_user(
        &self,
        username: &str,
        email: &str,
        name: &str,
        contact: Option<&str>,
        password_hash: &str,
    ) -> anyhow::Result<UserRow> {
        let row = sqlx::query(
            r#"INSERT INTO users (username, email, name, contact, password_hash)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING id, username, email, name, contact, avatar_key, password_hash"#,
        )
        .bind(username)
        .bind(email)
        .bind(name)
        .bind(contact)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;
        Ok(map_row(&row))
    }

    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<UserRow>> {
        let row = sqlx::query(
            r#"SELECT id, username, email, name, contact, avatar_key, password_hash
               FROM users WHERE username = $1"#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_row))
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<UserRow>> {
        let row = sqlx::query(
            r#"SELECT id, username, email, name, contact, avatar_key, password_hash
               FROM users WHERE email = $1"#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_row))
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<UserRow>> {
        let row = sqlx::query(
            r#"SELECT id, username, email, name, contact, avatar_key, NULL AS password_hash
               FROM users WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_row))
    }

    async fn update_profile(
        &self,
        id: Uuid,
        name: Option<&str>,
        contact: Option<&str>,
    ) -> anyhow::Result<Option<UserRow>> {
        let row = sqlx::query(
            r#"UPDATE users
               SET name = COALESCE($2, name), contact = COALESCE($3, contact)
               WHERE id = $1
               RETURNING id, username, email, name, contact, avatar_key, NULL AS password_hash"#,
        )
        .bind(id)
        .bind(name)
        .bind(contact)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_row))
    }

    async fn set_avatar_key(&self, id: Uuid, key: &str) -> anyhow::Result<Option<String>> {
        let row = sqlx::query(
            r#"UPDATE users u SET avatar_key = $2
               FROM (SELECT id, avatar_key AS old_key FROM users WHERE id = $1) prev
               WHERE u.id = prev.id
               RETURNING prev.old_key"#,
        )
        .bind(id)
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.and_then(|r| r.try_get::<Option<String>, _>("old_key").ok().flatten()))
    }
}
