use async_trait::async_trait;
use sqlx::Row;
use uuid::Uuid;

use crate::application::ports::board_repository::BoardRepository;
use crate::domain::boards::board::Board;
use crate::domain::pins::pin::Pin;
use crate::infrastructure::db::PgPool;

pub struct SqlxBoardRepository {
    pub pool: PgPool,
}

impl SqlxBoardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_board(r: &sqlx::postgres::PgRow) -> Board {
    Board {
        id: r.get("id"),
        owner_id: r.get("owner_id"),
        title: r.get("title"),
        created_at: r.get("created_at"),
    }
}

#[async_trait]
impl BoardRepository for SqlxBoardRepository {
    async fn create_for_owner(&self, owner_id: Uuid, title: &str) -> anyhow::Result<Board> {
        let row = sqlx::query(
            r#"INSERT INTO boards (owner_id, title) VALUES ($1, $2)
               RETURNING id, owner_id, title, created_at"#,
        )
        .bind(owner_id)
        .bind(title)
        .fetch_one(&self.pool)
        .await?;
        Ok(map_board(&row))
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Board>> {
        let row = sqlx::query(
            r#"SELECT id, owner_id, title, created_at FROM boards WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_board))
    }

    async fn list_for_owner(&self, owner_id: Uuid) -> anyhow::Result<Vec<Board>> {
        let rows = sqlx::query(
            r#"SELECT id, owner_id, title, created_at FROM boards
               WHERE owner_id = $1 ORDER BY created_at DESC"#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(map_board).collect())
    }

    async fn list_pins(&self, board_id: Uuid) -> anyhow::Result<Vec<Pin>> {
        let rows = sqlx::query(
            r#"SELECT p.id, p.owner_id, p.title, p.description, p.tags, p.image_key, p.content_hash, p.created_at
               FROM board_pins bp JOIN pins p ON p.id = bp.pin_id
               WHERE bp.board_id = $1
               ORDER BY bp.added_at DESC"#,
        )
        .bind(board_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .iter()
            .map(|r| Pin {
                id: r.get("id"),
                owner_id: r.get("owner_id"),
                title: r.get("title"),
                description: r.try_get("description").ok(),
                tags: r.get("tags"),
                image_key: r.get("image_key"),
                content_hash: r.get("content_hash"),
                created_at: r.get("created_at"),
            })
            .collect())
    }

    async fn add_pin(&self, board_id: Uuid, pin_id: Uuid) -> anyhow::Result<()> {
        sqlx::query(
            r#"INSERT INTO board_pins (board_id, pin_id) VALUES ($1, $2)
               ON CONFLICT (board_id, pin_id) DO NOTHING"#,
        )
        .bind(board_id)
        .bind(pin_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
