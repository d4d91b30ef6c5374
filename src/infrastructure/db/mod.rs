use sqlx::{Pool, Postgres};

pub type PgPool = Pool<Postgres>;

pub async fn connect_pool(database_url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Applies the embedded migrations (users, pins, boards, board_pins).
pub async fn migrate(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

pub mod repositories;
