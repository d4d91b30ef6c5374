use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use sqlx::PgPool;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub service: &'static str,
    pub status: &'static str,
    pub db: &'static str,
}

/// Liveness plus a database probe; object storage is exercised on first upload
/// and is not probed here.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    security(()),
    responses((status = 200, body = HealthResponse))
)]
pub async fn health(State(pool): State<PgPool>) -> Json<HealthResponse> {
    let db_ok = sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&pool)
        .await
        .is_ok();
    Json(HealthResponse {
        service: "pinboard",
        status: if db_ok { "ok" } else { "degraded" },
        db: if db_ok { "up" } else { "down" },
    })
}

pub fn routes(pool: PgPool) -> Router {
    Router::new().route("/health", get(health)).with_state(pool)
}
