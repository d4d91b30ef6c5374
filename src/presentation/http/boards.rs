use axum::{
    Json, Router,
    extract::{Multipart, Path, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::dto::boards::BoardDto;
use crate::application::use_cases::boards::add_pin::AddPinToBoard;
use crate::application::use_cases::boards::create_board::CreateBoard;
use crate::application::use_cases::boards::get_board::GetBoard;
use crate::application::use_cases::boards::list_boards::ListBoards;
use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::auth::{Bearer, require_user};
use crate::presentation::http::pins::{CreatePinMultipart, PinResponse, read_pin_form};

#[derive(Debug, Serialize, ToSchema)]
pub struct BoardResponse {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub pins: Vec<PinResponse>,
}

impl From<BoardDto> for BoardResponse {
    fn from(d: BoardDto) -> Self {
        BoardResponse {
            id: d.id,
            owner_id: d.owner_id,
            title: d.title,
            created_at: d.created_at,
            pins: d.pins.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BoardListResponse {
    pub items: Vec<BoardResponse>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBoardRequest {
    pub title: String,
}

#[utoipa::path(post, path = "/api/boards", tag = "Boards", request_body = CreateBoardRequest, responses(
    (status = 201, body = BoardResponse)
))]
pub async fn create_board(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Json(req): Json<CreateBoardRequest>,
) -> Result<(StatusCode, Json<BoardResponse>), StatusCode> {
    let user_id = require_user(&ctx.cfg, bearer)?;
    let title = req.title.trim();
    if title.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    let repo = ctx.board_repo();
    let uc = CreateBoard {
        repo: repo.as_ref(),
    };
    let board = uc
        .execute(user_id, title)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    Ok((
        StatusCode::CREATED,
        Json(BoardResponse {
            id: board.id,
            owner_id: board.owner_id,
            title: board.title,
            created_at: board.created_at,
            pins: Vec::new(),
        }),
    ))
}

#[utoipa::path(get, path = "/api/boards", tag = "Boards", responses((status = 200, body = BoardListResponse)))]
pub async fn list_boards(
    State(ctx): State<AppContext>,
    bearer: Bearer,
) -> Result<Json<BoardListResponse>, StatusCode> {
    let user_id = require_user(&ctx.cfg, bearer)?;
    let boards = ctx.board_repo();
    let images = ctx.image_store();
    let uc = ListBoards {
        boards: boards.as_ref(),
        images: images.as_ref(),
    };
    let items = uc
        .execute(user_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    Ok(Json(BoardListResponse {
        items: items.into_iter().map(Into::into).collect(),
    }))
}

/// Board pages are public; no bearer required.
#[utoipa::path(get, path = "/api/boards/{id}", tag = "Boards", security(()),
    params(("id" = Uuid, Path, description = "Board ID")),
    responses((status = 200, body = BoardResponse), (status = 404, description = "Board not found")))]
pub async fn get_board(
    State(ctx): State<AppContext>,
    Path(id): Path<Uuid>,
) -> Result<Json<BoardResponse>, StatusCode> {
    let boards = ctx.board_repo();
    let images = ctx.image_store();
    let uc = GetBoard {
        boards: boards.as_ref(),
        images: images.as_ref(),
    };
    let board = uc
        .execute(id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(board.into()))
}

/// POST /api/boards/{id}/pins (multipart/form-data) — create a pin directly on a board
#[utoipa::path(
    post,
    path = "/api/boards/{id}/pins",
    tag = "Boards",
    params(("id" = Uuid, Path, description = "Board ID")),
    request_body(
        content = CreatePinMultipart,
        content_type = "multipart/form-data",
    ),
    responses(
        (status = 201, description = "Pin created on board", body = PinResponse),
        (status = 404, description = "Board not found")
    )
)]
pub async fn add_pin(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<PinResponse>), StatusCode> {
    let user_id = require_user(&ctx.cfg, bearer)?;
    let form = read_pin_form(multipart, ctx.cfg.upload_max_bytes).await?;

    let boards = ctx.board_repo();
    let pins = ctx.pin_repo();
    let images = ctx.image_store();
    let uc = AddPinToBoard {
        boards: boards.as_ref(),
        pins: pins.as_ref(),
        images: images.as_ref(),
    };
    let pin = uc
        .execute(
            id,
            user_id,
            &form.title,
            form.description.as_deref(),
            form.tags.as_deref(),
            form.bytes,
            form.content_type.as_deref(),
        )
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok((StatusCode::CREATED, Json(pin.into())))
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/boards", get(list_boards).post(create_board))
        .route("/boards/:id", get(get_board))
        .route("/boards/:id/pins", post(add_pin))
        .with_state(ctx)
}
