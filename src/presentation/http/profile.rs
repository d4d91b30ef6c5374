use axum::{
    Json, Router,
    extract::{Multipart, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::dto::profile::ProfileDto;
use crate::application::use_cases::profile::get_profile::GetProfile;
use crate::application::use_cases::profile::set_avatar::SetAvatar;
use crate::application::use_cases::profile::update_profile::UpdateProfile;
use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::auth::{Bearer, require_user};
use crate::presentation::http::boards::BoardResponse;
use crate::presentation::http::pins::PinResponse;

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub name: String,
    pub contact: Option<String>,
    pub avatar_url: Option<String>,
    pub pins: Vec<PinResponse>,
    pub boards: Vec<BoardResponse>,
}

impl From<ProfileDto> for ProfileResponse {
    fn from(d: ProfileDto) -> Self {
        ProfileResponse {
            id: d.id,
            username: d.username,
            email: d.email,
            name: d.name,
            contact: d.contact,
            avatar_url: d.avatar_url,
            pins: d.pins.into_iter().map(Into::into).collect(),
            boards: d.boards.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub contact: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AvatarResponse {
    pub avatar_url: String,
}

#[derive(ToSchema)]
#[allow(dead_code)]
pub struct AvatarMultipart {
    /// Avatar image to upload
    #[schema(value_type = String, format = Binary)]
    image: String,
}

/// GET /api/profile — the caller with their pins and boards, boards populated
/// with pins; every image carries a signed URL.
#[utoipa::path(get, path = "/api/profile", tag = "Profile", responses((status = 200, body = ProfileResponse)))]
pub async fn get_profile(
    State(ctx): State<AppContext>,
    bearer: Bearer,
) -> Result<Json<ProfileResponse>, StatusCode> {
    let user_id = require_user(&ctx.cfg, bearer)?;
    let users = ctx.user_repo();
    let pins = ctx.pin_repo();
    let boards = ctx.board_repo();
    let images = ctx.image_store();
    let uc = GetProfile {
        users: users.as_ref(),
        pins: pins.as_ref(),
        boards: boards.as_ref(),
        images: images.as_ref(),
    };
    let profile = uc
        .execute(user_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::UNAUTHORIZED)?;
    Ok(Json(profile.into()))
}

#[utoipa::path(patch, path = "/api/profile", tag = "Profile", request_body = UpdateProfileRequest,
    responses((status = 200, body = ProfileResponse)))]
pub async fn update_profile(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, StatusCode> {
    let user_id = require_user(&ctx.cfg, bearer)?;
    let users = ctx.user_repo();
    let uc = UpdateProfile {
        repo: users.as_ref(),
    };
    uc.execute(user_id, req.name, req.contact)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::NOT_FOUND)?;

    // Respond with the full, freshly populated profile
    let pins = ctx.pin_repo();
    let boards = ctx.board_repo();
    let images = ctx.image_store();
    let uc = GetProfile {
        users: users.as_ref(),
        pins: pins.as_ref(),
        boards: boards.as_ref(),
        images: images.as_ref(),
    };
    let profile = uc
        .execute(user_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(profile.into()))
}

/// POST /api/profile/avatar (multipart/form-data)
#[utoipa::path(
    post,
    path = "/api/profile/avatar",
    tag = "Profile",
    request_body(
        content = AvatarMultipart,
        content_type = "multipart/form-data",
    ),
    responses((status = 200, body = AvatarResponse))
)]
pub async fn upload_avatar(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    mut multipart: Multipart,
) -> Result<Json<AvatarResponse>, StatusCode> {
    let user_id = require_user(&ctx.cfg, bearer)?;

    let mut bytes: Option<Vec<u8>> = None;
    let mut content_type: Option<String> = None;
    while let Some(field) = multipart.next_field().await.map_err(|e| e.status())? {
        if field.name() == Some("image") {
            content_type = field.content_type().map(|s| s.to_string());
            let data = field.bytes().await.map_err(|e| e.status())?;
            if data.len() > ctx.cfg.upload_max_bytes {
                return Err(StatusCode::PAYLOAD_TOO_LARGE);
            }
            bytes = Some(data.to_vec());
        }
    }
    let bytes = bytes.filter(|b| !b.is_empty()).ok_or(StatusCode::BAD_REQUEST)?;

    let users = ctx.user_repo();
    let images = ctx.image_store();
    let uc = SetAvatar {
        users: users.as_ref(),
        images: images.as_ref(),
    };
    let avatar_url = uc
        .execute(user_id, bytes, content_type.as_deref())
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    Ok(Json(AvatarResponse { avatar_url }))
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/profile", get(get_profile).patch(update_profile))
        .route("/profile/avatar", post(upload_avatar))
        .with_state(ctx)
}
