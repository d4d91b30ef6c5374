use axum::{
    Json, Router,
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::dto::pins::{PinDto, PinWithAuthorDto};
use crate::application::use_cases::pins::create_pin::CreatePin;
use crate::application::use_cases::pins::delete_pin::{DeletePin, DeletePinOutcome};
use crate::application::use_cases::pins::feed::GetFeed;
use crate::application::use_cases::pins::get_pin::GetPin;
use crate::application::use_cases::pins::list_pins::ListPins;
use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::auth::{Bearer, require_user};

#[derive(Debug, Serialize, ToSchema)]
pub struct PinResponse {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub image_url: String,
    /// sha-256 of the image bytes, usable as a stable cache key
    pub content_hash: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<PinDto> for PinResponse {
    fn from(d: PinDto) -> Self {
        PinResponse {
            id: d.id,
            owner_id: d.owner_id,
            title: d.title,
            description: d.description,
            tags: d.tags,
            image_url: d.image_url,
            content_hash: d.content_hash,
            created_at: d.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FeedPinResponse {
    #[serde(flatten)]
    pub pin: PinResponse,
    pub author_username: String,
    pub author_name: String,
}

impl From<PinWithAuthorDto> for FeedPinResponse {
    fn from(d: PinWithAuthorDto) -> Self {
        FeedPinResponse {
            pin: d.pin.into(),
            author_username: d.author_username,
            author_name: d.author_name,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PinListResponse {
    pub items: Vec<PinResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FeedResponse {
    pub items: Vec<FeedPinResponse>,
}

#[derive(ToSchema)]
#[allow(dead_code)]
pub struct CreatePinMultipart {
    /// Image to upload
    #[schema(value_type = String, format = Binary)]
    image: String,
    title: String,
    description: Option<String>,
    /// Free-form tags field, e.g. "nature, sunset"
    tags: Option<String>,
}

/// Parsed `multipart/form-data` pin form (title, description, tags, image).
#[derive(Debug)]
pub(crate) struct PinForm {
    pub title: String,
    pub description: Option<String>,
    pub tags: Option<String>,
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

pub(crate) async fn read_pin_form(
    mut multipart: Multipart,
    upload_max_bytes: usize,
) -> Result<PinForm, StatusCode> {
    let mut title: Option<String> = None;
    let mut description: Option<String> = None;
    let mut tags: Option<String> = None;
    let mut bytes: Option<Vec<u8>> = None;
    let mut content_type: Option<String> = None;

    // Multipart errors keep their own status so a body over the global limit
    // surfaces as 413, not 400
    while let Some(field) = multipart.next_field().await.map_err(|e| e.status())? {
        let name = field.name().map(|s| s.to_string());
        let file_name = field.file_name().map(|s| s.to_string());
        let ct = field.content_type().map(|s| s.to_string());
        match name.as_deref() {
            Some("title") => {
                title = Some(field.text().await.map_err(|e| e.status())?);
            }
            Some("description") => {
                description = Some(field.text().await.map_err(|e| e.status())?);
            }
            Some("tags") => {
                tags = Some(field.text().await.map_err(|e| e.status())?);
            }
            Some("image") => {
                // Content type from the part, falling back to the filename extension
                content_type = ct.or_else(|| {
                    file_name
                        .as_deref()
                        .map(|f| mime_guess::from_path(f).first_or_octet_stream().to_string())
                });
                let data = field.bytes().await.map_err(|e| e.status())?;
                // Enforce configured max upload size (additional safety besides DefaultBodyLimit)
                if data.len() > upload_max_bytes {
                    return Err(StatusCode::PAYLOAD_TOO_LARGE);
                }
                bytes = Some(data.to_vec());
            }
            _ => { /* ignore additional fields */ }
        }
    }

    let title = title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or(StatusCode::BAD_REQUEST)?;
    let bytes = bytes.filter(|b| !b.is_empty()).ok_or(StatusCode::BAD_REQUEST)?;
    Ok(PinForm {
        title,
        description: description.filter(|d| !d.trim().is_empty()),
        tags,
        bytes,
        content_type,
    })
}

/// POST /api/pins (multipart/form-data)
#[utoipa::path(
    post,
    path = "/api/pins",
    tag = "Pins",
    request_body(
        content = CreatePinMultipart,
        content_type = "multipart/form-data",
    ),
    responses(
        (status = 201, description = "Pin created", body = PinResponse)
    )
)]
pub async fn create_pin(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    multipart: Multipart,
) -> Result<(StatusCode, Json<PinResponse>), StatusCode> {
    let user_id = require_user(&ctx.cfg, bearer)?;
    let form = read_pin_form(multipart, ctx.cfg.upload_max_bytes).await?;

    let pins = ctx.pin_repo();
    let images = ctx.image_store();
    let uc = CreatePin {
        pins: pins.as_ref(),
        images: images.as_ref(),
    };
    let pin = uc
        .execute(
            user_id,
            &form.title,
            form.description.as_deref(),
            form.tags.as_deref(),
            form.bytes,
            form.content_type.as_deref(),
        )
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    Ok((StatusCode::CREATED, Json(pin.into())))
}

#[utoipa::path(get, path = "/api/pins", tag = "Pins", responses((status = 200, body = PinListResponse)))]
pub async fn list_pins(
    State(ctx): State<AppContext>,
    bearer: Bearer,
) -> Result<Json<PinListResponse>, StatusCode> {
    let user_id = require_user(&ctx.cfg, bearer)?;
    let pins = ctx.pin_repo();
    let images = ctx.image_store();
    let uc = ListPins {
        pins: pins.as_ref(),
        images: images.as_ref(),
    };
    let items = uc
        .execute(user_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    Ok(Json(PinListResponse {
        items: items.into_iter().map(Into::into).collect(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    pub limit: Option<i64>,
}

#[utoipa::path(get, path = "/api/pins/feed", tag = "Pins",
    params(("limit" = Option<i64>, Query, description = "Max pins to return")),
    responses((status = 200, body = FeedResponse)))]
pub async fn feed(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    q: Option<Query<FeedQuery>>,
) -> Result<Json<FeedResponse>, StatusCode> {
    let _user_id = require_user(&ctx.cfg, bearer)?;
    let limit = q
        .and_then(|Query(v)| v.limit)
        .filter(|l| *l > 0)
        .unwrap_or(ctx.cfg.feed_limit);
    let pins = ctx.pin_repo();
    let images = ctx.image_store();
    let uc = GetFeed {
        pins: pins.as_ref(),
        images: images.as_ref(),
    };
    let items = uc
        .execute(limit)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    Ok(Json(FeedResponse {
        items: items.into_iter().map(Into::into).collect(),
    }))
}

#[utoipa::path(get, path = "/api/pins/{id}", tag = "Pins",
    params(("id" = Uuid, Path, description = "Pin ID")),
    responses((status = 200, body = FeedPinResponse), (status = 404, description = "Pin not found")))]
pub async fn get_pin(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<Uuid>,
) -> Result<Json<FeedPinResponse>, StatusCode> {
    let _user_id = require_user(&ctx.cfg, bearer)?;
    let pins = ctx.pin_repo();
    let images = ctx.image_store();
    let uc = GetPin {
        pins: pins.as_ref(),
        images: images.as_ref(),
    };
    let pin = uc
        .execute(id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(pin.into()))
}

#[utoipa::path(delete, path = "/api/pins/{id}", tag = "Pins",
    params(("id" = Uuid, Path, description = "Pin ID")),
    responses((status = 204), (status = 403, description = "Not the owner"), (status = 404, description = "Pin not found")))]
pub async fn delete_pin(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    let user_id = require_user(&ctx.cfg, bearer)?;
    let pins = ctx.pin_repo();
    let images = ctx.image_store();
    let uc = DeletePin {
        pins: pins.as_ref(),
        images: images.as_ref(),
    };
    match uc
        .execute(id, user_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
    {
        DeletePinOutcome::Deleted => Ok(StatusCode::NO_CONTENT),
        DeletePinOutcome::NotFound => Err(StatusCode::NOT_FOUND),
        DeletePinOutcome::NotOwner => Err(StatusCode::FORBIDDEN),
    }
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/pins", get(list_pins).post(create_pin))
        .route("/pins/feed", get(feed))
        .route("/pins/:id", get(get_pin).delete(delete_pin))
        .with_state(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::extract::FromRequest;

    const BOUNDARY: &str = "pinform";

    fn text_part(name: &str, value: &str) -> String {
        format!("--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
    }

    async fn multipart_from(body: Vec<u8>) -> Multipart {
        let req = axum::http::Request::builder()
            .header(
                axum::http::header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();
        Multipart::from_request(req, &()).await.unwrap()
    }

    async fn pin_form_with_image(image: &[u8]) -> Multipart {
        let mut body = text_part("title", "Sunset").into_bytes();
        body.extend_from_slice(text_part("tags", "Nature, sunset").as_bytes());
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"sunset.jpg\"\r\nContent-Type: image/jpeg\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(image);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
        multipart_from(body).await
    }

    #[tokio::test]
    async fn parses_a_complete_form() {
        let mp = pin_form_with_image(b"jpeg-bytes").await;
        let form = read_pin_form(mp, 1024).await.unwrap();
        assert_eq!(form.title, "Sunset");
        assert_eq!(form.tags.as_deref(), Some("Nature, sunset"));
        assert_eq!(form.bytes, b"jpeg-bytes");
        assert_eq!(form.content_type.as_deref(), Some("image/jpeg"));
    }

    #[tokio::test]
    async fn oversized_image_is_rejected_with_413() {
        let mp = pin_form_with_image(&[0u8; 64]).await;
        let err = read_pin_form(mp, 16).await.unwrap_err();
        assert_eq!(err, StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn missing_image_is_a_bad_request() {
        let mut body = text_part("title", "Sunset").into_bytes();
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        let mp = multipart_from(body).await;
        let err = read_pin_form(mp, 1024).await.unwrap_err();
        assert_eq!(err, StatusCode::BAD_REQUEST);
    }
}
