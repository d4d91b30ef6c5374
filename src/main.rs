use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::extract::MatchedPath;
use dotenvy::dotenv;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use pinboard::bootstrap::app_context::{AppContext, AppServices};
use pinboard::bootstrap::config::Config;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
        paths(
            pinboard::presentation::http::auth::register,
            pinboard::presentation::http::auth::login,
            pinboard::presentation::http::auth::logout,
            pinboard::presentation::http::auth::me,
            pinboard::presentation::http::profile::get_profile,
            pinboard::presentation::http::profile::update_profile,
            pinboard::presentation::http::profile::upload_avatar,
            pinboard::presentation::http::pins::create_pin,
            pinboard::presentation::http::pins::list_pins,
            pinboard::presentation::http::pins::feed,
            pinboard::presentation::http::pins::get_pin,
            pinboard::presentation::http::pins::delete_pin,
            pinboard::presentation::http::boards::create_board,
            pinboard::presentation::http::boards::list_boards,
            pinboard::presentation::http::boards::get_board,
            pinboard::presentation::http::boards::add_pin,
            pinboard::presentation::http::health::health,
        ),
        components(schemas(
            pinboard::presentation::http::auth::RegisterRequest,
            pinboard::presentation::http::auth::LoginRequest,
            pinboard::presentation::http::auth::LoginResponse,
            pinboard::presentation::http::auth::UserResponse,
            pinboard::presentation::http::auth::ErrorResponse,
            pinboard::presentation::http::profile::ProfileResponse,
            pinboard::presentation::http::profile::UpdateProfileRequest,
            pinboard::presentation::http::profile::AvatarResponse,
            pinboard::presentation::http::profile::AvatarMultipart,
            pinboard::presentation::http::pins::PinResponse,
            pinboard::presentation::http::pins::FeedPinResponse,
            pinboard::presentation::http::pins::PinListResponse,
            pinboard::presentation::http::pins::FeedResponse,
            pinboard::presentation::http::pins::CreatePinMultipart,
            pinboard::presentation::http::boards::BoardResponse,
            pinboard::presentation::http::boards::BoardListResponse,
            pinboard::presentation::http::boards::CreateBoardRequest,
            pinboard::presentation::http::health::HealthResponse,
        )),
        tags(
            (name = "Auth", description = "Authentication"),
            (name = "Profile", description = "User profile"),
            (name = "Pins", description = "Image pins"),
            (name = "Boards", description = "Pin collections"),
            (name = "Health", description = "System health checks")
        )
    )]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "pinboard=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(?cfg, "Starting Pinboard backend");

    // Database
    let pool =
        pinboard::infrastructure::db::connect_pool(&cfg.database_url, cfg.db_max_connections)
            .await?;
    pinboard::infrastructure::db::migrate(&pool).await?;

    let image_store: Arc<dyn pinboard::application::ports::image_store::ImageStore> = Arc::new(
        pinboard::infrastructure::storage::s3::S3ImageStore::new(&cfg).await?,
    );

    let user_repo = Arc::new(
        pinboard::infrastructure::db::repositories::user_repository_sqlx::SqlxUserRepository::new(
            pool.clone(),
        ),
    );
    let pin_repo = Arc::new(
        pinboard::infrastructure::db::repositories::pin_repository_sqlx::SqlxPinRepository::new(
            pool.clone(),
        ),
    );
    let board_repo = Arc::new(
        pinboard::infrastructure::db::repositories::board_repository_sqlx::SqlxBoardRepository::new(
            pool.clone(),
        ),
    );

    let services = AppServices::new(user_repo, pin_repo, board_repo, image_store);
    let ctx = AppContext::new(cfg.clone(), services);

    // Build CORS
    let cors = if let Some(origin) = cfg.frontend_url.clone() {
        match HeaderValue::from_str(&origin) {
            Ok(v) => CorsLayer::new()
                .allow_origin(v)
                .allow_methods([
                    http::Method::GET,
                    http::Method::POST,
                    http::Method::DELETE,
                    http::Method::PATCH,
                    http::Method::OPTIONS,
                ])
                .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION])
                .allow_credentials(true),
            Err(_) => CorsLayer::new()
                .allow_origin(AllowOrigin::mirror_request())
                .allow_methods([
                    http::Method::GET,
                    http::Method::POST,
                    http::Method::DELETE,
                    http::Method::PATCH,
                    http::Method::OPTIONS,
                ])
                .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION])
                .allow_credentials(true),
        }
    } else if cfg.is_production {
        // FRONTEND_URL is mandatory in production (enforced earlier); deny all as fallback
        CorsLayer::new()
            .allow_origin(AllowOrigin::exact(HeaderValue::from_static(
                "http://invalid",
            )))
            .allow_methods([
                http::Method::GET,
                http::Method::POST,
                http::Method::DELETE,
                http::Method::PATCH,
                http::Method::OPTIONS,
            ])
            .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION])
    } else {
        // Development convenience
        CorsLayer::new()
            .allow_origin(AllowOrigin::mirror_request())
            .allow_methods([
                http::Method::GET,
                http::Method::POST,
                http::Method::DELETE,
                http::Method::PATCH,
                http::Method::OPTIONS,
            ])
            .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION])
            .allow_credentials(true)
    };

    // Build API router
    let app = Router::new()
        .nest(
            "/api",
            pinboard::presentation::http::health::routes(pool.clone()),
        )
        .nest(
            "/api/auth",
            pinboard::presentation::http::auth::routes(ctx.clone()),
        )
        .nest(
            "/api",
            pinboard::presentation::http::profile::routes(ctx.clone()),
        )
        .nest(
            "/api",
            pinboard::presentation::http::pins::routes(ctx.clone()),
        )
        .nest(
            "/api",
            pinboard::presentation::http::boards::routes(ctx.clone()),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        // Global body size limit for uploads (configurable)
        .layer(DefaultBodyLimit::max(cfg.upload_max_bytes))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        );

    let api_addr = SocketAddr::from(([0, 0, 0, 0], cfg.api_port));
    info!(%api_addr, "HTTP API listening");
    let listener = tokio::net::TcpListener::bind(api_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
