pub mod board_repository_sqlx;
pub mod pin_repository_sqlx;
pub mod user_repository_sqlx;
