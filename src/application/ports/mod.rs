pub mod board_repository;
pub mod image_store;
pub mod pin_repository;
pub mod user_repository;
