pub mod auth;
pub mod boards;
pub mod health;
pub mod pins;
pub mod profile;
