pub mod auth;
pub mod boards;
pub mod pins;
pub mod profile;
