pub mod boards;
pub mod pins;
