pub mod images;
pub mod tags;
