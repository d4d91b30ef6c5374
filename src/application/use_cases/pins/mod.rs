pub mod create_pin;
pub mod delete_pin;
pub mod feed;
pub mod get_pin;
pub mod list_pins;
