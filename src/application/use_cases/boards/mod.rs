pub mod add_pin;
pub mod create_board;
pub mod get_board;
pub mod list_boards;
