pub mod get_profile;
pub mod set_avatar;
pub mod update_profile;
