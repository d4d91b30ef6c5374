use uuid::Uuid;

use crate::application::dto::boards::BoardDto;
use crate::application::dto::pins::PinDto;

#[derive(Debug, Clone)]
pub struct ProfileDto {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub name: String,
    pub contact: Option<String>,
    pub avatar_url: Option<String>,
    pub pins: Vec<PinDto>,
    pub boards: Vec<BoardDto>,
}
