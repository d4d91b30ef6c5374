use uuid::Uuid;

use crate::application::dto::pins::PinDto;

#[derive(Debug, Clone)]
pub struct BoardDto {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub pins: Vec<PinDto>,
}
