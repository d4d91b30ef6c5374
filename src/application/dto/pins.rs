use uuid::Uuid;

/// A pin ready for presentation: the private object key has been exchanged for
/// a time-limited signed URL.
#[derive(Debug, Clone)]
pub struct PinDto {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub image_url: String,
    pub content_hash: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone)]
pub struct PinWithAuthorDto {
    pub pin: PinDto,
    pub author_username: String,
    pub author_name: String,
}
