use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Pin {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub image_key: String,
    // sha-256 of the uploaded bytes, lowercase hex
    pub content_hash: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// A pin joined with its author, as shown on the feed and detail pages.
#[derive(Debug, Clone)]
pub struct PinWithAuthor {
    pub pin: Pin,
    pub author_username: String,
    pub author_name: String,
}
