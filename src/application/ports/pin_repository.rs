use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::pins::pin::{Pin, PinWithAuthor};

#[async_trait]
pub trait PinRepository: Send + Sync {
    async fn insert_pin(
        &self,
        owner_id: Uuid,
        title: &str,
        description: Option<&str>,
        tags: &[String],
        image_key: &str,
        content_hash: &str,
    ) -> anyhow::Result<Pin>;

    async fn get_with_author(&self, id: Uuid) -> anyhow::Result<Option<PinWithAuthor>>;

    async fn list_for_owner(&self, owner_id: Uuid) -> anyhow::Result<Vec<Pin>>;

    // Full feed, newest first
    async fn list_all(&self, limit: i64) -> anyhow::Result<Vec<PinWithAuthor>>;

    // Returns Some(image_key) if the pin existed, None otherwise; owner check is
    // reported separately so the handler can distinguish 403 from 404
    async fn get_owner_and_key(&self, id: Uuid) -> anyhow::Result<Option<(Uuid, String)>>;

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
}
