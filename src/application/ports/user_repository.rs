use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub name: String,
    pub contact: Option<String>,
    pub avatar_key: Option<String>,
    pub password_hash: Option<String>,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(
        &self,
        username: &str,
        email: &str,
        name: &str,
        contact: Option<&str>,
        password_hash: &str,
    ) -> anyhow::Result<UserRow>;
    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<UserRow>>;
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<UserRow>>;
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<UserRow>>;
    // name/contact: None => leave unchanged
    async fn update_profile(
        &self,
        id: Uuid,
        name: Option<&str>,
        contact: Option<&str>,
    ) -> anyhow::Result<Option<UserRow>>;
    // Returns the previous avatar key, if any, so the caller can reclaim the object
    async fn set_avatar_key(&self, id: Uuid, key: &str) -> anyhow::Result<Option<String>>;
}
