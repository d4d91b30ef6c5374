use async_trait::async_trait;

/// Object-storage access for pin images and avatars. Keys are opaque random
/// hex strings generated at upload time; reads go through time-limited signed
/// URLs rather than proxying bytes.
#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn put_image(
        &self,
        key: &str,
        bytes: &[u8],
        content_type: Option<&str>,
    ) -> anyhow::Result<()>;

    /// Presigned GET URL for a private object; expiry comes from configuration.
    async fn signed_url(&self, key: &str) -> anyhow::Result<String>;

    async fn delete_image(&self, key: &str) -> anyhow::Result<()>;
}
