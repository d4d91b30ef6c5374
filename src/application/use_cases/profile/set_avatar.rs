use uuid::Uuid;

use crate::application::ports::image_store::ImageStore;
use crate::application::ports::user_repository::UserRepository;
use crate::application::services::images::random_image_key;

pub struct SetAvatar<'a, U, S>
where
    U: UserRepository + ?Sized,
    S: ImageStore + ?Sized,
{
    pub users: &'a U,
    pub images: &'a S,
}

impl<'a, U, S> SetAvatar<'a, U, S>
where
    U: UserRepository + ?Sized,
    S: ImageStore + ?Sized,
{
    /// Uploads the new avatar under a fresh key and reclaims the previous
    /// object. Returns a signed URL for the new avatar.
    pub async fn execute(
        &self,
        user_id: Uuid,
        bytes: Vec<u8>,
        content_type: Option<&str>,
    ) -> anyhow::Result<String> {
        let key = random_image_key();
        self.images.put_image(&key, &bytes, content_type).await?;
        let previous = self.users.set_avatar_key(user_id, &key).await?;
        if let Some(old_key) = previous {
            if let Err(err) = self.images.delete_image(&old_key).await {
                tracing::warn!(error = ?err, user_id = %user_id, key = %old_key, "delete_old_avatar_failed");
            }
        }
        self.images.signed_url(&key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{MemoryImages, MemoryUsers};

    #[tokio::test]
    async fn replacing_an_avatar_reclaims_the_old_object() {
        let users = MemoryUsers::default();
        let images = MemoryImages::default();
        let user = users
            .create_user("alice", "alice@example.com", "Alice", None, "hash")
            .await
            .unwrap();

        let uc = SetAvatar {
            users: &users,
            images: &images,
        };
        let first = uc.execute(user.id, b"v1".to_vec(), None).await.unwrap();
        let second = uc.execute(user.id, b"v2".to_vec(), None).await.unwrap();

        assert_ne!(first, second);
        let objects = images.objects.lock().unwrap();
        assert_eq!(objects.len(), 1);
        assert_eq!(objects.values().next().unwrap(), b"v2");
    }
}
