use uuid::Uuid;

use crate::application::dto::pins::PinDto;
use crate::application::ports::image_store::ImageStore;
use crate::application::ports::pin_repository::PinRepository;
use crate::application::services::images::{content_hash, random_image_key, with_signed_url};
use crate::application::services::tags::normalize_tags;

pub struct CreatePin<'a, R, S>
where
    R: PinRepository + ?Sized,
    S: ImageStore + ?Sized,
{
    pub pins: &'a R,
    pub images: &'a S,
}

impl<'a, R, S> CreatePin<'a, R, S>
where
    R: PinRepository + ?Sized,
    S: ImageStore + ?Sized,
{
    // Upload-then-persist: the object must exist before the row referencing it
    pub async fn execute(
        &self,
        owner_id: Uuid,
        title: &str,
        description: Option<&str>,
        tags_raw: Option<&str>,
        bytes: Vec<u8>,
        content_type: Option<&str>,
    ) -> anyhow::Result<PinDto> {
        let key = random_image_key();
        self.images
            .put_image(&key, &bytes, content_type)
            .await
            .map_err(|err| {
                tracing::error!(error = ?err, key = %key, "image_upload_failed");
                err
            })?;

        let tags = normalize_tags(tags_raw);
        let hash = content_hash(&bytes);
        let pin = self
            .pins
            .insert_pin(owner_id, title, description, &tags, &key, &hash)
            .await
            .map_err(|err| {
                tracing::error!(error = ?err, key = %key, "insert_pin_failed");
                err
            })?;
        with_signed_url(self.images, pin).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{MemoryImages, MemoryPins};

    #[tokio::test]
    async fn create_uploads_the_object_and_persists_the_row() {
        let pins = MemoryPins::default();
        let images = MemoryImages::default();
        let uc = CreatePin {
            pins: &pins,
            images: &images,
        };

        let owner = Uuid::new_v4();
        let dto = uc
            .execute(
                owner,
                "Sunset",
                Some("over the bay"),
                Some("Sunset, Beach, sunset"),
                b"fake-jpeg-bytes".to_vec(),
                Some("image/jpeg"),
            )
            .await
            .unwrap();

        assert_eq!(dto.title, "Sunset");
        assert_eq!(dto.tags, vec!["sunset", "beach"]);
        assert_eq!(dto.content_hash, content_hash(b"fake-jpeg-bytes"));

        let rows = pins.rows.lock().unwrap();
        assert_eq!(rows.len(), 1);
        let key = &rows[0].image_key;
        assert_eq!(key.len(), 32);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(images.objects.lock().unwrap().contains_key(key));
        assert!(dto.image_url.contains(key));
    }
}
