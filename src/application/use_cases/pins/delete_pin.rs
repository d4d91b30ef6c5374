use uuid::Uuid;

use crate::application::ports::image_store::ImageStore;
use crate::application::ports::pin_repository::PinRepository;

#[derive(Debug, PartialEq, Eq)]
pub enum DeletePinOutcome {
    Deleted,
    NotFound,
    NotOwner,
}

pub struct DeletePin<'a, R, S>
where
    R: PinRepository + ?Sized,
    S: ImageStore + ?Sized,
{
    pub pins: &'a R,
    pub images: &'a S,
}

impl<'a, R, S> DeletePin<'a, R, S>
where
    R: PinRepository + ?Sized,
    S: ImageStore + ?Sized,
{
    pub async fn execute(&self, id: Uuid, user_id: Uuid) -> anyhow::Result<DeletePinOutcome> {
        let Some((owner_id, image_key)) = self.pins.get_owner_and_key(id).await? else {
            return Ok(DeletePinOutcome::NotFound);
        };
        if owner_id != user_id {
            return Ok(DeletePinOutcome::NotOwner);
        }
        // Storage object first, then the row
        if let Err(err) = self.images.delete_image(&image_key).await {
            tracing::warn!(error = ?err, pin_id = %id, key = %image_key, "delete_image_failed");
        }
        self.pins.delete(id).await?;
        Ok(DeletePinOutcome::Deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{MemoryImages, MemoryPins};
    use crate::application::use_cases::pins::create_pin::CreatePin;

    async fn seed(pins: &MemoryPins, images: &MemoryImages, owner: Uuid) -> Uuid {
        CreatePin { pins, images }
            .execute(owner, "Sunset", None, None, b"bytes".to_vec(), None)
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn owner_delete_removes_row_and_object() {
        let pins = MemoryPins::default();
        let images = MemoryImages::default();
        let owner = Uuid::new_v4();
        let id = seed(&pins, &images, owner).await;

        let uc = DeletePin {
            pins: &pins,
            images: &images,
        };
        let outcome = uc.execute(id, owner).await.unwrap();
        assert_eq!(outcome, DeletePinOutcome::Deleted);
        assert!(pins.rows.lock().unwrap().is_empty());
        assert!(images.objects.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn non_owner_delete_is_refused_and_keeps_the_object() {
        let pins = MemoryPins::default();
        let images = MemoryImages::default();
        let id = seed(&pins, &images, Uuid::new_v4()).await;

        let uc = DeletePin {
            pins: &pins,
            images: &images,
        };
        let outcome = uc.execute(id, Uuid::new_v4()).await.unwrap();
        assert_eq!(outcome, DeletePinOutcome::NotOwner);
        assert_eq!(pins.rows.lock().unwrap().len(), 1);
        assert_eq!(images.objects.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn missing_pin_is_not_found() {
        let pins = MemoryPins::default();
        let images = MemoryImages::default();
        let uc = DeletePin {
            pins: &pins,
            images: &images,
        };
        let outcome = uc.execute(Uuid::new_v4(), Uuid::new_v4()).await.unwrap();
        assert_eq!(outcome, DeletePinOutcome::NotFound);
    }
}
