use uuid::Uuid;

use crate::application::dto::pins::PinWithAuthorDto;
use crate::application::ports::image_store::ImageStore;
use crate::application::ports::pin_repository::PinRepository;
use crate::application::services::images::with_signed_url;

pub struct GetPin<'a, R, S>
where
    R: PinRepository + ?Sized,
    S: ImageStore + ?Sized,
{
    pub pins: &'a R,
    pub images: &'a S,
}

impl<'a, R, S> GetPin<'a, R, S>
where
    R: PinRepository + ?Sized,
    S: ImageStore + ?Sized,
{
    pub async fn execute(&self, id: Uuid) -> anyhow::Result<Option<PinWithAuthorDto>> {
        let Some(found) = self.pins.get_with_author(id).await? else {
            return Ok(None);
        };
        let pin = with_signed_url(self.images, found.pin).await?;
        Ok(Some(PinWithAuthorDto {
            pin,
            author_username: found.author_username,
            author_name: found.author_name,
        }))
    }
}
