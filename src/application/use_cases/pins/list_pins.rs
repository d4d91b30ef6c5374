use uuid::Uuid;

use crate::application::dto::pins::PinDto;
use crate::application::ports::image_store::ImageStore;
use crate::application::ports::pin_repository::PinRepository;
use crate::application::services::images::with_signed_url;

pub struct ListPins<'a, R, S>
where
    R: PinRepository + ?Sized,
    S: ImageStore + ?Sized,
{
    pub pins: &'a R,
    pub images: &'a S,
}

impl<'a, R, S> ListPins<'a, R, S>
where
    R: PinRepository + ?Sized,
    S: ImageStore + ?Sized,
{
    pub async fn execute(&self, owner_id: Uuid) -> anyhow::Result<Vec<PinDto>> {
        let rows = self.pins.list_for_owner(owner_id).await?;
        let mut out = Vec::with_capacity(rows.len());
        for pin in rows {
            out.push(with_signed_url(self.images, pin).await?);
        }
        Ok(out)
    }
}
