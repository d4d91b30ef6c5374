use crate::application::dto::pins::PinWithAuthorDto;
use crate::application::ports::image_store::ImageStore;
use crate::application::ports::pin_repository::PinRepository;
use crate::application::services::images::with_signed_url;

pub struct GetFeed<'a, R, S>
where
    R: PinRepository + ?Sized,
    S: ImageStore + ?Sized,
{
    pub pins: &'a R,
    pub images: &'a S,
}

impl<'a, R, S> GetFeed<'a, R, S>
where
    R: PinRepository + ?Sized,
    S: ImageStore + ?Sized,
{
    pub async fn execute(&self, limit: i64) -> anyhow::Result<Vec<PinWithAuthorDto>> {
        let rows = self.pins.list_all(limit).await?;
        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            let pin = with_signed_url(self.images, row.pin).await?;
            out.push(PinWithAuthorDto {
                pin,
                author_username: row.author_username,
                author_name: row.author_name,
            });
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{MemoryImages, MemoryPins};
    use crate::domain::pins::pin::Pin;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    fn seed_pin(pins: &MemoryPins, images: &MemoryImages, title: &str, age: Duration) {
        let key = format!("{:032x}", pins.rows.lock().unwrap().len() + 1);
        images
            .objects
            .lock()
            .unwrap()
            .insert(key.clone(), vec![0u8]);
        pins.rows.lock().unwrap().push(Pin {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            title: title.to_string(),
            description: None,
            tags: Vec::new(),
            image_key: key,
            content_hash: String::new(),
            created_at: Utc::now() - age,
        });
    }

    #[tokio::test]
    async fn feed_is_newest_first_and_honours_the_limit() {
        let pins = MemoryPins::default();
        let images = MemoryImages::default();
        seed_pin(&pins, &images, "oldest", Duration::hours(3));
        seed_pin(&pins, &images, "newest", Duration::hours(0));
        seed_pin(&pins, &images, "middle", Duration::hours(1));

        let uc = GetFeed {
            pins: &pins,
            images: &images,
        };
        let all = uc.execute(10).await.unwrap();
        let titles: Vec<&str> = all.iter().map(|p| p.pin.title.as_str()).collect();
        assert_eq!(titles, vec!["newest", "middle", "oldest"]);

        let capped = uc.execute(2).await.unwrap();
        assert_eq!(capped.len(), 2);
        assert_eq!(capped[0].pin.title, "newest");
    }
}
