use uuid::Uuid;

use crate::application::dto::pins::PinDto;
use crate::application::ports::board_repository::BoardRepository;
use crate::application::ports::image_store::ImageStore;
use crate::application::ports::pin_repository::PinRepository;
use crate::application::use_cases::pins::create_pin::CreatePin;

pub struct AddPinToBoard<'a, B, P, S>
where
    B: BoardRepository + ?Sized,
    P: PinRepository + ?Sized,
    S: ImageStore + ?Sized,
{
    pub boards: &'a B,
    pub pins: &'a P,
    pub images: &'a S,
}

impl<'a, B, P, S> AddPinToBoard<'a, B, P, S>
where
    B: BoardRepository + ?Sized,
    P: PinRepository + ?Sized,
    S: ImageStore + ?Sized,
{
    /// Creates a pin and links it to the board. Returns None when the board
    /// does not exist; any authenticated user may pin to an existing board.
    #[allow(clippy::too_many_arguments)]
    pub async fn execute(
        &self,
        board_id: Uuid,
        owner_id: Uuid,
        title: &str,
        description: Option<&str>,
        tags_raw: Option<&str>,
        bytes: Vec<u8>,
        content_type: Option<&str>,
    ) -> anyhow::Result<Option<PinDto>> {
        if self.boards.get_by_id(board_id).await?.is_none() {
            return Ok(None);
        }
        let uc = CreatePin {
            pins: self.pins,
            images: self.images,
        };
        let pin = uc
            .execute(owner_id, title, description, tags_raw, bytes, content_type)
            .await?;
        self.boards.add_pin(board_id, pin.id).await?;
        Ok(Some(pin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{MemoryBoards, MemoryImages, MemoryPins};

    #[tokio::test]
    async fn missing_board_creates_nothing() {
        let boards = MemoryBoards::default();
        let images = MemoryImages::default();
        let uc = AddPinToBoard {
            boards: &boards,
            pins: boards.pins.as_ref(),
            images: &images,
        };
        let out = uc
            .execute(
                Uuid::new_v4(),
                Uuid::new_v4(),
                "Sunset",
                None,
                None,
                b"bytes".to_vec(),
                None,
            )
            .await
            .unwrap();
        assert!(out.is_none());
        assert!(boards.pins.rows.lock().unwrap().is_empty());
        assert!(images.objects.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn any_user_may_pin_to_an_existing_board() {
        let boards = MemoryBoards::default();
        let images = MemoryImages::default();
        let board_owner = Uuid::new_v4();
        let board = boards.create_for_owner(board_owner, "Trips").await.unwrap();

        let other_user = Uuid::new_v4();
        let uc = AddPinToBoard {
            boards: &boards,
            pins: boards.pins.as_ref(),
            images: &images,
        };
        let pin = uc
            .execute(
                board.id,
                other_user,
                "Sunset",
                None,
                None,
                b"bytes".to_vec(),
                None,
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(pin.owner_id, other_user);
        let linked = boards.list_pins(board.id).await.unwrap();
        assert_eq!(linked.len(), 1);
        assert_eq!(linked[0].id, pin.id);
    }
}
