use uuid::Uuid;

use crate::application::dto::boards::BoardDto;
use crate::application::ports::board_repository::BoardRepository;
use crate::application::ports::image_store::ImageStore;
use crate::application::services::images::with_signed_url;

pub struct GetBoard<'a, R, S>
where
    R: BoardRepository + ?Sized,
    S: ImageStore + ?Sized,
{
    pub boards: &'a R,
    pub images: &'a S,
}

impl<'a, R, S> GetBoard<'a, R, S>
where
    R: BoardRepository + ?Sized,
    S: ImageStore + ?Sized,
{
    pub async fn execute(&self, id: Uuid) -> anyhow::Result<Option<BoardDto>> {
        let Some(board) = self.boards.get_by_id(id).await? else {
            return Ok(None);
        };
        let rows = self.boards.list_pins(board.id).await?;
        let mut pins = Vec::with_capacity(rows.len());
        for pin in rows {
            pins.push(with_signed_url(self.images, pin).await?);
        }
        Ok(Some(BoardDto {
            id: board.id,
            owner_id: board.owner_id,
            title: board.title,
            created_at: board.created_at,
            pins,
        }))
    }
}
