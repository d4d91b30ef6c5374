use uuid::Uuid;

use crate::application::dto::boards::BoardDto;
use crate::application::ports::board_repository::BoardRepository;
use crate::application::ports::image_store::ImageStore;
use crate::application::services::images::with_signed_url;

pub struct ListBoards<'a, R, S>
where
    R: BoardRepository + ?Sized,
    S: ImageStore + ?Sized,
{
    pub boards: &'a R,
    pub images: &'a S,
}

impl<'a, R, S> ListBoards<'a, R, S>
where
    R: BoardRepository + ?Sized,
    S: ImageStore + ?Sized,
{
    pub async fn execute(&self, owner_id: Uuid) -> anyhow::Result<Vec<BoardDto>> {
        let boards = self.boards.list_for_owner(owner_id).await?;
        let mut out = Vec::with_capacity(boards.len());
        for board in boards {
            let rows = self.boards.list_pins(board.id).await?;
            let mut pins = Vec::with_capacity(rows.len());
            for pin in rows {
                pins.push(with_signed_url(self.images, pin).await?);
            }
            out.push(BoardDto {
                id: board.id,
                owner_id: board.owner_id,
                title: board.title,
                created_at: board.created_at,
                pins,
            });
        }
        Ok(out)
    }
}
