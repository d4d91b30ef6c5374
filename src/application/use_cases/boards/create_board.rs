use uuid::Uuid;

use crate::application::ports::board_repository::BoardRepository;
use crate::domain::boards::board::Board;

pub struct CreateBoard<'a, R: BoardRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: BoardRepository + ?Sized> CreateBoard<'a, R> {
    pub async fn execute(&self, owner_id: Uuid, title: &str) -> anyhow::Result<Board> {
        self.repo.create_for_owner(owner_id, title).await
    }
}
