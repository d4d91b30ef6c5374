use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::boards::board::Board;
use crate::domain::pins::pin::Pin;

#[async_trait]
pub trait BoardRepository: Send + Sync {
    async fn create_for_owner(&self, owner_id: Uuid, title: &str) -> anyhow::Result<Board>;
    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Board>>;
    async fn list_for_owner(&self, owner_id: Uuid) -> anyhow::Result<Vec<Board>>;
    async fn list_pins(&self, board_id: Uuid) -> anyhow::Result<Vec<Pin>>;
    async fn add_pin(&self, board_id: Uuid, pin_id: Uuid) -> anyhow::Result<()>;
}
