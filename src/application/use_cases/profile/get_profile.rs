use uuid::Uuid;

use crate::application::dto::profile::ProfileDto;
use crate::application::ports::board_repository::BoardRepository;
use crate::application::ports::image_store::ImageStore;
use crate::application::ports::pin_repository::PinRepository;
use crate::application::ports::user_repository::UserRepository;
use crate::application::use_cases::boards::list_boards::ListBoards;
use crate::application::use_cases::pins::list_pins::ListPins;

pub struct GetProfile<'a, U, P, B, S>
where
    U: UserRepository + ?Sized,
    P: PinRepository + ?Sized,
    B: BoardRepository + ?Sized,
    S: ImageStore + ?Sized,
{
    pub users: &'a U,
    pub pins: &'a P,
    pub boards: &'a B,
    pub images: &'a S,
}

impl<'a, U, P, B, S> GetProfile<'a, U, P, B, S>
where
    U: UserRepository + ?Sized,
    P: PinRepository + ?Sized,
    B: BoardRepository + ?Sized,
    S: ImageStore + ?Sized,
{
    pub async fn execute(&self, user_id: Uuid) -> anyhow::Result<Option<ProfileDto>> {
        let Some(user) = self.users.find_by_id(user_id).await? else {
            return Ok(None);
        };

        let pins = ListPins {
            pins: self.pins,
            images: self.images,
        }
        .execute(user_id)
        .await?;

        let boards = ListBoards {
            boards: self.boards,
            images: self.images,
        }
        .execute(user_id)
        .await?;

        let avatar_url = match user.avatar_key.as_deref() {
            Some(key) => Some(self.images.signed_url(key).await?),
            None => None,
        };

        Ok(Some(ProfileDto {
            id: user.id,
            username: user.username,
            email: user.email,
            name: user.name,
            contact: user.contact,
            avatar_url,
            pins,
            boards,
        }))
    }
}
