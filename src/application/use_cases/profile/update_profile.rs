use uuid::Uuid;

use crate::application::ports::user_repository::{UserRepository, UserRow};

pub struct UpdateProfile<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> UpdateProfile<'a, R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        name: Option<String>,
        contact: Option<String>,
    ) -> anyhow::Result<Option<UserRow>> {
        self.repo
            .update_profile(user_id, name.as_deref(), contact.as_deref())
            .await
    }
}
