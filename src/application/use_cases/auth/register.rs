use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString},
};
use password_hash::rand_core::OsRng;
use thiserror::Error;

use crate::application::ports::user_repository::{UserRepository, UserRow};

pub struct Register<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub name: String,
    pub contact: Option<String>,
    pub password: String,
}

// Duplicate email and duplicate username get distinct messages, matching the
// behaviour of the registration form this API replaces.
#[derive(Debug, Error)]
pub enum RegisterError {
    #[error("Email and username are already in use.")]
    EmailAndUsernameTaken,
    #[error("Email is already in use.")]
    EmailTaken,
    #[error("Username is already in use.")]
    UsernameTaken,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl<'a, R: UserRepository + ?Sized> Register<'a, R> {
    pub async fn execute(&self, req: &RegisterRequest) -> Result<UserRow, RegisterError> {
        let email_taken = self.repo.find_by_email(&req.email).await?.is_some();
        let username_taken = self.repo.find_by_username(&req.username).await?.is_some();
        match (email_taken, username_taken) {
            (true, true) => return Err(RegisterError::EmailAndUsernameTaken),
            (true, false) => return Err(RegisterError::EmailTaken),
            (false, true) => return Err(RegisterError::UsernameTaken),
            (false, false) => {}
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(req.password.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!(e.to_string()))?
            .to_string();
        let user = self
            .repo
            .create_user(
                &req.username,
                &req.email,
                &req.name,
                req.contact.as_deref(),
                &hash,
            )
            .await?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::MemoryUsers;

    fn req(username: &str, email: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.into(),
            email: email.into(),
            name: "Alice".into(),
            contact: None,
            password: "hunter22".into(),
        }
    }

    #[tokio::test]
    async fn register_stores_a_hash_not_the_password() {
        let repo = MemoryUsers::default();
        let uc = Register { repo: &repo };
        let user = uc.execute(&req("alice", "alice@example.com")).await.unwrap();
        assert_eq!(user.username, "alice");
        let hash = user.password_hash.unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(!hash.contains("hunter22"));
    }

    #[tokio::test]
    async fn duplicate_email_and_username_get_distinct_errors() {
        let repo = MemoryUsers::default();
        let uc = Register { repo: &repo };
        uc.execute(&req("alice", "alice@example.com")).await.unwrap();

        let err = uc
            .execute(&req("alice", "alice@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, RegisterError::EmailAndUsernameTaken));

        let err = uc
            .execute(&req("bob", "alice@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, RegisterError::EmailTaken));

        let err = uc
            .execute(&req("alice", "bob@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, RegisterError::UsernameTaken));
    }
}
