//! In-memory port implementations for use-case tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::ports::board_repository::BoardRepository;
use crate::application::ports::image_store::ImageStore;
use crate::application::ports::pin_repository::PinRepository;
use crate::application::ports::user_repository::{UserRepository, UserRow};
use crate::domain::boards::board::Board;
use crate::domain::pins::pin::{Pin, PinWithAuthor};

#[derive(Default)]
pub struct MemoryImages {
    pub objects: Mutex<HashMap<String, Vec<u8>>>,
}

#[async_trait]
impl ImageStore for MemoryImages {
    async fn put_image(
        &self,
        key: &str,
        bytes: &[u8],
        _content_type: Option<&str>,
    ) -> anyhow::Result<()> {
        self.objects
            .lock()
            .unwrap()
            .insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    async fn signed_url(&self, key: &str) -> anyhow::Result<String> {
        if !self.objects.lock().unwrap().contains_key(key) {
            anyhow::bail!("no such object: {key}");
        }
        Ok(format!("https://images.test/{key}?signature=stub"))
    }

    async fn delete_image(&self, key: &str) -> anyhow::Result<()> {
        self.objects.lock().unwrap().remove(key);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryUsers {
    pub rows: Mutex<Vec<UserRow>>,
}

#[async_trait]
impl UserRepository for MemoryUsers {
    async fn create_user(
        &self,
        username: &str,
        email: &str,
        name: &str,
        contact: Option<&str>,
        password_hash: &str,
    ) -> anyhow::Result<UserRow> {
        let row = UserRow {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: email.to_string(),
            name: name.to_string(),
            contact: contact.map(|s| s.to_string()),
            avatar_key: None,
            password_hash: Some(password_hash.to_string()),
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<UserRow>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.username == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<UserRow>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<UserRow>> {
        Ok(self.rows.lock().unwrap().iter().find(|r| r.id == id).cloned())
    }

    async fn update_profile(
        &self,
        id: Uuid,
        name: Option<&str>,
        contact: Option<&str>,
    ) -> anyhow::Result<Option<UserRow>> {
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        if let Some(name) = name {
            row.name = name.to_string();
        }
        if let Some(contact) = contact {
            row.contact = Some(contact.to_string());
        }
        Ok(Some(row.clone()))
    }

    async fn set_avatar_key(&self, id: Uuid, key: &str) -> anyhow::Result<Option<String>> {
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        let old = row.avatar_key.replace(key.to_string());
        Ok(old)
    }
}

pub struct MemoryPins {
    pub rows: Mutex<Vec<Pin>>,
    pub author_username: String,
    pub author_name: String,
}

impl Default for MemoryPins {
    fn default() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            author_username: "tester".into(),
            author_name: "Test User".into(),
        }
    }
}

#[async_trait]
impl PinRepository for MemoryPins {
    async fn insert_pin(
        &self,
        owner_id: Uuid,
        title: &str,
        description: Option<&str>,
        tags: &[String],
        image_key: &str,
        content_hash: &str,
    ) -> anyhow::Result<Pin> {
        let pin = Pin {
            id: Uuid::new_v4(),
            owner_id,
            title: title.to_string(),
            description: description.map(|s| s.to_string()),
            tags: tags.to_vec(),
            image_key: image_key.to_string(),
            content_hash: content_hash.to_string(),
            created_at: chrono::Utc::now(),
        };
        self.rows.lock().unwrap().push(pin.clone());
        Ok(pin)
    }

    async fn get_with_author(&self, id: Uuid) -> anyhow::Result<Option<PinWithAuthor>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .map(|pin| PinWithAuthor {
                pin,
                author_username: self.author_username.clone(),
                author_name: self.author_name.clone(),
            }))
    }

    async fn list_for_owner(&self, owner_id: Uuid) -> anyhow::Result<Vec<Pin>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn list_all(&self, limit: i64) -> anyhow::Result<Vec<PinWithAuthor>> {
        let mut rows: Vec<Pin> = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows.truncate(limit as usize);
        Ok(rows
            .into_iter()
            .map(|pin| PinWithAuthor {
                pin,
                author_username: self.author_username.clone(),
                author_name: self.author_name.clone(),
            })
            .collect())
    }

    async fn get_owner_and_key(&self, id: Uuid) -> anyhow::Result<Option<(Uuid, String)>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .map(|p| (p.owner_id, p.image_key.clone())))
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| p.id != id);
        Ok(rows.len() < before)
    }
}

#[derive(Default)]
pub struct MemoryBoards {
    pub rows: Mutex<Vec<Board>>,
    pub links: Mutex<Vec<(Uuid, Uuid)>>,
    pub pins: Arc<MemoryPins>,
}

#[async_trait]
impl BoardRepository for MemoryBoards {
    async fn create_for_owner(&self, owner_id: Uuid, title: &str) -> anyhow::Result<Board> {
        let board = Board {
            id: Uuid::new_v4(),
            owner_id,
            title: title.to_string(),
            created_at: chrono::Utc::now(),
        };
        self.rows.lock().unwrap().push(board.clone());
        Ok(board)
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Board>> {
        Ok(self.rows.lock().unwrap().iter().find(|b| b.id == id).cloned())
    }

    async fn list_for_owner(&self, owner_id: Uuid) -> anyhow::Result<Vec<Board>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn list_pins(&self, board_id: Uuid) -> anyhow::Result<Vec<Pin>> {
        let pin_ids: Vec<Uuid> = self
            .links
            .lock()
            .unwrap()
            .iter()
            .filter(|(b, _)| *b == board_id)
            .map(|(_, p)| *p)
            .collect();
        Ok(self
            .pins
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| pin_ids.contains(&p.id))
            .cloned()
            .collect())
    }

    async fn add_pin(&self, board_id: Uuid, pin_id: Uuid) -> anyhow::Result<()> {
        let mut links = self.links.lock().unwrap();
        if !links.contains(&(board_id, pin_id)) {
            links.push((board_id, pin_id));
        }
        Ok(())
    }
}
