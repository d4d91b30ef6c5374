use std::sync::Arc;

use crate::application::ports::board_repository::BoardRepository;
use crate::application::ports::image_store::ImageStore;
use crate::application::ports::pin_repository::PinRepository;
use crate::application::ports::user_repository::UserRepository;
use crate::bootstrap::config::Config;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

pub struct AppServices {
    user_repo: Arc<dyn UserRepository>,
    pin_repo: Arc<dyn PinRepository>,
    board_repo: Arc<dyn BoardRepository>,
    image_store: Arc<dyn ImageStore>,
}

impl AppServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        pin_repo: Arc<dyn PinRepository>,
        board_repo: Arc<dyn BoardRepository>,
        image_store: Arc<dyn ImageStore>,
    ) -> Self {
        Self {
            user_repo,
            pin_repo,
            board_repo,
            image_store,
        }
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn user_repo(&self) -> Arc<dyn UserRepository> {
        self.services.user_repo.clone()
    }

    pub fn pin_repo(&self) -> Arc<dyn PinRepository> {
        self.services.pin_repo.clone()
    }

    pub fn board_repo(&self) -> Arc<dyn BoardRepository> {
        self.services.board_repo.clone()
    }

    pub fn image_store(&self) -> Arc<dyn ImageStore> {
        self.services.image_store.clone()
    }
}
