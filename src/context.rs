use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::BoardService;

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub board: Arc<dyn BoardService>,
}

impl AppContext {
    pub fn new(config: AppConfig, board: Arc<dyn BoardService>) -> Self {
        Self { config, board }
    }
}
