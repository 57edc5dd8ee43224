use std::sync::Arc;

use shared::services::game_service::GameService;

#[derive(Clone)]
pub struct AppState {
    pub game_service: Arc<GameService>,
}
