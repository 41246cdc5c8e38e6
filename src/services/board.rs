use async_trait::async_trait;

use crate::domain::board::{BoardInfo, ListInfo};
use crate::domain::status::ApiStatus;
use crate::domain::ticket::Card;
use crate::error::AppResult;

/// Remote board operations. Rejections come back as an [`ApiStatus`];
/// only transport and decoding problems are errors.
#[async_trait]
pub trait BoardService: Send + Sync {
    /// Cards of a list, or `None` when the board refused the request.
    async fn list_cards(&self, list_id: &str) -> AppResult<Option<Vec<Card>>>;
    async fn board_info(&self) -> AppResult<BoardInfo>;
    async fn lists(&self) -> AppResult<Vec<ListInfo>>;
    async fn create_card(&self, list_id: &str, name: &str) -> AppResult<ApiStatus>;
    async fn delete_card(&self, card_id: &str) -> AppResult<ApiStatus>;
    async fn rename_card(&self, card_id: &str, name: &str) -> AppResult<ApiStatus>;
    async fn add_comment(&self, card_id: &str, text: &str) -> AppResult<ApiStatus>;
}
