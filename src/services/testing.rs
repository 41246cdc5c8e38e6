use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::config::{AppConfig, ListIds};
use crate::context::AppContext;
use crate::domain::board::{BoardInfo, ListInfo};
use crate::domain::status::ApiStatus;
use crate::domain::ticket::Card;
use crate::error::{AppError, AppResult};
use crate::services::BoardService;

pub const IN_PROGRESS: &str = "list-progress";
pub const WAITING: &str = "list-waiting";
pub const TESTING: &str = "list-testing";
pub const DONE: &str = "list-done";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListCards(String),
    BoardInfo,
    Lists,
    CreateCard { list_id: String, name: String },
    DeleteCard(String),
    RenameCard { card_id: String, name: String },
    AddComment { card_id: String, text: String },
}

/// In-memory board that records every call it receives.
#[derive(Default)]
pub struct FakeBoard {
    cards: HashMap<String, Vec<Card>>,
    rejected_lists: HashSet<String>,
    unreachable_lists: HashSet<String>,
    unreachable_cards: HashSet<String>,
    comment_failures: HashMap<String, u16>,
    delete_failures: HashMap<String, u16>,
    board_name: Option<String>,
    calls: Mutex<Vec<Call>>,
}

impl FakeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cards(mut self, list_id: &str, cards: &[(&str, &str)]) -> Self {
        self.cards.insert(
            list_id.to_string(),
            cards.iter().map(|(id, name)| Card::new(*id, *name)).collect(),
        );
        self
    }

    pub fn rejecting_list(mut self, list_id: &str) -> Self {
        self.rejected_lists.insert(list_id.to_string());
        self
    }

    /// Reading this list fails as if the network were down.
    pub fn unreachable_list(mut self, list_id: &str) -> Self {
        self.unreachable_lists.insert(list_id.to_string());
        self
    }

    /// Deleting this card fails as if the network were down.
    pub fn unreachable_card(mut self, card_id: &str) -> Self {
        self.unreachable_cards.insert(card_id.to_string());
        self
    }

    pub fn failing_comment(mut self, text: &str, status: u16) -> Self {
        self.comment_failures.insert(text.to_string(), status);
        self
    }

    pub fn failing_delete(mut self, card_id: &str, status: u16) -> Self {
        self.delete_failures.insert(card_id.to_string(), status);
        self
    }

    pub fn named(mut self, name: &str) -> Self {
        self.board_name = Some(name.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls that change the board.
    pub fn mutations(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| {
                !matches!(call, Call::ListCards(_) | Call::BoardInfo | Call::Lists)
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl BoardService for FakeBoard {
    async fn list_cards(&self, list_id: &str) -> AppResult<Option<Vec<Card>>> {
        self.record(Call::ListCards(list_id.to_string()));
        if self.unreachable_lists.contains(list_id) {
            return Err(connection_lost(list_id));
        }
        if self.rejected_lists.contains(list_id) {
            return Ok(None);
        }
        Ok(Some(self.cards.get(list_id).cloned().unwrap_or_default()))
    }

    async fn board_info(&self) -> AppResult<BoardInfo> {
        self.record(Call::BoardInfo);
        let name = self
            .board_name
            .clone()
            .ok_or_else(|| AppError::Board("Trello responded with 401".to_string()))?;
        Ok(BoardInfo {
            id: "board".to_string(),
            name,
            closed: false,
            description: String::new(),
            short_url: Some("https://trello.com/b/short".to_string()),
            url: None,
        })
    }

    async fn lists(&self) -> AppResult<Vec<ListInfo>> {
        self.record(Call::Lists);
        let mut lists = self
            .cards
            .keys()
            .map(|id| ListInfo {
                id: id.clone(),
                name: format!("name of {id}"),
            })
            .collect::<Vec<_>>();
        lists.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(lists)
    }

    async fn create_card(&self, list_id: &str, name: &str) -> AppResult<ApiStatus> {
        self.record(Call::CreateCard {
            list_id: list_id.to_string(),
            name: name.to_string(),
        });
        Ok(ApiStatus::OK)
    }

    async fn delete_card(&self, card_id: &str) -> AppResult<ApiStatus> {
        self.record(Call::DeleteCard(card_id.to_string()));
        if self.unreachable_cards.contains(card_id) {
            return Err(connection_lost(card_id));
        }
        Ok(self
            .delete_failures
            .get(card_id)
            .map(|code| ApiStatus(*code))
            .unwrap_or(ApiStatus::OK))
    }

    async fn rename_card(&self, card_id: &str, name: &str) -> AppResult<ApiStatus> {
        self.record(Call::RenameCard {
            card_id: card_id.to_string(),
            name: name.to_string(),
        });
        Ok(ApiStatus::OK)
    }

    async fn add_comment(&self, card_id: &str, text: &str) -> AppResult<ApiStatus> {
        self.record(Call::AddComment {
            card_id: card_id.to_string(),
            text: text.to_string(),
        });
        Ok(self
            .comment_failures
            .get(text)
            .map(|code| ApiStatus(*code))
            .unwrap_or(ApiStatus::OK))
    }
}

fn connection_lost(target: &str) -> AppError {
    AppError::Transport(format!("failed to reach {target}: connection reset"))
}

pub fn test_config() -> AppConfig {
    AppConfig {
        api_key: "key".to_string(),
        api_token: "token".to_string(),
        api_url: "https://trello.invalid/1/".to_string(),
        link_base: "https://tracker.example.com/browse/".to_string(),
        board_id: "board".to_string(),
        lists: ListIds {
            in_progress: IN_PROGRESS.to_string(),
            waiting_for_customer: WAITING.to_string(),
            testing: TESTING.to_string(),
            done: DONE.to_string(),
        },
        timeout: Duration::from_secs(1),
    }
}

/// The board most workflow tests run against.
pub fn sample_board() -> FakeBoard {
    FakeBoard::new()
        .with_cards(IN_PROGRESS, &[("p1", "OPS-7 2"), ("p2", "OPS-8")])
        .with_cards(WAITING, &[("w1", "OPS-9 1")])
        .with_cards(TESTING, &[])
        .with_cards(
            DONE,
            &[
                ("all", "All"),
                ("d1", "OPS-1 3"),
                ("d2", "OPS-2 5"),
                ("d3", "OPS-3 2"),
            ],
        )
}

pub fn context(board: FakeBoard) -> (AppContext, Arc<FakeBoard>) {
    let board = Arc::new(board);
    let ctx = AppContext::new(test_config(), board.clone());
    (ctx, board)
}
