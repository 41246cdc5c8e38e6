use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;

use crate::config::AppConfig;
use crate::domain::board::{BoardInfo, ListInfo};
use crate::domain::status::ApiStatus;
use crate::domain::ticket::Card;
use crate::error::{AppError, AppResult};
use crate::services::BoardService;

pub struct TrelloClient {
    http: Client,
    base_url: String,
    key: String,
    token: String,
    board_id: String,
}

impl TrelloClient {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| AppError::Transport(format!("failed to create HTTP client: {err}")))?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            key: config.api_key.clone(),
            token: config.api_token.clone(),
            board_id: config.board_id.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send(&self, request: RequestBuilder, action: &str) -> AppResult<Response> {
        debug!("Trello request: {action}");
        request
            .query(&[("key", self.key.as_str()), ("token", self.token.as_str())])
            .send()
            .await
            .map_err(|err| AppError::Transport(format!("failed to {action}: {err}")))
    }

    async fn status_of(&self, request: RequestBuilder, action: &str) -> AppResult<ApiStatus> {
        let response = self.send(request, action).await?;
        let status = ApiStatus(response.status().as_u16());
        if status.is_success() {
            debug!("Trello accepted {action}");
        } else {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            warn!("Trello rejected {action} with {status}: {body}");
        }
        Ok(status)
    }

    async fn fetch_json<T: for<'de> Deserialize<'de>>(
        &self,
        request: RequestBuilder,
        action: &str,
    ) -> AppResult<T> {
        let response = self.send(request, action).await?;
        let status = ApiStatus(response.status().as_u16());
        if !status.is_success() {
            return Err(AppError::Board(format!(
                "Trello responded with {status} while trying to {action}"
            )));
        }
        response
            .json()
            .await
            .map_err(|err| AppError::Board(format!("failed to parse response to {action}: {err}")))
    }
}

#[async_trait]
impl BoardService for TrelloClient {
    async fn list_cards(&self, list_id: &str) -> AppResult<Option<Vec<Card>>> {
        let action = format!("list cards of {list_id}");
        let request = self
            .http
            .get(self.endpoint(&format!("lists/{list_id}/cards")))
            .query(&[("fields", "name")]);

        let response = self.send(request, &action).await?;
        let status = ApiStatus(response.status().as_u16());
        if !status.is_success() {
            warn!("Trello rejected {action} with {status}");
            return Ok(None);
        }

        let payload: Vec<CardPayload> = response
            .json()
            .await
            .map_err(|err| AppError::Board(format!("failed to parse cards of {list_id}: {err}")))?;

        Ok(Some(
            payload
                .into_iter()
                .map(|card| Card::new(card.id, card.name))
                .collect(),
        ))
    }

    async fn board_info(&self) -> AppResult<BoardInfo> {
        let request = self
            .http
            .get(self.endpoint(&format!("boards/{}", self.board_id)))
            .query(&[("fields", "id,name,closed,desc,shortUrl,url")]);

        let payload: BoardPayload = self.fetch_json(request, "read board metadata").await?;
        Ok(BoardInfo {
            id: payload.id,
            name: payload.name,
            closed: payload.closed,
            description: payload.desc,
            short_url: payload.short_url,
            url: payload.url,
        })
    }

    async fn lists(&self) -> AppResult<Vec<ListInfo>> {
        let request = self
            .http
            .get(self.endpoint(&format!("boards/{}/lists", self.board_id)))
            .query(&[("fields", "name")]);

        let payload: Vec<ListPayload> = self.fetch_json(request, "read board lists").await?;
        Ok(payload
            .into_iter()
            .map(|list| ListInfo {
                id: list.id,
                name: list.name,
            })
            .collect())
    }

    async fn create_card(&self, list_id: &str, name: &str) -> AppResult<ApiStatus> {
        let request = self
            .http
            .post(self.endpoint(&format!("lists/{list_id}/cards")))
            .form(&[("name", name)]);
        self.status_of(request, &format!("create card '{name}'"))
            .await
    }

    async fn delete_card(&self, card_id: &str) -> AppResult<ApiStatus> {
        let request = self.http.delete(self.endpoint(&format!("cards/{card_id}")));
        self.status_of(request, &format!("delete card {card_id}"))
            .await
    }

    async fn rename_card(&self, card_id: &str, name: &str) -> AppResult<ApiStatus> {
        let request = self
            .http
            .put(self.endpoint(&format!("cards/{card_id}")))
            .form(&[("name", name)]);
        self.status_of(request, &format!("rename card {card_id}"))
            .await
    }

    async fn add_comment(&self, card_id: &str, text: &str) -> AppResult<ApiStatus> {
        let request = self
            .http
            .post(self.endpoint(&format!("cards/{card_id}/actions/comments")))
            .form(&[("text", text)]);
        self.status_of(request, &format!("comment on card {card_id}"))
            .await
    }
}

#[derive(Deserialize)]
struct CardPayload {
    id: String,
    #[serde(default)]
    name: String,
}

#[derive(Deserialize)]
struct BoardPayload {
    id: String,
    name: String,
    #[serde(default)]
    closed: bool,
    #[serde(default)]
    desc: String,
    #[serde(rename = "shortUrl")]
    short_url: Option<String>,
    url: Option<String>,
}

#[derive(Deserialize)]
struct ListPayload {
    id: String,
    name: String,
}
