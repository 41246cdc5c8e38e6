pub mod board;
pub mod config;

use std::io::Write;
use std::sync::Arc;

use chrono::Local;

use crate::cmd::board::{BoardCommand, MetadataQuery, MethodArgs};
use crate::cmd::config::ConfigCommand;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::trello::TrelloClient;

pub const NO_SUCH_METHOD: &str = "There is no method with such name";

#[derive(Debug, Clone, Default)]
pub struct Invocation {
    pub method: String,
    pub arg1: Option<String>,
    pub arg2: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardMethod {
    Monday,
    ShowBoard,
    ShowList,
    CreateCard,
    DeleteCard,
    MoveCard,
    UpdateCard,
}

impl BoardMethod {
    pub fn name(&self) -> &'static str {
        match self {
            BoardMethod::Monday => "monday",
            BoardMethod::ShowBoard => "show_board",
            BoardMethod::ShowList => "show_list",
            BoardMethod::CreateCard => "create_card",
            BoardMethod::DeleteCard => "delete_card",
            BoardMethod::MoveCard => "move_card",
            BoardMethod::UpdateCard => "update_card",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Needs the ticket snapshot of the board.
    Board(BoardMethod),
    Metadata(MetadataQuery),
    Config(ConfigCommand),
}

impl Method {
    pub fn from_name(name: &str) -> Option<Self> {
        let method = match name.trim() {
            "monday" => Method::Board(BoardMethod::Monday),
            "show_board" => Method::Board(BoardMethod::ShowBoard),
            "show_list" => Method::Board(BoardMethod::ShowList),
            "create_card" => Method::Board(BoardMethod::CreateCard),
            "delete_card" => Method::Board(BoardMethod::DeleteCard),
            "move_card" => Method::Board(BoardMethod::MoveCard),
            "update_card" => Method::Board(BoardMethod::UpdateCard),
            "board_info" => Method::Metadata(MetadataQuery::BoardInfo),
            "show_lists" => Method::Metadata(MetadataQuery::Lists),
            "config_init" => Method::Config(ConfigCommand::Init),
            "config_show" => Method::Config(ConfigCommand::Show),
            _ => return None,
        };
        Some(method)
    }
}

pub async fn run(invocation: Invocation, out: &mut dyn Write) -> AppResult<()> {
    let Some(method) = Method::from_name(&invocation.method) else {
        writeln!(out, "{NO_SUCH_METHOD}")?;
        return Ok(());
    };

    let args = MethodArgs {
        arg1: invocation.arg1,
        arg2: invocation.arg2,
    };

    match method {
        Method::Config(command) => config::run(command, out),
        Method::Metadata(query) => {
            let ctx = connect()?;
            board::run_metadata(&ctx, query, out).await
        }
        Method::Board(method) => {
            let command = match BoardCommand::from_args(method, args) {
                Ok(command) => command,
                Err(usage) => {
                    writeln!(out, "{usage}")?;
                    return Ok(());
                }
            };
            let ctx = connect()?;
            board::run(&ctx, command, Local::now().date_naive(), out).await
        }
    }
}

fn connect() -> AppResult<AppContext> {
    let config = AppConfig::load()?;
    let client = TrelloClient::new(&config)?;
    Ok(AppContext::new(config, Arc::new(client)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_method_prints_message_and_succeeds() {
        let mut out: Vec<u8> = Vec::new();
        let invocation = Invocation {
            method: "archive_everything".to_string(),
            ..Invocation::default()
        };

        run(invocation, &mut out).await.unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), format!("{NO_SUCH_METHOD}\n"));
    }

    #[tokio::test]
    async fn missing_arguments_print_usage_before_connecting() {
        let mut out: Vec<u8> = Vec::new();
        let invocation = Invocation {
            method: "move_card".to_string(),
            arg1: Some("OPS-1".to_string()),
            arg2: None,
        };

        run(invocation, &mut out).await.unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Usage: move_card --arg1 <card name> --arg2 <list name>\n"
        );
    }

    #[test]
    fn recognizes_every_method_name() {
        for method in [
            BoardMethod::Monday,
            BoardMethod::ShowBoard,
            BoardMethod::ShowList,
            BoardMethod::CreateCard,
            BoardMethod::DeleteCard,
            BoardMethod::MoveCard,
            BoardMethod::UpdateCard,
        ] {
            assert_eq!(Method::from_name(method.name()), Some(Method::Board(method)));
        }
        assert_eq!(
            Method::from_name("config_show"),
            Some(Method::Config(ConfigCommand::Show))
        );
        assert_eq!(
            Method::from_name("show_lists"),
            Some(Method::Metadata(MetadataQuery::Lists))
        );
        assert_eq!(Method::from_name("Monday"), None);
    }
}
