use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::list::BoardList;
use crate::error::{AppError, AppResult};

pub const DEFAULT_API_URL: &str = "https://api.trello.com/1/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const CONFIG_DIR_NAME: &str = "trello-weekly";
const CONFIG_FILE_NAME: &str = "config.json";

pub fn config_directory() -> AppResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME))
        .ok_or_else(|| {
            AppError::Configuration("could not determine the config directory".to_string())
        })
}

pub fn config_file_path() -> AppResult<PathBuf> {
    Ok(config_directory()?.join(CONFIG_FILE_NAME))
}

/// Values persisted by `config_init`. Every field is optional so a partly
/// filled file can be completed from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_progress_list_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waiting_list_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testing_list_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub done_list_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<String>,
}

impl StoredConfig {
    pub fn load() -> AppResult<Self> {
        let path = config_file_path()?;
        match fs::read_to_string(&path) {
            Ok(contents) => Self::parse(&contents),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(AppError::Io(err)),
        }
    }

    pub fn parse(contents: &str) -> AppResult<Self> {
        serde_json::from_str(contents)
            .map_err(|err| AppError::Configuration(format!("invalid config file: {err}")))
    }

    pub fn save(&self) -> AppResult<()> {
        let path = config_file_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(self)
            .map_err(|err| AppError::Configuration(format!("failed to write config: {err}")))?;
        fs::write(&path, data)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListIds {
    pub in_progress: String,
    pub waiting_for_customer: String,
    pub testing: String,
    pub done: String,
}

impl ListIds {
    pub fn id_for(&self, list: BoardList) -> &str {
        match list {
            BoardList::InProgress => &self.in_progress,
            BoardList::WaitingForCustomer => &self.waiting_for_customer,
            BoardList::Testing => &self.testing,
            BoardList::Done => &self.done,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub api_token: String,
    pub api_url: String,
    /// Prefix prepended to ticket names in the weekly report.
    pub link_base: String,
    pub board_id: String,
    pub lists: ListIds,
    pub timeout: Duration,
}

impl AppConfig {
    pub fn load() -> AppResult<Self> {
        let stored = StoredConfig::load()?;
        Self::resolve(stored, |name| env::var(name).ok())
    }

    /// Merges the stored file with environment overrides. Non-empty
    /// environment values win.
    pub fn resolve(
        stored: StoredConfig,
        env_lookup: impl Fn(&str) -> Option<String>,
    ) -> AppResult<Self> {
        let pick = |name: &str, stored: Option<String>| {
            env_lookup(name)
                .filter(|value| !value.trim().is_empty())
                .or(stored.filter(|value| !value.trim().is_empty()))
                .map(|value| value.trim().to_string())
        };
        let require = |name: &str, stored: Option<String>, what: &str| {
            pick(name, stored).ok_or_else(|| {
                AppError::Configuration(format!(
                    "{what} not configured; set {name} or run `config_init`"
                ))
            })
        };

        let timeout_secs = match pick("TRELLO_TIMEOUT_SECS", stored.timeout_secs) {
            Some(raw) => raw.parse::<u64>().map_err(|_| {
                AppError::Configuration(format!("invalid request timeout '{raw}'"))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_key: require("TRELLO_API_KEY", stored.api_key, "Trello API key")?,
            api_token: require("TRELLO_API_TOKEN", stored.api_token, "Trello API token")?,
            api_url: pick("TRELLO_API_URL", stored.api_url)
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            link_base: pick("TRELLO_LINK_BASE", stored.link_base).unwrap_or_default(),
            board_id: require("TRELLO_BOARD_ID", stored.board_id, "Trello board id")?,
            lists: ListIds {
                in_progress: require(
                    "TRELLO_IN_PROGRESS_LIST_ID",
                    stored.in_progress_list_id,
                    "'In progress' list id",
                )?,
                waiting_for_customer: require(
                    "TRELLO_WAITING_LIST_ID",
                    stored.waiting_list_id,
                    "'Waiting for customer' list id",
                )?,
                testing: require(
                    "TRELLO_TESTING_LIST_ID",
                    stored.testing_list_id,
                    "'Testing' list id",
                )?,
                done: require("TRELLO_DONE_LIST_ID", stored.done_list_id, "'Done' list id")?,
            },
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn full_stored() -> StoredConfig {
        StoredConfig {
            api_key: Some("file-key".to_string()),
            api_token: Some("file-token".to_string()),
            api_url: None,
            link_base: Some("https://tracker.example.com/browse/".to_string()),
            board_id: Some("board".to_string()),
            in_progress_list_id: Some("l-progress".to_string()),
            waiting_list_id: Some("l-waiting".to_string()),
            testing_list_id: Some("l-testing".to_string()),
            done_list_id: Some("l-done".to_string()),
            timeout_secs: None,
        }
    }

    #[test]
    fn stored_values_and_defaults() {
        let config = AppConfig::resolve(full_stored(), |_| None).unwrap();
        assert_eq!(config.api_key, "file-key");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.lists.id_for(BoardList::Done), "l-done");
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn environment_overrides_file() {
        let env: HashMap<&str, &str> = [
            ("TRELLO_API_KEY", "env-key"),
            ("TRELLO_API_TOKEN", "  "),
            ("TRELLO_TIMEOUT_SECS", "5"),
        ]
        .into_iter()
        .collect();

        let config =
            AppConfig::resolve(full_stored(), |name| env.get(name).map(|v| v.to_string()))
                .unwrap();
        assert_eq!(config.api_key, "env-key");
        assert_eq!(config.api_token, "file-token");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn missing_list_id_is_reported() {
        let stored = StoredConfig {
            done_list_id: None,
            ..full_stored()
        };
        let err = AppConfig::resolve(stored, |_| None).unwrap_err();
        assert!(err.to_string().contains("TRELLO_DONE_LIST_ID"));
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        let stored = StoredConfig {
            timeout_secs: Some("soon".to_string()),
            ..full_stored()
        };
        assert!(matches!(
            AppConfig::resolve(stored, |_| None),
            Err(AppError::Configuration(_))
        ));
    }

    #[test]
    fn parses_partial_file() {
        let stored = StoredConfig::parse(r#"{ "board_id": "b1" }"#).unwrap();
        assert_eq!(stored.board_id.as_deref(), Some("b1"));
        assert!(stored.api_key.is_none());
        assert!(StoredConfig::parse("not json").is_err());
    }
}
