use std::io::{self, BufRead, Write};

use crate::config::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, StoredConfig, config_file_path};
use crate::error::AppResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCommand {
    /// Run the interactive configuration wizard.
    Init,
    /// Show the stored configuration (secrets masked).
    Show,
}

/// One stored setting as the wizard and `config_show` present it.
struct Setting {
    label: &'static str,
    hint: Option<String>,
    secret: bool,
    slot: fn(&mut StoredConfig) -> &mut Option<String>,
}

impl Setting {
    fn plain(label: &'static str, slot: fn(&mut StoredConfig) -> &mut Option<String>) -> Self {
        Self {
            label,
            hint: None,
            secret: false,
            slot,
        }
    }

    fn secret(label: &'static str, slot: fn(&mut StoredConfig) -> &mut Option<String>) -> Self {
        Self {
            secret: true,
            ..Self::plain(label, slot)
        }
    }

    fn hinted(mut self, hint: String) -> Self {
        self.hint = Some(hint);
        self
    }

    fn shown(&self, stored: &mut StoredConfig) -> String {
        let value = (self.slot)(stored).as_deref().filter(|v| !v.is_empty());
        match value {
            None => "<not set>".to_string(),
            Some(value) if self.secret => mask(value),
            Some(value) => value.to_string(),
        }
    }
}

fn settings() -> Vec<Setting> {
    vec![
        Setting::secret("Trello API key", |c| &mut c.api_key),
        Setting::secret("Trello API token", |c| &mut c.api_token),
        Setting::plain("Trello API URL", |c| &mut c.api_url)
            .hinted(format!("default {DEFAULT_API_URL}")),
        Setting::plain("Issue link prefix", |c| &mut c.link_base)
            .hinted("e.g. https://company.atlassian.net/browse/".to_string()),
        Setting::plain("Board id", |c| &mut c.board_id),
        Setting::plain("'In progress' list id", |c| &mut c.in_progress_list_id),
        Setting::plain("'Waiting for customer' list id", |c| &mut c.waiting_list_id),
        Setting::plain("'Testing' list id", |c| &mut c.testing_list_id),
        Setting::plain("'Done' list id", |c| &mut c.done_list_id),
        Setting::plain("Request timeout in seconds", |c| &mut c.timeout_secs)
            .hinted(format!("default {DEFAULT_TIMEOUT_SECS}")),
    ]
}

pub fn run(command: ConfigCommand, out: &mut dyn Write) -> AppResult<()> {
    let mut stored = StoredConfig::load()?;
    let path = config_file_path()?;
    match command {
        ConfigCommand::Init => {
            writeln!(out, "Configuring trello-weekly.")?;
            writeln!(out, "Press Enter to keep the current value, '-' to clear it.")?;
            writeln!(
                out,
                "Run `show_lists` once key, token and board id are set to look up list ids."
            )?;
            let stdin = io::stdin();
            edit(&mut stored, &mut stdin.lock(), out)?;
            stored.save()?;
            writeln!(out, "Configuration saved to {}", path.display())?;
        }
        ConfigCommand::Show => {
            writeln!(out, "Configuration file: {}", path.display())?;
            show(&mut stored, out)?;
        }
    }
    Ok(())
}

/// Walks every setting once, asking for a new value on `input`.
fn edit(stored: &mut StoredConfig, input: &mut dyn BufRead, out: &mut dyn Write) -> AppResult<()> {
    for setting in settings() {
        let current = setting.shown(stored);
        match &setting.hint {
            Some(hint) => write!(out, "{} ({hint}) [{current}]: ", setting.label)?,
            None => write!(out, "{} [{current}]: ", setting.label)?,
        }
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }
        let slot = (setting.slot)(stored);
        match line.trim() {
            "" => {}
            "-" => *slot = None,
            value => *slot = Some(value.to_string()),
        }
    }
    Ok(())
}

fn show(stored: &mut StoredConfig, out: &mut dyn Write) -> AppResult<()> {
    for setting in settings() {
        writeln!(out, "{}: {}", setting.label, setting.shown(stored))?;
    }
    writeln!(out, "Environment variables (TRELLO_*) override these values.")?;
    Ok(())
}

fn mask(secret: &str) -> String {
    let chars = secret.chars().collect::<Vec<_>>();
    if chars.len() <= 6 {
        return "***".to_string();
    }
    let head = chars[..3].iter().collect::<String>();
    let tail = chars[chars.len() - 3..].iter().collect::<String>();
    format!("{head}***{tail}")
}
