use std::io::Write;

use chrono::NaiveDate;
use log::warn;

use crate::cmd::BoardMethod;
use crate::context::AppContext;
use crate::domain::list::BoardList;
use crate::domain::snapshot::BoardSnapshot;
use crate::domain::status::ApiStatus;
use crate::domain::week::WorkWeek;
use crate::error::AppResult;
use crate::workflow::cards;
use crate::workflow::fetch::fetch_snapshot;
use crate::workflow::report::{build_weekly_report, render_list};
use crate::workflow::rollover::{RolloverOutcome, archive_recently_done};

#[derive(Debug, Clone, Default)]
pub struct MethodArgs {
    pub arg1: Option<String>,
    pub arg2: Option<String>,
}

/// A board method together with the arguments it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardCommand {
    Monday,
    ShowBoard,
    ShowList { list: String },
    CreateCard { name: String, list: String },
    DeleteCard { name: String },
    MoveCard { name: String, list: String },
    UpdateCard { name: String, new_name: String },
}

impl BoardCommand {
    /// Fails with a usage line when a required argument is missing.
    pub fn from_args(method: BoardMethod, args: MethodArgs) -> Result<Self, String> {
        let usage = |expected: &str| format!("Usage: {} {expected}", method.name());

        let command = match (method, args.arg1, args.arg2) {
            (BoardMethod::Monday, _, _) => BoardCommand::Monday,
            (BoardMethod::ShowBoard, _, _) => BoardCommand::ShowBoard,
            (BoardMethod::ShowList, Some(list), _) => BoardCommand::ShowList { list },
            (BoardMethod::ShowList, None, _) => return Err(usage("--arg1 <list name>")),
            (BoardMethod::CreateCard, Some(name), Some(list)) => {
                BoardCommand::CreateCard { name, list }
            }
            (BoardMethod::CreateCard, _, _) => {
                return Err(usage("--arg1 <card name> --arg2 <list name>"));
            }
            (BoardMethod::DeleteCard, Some(name), _) => BoardCommand::DeleteCard { name },
            (BoardMethod::DeleteCard, None, _) => return Err(usage("--arg1 <card name>")),
            (BoardMethod::MoveCard, Some(name), Some(list)) => BoardCommand::MoveCard { name, list },
            (BoardMethod::MoveCard, _, _) => {
                return Err(usage("--arg1 <card name> --arg2 <list name>"));
            }
            (BoardMethod::UpdateCard, Some(name), Some(new_name)) => {
                BoardCommand::UpdateCard { name, new_name }
            }
            (BoardMethod::UpdateCard, _, _) => {
                return Err(usage("--arg1 <card name> --arg2 <new name>"));
            }
        };
        Ok(command)
    }
}

/// Board queries that do not need the ticket snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataQuery {
    BoardInfo,
    Lists,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Delete,
    Move,
    Update,
}

impl Operation {
    fn past_tense(&self) -> &'static str {
        match self {
            Operation::Create => "created",
            Operation::Delete => "deleted",
            Operation::Move => "moved",
            Operation::Update => "updated",
        }
    }
}

pub fn describe_reply(operation: Operation, status: ApiStatus) -> String {
    let done = operation.past_tense();
    if status.is_success() {
        format!("Card has been successfully {done}.")
    } else {
        format!(
            "Card has not been {done}. Please check card's name and list's name (if required).\n\
             Operation failed with {status} error."
        )
    }
}

pub async fn run(
    ctx: &AppContext,
    command: BoardCommand,
    today: NaiveDate,
    out: &mut dyn Write,
) -> AppResult<()> {
    let snapshot = fetch_snapshot(ctx, out).await?;

    let (operation, status) = match command {
        BoardCommand::Monday => return run_monday(ctx, &snapshot, today, out).await,
        BoardCommand::ShowBoard => return show_board(ctx, &snapshot, out).await,
        BoardCommand::ShowList { list } => return show_list(&snapshot, &list, out),
        BoardCommand::CreateCard { name, list } => (
            Operation::Create,
            cards::create_card(ctx, &name, &list).await?,
        ),
        BoardCommand::DeleteCard { name } => (
            Operation::Delete,
            cards::delete_card(ctx, &snapshot, &name).await?,
        ),
        BoardCommand::MoveCard { name, list } => (
            Operation::Move,
            cards::move_card(ctx, &snapshot, &name, &list).await?,
        ),
        BoardCommand::UpdateCard { name, new_name } => (
            Operation::Update,
            cards::update_card(ctx, &snapshot, &name, &new_name).await?,
        ),
    };

    writeln!(out, "{}", describe_reply(operation, status))?;
    Ok(())
}

pub async fn run_metadata(
    ctx: &AppContext,
    query: MetadataQuery,
    out: &mut dyn Write,
) -> AppResult<()> {
    match query {
        MetadataQuery::BoardInfo => {
            let info = ctx.board.board_info().await?;
            writeln!(out, "Board: {}", info.name)?;
            writeln!(out, "Id: {}", info.id)?;
            if let Some(url) = &info.url {
                writeln!(out, "URL: {url}")?;
            }
            if let Some(short_url) = &info.short_url {
                writeln!(out, "Short URL: {short_url}")?;
            }
            writeln!(out, "Closed: {}", if info.closed { "yes" } else { "no" })?;
            if !info.description.trim().is_empty() {
                writeln!(out, "Description: {}", info.description.trim())?;
            }
        }
        MetadataQuery::Lists => {
            let lists = ctx.board.lists().await?;
            writeln!(out, "Lists on board {}:", ctx.config.board_id)?;
            for list in lists {
                writeln!(out, "  - {} ({})", list.name, list.id)?;
            }
        }
    }
    Ok(())
}

async fn run_monday(
    ctx: &AppContext,
    snapshot: &BoardSnapshot,
    today: NaiveDate,
    out: &mut dyn Write,
) -> AppResult<()> {
    let week = WorkWeek::looking_back_from(today);
    writeln!(
        out,
        "{}",
        build_weekly_report(snapshot, &week, &ctx.config.link_base)
    )?;

    let sentinel = snapshot
        .sentinel()
        .map(|ticket| ticket.name.clone())
        .unwrap_or_default();

    match archive_recently_done(ctx, snapshot).await? {
        RolloverOutcome::Archived { count } => {
            writeln!(out, "Recently done cards have been archived ({count} cards).")?
        }
        RolloverOutcome::MissingSentinel => writeln!(
            out,
            "Failed to archive recently done cards: the Done list has no archive card."
        )?,
        RolloverOutcome::CommentFailed { ticket, status } => writeln!(
            out,
            "Failed to move recently done cards to `{sentinel}' comments: \
             commenting {ticket} failed with {status} error."
        )?,
        RolloverOutcome::DeleteFailed { ticket, status } => writeln!(
            out,
            "Failed to delete card {ticket}: operation failed with {status} error."
        )?,
    }
    Ok(())
}

async fn show_board(ctx: &AppContext, snapshot: &BoardSnapshot, out: &mut dyn Write) -> AppResult<()> {
    let title = match ctx.board.board_info().await {
        Ok(info) => format!("{} board", info.name),
        Err(err) => {
            warn!("could not read board metadata: {err}");
            "Board".to_string()
        }
    };
    writeln!(out, "{title}\n")?;

    for entry in snapshot.iter() {
        write!(out, "{}", render_list(entry))?;
    }
    Ok(())
}

fn show_list(snapshot: &BoardSnapshot, list_name: &str, out: &mut dyn Write) -> AppResult<()> {
    let entry = BoardList::from_title(list_name)
        .and_then(|list| snapshot.iter().find(|entry| entry.list == list));

    match entry {
        Some(entry) => write!(out, "{}", render_list(entry))?,
        None => writeln!(out, "List {list_name} not found on current board")?,
    }
    Ok(())
}
