use std::io::Write;

use log::debug;

use crate::context::AppContext;
use crate::domain::list::BoardList;
use crate::domain::snapshot::{BoardSnapshot, ListTickets};
use crate::domain::ticket::Ticket;
use crate::error::AppResult;
use crate::services::BoardService;

pub async fn fetch_list(board: &dyn BoardService, list_id: &str) -> AppResult<Option<Vec<Ticket>>> {
    let cards = board.list_cards(list_id).await?;
    Ok(cards.map(|cards| cards.iter().map(Ticket::from_card).collect()))
}

/// Reads all four lists. A list the board refuses is reported on `out` and
/// kept as unavailable instead of failing the whole command.
pub async fn fetch_snapshot(ctx: &AppContext, out: &mut dyn Write) -> AppResult<BoardSnapshot> {
    let mut lists = Vec::with_capacity(BoardList::ALL.len());
    for list in BoardList::ALL {
        let tickets = fetch_list(ctx.board.as_ref(), ctx.config.lists.id_for(list)).await?;
        match &tickets {
            Some(tickets) => debug!("fetched {} tickets from {}", tickets.len(), list.title()),
            None => writeln!(out, "Could not get list of tickets for {}", list.title())?,
        }
        lists.push(ListTickets { list, tickets });
    }
    Ok(BoardSnapshot::new(lists))
}
