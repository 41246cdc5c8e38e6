use crate::domain::list::BoardList;
use crate::domain::ticket::{Ticket, first_token};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListTickets {
    pub list: BoardList,
    /// `None` when the list could not be fetched.
    pub tickets: Option<Vec<Ticket>>,
}

/// Tickets of every known list, captured once per invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardSnapshot {
    lists: Vec<ListTickets>,
}

impl BoardSnapshot {
    pub fn new(lists: Vec<ListTickets>) -> Self {
        Self { lists }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ListTickets> {
        self.lists.iter()
    }

    pub fn tickets(&self, list: BoardList) -> Option<&[Ticket]> {
        self.lists
            .iter()
            .find(|entry| entry.list == list)
            .and_then(|entry| entry.tickets.as_deref())
    }

    /// First card of Done, which collects archived tickets as comments.
    pub fn sentinel(&self) -> Option<&Ticket> {
        self.tickets(BoardList::Done)?.first()
    }

    /// Done tickets without the sentinel card.
    pub fn recently_done(&self) -> &[Ticket] {
        self.tickets(BoardList::Done)
            .and_then(|tickets| tickets.get(1..))
            .unwrap_or(&[])
    }

    /// Saturates at the `i64` bounds instead of overflowing.
    pub fn weekly_story_points(&self) -> i64 {
        self.recently_done()
            .iter()
            .fold(0i64, |total, ticket| total.saturating_add(ticket.story_points))
    }

    pub fn find_ticket(&self, name: &str) -> Option<&Ticket> {
        self.lists
            .iter()
            .filter_map(|entry| entry.tickets.as_deref())
            .flatten()
            .find(|ticket| !ticket.id.is_empty() && ticket.name == name)
    }

    /// Looks the name up as given, then by its first token so that
    /// `"OPS-1 5"` still finds `OPS-1`.
    pub fn resolve_card_id(&self, name: &str) -> Option<&str> {
        self.find_ticket(name)
            .or_else(|| self.find_ticket(first_token(name)))
            .map(|ticket| ticket.id.as_str())
    }
}
