use crate::domain::list::BoardList;
use crate::domain::snapshot::{BoardSnapshot, ListTickets};
use crate::domain::week::WorkWeek;

/// Weekly report: week header, every list with linked tickets, and the
/// story points finished in Done. The Done sentinel is never listed.
pub fn build_weekly_report(snapshot: &BoardSnapshot, week: &WorkWeek, link_base: &str) -> String {
    let mut report = format!("{}:\n\n", week.label());

    for entry in snapshot.iter() {
        report.push_str(&format!("{}:\n", entry.list.title()));
        for ticket in entry.tickets.iter().flatten().skip(sentinel_offset(entry)) {
            report.push_str(&format!(
                "  - {link_base}{} - {} points\n",
                ticket.name, ticket.story_points
            ));
        }
    }

    report.push_str(&format!(
        "SP per week: {}\n",
        snapshot.weekly_story_points()
    ));
    report
}

/// One list as shown by `show_list` and `show_board`.
pub fn render_list(entry: &ListTickets) -> String {
    let mut text = format!("{}\n", entry.list.title());

    let Some(tickets) = entry.tickets.as_deref() else {
        text.push_str("  Cannot show tickets for this list\n");
        return text;
    };

    if entry.list == BoardList::Done {
        if let Some(sentinel) = tickets.first() {
            text.push_str(&format!(
                "  - {} - contains list of all done tickets\n",
                sentinel.name
            ));
        }
    }

    for ticket in tickets.iter().skip(sentinel_offset(entry)) {
        text.push_str(&format!(
            "  - {} - {} points\n",
            ticket.name, ticket.story_points
        ));
    }
    text
}

fn sentinel_offset(entry: &ListTickets) -> usize {
    if entry.list == BoardList::Done { 1 } else { 0 }
}
