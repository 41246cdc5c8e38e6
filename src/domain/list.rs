#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardList {
    InProgress,
    WaitingForCustomer,
    Testing,
    Done,
}

impl BoardList {
    /// Every list the tool knows about, in board order.
    pub const ALL: [BoardList; 4] = [
        BoardList::InProgress,
        BoardList::WaitingForCustomer,
        BoardList::Testing,
        BoardList::Done,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            BoardList::InProgress => "In progress",
            BoardList::WaitingForCustomer => "Waiting for customer",
            BoardList::Testing => "Testing",
            BoardList::Done => "Done",
        }
    }

    pub fn from_title(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "in progress" => Some(BoardList::InProgress),
            "waiting for customer" => Some(BoardList::WaitingForCustomer),
            "testing" => Some(BoardList::Testing),
            "done" => Some(BoardList::Done),
            _ => None,
        }
    }
}
