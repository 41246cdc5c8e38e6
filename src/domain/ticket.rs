/// A card as the board returns it, before any parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: String,
    pub name: String,
}

impl Card {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ticket {
    pub id: String,
    pub name: String,
    pub story_points: i64,
}

impl Ticket {
    /// Parses a card name of the form `<name> [... <points>]`.
    ///
    /// The first whitespace token is the ticket name. When there is more than
    /// one token and the last one is an integer, it becomes the story points;
    /// anything else yields zero points. Points must fit in an `i64` and use
    /// plain digits with an optional sign, so `1_000` or a twenty-digit value
    /// also count as zero.
    pub fn from_card(card: &Card) -> Self {
        let mut tokens = card.name.split_whitespace();
        let Some(name) = tokens.next() else {
            return Self::default();
        };

        let story_points = tokens
            .last()
            .and_then(|token| token.parse::<i64>().ok())
            .unwrap_or(0);

        Self {
            id: card.id.clone(),
            name: name.to_string(),
            story_points,
        }
    }

    /// Card name that keeps the story points when the card is recreated.
    pub fn label(&self) -> String {
        format!("{} - {}", self.name, self.story_points)
    }
}

pub fn first_token(value: &str) -> &str {
    value.split_whitespace().next().unwrap_or("")
}
