use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub fn as_str(&self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
        }
    }
}

impl FromStr for Suit {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Suit::ALL.into_iter().find(|suit| suit.as_str() == s).ok_or(())
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Card rank, serialized under the `value` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rank {
    #[serde(rename = "A")]
    Ace,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl FromStr for Rank {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rank::ALL.into_iter().find(|rank| rank.as_str() == s).ok_or(())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier assigned by the store. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CardId(pub u64);

impl CardId {
    /// Parse a path segment. Only base-10 integers greater than zero are accepted.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        match raw.parse::<u64>() {
            Ok(0) | Err(_) => None,
            Ok(id) => Some(CardId(id)),
        }
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub id: CardId,
    pub suit: Suit,
    pub value: Rank,
}

/// A validated request to create a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewCard {
    pub suit: Suit,
    pub value: Rank,
}

/// Success envelope: `{"data": ...}`.
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

/// Single error envelope: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Validation failure envelope: `{"errors": [...]}`.
#[derive(Debug, Serialize)]
pub struct ValidationErrorResponse {
    pub errors: Vec<String>,
}

/// Response for the health endpoint.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub uptime: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_serializes_flat() {
        let card = Card {
            id: CardId(7),
            suit: Suit::Clubs,
            value: Rank::Ten,
        };
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 7, "suit": "Clubs", "value": "10" })
        );
    }

    #[test]
    fn test_rank_tokens_match_serde_names() {
        for rank in Rank::ALL {
            let json = serde_json::to_value(rank).unwrap();
            assert_eq!(json, rank.as_str());
            assert_eq!(rank.as_str().parse::<Rank>(), Ok(rank));
        }
    }

    #[test]
    fn test_suit_parse_is_case_sensitive() {
        assert_eq!("Spades".parse::<Suit>(), Ok(Suit::Spades));
        assert!("spades".parse::<Suit>().is_err());
        assert!("".parse::<Suit>().is_err());
    }

    #[test]
    fn test_card_id_parse() {
        assert_eq!(CardId::parse("1"), Some(CardId(1)));
        assert_eq!(CardId::parse("42"), Some(CardId(42)));
        assert_eq!(CardId::parse("0"), None);
        assert_eq!(CardId::parse("-3"), None);
        assert_eq!(CardId::parse("+3"), None);
        assert_eq!(CardId::parse("1.5"), None);
        assert_eq!(CardId::parse("abc"), None);
        assert_eq!(CardId::parse(""), None);
        assert_eq!(CardId::parse("99999999999999999999999"), None);
    }
}
