use std::fmt;

use serde::{Deserialize, Serialize};

pub const COLOR_COUNT: usize = 5;
pub const MIN_CARD_NUMBER: u8 = 0;
pub const MAX_CARD_NUMBER: u8 = 5;
pub const COPIES_PER_CARD: usize = 3;
pub const REVERSE_COUNT: usize = 12;
pub const ROLL_COUNT: usize = 18;
pub const DECK_SIZE: usize = 120;
/// Pile value penalty carried by every roll card.
pub const ROLL_PENALTY: i32 = 6;

/// Colors printed on standard cards.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Purple,
    Yellow,
    Blue,
    Green,
}

impl Color {
    /// Canonical color order. Ties between colors resolve to the earliest entry.
    pub const ALL: [Color; COLOR_COUNT] = [
        Color::Red,
        Color::Purple,
        Color::Yellow,
        Color::Blue,
        Color::Green,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Purple => "purple",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Green => "green",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What is printed on a card.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CardFace {
    /// Scoring card with a color and a number between 0 and 5.
    Standard { color: Color, number: u8 },
    /// Flips the direction of play when drawn.
    Reverse,
    /// Pile penalty; triggers a die roll for whoever receives it.
    Roll,
}

/// A Push card. The banked flag is game state, not identity, so it is
/// ignored by equality.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    face: CardFace,
    banked: bool,
}

impl Card {
    pub fn standard(color: Color, number: u8) -> Self {
        debug_assert!(number <= MAX_CARD_NUMBER);
        Self::from_face(CardFace::Standard { color, number })
    }

    pub fn reverse() -> Self {
        Self::from_face(CardFace::Reverse)
    }

    pub fn roll() -> Self {
        Self::from_face(CardFace::Roll)
    }

    pub fn from_face(face: CardFace) -> Self {
        Self { face, banked: false }
    }

    #[inline]
    pub fn face(&self) -> CardFace {
        self.face
    }

    #[inline]
    pub fn color(&self) -> Option<Color> {
        match self.face {
            CardFace::Standard { color, .. } => Some(color),
            _ => None,
        }
    }

    #[inline]
    pub fn number(&self) -> Option<u8> {
        match self.face {
            CardFace::Standard { number, .. } => Some(number),
            _ => None,
        }
    }

    #[inline]
    pub fn is_standard(&self) -> bool {
        matches!(self.face, CardFace::Standard { .. })
    }

    #[inline]
    pub fn is_reverse(&self) -> bool {
        matches!(self.face, CardFace::Reverse)
    }

    #[inline]
    pub fn is_roll(&self) -> bool {
        matches!(self.face, CardFace::Roll)
    }

    #[inline]
    pub fn is_banked(&self) -> bool {
        self.banked
    }

    /// Locks the card against die-roll discards. There is no way back.
    pub fn bank(&mut self) {
        self.banked = true;
    }

    /// Contribution of this card to a pile's value.
    pub fn pile_value(&self) -> i32 {
        match self.face {
            CardFace::Standard { number, .. } => i32::from(number),
            CardFace::Roll => -ROLL_PENALTY,
            CardFace::Reverse => 0,
        }
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.face == other.face
    }
}

impl Eq for Card {}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.face {
            CardFace::Standard { color, number } => write!(f, "{color} {number}")?,
            CardFace::Reverse => f.write_str("reverse")?,
            CardFace::Roll => f.write_str("roll")?,
        }
        if self.banked {
            f.write_str(" (banked)")?;
        }
        Ok(())
    }
}

/// Faces of the six-sided color die. Black matches no card.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum DieFace {
    Color(Color),
    Black,
}

impl DieFace {
    pub const ALL: [DieFace; 6] = [
        DieFace::Color(Color::Red),
        DieFace::Color(Color::Purple),
        DieFace::Color(Color::Yellow),
        DieFace::Color(Color::Blue),
        DieFace::Color(Color::Green),
        DieFace::Black,
    ];

    pub fn color(self) -> Option<Color> {
        match self {
            DieFace::Color(color) => Some(color),
            DieFace::Black => None,
        }
    }
}

impl fmt::Display for DieFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DieFace::Color(color) => write!(f, "{color}"),
            DieFace::Black => f.write_str("black"),
        }
    }
}

/// Builds the 120-card Push deck in deterministic order (unshuffled).
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for number in MIN_CARD_NUMBER..=MAX_CARD_NUMBER {
        for color in Color::ALL {
            for _ in 0..COPIES_PER_CARD {
                deck.push(Card::standard(color, number));
            }
        }
    }
    deck.extend(std::iter::repeat(Card::reverse()).take(REVERSE_COUNT));
    deck.extend(std::iter::repeat(Card::roll()).take(ROLL_COUNT));
    deck
}
