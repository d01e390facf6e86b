use std::collections::VecDeque;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, full_deck};
use crate::error::GameError;
use crate::event::{EventSink, GameEvent};

/// Shared draw pile, drained strictly from the front.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Standard 120-card deck, shuffled once.
    pub fn new<R: Rng + ?Sized, E: EventSink + ?Sized>(rng: &mut R, events: &mut E) -> Self {
        let mut deck = Self::from_cards(full_deck());
        deck.shuffle(rng, events);
        deck
    }

    /// Deck dealing `cards` in the given order. No shuffle is applied.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    pub fn shuffle<R: Rng + ?Sized, E: EventSink + ?Sized>(&mut self, rng: &mut R, events: &mut E) {
        self.cards.make_contiguous().shuffle(rng);
        events.emit(GameEvent::DeckShuffled);
    }

    pub fn deal(&mut self) -> Result<Card, GameError> {
        self.cards.pop_front().ok_or(GameError::EmptyDeck)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
