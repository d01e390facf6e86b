use std::array::from_fn;

use serde::{Deserialize, Serialize};

use crate::card::Card;

pub const PILE_COUNT: usize = 3;

/// Cards grouped by the dealer during a single turn.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `card` can join the pile without breaking its invariant: no
    /// reverse cards, no repeated color, no repeated number, one roll at most.
    pub fn valid_addition(&self, card: &Card) -> bool {
        if card.is_reverse() {
            return false;
        }
        self.cards.iter().all(|existing| {
            if existing.is_reverse() {
                return false;
            }
            if existing.is_roll() && card.is_roll() {
                return false;
            }
            let shares_color = existing.color().is_some() && existing.color() == card.color();
            let shares_number = existing.number().is_some() && existing.number() == card.number();
            !shares_color && !shares_number
        })
    }

    /// Appends without checking; call `valid_addition` first.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Sum of standard numbers, less the roll penalty.
    pub fn value(&self) -> i32 {
        self.cards.iter().map(Card::pile_value).sum()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromIterator<Card> for Pile {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

/// The three piles built in one turn. Piles are only ever removed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PileGroup {
    piles: Vec<Pile>,
}

impl Default for PileGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl PileGroup {
    pub fn new() -> Self {
        let piles: [Pile; PILE_COUNT] = from_fn(|_| Pile::new());
        Self {
            piles: piles.into(),
        }
    }

    /// Any-fit: true if at least one pile would accept the card.
    pub fn valid_addition(&self, card: &Card) -> bool {
        self.piles.iter().any(|pile| pile.valid_addition(card))
    }

    pub fn valid_addition_at(&self, pile_index: usize, card: &Card) -> bool {
        self.piles
            .get(pile_index)
            .is_some_and(|pile| pile.valid_addition(card))
    }

    /// First-fit: the lowest-indexed pile that accepts the card.
    pub fn first_fit(&self, card: &Card) -> Option<usize> {
        self.piles.iter().position(|pile| pile.valid_addition(card))
    }

    pub fn add_card(&mut self, pile_index: usize, card: Card) {
        self.piles[pile_index].add_card(card);
    }

    pub fn remove_pile(&mut self, pile_index: usize) -> Option<Pile> {
        (pile_index < self.piles.len()).then(|| self.piles.remove(pile_index))
    }

    pub fn pile_values(&self) -> Vec<i32> {
        self.piles.iter().map(Pile::value).collect()
    }

    /// Index of the cheapest pile; the first index wins ties.
    pub fn lowest_value_index(&self) -> Option<usize> {
        self.piles
            .iter()
            .enumerate()
            .min_by_key(|(_, pile)| pile.value())
            .map(|(index, _)| index)
    }

    pub fn piles(&self) -> &[Pile] {
        &self.piles
    }

    pub fn pile(&self, pile_index: usize) -> Option<&Pile> {
        self.piles.get(pile_index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.piles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.piles.is_empty()
    }

    /// Total cards across all piles.
    pub fn card_count(&self) -> usize {
        self.piles.iter().map(Pile::len).sum()
    }
}
