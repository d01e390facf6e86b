use std::array::from_fn;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::card::{COLOR_COUNT, Card, Color, DieFace};
use crate::deck::Deck;
use crate::error::GameError;
use crate::event::{EventSink, GameEvent};
use crate::pile::PileGroup;

/// Serializable player parameters. Validated by [`Player::from_config`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub name: String,
    pub card_draw_limit: usize,
    pub card_draw_min: usize,
    pub bank_threshold: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            card_draw_limit: 10,
            card_draw_min: 5,
            bank_threshold: 15,
        }
    }
}

impl PlayerConfig {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Result of a dealer building piles from the deck.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DealOutcome {
    pub is_reversed: bool,
    pub pushed_too_far: bool,
    pub piles: PileGroup,
}

/// What a receiving player did with the pile they took.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PileTaken {
    pub pile_index: usize,
    pub value: i32,
    pub kept: Vec<Card>,
    pub rolls: Vec<DieFace>,
}

/// Rolls the six-sided color die.
pub fn roll_die<R: Rng + ?Sized>(rng: &mut R) -> DieFace {
    DieFace::ALL[rng.gen_range(0..DieFace::ALL.len())]
}

#[derive(Clone, Debug)]
pub struct Player {
    name: String,
    card_draw_limit: usize,
    card_draw_min: usize,
    bank_threshold: u32,
    hand: Vec<Card>,
}

impl Player {
    pub fn new(
        name: impl Into<String>,
        card_draw_limit: usize,
        card_draw_min: usize,
        bank_threshold: u32,
    ) -> Result<Self, GameError> {
        if card_draw_min > card_draw_limit {
            return Err(GameError::InvalidDrawRange {
                min: card_draw_min,
                limit: card_draw_limit,
            });
        }
        if card_draw_limit == 0 {
            return Err(GameError::InvalidDrawLimit);
        }
        if bank_threshold == 0 {
            return Err(GameError::InvalidBankThreshold);
        }
        Ok(Self {
            name: name.into(),
            card_draw_limit,
            card_draw_min,
            bank_threshold,
            hand: Vec::new(),
        })
    }

    pub fn from_config(config: &PlayerConfig) -> Result<Self, GameError> {
        Self::new(
            config.name.clone(),
            config.card_draw_limit,
            config.card_draw_min,
            config.bank_threshold,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn card_draw_limit(&self) -> usize {
        self.card_draw_limit
    }

    pub fn card_draw_min(&self) -> usize {
        self.card_draw_min
    }

    pub fn bank_threshold(&self) -> u32 {
        self.bank_threshold
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn add_to_hand(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Deals a random number of cards from `deck` into a fresh pile group.
    ///
    /// Reverse cards toggle the direction flag and are dropped. Any other card
    /// goes to the first pile that accepts it; a card no pile accepts marks the
    /// turn as pushed too far and is dropped. Running out of cards ends the
    /// deal early.
    pub fn create_piles<R: Rng + ?Sized>(&self, deck: &mut Deck, rng: &mut R) -> DealOutcome {
        let number_of_cards = rng.gen_range(self.card_draw_min..=self.card_draw_limit);
        let mut is_reversed = false;
        let mut pushed_too_far = false;
        let mut piles = PileGroup::new();

        for _ in 0..number_of_cards {
            let Ok(card) = deck.deal() else {
                break;
            };
            if card.is_reverse() {
                is_reversed = !is_reversed;
                continue;
            }
            match piles.first_fit(&card) {
                Some(index) => piles.add_card(index, card),
                None => pushed_too_far = true,
            }
        }

        DealOutcome {
            is_reversed,
            pushed_too_far,
            piles,
        }
    }

    /// Takes the lowest-valued pile. Roll cards trigger a die roll against
    /// this hand instead of being kept. Does nothing on an empty group.
    pub fn choose_pile<R: Rng + ?Sized, E: EventSink + ?Sized>(
        &mut self,
        pile_group: &mut PileGroup,
        rng: &mut R,
        events: &mut E,
    ) -> Option<PileTaken> {
        let pile_index = pile_group.lowest_value_index()?;
        let pile = pile_group.remove_pile(pile_index)?;
        let value = pile.value();
        let mut kept = Vec::with_capacity(pile.len());
        let mut rolls = Vec::new();
        for card in pile.into_cards() {
            if card.is_roll() {
                rolls.push(self.roll_die(rng, events));
            } else {
                self.hand.push(card);
                kept.push(card);
            }
        }
        Some(PileTaken {
            pile_index,
            value,
            kept,
            rolls,
        })
    }

    pub fn roll_die<R: Rng + ?Sized, E: EventSink + ?Sized>(
        &mut self,
        rng: &mut R,
        events: &mut E,
    ) -> DieFace {
        let face = roll_die(rng);
        events.emit(GameEvent::DieRolled(face));
        if let Some(color) = face.color() {
            self.discard_color(color);
        }
        face
    }

    /// Drops every unbanked card of `color`. Returns how many were removed.
    pub fn discard_color(&mut self, color: Color) -> usize {
        let before = self.hand.len();
        self.hand
            .retain(|card| card.is_banked() || card.color() != Some(color));
        before - self.hand.len()
    }

    /// Unbanked points held per color, indexed by [`Color::index`].
    pub fn num_points_per_color(&self) -> [u32; COLOR_COUNT] {
        from_fn(|index| {
            let color = Color::ALL[index];
            self.hand
                .iter()
                .filter(|card| !card.is_banked() && card.color() == Some(color))
                .filter_map(Card::number)
                .map(u32::from)
                .sum()
        })
    }

    /// Color with the most unbanked points; the earliest color wins ties.
    pub fn max_stack_color(&self) -> Color {
        let points = self.num_points_per_color();
        let mut best = Color::ALL[0];
        for color in Color::ALL {
            if points[color.index()] > points[best.index()] {
                best = color;
            }
        }
        best
    }

    pub fn has_bankable_color(&self) -> bool {
        let points = self.num_points_per_color();
        points[self.max_stack_color().index()] >= self.bank_threshold
    }

    /// Banks every card of the strongest color and returns that color.
    pub fn bank_cards(&mut self) -> Color {
        let color = self.max_stack_color();
        for card in self.hand.iter_mut().filter(|card| card.color() == Some(color)) {
            card.bank();
        }
        color
    }

    /// Final score: every standard card counts, banked or not.
    pub fn sum_cards(&self) -> u32 {
        self.hand.iter().filter_map(Card::number).map(u32::from).sum()
    }

    pub fn num_cards(&self) -> usize {
        self.hand.iter().filter(|card| card.is_standard()).count()
    }

    pub fn banked_points(&self) -> u32 {
        self.hand
            .iter()
            .filter(|card| card.is_banked())
            .filter_map(Card::number)
            .map(u32::from)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn player_with_hand(hand: &[Card]) -> Player {
        let mut player = Player::new("p", 3, 3, 10).expect("valid player");
        for card in hand {
            player.add_to_hand(*card);
        }
        player
    }

    #[test]
    fn rejects_inverted_draw_range() {
        assert_eq!(
            Player::new("p", 2, 3, 10).err(),
            Some(GameError::InvalidDrawRange { min: 3, limit: 2 })
        );
        assert_eq!(Player::new("p", 0, 0, 10).err(), Some(GameError::InvalidDrawLimit));
        assert_eq!(Player::new("p", 4, 4, 0).err(), Some(GameError::InvalidBankThreshold));
        assert!(Player::new("p", 4, 4, 1).is_ok());
    }

    #[test]
    fn discard_color_removes_adjacent_matches() {
        let mut banked = Card::standard(Color::Red, 5);
        banked.bank();
        let mut player = player_with_hand(&[
            Card::standard(Color::Red, 1),
            Card::standard(Color::Red, 2),
            banked,
            Card::standard(Color::Blue, 2),
            Card::standard(Color::Red, 3),
        ]);
        assert_eq!(player.discard_color(Color::Red), 3);
        assert_eq!(player.hand(), &[banked, Card::standard(Color::Blue, 2)]);
    }

    #[test]
    fn points_per_color_skip_banked_cards() {
        let mut player = player_with_hand(&[
            Card::standard(Color::Yellow, 4),
            Card::standard(Color::Yellow, 5),
            Card::standard(Color::Green, 3),
        ]);
        let points = player.num_points_per_color();
        assert_eq!(points[Color::Yellow.index()], 9);
        assert_eq!(points[Color::Green.index()], 3);
        assert_eq!(player.max_stack_color(), Color::Yellow);

        assert_eq!(player.bank_cards(), Color::Yellow);
        let points = player.num_points_per_color();
        assert_eq!(points[Color::Yellow.index()], 0);
        assert_eq!(player.sum_cards(), 12);
        assert_eq!(player.banked_points(), 9);
        assert_eq!(player.max_stack_color(), Color::Green);
    }

    #[test]
    fn max_stack_color_ties_pick_earliest_color() {
        let player = player_with_hand(&[
            Card::standard(Color::Green, 4),
            Card::standard(Color::Purple, 4),
            Card::standard(Color::Blue, 4),
        ]);
        assert_eq!(player.max_stack_color(), Color::Purple);
        assert_eq!(player_with_hand(&[]).max_stack_color(), Color::Red);
    }

    #[test]
    fn bankable_once_threshold_reached() {
        let mut player = player_with_hand(&[
            Card::standard(Color::Blue, 5),
            Card::standard(Color::Blue, 4),
        ]);
        assert!(!player.has_bankable_color());
        player.add_to_hand(Card::standard(Color::Blue, 1));
        assert!(player.has_bankable_color());
        player.bank_cards();
        assert!(!player.has_bankable_color());
    }

    #[test]
    fn sum_and_count_ignore_non_standard_cards() {
        let player = player_with_hand(&[
            Card::standard(Color::Red, 0),
            Card::standard(Color::Blue, 3),
            Card::roll(),
        ]);
        assert_eq!(player.sum_cards(), 3);
        assert_eq!(player.num_cards(), 2);
    }

    #[test]
    fn create_piles_first_fit_and_reverse() {
        let player = player_with_hand(&[]);
        let mut deck = Deck::from_cards([
            Card::standard(Color::Red, 1),
            Card::standard(Color::Blue, 2),
            Card::reverse(),
        ]);
        let mut rng = StdRng::seed_from_u64(1);
        let outcome = player.create_piles(&mut deck, &mut rng);
        assert!(outcome.is_reversed);
        assert!(!outcome.pushed_too_far);
        let first = outcome.piles.pile(0).expect("pile 0");
        assert_eq!(
            first.cards(),
            &[Card::standard(Color::Red, 1), Card::standard(Color::Blue, 2)]
        );
        assert!(outcome.piles.pile(1).is_some_and(|pile| pile.is_empty()));
        assert!(deck.is_empty());
    }

    #[test]
    fn create_piles_stops_on_empty_deck() {
        let player = Player::new("p", 10, 10, 10).expect("valid player");
        let mut deck = Deck::from_cards([Card::roll(), Card::standard(Color::Green, 0)]);
        let outcome = player.create_piles(&mut deck, &mut StdRng::seed_from_u64(3));
        assert!(!outcome.is_reversed);
        assert!(!outcome.pushed_too_far);
        assert_eq!(outcome.piles.card_count(), 2);
        assert!(deck.is_empty());
    }

    #[test]
    fn create_piles_flags_push_too_far() {
        let player = Player::new("p", 4, 4, 10).expect("valid player");
        let mut deck = Deck::from_cards([Card::standard(Color::Red, 1); 4]);
        let outcome = player.create_piles(&mut deck, &mut StdRng::seed_from_u64(5));
        assert!(outcome.pushed_too_far);
        assert_eq!(outcome.piles.pile_values(), vec![1, 1, 1]);
    }

    #[test]
    fn double_reverse_cancels_out() {
        let player = Player::new("p", 2, 2, 10).expect("valid player");
        let mut deck = Deck::from_cards([Card::reverse(), Card::reverse()]);
        let outcome = player.create_piles(&mut deck, &mut StdRng::seed_from_u64(5));
        assert!(!outcome.is_reversed);
        assert_eq!(outcome.piles.card_count(), 0);
    }

    #[test]
    fn choose_pile_takes_cheapest_and_rolls_for_roll_cards() {
        let mut player = player_with_hand(&[]);
        let mut group = PileGroup::new();
        group.add_card(0, Card::standard(Color::Red, 5));
        group.add_card(1, Card::standard(Color::Blue, 2));
        group.add_card(1, Card::roll());
        group.add_card(2, Card::standard(Color::Green, 0));
        let mut events: Vec<GameEvent> = Vec::new();
        let taken = player
            .choose_pile(&mut group, &mut StdRng::seed_from_u64(9), &mut events)
            .expect("pile available");
        assert_eq!(taken.pile_index, 1);
        assert_eq!(taken.value, -4);
        assert_eq!(taken.rolls.len(), 1);
        assert_eq!(events, vec![GameEvent::DieRolled(taken.rolls[0])]);
        assert_eq!(group.len(), 2);
        // The blue card lands in hand first, so a blue roll discards it again.
        let expected_hand = if taken.rolls[0] == DieFace::Color(Color::Blue) { 0 } else { 1 };
        assert_eq!(player.hand().len(), expected_hand);
    }

    #[test]
    fn choose_pile_on_empty_group_is_noop() {
        let mut player = player_with_hand(&[]);
        let mut group = PileGroup::new();
        for _ in 0..3 {
            group.remove_pile(0);
        }
        let mut events: Vec<GameEvent> = Vec::new();
        let taken = player.choose_pile(&mut group, &mut StdRng::seed_from_u64(0), &mut events);
        assert_eq!(taken, None);
        assert!(events.is_empty());
    }

    #[test]
    fn die_roll_spares_banked_cards() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let mut banked = Card::standard(Color::Purple, 2);
            banked.bank();
            let mut player = player_with_hand(&[banked, Card::standard(Color::Purple, 1)]);
            let face = player.roll_die(&mut rng, &mut Vec::<GameEvent>::new());
            let expected = if face == DieFace::Color(Color::Purple) { 1 } else { 2 };
            assert_eq!(player.hand().len(), expected);
            assert!(player.hand()[0].is_banked());
        }
    }
}
