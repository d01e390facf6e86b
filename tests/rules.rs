use rand::SeedableRng;
use rand::rngs::StdRng;

use push::card::{DECK_SIZE, REVERSE_COUNT, ROLL_COUNT};
use push::{Card, Color, Deck, GameError, GameEvent, Pile, PileGroup, Player};

fn pile_of(cards: &[Card]) -> Pile {
    cards.iter().copied().collect()
}

#[test]
fn fresh_deck_has_full_composition() {
    let mut events: Vec<GameEvent> = Vec::new();
    let mut deck = Deck::new(&mut StdRng::seed_from_u64(2024), &mut events);
    assert_eq!(events, vec![GameEvent::DeckShuffled]);

    let mut dealt = Vec::with_capacity(DECK_SIZE);
    while !deck.is_empty() {
        dealt.push(deck.deal().expect("deck reported cards left"));
    }
    assert_eq!(dealt.len(), DECK_SIZE);
    assert_eq!(dealt.iter().filter(|c| c.is_reverse()).count(), REVERSE_COUNT);
    assert_eq!(dealt.iter().filter(|c| c.is_roll()).count(), ROLL_COUNT);
    for color in Color::ALL {
        assert_eq!(dealt.iter().filter(|c| c.color() == Some(color)).count(), 18);
    }
    assert_eq!(deck.deal(), Err(GameError::EmptyDeck));
}

#[test]
fn pile_rejects_conflicting_cards() {
    let pile = pile_of(&[Card::standard(Color::Red, 3), Card::roll()]);
    assert!(!pile.valid_addition(&Card::standard(Color::Red, 0)));
    assert!(!pile.valid_addition(&Card::standard(Color::Yellow, 3)));
    assert!(!pile.valid_addition(&Card::roll()));
    assert!(!pile.valid_addition(&Card::reverse()));
    assert!(pile.valid_addition(&Card::standard(Color::Yellow, 4)));

    let with_reverse = pile_of(&[Card::reverse()]);
    assert!(!with_reverse.valid_addition(&Card::standard(Color::Blue, 1)));
}

#[test]
fn pile_value_counts_roll_as_penalty() {
    let pile = pile_of(&[
        Card::standard(Color::Red, 3),
        Card::standard(Color::Blue, 1),
        Card::roll(),
    ]);
    assert_eq!(pile.value(), -2);
}

#[test]
fn group_values_track_each_pile() {
    let mut group = PileGroup::new();
    group.add_card(0, Card::standard(Color::Green, 5));
    group.add_card(2, Card::roll());
    assert_eq!(group.pile_values(), vec![5, 0, -6]);
    assert_eq!(group.lowest_value_index(), Some(2));
    group.remove_pile(2);
    assert_eq!(group.pile_values(), vec![5, 0]);
}

#[test]
fn three_card_deal_with_reverse() {
    let player = Player::new("dealer", 3, 3, 15).expect("valid player");
    let mut deck = Deck::from_cards([
        Card::standard(Color::Red, 1),
        Card::standard(Color::Blue, 2),
        Card::reverse(),
    ]);
    let outcome = player.create_piles(&mut deck, &mut StdRng::seed_from_u64(0));
    assert!(outcome.is_reversed);
    assert!(!outcome.pushed_too_far);
    assert_eq!(outcome.piles.len(), 3);
    let first = outcome.piles.pile(0).expect("pile 0 exists");
    assert!(first.contains(&Card::standard(Color::Red, 1)));
    assert!(first.contains(&Card::standard(Color::Blue, 2)));
    assert_eq!(outcome.piles.card_count(), 2);
}

#[test]
fn banking_locks_color_but_keeps_score() {
    let mut player = Player::new("banker", 10, 5, 8).expect("valid player");
    for card in [
        Card::standard(Color::Purple, 5),
        Card::standard(Color::Purple, 3),
        Card::standard(Color::Red, 4),
    ] {
        player.add_to_hand(card);
    }
    assert!(player.has_bankable_color());
    assert_eq!(player.bank_cards(), Color::Purple);

    let purple: Vec<&Card> = player
        .hand()
        .iter()
        .filter(|c| c.color() == Some(Color::Purple))
        .collect();
    assert!(purple.iter().all(|c| c.is_banked()));
    assert_eq!(player.num_points_per_color()[Color::Purple.index()], 0);
    assert_eq!(player.sum_cards(), 12);

    // A purple discard no longer touches the banked cards.
    assert_eq!(player.discard_color(Color::Purple), 0);
    assert_eq!(player.discard_color(Color::Red), 1);
    assert_eq!(player.sum_cards(), 8);
}

#[test]
fn invalid_draw_range_is_rejected() {
    assert_eq!(
        Player::new("x", 3, 4, 15).err(),
        Some(GameError::InvalidDrawRange { min: 4, limit: 3 })
    );
}
