use std::collections::VecDeque;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::action::{PlayerId, TurnAction, TurnReport};
use crate::card::Card;
use crate::deck::Deck;
use crate::error::GameError;
use crate::event::{EventSink, GameEvent, LogSink};
use crate::pile::PILE_COUNT;
use crate::player::{DealOutcome, Player, PlayerConfig};
use crate::score::Standings;
use crate::state::{GameSettings, GameStatus, PlayerSummary};

pub const DEFAULT_SEED: u64 = 0x5EED_5EED_5EED_5EED;

/// Serializable description of a table, e.g. loaded from a JSON file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub seed: u64,
    pub starting_player: PlayerId,
    pub players: Vec<PlayerConfig>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            starting_player: 0,
            players: (0..2)
                .map(|id| PlayerConfig::named(format!("Player {id}")))
                .collect(),
        }
    }
}

impl GameConfig {
    /// Table of `num_players` seats sharing the `template` parameters.
    pub fn uniform(num_players: usize, template: &PlayerConfig, seed: u64) -> Self {
        let players = (0..num_players)
            .map(|id| PlayerConfig {
                name: format!("Player {id}"),
                ..template.clone()
            })
            .collect();
        Self {
            seed,
            starting_player: 0,
            players,
        }
    }

    pub fn builder(&self) -> Result<GameBuilder, GameError> {
        let players = self
            .players
            .iter()
            .map(Player::from_config)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(GameBuilder::new(players)?
            .starting_player(self.starting_player)?
            .with_seed(self.seed))
    }
}

/// Builder that enables deterministic deck and RNG injection for testing.
pub struct GameBuilder {
    settings: GameSettings,
    players: Vec<Player>,
    seed: u64,
    deck: Option<Vec<Card>>,
}

impl GameBuilder {
    pub fn new(players: Vec<Player>) -> Result<Self, GameError> {
        Ok(Self {
            settings: GameSettings::new(players.len(), 0)?,
            players,
            seed: DEFAULT_SEED,
            deck: None,
        })
    }

    pub fn starting_player(mut self, starting_player: PlayerId) -> Result<Self, GameError> {
        self.settings = GameSettings::new(self.players.len(), starting_player)?;
        Ok(self)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Deal from `deck` front to back instead of a shuffled standard deck.
    pub fn with_deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Seeded `StdRng`, events forwarded to the `log` facade.
    pub fn build(self) -> Game {
        let rng = StdRng::seed_from_u64(self.seed);
        self.build_with(rng, LogSink)
    }

    pub fn build_with<R: Rng, E: EventSink>(self, mut rng: R, mut events: E) -> Game<R, E> {
        let GameBuilder {
            settings,
            players,
            deck,
            ..
        } = self;
        let deck = match deck {
            Some(cards) => Deck::from_cards(cards),
            None => Deck::new(&mut rng, &mut events),
        };
        let mut turn_order: VecDeque<PlayerId> = (0..settings.num_players).collect();
        turn_order.rotate_left(settings.starting_player);

        Game {
            settings,
            players,
            deck,
            turn_order,
            turns_played: 0,
            status: GameStatus::Ongoing,
            rng,
            events,
        }
    }
}

/// Core Push engine.
pub struct Game<R: Rng = StdRng, E: EventSink = LogSink> {
    settings: GameSettings,
    players: Vec<Player>,
    deck: Deck,
    /// Seats in turn order; the front is the next player to act.
    turn_order: VecDeque<PlayerId>,
    turns_played: usize,
    status: GameStatus,
    rng: R,
    events: E,
}

impl Game {
    pub fn new(players: Vec<Player>, starting_player: PlayerId) -> Result<Self, GameError> {
        Ok(GameBuilder::new(players)?
            .starting_player(starting_player)?
            .build())
    }

    pub fn builder(players: Vec<Player>) -> Result<GameBuilder, GameError> {
        GameBuilder::new(players)
    }
}

impl<R: Rng, E: EventSink> Game<R, E> {
    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status, GameStatus::Finished { .. })
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.status {
            GameStatus::Finished { winner } => winner,
            GameStatus::Ongoing => None,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn events(&self) -> &E {
        &self.events
    }

    pub fn turns_played(&self) -> usize {
        self.turns_played
    }

    pub fn current_player(&self) -> PlayerId {
        self.turn_order[0]
    }

    pub fn turn_order(&self) -> Vec<PlayerId> {
        self.turn_order.iter().copied().collect()
    }

    pub fn scores(&self) -> Vec<u32> {
        self.players.iter().map(Player::sum_cards).collect()
    }

    pub fn player_summaries(&self) -> Vec<PlayerSummary> {
        let current = self.current_player();
        self.players
            .iter()
            .enumerate()
            .map(|(id, player)| PlayerSummary::of(id, player, id == current))
            .collect()
    }

    /// Runs turns until the deck is empty and returns the winner, if any.
    pub fn play(&mut self) -> Option<PlayerId> {
        while self.play_turn().is_some() {}
        self.end_game().winner
    }

    /// Plays a single turn. Returns `None` once the deck is exhausted.
    pub fn play_turn(&mut self) -> Option<TurnReport> {
        if self.deck.is_empty() {
            return None;
        }
        let current = self.current_player();
        self.events.emit(GameEvent::TurnStarted { player: current });

        let action = if self.players[current].has_bankable_color() {
            let color = self.players[current].bank_cards();
            self.events.emit(GameEvent::Banked {
                player: current,
                color,
            });
            self.turn_order.rotate_left(1);
            TurnAction::Bank { color }
        } else {
            self.deal_turn(current)
        };

        self.turns_played += 1;
        Some(TurnReport {
            turn: self.turns_played,
            player: current,
            action,
            turn_order: self.turn_order(),
            cards_left: self.deck.len(),
        })
    }

    fn deal_turn(&mut self, dealer: PlayerId) -> TurnAction {
        let DealOutcome {
            is_reversed,
            pushed_too_far,
            mut piles,
        } = self.players[dealer].create_piles(&mut self.deck, &mut self.rng);

        if is_reversed {
            self.events.emit(GameEvent::PlayReversed);
            // Dealer stays in front; everyone behind them now comes in reverse.
            self.turn_order.rotate_left(1);
            self.turn_order.make_contiguous().reverse();
        }
        if pushed_too_far {
            self.events.emit(GameEvent::PushedTooFar { player: dealer });
        }

        let recipients: Vec<PlayerId> = self
            .turn_order
            .iter()
            .skip(usize::from(pushed_too_far))
            .take(PILE_COUNT)
            .copied()
            .collect();
        self.turn_order.rotate_left(1);

        let cards_dealt = piles.card_count();
        for &id in &recipients {
            self.players[id].choose_pile(&mut piles, &mut self.rng, &mut self.events);
        }

        TurnAction::Deal {
            is_reversed,
            pushed_too_far,
            recipients,
            cards_dealt,
        }
    }

    /// Scores the table, records the result and reports it.
    pub fn end_game(&mut self) -> Standings {
        let scores = self.scores();
        let card_counts: Vec<usize> = self.players.iter().map(Player::num_cards).collect();
        let standings = Standings::new(scores, card_counts);

        if standings.is_tied() {
            self.events.emit(GameEvent::TieBreak {
                card_counts: standings.card_counts.clone(),
            });
        }
        match standings.winner {
            Some(player) => self.events.emit(GameEvent::Winner { player }),
            None => self.events.emit(GameEvent::NoWinner),
        }
        self.events
            .emit(GameEvent::FinalScores(standings.scores.clone()));

        self.status = GameStatus::Finished {
            winner: standings.winner,
        };
        standings
    }
}
