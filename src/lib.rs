//! Push card game engine: deal piles from a shared deck, hand them out by
//! value, bank colors and survive die rolls until the deck runs dry.

pub mod action;
pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod pile;
pub mod player;
pub mod score;
pub mod state;
pub mod visualize;

pub use crate::action::{PlayerId, TurnAction, TurnReport};
pub use crate::card::{Card, CardFace, Color, DieFace, full_deck};
pub use crate::deck::Deck;
pub use crate::error::GameError;
pub use crate::event::{EventSink, GameEvent, LogSink, NullSink};
pub use crate::game::{DEFAULT_SEED, Game, GameBuilder, GameConfig};
pub use crate::pile::{PILE_COUNT, Pile, PileGroup};
pub use crate::player::{DealOutcome, PileTaken, Player, PlayerConfig, roll_die};
pub use crate::score::{Standings, decide_winner};
pub use crate::state::{GameSettings, GameStatus, MAX_PLAYERS, MIN_PLAYERS, PlayerSummary};
pub use crate::visualize::{VisualOptions, describe_turn, render_players, render_standings};
