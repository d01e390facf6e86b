//! Observability events emitted while a game runs.
//!
//! Events are advisory: the engine never reads them back, so a sink may drop,
//! log or record them without affecting play.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::action::PlayerId;
use crate::card::{Color, DieFace};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    DeckShuffled,
    DieRolled(DieFace),
    TurnStarted { player: PlayerId },
    PlayReversed,
    PushedTooFar { player: PlayerId },
    Banked { player: PlayerId, color: Color },
    FinalScores(Vec<u32>),
    /// Standard card counts reported when the top score is shared.
    TieBreak { card_counts: Vec<usize> },
    Winner { player: PlayerId },
    NoWinner,
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::DeckShuffled => f.write_str("Deck shuffled."),
            GameEvent::DieRolled(face) => write!(f, "Die roll: {face}"),
            GameEvent::TurnStarted { player } => write!(f, "Player {player} starts their turn"),
            GameEvent::PlayReversed => f.write_str("Play is reversed"),
            GameEvent::PushedTooFar { player } => write!(f, "Player {player} pushed too far!"),
            GameEvent::Banked { player, color } => {
                write!(f, "Player {player} banks their {color} cards")
            }
            GameEvent::FinalScores(scores) => write!(f, "Scores: {scores:?}"),
            GameEvent::TieBreak { card_counts } => {
                write!(f, "Number of cards: {card_counts:?}")
            }
            GameEvent::Winner { player } => write!(f, "Player {player} wins!"),
            GameEvent::NoWinner => f.write_str("No winner could be determined"),
        }
    }
}

/// Receiver for game events.
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

/// Forwards every event to the `log` facade at info level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn emit(&mut self, event: GameEvent) {
        log::info!("{event}");
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: GameEvent) {}
}

/// Records events in order; handy for tests and replay tooling.
impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: GameEvent) {
        (**self).emit(event);
    }
}
