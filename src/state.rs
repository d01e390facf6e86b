use serde::{Deserialize, Serialize};

use crate::action::PlayerId;
use crate::card::COLOR_COUNT;
use crate::error::GameError;
use crate::player::Player;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 6;

/// Global constants for a running game.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSettings {
    pub num_players: usize,
    pub starting_player: PlayerId,
}

impl GameSettings {
    pub fn new(num_players: usize, starting_player: PlayerId) -> Result<Self, GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
            return Err(GameError::InvalidPlayerCount(num_players));
        }
        if starting_player >= num_players {
            return Err(GameError::InvalidStartingPlayer(starting_player));
        }
        Ok(Self {
            num_players,
            starting_player,
        })
    }
}

/// Status of the entire game.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// Deck exhausted. `winner` is `None` when score and card count both tie.
    Finished { winner: Option<PlayerId> },
}

/// Public snapshot of one player.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerSummary {
    pub id: PlayerId,
    pub name: String,
    pub score: u32,
    pub num_cards: usize,
    pub banked_points: u32,
    pub points_per_color: [u32; COLOR_COUNT],
    pub is_current: bool,
}

impl PlayerSummary {
    pub fn of(id: PlayerId, player: &Player, is_current: bool) -> Self {
        Self {
            id,
            name: player.name().to_string(),
            score: player.sum_cards(),
            num_cards: player.num_cards(),
            banked_points: player.banked_points(),
            points_per_color: player.num_points_per_color(),
            is_current,
        }
    }
}
