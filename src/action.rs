use serde::{Deserialize, Serialize};

use crate::card::Color;

/// Zero-based index of a player within the game.
pub type PlayerId = usize;

/// What the active player did with their turn.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum TurnAction {
    /// Locked one color instead of dealing.
    Bank { color: Color },
    /// Dealt piles and handed them out.
    Deal {
        is_reversed: bool,
        pushed_too_far: bool,
        /// Receivers in pickup order.
        recipients: Vec<PlayerId>,
        /// Cards that ended up in the piles.
        cards_dealt: usize,
    },
}

/// Summary of a single turn.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TurnReport {
    pub turn: usize,
    pub player: PlayerId,
    pub action: TurnAction,
    /// Turn order after the turn, next player first.
    pub turn_order: Vec<PlayerId>,
    pub cards_left: usize,
}

impl TurnReport {
    pub fn recipients(&self) -> &[PlayerId] {
        match &self.action {
            TurnAction::Deal { recipients, .. } => recipients.as_slice(),
            TurnAction::Bank { .. } => &[],
        }
    }

    pub fn is_reversed(&self) -> bool {
        matches!(self.action, TurnAction::Deal { is_reversed: true, .. })
    }

    pub fn pushed_too_far(&self) -> bool {
        matches!(
            self.action,
            TurnAction::Deal {
                pushed_too_far: true,
                ..
            }
        )
    }
}
