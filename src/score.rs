//! Winner selection for a finished game.
//!
//! Highest card total wins. When several players share that total, the one
//! holding strictly the most standard cards wins; if that is shared too, the
//! game has no winner.

use serde::{Deserialize, Serialize};

use crate::action::PlayerId;

/// Final per-player totals and the resulting winner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    pub scores: Vec<u32>,
    pub card_counts: Vec<usize>,
    pub winner: Option<PlayerId>,
}

impl Standings {
    pub fn new(scores: Vec<u32>, card_counts: Vec<usize>) -> Self {
        let winner = decide_winner(&scores, &card_counts);
        Self {
            scores,
            card_counts,
            winner,
        }
    }

    /// Players sharing the top score, in seat order.
    pub fn leaders(&self) -> Vec<PlayerId> {
        leaders(&self.scores)
    }

    pub fn is_tied(&self) -> bool {
        self.leaders().len() > 1
    }

    pub fn winning_score(&self) -> Option<u32> {
        self.winner.map(|winner| self.scores[winner])
    }
}

fn leaders(scores: &[u32]) -> Vec<PlayerId> {
    let Some(&best) = scores.iter().max() else {
        return Vec::new();
    };
    scores
        .iter()
        .enumerate()
        .filter(|(_, score)| **score == best)
        .map(|(id, _)| id)
        .collect()
}

/// Picks the winner from parallel score and card-count lists.
pub fn decide_winner(scores: &[u32], card_counts: &[usize]) -> Option<PlayerId> {
    debug_assert_eq!(scores.len(), card_counts.len());
    let leaders = leaders(scores);
    match leaders.as_slice() {
        [] => None,
        [single] => Some(*single),
        tied => {
            let most_cards = tied.iter().map(|&id| card_counts[id]).max()?;
            let mut with_most = tied.iter().filter(|&&id| card_counts[id] == most_cards);
            match (with_most.next(), with_most.next()) {
                (Some(&id), None) => Some(id),
                _ => None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_top_score_wins() {
        assert_eq!(decide_winner(&[10, 25, 7], &[9, 2, 9]), Some(1));
    }

    #[test]
    fn shared_score_falls_back_to_card_count() {
        // Players 0 and 2 both hold 20 points; player 2 has more cards.
        assert_eq!(decide_winner(&[20, 11, 20], &[5, 9, 6]), Some(2));
    }

    #[test]
    fn card_count_of_non_leaders_is_ignored() {
        assert_eq!(decide_winner(&[20, 11, 20], &[5, 99, 4]), Some(0));
    }

    #[test]
    fn full_tie_has_no_winner() {
        assert_eq!(decide_winner(&[12, 12], &[4, 4]), None);
        assert_eq!(decide_winner(&[0, 0, 0], &[0, 0, 0]), None);
    }

    #[test]
    fn standings_report_tie() {
        let standings = Standings::new(vec![8, 8, 3], vec![3, 2, 1]);
        assert!(standings.is_tied());
        assert_eq!(standings.leaders(), vec![0, 1]);
        assert_eq!(standings.winner, Some(0));
        assert_eq!(standings.winning_score(), Some(8));
    }
}
