use std::fmt::Write;

use crate::action::{TurnAction, TurnReport};
use crate::card::Color;
use crate::score::Standings;
use crate::state::PlayerSummary;

/// Customize table rendering for CLI output.
#[derive(Clone, Copy, Debug)]
pub struct VisualOptions {
    pub show_color_points: bool,
    pub show_banked: bool,
}

impl Default for VisualOptions {
    fn default() -> Self {
        Self {
            show_color_points: true,
            show_banked: true,
        }
    }
}

pub fn describe_turn(report: &TurnReport) -> String {
    let mut out = format!("Turn {}: Player {} ", report.turn, report.player);
    match &report.action {
        TurnAction::Bank { color } => {
            let _ = write!(out, "banks {color}");
        }
        TurnAction::Deal {
            is_reversed,
            pushed_too_far,
            recipients,
            cards_dealt,
        } => {
            let _ = write!(out, "deals {cards_dealt} card(s) to players {recipients:?}");
            if *is_reversed {
                out.push_str(", play reversed");
            }
            if *pushed_too_far {
                out.push_str(", pushed too far");
            }
        }
    }
    let _ = write!(
        out,
        " | next order {:?}, {} card(s) left",
        report.turn_order, report.cards_left
    );
    out
}

pub fn render_players(players: &[PlayerSummary]) -> String {
    render_players_with_options(players, VisualOptions::default())
}

pub fn render_players_with_options(players: &[PlayerSummary], options: VisualOptions) -> String {
    let mut out = String::new();
    for player in players {
        let marker = if player.is_current { "*" } else { " " };
        let _ = write!(
            out,
            "{marker} Player {} ({}): score {} from {} card(s)",
            player.id, player.name, player.score, player.num_cards
        );
        if options.show_banked {
            let _ = write!(out, ", banked {}", player.banked_points);
        }
        out.push('\n');
        if options.show_color_points {
            let breakdown: Vec<String> = Color::ALL
                .iter()
                .map(|color| format!("{color}={}", player.points_per_color[color.index()]))
                .collect();
            let _ = writeln!(out, "    unbanked: {}", breakdown.join(" "));
        }
    }
    out
}

pub fn render_standings(standings: &Standings) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Scores: {:?}", standings.scores);
    if standings.is_tied() {
        let _ = writeln!(out, "Number of cards: {:?}", standings.card_counts);
    }
    match standings.winner {
        Some(winner) => {
            let _ = writeln!(out, "Winner: Player {winner}");
        }
        None => out.push_str("No winner: score and card count both tied\n"),
    }
    out
}
