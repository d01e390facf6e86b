use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use rand::SeedableRng;
use rand::rngs::StdRng;

use push::{DEFAULT_SEED, GameConfig, NullSink, PlayerConfig};

#[derive(Parser, Debug)]
#[command(name = "winrate", about = "Run many seeded games and report per-seat win rates.")]
struct Args {
    /// Number of games to simulate
    #[arg(short = 'g', long = "games", default_value_t = 1000)]
    games: usize,

    /// Base RNG seed (per-game seeds are derived deterministically)
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// JSON table description; overrides the per-player flags below
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Number of players (2-6)
    #[arg(short = 'p', long = "players", default_value_t = 4)]
    players: usize,

    #[arg(long = "draw-min", default_value_t = PlayerConfig::default().card_draw_min)]
    draw_min: usize,

    #[arg(long = "draw-limit", default_value_t = PlayerConfig::default().card_draw_limit)]
    draw_limit: usize,

    #[arg(long = "bank-threshold", default_value_t = PlayerConfig::default().bank_threshold)]
    bank_threshold: u32,

    /// Rotate the starting seat every game
    #[arg(long = "rotate-start", action = ArgAction::SetTrue)]
    rotate_start: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    if args.games == 0 {
        return Err("games must be positive".into());
    }
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|err| format!("cannot read {}: {err}", path.display()))?;
            serde_json::from_str::<GameConfig>(&text)?
        }
        None => {
            let template = PlayerConfig {
                name: String::new(),
                card_draw_limit: args.draw_limit,
                card_draw_min: args.draw_min,
                bank_threshold: args.bank_threshold,
            };
            GameConfig::uniform(args.players, &template, args.seed)
        }
    };
    let seats = config.players.len();
    let first_seat = config.starting_player;

    let mut wins = vec![0usize; seats];
    let mut winning_points = 0u64;
    let mut turns = 0usize;
    let mut undecided = 0usize;

    for game_idx in 0..args.games {
        if args.rotate_start {
            config.starting_player = (first_seat + game_idx) % seats;
        }
        let rng = StdRng::seed_from_u64(mix_seed(args.seed, game_idx as u64));
        let mut game = config.builder()?.build_with(rng, NullSink);
        while game.play_turn().is_some() {}
        turns += game.turns_played();
        let standings = game.end_game();
        match standings.winner {
            Some(winner) => {
                wins[winner] += 1;
                winning_points += u64::from(standings.scores[winner]);
            }
            None => undecided += 1,
        }
        log::debug!("game {game_idx}: {:?}", standings);
    }

    let decided = args.games - undecided;
    println!("Win rates over {} game(s):", args.games);
    for (seat, count) in wins.iter().enumerate() {
        let name = &config.players[seat].name;
        let rate = *count as f64 / args.games as f64;
        println!("  seat {seat} {name:<12}  {count}/{}  ({:.2}%)", args.games, rate * 100.0);
    }
    if decided > 0 {
        println!(
            "\nAverage winning score: {:.2}",
            winning_points as f64 / decided as f64
        );
    }
    println!("Average turns per game: {:.2}", turns as f64 / args.games as f64);
    if undecided > 0 {
        println!("Note: {undecided} game(s) ended without a winner (score and card count tied).");
    }
    Ok(())
}

fn mix_seed(base: u64, game: u64) -> u64 {
    // xorshift-style mix so neighbouring games do not share streams.
    let mut z = base ^ game.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z ^= z >> 12;
    z ^= z << 25;
    z ^= z >> 27;
    z
}
