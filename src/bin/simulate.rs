use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};

use push::{DEFAULT_SEED, GameConfig, PlayerConfig};
use push::{describe_turn, render_players, render_standings};

#[derive(Parser, Debug)]
#[command(name = "simulate", about = "Play one game of Push and print every turn.")]
struct Args {
    /// JSON table description; overrides the per-player flags below
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Number of players (2-6)
    #[arg(short = 'p', long = "players", default_value_t = 4)]
    players: usize,

    /// Seed for shuffling, draw counts and die rolls
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Seat that takes the first turn
    #[arg(long = "starting-player", default_value_t = 0)]
    starting_player: usize,

    /// Fewest cards a dealer draws per turn
    #[arg(long = "draw-min", default_value_t = PlayerConfig::default().card_draw_min)]
    draw_min: usize,

    /// Most cards a dealer draws per turn
    #[arg(long = "draw-limit", default_value_t = PlayerConfig::default().card_draw_limit)]
    draw_limit: usize,

    /// Unbanked points in one color needed before a player banks
    #[arg(long = "bank-threshold", default_value_t = PlayerConfig::default().bank_threshold)]
    bank_threshold: u32,

    /// Print the table after every turn
    #[arg(long = "show-table", action = ArgAction::SetTrue)]
    show_table: bool,

    /// Log game events at info level (RUST_LOG still takes precedence)
    #[arg(short = 'v', long = "verbose", action = ArgAction::SetTrue)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = match &args.config {
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
            let mut config = GameConfig::uniform(args.players, &template, args.seed);
            config.starting_player = args.starting_player;
            config
        }
    };

    let mut game = config.builder()?.build();
    println!(
        "Starting Push with {} players (seed {:#x}).\n",
        config.players.len(),
        config.seed
    );

    while let Some(report) = game.play_turn() {
        println!("{}", describe_turn(&report));
        if args.show_table {
            println!("{}", render_players(&game.player_summaries()));
        }
    }

    let standings = game.end_game();
    println!();
    print!("{}", render_players(&game.player_summaries()));
    print!("{}", render_standings(&standings));
    Ok(())
}
