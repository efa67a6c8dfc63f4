#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_proba::{
    autoplay, init_logging,
    render::{coord_label, revealed_view, score_table},
    AiPlayer, Board, CliPlayer, FireResult, Game, GameOptions, GameStatus, LogisticScorer,
    MoveMode, PolicyConfig, Turn,
};

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the AI in the terminal.
    Play {
        #[arg(long, default_value = "PLAYER", help = "In-game name shown in reports")]
        name: String,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "JSON file overriding the targeting policy thresholds")]
        policy: Option<PathBuf>,
        #[arg(long, help = "A hit grants the shooter another shot")]
        chain_hits: bool,
        #[arg(long, help = "Print the AI's score table after each of its shots")]
        show_scores: bool,
    },
    /// Let the AI sink randomly placed fleets on its own.
    Autoplay {
        #[arg(long, default_value_t = 1)]
        games: usize,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "JSON file overriding the targeting policy thresholds")]
        policy: Option<PathBuf>,
        #[arg(long, help = "Print the final board and score table of each game")]
        show_board: bool,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            name,
            seed,
            policy,
            chain_hits,
            show_scores,
        } => {
            let policy = load_policy(policy.as_deref(), PolicyConfig::default())?;
            let mut rng = make_rng(seed);
            println!("Welcome to Battleship, {}!", name);

            let human = CliPlayer::new(name);
            let ai = AiPlayer::with_policy(LogisticScorer::default(), policy);
            let options = GameOptions {
                chain_on_hit: chain_hits,
            };
            let mut game = Game::new(Box::new(human), Box::new(ai), options);
            game.setup(&mut rng)?;

            let status = game.run(&mut rng, |game, turn| report_turn(game, turn, show_scores))?;

            println!("\n╔══════════════════════════════════════════════════════════╗");
            println!("║                   GAME OVER                              ║");
            println!("╚══════════════════════════════════════════════════════════╝\n");
            match status {
                GameStatus::Won => println!(
                    "Impossible, you have defeated the AI overlord in {} moves!",
                    game.shots(0)
                ),
                GameStatus::Lost => {
                    println!(
                        "You are defeated by my all-too-powerful AI in {} moves!",
                        game.shots(1)
                    );
                    println!("This was the AI's board:");
                    print!("{}", revealed_view(game.board(1)));
                }
                GameStatus::InProgress => {}
            }
        }
        Commands::Autoplay {
            games,
            seed,
            policy,
            show_board,
        } => {
            let policy = load_policy(policy.as_deref(), PolicyConfig::autoplay())?;
            let mut rng = make_rng(seed);
            let mut total_moves = 0;
            for game_no in 1..=games {
                let mut board = Board::new();
                board.place_fleet_randomly(&mut rng)?;
                let mut ai = AiPlayer::with_policy(LogisticScorer::default(), policy);
                let report = autoplay(&mut board, &mut ai, &mut rng)?;
                total_moves += report.moves;
                println!(
                    "Game #{}: finished in {} moves ({} edge, {} exploratory), mean best proba {:.3}",
                    game_no,
                    report.moves,
                    report.edge_moves,
                    report.exploratory_moves,
                    report.mean_best_proba
                );
                if show_board {
                    print!("{}", revealed_view(&board));
                    print!("{}", score_table(&board));
                }
            }
            if games > 0 {
                println!(
                    "Average: {:.1} moves over {} games",
                    total_moves as f64 / games as f64,
                    games
                );
            }
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

/// Policy from `path`, or `preset` when no file is given. Fields missing from
/// the file take the interactive defaults.
#[cfg(feature = "std")]
fn load_policy(path: Option<&Path>, preset: PolicyConfig) -> anyhow::Result<PolicyConfig> {
    let Some(path) = path else {
        return Ok(preset);
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading policy file {}", path.display()))?;
    let policy: PolicyConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing policy file {}", path.display()))?;
    policy.validate()?;
    Ok(policy)
}

#[cfg(feature = "std")]
fn report_turn(game: &Game, turn: &Turn, show_scores: bool) {
    // Player 1 is the AI; the human's own shots are reported by CliPlayer.
    if turn.shooter != 1 {
        return;
    }
    let label = coord_label(turn.row, turn.col);
    let outcome = match turn.result {
        FireResult::Hit => "Target Hit!".to_string(),
        FireResult::Miss => "Target Missed!".to_string(),
        FireResult::Sunk(name) => format!("Target Hit! Your {} was sunk!", name),
    };
    match turn.decision {
        Some(mv) if mv.mode != MoveMode::Best => println!(
            "The AI entered a random {} move and played at {}. {}",
            match mv.mode {
                MoveMode::Edge => "edge",
                _ => "exploratory",
            },
            label,
            outcome
        ),
        Some(mv) => println!(
            "The AI played at {} with best proba={:.3}. {}",
            label, mv.proba, outcome
        ),
        None => println!("The AI played at {}. {}", label, outcome),
    }
    println!("\nYour board:");
    print!("{}", revealed_view(game.board(0)));
    if show_scores {
        print!("{}", score_table(game.board(0)));
    }
}
