use battleship_proba::{autoplay, AiPlayer, Board, LogisticScorer, PolicyConfig};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [games]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: usize = match args.get(2) {
        Some(n) => n.parse()?,
        None => 1,
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut reports = Vec::with_capacity(games);
    for _ in 0..games {
        let mut board = Board::new();
        board
            .place_fleet_randomly(&mut rng)
            .map_err(|e| anyhow::anyhow!(e))?;
        let mut ai = AiPlayer::with_policy(LogisticScorer::default(), PolicyConfig::autoplay());
        let report = autoplay(&mut board, &mut ai, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
        reports.push(report);
    }

    let moves: Vec<usize> = reports.iter().map(|r| r.moves).collect();
    let mean = if games == 0 {
        0.0
    } else {
        moves.iter().sum::<usize>() as f64 / games as f64
    };
    let result = json!({
        "seed": seed,
        "games": games,
        "mean_moves": mean,
        "min_moves": moves.iter().min(),
        "max_moves": moves.iter().max(),
        "reports": reports,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
