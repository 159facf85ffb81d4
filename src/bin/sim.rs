use clap::Parser;
use fleetgrid::{init_logging, init_logging_at, parse_level, AiPlayer, Board, Player, ShotOutcome, DEFAULT_BOARD_SIZE};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

/// Play two automated players against each other and print a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    rows: usize,
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    cols: usize,
    /// Ship lengths, comma separated.
    #[arg(long, value_delimiter = ',', default_values_t = [2usize, 3, 4, 5])]
    fleet: Vec<usize>,
    /// Log level; overrides FLEETGRID_LOG.
    #[arg(long)]
    log_level: Option<String>,
}

struct Side {
    player: AiPlayer,
    board: Board,
    rng: SmallRng,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.log_level.as_deref() {
        Some(level) => init_logging_at(parse_level(Some(level))),
        None => init_logging(),
    }

    let mut seed_rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_rng(&mut rand::rng()),
    };
    let board = Board::try_new(cli.rows, cli.cols)?;
    let mut sides = [0, 1].map(|_| Side {
        player: AiPlayer::new(),
        board: board.clone(),
        rng: SmallRng::from_rng(&mut seed_rng),
    });
    for side in sides.iter_mut() {
        side.player
            .place_ships(&mut side.rng, &mut side.board, &cli.fleet)?;
    }

    let fleet_size = cli.fleet.iter().filter(|&&l| l > 0).count();
    let mut winner = None;
    let mut turn = 0usize;
    let max_shots = 2 * cli.rows * cli.cols;
    for _ in 0..max_shots {
        let (shooter, target) = if turn == 0 {
            let (a, b) = sides.split_at_mut(1);
            (&mut a[0], &mut b[0])
        } else {
            let (a, b) = sides.split_at_mut(1);
            (&mut b[0], &mut a[0])
        };
        let Some(coord) = shooter.player.select_target(&mut shooter.rng, &target.board) else {
            break;
        };
        let result = target.board.fire(coord.0, coord.1);
        shooter.player.handle_shot_result(coord, result);
        if shooter.player.sunk() == fleet_size {
            winner = Some(turn);
            break;
        }
        if result == ShotOutcome::Miss {
            turn = 1 - turn;
        }
    }

    let result = json!({
        "player1": {"shots": sides[0].player.shots(), "sunk": sides[0].player.sunk()},
        "player2": {"shots": sides[1].player.shots(), "sunk": sides[1].player.sunk()},
        "winner": winner.map(|w| format!("player{}", w + 1)),
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
