//! Rubik's Cube Solver
//!
//! Reads a cube as 54 sticker characters, solves it layer by layer and prints
//! the moves. Can also generate scrambles and apply move sequences.

use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use log::{warn, LevelFilter};

use rubik::{moves, Cube, Error, Solution};

/// A solved cube, for scrambling.
const SOLVED: &str = "UUUUUUUUULLLFFFRRRBBBLLLFFFRRRBBBLLLFFFRRRBBBDDDDDDDDD";

/// Solves 3x3x3 Rubik's cubes with a layer-by-layer method.
#[derive(Parser)]
#[command(name = "rubik")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace). RUST_LOG overrides this.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a cube given as 54 stickers (whitespace is ignored).
    Solve {
        cube: String,
        /// Replay the moves on a fresh copy and check the result.
        #[arg(long)]
        verify: bool,
    },
    /// Print a random scramble and the cube it produces.
    Scramble {
        #[arg(short, long, default_value_t = 25)]
        length: usize,
        /// Seed for a reproducible scramble.
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Apply a move sequence such as "R U Ri Ui" to a cube.
    Apply { cube: String, moves: String },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .parse_default_env()
        .init();

    let result = match cli.command {
        Some(Command::Solve { cube, verify }) => run_solve(&cube, verify),
        Some(Command::Scramble { length, seed }) => run_scramble(length, seed),
        Some(Command::Apply { cube, moves }) => run_apply(&cube, &moves),
        None => run_demo(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            warn!("giving up: {e:?}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Solves a cube and prints the report.
fn run_solve(stickers: &str, verify: bool) -> Result<(), Error> {
    let solution = rubik::solve(stickers)?;
    println!("{}", solve_report(&solution));

    if verify {
        if solution.verify() {
            println!("Verified: the moves solve a fresh copy");
        } else {
            eprintln!("Verification failed: replaying the moves did not solve the cube");
        }
    }
    Ok(())
}

/// Prints a scramble and the cube it produces.
fn run_scramble(length: usize, seed: Option<u64>) -> Result<(), Error> {
    let (scramble, cube) = scrambled(length, seed)?;
    println!("Scramble: {}", moves::format(&scramble));
    println!("{cube}");
    println!("{}", cube.flat_str());
    Ok(())
}

/// Applies a move sequence and prints the result.
fn run_apply(stickers: &str, sequence: &str) -> Result<(), Error> {
    let mut cube: Cube = stickers.parse()?;
    cube.sequence(sequence)?;
    println!("{cube}");
    println!("{}", cube.flat_str());
    Ok(())
}

/// Scrambles a solved cube and solves it again.
fn run_demo() -> Result<(), Error> {
    let (scramble, cube) = scrambled(25, None)?;
    println!("Scramble: {}", moves::format(&scramble));
    let solution = rubik::solve_cube(&cube)?;
    println!("{}", solve_report(&solution));
    Ok(())
}

/// Scrambles a solved cube, seeded when `seed` is given.
fn scrambled(length: usize, seed: Option<u64>) -> Result<(Vec<rubik::Move>, Cube), Error> {
    let mut rng = match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    let scramble = moves::scramble(length, &mut rng);
    let mut cube: Cube = SOLVED.parse()?;
    cube.apply_all(&scramble);
    Ok((scramble, cube))
}

/// Formats the starting net, the per-phase move counts and the move list.
fn solve_report(solution: &Solution) -> String {
    let mut lines = vec!["Cube:".to_owned(), solution.start.to_string(), String::new()];
    for (phase, count) in &solution.phases {
        lines.push(format!("{:<32}{count:>4}", phase.to_string()));
    }
    lines.push(String::new());
    lines.push(format!("Solved in {} moves:", solution.moves.len()));
    lines.push(moves::format(&solution.moves));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRAMBLED: &str = "DLURRDFFUBBLDDRBRBLDLRBFRUULFBDDUFBRBBRFUDFLUDLUULFLFR";

    #[test]
    fn test_solve_report_snapshot() {
        let solution = rubik::solve(SCRAMBLED).unwrap();
        insta::assert_snapshot!(solve_report(&solution));
    }

    #[test]
    fn test_seeded_scramble_is_reproducible() {
        let (first, cube) = scrambled(25, Some(3)).unwrap();
        let (second, again) = scrambled(25, Some(3)).unwrap();
        assert_eq!(first, second);
        assert_eq!(cube, again);
        assert_eq!(first.len(), 25);
    }

    #[test]
    fn test_demo_scrambles_solve() {
        for seed in 0..20 {
            let (_, cube) = scrambled(25, Some(seed)).unwrap();
            let solution = rubik::solve_cube(&cube).unwrap();
            assert!(solution.verify());
        }
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::parse_from(["rubik", "-vv", "solve", SCRAMBLED, "--verify"]);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(
            cli.command,
            Some(Command::Solve { verify: true, .. })
        ));

        let cli = Cli::parse_from(["rubik", "scramble", "--seed", "9"]);
        assert!(matches!(
            cli.command,
            Some(Command::Scramble { length: 25, seed: Some(9) })
        ));
    }

    #[test]
    fn test_apply_rejects_unknown_move() {
        assert!(matches!(
            run_apply(SOLVED, "R U x"),
            Err(Error::Lookup(rubik::LookupError::UnknownMove(token))) if token == "x"
        ));
    }
}
