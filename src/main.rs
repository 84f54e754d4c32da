use clap::Parser;
use log::info;
use std::io::{self, BufRead};
use std::process::ExitCode;
use sudoku_patterns::{variants, Geometry, GeometryError};

/// Solve sudoku-like puzzles given in the line format.
///
/// Puzzles are read from the arguments, or one per line from stdin.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Puzzle type: classic, anti-knight, anti-king, diagonal4 or square:N
    #[arg(long, default_value = "classic")]
    variant: String,

    /// Stop after this many solutions
    #[arg(long, default_value_t = 2)]
    limit: usize,

    /// Puzzles to solve
    puzzles: Vec<String>,
}

fn geometry(variant: &str) -> Result<Geometry, String> {
    let geometry = match variant {
        "classic" => Ok(variants::classic()),
        "anti-knight" => variants::anti_knight(9, 3, 3),
        "anti-king" => variants::anti_king(9, 3, 3),
        "diagonal4" => Ok(variants::diagonal_4x4()),
        other => match other.strip_prefix("square:").map(str::parse::<usize>) {
            Some(Ok(n)) => variants::square(n),
            _ => return Err(format!("unknown variant '{}'", variant)),
        },
    };
    geometry.map_err(|err: GeometryError| err.to_string())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let geometry = match geometry(&args.variant) {
        Ok(geometry) => geometry,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    info!("{:?}", geometry);

    let puzzles = if args.puzzles.is_empty() {
        match io::stdin().lock().lines().collect::<Result<Vec<_>, _>>() {
            Ok(lines) => lines,
            Err(err) => {
                eprintln!("failed to read stdin: {}", err);
                return ExitCode::FAILURE;
            }
        }
    } else {
        args.puzzles
    };

    let mut status = ExitCode::SUCCESS;
    for line in puzzles.iter().filter(|line| !line.trim().is_empty()) {
        let puzzle = match geometry.parse_grid(line) {
            Ok(puzzle) => puzzle,
            Err(err) => {
                eprintln!("{}: {}", line, err);
                status = ExitCode::FAILURE;
                continue;
            }
        };
        let solutions = geometry.solve_at_most(&puzzle, args.limit);
        println!("{} solution(s) for {}", solutions.len(), line);
        for solution in &solutions {
            println!("{}", solution.to_line());
        }
    }
    status
}
