use clap::Parser;
use std::path::PathBuf;
use water_sort_solver::config::AppConfig;
use water_sort_solver::palette::Palette;
use water_sort_solver::solver::{search, Termination};
use water_sort_solver::utils::read_board_file;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the board file (one tube per line, bottom unit first)
    board_file: PathBuf,

    /// Longest solution to search for, in moves
    #[clap(short = 'd', long)]
    max_depth: Option<usize>,

    /// Number of node expansions before giving up
    #[clap(short = 'e', long)]
    max_expansions: Option<usize>,

    /// TOML configuration file
    #[clap(short, long, default_value = "water_sort.toml")]
    config: PathBuf,

    /// Palette JSON file for colored output
    #[clap(short, long)]
    palette: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run(Args::parse()) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::load_or_default(&args.config)?;
    if let Some(depth) = args.max_depth {
        config.solver.max_depth = depth;
    }
    if let Some(expansions) = args.max_expansions {
        config.solver.max_expansions = expansions;
    }
    config.validate()?;

    let palette = args
        .palette
        .as_deref()
        .or(config.palette.as_deref())
        .map(Palette::load_or_default)
        .unwrap_or_default();

    let board = read_board_file(&args.board_file, config.tube_capacity)?;
    println!("Loaded board from {}\n", args.board_file.display());
    println!("Initial board state:\n{}\n", board.to_string_with_palette(&palette, None));
    println!(
        "Searching with depth limit {} and expansion limit {}...\n",
        config.solver.max_depth, config.solver.max_expansions
    );

    let report = search(&board, &config.solver);
    match report.solution {
        Some(solution) if solution.is_empty() => {
            println!("The board is already solved.");
        }
        Some(solution) => {
            println!("Solution found:\n");
            println!("Moves ({}):", solution.len());
            for (i, mv) in solution.moves.iter().enumerate() {
                println!("  Move {}: {}", i + 1, mv);
            }
            println!("Nodes expanded: {}\n", solution.nodes_expanded);
            if let Some(final_board) = solution.replay(&board) {
                println!(
                    "Final board state:\n{}\n",
                    final_board.to_string_with_palette(&palette, None)
                );
            }
        }
        None => {
            let reason = match report.stats.termination {
                Termination::ExpansionLimit => "expansion limit reached",
                _ => "search space exhausted",
            };
            println!(
                "No solution found ({}, {} nodes expanded).",
                reason, report.stats.nodes_expanded
            );
        }
    }
    Ok(())
}
