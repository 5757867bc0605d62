use clap::Parser;
use water_sort_solver::config::SolverConfig;
use water_sort_solver::engine::Board;
use water_sort_solver::solver::{search, Termination};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of random boards to evaluate
    #[clap(short, long, default_value_t = 20)]
    boards: usize,

    /// Colors per board
    #[clap(long, default_value_t = 5)]
    colors: usize,

    /// Empty tubes per board
    #[clap(long, default_value_t = 2)]
    empty_tubes: usize,

    /// Seed of the first board; board `i` uses `start_seed + i`
    #[clap(long, default_value_t = 0)]
    start_seed: u64,

    /// Longest solution to search for, in moves
    #[clap(short = 'd', long)]
    max_depth: Option<usize>,

    /// Number of node expansions before giving up
    #[clap(short = 'e', long)]
    max_expansions: Option<usize>,
}

#[derive(Default)]
struct Tally {
    already_solved: usize,
    solved: usize,
    exhausted: usize,
    limit_reached: usize,
    total_moves: usize,
    total_expansions: usize,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run(Args::parse()) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let defaults = SolverConfig::default();
    let config = SolverConfig {
        max_depth: args.max_depth.unwrap_or(defaults.max_depth),
        max_expansions: args.max_expansions.unwrap_or(defaults.max_expansions),
    };
    config.validate()?;

    println!(
        "Evaluating solver on {} boards ({} colors, {} empty tubes)...",
        args.boards, args.colors, args.empty_tubes
    );

    let mut tally = Tally::default();
    for board_idx in 0..args.boards {
        let seed = args.start_seed + board_idx as u64;
        let board = Board::new_random_with_seed(args.colors, args.empty_tubes, seed)?;
        let report = search(&board, &config);

        let outcome = match report.stats.termination {
            Termination::AlreadySolved => {
                tally.already_solved += 1;
                "already solved".to_string()
            }
            Termination::Solved => {
                let moves = report.solution.as_ref().map_or(0, |s| s.len());
                tally.solved += 1;
                tally.total_moves += moves;
                format!("solved in {} moves", moves)
            }
            Termination::Exhausted => {
                tally.exhausted += 1;
                "no solution".to_string()
            }
            Termination::ExpansionLimit => {
                tally.limit_reached += 1;
                "expansion limit".to_string()
            }
        };
        tally.total_expansions += report.stats.nodes_expanded;
        println!(
            "  Board {:<4} (Seed: {:<6}): {:<20} Expanded: {:<8} Visited: {}",
            board_idx, seed, outcome, report.stats.nodes_expanded, report.stats.states_visited
        );
    }

    println!("\n--- Evaluation Complete ---");
    println!("Boards evaluated:   {}", args.boards);
    println!("Solved:             {}", tally.solved);
    println!("Already solved:     {}", tally.already_solved);
    println!("No solution:        {}", tally.exhausted);
    println!("Expansion limit:    {}", tally.limit_reached);
    if tally.solved > 0 {
        println!(
            "Average moves:      {:.2}",
            tally.total_moves as f64 / tally.solved as f64
        );
    }
    if args.boards > 0 {
        println!(
            "Average expansions: {:.2}",
            tally.total_expansions as f64 / args.boards as f64
        );
    }
    Ok(())
}
