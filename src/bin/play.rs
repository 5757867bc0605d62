use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use water_sort_solver::config::AppConfig;
use water_sort_solver::engine::Board;
use water_sort_solver::palette::Palette;
use water_sort_solver::playback::Playback;
use water_sort_solver::solver::solve_with_config;
use water_sort_solver::utils::read_board_file;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the board file. A seeded random board is used when omitted.
    board_file: Option<PathBuf>,

    /// Number of colors for a random board
    #[clap(long, default_value_t = 4)]
    colors: usize,

    /// Number of empty tubes for a random board
    #[clap(long, default_value_t = 2)]
    empty_tubes: usize,

    /// Seed for a random board
    #[clap(long, default_value_t = 514514)]
    seed: u64,

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
    let config = AppConfig::load_or_default(&args.config)?;
    let palette = args
        .palette
        .as_deref()
        .or(config.palette.as_deref())
        .map(Palette::load_or_default)
        .unwrap_or_default();

    let board = match &args.board_file {
        Some(path) => read_board_file(path, config.tube_capacity)?,
        None => Board::new_random_with_capacity(
            args.colors,
            args.empty_tubes,
            config.tube_capacity,
            args.seed,
        )?,
    };

    println!("Welcome to Water Sort!");
    println!("{}\n", board.to_string_with_palette(&palette, None));
    println!("Solving...");

    let Some(solution) = solve_with_config(&board, &config.solver) else {
        println!("No solution found. Try a different puzzle.");
        return Ok(());
    };
    if solution.is_empty() {
        println!("The board is already solved.");
        return Ok(());
    }
    println!("Solution found! {} steps.", solution.len());

    let mut playback = Playback::from_solution(board, &solution);
    let mut last_move = None;

    loop {
        println!("---------------------");
        println!("Step: {} / {}", playback.current_step(), playback.total_steps());
        println!(
            "{}",
            playback.board().to_string_with_palette(&palette, last_move.as_ref())
        );
        if let Some(mv) = playback.next_move() {
            println!("Next: {}", mv);
        } else {
            println!("🎉 SOLVED! 🎉");
        }

        print!("Enter 'n' for next, 'p' for previous, 'r' to restart, 'q' to quit: ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }

        match input.trim() {
            "n" | "" => match playback.step_forward()? {
                Some(mv) => last_move = Some(mv),
                None => println!("Already at the last step."),
            },
            "p" => match playback.step_back() {
                Some(mv) => {
                    println!("Undid {}", mv);
                    last_move = None;
                }
                None => println!("Already at the first step."),
            },
            "r" => {
                playback.reset();
                last_move = None;
            }
            "q" => {
                println!("Goodbye!");
                break;
            }
            other => println!("Invalid input '{}'. Use 'n', 'p', 'r' or 'q'.", other),
        }
    }
    Ok(())
}
