//! # Water Sort Solver Library
//!
//! This library provides the pour rules for the water sort puzzle and a
//! Breadth First Search (BFS) solver that finds a shortest sequence of pours
//! within configurable bounds.
//!
//! It is used by three binaries:
//! - `solve`: Reads a board file and prints the moves that solve it.
//! - `play`: Solves a board, then steps through the solution interactively.
//! - `solver_evaluator`: Solves a batch of seeded random boards and reports
//!   how often and how quickly the solver succeeds.
//!
//! ## Modules
//! - `engine`: Colors, tubes, the board (`Board`), moves (`Move`) and the pour
//!   rules (legality, transferred-unit count, solved test).
//! - `solver`: Provides `solve`, `solve_with_config` and `search`.
//! - `playback`: Walks a solution forwards and backwards.
//! - `palette`: Display colors, loadable from JSON.
//! - `config`: Search bounds and application settings, loadable from TOML.
//! - `utils`: Parsing boards from text.
//! - `error`: Error types.

pub mod config;
pub mod engine;
pub mod error;
pub mod palette;
pub mod playback;
pub mod solver;
pub mod utils;
