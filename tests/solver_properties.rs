use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use water_sort_solver::config::SolverConfig;
use water_sort_solver::engine::{Board, Move};
use water_sort_solver::solver::{search, solve, solve_with_config, Termination};
use water_sort_solver::utils::board_from_str_array;

fn legal_pours(board: &Board) -> Vec<(usize, usize)> {
    let n = board.tube_count();
    (0..n)
        .flat_map(|from| (0..n).map(move |to| (from, to)))
        .filter(|&(from, to)| board.can_pour(from, to))
        .collect()
}

#[test]
fn random_pours_conserve_units_and_capacity() {
    for seed in 0..10u64 {
        let mut board = Board::new_random_with_seed(4, 2, seed).unwrap();
        let counts = board.color_counts();
        let mut rng = SmallRng::seed_from_u64(seed);

        for _ in 0..50 {
            let pours = legal_pours(&board);
            let Some(&(from, to)) = pours.choose(&mut rng) else {
                break;
            };
            let run = board.movable_run(from);
            let room = board.tube(to).unwrap().room(board.capacity());
            let (next, moved) = board.pour(from, to).unwrap();

            assert_eq!(moved, run.min(room));
            assert!(moved >= 1);
            assert_eq!(next.color_counts(), counts);
            assert!(next.tubes().iter().all(|t| t.len() <= next.capacity()));
            board = next;
        }
    }
}

#[test]
fn solutions_replay_to_a_solved_board() {
    let mut solved_count = 0;
    for seed in 0..10u64 {
        let board = Board::new_random_with_seed(3, 2, seed).unwrap();
        let Some(solution) = solve(&board) else {
            continue;
        };
        solved_count += 1;

        let mut current = board.clone();
        for mv in &solution.moves {
            assert!(current.can_pour(mv.from, mv.to), "illegal move {}", mv);
            current = current.apply_move(mv).expect("recorded count should match");
        }
        assert!(current.is_solved());
        assert_eq!(solution.replay(&board), Some(current));
    }
    assert!(solved_count > 0, "expected at least one seeded board to be solvable");
}

#[test]
fn solve_is_deterministic_on_random_boards() {
    for seed in 0..5u64 {
        let board = Board::new_random_with_seed(3, 2, seed).unwrap();
        assert_eq!(solve(&board), solve(&board.clone()));
    }
}

#[test]
fn already_solved_board_gives_empty_solution() {
    let board = board_from_str_array(&["AAAA", ".", "BBBB", "CCCC"], 4).unwrap();
    let solution = solve(&board).unwrap();
    assert!(solution.moves.is_empty());
}

#[test]
fn partial_transfer_fills_destination_exactly() {
    let board = board_from_str_array(&["RRR", "R"], 4).unwrap();
    let (next, moved) = board.pour(0, 1).unwrap();
    assert_eq!(moved, 3);
    assert!(next.tube(0).unwrap().is_empty());
    assert_eq!(next.tube(1).unwrap().len(), 4);

    let board = board_from_str_array(&["BBB", "RB"], 4).unwrap();
    let (next, moved) = board.pour(0, 1).unwrap();
    assert_eq!(moved, 2);
    assert_eq!(next.tube(0).unwrap().len(), 1);
    assert_eq!(next.movable_run(0), 1);
}

#[test]
fn singleton_colors_without_spare_tubes_report_no_solution() {
    let board = board_from_str_array(&["A", "B", "C"], 4).unwrap();
    let config = SolverConfig {
        max_depth: 10,
        max_expansions: 100,
    };
    let report = search(&board, &config);
    assert!(report.solution.is_none());
    assert!(report.stats.nodes_expanded <= config.max_expansions);
    assert_eq!(report.stats.termination, Termination::Exhausted);
}

#[test]
fn unsolvable_board_stops_at_expansion_limit() {
    // Six units of each color cannot be split into full tubes of four.
    let board = board_from_str_array(&["AABB", "ABBA", "BAAB", "..", "."], 4).unwrap();
    let config = SolverConfig {
        max_depth: 100,
        max_expansions: 50,
    };
    let report = search(&board, &config);
    assert!(report.solution.is_none());
    assert_eq!(report.stats.nodes_expanded, 50);
    assert_eq!(report.stats.termination, Termination::ExpansionLimit);
    assert!(solve_with_config(&board, &config).is_none());
}

#[test]
fn first_move_is_lowest_index_pair() {
    let board = board_from_str_array(&["AAB", "B", "AA", "BB"], 4).unwrap();
    let solution = solve(&board).unwrap();
    let first = solution.moves[0];
    assert_eq!(
        first,
        Move {
            from: 0,
            to: 1,
            count: 1
        }
    );
}
