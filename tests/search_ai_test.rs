//! End-to-end tests for the searching players
//!
//! This test suite evaluates:
//! - Move legality over whole random games
//! - Solved endgames against random play
//! - Behaviour with zero or one legal move
//! - Respect of the per-move time budget
//! - Depth reached as a function of time

use othello_engine::agent::ai::{
    evaluate, iterative_deepening_search, AIConfig, Algorithm, Difficulty, Heuristic, MoveSelector,
    SearchError, SearchLimits, SearchStrategy, TimeControl, WeightTable, MAX_SEARCH_DEPTH,
};
use othello_engine::agent::player::Player;
use othello_engine::game_repr::{Color, Move, Position};
use std::time::{Duration, Instant};

fn parse(board: &str) -> Position {
    board.parse().unwrap()
}

/// Plays `selector` against a seeded random opponent and checks every move
/// the selector makes.
fn play_against_random(mut selector: MoveSelector, selector_color: Color, seed: u64) -> Position {
    let mut random = MoveSelector::random(Some(seed));
    let mut pos = Position::new();

    while !pos.is_terminal() {
        let mv = if pos.current() == selector_color {
            let mv = selector.choose_move(&pos, Duration::from_secs(30)).unwrap();
            assert!(pos.available_moves().contains(&mv), "illegal {mv} in\n{pos}");
            mv
        } else {
            random.make_move(&pos, Duration::MAX).unwrap()
        };
        pos = pos.apply_move(mv).unwrap();
    }
    pos
}

#[test]
fn test_alpha_beta_moves_are_legal_for_whole_games() {
    for seed in 0..3 {
        let selector = MoveSelector::with_difficulty(Difficulty::Easy);
        let end = play_against_random(selector, Color::Black, seed);
        assert!(end.count(Color::Black) + end.count(Color::White) <= 64);
    }
}

#[test]
fn test_parallel_and_minimax_moves_are_legal() {
    let parallel = MoveSelector::with_config(AIConfig::new(SearchStrategy::ParallelAlphaBeta, Difficulty::Easy));
    play_against_random(parallel, Color::White, 10);

    let minimax = MoveSelector::with_config(AIConfig::new(SearchStrategy::Minimax, Difficulty::Easy));
    play_against_random(minimax, Color::Black, 11);
}

/// Random play from the opening until at most `empties` cells are left.
fn random_endgame(seed: u64, empties: u32) -> Position {
    let mut random = MoveSelector::random(Some(seed));
    let mut pos = Position::new();
    while pos.empty_count() > empties && !pos.is_terminal() {
        let mv = random.choose_move(&pos, Duration::MAX).unwrap();
        pos = pos.apply_move(mv).unwrap();
    }
    pos
}

#[test]
fn test_solved_endgame_never_finishes_below_its_value() {
    // With no positional weights the evaluation is the disc differential.
    let discs = WeightTable::new([[0; 8]; 8]);
    let mut solved = 0;

    for seed in 0..4 {
        let start = random_endgame(200 + seed, 8);
        if start.is_terminal() {
            continue;
        }
        let solver_color = start.current();

        let value = iterative_deepening_search(
            &start,
            &discs,
            SearchLimits::depth(MAX_SEARCH_DEPTH),
            Algorithm::AlphaBeta,
        );
        assert!(value.completed);
        assert!(u32::from(value.depth) <= start.empty_count() + 1);

        let config = AIConfig::default()
            .with_heuristic(Heuristic::Custom(discs))
            .with_time_control(TimeControl::fixed(Duration::from_secs(30)));
        let mut solver = MoveSelector::with_config(config);
        let mut random = MoveSelector::random(Some(seed));
        let mut pos = start;

        while !pos.is_terminal() {
            let mv = if pos.current() == solver_color {
                solver.choose_move(&pos, Duration::MAX).unwrap()
            } else {
                random.make_move(&pos, Duration::MAX).unwrap()
            };
            pos = pos.apply_move(mv).unwrap();
        }

        let outcome = evaluate(&pos, &discs).differential(solver_color);
        assert!(
            outcome >= value.score_for(solver_color),
            "seed {seed}: finished {outcome}, solved value {}\n{start}",
            value.score_for(solver_color)
        );
        solved += 1;
    }

    assert!(solved > 0, "every random game ended before the endgame");
}

#[test]
fn test_no_legal_move_is_reported() {
    let pos = parse(
        "BBBBBBBB
         BBBBBBBB
         BBBBBBBB
         BBBBBBBB
         WWWWWWWW
         WWWWWWWW
         WWWWWWWW
         WWWWWWWW",
    );
    assert!(pos.is_terminal());

    for strategy in SearchStrategy::all() {
        let mut selector = MoveSelector::with_config(AIConfig::new(*strategy, Difficulty::Easy));
        assert_eq!(selector.choose_move(&pos, Duration::MAX), Err(SearchError::NoLegalMove));
    }
}

#[test]
fn test_single_legal_move_ignores_clock() {
    // White to move; its only legal move is (7, 7).
    let pos = parse(
        "........
         ........
         ........
         ........
         ........
         ........
         ........
         .....WB.
         white",
    );
    assert_eq!(pos.available_moves().as_slice(), &[Move::new(7, 7).unwrap()]);

    let mut selector = MoveSelector::with_difficulty(Difficulty::Tournament);
    let started = Instant::now();
    let mv = selector.choose_move(&pos, Duration::ZERO).unwrap();

    assert_eq!(mv, Move::new(7, 7).unwrap());
    assert!(started.elapsed() < Duration::from_millis(50));
}

#[test]
fn test_choose_move_respects_budget() {
    let per_move = Duration::from_millis(150);
    let config = AIConfig::default().with_time_control(TimeControl::fixed(per_move));
    let mut selector = MoveSelector::with_config(config);

    let pos = Position::new()
        .apply_move(Move::new(2, 3).unwrap())
        .unwrap()
        .apply_move(Move::new(2, 2).unwrap())
        .unwrap();

    let started = Instant::now();
    let mv = selector.choose_move(&pos, Duration::from_secs(600)).unwrap();
    let elapsed = started.elapsed();

    assert!(pos.is_legal(mv));
    // Soft limit is 4/3 of the hard one; leave room for the last leaf and scheduling.
    assert!(elapsed < per_move.mul_f64(4.0 / 3.0) + Duration::from_millis(150), "took {elapsed:?}");
}

#[test]
fn test_more_time_never_searches_shallower() {
    let pos = Position::new()
        .apply_move(Move::new(2, 3).unwrap())
        .unwrap();

    let depth_with = |ms: u64| {
        let config = AIConfig::default().with_time_control(TimeControl::fixed(Duration::from_millis(ms)));
        let mut selector = MoveSelector::with_config(config);
        selector.search(&pos, Duration::from_secs(600)).unwrap().depth
    };

    let short = depth_with(10);
    let long = depth_with(400);
    assert!(long >= short, "400ms reached depth {long}, 10ms reached depth {short}");
}
