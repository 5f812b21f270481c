use super::*;
use crate::game_repr::Color;
use std::time::Duration;

// ==================== MOVE SELECTOR TESTS ====================

#[test]
fn test_opening_depth_one() {
    let pos = Position::new();
    let config = AIConfig::default().with_max_depth(1);
    let mut ai = MoveSelector::with_config(config);

    let result = ai.search(&pos, Duration::MAX).unwrap();
    let mv = result.best_move.unwrap();

    let openings: Vec<(usize, usize)> = vec![(2, 3), (3, 2), (4, 5), (5, 4)];
    assert!(openings.contains(&(mv.row(), mv.col())));
    assert_eq!(result.depth, 1);
    assert_eq!(result.score, score(&pos.apply_move(mv).unwrap(), &TOURNAMENT));
}

#[test]
fn test_single_legal_move_returned_immediately() {
    let pos: Position = "BW......
                         ........
                         ........
                         ........
                         ........
                         ........
                         ........
                         ........"
        .parse()
        .unwrap();

    for depth in [1, 6, 30] {
        let mut ai = MoveSelector::with_config(AIConfig::default().with_max_depth(depth));
        let mv = ai.choose_move(&pos, Duration::ZERO).unwrap();

        assert_eq!((mv.row(), mv.col()), (0, 2));
        assert_eq!(ai.last_result().unwrap().nodes_searched, 0);
    }
}

#[test]
fn test_every_strategy_returns_legal_moves() {
    let positions = mid_game_positions(2024, 6);

    for strategy in SearchStrategy::all() {
        let config = AIConfig::new(*strategy, Difficulty::Easy).with_seed(3);
        let mut ai = MoveSelector::with_config(config);

        for pos in &positions {
            let mv = ai.choose_move(pos, Duration::from_secs(30)).unwrap();
            assert!(pos.is_legal(mv), "{} played {mv} in\n{pos}", strategy.display_name());
        }
    }
}

#[test]
fn test_heuristic_changes_leaf_values() {
    let pos = Position::new().apply_move(Move::new(2, 3).unwrap()).unwrap();

    let tournament = MoveSelector::with_config(AIConfig::default().with_max_depth(1))
        .search(&pos, Duration::MAX)
        .unwrap();
    let alpha_beta = MoveSelector::with_config(
        AIConfig::default()
            .with_max_depth(1)
            .with_heuristic(Heuristic::AlphaBeta),
    )
    .search(&pos, Duration::MAX)
    .unwrap();

    let mv = tournament.best_move.unwrap();
    assert_eq!(tournament.score, score(&pos.apply_move(mv).unwrap(), &TOURNAMENT));
    let mv = alpha_beta.best_move.unwrap();
    assert_eq!(alpha_beta.score, score(&pos.apply_move(mv).unwrap(), &ALPHA_BETA));
}

#[test]
fn test_white_score_perspective() {
    let pos = Position::new().apply_move(Move::new(2, 3).unwrap()).unwrap();
    assert_eq!(pos.current(), Color::White);

    let mut ai = MoveSelector::with_config(AIConfig::default().with_max_depth(1));
    let result = ai.search(&pos, Duration::MAX).unwrap();

    // White minimises Black's differential, so it maximises its own.
    let best_for_white = pos
        .available_moves()
        .into_iter()
        .map(|m| evaluate(&pos.apply_move(m).unwrap(), &TOURNAMENT).differential(Color::White))
        .max()
        .unwrap();
    assert_eq!(result.score_for(Color::White), best_for_white);
}
