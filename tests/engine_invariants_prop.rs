//! Property tests for the engine's state transitions.
//!
//! Random seeds and random input sequences drive a game while these hold:
//! - the active piece never leaves the well,
//! - score is always 100 points per cleared row and never decreases,
//! - locked cells only disappear through line clears,
//! - a game that is over never changes again.

use proptest::prelude::*;
use tui_blockfall::core::{GameState, Randomizer, SequenceSource, Shape, TickOutcome};
use tui_blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy)]
enum Step {
    Left,
    Right,
    Rotate,
    Tick,
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        1 => Just(Step::Left),
        1 => Just(Step::Right),
        1 => Just(Step::Rotate),
        // Bias towards gravity so pieces actually land.
        3 => Just(Step::Tick),
    ]
}

fn kind_strategy() -> impl Strategy<Value = PieceKind> {
    (0usize..7).prop_map(|i| PieceKind::ALL[i])
}

fn assert_active_inside(g: &GameState) -> Result<(), TestCaseError> {
    let active = g.active();
    for (dx, dy) in active.minos() {
        let x = active.x + dx;
        let y = active.y + dy;
        prop_assert!((0..BOARD_WIDTH as i8).contains(&x), "x={} out of the well", x);
        prop_assert!(y < BOARD_HEIGHT as i8, "y={} below the floor", y);
        prop_assert!(!g.board().is_occupied(x, y), "overlap at ({}, {})", x, y);
    }
    Ok(())
}

proptest! {
    #[test]
    fn generated_play_respects_core_invariants(
        seed in any::<u32>(),
        use_bag in any::<bool>(),
        steps in prop::collection::vec(step_strategy(), 1..400),
    ) {
        let randomizer = if use_bag { Randomizer::Bag } else { Randomizer::Uniform };
        let mut g = GameState::new(randomizer.into_source(seed));

        for step in steps {
            let score_before = g.score();
            let lines_before = g.lines();
            let filled_before = g.board().filled_count();
            let board_before = g.board().clone();
            let was_over = g.is_game_over();

            match step {
                Step::Left => {
                    g.move_left();
                }
                Step::Right => {
                    g.move_right();
                }
                Step::Rotate => {
                    g.rotate();
                }
                Step::Tick => match g.tick() {
                    TickOutcome::Fell | TickOutcome::Halted => {}
                    TickOutcome::Locked { lines_cleared } => {
                        let expected = filled_before + 4 - 10 * lines_cleared as usize;
                        prop_assert_eq!(g.board().filled_count(), expected);
                        prop_assert_eq!(g.lines(), lines_before + lines_cleared);
                    }
                },
            }

            prop_assert_eq!(g.score(), 100 * g.lines());
            prop_assert!(g.score() >= score_before);
            if g.lines() == lines_before {
                prop_assert!(g.board().filled_count() >= filled_before);
            }

            if was_over {
                prop_assert!(g.is_game_over());
                prop_assert_eq!(g.board(), &board_before);
                prop_assert_eq!(g.score(), score_before);
            } else if !g.is_game_over() {
                assert_active_inside(&g)?;
            }
        }
    }

    #[test]
    fn four_rotations_in_open_space_restore_the_piece(kind in kind_strategy()) {
        let mut g = GameState::new(SequenceSource::repeat(kind));
        // Drop a few rows so every orientation fits.
        for _ in 0..4 {
            prop_assert_eq!(g.tick(), TickOutcome::Fell);
        }
        let before = g.active();

        for _ in 0..4 {
            prop_assert!(g.rotate());
        }
        prop_assert_eq!(g.active(), before);
    }

    #[test]
    fn rotation_preserves_mino_count(kind in kind_strategy(), turns in 0usize..8) {
        let mut shape = Shape::of(kind);
        for _ in 0..turns {
            shape = shape.rotated();
        }
        prop_assert_eq!(shape.minos().len(), 4);
        prop_assert!(shape.rows() as usize <= 4 && shape.cols() as usize <= 4);
    }
}
