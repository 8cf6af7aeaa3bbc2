//! Property tests for the simulation invariants

use std::collections::HashSet;

use proptest::prelude::*;
use torus_snake::sim::{Board, Direction, TickEvent, wrap};
use torus_snake::{GameSession, ResetDirection, SimError};

proptest! {
    #[test]
    fn wrap_stays_in_bounds(coordinate in -100_000i32..100_000, size in 1i32..1000) {
        let w = wrap(coordinate, size);
        prop_assert!((0..size).contains(&w));
        prop_assert_eq!((w - coordinate).rem_euclid(size), 0);
    }

    #[test]
    fn invariants_hold_every_tick(
        seed in any::<u64>(),
        inputs in proptest::collection::vec(proptest::option::of(0usize..4), 1..300),
    ) {
        let board = Board::new(9, 7);
        let mut session = GameSession::with_seed(board, seed, ResetDirection::Random).unwrap();

        for input in inputs {
            if let Some(i) = input {
                session.request_direction(Direction::ALL[i]);
            }
            let prev_head = session.actor().head();
            let prev_len = session.length();

            let event = match session.tick() {
                Ok(event) => event,
                Err(SimError::OutOfSpace { .. }) => break,
                Err(e) => return Err(TestCaseError::fail(e.to_string())),
            };

            let actor = session.actor();
            let cells: HashSet<_> = actor.body().iter().copied().collect();
            prop_assert_eq!(cells.len(), actor.len());
            prop_assert!(!cells.contains(&session.target().cell));
            prop_assert!(board.contains(session.target().cell));
            prop_assert!(actor.len() <= actor.target_length());

            if event == TickEvent::Collided {
                prop_assert_eq!(actor.len(), 1);
                prop_assert_eq!(actor.head(), board.center());
            } else {
                prop_assert_eq!(actor.len(), (prev_len + 1).min(actor.target_length()));
                prop_assert_eq!(actor.head(), prev_head.offset(actor.direction().delta(), board));
            }
        }
    }
}
