//! Game session
//!
//! Owns the actor, the target, and the RNG. Ticks never end the game: a
//! collision swaps in a fresh actor and target within the same tick.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::error::SimError;
use crate::platform::SharedInput;
use crate::renderer::RenderView;
use crate::settings::{ResetDirection, Settings};
use crate::sim::{Actor, Board, Cell, Direction, Step, Target, TickEvent, place, step};

/// Running snake game
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    actor: Actor,
    target: Target,
    reset_direction: ResetDirection,
    rng: Pcg32,
    /// Seed the RNG was created from
    seed: u64,
    /// Tail cell released by the last tick (for incremental renderers)
    vacated: Option<Cell>,
    /// Ticks processed
    ticks: u64,
    /// Collisions so far
    resets: u64,
}

impl GameSession {
    /// Start a session from validated settings
    pub fn new(settings: &Settings) -> Result<Self, SimError> {
        settings.validate()?;
        let seed = settings.seed.unwrap_or_else(rand::random);
        Self::with_seed(settings.board(), seed, settings.reset_direction)
    }

    /// Start a session: centered actor heading right, random target
    pub fn with_seed(board: Board, seed: u64, reset_direction: ResetDirection) -> Result<Self, SimError> {
        let mut rng = Pcg32::seed_from_u64(seed);
        let actor = Actor::spawn(board, Direction::Right);
        let target = Target::new(place(&actor.occupied(), board, &mut rng)?);
        log::info!(
            "Session started: board {}x{}, seed {}, reset direction {}",
            board.width,
            board.height,
            seed,
            reset_direction.as_str()
        );
        Ok(Self {
            board,
            actor,
            target,
            reset_direction,
            rng,
            seed,
            vacated: None,
            ticks: 0,
            resets: 0,
        })
    }

    /// Start from an explicit position
    ///
    /// The actor gets the same checks as `Actor::from_cells`, and the target
    /// must be a free cell on the board.
    pub fn from_parts(
        board: Board,
        actor: Actor,
        target: Target,
        seed: u64,
        reset_direction: ResetDirection,
    ) -> Result<Self, SimError> {
        actor.validate(board)?;
        if !board.contains(target.cell) || actor.occupies(target.cell) {
            return Err(SimError::InvalidTarget {
                col: target.cell.col,
                row: target.cell.row,
            });
        }
        Ok(Self {
            board,
            actor,
            target,
            reset_direction,
            rng: Pcg32::seed_from_u64(seed),
            seed,
            vacated: None,
            ticks: 0,
            resets: 0,
        })
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn target(&self) -> Target {
        self.target
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn resets(&self) -> u64 {
        self.resets
    }

    pub fn length(&self) -> usize {
        self.actor.len()
    }

    pub fn vacated(&self) -> Option<Cell> {
        self.vacated
    }

    /// Queue a direction change for the next tick; reversals are ignored
    pub fn request_direction(&mut self, dir: Direction) -> bool {
        self.actor.request(dir)
    }

    /// Advance one tick
    ///
    /// Returns `Err` only when the target cannot be placed; the session is
    /// left as it was before the tick.
    pub fn tick(&mut self) -> Result<TickEvent, SimError> {
        let outcome = step(&self.actor, self.target, self.board, &mut self.rng)?;
        let event = outcome.event();
        match outcome {
            Step::Moved(advance) => {
                self.actor = advance.actor;
                self.target = advance.target;
                self.vacated = advance.vacated;
            }
            Step::Collided { at } => {
                log::info!(
                    "Collision at {},{} with length {}, resetting",
                    at.col,
                    at.row,
                    self.actor.len()
                );
                self.reset()?;
            }
        }
        self.ticks += 1;
        Ok(event)
    }

    /// Tick using a request slot shared with an input thread
    ///
    /// The slot is read once, before the step, then the new heading is
    /// published back for the next round of filtering. The taken request is
    /// filtered again here since the slot may have checked it against a stale
    /// heading.
    pub fn tick_shared(&mut self, input: &SharedInput) -> Result<TickEvent, SimError> {
        if let Some(dir) = input.take() {
            self.actor.request(dir);
        }
        let event = self.tick()?;
        input.publish(self.actor.direction());
        Ok(event)
    }

    /// Read-only snapshot for a renderer
    pub fn view(&self, cell_size: u32) -> RenderView<'_> {
        RenderView {
            body: self.actor.body(),
            target: self.target.cell,
            vacated: self.vacated,
            board: self.board,
            cell_size,
        }
    }

    fn reset(&mut self) -> Result<(), SimError> {
        let direction = match self.reset_direction {
            ResetDirection::Random => Direction::ALL[self.rng.random_range(0..Direction::ALL.len())],
            ResetDirection::Fixed(dir) => dir,
        };
        let actor = Actor::spawn(self.board, direction);
        let target = Target::new(place(&actor.occupied(), self.board, &mut self.rng)?);
        self.actor = actor;
        self.target = target;
        self.vacated = None;
        self.resets += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring_session(policy: ResetDirection) -> GameSession {
        // Length-5 actor heading up with its body curled to the right
        let board = Board::new(32, 24);
        let actor = Actor::from_cells(
            [
                Cell::new(10, 10),
                Cell::new(10, 11),
                Cell::new(11, 11),
                Cell::new(11, 10),
                Cell::new(11, 9),
            ],
            Direction::Up,
            board,
        )
        .unwrap();
        GameSession::from_parts(board, actor, Target::new(Cell::new(0, 0)), 5, policy).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let session = GameSession::with_seed(Board::new(32, 24), 12345, ResetDirection::Random).unwrap();
        assert_eq!(session.actor().head(), Cell::new(16, 12));
        assert_eq!(session.actor().direction(), Direction::Right);
        assert_eq!(session.length(), 1);
        assert!(!session.actor().occupies(session.target().cell));
        assert_eq!(session.ticks(), 0);
    }

    #[test]
    fn test_collision_resets() {
        let mut session = ring_session(ResetDirection::Random);
        assert!(session.request_direction(Direction::Right));
        assert_eq!(session.tick().unwrap(), TickEvent::Collided);
        assert_eq!(session.length(), 1);
        assert_eq!(session.actor().head(), Cell::new(16, 12));
        assert_eq!(session.actor().pending(), None);
        assert_eq!(session.resets(), 1);
        assert_eq!(session.ticks(), 1);
        assert!(!session.actor().occupies(session.target().cell));

        // Next tick is ordinary movement
        assert_ne!(session.tick().unwrap(), TickEvent::Collided);
        assert_eq!(session.resets(), 1);
    }

    #[test]
    fn test_fixed_reset_direction() {
        let mut session = ring_session(ResetDirection::Fixed(Direction::Left));
        session.request_direction(Direction::Right);
        session.tick().unwrap();
        assert_eq!(session.actor().direction(), Direction::Left);
    }

    #[test]
    fn test_from_parts_rejects_target_on_body() {
        let board = Board::new(8, 8);
        let actor = Actor::spawn(board, Direction::Right);
        let err = GameSession::from_parts(
            board,
            actor,
            Target::new(board.center()),
            1,
            ResetDirection::Random,
        )
        .unwrap_err();
        assert!(matches!(err, SimError::InvalidTarget { col: 4, row: 4 }));
    }

    #[test]
    fn test_from_parts_rejects_invalid_actor() {
        let board = Board::new(8, 8);
        let empty: Actor = serde_json::from_str(
            r#"{"body":[],"direction":"Right","pending":null,"target_length":1}"#,
        )
        .unwrap();
        let err = GameSession::from_parts(
            board,
            empty,
            Target::new(Cell::new(0, 0)),
            1,
            ResetDirection::Random,
        )
        .unwrap_err();
        assert!(matches!(err, SimError::InvalidActor(_)));

        let overlapping: Actor = serde_json::from_str(
            r#"{"body":[{"col":1,"row":1},{"col":1,"row":1}],"direction":"Right","pending":null,"target_length":2}"#,
        )
        .unwrap();
        assert!(
            GameSession::from_parts(board, overlapping, Target::new(Cell::new(0, 0)), 1, ResetDirection::Random)
                .is_err()
        );
    }

    #[test]
    fn test_shared_request_checked_against_true_heading() {
        let board = Board::new(32, 24);
        let actor = Actor::from_cells(
            [Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)],
            Direction::Right,
            board,
        )
        .unwrap();
        let mut session =
            GameSession::from_parts(board, actor, Target::new(Cell::new(20, 20)), 3, ResetDirection::Random)
                .unwrap();
        let input = SharedInput::new(Direction::Right);

        // Turn up, but the slot still holds the old heading
        assert!(session.request_direction(Direction::Up));
        assert_eq!(session.tick().unwrap(), TickEvent::None);
        assert_eq!(session.actor().direction(), Direction::Up);

        // Down passes the stale filter in the slot...
        assert!(input.request(Direction::Down));
        // ...and is dropped against the real heading
        assert_eq!(session.tick_shared(&input).unwrap(), TickEvent::None);
        assert_eq!(session.actor().direction(), Direction::Up);
        assert_eq!(session.actor().head(), Cell::new(5, 3));
        assert_eq!(session.resets(), 0);
        assert_eq!(input.current(), Some(Direction::Up));
    }

    #[test]
    fn test_random_reset_uses_all_directions() {
        let mut session = ring_session(ResetDirection::Random);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            session.reset().unwrap();
            assert_eq!(session.actor().head(), Cell::new(16, 12));
            seen.insert(session.actor().direction());
        }
        assert_eq!(seen.len(), Direction::ALL.len());
        assert_eq!(session.resets(), 200);
    }

    #[test]
    fn test_out_of_space_leaves_session_unchanged() {
        let board = Board::new(2, 1);
        let actor = Actor::from_cells([Cell::new(0, 0)], Direction::Right, board).unwrap();
        let target = Target::new(Cell::new(1, 0));
        let mut session =
            GameSession::from_parts(board, actor.clone(), target, 1, ResetDirection::Random).unwrap();

        let err = session.tick().unwrap_err();
        assert!(matches!(err, SimError::OutOfSpace { occupied: 2, area: 2 }));
        assert_eq!(session.actor(), &actor);
        assert_eq!(session.target(), target);
        assert_eq!(session.ticks(), 0);
        assert_eq!(session.vacated(), None);
    }

    #[test]
    fn test_new_validates_settings() {
        let settings = Settings {
            board_width: 1,
            board_height: 1,
            ..Default::default()
        };
        assert!(matches!(GameSession::new(&settings), Err(SimError::Config(_))));
    }

    #[test]
    fn test_determinism() {
        // Same seed and inputs give identical sessions
        let mut a = GameSession::with_seed(Board::new(16, 12), 99999, ResetDirection::Random).unwrap();
        let mut b = GameSession::with_seed(Board::new(16, 12), 99999, ResetDirection::Random).unwrap();
        let inputs = [Direction::Up, Direction::Left, Direction::Down, Direction::Right];
        for i in 0..200 {
            let dir = inputs[i % inputs.len()];
            a.request_direction(dir);
            b.request_direction(dir);
            assert_eq!(a.tick().unwrap(), b.tick().unwrap());
        }
        assert_eq!(a.actor(), b.actor());
        assert_eq!(a.target(), b.target());
    }
}
