//! Torus Snake entry point
//!
//! Headless native host: paces ticks in real time, steers with a simple
//! autopilot, and prints frames as text.
//!
//! Usage: `torus-snake [settings.json] [ticks]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Torus Snake (native) starting...");

    if let Err(e) = native::run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No wasm host; the library is embedded by other front ends
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::time::Instant;

    use torus_snake::platform::TickClock;
    use torus_snake::renderer::{Palette, RenderView, ascii};
    use torus_snake::sim::{Cell, Direction, TickEvent, wrap};
    use torus_snake::{GameSession, SimError, Settings};

    const DEFAULT_TICKS: u64 = 200;

    pub fn run() -> Result<(), SimError> {
        let mut args = std::env::args().skip(1);
        let settings = match args.next() {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        let max_ticks = args
            .next()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TICKS);

        let mut session = GameSession::new(&settings)?;
        let mut clock = TickClock::new(settings.ticks_per_second);
        let mut last = Instant::now();
        let mut longest = session.length();
        let palette = Palette::default();
        let color = std::env::var_os("NO_COLOR").is_none();
        let draw = |view: &RenderView<'_>| {
            if color {
                ascii::render_colored(view, &palette)
            } else {
                ascii::render(view)
            }
        };

        while session.ticks() < max_ticks {
            let now = Instant::now();
            let due = clock.advance(now.duration_since(last).as_secs_f32());
            last = now;

            for _ in 0..due {
                session.request_direction(steer(&session));
                match session.tick()? {
                    TickEvent::Grew => {
                        longest = longest.max(session.length());
                        print!("{}", draw(&session.view(settings.cell_size)));
                        println!("tick {} length {}", session.ticks(), session.length());
                    }
                    TickEvent::Collided => {
                        println!("tick {} collision, restarting", session.ticks());
                    }
                    TickEvent::None => {}
                }
            }

            std::thread::sleep(settings.tick_interval() / 4);
        }

        print!("{}", draw(&session.view(settings.cell_size)));
        log::info!(
            "Finished {} ticks: length {}, longest {}, {} reset(s)",
            session.ticks(),
            session.length(),
            longest,
            session.resets()
        );
        Ok(())
    }

    /// Shortest signed distance from `from` to `to` on a wrapped axis
    fn wrapped_delta(from: i32, to: i32, size: i32) -> i32 {
        let d = wrap(to - from, size);
        if d > size / 2 { d - size } else { d }
    }

    /// Head toward the target, preferring moves that don't hit the body
    fn steer(session: &GameSession) -> Direction {
        let actor = session.actor();
        let board = session.board();
        let head = actor.head();
        let target = session.target().cell;

        let dx = wrapped_delta(head.col, target.col, board.width);
        let dy = wrapped_delta(head.row, target.row, board.height);

        let mut order: Vec<Direction> = Vec::with_capacity(4);
        if dx != 0 {
            order.push(if dx > 0 { Direction::Right } else { Direction::Left });
        }
        if dy != 0 {
            order.push(if dy > 0 { Direction::Down } else { Direction::Up });
        }
        order.push(actor.direction());
        order.extend(Direction::ALL);

        let tail = actor.tail();
        let blocked = |cell: Cell| actor.occupies(cell) && !(cell == tail && !actor.is_growing());

        order
            .into_iter()
            .filter(|d| *d != actor.direction().opposite())
            .find(|d| !blocked(head.offset(d.delta(), board)))
            .unwrap_or(actor.direction())
    }
}
