//! Ledge Runner entry point
//!
//! Headless host for the simulation core: drives a scripted demo session at
//! one tick per frame and dumps the final state snapshot as JSON, the same
//! data a renderer would consume. Wiring up an actual window, sprites, and
//! keyboard input is deliberately left to downstream hosts.

use ledge_runner::sim::{GamePhase, GameState, TickInput, tick};

/// How many frames the scripted demo runs at most (~20 seconds at 60 Hz)
const DEMO_TICKS: u32 = 1200;

fn main() {
    env_logger::init();
    log::info!("Ledge Runner (headless) starting...");

    let mut state = GameState::new();
    state.start();

    for t in 0..DEMO_TICKS {
        let input = demo_input(t);
        tick(&mut state, &input);
        if state.phase == GamePhase::GameOver {
            log::info!("demo run ended at tick {}", t);
            break;
        }
    }

    log::info!(
        "demo finished: score={} lives={} level={} ticks={}",
        state.score,
        state.lives,
        state.level,
        state.time_ticks
    );

    match serde_json::to_string_pretty(&state) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("failed to serialize snapshot: {e}"),
    }
}

/// Canned input: run right with periodic hops, doubling back now and then.
/// Enough to land, collect ground coins, and meet an enemy or two.
fn demo_input(t: u32) -> TickInput {
    let heading_left = (t / 240) % 2 == 1;
    TickInput {
        left: heading_left,
        right: !heading_left,
        jump: t % 45 == 0,
        pause: false,
    }
}
