//! Headless demo: drives a level at a fixed 60 Hz step with scripted input
//! and logs the events the rules emit.
//!
//! Run with `RUST_LOG=chomp=debug` for mode-transition output.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use chomp::entity::pacman::InputState;
use chomp::events::GameEvent;
use chomp::game::Level;

const STEP: f32 = 1.0 / 60.0;
const SECONDS: u32 = 120;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut level = Level::new()?;
    for ghost in level.ghosts.iter_mut() {
        ghost.reseed(0xC0FFEE);
    }

    let mut caught = 0u32;
    'outer: for frame in 0..(SECONDS * 60) {
        // Scripted zig-zag: hold left/right in alternating two-second bursts,
        // with a vertical nudge in between.
        let phase = (frame / 120) % 4;
        let input = InputState {
            left: phase == 0,
            up: phase == 1,
            right: phase == 2,
            down: phase == 3,
        };

        for event in level.step(STEP, input) {
            tracing::info!(?event, frame, score = level.score, "event");
            match event {
                GameEvent::PlayerCaught => {
                    caught += 1;
                    level.reset_positions();
                }
                GameEvent::LevelCleared => break 'outer,
                _ => {}
            }
        }
    }

    println!(
        "final score: {} ({} pellets eaten, caught {} times)",
        level.score, level.pellets.eaten, caught
    );
    Ok(())
}
