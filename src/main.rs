//! Star Collector entry point
//!
//! Native build runs headless: a demo pilot feeds the input latch, frames
//! are logged instead of drawn. Usage:
//!
//! ```text
//! star-collector [config.json] [max_frames]
//! ```

use star_collector::render::LogRenderer;
use star_collector::sim::GameState;
use star_collector::{GameLoop, InputState, Key, LoopControl, SimConfig};

/// Frames to run when no limit is given (one minute at 60 Hz)
const DEFAULT_MAX_FRAMES: u64 = 60 * 60;

/// Fire every this many frames in demo mode
const DEMO_FIRE_INTERVAL: u64 = 12;

/// Press keys the way a casual player would: chase the closest star,
/// jump when the enemy gets near, fire now and then.
fn demo_pilot(state: &GameState, input: &InputState) {
    let player = &state.player;
    let target = state
        .stars
        .iter()
        .min_by(|a, b| {
            let da = (a.pos.x - player.pos.x).abs();
            let db = (b.pos.x - player.pos.x).abs();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|star| star.pos.x);

    input.release(Key::Left);
    input.release(Key::Right);
    if let Some(x) = target {
        if x + state.config.star_size / 2.0 < player.center().x {
            input.press(Key::Left);
        } else {
            input.press(Key::Right);
        }
    }

    let enemy_near = (state.enemy.pos.x - player.pos.x).abs() < 120.0;
    if enemy_near {
        input.press(Key::Jump);
    } else {
        input.release(Key::Jump);
    }

    if state.frame % DEMO_FIRE_INTERVAL == 0 {
        input.fire();
    }
}

fn main() {
    env_logger::init();
    log::info!("Star Collector (native) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => SimConfig::load_or_default(path),
        None => SimConfig::default(),
    };
    let max_frames = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FRAMES);

    let mut game = GameLoop::new(config);
    let input = game.input();
    let mut renderer = LogRenderer::default();

    for _ in 0..max_frames {
        demo_pilot(game.state(), &input);
        if game.frame(&mut renderer) == LoopControl::Halt {
            break;
        }
    }

    let state = game.state();
    println!(
        "Score: {} after {} frames ({})",
        state.score,
        state.frame,
        if state.is_running() { "still running" } else { "game over" }
    );
}
