//! Frame-driven game loop
//!
//! The frame clock lives outside the core: whoever owns the clock calls
//! [`GameLoop::frame`] once per tick. Each call runs one update pass and
//! then hands the result to the renderer.

use std::sync::Arc;

use crate::config::SimConfig;
use crate::input::InputState;
use crate::render::{FrameView, Renderer};
use crate::sim::{GamePhase, GameState, tick};

/// What the frame clock should do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    /// Schedule another frame
    Continue,
    /// Session over, hold the last frame
    Halt,
}

/// Owns the session state and the input latch
pub struct GameLoop {
    state: GameState,
    input: Arc<InputState>,
}

impl GameLoop {
    pub fn new(config: SimConfig) -> Self {
        Self {
            state: GameState::new(config),
            input: Arc::new(InputState::new()),
        }
    }

    /// Handle for the event source to write key state into
    pub fn input(&self) -> Arc<InputState> {
        Arc::clone(&self.input)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Run one update pass and render it.
    ///
    /// The frame that ends the game is still rendered; after that nothing
    /// is updated or rendered again.
    pub fn frame(&mut self, renderer: &mut dyn Renderer) -> LoopControl {
        if self.state.phase == GamePhase::Stopped {
            return LoopControl::Halt;
        }

        let input = self.input.snapshot();
        tick(&mut self.state, &input);
        renderer.render(&FrameView::new(&self.state));

        match self.state.phase {
            GamePhase::Running => LoopControl::Continue,
            GamePhase::Stopped => LoopControl::Halt,
        }
    }

    /// Drive frames until the game ends or `max_frames` have run.
    /// Returns the number of frames executed.
    pub fn run(&mut self, renderer: &mut dyn Renderer, max_frames: u64) -> u64 {
        let mut frames = 0;
        while frames < max_frames && self.state.is_running() {
            frames += 1;
            if self.frame(renderer) == LoopControl::Halt {
                break;
            }
        }
        frames
    }

    /// Throw the session away and start fresh with a new seed
    pub fn restart(&mut self, seed: u64) {
        let config = SimConfig {
            seed,
            ..self.state.config.clone()
        };
        self.state = GameState::new(config);
        self.input.clear();
        log::info!("Game restarted with seed: {}", seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;
    use glam::Vec2;

    #[derive(Default)]
    struct CountingRenderer {
        frames: Vec<(u64, u64, GamePhase)>,
    }

    impl Renderer for CountingRenderer {
        fn render(&mut self, view: &FrameView<'_>) {
            self.frames.push((view.frame, view.score, view.phase));
        }
    }

    fn parked_loop() -> GameLoop {
        let mut game = GameLoop::new(SimConfig::with_seed(11));
        game.state.enemy.pos = Vec2::new(100.0, 50.0);
        for star in &mut game.state.stars {
            star.pos = Vec2::new(700.0, 10.0);
        }
        game
    }

    #[test]
    fn test_frame_updates_then_renders() {
        let mut game = parked_loop();
        let mut renderer = CountingRenderer::default();
        assert_eq!(game.frame(&mut renderer), LoopControl::Continue);
        assert_eq!(game.frame(&mut renderer), LoopControl::Continue);
        assert_eq!(renderer.frames.len(), 2);
        assert_eq!(renderer.frames[1].0, 2);
    }

    #[test]
    fn test_input_handle_reaches_simulation() {
        let mut game = parked_loop();
        let mut renderer = CountingRenderer::default();
        let input = game.input();
        input.press(Key::Right);
        input.fire();

        game.frame(&mut renderer);
        assert_eq!(game.state().player.pos.x, 405.0);
        assert_eq!(game.state().bullets.len(), 1);

        game.frame(&mut renderer);
        assert_eq!(game.state().player.pos.x, 410.0);
        assert_eq!(game.state().bullets.len(), 1);
    }

    #[test]
    fn test_halts_after_terminal_frame() {
        let mut game = parked_loop();
        game.state.enemy.pos = Vec2::new(395.0, 560.0);
        let mut renderer = CountingRenderer::default();

        assert_eq!(game.frame(&mut renderer), LoopControl::Halt);
        assert_eq!(renderer.frames.len(), 1);
        assert_eq!(renderer.frames[0].2, GamePhase::Stopped);

        assert_eq!(game.frame(&mut renderer), LoopControl::Halt);
        assert_eq!(renderer.frames.len(), 1);
    }

    #[test]
    fn test_run_counts_only_executed_frames() {
        let mut game = parked_loop();
        game.state.enemy.pos = Vec2::new(395.0, 560.0);
        let mut renderer = CountingRenderer::default();

        // The terminal frame runs and is counted
        assert_eq!(game.run(&mut renderer, 100), 1);
        assert_eq!(game.state().frame, 1);

        // Nothing left to run once stopped
        assert_eq!(game.run(&mut renderer, 100), 0);
        assert_eq!(game.state().frame, 1);
        assert_eq!(renderer.frames.len(), 1);
    }

    #[test]
    fn test_run_stops_at_frame_budget() {
        let mut game = parked_loop();
        let mut renderer = CountingRenderer::default();
        let frames = game.run(&mut renderer, 5);
        assert!(frames <= 5);
        assert_eq!(renderer.frames.len() as u64, frames);
    }

    #[test]
    fn test_restart_resets_session() {
        let mut game = parked_loop();
        game.state.enemy.pos = Vec2::new(395.0, 560.0);
        let mut renderer = CountingRenderer::default();
        game.input().press(Key::Left);
        assert_eq!(game.frame(&mut renderer), LoopControl::Halt);

        game.restart(12);
        assert!(game.state().is_running());
        assert_eq!(game.state().score, 0);
        assert_eq!(game.state().frame, 0);
        assert_eq!(game.state().config.seed, 12);
        assert!(!game.input().is_held(Key::Left));
    }
}
