//! Read-only view of a frame for external renderers
//!
//! Drawing lives outside the core. A renderer gets a borrowed snapshot
//! after each update pass and cannot mutate the simulation through it.

use crate::config::SimConfig;
use crate::sim::{Bullet, Cloud, Enemy, GamePhase, GameState, GrassBlade, Particle, Player, Star};

/// Everything a renderer may read for one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub config: &'a SimConfig,
    pub frame: u64,
    pub score: u64,
    pub phase: GamePhase,
    pub player: &'a Player,
    pub enemy: &'a Enemy,
    pub bullets: &'a [Bullet],
    pub stars: &'a [Star],
    pub clouds: &'a [Cloud],
    pub particles: &'a [Particle],
    pub grass: &'a [GrassBlade],
}

impl<'a> FrameView<'a> {
    pub fn new(state: &'a GameState) -> Self {
        Self {
            config: &state.config,
            frame: state.frame,
            score: state.score,
            phase: state.phase,
            player: &state.player,
            enemy: &state.enemy,
            bullets: &state.bullets,
            stars: &state.stars,
            clouds: &state.clouds,
            particles: &state.particles,
            grass: &state.grass,
        }
    }

    /// HUD line drawn in the corner
    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::Stopped
    }
}

/// Consumer of frames (canvas, terminal, recorder...)
pub trait Renderer {
    fn render(&mut self, view: &FrameView<'_>);
}

/// Renderer that only logs a one-line summary per frame
#[derive(Debug, Default)]
pub struct LogRenderer {
    pub frames_rendered: u64,
}

impl Renderer for LogRenderer {
    fn render(&mut self, view: &FrameView<'_>) {
        self.frames_rendered += 1;
        log::trace!(
            "frame {} | {} | player ({:.1}, {:.1}) | enemy ({:.1}, {:.1}) | bullets {} | particles {}",
            view.frame,
            view.score_text(),
            view.player.pos.x,
            view.player.pos.y,
            view.enemy.pos.x,
            view.enemy.pos.y,
            view.bullets.len(),
            view.particles.len(),
        );
        if view.is_game_over() {
            log::info!("GAME OVER - {}", view.score_text());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_mirrors_state() {
        let state = GameState::new(SimConfig::with_seed(4));
        let view = FrameView::new(&state);
        assert_eq!(view.stars.len(), 5);
        assert_eq!(view.clouds.len(), 5);
        assert_eq!(view.player, &state.player);
        assert_eq!(view.score_text(), "Score: 0");
        assert!(!view.is_game_over());
    }

    #[test]
    fn test_log_renderer_counts_frames() {
        let state = GameState::new(SimConfig::default());
        let mut renderer = LogRenderer::default();
        renderer.render(&FrameView::new(&state));
        renderer.render(&FrameView::new(&state));
        assert_eq!(renderer.frames_rendered, 2);
    }
}
