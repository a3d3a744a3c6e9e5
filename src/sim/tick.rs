//! Fixed timestep simulation tick
//!
//! Core game loop step that advances the simulation by exactly one frame.
//! Order within a frame is fixed:
//! fire presses, particles, player, enemy, bullets (+ enemy hits),
//! stars (+ pickups, top-up), clouds, then the terminal player/enemy check.

use super::collision::{bullet_hits_enemy, player_touches_enemy, player_touches_star};
use super::motion;
use super::spawn;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::{ENEMY_POINTS, STAR_POINTS};

/// Input for a single tick (latched between frames)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move left (held)
    pub left: bool,
    /// Move right (held)
    pub right: bool,
    /// Jump impulse (held)
    pub jump: bool,
    /// Fire presses since the last tick, one bullet each
    pub fire_presses: u32,
}

/// Advance the game state by one frame. Does nothing once stopped.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase == GamePhase::Stopped {
        return;
    }

    state.events.clear();
    state.frame += 1;

    // Presses arrived between frames, so bullets leave from where the player was
    for _ in 0..input.fire_presses {
        state.fire_bullet();
    }

    motion::update_particles(&mut state.particles);
    motion::move_player(&mut state.player, input, &state.config);
    motion::move_enemy(&mut state.enemy, &state.config);
    update_bullets(state);
    update_stars(state);
    motion::move_clouds(&mut state.clouds, &mut state.rng, &state.config);

    if player_touches_enemy(&state.player, &state.enemy) {
        state.phase = GamePhase::Stopped;
        state.events.push(GameEvent::GameOver { score: state.score });
        log::info!(
            "Game over at frame {} with score {}",
            state.frame,
            state.score
        );
    }
}

/// Move bullets, shed trail particles, resolve enemy hits, drop off-screen bullets
fn update_bullets(state: &mut GameState) {
    let GameState {
        config,
        rng,
        score,
        enemy,
        bullets,
        particles,
        events,
        ..
    } = state;

    bullets.retain_mut(|bullet| {
        motion::move_bullet(bullet, config);

        if let Some(particle) = motion::emit_trail(bullet, rng, config) {
            particles.push(particle);
        }

        if bullet_hits_enemy(bullet, config.bullet_size, enemy) {
            spawn::respawn_enemy(enemy, rng, config);
            *score += ENEMY_POINTS;
            events.push(GameEvent::EnemyHit { pos: bullet.pos });
            log::debug!("Enemy hit at {:?}, score {}", bullet.pos, score);
            return false;
        }

        bullet.pos.x < config.width
    });
}

/// Collect touched stars, then refill to the configured population
fn update_stars(state: &mut GameState) {
    let GameState {
        config,
        rng,
        score,
        player,
        stars,
        events,
        ..
    } = state;

    stars.retain(|star| {
        if player_touches_star(player, star) {
            *score += STAR_POINTS;
            events.push(GameEvent::StarCollected { pos: star.pos });
            log::debug!("Star collected at {:?}, score {}", star.pos, score);
            return false;
        }
        true
    });

    spawn::top_up_stars(stars, rng, config);
}
