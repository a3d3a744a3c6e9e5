//! Spawning and population policy
//!
//! Every placement is an independent uniform draw from the session RNG,
//! uncorrelated with whatever the new entity replaces.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Cloud, Direction, Enemy, GrassBlade, Star};
use crate::config::SimConfig;

/// Uniform draw in [0, max)
#[inline]
fn uniform(rng: &mut Pcg32, max: f32) -> f32 {
    rng.random::<f32>() * max
}

/// Uniform draw in [-1, 1)
#[inline]
pub(crate) fn signed_unit(rng: &mut Pcg32) -> f32 {
    rng.random::<f32>() * 2.0 - 1.0
}

/// New star: x in [0, W - size], y in [0, H/2]
pub fn random_star(rng: &mut Pcg32, config: &SimConfig) -> Star {
    let x = uniform(rng, config.width - config.star_size);
    let y = uniform(rng, config.height / 2.0);
    Star {
        pos: Vec2::new(x, y),
        size: config.star_size,
    }
}

/// Refill the star population after pickups. Returns how many were added
pub fn top_up_stars(stars: &mut Vec<Star>, rng: &mut Pcg32, config: &SimConfig) -> usize {
    let missing = config.star_count.saturating_sub(stars.len());
    stars.extend((0..missing).map(|_| random_star(rng, config)));
    missing
}

/// New cloud anywhere across the width, upper half of the sky
pub fn random_cloud(rng: &mut Pcg32, config: &SimConfig) -> Cloud {
    let x = uniform(rng, config.width);
    let y = uniform(rng, config.height / 2.0);
    let size = config.cloud_min_size + uniform(rng, config.cloud_size_range);
    Cloud {
        pos: Vec2::new(x, y),
        size,
    }
}

/// Send a cloud that left the screen back to the right edge (same instance, same size)
pub fn recycle_cloud(cloud: &mut Cloud, rng: &mut Pcg32, config: &SimConfig) {
    cloud.pos.x = config.width;
    cloud.pos.y = uniform(rng, config.height / 2.0);
}

/// Initial enemy: anywhere on screen, random heading
pub fn random_enemy(rng: &mut Pcg32, config: &SimConfig) -> Enemy {
    let x = uniform(rng, config.width - config.enemy_size);
    let y = uniform(rng, config.height - config.enemy_size);
    let direction = if rng.random::<f32>() < 0.5 {
        Direction::Left
    } else {
        Direction::Right
    };
    Enemy {
        pos: Vec2::new(x, y),
        direction,
        size: config.enemy_size,
        speed: config.enemy_speed,
    }
}

/// Respawn after a hit: parked just off the left edge at a new random height.
/// Only y is randomized; x re-enters through normal motion.
pub fn respawn_enemy(enemy: &mut Enemy, rng: &mut Pcg32, config: &SimConfig) {
    enemy.pos.x = -enemy.size;
    enemy.pos.y = uniform(rng, config.height - enemy.size);
}

/// One blade every `grass_spacing` units, tips jittered around the strip top
pub fn grass_strip(rng: &mut Pcg32, config: &SimConfig) -> Vec<GrassBlade> {
    let count = (config.width / config.grass_spacing).ceil() as usize;
    let base = config.height - config.grass_height;
    (0..count)
        .map(|i| GrassBlade {
            x: i as f32 * config.grass_spacing,
            top: base + signed_unit(rng) * config.grass_variation,
        })
        .collect()
}
