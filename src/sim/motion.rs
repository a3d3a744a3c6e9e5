//! Per-frame motion rules
//!
//! Fixed-step: every call advances exactly one frame, speeds are in units/frame.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::spawn;
use super::state::{Bullet, Cloud, Direction, Enemy, Particle, Player};
use super::tick::TickInput;
use crate::config::SimConfig;

/// Age particles, move them, drop the expired ones
pub fn update_particles(particles: &mut Vec<Particle>) {
    particles.retain_mut(|p| {
        p.pos += p.vel;
        p.age += 1;
        !p.is_expired()
    });
}

/// Walk, jump, fall, land
///
/// Left and right are applied independently, so holding both cancels out.
/// Jump sets the impulse every frame it is held, grounded or not.
pub fn move_player(player: &mut Player, input: &TickInput, config: &SimConfig) {
    if input.left && player.pos.x > 0.0 {
        player.pos.x -= config.player_speed;
    }
    if input.right && player.pos.x < config.width - player.size {
        player.pos.x += config.player_speed;
    }
    if input.jump {
        player.vel_y = config.player_jump;
    }

    player.vel_y += config.gravity;
    player.pos.y += player.vel_y;

    let ground = config.height - player.size;
    if player.pos.y > ground {
        player.pos.y = ground;
        player.vel_y = 0.0;
    }
}

/// Patrol horizontally, bouncing off both canvas edges
pub fn move_enemy(enemy: &mut Enemy, config: &SimConfig) {
    enemy.pos.x += enemy.speed * enemy.direction.sign();

    let right_edge = config.width - enemy.size;
    if enemy.pos.x <= 0.0 {
        enemy.pos.x = 0.0;
        enemy.direction = Direction::Right;
    } else if enemy.pos.x >= right_edge {
        enemy.pos.x = right_edge;
        enemy.direction = Direction::Left;
    }
}

/// Drift left; a cloud fully past the left edge wraps to the right edge
pub fn move_clouds(clouds: &mut [Cloud], rng: &mut Pcg32, config: &SimConfig) {
    for cloud in clouds {
        cloud.pos.x -= config.cloud_drift;
        if cloud.pos.x + cloud.size < 0.0 {
            spawn::recycle_cloud(cloud, rng, config);
        }
    }
}

/// Advance a bullet one step to the right
#[inline]
pub fn move_bullet(bullet: &mut Bullet, config: &SimConfig) {
    bullet.pos.x += config.bullet_speed;
}

/// Maybe shed one trail particle from the bullet's center
pub fn emit_trail(bullet: &Bullet, rng: &mut Pcg32, config: &SimConfig) -> Option<Particle> {
    if rng.random::<f32>() >= config.particle_chance {
        return None;
    }

    let center = bullet.pos + Vec2::splat(config.bullet_size / 2.0);
    let size = config.particle_min_size + rng.random::<f32>() * config.particle_size_range;
    let vel = Vec2::new(spawn::signed_unit(rng), spawn::signed_unit(rng));

    Some(Particle {
        pos: center,
        vel,
        color: config.particle_color,
        size,
        age: 0,
        lifetime: config.particle_lifetime,
    })
}
