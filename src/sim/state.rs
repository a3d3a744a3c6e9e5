//! Game state and core simulation types
//!
//! Everything the update pass mutates lives in [`GameState`]; nothing is global.
//! Positions are top-left anchored in logical canvas units.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::spawn;
use crate::config::SimConfig;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Player touched the enemy. Absorbing: no further updates
    Stopped,
}

/// Horizontal heading of the enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// -1.0 for left, +1.0 for right
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// The player avatar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Vertical velocity (positive = falling)
    pub vel_y: f32,
    pub size: f32,
}

impl Player {
    /// Standing on the ground, horizontally centered
    pub fn new(config: &SimConfig) -> Self {
        Self {
            pos: Vec2::new(config.width / 2.0, config.ground_y()),
            vel_y: 0.0,
            size: config.player_size,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::square(self.pos, self.size)
    }

    /// Center of the avatar (bullet origin)
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }
}

/// The bouncing enemy (exactly one per session, mutated in place)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub direction: Direction,
    pub size: f32,
    pub speed: f32,
}

impl Enemy {
    pub fn aabb(&self) -> Aabb {
        Aabb::square(self.pos, self.size)
    }
}

/// A projectile travelling right
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
}

/// A collectible star
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    pub size: f32,
}

impl Star {
    pub fn aabb(&self) -> Aabb {
        Aabb::square(self.pos, self.size)
    }
}

/// A background cloud, recycled when it drifts off the left edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cloud {
    pub pos: Vec2,
    /// Fixed for the cloud's lifetime, survives recycling
    pub size: f32,
}

/// A bullet trail particle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 0xRRGGBB
    pub color: u32,
    pub size: f32,
    /// Frames lived so far
    pub age: u32,
    /// Frames until removal
    pub lifetime: u32,
}

impl Particle {
    /// Fade factor for rendering: 1 when born, 0 at end of life
    pub fn opacity(&self) -> f32 {
        if self.lifetime == 0 {
            return 0.0;
        }
        (1.0 - self.age as f32 / self.lifetime as f32).clamp(0.0, 1.0)
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.age >= self.lifetime
    }
}

/// One blade of the decorative grass strip (never mutated after creation)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrassBlade {
    pub x: f32,
    /// y of the blade tip
    pub top: f32,
}

/// Things that happened during the most recent tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fire press spawned a bullet at this position
    BulletFired { pos: Vec2 },
    /// A bullet hit the enemy at this position
    EnemyHit { pos: Vec2 },
    /// The player picked up the star at this position
    StarCollected { pos: Vec2 },
    /// The player touched the enemy
    GameOver { score: u64 },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Tuning this session runs with
    pub config: SimConfig,
    /// Single source of randomness for every spawn and particle
    pub rng: Pcg32,
    /// Score (only ever increases)
    pub score: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Update passes completed while running
    pub frame: u64,
    pub player: Player,
    pub enemy: Enemy,
    /// Active bullets (order irrelevant)
    pub bullets: Vec<Bullet>,
    /// Exactly `config.star_count` after every update pass
    pub stars: Vec<Star>,
    /// Fixed pool of `config.cloud_count`, recycled in place
    pub clouds: Vec<Cloud>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    /// Ground decoration, generated once
    pub grass: Vec<GrassBlade>,
    /// Events emitted by the last tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session from the given tuning (seeded from `config.seed`)
    pub fn new(config: SimConfig) -> Self {
        let mut rng = Pcg32::seed_from_u64(config.seed);

        let clouds = (0..config.cloud_count)
            .map(|_| spawn::random_cloud(&mut rng, &config))
            .collect();
        let grass = spawn::grass_strip(&mut rng, &config);
        let enemy = spawn::random_enemy(&mut rng, &config);
        let stars = (0..config.star_count)
            .map(|_| spawn::random_star(&mut rng, &config))
            .collect();

        log::info!(
            "New session: seed={}, canvas={}x{}",
            config.seed,
            config.width,
            config.height
        );

        Self {
            player: Player::new(&config),
            enemy,
            rng,
            score: 0,
            phase: GamePhase::Running,
            frame: 0,
            bullets: Vec::new(),
            stars,
            clouds,
            particles: Vec::new(),
            grass,
            events: Vec::new(),
            config,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Spawn one bullet centered on the player
    pub fn fire_bullet(&mut self) {
        let half = self.config.bullet_size / 2.0;
        let pos = self.player.center() - Vec2::splat(half);
        self.bullets.push(Bullet { pos });
        self.events.push(GameEvent::BulletFired { pos });
    }
}
