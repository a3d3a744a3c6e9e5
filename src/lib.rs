//! Star Collector - a side-view arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, spawning, scoring)
//! - `input`: Latched keyboard/mouse state shared with the event source
//! - `config`: Data-driven tuning and the RNG seed
//! - `render`: Read-only frame view handed to an external renderer
//! - `game_loop`: One update-then-render pass per frame clock tick

pub mod config;
pub mod game_loop;
pub mod input;
pub mod render;
pub mod sim;

pub use config::{ConfigError, SimConfig};
pub use game_loop::{GameLoop, LoopControl};
pub use input::{InputState, Key};
pub use render::{FrameView, Renderer};

/// Default tuning constants (one logical step per frame, ~60 Hz)
pub mod consts {
    /// Logical canvas dimensions
    pub const WIDTH: f32 = 800.0;
    pub const HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 40.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Vertical velocity set every frame the jump key is held
    pub const PLAYER_JUMP: f32 = -5.0;
    pub const GRAVITY: f32 = 0.8;

    /// Bullet defaults
    pub const BULLET_SIZE: f32 = 8.0;
    pub const BULLET_SPEED: f32 = 10.0;

    /// Enemy defaults
    pub const ENEMY_SIZE: f32 = 30.0;
    pub const ENEMY_SPEED: f32 = 3.0;

    /// Star defaults
    pub const STAR_SIZE: f32 = 20.0;
    pub const STAR_COUNT: usize = 5;

    /// Cloud defaults
    pub const CLOUD_COUNT: usize = 5;
    pub const CLOUD_DRIFT: f32 = 0.5;
    pub const CLOUD_MIN_SIZE: f32 = 50.0;
    pub const CLOUD_SIZE_RANGE: f32 = 50.0;

    /// Bullet trail particles
    pub const PARTICLE_CHANCE: f32 = 0.3;
    pub const PARTICLE_LIFETIME: u32 = 20;
    pub const PARTICLE_MIN_SIZE: f32 = 2.0;
    pub const PARTICLE_SIZE_RANGE: f32 = 2.0;
    /// Orange (0xRRGGBB)
    pub const PARTICLE_COLOR: u32 = 0xFF_A5_00;

    /// Decorative grass strip along the ground
    pub const GRASS_HEIGHT: f32 = 20.0;
    pub const GRASS_SPACING: f32 = 5.0;
    pub const GRASS_VARIATION: f32 = 5.0;

    /// Points awarded
    pub const STAR_POINTS: u64 = 1;
    pub const ENEMY_POINTS: u64 = 2;

    /// Default RNG seed when none is configured
    pub const DEFAULT_SEED: u64 = 0x5EED_57A2;
}
