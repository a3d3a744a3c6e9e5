//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call = one frame)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod motion;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use state::{
    Bullet, Cloud, Direction, Enemy, GameEvent, GamePhase, GameState, GrassBlade, Particle,
    Player, Star,
};
pub use tick::{TickInput, tick};
