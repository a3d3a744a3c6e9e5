//! Axis-aligned bounding box overlap tests
//!
//! Every entity collides as a square: player and enemy use the square that
//! circumscribes their drawn circle. Touching edges do not count as overlap.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Bullet, Enemy, Player, Star};

/// An axis-aligned box anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Square box with side `side`
    #[inline]
    pub fn square(min: Vec2, side: f32) -> Self {
        Self::new(min, Vec2::splat(side))
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict overlap on both axes
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x && a_max.x > other.min.x && self.min.y < b_max.y && a_max.y > other.min.y
    }
}

/// Did this bullet hit the enemy?
pub fn bullet_hits_enemy(bullet: &Bullet, bullet_size: f32, enemy: &Enemy) -> bool {
    Aabb::square(bullet.pos, bullet_size).overlaps(&enemy.aabb())
}

/// Is the player touching this star?
pub fn player_touches_star(player: &Player, star: &Star) -> bool {
    player.aabb().overlaps(&star.aabb())
}

/// Is the player touching the enemy? (terminal)
pub fn player_touches_enemy(player: &Player, enemy: &Enemy) -> bool {
    player.aabb().overlaps(&enemy.aabb())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Direction;

    fn enemy_at(x: f32, y: f32) -> Enemy {
        Enemy {
            pos: Vec2::new(x, y),
            direction: Direction::Right,
            size: 30.0,
            speed: 3.0,
        }
    }

    #[test]
    fn test_overlap_basic() {
        let a = Aabb::square(Vec2::new(0.0, 0.0), 10.0);
        let b = Aabb::square(Vec2::new(5.0, 5.0), 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Aabb::square(Vec2::new(0.0, 0.0), 10.0);
        let right = Aabb::square(Vec2::new(10.0, 0.0), 10.0);
        let below = Aabb::square(Vec2::new(0.0, 10.0), 10.0);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_separated_on_one_axis() {
        let a = Aabb::square(Vec2::new(0.0, 0.0), 10.0);
        // Overlaps horizontally, far apart vertically
        let b = Aabb::square(Vec2::new(5.0, 50.0), 10.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = Aabb::square(Vec2::new(0.0, 0.0), 100.0);
        let inner = Aabb::new(Vec2::new(40.0, 40.0), Vec2::new(2.0, 3.0));
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_bullet_enemy() {
        let enemy = enemy_at(100.0, 100.0);
        let hit = Bullet { pos: Vec2::new(95.0, 110.0) };
        let miss = Bullet { pos: Vec2::new(92.0, 110.0) };
        assert!(bullet_hits_enemy(&hit, 8.0, &enemy));
        assert!(!bullet_hits_enemy(&miss, 8.0, &enemy));
    }

    #[test]
    fn test_player_star_and_enemy() {
        let player = Player {
            pos: Vec2::new(380.0, 560.0),
            vel_y: 0.0,
            size: 40.0,
        };
        let star = Star {
            pos: Vec2::new(400.0, 545.0),
            size: 20.0,
        };
        assert!(player_touches_star(&player, &star));
        assert!(player_touches_enemy(&player, &enemy_at(415.0, 575.0)));
        assert!(!player_touches_enemy(&player, &enemy_at(420.0, 575.0)));
    }
}
