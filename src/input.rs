//! Latched input shared with an external event source
//!
//! Movement and jump are level-triggered flags (true while held). Fire is
//! edge-triggered: each press queues exactly one bullet, consumed by the
//! next frame. Every flag is an independent atomic, so the event source can
//! write from another context while the frame reads.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use crate::sim::TickInput;

/// Held keys the simulation cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Jump,
}

impl Key {
    /// Map a key name from the platform layer (WASD or arrows)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "a" | "arrowleft" | "left" => Some(Key::Left),
            "d" | "arrowright" | "right" => Some(Key::Right),
            "w" | "arrowup" | "up" | " " | "space" => Some(Key::Jump),
            _ => None,
        }
    }
}

/// Last-write-wins key state plus pending fire presses
#[derive(Debug, Default)]
pub struct InputState {
    left: AtomicBool,
    right: AtomicBool,
    jump: AtomicBool,
    fire_presses: AtomicU32,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    fn flag(&self, key: Key) -> &AtomicBool {
        match key {
            Key::Left => &self.left,
            Key::Right => &self.right,
            Key::Jump => &self.jump,
        }
    }

    /// Key went down
    pub fn press(&self, key: Key) {
        self.flag(key).store(true, Ordering::Relaxed);
    }

    /// Key went up
    pub fn release(&self, key: Key) {
        self.flag(key).store(false, Ordering::Relaxed);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.flag(key).load(Ordering::Relaxed)
    }

    /// Primary button pressed: queue one bullet
    pub fn fire(&self) {
        self.fire_presses.fetch_add(1, Ordering::Relaxed);
    }

    /// Read held keys and take pending fire presses for this frame
    pub fn snapshot(&self) -> TickInput {
        TickInput {
            left: self.is_held(Key::Left),
            right: self.is_held(Key::Right),
            jump: self.is_held(Key::Jump),
            fire_presses: self.fire_presses.swap(0, Ordering::Relaxed),
        }
    }

    /// Drop everything (focus lost, new session)
    pub fn clear(&self) {
        for key in [Key::Left, Key::Right, Key::Jump] {
            self.release(key);
        }
        self.fire_presses.store(0, Ordering::Relaxed);
    }
}
