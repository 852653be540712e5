//! Canvas particle effects: one parameterized engine for the ambient
//! background, the pointer trail and the hero fallback.

pub mod config;
pub mod driver;
pub mod engine;
pub mod input;
pub mod render;
pub mod store;
pub mod update;

use serde::{Deserialize, Serialize};

use crate::theme::Rgba;

pub use config::{
    Backdrop, Boundary, Connections, Decay, EngineConfig, Emission, Population, Repulsion, Spawn,
    Variant, WavyLines,
};
pub use driver::{
    AnimationLoop, CancellationToken, FrameOutcome, Host, ListenerId, ListenerKind,
};
pub use engine::ParticleEngine;
pub use input::{InputAdapter, PointerSource, PointerState};
pub use render::{connection_opacity, Surface};
pub use store::ParticleStore;
pub use update::{is_expired, update_particle};

/// 2D point or vector in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Vec2) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Pixel dimensions of a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0 && point.x < self.width && point.y >= 0.0 && point.y < self.height
    }
}

/// A single particle. Owned by exactly one [`ParticleStore`].
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    /// Resting size the ambient variant returns to away from the pointer.
    pub base_size: f32,
    pub color: Rgba,
    /// Rotation in radians (ambient spin effect).
    pub angle: f32,
    pub spin: f32,
    /// Frames since creation.
    pub age: u32,
    /// Frame budget for decaying variants; `f32::INFINITY` otherwise.
    pub max_life: f32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, size: f32, color: Rgba) -> Self {
        Self {
            position,
            velocity,
            size,
            base_size: size,
            color,
            angle: 0.0,
            spin: 0.0,
            age: 0,
            max_life: f32::INFINITY,
        }
    }
}
