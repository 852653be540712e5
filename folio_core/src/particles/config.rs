//! Per-instance engine parameters. Each engine receives its own copy so the
//! three variants can be configured and tested independently.

use serde::{Deserialize, Serialize};

use super::driver::ListenerKind;
use super::Bounds;
use crate::theme::{Rgba, VariantPalette};

/// Which on-screen effect an engine drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Ambient,
    Trail,
    Hero,
}

impl Variant {
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Ambient => "ambient",
            Variant::Trail => "trail",
            Variant::Hero => "hero",
        }
    }
}

/// Fixed population derived from canvas area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Population {
    pub area_per_particle: f32,
    pub max: usize,
}

impl Population {
    /// `min(max, floor(area / area_per_particle))`
    pub fn count_for(&self, bounds: Bounds) -> usize {
        if self.area_per_particle <= 0.0 {
            return 0;
        }
        let count = (bounds.area() / self.area_per_particle).floor();
        (count as usize).min(self.max)
    }
}

/// Randomization ranges for newly created particles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spawn {
    pub size_min: f32,
    pub size_spread: f32,
    /// Each velocity axis is drawn from `-speed..speed`.
    pub speed: f32,
    pub alpha_min: f32,
    pub alpha_spread: f32,
    /// Spin per frame is drawn from `-spin..spin`; zero disables rotation.
    pub spin: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Boundary {
    /// Leaving one edge re-enters from the opposite edge.
    Wrap,
    /// No bounds; particles expire by age instead.
    Unbounded,
}

/// Pointer repulsion for the ambient variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Repulsion {
    pub radius: f32,
    pub strength: f32,
}

/// Size decay and lifetime for the trail variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Decay {
    pub size_rate: f32,
    pub min_size: f32,
    pub life_min: f32,
    pub life_spread: f32,
}

/// Constellation lines between nearby particles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Connections {
    pub max_distance: f32,
    pub alpha_scale: f32,
    pub line_width: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Backdrop {
    Clear,
    /// Translucent fill that leaves a short afterimage.
    Fade { color: Rgba },
}

/// Animated grid of sine-displaced lines behind the hero particles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WavyLines {
    pub spacing: f32,
    pub sample_step: f32,
    pub amplitude: f32,
    pub frequency: f32,
    /// Phase advance per second.
    pub speed: f32,
    pub color: Rgba,
    pub line_width: f32,
}

/// How pointer motion turns into new trail particles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Emission {
    pub mouse_step: f32,
    pub mouse_cap: usize,
    pub touch_step: f32,
    pub touch_cap: usize,
    pub idle_timeout_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub variant: Variant,
    pub palette: VariantPalette,
    #[serde(default)]
    pub population: Option<Population>,
    pub spawn: Spawn,
    pub boundary: Boundary,
    #[serde(default)]
    pub repulsion: Option<Repulsion>,
    /// Per-axis velocity clamp.
    #[serde(default)]
    pub max_speed: Option<f32>,
    #[serde(default)]
    pub decay: Option<Decay>,
    #[serde(default)]
    pub connections: Option<Connections>,
    pub backdrop: Backdrop,
    #[serde(default)]
    pub wavy_lines: Option<WavyLines>,
    #[serde(default)]
    pub emission: Option<Emission>,
}

const PURPLE: (u8, u8, u8) = (157, 78, 221);

fn purple() -> Rgba {
    Rgba::from_rgb8(PURPLE.0, PURPLE.1, PURPLE.2)
}

impl EngineConfig {
    /// Fixed-population background that drifts, spins and shies away from the pointer.
    pub fn ambient() -> Self {
        Self {
            variant: Variant::Ambient,
            palette: VariantPalette::new(purple(), Rgba::from_rgb8(77, 124, 254)),
            population: Some(Population {
                area_per_particle: 15_000.0,
                max: 100,
            }),
            spawn: Spawn {
                size_min: 0.5,
                size_spread: 2.0,
                speed: 0.5,
                alpha_min: 0.1,
                alpha_spread: 0.3,
                spin: 0.01,
            },
            boundary: Boundary::Wrap,
            repulsion: Some(Repulsion {
                radius: 100.0,
                strength: 0.2,
            }),
            max_speed: Some(2.0),
            decay: None,
            connections: Some(Connections {
                max_distance: 150.0,
                alpha_scale: 0.15,
                line_width: 1.0,
            }),
            backdrop: Backdrop::Clear,
            wavy_lines: None,
            emission: None,
        }
    }

    /// Pointer-following sparks that shrink and fade out.
    pub fn trail() -> Self {
        Self {
            variant: Variant::Trail,
            palette: VariantPalette::new(purple(), Rgba::from_rgb8(123, 44, 191)),
            population: None,
            spawn: Spawn {
                size_min: 1.0,
                size_spread: 5.0,
                speed: 1.0,
                alpha_min: 1.0,
                alpha_spread: 0.0,
                spin: 0.0,
            },
            boundary: Boundary::Unbounded,
            repulsion: None,
            max_speed: None,
            decay: Some(Decay {
                size_rate: 0.1,
                min_size: 0.2,
                life_min: 10.0,
                life_spread: 30.0,
            }),
            connections: None,
            backdrop: Backdrop::Clear,
            wavy_lines: None,
            emission: Some(Emission {
                mouse_step: 5.0,
                mouse_cap: 5,
                touch_step: 10.0,
                touch_cap: 3,
                idle_timeout_ms: 3_000,
            }),
        }
    }

    /// Denser constellation over a fading backdrop with wavy grid lines.
    pub fn hero() -> Self {
        Self {
            variant: Variant::Hero,
            palette: VariantPalette::fixed(purple()),
            population: Some(Population {
                area_per_particle: 10_000.0,
                max: 100,
            }),
            spawn: Spawn {
                size_min: 1.0,
                size_spread: 3.0,
                speed: 1.5,
                alpha_min: 0.2,
                alpha_spread: 0.5,
                spin: 0.0,
            },
            boundary: Boundary::Wrap,
            repulsion: None,
            max_speed: None,
            decay: None,
            connections: Some(Connections {
                max_distance: 150.0,
                alpha_scale: 0.2,
                line_width: 1.0,
            }),
            backdrop: Backdrop::Fade {
                color: Rgba::from_rgba8(5, 5, 16, 0.2),
            },
            wavy_lines: Some(WavyLines {
                spacing: 100.0,
                sample_step: 10.0,
                amplitude: 20.0,
                frequency: 0.01,
                speed: 1.0,
                color: purple().with_alpha(0.05),
                line_width: 2.0,
            }),
            emission: None,
        }
    }

    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Ambient => Self::ambient(),
            Variant::Trail => Self::trail(),
            Variant::Hero => Self::hero(),
        }
    }

    /// Initial population for a canvas of `bounds`; zero for input-driven variants.
    pub fn population_for(&self, bounds: Bounds) -> usize {
        self.population.map_or(0, |p| p.count_for(bounds))
    }

    /// Host events this configuration needs to react to.
    pub fn listeners(&self) -> Vec<ListenerKind> {
        let mut kinds = vec![ListenerKind::Resize];
        if self.repulsion.is_some() || self.emission.is_some() {
            kinds.push(ListenerKind::PointerMove);
        }
        if self.emission.is_some() {
            kinds.push(ListenerKind::TouchMove);
        }
        kinds
    }
}
