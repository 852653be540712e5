use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::EngineConfig;
use super::update::is_expired;
use super::{Bounds, Particle, Vec2};
use crate::theme::ThemeMode;

/// The active particles of one engine instance.
#[derive(Debug)]
pub struct ParticleStore {
    particles: Vec<Particle>,
    rng: StdRng,
}

impl Default for ParticleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ParticleStore {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic store for tests and reproducible demos.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Replaces the contents with `count` particles scattered over `bounds`.
    pub fn initialize(
        &mut self,
        count: usize,
        bounds: Bounds,
        config: &EngineConfig,
        theme: ThemeMode,
    ) {
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let position = Vec2::new(
                random_in(&mut self.rng, bounds.width),
                random_in(&mut self.rng, bounds.height),
            );
            let particle = spawn(&mut self.rng, position, config, theme);
            self.particles.push(particle);
        }
    }

    /// Appends `count` particles at `position`.
    pub fn add(&mut self, position: Vec2, count: usize, config: &EngineConfig, theme: ThemeMode) {
        for _ in 0..count {
            let particle = spawn(&mut self.rng, position, config, theme);
            self.particles.push(particle);
        }
    }

    /// Drops expired particles. Returns how many were removed.
    pub fn prune(&mut self, config: &EngineConfig) -> usize {
        if config.decay.is_none() {
            return 0;
        }
        let before = self.particles.len();
        self.particles.retain(|p| !is_expired(p, config));
        before - self.particles.len()
    }

    /// Swaps every particle's base colour for the theme's, keeping its alpha.
    pub fn recolor(&mut self, config: &EngineConfig, theme: ThemeMode) {
        let base = config.palette.color_for(theme);
        for particle in &mut self.particles {
            particle.color = base.with_alpha(particle.color.a);
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }
}

fn random_in(rng: &mut StdRng, extent: f32) -> f32 {
    if extent > 0.0 {
        rng.gen_range(0.0..extent)
    } else {
        0.0
    }
}

fn symmetric(rng: &mut StdRng, half_range: f32) -> f32 {
    if half_range > 0.0 {
        rng.gen_range(-half_range..half_range)
    } else {
        0.0
    }
}

fn spawn(rng: &mut StdRng, position: Vec2, config: &EngineConfig, theme: ThemeMode) -> Particle {
    let spawn = &config.spawn;
    let size = spawn.size_min + rng.gen::<f32>() * spawn.size_spread;
    let velocity = Vec2::new(symmetric(rng, spawn.speed), symmetric(rng, spawn.speed));
    let alpha = spawn.alpha_min + rng.gen::<f32>() * spawn.alpha_spread;

    let mut particle = Particle::new(
        position,
        velocity,
        size,
        config.palette.color_for(theme).with_alpha(alpha),
    );

    if spawn.spin > 0.0 {
        particle.angle = rng.gen_range(0.0..std::f32::consts::TAU);
        particle.spin = symmetric(rng, spawn.spin);
    }
    if let Some(decay) = config.decay {
        particle.max_life = decay.life_min + rng.gen::<f32>() * decay.life_spread;
    }
    particle
}
