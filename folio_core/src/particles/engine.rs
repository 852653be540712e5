use std::time::Instant;

use tracing::debug;

use super::config::EngineConfig;
use super::input::{InputAdapter, PointerSource, PointerState};
use super::render::{render_frame, Surface};
use super::store::ParticleStore;
use super::update::update_particle;
use super::{Bounds, Vec2};
use crate::theme::ThemeMode;

/// One self-contained particle simulation bound to one drawing surface.
#[derive(Debug)]
pub struct ParticleEngine {
    config: EngineConfig,
    store: ParticleStore,
    input: InputAdapter,
    bounds: Bounds,
    theme: ThemeMode,
    started: Instant,
    elapsed_secs: f32,
    frames: u64,
}

impl ParticleEngine {
    pub fn new(config: EngineConfig, bounds: Bounds, theme: ThemeMode) -> Self {
        Self::with_store(config, bounds, theme, ParticleStore::new())
    }

    /// Engine with a seeded store, for reproducible runs.
    pub fn with_seed(config: EngineConfig, bounds: Bounds, theme: ThemeMode, seed: u64) -> Self {
        Self::with_store(config, bounds, theme, ParticleStore::with_seed(seed))
    }

    fn with_store(
        config: EngineConfig,
        bounds: Bounds,
        theme: ThemeMode,
        mut store: ParticleStore,
    ) -> Self {
        let count = config.population_for(bounds);
        store.initialize(count, bounds, &config, theme);
        debug!(
            variant = config.variant.name(),
            count,
            width = bounds.width,
            height = bounds.height,
            "particle engine initialized"
        );

        Self {
            input: InputAdapter::new(config.emission),
            config,
            store,
            bounds,
            theme,
            started: Instant::now(),
            elapsed_secs: 0.0,
            frames: 0,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn store(&self) -> &ParticleStore {
        &self.store
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn pointer_state(&self) -> PointerState {
        self.input.state()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Recomputes the surface dimensions. Particles outside the new bounds
    /// wrap back in on the next step.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        match self.input.on_resize(width, height) {
            Some(bounds) => {
                self.bounds = bounds;
                true
            }
            None => false,
        }
    }

    pub fn set_theme(&mut self, theme: ThemeMode) {
        if self.theme != theme {
            self.theme = theme;
            self.store.recolor(&self.config, theme);
        }
    }

    /// Mouse sample in viewport space. Returns the number of injected particles.
    pub fn pointer_moved(&mut self, position: Vec2, now: Instant) -> usize {
        self.pointer_sample(position, PointerSource::Mouse, now)
    }

    /// Touch sample in viewport space. Returns the number of injected particles.
    pub fn touch_moved(&mut self, position: Vec2, now: Instant) -> usize {
        self.pointer_sample(position, PointerSource::Touch, now)
    }

    fn pointer_sample(&mut self, position: Vec2, source: PointerSource, now: Instant) -> usize {
        let count = self.input.on_pointer_move(position, source, now);
        if count > 0 {
            self.store.add(position, count, &self.config, self.theme);
        }
        count
    }

    /// Update step for every particle, then drops the expired ones.
    pub fn step(&mut self, now: Instant) {
        self.input.poll_idle(now);
        self.elapsed_secs = now.saturating_duration_since(self.started).as_secs_f32();

        let pointer = self.input.pointer();
        for particle in self.store.particles_mut() {
            update_particle(particle, &self.config, pointer, self.bounds);
        }
        self.store.prune(&self.config);
        self.frames += 1;
    }

    /// Render step. Draws nothing and returns `false` without a surface.
    pub fn render<S: Surface + ?Sized>(&self, surface: Option<&mut S>) -> bool {
        let Some(surface) = surface else {
            return false;
        };
        render_frame(
            surface,
            self.store.particles(),
            &self.config,
            self.theme,
            self.bounds,
            self.elapsed_secs,
        );
        true
    }

    /// Full frame. A missing surface skips the whole frame, update included.
    pub fn frame<S: Surface + ?Sized>(&mut self, now: Instant, surface: Option<&mut S>) -> bool {
        let Some(surface) = surface else {
            return false;
        };
        self.step(now);
        self.render(Some(surface))
    }
}
