use std::time::Instant;

use folio_core::particles::{
    AnimationLoop, Bounds, EngineConfig, FrameOutcome, Host, ListenerKind, ParticleEngine, Vec2,
};
use folio_core::theme::ThemeMode;
use iced::widget::canvas;
use iced::Point;

/// A mounted particle engine plus the canvas cache it renders into.
#[derive(Debug)]
pub struct ParticleLayer {
    animation: AnimationLoop,
    pub cache: canvas::Cache,
}

impl ParticleLayer {
    /// Builds an engine for `bounds` and mounts it on `host`.
    pub fn mount<H: Host + ?Sized>(
        config: EngineConfig,
        bounds: Bounds,
        theme: ThemeMode,
        host: &mut H,
    ) -> Self {
        let engine = ParticleEngine::new(config, bounds, theme);
        Self {
            animation: AnimationLoop::mount(engine, host),
            cache: canvas::Cache::default(),
        }
    }

    pub fn engine(&self) -> &ParticleEngine {
        self.animation.engine()
    }

    pub fn is_running(&self) -> bool {
        self.animation.is_running()
    }

    /// Steps the simulation and invalidates the cached drawing.
    pub fn advance<H: Host + ?Sized>(&mut self, host: &mut H, now: Instant) -> FrameOutcome {
        let outcome = self.animation.advance(host, now);
        if outcome != FrameOutcome::Stopped {
            self.cache.clear();
        }
        outcome
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        if self.animation.listens_to(ListenerKind::Resize)
            && self.animation.engine_mut().resize(width, height)
        {
            self.cache.clear();
        }
    }

    pub fn pointer_moved(&mut self, position: Point, now: Instant) -> usize {
        if !self.animation.listens_to(ListenerKind::PointerMove) {
            return 0;
        }
        self.animation
            .engine_mut()
            .pointer_moved(Vec2::new(position.x, position.y), now)
    }

    pub fn touch_moved(&mut self, position: Point, now: Instant) -> usize {
        if !self.animation.listens_to(ListenerKind::TouchMove) {
            return 0;
        }
        self.animation
            .engine_mut()
            .touch_moved(Vec2::new(position.x, position.y), now)
    }

    pub fn set_theme(&mut self, theme: ThemeMode) {
        self.animation.engine_mut().set_theme(theme);
        self.cache.clear();
    }

    pub fn teardown<H: Host + ?Sized>(&mut self, host: &mut H) {
        self.animation.teardown(host);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::FrameHost;
    use std::time::Duration;

    #[test]
    fn test_trail_layer_emits_on_touch() {
        let mut host = FrameHost::new();
        let mut layer = ParticleLayer::mount(
            EngineConfig::trail(),
            Bounds::new(800.0, 600.0),
            ThemeMode::Dark,
            &mut host,
        );
        let now = Instant::now();

        assert_eq!(layer.touch_moved(Point::new(10.0, 10.0), now), 0);
        assert_eq!(layer.touch_moved(Point::new(40.0, 10.0), now), 3);
        assert_eq!(layer.engine().store().len(), 3);
    }

    #[test]
    fn test_hero_layer_ignores_pointer() {
        let mut host = FrameHost::new();
        let mut layer = ParticleLayer::mount(
            EngineConfig::hero(),
            Bounds::new(800.0, 600.0),
            ThemeMode::Dark,
            &mut host,
        );
        let before = layer.engine().store().len();
        let now = Instant::now();

        layer.pointer_moved(Point::new(10.0, 10.0), now);
        layer.pointer_moved(Point::new(300.0, 10.0), now);

        assert_eq!(layer.engine().store().len(), before);
        assert!(!host.is_attached(ListenerKind::PointerMove));
    }

    #[test]
    fn test_teardown_stops_frames() {
        let mut host = FrameHost::new();
        let mut layer = ParticleLayer::mount(
            EngineConfig::ambient(),
            Bounds::new(640.0, 480.0),
            ThemeMode::Light,
            &mut host,
        );
        let start = Instant::now();

        assert!(host.begin_frame());
        assert_eq!(layer.advance(&mut host, start), FrameOutcome::Continued);
        assert!(host.frame_requested());

        layer.teardown(&mut host);
        assert!(host.begin_frame());
        let later = start + Duration::from_millis(16);
        assert_eq!(layer.advance(&mut host, later), FrameOutcome::Stopped);
        assert!(!host.frame_requested());
        assert_eq!(host.listener_count(), 0);
    }

    #[test]
    fn test_dropped_layer_releases_listeners() {
        let mut host = FrameHost::new();
        let layer = ParticleLayer::mount(
            EngineConfig::trail(),
            Bounds::new(800.0, 600.0),
            ThemeMode::Dark,
            &mut host,
        );
        assert!(host.is_attached(ListenerKind::TouchMove));

        drop(layer);

        assert!(!host.is_attached(ListenerKind::TouchMove));
        assert!(!host.is_attached(ListenerKind::PointerMove));
        assert_eq!(host.listener_count(), 0);
    }
}
