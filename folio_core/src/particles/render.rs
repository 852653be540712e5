//! Drawing against an abstract 2D surface so the same render step feeds the
//! desktop canvas and the recording surfaces used in tests.

use super::config::{Backdrop, EngineConfig, WavyLines};
use super::{Bounds, Particle, Vec2};
use crate::theme::{Rgba, ThemeMode};

/// A 2D drawing target of known pixel size.
pub trait Surface {
    /// Erases everything drawn so far.
    fn clear(&mut self);

    fn fill_rect(&mut self, origin: Vec2, size: Bounds, color: Rgba);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Circle drawn in a frame rotated by `angle` radians around `center`.
    fn fill_circle_rotated(&mut self, center: Vec2, radius: f32, _angle: f32, color: Rgba) {
        self.fill_circle(center, radius, color);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32);

    fn stroke_polyline(&mut self, points: &[Vec2], color: Rgba, width: f32) {
        for pair in points.windows(2) {
            self.stroke_line(pair[0], pair[1], color, width);
        }
    }
}

/// Line opacity for two particles `distance` apart: `1 - d/max` inside the
/// threshold, zero at or beyond it.
pub fn connection_opacity(distance: f32, max_distance: f32) -> f32 {
    if max_distance <= 0.0 || distance.is_nan() || distance >= max_distance {
        return 0.0;
    }
    (1.0 - distance.max(0.0) / max_distance).clamp(0.0, 1.0)
}

/// Clears or fades the surface, then draws the wavy grid when configured.
pub fn draw_backdrop<S: Surface + ?Sized>(
    surface: &mut S,
    bounds: Bounds,
    config: &EngineConfig,
    elapsed_secs: f32,
) {
    match config.backdrop {
        Backdrop::Clear => surface.clear(),
        Backdrop::Fade { color } => surface.fill_rect(Vec2::ZERO, bounds, color),
    }
    if let Some(wavy) = config.wavy_lines {
        draw_wavy_lines(surface, bounds, &wavy, elapsed_secs);
    }
}

/// Each line starts on the surface edge, then follows the displaced samples.
pub fn draw_wavy_lines<S: Surface + ?Sized>(
    surface: &mut S,
    bounds: Bounds,
    wavy: &WavyLines,
    elapsed_secs: f32,
) {
    if wavy.spacing <= 0.0 || wavy.sample_step <= 0.0 {
        return;
    }
    let phase = elapsed_secs * wavy.speed;
    let mut points = Vec::new();

    let mut y = 0.0;
    while y < bounds.height {
        points.clear();
        points.push(Vec2::new(0.0, y));
        let mut x = 0.0;
        while x < bounds.width {
            let wave = (x * wavy.frequency + phase).sin() * wavy.amplitude;
            points.push(Vec2::new(x, y + wave));
            x += wavy.sample_step;
        }
        surface.stroke_polyline(&points, wavy.color, wavy.line_width);
        y += wavy.spacing;
    }

    let mut x = 0.0;
    while x < bounds.width {
        points.clear();
        points.push(Vec2::new(x, 0.0));
        let mut y = 0.0;
        while y < bounds.height {
            let wave = (y * wavy.frequency + phase).sin() * wavy.amplitude;
            points.push(Vec2::new(x + wave, y));
            y += wavy.sample_step;
        }
        surface.stroke_polyline(&points, wavy.color, wavy.line_width);
        x += wavy.spacing;
    }
}

pub fn draw_particle<S: Surface + ?Sized>(
    surface: &mut S,
    particle: &Particle,
    config: &EngineConfig,
) {
    let color = match config.decay {
        Some(_) if particle.max_life.is_finite() && particle.max_life > 0.0 => {
            particle.color.scale_alpha(1.0 - particle.age as f32 / particle.max_life)
        }
        _ => particle.color,
    };
    if color.a <= 0.0 || particle.size <= 0.0 {
        return;
    }

    if config.spawn.spin > 0.0 {
        surface.fill_circle_rotated(particle.position, particle.size, particle.angle, color);
    } else {
        surface.fill_circle(particle.position, particle.size, color);
    }
}

/// Joins every pair of particles closer than the configured threshold.
///
/// Quadratic in the particle count; populations are capped to keep this
/// affordable per frame.
pub fn draw_connections<S: Surface + ?Sized>(
    surface: &mut S,
    particles: &[Particle],
    config: &EngineConfig,
    theme: ThemeMode,
) {
    let Some(connections) = config.connections else {
        return;
    };
    let base = config.palette.color_for(theme);

    for (a, first) in particles.iter().enumerate() {
        for second in &particles[a + 1..] {
            let distance = first.position.distance(second.position);
            let opacity = connection_opacity(distance, connections.max_distance);
            if opacity > 0.0 {
                surface.stroke_line(
                    first.position,
                    second.position,
                    base.with_alpha(opacity * connections.alpha_scale),
                    connections.line_width,
                );
            }
        }
    }
}

/// One full frame: backdrop, particles, then the connection pass.
pub fn render_frame<S: Surface + ?Sized>(
    surface: &mut S,
    particles: &[Particle],
    config: &EngineConfig,
    theme: ThemeMode,
    bounds: Bounds,
    elapsed_secs: f32,
) {
    draw_backdrop(surface, bounds, config, elapsed_secs);
    for particle in particles {
        draw_particle(surface, particle, config);
    }
    draw_connections(surface, particles, config, theme);
}


#[cfg(test)]
mod tests {
    use super::recording::{Command, RecordingSurface};
    use super::*;

    fn dot(x: f32, y: f32) -> Particle {
        Particle::new(Vec2::new(x, y), Vec2::ZERO, 1.0, Rgba::from_rgba8(157, 78, 221, 0.3))
    }

    #[test]
    fn test_connection_opacity_decreases_with_distance() {
        let mut previous = connection_opacity(0.0, 150.0);
        assert_eq!(previous, 1.0);
        for step in 1..=200 {
            let current = connection_opacity(step as f32, 150.0);
            assert!(current <= previous);
            previous = current;
        }
        assert_eq!(connection_opacity(150.0, 150.0), 0.0);
        assert_eq!(connection_opacity(151.0, 150.0), 0.0);
        assert_eq!(connection_opacity(f32::NAN, 150.0), 0.0);
        assert!((connection_opacity(75.0, 150.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_connections_only_join_close_pairs() {
        let config = EngineConfig::ambient();
        let particles = vec![dot(0.0, 0.0), dot(100.0, 0.0), dot(400.0, 0.0)];
        let mut surface = RecordingSurface::default();

        draw_connections(&mut surface, &particles, &config, ThemeMode::Dark);

        let lines = surface.lines();
        assert_eq!(lines.len(), 1);
        match lines[0] {
            Command::Line { from, to, color } => {
                assert_eq!(*from, Vec2::new(0.0, 0.0));
                assert_eq!(*to, Vec2::new(100.0, 0.0));
                let expected = (1.0 - 100.0 / 150.0) * 0.15;
                assert!((color.a - expected).abs() < 1e-6);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_connection_colour_follows_theme() {
        let config = EngineConfig::ambient();
        let particles = vec![dot(0.0, 0.0), dot(10.0, 0.0)];
        let mut surface = RecordingSurface::default();

        draw_connections(&mut surface, &particles, &config, ThemeMode::Light);

        match surface.lines()[0] {
            Command::Line { color, .. } => assert_eq!(color.b, config.palette.light.b),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_trail_alpha_fades_with_age() {
        let config = EngineConfig::trail();
        let mut particle = dot(5.0, 5.0);
        particle.color = particle.color.with_alpha(1.0);
        particle.max_life = 20.0;
        particle.age = 5;
        let mut surface = RecordingSurface::default();

        draw_particle(&mut surface, &particle, &config);

        match &surface.commands[0] {
            Command::Circle { color, rotated, .. } => {
                assert!((color.a - 0.75).abs() < 1e-6);
                assert!(!rotated);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_ambient_particles_are_drawn_rotated() {
        let config = EngineConfig::ambient();
        let mut surface = RecordingSurface::default();
        draw_particle(&mut surface, &dot(1.0, 1.0), &config);
        assert!(matches!(surface.commands[0], Command::Circle { rotated: true, .. }));
    }

    #[test]
    fn test_hero_frame_fades_and_draws_grid() {
        let config = EngineConfig::hero();
        let bounds = Bounds::new(250.0, 150.0);
        let particles = vec![dot(10.0, 10.0), dot(20.0, 10.0)];
        let mut surface = RecordingSurface::default();

        render_frame(&mut surface, &particles, &config, ThemeMode::Dark, bounds, 0.5);

        assert!(matches!(surface.commands[0], Command::Rect { .. }));
        assert!(!surface.commands.contains(&Command::Clear));
        assert_eq!(surface.circles(), 2);
        // Two horizontal lines of 25 segments, three vertical of 15, one connection.
        assert_eq!(surface.lines().len(), 2 * 25 + 3 * 15 + 1);
    }

    #[test]
    fn test_wavy_lines_start_on_the_edge() {
        let Some(wavy) = EngineConfig::hero().wavy_lines else {
            panic!("hero preset has no wavy lines");
        };
        let mut surface = RecordingSurface::default();

        draw_wavy_lines(&mut surface, Bounds::new(250.0, 150.0), &wavy, 0.5);

        let lines = surface.lines();
        let wave = 0.5f32.sin() * wavy.amplitude;
        match lines[0] {
            Command::Line { from, to, .. } => {
                assert_eq!(*from, Vec2::new(0.0, 0.0));
                assert!((to.y - wave).abs() < 1e-4);
            }
            other => panic!("unexpected command {other:?}"),
        }
        // Second horizontal line, then the vertical line at x = 100.
        assert!(matches!(lines[25], Command::Line { from, .. } if *from == Vec2::new(0.0, 100.0)));
        assert!(matches!(lines[65], Command::Line { from, .. } if *from == Vec2::new(100.0, 0.0)));
    }

    #[test]
    fn test_clear_backdrop_comes_first() {
        let config = EngineConfig::ambient();
        let mut surface = RecordingSurface::default();
        render_frame(&mut surface, &[], &config, ThemeMode::Dark, Bounds::new(10.0, 10.0), 0.0);
        assert_eq!(surface.commands, vec![Command::Clear]);
    }
}
