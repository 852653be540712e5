use super::config::{Boundary, EngineConfig};
use super::{Bounds, Particle, Vec2};

/// Advances one particle by one frame.
pub fn update_particle(
    particle: &mut Particle,
    config: &EngineConfig,
    pointer: Option<Vec2>,
    bounds: Bounds,
) {
    particle.position.x += particle.velocity.x;
    particle.position.y += particle.velocity.y;
    particle.angle += particle.spin;

    if let Some(repulsion) = config.repulsion {
        let near = pointer.and_then(|pointer| {
            let dx = pointer.x - particle.position.x;
            let dy = pointer.y - particle.position.y;
            let distance = (dx * dx + dy * dy).sqrt();
            // A pointer exactly on the particle has no direction to push along.
            (distance > 0.0 && distance < repulsion.radius).then_some((dx, dy, distance))
        });

        match near {
            Some((dx, dy, distance)) => {
                let force = (repulsion.radius - distance) / repulsion.radius;
                particle.velocity.x -= dx / distance * force * repulsion.strength;
                particle.velocity.y -= dy / distance * force * repulsion.strength;
                particle.size = particle.base_size * (1.0 + force);
            }
            None => particle.size = particle.base_size,
        }
    }

    if let Some(max) = config.max_speed {
        particle.velocity.x = particle.velocity.x.clamp(-max, max);
        particle.velocity.y = particle.velocity.y.clamp(-max, max);
    }

    if let Some(decay) = config.decay {
        particle.age = particle.age.saturating_add(1);
        if particle.size > decay.min_size {
            particle.size -= decay.size_rate;
        }
    }
    particle.size = particle.size.max(0.0);

    if config.boundary == Boundary::Wrap {
        particle.position.x = wrap(particle.position.x, bounds.width);
        particle.position.y = wrap(particle.position.y, bounds.height);
    }
}

/// True once a decaying particle has outlived its budget or shrunk away.
pub fn is_expired(particle: &Particle, config: &EngineConfig) -> bool {
    match config.decay {
        Some(decay) => particle.age as f32 >= particle.max_life || particle.size <= decay.min_size,
        None => false,
    }
}

/// Maps `value` into `[0, extent)`.
fn wrap(value: f32, extent: f32) -> f32 {
    if extent <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs.
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Rgba;

    fn particle_at(x: f32, y: f32, vx: f32, vy: f32) -> Particle {
        Particle::new(Vec2::new(x, y), Vec2::new(vx, vy), 1.0, Rgba::from_rgb8(157, 78, 221))
    }

    #[test]
    fn test_wrap_to_opposite_edge() {
        let config = EngineConfig::hero();
        let bounds = Bounds::new(100.0, 50.0);

        let mut p = particle_at(99.5, 49.5, 1.0, 1.0);
        update_particle(&mut p, &config, None, bounds);
        assert!((p.position.x - 0.5).abs() < 1e-4);
        assert!((p.position.y - 0.5).abs() < 1e-4);

        let mut p = particle_at(0.2, 0.2, -1.0, -1.0);
        update_particle(&mut p, &config, None, bounds);
        assert!((p.position.x - 99.2).abs() < 1e-4);
        assert!((p.position.y - 49.2).abs() < 1e-4);
    }

    #[test]
    fn test_wrap_never_lands_on_far_edge() {
        assert_eq!(wrap(100.0, 100.0), 0.0);
        assert!(wrap(-1e-9, 100.0) < 100.0);
        assert_eq!(wrap(f32::NAN, 100.0), 0.0);
        assert_eq!(wrap(12.0, 0.0), 0.0);
        assert!((wrap(350.0, 100.0) - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_repulsion_pushes_away_and_grows() {
        let config = EngineConfig::ambient();
        let mut p = particle_at(100.0, 100.0, 0.0, 0.0);
        update_particle(&mut p, &config, Some(Vec2::new(150.0, 100.0)), Bounds::new(500.0, 500.0));

        // Pointer sits to the right, so the particle is pushed left.
        assert!(p.velocity.x < 0.0);
        assert_eq!(p.velocity.y, 0.0);
        assert!((p.velocity.x + 0.1).abs() < 1e-6);
        assert!((p.size - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_size_returns_to_base_outside_radius() {
        let config = EngineConfig::ambient();
        let mut p = particle_at(100.0, 100.0, 0.0, 0.0);
        p.size = 1.8;
        update_particle(&mut p, &config, Some(Vec2::new(400.0, 400.0)), Bounds::new(500.0, 500.0));
        assert_eq!(p.size, p.base_size);
        assert_eq!(p.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_pointer_on_particle_is_ignored() {
        let config = EngineConfig::ambient();
        let mut p = particle_at(10.0, 10.0, 0.0, 0.0);
        update_particle(&mut p, &config, Some(Vec2::new(10.0, 10.0)), Bounds::new(50.0, 50.0));
        assert!(p.velocity.x.is_finite() && p.velocity.y.is_finite());
    }

    #[test]
    fn test_velocity_is_clamped_for_ambient() {
        let config = EngineConfig::ambient();
        let mut p = particle_at(10.0, 10.0, 5.0, -7.0);
        update_particle(&mut p, &config, None, Bounds::new(50.0, 50.0));
        assert_eq!(p.velocity, Vec2::new(2.0, -2.0));
    }

    #[test]
    fn test_trail_decays_without_bounds() {
        let config = EngineConfig::trail();
        let mut p = particle_at(-20.0, 5000.0, -1.0, 1.0);
        p.size = 3.0;
        update_particle(&mut p, &config, None, Bounds::new(100.0, 100.0));

        assert_eq!(p.position, Vec2::new(-21.0, 5001.0));
        assert_eq!(p.age, 1);
        assert!((p.size - 2.9).abs() < 1e-6);
    }

    #[test]
    fn test_trail_particle_expires_by_size_or_age() {
        let config = EngineConfig::trail();
        let mut p = particle_at(0.0, 0.0, 0.0, 0.0);
        p.size = 0.5;
        p.max_life = 100.0;

        let mut frames = 0;
        while !is_expired(&p, &config) {
            update_particle(&mut p, &config, None, Bounds::default());
            frames += 1;
            assert!(frames < 10, "particle should shrink below the floor quickly");
        }
        assert!(p.size <= 0.2 + 1e-6);
        assert!(p.size >= 0.0);

        let mut old = particle_at(0.0, 0.0, 0.0, 0.0);
        old.size = 5.0;
        old.max_life = 12.0;
        old.age = 12;
        assert!(is_expired(&old, &config));
    }

    #[test]
    fn test_fixed_population_never_expires() {
        let config = EngineConfig::ambient();
        let mut p = particle_at(0.0, 0.0, 0.0, 0.0);
        p.size = 0.0;
        assert!(!is_expired(&p, &config));
    }
}
