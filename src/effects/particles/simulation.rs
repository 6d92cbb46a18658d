// SPDX-License-Identifier: MPL-2.0
//! Particle integration and the pairwise connection pass.
//!
//! The connection pass compares every unordered pair, so a frame costs
//! O(N²). That is fine for the hundred-or-so particles a backdrop needs and
//! is not meant to scale further; the particle count is capped in config.

use super::config::ParticleConfig;
use iced::{Point, Size, Vector};
use rand::Rng;

/// A single moving point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Point,
    pub velocity: Vector,
    /// Circle radius, fixed at creation.
    pub size: f32,
}

/// Two particles close enough to be joined by a line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    /// Index of the earlier particle.
    pub from: usize,
    /// Index of the later particle (`to > from`).
    pub to: usize,
    pub distance: f32,
}

impl Connection {
    /// Line opacity: linear falloff from `base_alpha` at distance 0 to 0 at `max_distance`.
    #[must_use]
    pub fn alpha(&self, max_distance: f32, base_alpha: f32) -> f32 {
        (1.0 - self.distance / max_distance) * base_alpha
    }
}

/// Owns the particles of one drawing surface.
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    particles: Vec<Particle>,
    size: Size,
}

impl Simulation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards every particle and seeds a fresh batch for a surface of `size`.
    ///
    /// A surface with no area holds no particles.
    pub fn reset<R: Rng>(&mut self, size: Size, config: &ParticleConfig, rng: &mut R) {
        self.size = size;
        self.particles.clear();

        if !(size.width > 0.0 && size.height > 0.0) {
            return;
        }

        let speed = config.speed.abs();
        self.particles.extend((0..config.count).map(|_| Particle {
            position: Point::new(
                rng.random_range(0.0..size.width),
                rng.random_range(0.0..size.height),
            ),
            velocity: Vector::new(
                rng.random_range(-speed..=speed),
                rng.random_range(-speed..=speed),
            ),
            size: rng.random_range(config.size_min..=config.size_max),
        }));
    }

    /// Drops all particles, keeping nothing alive after teardown.
    pub fn clear(&mut self) {
        self.particles.clear();
        self.size = Size::ZERO;
    }

    /// Advances every particle by one frame.
    pub fn step(&mut self, config: &ParticleConfig, pointer: Option<Point>) {
        let Size { width, height } = self.size;

        for particle in &mut self.particles {
            if let (Some(attraction), Some(pointer)) = (config.attraction, pointer) {
                let delta = pointer - particle.position;
                let distance = delta.x.hypot(delta.y);
                if distance > 0.0 && distance < attraction.radius {
                    let force = (attraction.radius - distance) / attraction.radius;
                    particle.velocity = particle.velocity
                        + Vector::new(delta.x / distance, delta.y / distance)
                            * (force * attraction.strength);
                }
            }

            particle.velocity = particle.velocity * config.damping;
            particle.position = particle.position + particle.velocity;

            reflect(&mut particle.position.x, &mut particle.velocity.x, width);
            reflect(&mut particle.position.y, &mut particle.velocity.y, height);
        }
    }

    /// Every unordered pair closer than `max_distance`, each reported once.
    pub fn connections(&self, max_distance: f32) -> impl Iterator<Item = Connection> + '_ {
        self.particles
            .iter()
            .enumerate()
            .flat_map(move |(from, a)| {
                self.particles[from + 1..]
                    .iter()
                    .enumerate()
                    .filter_map(move |(offset, b)| {
                        let distance = a.position.distance(b.position);
                        (distance < max_distance).then_some(Connection {
                            from,
                            to: from + 1 + offset,
                            distance,
                        })
                    })
            })
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Size of the surface the particles were seeded for.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }
}

/// Negates `velocity` when `position` left `[0, limit)`, then clamps it back in.
fn reflect(position: &mut f32, velocity: &mut f32, limit: f32) {
    if *position < 0.0 || *position >= limit {
        *velocity = -*velocity;
        *position = position.clamp(0.0, largest_below(limit));
    }
}

/// The greatest `f32` strictly less than `limit` (for positive, finite `limit`).
fn largest_below(limit: f32) -> f32 {
    if limit > 0.0 && limit.is_finite() {
        f32::from_bits(limit.to_bits() - 1)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::particles::config::Attraction;
    use crate::test_utils::{assert_abs_diff_eq, seeded_rng, F32_EPSILON};

    fn lone_particle(position: Point, velocity: Vector, size: Size) -> Simulation {
        Simulation {
            particles: vec![Particle {
                position,
                velocity,
                size: 1.0,
            }],
            size,
        }
    }

    fn still_config() -> ParticleConfig {
        ParticleConfig {
            attraction: None,
            damping: 1.0,
            ..ParticleConfig::field()
        }
    }

    #[test]
    fn reset_seeds_particles_inside_bounds_with_ranges() {
        let config = ParticleConfig::field();
        let mut sim = Simulation::new();
        sim.reset(Size::new(640.0, 480.0), &config, &mut seeded_rng(7));

        assert_eq!(sim.particles().len(), config.count);
        for p in sim.particles() {
            assert!((0.0..640.0).contains(&p.position.x));
            assert!((0.0..480.0).contains(&p.position.y));
            assert!(p.velocity.x.abs() <= 0.25 && p.velocity.y.abs() <= 0.25);
            assert!((1.0..=3.0).contains(&p.size));
        }
    }

    #[test]
    fn reset_on_zero_area_surface_is_empty() {
        let mut sim = Simulation::new();
        sim.reset(Size::new(0.0, 300.0), &ParticleConfig::field(), &mut seeded_rng(1));
        assert!(sim.particles().is_empty());
    }

    #[test]
    fn reset_replaces_previous_particles() {
        let config = ParticleConfig::field();
        let mut sim = Simulation::new();
        sim.reset(Size::new(800.0, 600.0), &config, &mut seeded_rng(3));
        sim.reset(Size::new(100.0, 50.0), &config, &mut seeded_rng(4));

        assert_eq!(sim.size(), Size::new(100.0, 50.0));
        assert_eq!(sim.particles().len(), config.count);
        assert!(sim
            .particles()
            .iter()
            .all(|p| p.position.x < 100.0 && p.position.y < 50.0));
    }

    #[test]
    fn positions_stay_in_bounds_for_many_frames() {
        let size = Size::new(320.0, 200.0);
        let config = ParticleConfig {
            speed: 25.0,
            ..ParticleConfig::field()
        };
        let mut sim = Simulation::new();
        sim.reset(size, &config, &mut seeded_rng(42));

        for frame in 0..500 {
            let pointer = Point::new((frame % 320) as f32, 100.0);
            sim.step(&config, Some(pointer));
            for p in sim.particles() {
                assert!(p.position.x >= 0.0 && p.position.x < size.width);
                assert!(p.position.y >= 0.0 && p.position.y < size.height);
            }
        }
    }

    #[test]
    fn crossing_right_edge_flips_x_velocity_once() {
        let size = Size::new(100.0, 100.0);
        let mut sim = lone_particle(Point::new(99.5, 50.0), Vector::new(1.0, 0.0), size);
        let config = still_config();

        sim.step(&config, None);
        let p = sim.particles()[0];
        assert_eq!(p.velocity.x, -1.0);
        assert_eq!(p.velocity.y, 0.0);
        assert!(p.position.x < 100.0);

        // Heading back inward: no second flip.
        sim.step(&config, None);
        assert_eq!(sim.particles()[0].velocity.x, -1.0);
    }

    #[test]
    fn crossing_top_edge_flips_y_velocity() {
        let size = Size::new(100.0, 100.0);
        let mut sim = lone_particle(Point::new(50.0, 0.2), Vector::new(0.0, -0.5), size);

        sim.step(&still_config(), None);
        let p = sim.particles()[0];
        assert_eq!(p.velocity.y, 0.5);
        assert_eq!(p.position.y, 0.0);
    }

    #[test]
    fn damping_scales_velocity() {
        let size = Size::new(100.0, 100.0);
        let mut sim = lone_particle(Point::new(50.0, 50.0), Vector::new(0.2, -0.1), size);
        let config = ParticleConfig {
            attraction: None,
            ..ParticleConfig::field()
        };

        sim.step(&config, None);
        let p = sim.particles()[0];
        assert_abs_diff_eq!(p.velocity.x, 0.198, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(p.velocity.y, -0.099, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(p.position.x, 50.198, epsilon = 1e-4);
    }

    #[test]
    fn pointer_within_radius_attracts() {
        let size = Size::new(500.0, 500.0);
        let mut sim = lone_particle(Point::new(100.0, 100.0), Vector::new(0.0, 0.0), size);
        let config = ParticleConfig {
            damping: 1.0,
            attraction: Some(Attraction {
                radius: 200.0,
                strength: 0.02,
            }),
            ..ParticleConfig::field()
        };

        // Pointer 100 units to the right: force (200-100)/200 = 0.5.
        sim.step(&config, Some(Point::new(200.0, 100.0)));
        let p = sim.particles()[0];
        assert_abs_diff_eq!(p.velocity.x, 0.01, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(p.velocity.y, 0.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn pointer_outside_radius_or_on_top_is_ignored() {
        let size = Size::new(500.0, 500.0);
        let config = ParticleConfig {
            damping: 1.0,
            ..ParticleConfig::field()
        };

        let mut far = lone_particle(Point::new(10.0, 10.0), Vector::new(0.0, 0.0), size);
        far.step(&config, Some(Point::new(400.0, 400.0)));
        assert_eq!(far.particles()[0].velocity, Vector::new(0.0, 0.0));

        let mut on_top = lone_particle(Point::new(10.0, 10.0), Vector::new(0.0, 0.0), size);
        on_top.step(&config, Some(Point::new(10.0, 10.0)));
        let p = on_top.particles()[0];
        assert!(p.velocity.x.is_finite() && p.velocity.y.is_finite());
        assert_eq!(p.velocity, Vector::new(0.0, 0.0));
    }

    #[test]
    fn connections_are_unique_and_symmetric() {
        let config = ParticleConfig::field();
        let mut sim = Simulation::new();
        sim.reset(Size::new(400.0, 300.0), &config, &mut seeded_rng(11));

        let connections: Vec<_> = sim.connections(config.connection_distance).collect();
        assert!(!connections.is_empty());

        for c in &connections {
            assert!(c.from < c.to);
            let a = sim.particles()[c.from].position;
            let b = sim.particles()[c.to].position;
            assert_eq!(a.distance(b), b.distance(a));
            assert_eq!(c.distance, a.distance(b));
            assert!(c.distance < config.connection_distance);
        }

        let mut pairs: Vec<_> = connections.iter().map(|c| (c.from, c.to)).collect();
        pairs.sort_unstable();
        pairs.dedup();
        assert_eq!(pairs.len(), connections.len());
    }

    #[test]
    fn connection_alpha_falls_off_linearly() {
        let c = Connection {
            from: 0,
            to: 1,
            distance: 75.0,
        };
        assert_abs_diff_eq!(c.alpha(150.0, 0.3), 0.15, epsilon = F32_EPSILON);

        let touching = Connection { distance: 0.0, ..c };
        assert_abs_diff_eq!(touching.alpha(150.0, 0.3), 0.3, epsilon = F32_EPSILON);
    }

    #[test]
    fn largest_below_is_strictly_smaller() {
        let below = largest_below(100.0);
        assert!(below < 100.0);
        assert!(below > 99.999);
        assert_eq!(largest_below(0.0), 0.0);
    }
}
