//! The particle population and its per-frame update.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::particle::{LINK_DISTANCE, LINK_MAX_ALPHA, PARTICLE_COUNT, Particle};
use crate::surface::{Size, Surface};

/// Alpha of the line joining two particles `distance` pixels apart.
///
/// Falls linearly from [`LINK_MAX_ALPHA`] at zero distance to exactly zero
/// at [`LINK_DISTANCE`], and stays zero beyond it.
pub fn link_alpha(distance: f64) -> f64 {
    if distance >= LINK_DISTANCE {
        0.0
    } else {
        LINK_MAX_ALPHA * (1.0 - distance / LINK_DISTANCE)
    }
}

/// A fixed population of particles bouncing inside a surface.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    size: Size,
}

impl ParticleField {
    /// Populate a field of [`PARTICLE_COUNT`] particles.
    pub fn new<R: Rng + ?Sized>(size: Size, rng: &mut R) -> Self {
        let (width, height) = (f64::from(size.width), f64::from(size.height));
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle::random(rng, width, height))
            .collect();
        Self { particles, size }
    }

    /// Populate deterministically from a seed.
    pub fn seeded(size: Size, seed: u64) -> Self {
        Self::new(size, &mut StdRng::seed_from_u64(seed))
    }

    /// Build a field from explicit particles.
    pub fn from_particles(size: Size, particles: Vec<Particle>) -> Self {
        Self { particles, size }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Track new surface bounds. Particles are left where they are.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
    }

    /// Advance every particle by one frame.
    pub fn step(&mut self) {
        let (width, height) = (f64::from(self.size.width), f64::from(self.size.height));
        for particle in &mut self.particles {
            particle.advance(width, height);
        }
    }

    /// Draw the current state: dots first, then links between close pairs.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear();

        for p in &self.particles {
            surface.fill_circle(p.x, p.y, p.radius, p.opacity);
        }

        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = a.distance(b);
                if distance < LINK_DISTANCE {
                    surface.stroke_line((a.x, a.y), (b.x, b.y), link_alpha(distance));
                }
            }
        }
    }

    /// One update-and-draw cycle.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.step();
        self.draw(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::MAX_SPEED;
    use crate::surface::RecordingSurface;

    const SIZE: Size = Size::new(800, 600);

    fn particle(x: f64, y: f64) -> Particle {
        Particle {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            radius: 1.0,
            opacity: 0.5,
        }
    }

    #[test]
    fn test_seeded_field_has_fixed_population() {
        let field = ParticleField::seeded(SIZE, 42);
        assert_eq!(field.particles().len(), PARTICLE_COUNT);
        assert_eq!(field.size(), SIZE);
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = ParticleField::seeded(SIZE, 9);
        let b = ParticleField::seeded(SIZE, 9);
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn test_one_frame_moves_by_velocity() {
        let mut field = ParticleField::seeded(SIZE, 1234);
        let initial = field.particles().to_vec();
        let mut surface = RecordingSurface::new(SIZE);

        field.frame(&mut surface);

        for (before, after) in initial.iter().zip(field.particles()) {
            assert_eq!(after.x, before.x + before.vx);
            assert_eq!(after.y, before.y + before.vy);
            assert_eq!(after.radius, before.radius);
            assert_eq!(after.opacity, before.opacity);
        }
        assert_eq!(surface.clears, 1);
        assert_eq!(surface.circles.len(), PARTICLE_COUNT);
    }

    #[test]
    fn test_overshoot_stays_bounded() {
        let mut field = ParticleField::seeded(SIZE, 99);
        let (w, h) = (f64::from(SIZE.width), f64::from(SIZE.height));
        for _ in 0..20_000 {
            field.step();
            for p in field.particles() {
                assert!(p.x >= -MAX_SPEED && p.x <= w + MAX_SPEED, "x drifted to {}", p.x);
                assert!(p.y >= -MAX_SPEED && p.y <= h + MAX_SPEED, "y drifted to {}", p.y);
            }
        }
    }

    #[test]
    fn test_resize_keeps_particles() {
        let mut field = ParticleField::seeded(SIZE, 5);
        let before = field.particles().to_vec();
        field.resize(Size::new(100, 100));
        assert_eq!(field.size(), Size::new(100, 100));
        assert_eq!(field.particles(), before.as_slice());
    }

    #[test]
    fn test_stranded_particle_is_not_repositioned() {
        let mut field = ParticleField::from_particles(
            SIZE,
            vec![Particle {
                vx: 0.25,
                ..particle(700.0, 300.0)
            }],
        );
        field.resize(Size::new(400, 600));
        field.step();
        assert!(field.particles()[0].vx < 0.0);

        // Outside the new bound every step reflects again, so the particle
        // jitters in place rather than being pulled back.
        for _ in 0..100 {
            field.step();
            let x = field.particles()[0].x;
            assert!((699.75..=700.25).contains(&x), "x moved to {x}");
        }
    }

    #[test]
    fn test_link_alpha_decreases_to_zero() {
        assert_eq!(link_alpha(0.0), LINK_MAX_ALPHA);
        assert_eq!(link_alpha(LINK_DISTANCE), 0.0);
        assert_eq!(link_alpha(LINK_DISTANCE * 2.0), 0.0);

        let mut last = f64::INFINITY;
        for d in 0..=150 {
            let alpha = link_alpha(f64::from(d));
            assert!(alpha <= last);
            assert!(alpha >= 0.0);
            last = alpha;
        }
    }

    #[test]
    fn test_links_drawn_for_close_pairs_only() {
        let field = ParticleField::from_particles(
            SIZE,
            vec![
                particle(0.0, 0.0),
                particle(30.0, 40.0),
                particle(500.0, 500.0),
            ],
        );
        let mut surface = RecordingSurface::new(SIZE);
        field.draw(&mut surface);

        assert_eq!(surface.circles.len(), 3);
        assert_eq!(surface.lines.len(), 1);
        let (from, to, alpha) = surface.lines[0];
        assert_eq!(from, (0.0, 0.0));
        assert_eq!(to, (30.0, 40.0));
        assert!((alpha - link_alpha(50.0)).abs() < 1e-12);
    }

    #[test]
    fn test_every_pair_considered() {
        let particles = (0..10).map(|i| particle(f64::from(i), 0.0)).collect();
        let field = ParticleField::from_particles(SIZE, particles);
        let mut surface = RecordingSurface::new(SIZE);
        field.draw(&mut surface);
        assert_eq!(surface.lines.len(), 10 * 9 / 2);
    }
}
