//! A single particle and the population constants.

use std::ops::RangeInclusive;

use rand::Rng;

/// Number of particles in a field.
///
/// Link drawing checks every pair each frame, so cost grows with the square
/// of this value: 50 particles is 1225 pairs per frame.
pub const PARTICLE_COUNT: usize = 50;

/// Largest per-frame velocity component, in pixels.
pub const MAX_SPEED: f64 = 0.25;

/// Drawn dot radius, in pixels.
pub const RADIUS_RANGE: RangeInclusive<f64> = 1.0..=3.0;

/// Dot opacity.
pub const OPACITY_RANGE: RangeInclusive<f64> = 0.2..=0.7;

/// Pairs closer than this are joined by a line.
pub const LINK_DISTANCE: f64 = 150.0;

/// Alpha of a link between two coincident particles.
pub const LINK_MAX_ALPHA: f64 = 0.1;

/// One moving dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position in pixels.
    pub x: f64,
    /// Vertical position in pixels, growing downwards.
    pub y: f64,
    /// Horizontal displacement per frame.
    pub vx: f64,
    /// Vertical displacement per frame.
    pub vy: f64,
    /// Fixed at creation.
    pub radius: f64,
    /// Fixed at creation.
    pub opacity: f64,
}

impl Particle {
    /// A particle placed uniformly in `[0, width) x [0, height)`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Self {
        Self {
            x: rng.gen_range(0.0..1.0) * width,
            y: rng.gen_range(0.0..1.0) * height,
            vx: rng.gen_range(-MAX_SPEED..=MAX_SPEED),
            vy: rng.gen_range(-MAX_SPEED..=MAX_SPEED),
            radius: rng.gen_range(RADIUS_RANGE),
            opacity: rng.gen_range(OPACITY_RANGE),
        }
    }

    /// Move by one frame's velocity, then reflect off any crossed edge.
    ///
    /// The coordinate itself is never pulled back inside: a particle may sit
    /// up to one frame's travel past the edge until the reversed velocity
    /// carries it back.
    pub fn advance(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;

        if self.x < 0.0 || self.x > width {
            self.vx = -self.vx;
        }
        if self.y < 0.0 || self.y > height {
            self.vy = -self.vy;
        }
    }

    /// Euclidean distance to another particle.
    pub fn distance(&self, other: &Particle) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}
