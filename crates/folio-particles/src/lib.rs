//! Particle field backdrop for the folio hero section.
//!
//! A fixed population of dots drifts across a virtual pixel surface,
//! bouncing off its edges, with faint lines joining close neighbours.
//! The simulation is decoupled from drawing through the [`Surface`] trait,
//! and from timing through the [`FrameScheduler`], so a frame can be stepped
//! deterministically without a terminal.

mod canvas;
mod color;
mod field;
mod particle;
mod renderer;
mod scheduler;
mod surface;

pub use canvas::CanvasSurface;
pub use color::blend;
pub use field::{ParticleField, link_alpha};
pub use particle::{
    LINK_DISTANCE, LINK_MAX_ALPHA, MAX_SPEED, OPACITY_RANGE, PARTICLE_COUNT, Particle,
    RADIUS_RANGE,
};
pub use renderer::ParticleRenderer;
pub use scheduler::{FrameHandle, FrameScheduler};
pub use surface::{CELL_HEIGHT_PX, CELL_WIDTH_PX, Size, Surface};
