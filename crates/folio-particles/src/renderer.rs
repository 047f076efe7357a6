//! Mount lifecycle for a particle field driven by a frame scheduler.

use rand::thread_rng;

use crate::field::ParticleField;
use crate::scheduler::{FrameHandle, FrameScheduler};
use crate::surface::{Size, Surface};

/// A mounted particle animation.
///
/// Exists only while its hosting view is shown. Mounting requests the first
/// frame; each delivered frame runs one update-and-draw cycle and requests the
/// next; [`ParticleRenderer::unmount`] cancels the outstanding request so the
/// loop cannot outlive the view.
#[derive(Debug)]
pub struct ParticleRenderer {
    field: ParticleField,
    pending: Option<FrameHandle>,
    frames: u64,
}

impl ParticleRenderer {
    /// Mount on a surface of `size` with randomly placed particles.
    ///
    /// Returns `None` when the surface has no area; nothing is scheduled.
    pub fn mount(size: Size, scheduler: &mut FrameScheduler) -> Option<Self> {
        if size.is_empty() {
            log::debug!("particle surface unavailable ({size:?}), skipping animation");
            return None;
        }
        Some(Self::start(
            ParticleField::new(size, &mut thread_rng()),
            scheduler,
        ))
    }

    /// Mount with a deterministic population.
    pub fn mount_seeded(size: Size, seed: u64, scheduler: &mut FrameScheduler) -> Option<Self> {
        if size.is_empty() {
            return None;
        }
        Some(Self::start(ParticleField::seeded(size, seed), scheduler))
    }

    fn start(field: ParticleField, scheduler: &mut FrameScheduler) -> Self {
        log::debug!(
            "mounting particle field: {} particles on {:?}",
            field.particles().len(),
            field.size()
        );
        Self {
            field,
            pending: Some(scheduler.request()),
            frames: 0,
        }
    }

    /// Handle a repaint. Runs a frame only if this renderer's request is among
    /// the `fired` handles, then schedules the next one.
    pub fn on_frame<S: Surface + ?Sized>(
        &mut self,
        fired: &[FrameHandle],
        surface: &mut S,
        scheduler: &mut FrameScheduler,
    ) -> bool {
        let Some(handle) = self.pending else {
            return false;
        };
        if !fired.contains(&handle) {
            return false;
        }

        self.field.frame(surface);
        self.frames += 1;
        self.pending = Some(scheduler.request());
        true
    }

    /// Follow a viewport resize. Particles keep their state.
    pub fn on_resize(&mut self, size: Size) {
        if size != self.field.size() {
            log::trace!("particle surface resized to {size:?}");
            self.field.resize(size);
        }
    }

    /// Stop the animation loop.
    pub fn unmount(mut self, scheduler: &mut FrameScheduler) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
        }
        log::debug!("unmounted particle field after {} frames", self.frames);
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    /// Frames drawn since mounting.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::PARTICLE_COUNT;
    use crate::surface::RecordingSurface;

    const SIZE: Size = Size::new(800, 600);

    #[test]
    fn test_mount_on_empty_surface_is_silent() {
        let mut scheduler = FrameScheduler::new();
        assert!(ParticleRenderer::mount(Size::new(0, 600), &mut scheduler).is_none());
        assert!(!scheduler.has_pending());
    }

    #[test]
    fn test_mount_requests_first_frame() {
        let mut scheduler = FrameScheduler::new();
        let renderer = ParticleRenderer::mount(SIZE, &mut scheduler).unwrap();
        assert!(scheduler.has_pending());
        assert_eq!(renderer.field().particles().len(), PARTICLE_COUNT);
    }

    #[test]
    fn test_frame_loop_reschedules_itself() {
        let mut scheduler = FrameScheduler::new();
        let mut surface = RecordingSurface::new(SIZE);
        let mut renderer = ParticleRenderer::mount_seeded(SIZE, 3, &mut scheduler).unwrap();

        for _ in 0..5 {
            let fired = scheduler.fire();
            assert_eq!(fired.len(), 1);
            assert!(renderer.on_frame(&fired, &mut surface, &mut scheduler));
        }
        assert_eq!(renderer.frames(), 5);
        assert_eq!(surface.clears, 5);
        assert!(scheduler.has_pending());
    }

    #[test]
    fn test_stale_handle_does_not_draw() {
        let mut scheduler = FrameScheduler::new();
        let mut surface = RecordingSurface::new(SIZE);
        let mut renderer = ParticleRenderer::mount_seeded(SIZE, 3, &mut scheduler).unwrap();

        assert!(!renderer.on_frame(&[], &mut surface, &mut scheduler));
        assert_eq!(surface.clears, 0);
    }

    #[test]
    fn test_unmount_cancels_pending_frame() {
        let mut scheduler = FrameScheduler::new();
        let renderer = ParticleRenderer::mount_seeded(SIZE, 3, &mut scheduler).unwrap();
        renderer.unmount(&mut scheduler);
        assert!(!scheduler.has_pending());
        assert!(scheduler.fire().is_empty());
    }

    #[test]
    fn test_resize_updates_bounds_only() {
        let mut scheduler = FrameScheduler::new();
        let mut renderer = ParticleRenderer::mount_seeded(SIZE, 8, &mut scheduler).unwrap();
        let before = renderer.field().particles().to_vec();
        renderer.on_resize(Size::new(320, 240));
        assert_eq!(renderer.field().size(), Size::new(320, 240));
        assert_eq!(renderer.field().particles(), before.as_slice());
    }
}
