//! "Call me before the next repaint" scheduling.

/// Cancellation handle for a requested frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

/// Queue of frame callbacks waiting for the next repaint.
///
/// The owner of the display loop calls [`FrameScheduler::fire`] once per
/// repaint. Every handle pending at that point is delivered exactly once;
/// callbacks that want another frame must request again.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    next_id: u64,
    pending: Vec<FrameHandle>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a callback before the next repaint.
    pub fn request(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(handle);
        handle
    }

    /// Deregister a pending callback. Returns whether it was pending.
    pub fn cancel(&mut self, handle: FrameHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|h| *h != handle);
        self.pending.len() != before
    }

    pub fn is_pending(&self, handle: FrameHandle) -> bool {
        self.pending.contains(&handle)
    }

    /// Whether anything is waiting for a frame.
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Take every pending handle for delivery this repaint.
    pub fn fire(&mut self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.pending)
    }
}
