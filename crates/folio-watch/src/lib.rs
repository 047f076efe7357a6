//! Viewport watchers and the small animations they drive.
//!
//! Each watcher is an independent state machine fed with a visibility
//! measurement from the host and a monotonic clock in milliseconds. None of
//! them render anything, so they can be exercised without a terminal.

mod active;
mod counter;
mod marquee;
mod progress;
mod trigger;
mod viewport;

pub use active::{ACTIVE_OFFSET_ROWS, ActiveSectionTracker, SCROLLED_THRESHOLD_ROWS, is_scrolled};
pub use counter::{
    COUNTER_DURATION_MS, COUNTER_STEP_MS, COUNTER_STEPS, CounterAnimation, counter_sequence,
    counter_step_value,
};
pub use marquee::{Direction, Marquee};
pub use progress::{BAR_TRANSITION_MS, ProgressBarAnimation, bar_delay_ms, ease_out};
pub use trigger::{Trigger, VISIBILITY_THRESHOLD};
pub use viewport::{RowSpan, visible_fraction};
