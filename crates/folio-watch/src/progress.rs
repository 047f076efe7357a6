//! Skill progress bars that fill in once seen.

use crate::trigger::Trigger;

/// Duration of the fill transition once a bar's delay has passed.
pub const BAR_TRANSITION_MS: u64 = 1000;

/// Stagger for a bar: 200 ms per category plus 100 ms per skill within it.
pub fn bar_delay_ms(category_index: usize, skill_index: usize) -> u64 {
    category_index as u64 * 200 + skill_index as u64 * 100
}

/// Cubic ease-out on `0.0..=1.0`.
pub fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// A bar whose width jumps to its target after a delay and eases there.
#[derive(Debug, Clone)]
pub struct ProgressBarAnimation {
    target: f64,
    delay_ms: u64,
    trigger: Trigger,
    fired_at_ms: Option<u64>,
}

impl ProgressBarAnimation {
    /// `target` is a percentage and is clamped to `0..=100`.
    pub fn new(target: f64, delay_ms: u64) -> Self {
        Self {
            target: target.clamp(0.0, 100.0),
            delay_ms,
            trigger: Trigger::default(),
            fired_at_ms: None,
        }
    }

    /// Feed a visibility measurement taken at `now_ms`.
    pub fn observe(&mut self, visible_fraction: f64, now_ms: u64) {
        if self.trigger.observe(visible_fraction) {
            self.fired_at_ms = Some(now_ms);
        }
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Milliseconds since the delay elapsed, or `None` if not yet set.
    fn since_set(&self, now_ms: u64) -> Option<u64> {
        let fired = self.fired_at_ms?;
        now_ms
            .saturating_sub(fired)
            .checked_sub(self.delay_ms)
    }

    /// Width the bar has been told to reach: 0 until the delay after the
    /// trigger has passed, the target afterwards.
    pub fn set_width_at(&self, now_ms: u64) -> f64 {
        if self.since_set(now_ms).is_some() {
            self.target
        } else {
            0.0
        }
    }

    /// Displayed width at `now_ms`, including the transition.
    pub fn width_at(&self, now_ms: u64) -> f64 {
        match self.since_set(now_ms) {
            Some(elapsed) => {
                let t = elapsed as f64 / BAR_TRANSITION_MS as f64;
                (self.target * ease_out(t)).min(100.0)
            }
            None => 0.0,
        }
    }
}
