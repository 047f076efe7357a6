//! Count-up animation for statistics.

use crate::trigger::Trigger;

/// Total duration of a count-up.
pub const COUNTER_DURATION_MS: u64 = 2000;

/// Number of discrete steps in a count-up.
pub const COUNTER_STEPS: u32 = 60;

/// Time between steps.
pub const COUNTER_STEP_MS: u64 = COUNTER_DURATION_MS / COUNTER_STEPS as u64;

/// Displayed value at `step` of a count-up towards `target`.
///
/// Intermediate steps are `floor(min(target, step * target / 60))`; the last
/// step is exactly `target`.
pub fn counter_step_value(target: u32, step: u32) -> u32 {
    if step >= COUNTER_STEPS {
        return target;
    }
    let increment = f64::from(target) / f64::from(COUNTER_STEPS);
    (f64::from(step) * increment).min(f64::from(target)).floor() as u32
}

/// Every value a count-up displays, from step 0 through the final step.
pub fn counter_sequence(target: u32) -> Vec<u32> {
    (0..=COUNTER_STEPS)
        .map(|step| counter_step_value(target, step))
        .collect()
}

/// A statistic that counts up from zero the first time it is seen.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: u32,
    trigger: Trigger,
    started_at_ms: Option<u64>,
}

impl CounterAnimation {
    pub fn new(target: u32) -> Self {
        Self {
            target,
            trigger: Trigger::default(),
            started_at_ms: None,
        }
    }

    /// Feed a visibility measurement taken at `now_ms`.
    pub fn observe(&mut self, visible_fraction: f64, now_ms: u64) {
        if self.trigger.observe(visible_fraction) {
            log::trace!("counter to {} started at {now_ms}ms", self.target);
            self.started_at_ms = Some(now_ms);
        }
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn is_started(&self) -> bool {
        self.trigger.is_fired()
    }

    /// Step reached at `now_ms`, or `None` before the trigger.
    pub fn step_at(&self, now_ms: u64) -> Option<u32> {
        let started = self.started_at_ms?;
        let steps = now_ms.saturating_sub(started) / COUNTER_STEP_MS;
        Some(steps.min(u64::from(COUNTER_STEPS)) as u32)
    }

    /// Value displayed at `now_ms`.
    pub fn value_at(&self, now_ms: u64) -> u32 {
        self.step_at(now_ms)
            .map_or(0, |step| counter_step_value(self.target, step))
    }

    pub fn is_finished(&self, now_ms: u64) -> bool {
        self.step_at(now_ms) == Some(COUNTER_STEPS)
    }
}
