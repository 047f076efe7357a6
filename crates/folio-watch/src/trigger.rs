//! One-shot visibility trigger.

/// Share of an element that must be on screen to fire.
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

/// A latch that fires the first time its element is at least half visible
/// and never again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Trigger {
    #[default]
    Armed,
    Fired,
}

impl Trigger {
    /// Feed a visibility measurement. Returns `true` only on the call that
    /// fires the trigger.
    pub fn observe(&mut self, visible_fraction: f64) -> bool {
        match self {
            Trigger::Armed if visible_fraction >= VISIBILITY_THRESHOLD => {
                *self = Trigger::Fired;
                true
            }
            _ => false,
        }
    }

    pub fn is_fired(self) -> bool {
        self == Trigger::Fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_at_threshold() {
        let mut trigger = Trigger::default();
        assert!(!trigger.observe(0.49));
        assert!(!trigger.is_fired());
        assert!(trigger.observe(0.5));
        assert!(trigger.is_fired());
    }

    #[test]
    fn test_never_refires() {
        let mut trigger = Trigger::default();
        assert!(trigger.observe(1.0));
        for fraction in [0.0, 1.0, 0.2, 0.9] {
            assert!(!trigger.observe(fraction));
            assert!(trigger.is_fired());
        }
    }
}
