//! Counter State Machine
//!
//! Per-card repetition counter. Each rendered card owns exactly one
//! `Counter`; there is no shared state between cards, and a counter is
//! discarded with its card when the category changes.

use crate::models::CountSpec;

/// Progress ring radius in SVG user units
pub const RING_RADIUS: f64 = 40.0;

/// Total stroke length of the progress ring, fixed at mount time
pub const RING_CIRCUMFERENCE: f64 = 2.0 * std::f64::consts::PI * RING_RADIUS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterMode {
    /// Counts down from `target` to zero, terminal at zero
    Bounded,
    /// Counts up from zero, never terminal
    Unbounded,
}

/// Outcome of one primary-button activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Count changed, counter still active
    Counted,
    /// This activation brought a bounded counter to zero
    Completed,
    /// Counter was already completed; nothing changed
    Ignored,
}

/// Mutable countdown/count-up state for one card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    mode: CounterMode,
    target: u32,
    current: u32,
}

impl Counter {
    pub fn new(spec: CountSpec) -> Self {
        match spec {
            // Zero target would break the ring fraction; clamp to 1
            CountSpec::Times(n) => Self {
                mode: CounterMode::Bounded,
                target: n.max(1),
                current: n.max(1),
            },
            CountSpec::Unbounded => Self {
                mode: CounterMode::Unbounded,
                target: 1,
                current: 0,
            },
        }
    }

    pub fn mode(&self) -> CounterMode {
        self.mode
    }

    /// Value shown in the numeric display
    pub fn display(&self) -> u32 {
        self.current
    }

    /// Terminal state: bounded and counted all the way down
    pub fn completed(&self) -> bool {
        self.mode == CounterMode::Bounded && self.current == 0
    }

    /// Primary-button activation: increment (unbounded) or decrement
    /// (bounded). A completed counter ignores activations until reset.
    pub fn activate(&mut self) -> Activation {
        match self.mode {
            CounterMode::Unbounded => {
                self.current += 1;
                Activation::Counted
            }
            CounterMode::Bounded => {
                if self.current == 0 {
                    return Activation::Ignored;
                }
                self.current -= 1;
                if self.current == 0 {
                    Activation::Completed
                } else {
                    Activation::Counted
                }
            }
        }
    }

    /// Restore the initial value and clear the completed state.
    /// Idempotent, available in any state.
    pub fn reset(&mut self) {
        self.current = match self.mode {
            CounterMode::Bounded => self.target,
            CounterMode::Unbounded => 0,
        };
    }

    /// Stroke-dash offset for the progress ring: `c × (1 − current/target)`.
    /// 0 is a fully drawn ring, `c` a fully hidden one.
    pub fn ring_offset(&self, circumference: f64) -> f64 {
        circumference * (1.0 - self.current as f64 / self.target as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_counts_down_to_completion() {
        let mut c = Counter::new(CountSpec::Times(5));
        assert_eq!(c.display(), 5);
        assert!(!c.completed());

        let mut displays = Vec::new();
        let mut outcomes = Vec::new();
        for _ in 0..5 {
            outcomes.push(c.activate());
            displays.push(c.display());
        }

        assert_eq!(displays, vec![4, 3, 2, 1, 0]);
        assert_eq!(
            outcomes,
            vec![
                Activation::Counted,
                Activation::Counted,
                Activation::Counted,
                Activation::Counted,
                Activation::Completed,
            ]
        );
        assert!(c.completed());
    }

    #[test]
    fn test_activation_after_completion_is_ignored() {
        let mut c = Counter::new(CountSpec::Times(1));
        assert_eq!(c.activate(), Activation::Completed);

        // No reset in between: further activations change nothing
        let before = c;
        assert_eq!(c.activate(), Activation::Ignored);
        assert_eq!(c.activate(), Activation::Ignored);
        assert_eq!(c, before);
        assert_eq!(c.display(), 0);
        assert!(c.completed());
    }

    #[test]
    fn test_unbounded_counts_up() {
        let mut c = Counter::new(CountSpec::Unbounded);
        assert_eq!(c.display(), 0);

        let mut displays = Vec::new();
        for _ in 0..3 {
            assert_eq!(c.activate(), Activation::Counted);
            displays.push(c.display());
        }
        assert_eq!(displays, vec![1, 2, 3]);

        // Never terminal
        assert!(!c.completed());

        c.reset();
        assert_eq!(c.display(), 0);
        assert!(!c.completed());
    }

    #[test]
    fn test_reset_restores_bounded() {
        let mut c = Counter::new(CountSpec::Times(3));
        c.activate();
        c.activate();
        c.activate();
        assert!(c.completed());

        c.reset();
        assert_eq!(c.display(), 3);
        assert!(!c.completed());
        assert_eq!(c.ring_offset(RING_CIRCUMFERENCE), 0.0);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut c = Counter::new(CountSpec::Times(7));
        c.activate();
        c.reset();
        let once = c;
        c.reset();
        assert_eq!(c, once);

        let mut u = Counter::new(CountSpec::Unbounded);
        u.activate();
        u.reset();
        let once = u;
        u.reset();
        assert_eq!(u, once);
    }

    #[test]
    fn test_ring_offset_formula() {
        let circ = RING_CIRCUMFERENCE;
        let mut c = Counter::new(CountSpec::Times(4));

        // Full ring at the starting count
        assert_eq!(c.ring_offset(circ), 0.0);

        c.activate();
        assert!((c.ring_offset(circ) - circ * 0.25).abs() < 1e-9);
        c.activate();
        assert!((c.ring_offset(circ) - circ * 0.5).abs() < 1e-9);

        c.activate();
        c.activate();
        // Fully hidden at zero
        assert!((c.ring_offset(circ) - circ).abs() < 1e-9);
    }

    #[test]
    fn test_zero_target_clamps_to_one() {
        let mut c = Counter::new(CountSpec::Times(0));
        assert_eq!(c.display(), 1);
        assert_eq!(c.ring_offset(RING_CIRCUMFERENCE), 0.0);

        assert_eq!(c.activate(), Activation::Completed);
        assert!(c.completed());
    }

    #[test]
    fn test_bounded_stays_within_bounds() {
        let mut c = Counter::new(CountSpec::Times(5));
        let mut prev = c.display();
        for _ in 0..20 {
            c.activate();
            let cur = c.display();
            assert!(cur <= prev, "display must be non-increasing between resets");
            assert!(cur <= 5);
            prev = cur;
        }
        assert_eq!(c.display(), 0);
    }
}
