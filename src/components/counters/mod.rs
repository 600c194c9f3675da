//! Stat counters that count up from zero once their section scrolls into view.

#[cfg(target_arch = "wasm32")]
pub mod render;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CounterStep {
    /// Show this value and tick again.
    Continue(f64),
    /// Show this value; the animation is over.
    Done(f64),
}

impl CounterStep {
    pub fn value(&self) -> f64 {
        match self {
            CounterStep::Continue(v) | CounterStep::Done(v) => *v,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Counter {
    target: f64,
    current: f64,
    increment: f64,
}

impl Counter {
    /// Counter reaching `target` in roughly `steps` ticks.
    pub fn new(target: f64, steps: u32) -> Self {
        Self {
            target,
            current: 0.0,
            increment: target / steps.max(1) as f64,
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    /// Advance by one increment, rounded up and clamped to the target.
    pub fn tick(&mut self) -> CounterStep {
        if self.current < self.target {
            self.current = (self.current + self.increment).ceil().min(self.target);
        } else {
            self.current = self.target;
        }
        if self.current < self.target {
            CounterStep::Continue(self.current)
        } else {
            CounterStep::Done(self.current)
        }
    }
}

/// Parse a `data-target` value. A missing or blank attribute counts as 0.
pub fn parse_target(raw: Option<&str>) -> Option<f64> {
    let raw = raw.unwrap_or("").trim();
    if raw.is_empty() {
        return Some(0.0);
    }
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Whole numbers render without a decimal point.
pub fn format_count(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(mut counter: Counter) -> Vec<f64> {
        let mut shown = Vec::new();
        loop {
            let step = counter.tick();
            shown.push(step.value());
            if let CounterStep::Done(_) = step {
                return shown;
            }
        }
    }

    #[test]
    fn hundred_takes_fifty_ticks() {
        let shown = run(Counter::new(100.0, 50));
        assert_eq!(shown.len(), 50);
        assert_eq!(shown[0], 2.0);
        assert_eq!(*shown.last().unwrap(), 100.0);
    }

    #[test]
    fn uneven_target_finishes_exactly() {
        let shown = run(Counter::new(37.0, 50));
        assert_eq!(*shown.last().unwrap(), 37.0);
        assert!(shown.iter().all(|v| *v <= 37.0));
    }

    #[test]
    fn small_target_rounds_up_to_done() {
        assert_eq!(Counter::new(1.0, 50).tick(), CounterStep::Done(1.0));
    }

    #[test]
    fn zero_target_is_done_immediately() {
        assert_eq!(Counter::new(0.0, 50).tick(), CounterStep::Done(0.0));
    }

    #[test]
    fn zero_steps_does_not_divide_by_zero() {
        assert_eq!(Counter::new(10.0, 0).tick(), CounterStep::Done(10.0));
    }

    #[test]
    fn parse_targets() {
        assert_eq!(parse_target(Some("150")), Some(150.0));
        assert_eq!(parse_target(Some(" 12 ")), Some(12.0));
        assert_eq!(parse_target(Some("")), Some(0.0));
        assert_eq!(parse_target(None), Some(0.0));
        assert_eq!(parse_target(Some("lots")), None);
        assert_eq!(parse_target(Some("inf")), None);
    }

    #[test]
    fn format_counts() {
        assert_eq!(format_count(150.0), "150");
        assert_eq!(format_count(0.0), "0");
        assert_eq!(format_count(2.5), "2.5");
    }
}
