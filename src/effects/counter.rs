/// Reads a stat target the way `parseInt(value, 10)` would: optional leading
/// whitespace, then leading decimal digits. Anything else counts as zero.
pub fn parse_target(data_target: Option<&str>, text: &str) -> u64 {
    let raw = data_target.filter(|t| !t.is_empty()).unwrap_or(text).trim_start();
    let digits: String = raw.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Interval and increment for counting up to `target` in about `duration_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterPlan {
    pub target: u64,
    pub step_ms: u32,
    pub increment: u64,
}

impl CounterPlan {
    pub fn new(target: u64, duration_ms: u32) -> Self {
        let step_ms = (u64::from(duration_ms) / target.max(1)).max(8) as u32;
        let steps = f64::from(duration_ms) / f64::from(step_ms);
        let increment = if steps > 0.0 {
            ((target as f64 / steps).floor() as u64).max(1)
        } else {
            target.max(1)
        };
        Self { target, step_ms, increment }
    }
}

#[derive(Debug, Clone)]
pub struct Counter {
    plan: CounterPlan,
    current: u64,
    done: bool,
}

impl Counter {
    pub fn new(plan: CounterPlan) -> Self {
        Self { plan, current: 0, done: false }
    }

    pub fn plan(&self) -> CounterPlan {
        self.plan
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advances one interval and returns the value to display.
    pub fn step(&mut self) -> u64 {
        if self.done {
            return self.plan.target;
        }
        self.current = self.current.saturating_add(self.plan.increment);
        if self.current >= self.plan.target {
            self.done = true;
            self.plan.target
        } else {
            self.current
        }
    }
}
