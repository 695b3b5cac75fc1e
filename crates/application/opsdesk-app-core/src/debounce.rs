use std::time::{Duration, Instant};

/// Tracks whether an input has been quiet long enough to surface
/// validation feedback. Purely frame-polled; no timers involved.
#[derive(Debug, Clone)]
pub struct Debounce {
    delay: Duration,
    last_change: Option<Instant>,
}

impl Debounce {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            last_change: None,
        }
    }

    /// Call on every edit to the watched input.
    pub fn touch(&mut self) {
        self.last_change = Some(Instant::now());
    }

    /// True once the input has been untouched for the full delay. An input
    /// that was never touched counts as settled.
    pub fn settled(&self) -> bool {
        match self.last_change {
            None => true,
            Some(at) => at.elapsed() >= self.delay,
        }
    }

    pub fn pending(&self) -> bool {
        !self.settled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_input_is_settled() {
        assert!(Debounce::new(400).settled());
    }

    #[test]
    fn touch_with_zero_delay_settles_immediately() {
        let mut d = Debounce::new(0);
        d.touch();
        assert!(d.settled());
    }

    #[test]
    fn touch_with_long_delay_is_pending() {
        let mut d = Debounce::new(60_000);
        d.touch();
        assert!(d.pending());
    }
}
