//! Toast notification state machine.
//!
//! Each surface owns one notification slot; showing a new toast replaces
//! whatever was on screen. A generation counter invalidates ticks from
//! timers armed for an earlier toast, so a superseded or dismissed toast
//! can never be re-hidden (or have its countdown mangled) by a late tick.

use opsdesk_api::classify::{ClassifiedError, Severity};
use opsdesk_config::DEFAULT_TOAST_SECONDS;

/// Where a toast renders. Auth failures stay on the sign-in screen;
/// everything else goes through the global surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastSurface {
    Global,
    Auth,
}

/// What to display, decided before the toast is shown.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastContent {
    pub message: String,
    pub severity: Severity,
    pub details: Option<String>,
    pub error_code: Option<String>,
    /// Zero means sticky: no countdown, dismissed only by the user.
    pub duration_secs: u32,
}

impl ToastContent {
    pub fn new(message: impl Into<String>, severity: Severity, duration_secs: u32) -> Self {
        Self {
            message: message.into(),
            severity,
            details: None,
            error_code: None,
            duration_secs,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success, DEFAULT_TOAST_SECONDS)
    }

    pub fn from_classified(err: ClassifiedError, duration_secs: u32) -> Self {
        Self {
            message: err.message,
            severity: err.severity,
            details: err.details,
            error_code: err.error_code,
            duration_secs,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NotificationState {
    pub is_visible: bool,
    pub message: String,
    pub severity: Severity,
    pub details: Option<String>,
    pub error_code: Option<String>,
    /// Seconds left before auto-hide; zero while hidden or sticky.
    pub countdown: u32,
    generation: u64,
}

impl Default for NotificationState {
    fn default() -> Self {
        Self {
            is_visible: false,
            message: String::new(),
            severity: Severity::Info,
            details: None,
            error_code: None,
            countdown: 0,
            generation: 0,
        }
    }
}

impl NotificationState {
    /// Replaces the current toast and returns the generation the caller
    /// must stamp on timer ticks for it.
    pub fn show(&mut self, content: ToastContent) -> u64 {
        self.generation += 1;
        self.is_visible = true;
        self.message = content.message;
        self.severity = content.severity;
        self.details = content.details;
        self.error_code = content.error_code;
        self.countdown = content.duration_secs;
        self.generation
    }

    /// Hiding an already-hidden toast is a no-op; the generation only
    /// advances when something was actually on screen.
    pub fn hide(&mut self) {
        if !self.is_visible {
            return;
        }
        self.generation += 1;
        self.is_visible = false;
        self.message.clear();
        self.details = None;
        self.error_code = None;
        self.countdown = 0;
    }

    pub fn update_countdown(&mut self, seconds: u32) {
        if self.is_visible {
            self.countdown = seconds;
        }
    }

    /// One second elapsed on the timer armed at `generation`. Stale
    /// generations are dropped without touching state, as are ticks
    /// against a sticky toast.
    pub fn apply_tick(&mut self, generation: u64) {
        if !self.is_visible || generation != self.generation || self.countdown == 0 {
            return;
        }
        self.countdown = self.countdown.saturating_sub(1);
        if self.countdown == 0 {
            self.hide();
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_replaces_previous_toast_and_bumps_generation() {
        let mut n = NotificationState::default();
        let g1 = n.show(ToastContent::new("first", Severity::Error, 5));
        let g2 = n.show(ToastContent::new("second", Severity::Success, 3));
        assert!(g2 > g1);
        assert_eq!(n.message, "second");
        assert_eq!(n.countdown, 3);
    }

    #[test]
    fn hide_is_idempotent() {
        let mut n = NotificationState::default();
        n.show(ToastContent::new("x", Severity::Info, 5));
        n.hide();
        let gen_after_first_hide = n.generation();
        n.hide();
        assert_eq!(n.generation(), gen_after_first_hide);
        assert!(!n.is_visible);
    }

    #[test]
    fn stale_tick_is_ignored() {
        let mut n = NotificationState::default();
        let old = n.show(ToastContent::new("old", Severity::Error, 2));
        n.show(ToastContent::new("new", Severity::Error, 5));
        n.apply_tick(old);
        assert_eq!(n.countdown, 5);
        assert_eq!(n.message, "new");
    }

    #[test]
    fn countdown_reaches_zero_and_hides() {
        let mut n = NotificationState::default();
        let gen = n.show(ToastContent::new("bye", Severity::Warning, 2));
        n.apply_tick(gen);
        assert_eq!(n.countdown, 1);
        assert!(n.is_visible);
        n.apply_tick(gen);
        assert!(!n.is_visible);
    }

    #[test]
    fn update_countdown_only_applies_while_visible() {
        let mut n = NotificationState::default();
        n.update_countdown(10);
        assert_eq!(n.countdown, 0);
        n.show(ToastContent::new("x", Severity::Info, 5));
        n.update_countdown(8);
        assert_eq!(n.countdown, 8);
    }
}
