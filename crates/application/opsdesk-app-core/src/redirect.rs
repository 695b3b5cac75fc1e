//! Post-sign-in redirect countdown.
//!
//! Mirrors the toast machine: a generation counter stamps timer ticks so
//! a cancelled countdown can never fire a navigation late. The most
//! recently set destination wins.

use crate::domain::Route;

#[derive(Debug, Clone, PartialEq)]
pub struct RedirectState {
    pub is_redirecting: bool,
    pub countdown_seconds: u32,
    pub destination: Route,
    initial_seconds: u32,
    generation: u64,
}

impl RedirectState {
    pub fn idle(destination: Route, initial_seconds: u32) -> Self {
        Self {
            is_redirecting: false,
            countdown_seconds: initial_seconds,
            destination,
            initial_seconds,
            generation: 0,
        }
    }

    /// Begins (or restarts) the countdown and returns the generation the
    /// timer must stamp on its ticks. `None` keeps the stored destination.
    pub fn start(&mut self, destination: Option<Route>) -> u64 {
        self.generation += 1;
        if let Some(dest) = destination {
            self.destination = dest;
        }
        self.is_redirecting = true;
        self.countdown_seconds = self.initial_seconds;
        self.generation
    }

    pub fn cancel(&mut self) {
        if !self.is_redirecting {
            return;
        }
        self.generation += 1;
        self.is_redirecting = false;
        self.countdown_seconds = self.initial_seconds;
    }

    /// Skips the countdown entirely and hands back where to go.
    pub fn resolve_now(&mut self, destination: Option<Route>) -> Route {
        if let Some(dest) = destination {
            self.destination = dest;
        }
        self.cancel();
        self.destination
    }

    /// One second elapsed on the timer armed at `generation`. Returns the
    /// destination when the countdown completes; stale ticks return `None`.
    pub fn apply_tick(&mut self, generation: u64) -> Option<Route> {
        if !self.is_redirecting || generation != self.generation {
            return None;
        }
        self.countdown_seconds = self.countdown_seconds.saturating_sub(1);
        if self.countdown_seconds == 0 {
            self.generation += 1;
            self.is_redirecting = false;
            self.countdown_seconds = self.initial_seconds;
            return Some(self.destination);
        }
        None
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn initial_seconds(&self) -> u32 {
        self.initial_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_completes_exactly_once() {
        let mut r = RedirectState::idle(Route::Companies, 3);
        let gen = r.start(None);
        assert_eq!(r.apply_tick(gen), None);
        assert_eq!(r.apply_tick(gen), None);
        assert_eq!(r.apply_tick(gen), Some(Route::Companies));
        // The completing tick bumped the generation; a late duplicate is inert.
        assert_eq!(r.apply_tick(gen), None);
        assert!(!r.is_redirecting);
    }

    #[test]
    fn cancel_resets_countdown_and_invalidates_ticks() {
        let mut r = RedirectState::idle(Route::Companies, 3);
        let gen = r.start(None);
        r.apply_tick(gen);
        r.cancel();
        assert_eq!(r.countdown_seconds, 3);
        assert_eq!(r.apply_tick(gen), None);
        assert!(!r.is_redirecting);
    }

    #[test]
    fn latest_destination_wins() {
        let mut r = RedirectState::idle(Route::Companies, 2);
        r.start(None);
        let gen = r.start(Some(Route::Settings));
        r.apply_tick(gen);
        assert_eq!(r.apply_tick(gen), Some(Route::Settings));
    }

    #[test]
    fn resolve_now_cancels_and_returns_destination() {
        let mut r = RedirectState::idle(Route::Companies, 5);
        let gen = r.start(None);
        assert_eq!(r.resolve_now(None), Route::Companies);
        assert!(!r.is_redirecting);
        assert_eq!(r.apply_tick(gen), None);
    }
}
