//! Ticks from timers armed for a superseded toast or a cancelled redirect
//! must never mutate the state that replaced them.

use opsdesk_app_core::app_core::reduce;
use opsdesk_app_core::{AppState, DomainEvent, Route, Severity, ToastContent, ToastSurface};

fn show(state: AppState, surface: ToastSurface, message: &str, secs: u32) -> AppState {
    reduce(
        state,
        DomainEvent::ToastShown {
            surface,
            content: ToastContent::new(message, Severity::Error, secs),
        },
    )
}

#[test]
fn tick_for_dismissed_toast_does_not_resurface_or_decrement() {
    let mut state = show(AppState::default(), ToastSurface::Global, "boom", 5);
    let armed_gen = state.toast.generation();

    state = reduce(
        state,
        DomainEvent::ToastDismissed {
            surface: ToastSurface::Global,
        },
    );
    state = reduce(
        state,
        DomainEvent::ToastTick {
            surface: ToastSurface::Global,
            generation: armed_gen,
        },
    );

    assert!(!state.toast.is_visible);
    assert_eq!(state.toast.countdown, 0);
}

#[test]
fn tick_for_replaced_toast_leaves_the_new_toast_untouched() {
    let mut state = show(AppState::default(), ToastSurface::Global, "first", 2);
    let first_gen = state.toast.generation();

    state = show(state, ToastSurface::Global, "second", 5);
    state = reduce(
        state,
        DomainEvent::ToastTick {
            surface: ToastSurface::Global,
            generation: first_gen,
        },
    );

    assert_eq!(state.toast.message, "second");
    assert_eq!(state.toast.countdown, 5);
}

#[test]
fn surfaces_are_independent() {
    let mut state = show(AppState::default(), ToastSurface::Global, "global", 5);
    state = show(state, ToastSurface::Auth, "auth", 5);

    let global_gen = state.toast.generation();
    state = reduce(
        state,
        DomainEvent::ToastTick {
            surface: ToastSurface::Global,
            generation: global_gen,
        },
    );

    assert_eq!(state.toast.countdown, 4);
    assert_eq!(state.auth_toast.countdown, 5);
}

#[test]
fn redirect_tick_after_cancel_never_navigates() {
    let mut state = AppState::default();
    let armed_gen = state.redirect.start(Some(Route::Companies));
    state.redirect.cancel();

    state = reduce(
        state,
        DomainEvent::RedirectTick {
            generation: armed_gen,
        },
    );

    assert!(state.pending_navigation.is_none());
    assert!(!state.redirect.is_redirecting);
}

#[test]
fn sticky_toast_ignores_any_tick() {
    let mut state = show(AppState::default(), ToastSurface::Global, "stay", 0);
    let gen = state.toast.generation();
    for _ in 0..3 {
        state = reduce(
            state,
            DomainEvent::ToastTick {
                surface: ToastSurface::Global,
                generation: gen,
            },
        );
    }
    assert!(state.toast.is_visible);
}
