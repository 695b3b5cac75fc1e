//! End-to-end reducer runs for the session lifecycle: failed sign-in,
//! successful sign-in with redirect countdown, and sign-out reset.

use opsdesk_app_core::app_core::reduce;
use opsdesk_app_core::{
    AppState, BootState, DomainEvent, Remote, Route, Severity, ToastContent, UiPrefs,
};
use opsdesk_core::records::{Company, Profile};

fn profile() -> Profile {
    Profile {
        id: "u-1".into(),
        email: "ops@example.com".into(),
        display_name: "Ops".into(),
        created_at: None,
    }
}

#[test]
fn failed_sign_in_lands_on_the_auth_surface_and_clears_busy() {
    let mut state = reduce(AppState::default(), DomainEvent::SignInStarted);
    assert!(state.signing_in);

    state = reduce(
        state,
        DomainEvent::SignInFailed {
            toast: ToastContent::new("Invalid credentials", Severity::Error, 5),
        },
    );

    assert!(!state.signing_in);
    assert!(state.auth_toast.is_visible);
    assert_eq!(state.auth_toast.message, "Invalid credentials");
    assert!(!state.toast.is_visible);
    assert!(!state.session.is_signed_in());
}

#[test]
fn retry_after_failure_hides_the_previous_auth_toast() {
    let mut state = reduce(AppState::default(), DomainEvent::SignInStarted);
    state = reduce(
        state,
        DomainEvent::SignInFailed {
            toast: ToastContent::new("Invalid credentials", Severity::Error, 5),
        },
    );
    state = reduce(state, DomainEvent::SignInStarted);
    assert!(!state.auth_toast.is_visible);
}

#[test]
fn successful_sign_in_starts_the_redirect_countdown() {
    let mut state = AppState::default();
    state.signin.password = "hunter2".into();

    state = reduce(
        state,
        DomainEvent::SignedIn {
            profile: profile(),
        },
    );

    assert!(state.session.is_signed_in());
    assert!(state.signin.password.is_empty());
    assert!(state.redirect.is_redirecting);
    assert_eq!(state.redirect.destination, Route::Companies);

    let gen = state.redirect.generation();
    for _ in 0..state.redirect.countdown_seconds {
        state = reduce(state, DomainEvent::RedirectTick { generation: gen });
    }
    assert_eq!(state.pending_navigation, Some(Route::Companies));
    assert!(!state.redirect.is_redirecting);
}

#[test]
fn sign_out_resets_everything_but_keeps_remembered_email() {
    let mut state = reduce(
        AppState::default(),
        DomainEvent::InitialStateLoaded {
            prefs: UiPrefs {
                remember_email: true,
                remembered_email: "ops@example.com".into(),
            },
        },
    );
    assert_eq!(state.signin.email, "ops@example.com");
    assert_eq!(state.boot, BootState::Ready);

    state = reduce(
        state,
        DomainEvent::SignedIn {
            profile: profile(),
        },
    );
    state = reduce(
        state,
        DomainEvent::CompaniesLoaded(vec![Company {
            id: "c-1".into(),
            name: "Acme".into(),
            ..Company::default()
        }]),
    );

    state = reduce(state, DomainEvent::SignedOut);

    assert!(!state.session.is_signed_in());
    assert_eq!(state.route, Route::SignIn);
    assert_eq!(state.companies, Remote::NotAsked);
    assert_eq!(state.signin.email, "ops@example.com");
    assert_eq!(state.boot, BootState::Ready);
}

#[test]
fn loading_companies_selects_the_first_and_scopes_child_lists() {
    let state = reduce(
        AppState::default(),
        DomainEvent::CompaniesLoaded(vec![
            Company {
                id: "c-1".into(),
                name: "Acme".into(),
                ..Company::default()
            },
            Company {
                id: "c-2".into(),
                name: "Globex".into(),
                ..Company::default()
            },
        ]),
    );
    assert_eq!(state.selected_company_id.as_deref(), Some("c-1"));

    let state = reduce(state, DomainEvent::CompanySelected("c-2".into()));
    assert_eq!(state.selected_company_id.as_deref(), Some("c-2"));
    assert_eq!(state.customers, Remote::NotAsked);
    assert_eq!(state.invoices, Remote::NotAsked);
}

#[test]
fn deleting_the_selected_company_falls_back_to_the_first_remaining() {
    let mut state = reduce(
        AppState::default(),
        DomainEvent::CompaniesLoaded(vec![
            Company {
                id: "c-1".into(),
                name: "Acme".into(),
                ..Company::default()
            },
            Company {
                id: "c-2".into(),
                name: "Globex".into(),
                ..Company::default()
            },
        ]),
    );
    state = reduce(state, DomainEvent::CompanyDeleted("c-1".into()));
    assert_eq!(state.selected_company_id.as_deref(), Some("c-2"));
    assert_eq!(state.customers, Remote::NotAsked);
}
