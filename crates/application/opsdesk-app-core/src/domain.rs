use chrono::{DateTime, Utc};

use opsdesk_config::{redirect_countdown_secs, DEFAULT_REDIRECT_DELAY_MS};
use opsdesk_core::records::{Company, CompanyId, Customer, Invoice, Profile, User};

use crate::notify::{NotificationState, ToastSurface};
use crate::persistence::UiPrefs;
use crate::redirect::RedirectState;

/// Top-level navigation targets. Sign-in is the only route reachable
/// without a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    SignIn,
    Companies,
    Customers,
    Users,
    Billing,
    Settings,
}

impl Route {
    pub fn label(&self) -> &'static str {
        match self {
            Route::SignIn => "Sign in",
            Route::Companies => "Companies",
            Route::Customers => "Customers",
            Route::Users => "Users",
            Route::Billing => "Billing",
            Route::Settings => "Settings",
        }
    }

    pub fn requires_session(&self) -> bool {
        !matches!(self, Route::SignIn)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BootState {
    Loading,
    Ready,
    Failed(String),
}

/// A remote collection is distinct from an empty one: `Loaded(vec![])`
/// renders an explicit empty state, `NotAsked` renders nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Remote<T> {
    #[default]
    NotAsked,
    Loading,
    Loaded(T),
}

impl<T> Remote<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Remote::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Remote::Loaded(v) => Some(v),
            _ => None,
        }
    }

    pub fn loaded_mut(&mut self) -> Option<&mut T> {
        match self {
            Remote::Loaded(v) => Some(v),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub profile: Option<Profile>,
    pub signed_in_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn is_signed_in(&self) -> bool {
        self.profile.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignInDraft {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub boot: BootState,
    pub route: Route,
    /// Set by the redirect timer (or an explicit "go now"); the UI consumes
    /// it at the start of the next frame and dispatches the navigation.
    pub pending_navigation: Option<Route>,

    pub session: Session,
    pub signing_in: bool,
    pub signin: SignInDraft,

    pub companies: Remote<Vec<Company>>,
    pub customers: Remote<Vec<Customer>>,
    pub users: Remote<Vec<User>>,
    pub invoices: Remote<Vec<Invoice>>,
    pub selected_company_id: Option<CompanyId>,

    pub company_draft: Option<Company>,
    pub customer_draft: Option<Customer>,

    pub toast: NotificationState,
    pub auth_toast: NotificationState,
    pub redirect: RedirectState,

    pub prefs: UiPrefs,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            boot: BootState::Loading,
            route: Route::SignIn,
            pending_navigation: None,
            session: Session::default(),
            signing_in: false,
            signin: SignInDraft::default(),
            companies: Remote::NotAsked,
            customers: Remote::NotAsked,
            users: Remote::NotAsked,
            invoices: Remote::NotAsked,
            selected_company_id: None,
            company_draft: None,
            customer_draft: None,
            toast: NotificationState::default(),
            auth_toast: NotificationState::default(),
            redirect: RedirectState::idle(
                Route::Companies,
                redirect_countdown_secs(DEFAULT_REDIRECT_DELAY_MS),
            ),
            prefs: UiPrefs::default(),
        }
    }
}

impl AppState {
    pub fn surface_mut(&mut self, surface: ToastSurface) -> &mut NotificationState {
        match surface {
            ToastSurface::Global => &mut self.toast,
            ToastSurface::Auth => &mut self.auth_toast,
        }
    }

    pub fn surface(&self, surface: ToastSurface) -> &NotificationState {
        match surface {
            ToastSurface::Global => &self.toast,
            ToastSurface::Auth => &self.auth_toast,
        }
    }

    pub fn selected_company(&self) -> Option<&Company> {
        let id = self.selected_company_id.as_ref()?;
        self.companies.loaded()?.iter().find(|c| &c.id == id)
    }
}
