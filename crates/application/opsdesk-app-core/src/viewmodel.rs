//! Pure projections from [`AppState`] to what the screens render.

use chrono::{DateTime, Utc};

use opsdesk_api::classify::Severity;
use opsdesk_core::records::{Company, CompanyId, Customer, CustomerId, Invoice, User, UserId};
use opsdesk_core::validate::{email_validation_error, required_error};

use crate::domain::{AppState, Remote, Route};
use crate::notify::NotificationState;

fn format_issued(ts: Option<DateTime<Utc>>) -> String {
    ts.map(|t| t.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "—".into())
}

fn format_amount(cents: i64, currency: &str) -> String {
    let currency = if currency.is_empty() { "USD" } else { currency };
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}{currency} {}.{:02}", abs / 100, abs % 100)
}

fn optional(err: String) -> Option<String> {
    if err.is_empty() {
        None
    } else {
        Some(err)
    }
}

// --- Toasts ---

#[derive(Debug, Clone)]
pub struct ToastVm {
    pub message: String,
    pub severity: Severity,
    pub details: Option<String>,
    pub error_code: Option<String>,
    /// `None` for sticky toasts.
    pub countdown: Option<u32>,
}

pub fn toast_vm(n: &NotificationState) -> Option<ToastVm> {
    if !n.is_visible {
        return None;
    }
    Some(ToastVm {
        message: n.message.clone(),
        severity: n.severity,
        details: n.details.clone(),
        error_code: n.error_code.clone(),
        countdown: (n.countdown > 0).then_some(n.countdown),
    })
}

// --- Sign-in ---

#[derive(Debug, Clone)]
pub struct RedirectVm {
    pub seconds: u32,
    pub destination_label: &'static str,
}

#[derive(Debug, Clone)]
pub struct SignInVm {
    pub email_error: Option<String>,
    pub password_error: Option<String>,
    pub can_submit: bool,
    pub busy: bool,
    pub redirect: Option<RedirectVm>,
}

/// `show_validation` is false while the email field is still being typed
/// in; validity always gates submission regardless.
pub fn sign_in_vm(state: &AppState, show_validation: bool) -> SignInVm {
    let email_error = email_validation_error(&state.signin.email);
    let password_error = required_error("Password", &state.signin.password);
    let valid = email_error.is_empty() && password_error.is_empty();

    SignInVm {
        email_error: if show_validation {
            optional(email_error)
        } else {
            None
        },
        password_error: if show_validation {
            optional(password_error)
        } else {
            None
        },
        can_submit: valid && !state.signing_in,
        busy: state.signing_in,
        redirect: state.redirect.is_redirecting.then(|| RedirectVm {
            seconds: state.redirect.countdown_seconds,
            destination_label: state.redirect.destination.label(),
        }),
    }
}

// --- Companies ---

#[derive(Debug, Clone)]
pub struct CompanyRowVm {
    pub id: CompanyId,
    pub name: String,
    pub trade_name: String,
    pub tax_id: String,
    pub status_label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone)]
pub struct CompanyListVm {
    pub rows: Vec<CompanyRowVm>,
    pub loading: bool,
    /// Set only for a loaded-but-empty list.
    pub empty_message: Option<&'static str>,
    /// Set only before the first fetch, prompting a refresh.
    pub idle_hint: Option<&'static str>,
}

pub fn company_list_vm(state: &AppState) -> CompanyListVm {
    let rows = state
        .companies
        .loaded()
        .map(|list| {
            list.iter()
                .map(|c| CompanyRowVm {
                    id: c.id.clone(),
                    name: c.name.clone(),
                    trade_name: c.trade_name.clone(),
                    tax_id: c.tax_id.clone(),
                    status_label: if c.active { "Active" } else { "Inactive" },
                    selected: state.selected_company_id.as_ref() == Some(&c.id),
                })
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    CompanyListVm {
        loading: state.companies.is_loading(),
        empty_message: matches!(&state.companies, Remote::Loaded(list) if list.is_empty())
            .then_some("No companies registered yet."),
        idle_hint: matches!(&state.companies, Remote::NotAsked)
            .then_some("Press refresh to load companies."),
        rows,
    }
}

#[derive(Debug, Clone)]
pub struct CompanyEditorVm {
    pub draft: Company,
    pub name_error: Option<String>,
    pub is_new: bool,
    pub can_save: bool,
}

pub fn company_editor_vm(state: &AppState) -> Option<CompanyEditorVm> {
    let draft = state.company_draft.clone()?;
    let name_error = optional(required_error("Name", &draft.name));
    Some(CompanyEditorVm {
        is_new: draft.id.is_empty(),
        can_save: name_error.is_none(),
        name_error,
        draft,
    })
}

// --- Customers ---

#[derive(Debug, Clone)]
pub struct CustomerRowVm {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone)]
pub struct CustomerListVm {
    pub company_name: Option<String>,
    pub rows: Vec<CustomerRowVm>,
    pub loading: bool,
    pub empty_message: Option<&'static str>,
    pub idle_hint: Option<&'static str>,
}

pub fn customer_list_vm(state: &AppState) -> CustomerListVm {
    let rows = state
        .customers
        .loaded()
        .map(|list| {
            list.iter()
                .map(|c| CustomerRowVm {
                    id: c.id.clone(),
                    name: c.name.clone(),
                    email: c.email.clone(),
                    phone: c.phone.clone(),
                })
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    CustomerListVm {
        company_name: state.selected_company().map(|c| c.name.clone()),
        loading: state.customers.is_loading(),
        empty_message: matches!(&state.customers, Remote::Loaded(list) if list.is_empty())
            .then_some("This company has no customers yet."),
        idle_hint: matches!(&state.customers, Remote::NotAsked)
            .then_some("Press refresh to load customers."),
        rows,
    }
}

#[derive(Debug, Clone)]
pub struct CustomerEditorVm {
    pub draft: Customer,
    pub name_error: Option<String>,
    pub email_error: Option<String>,
    pub is_new: bool,
    pub can_save: bool,
}

pub fn customer_editor_vm(state: &AppState) -> Option<CustomerEditorVm> {
    let draft = state.customer_draft.clone()?;
    let name_error = optional(required_error("Name", &draft.name));
    let email_error = optional(email_validation_error(&draft.email));
    Some(CustomerEditorVm {
        is_new: draft.id.is_empty(),
        can_save: name_error.is_none() && email_error.is_none(),
        name_error,
        email_error,
        draft,
    })
}

// --- Users ---

#[derive(Debug, Clone)]
pub struct UserRowVm {
    pub id: UserId,
    pub email: String,
    pub display_name: String,
    pub role: String,
    pub status_label: &'static str,
}

impl From<&User> for UserRowVm {
    fn from(u: &User) -> Self {
        Self {
            id: u.id.clone(),
            email: u.email.clone(),
            display_name: u.display_name.clone(),
            role: u.role.clone(),
            status_label: if u.active { "Active" } else { "Deactivated" },
        }
    }
}

#[derive(Debug, Clone)]
pub struct UserListVm {
    pub rows: Vec<UserRowVm>,
    pub loading: bool,
    pub empty_message: Option<&'static str>,
    pub idle_hint: Option<&'static str>,
}

pub fn user_list_vm(state: &AppState) -> UserListVm {
    UserListVm {
        rows: state
            .users
            .loaded()
            .map(|list| list.iter().map(UserRowVm::from).collect())
            .unwrap_or_default(),
        loading: state.users.is_loading(),
        empty_message: matches!(&state.users, Remote::Loaded(list) if list.is_empty())
            .then_some("No users found."),
        idle_hint: matches!(&state.users, Remote::NotAsked)
            .then_some("Press refresh to load platform users."),
    }
}

// --- Billing ---

#[derive(Debug, Clone)]
pub struct InvoiceRowVm {
    pub number: String,
    pub amount: String,
    pub status: String,
    pub issued: String,
}

impl From<&Invoice> for InvoiceRowVm {
    fn from(i: &Invoice) -> Self {
        Self {
            number: i.number.clone(),
            amount: format_amount(i.amount_cents, &i.currency),
            status: i.status.clone(),
            issued: format_issued(i.issued_at),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BillingVm {
    pub company_name: Option<String>,
    pub card_holder: String,
    pub rows: Vec<InvoiceRowVm>,
    pub loading: bool,
    pub empty_message: Option<&'static str>,
}

pub fn billing_vm(state: &AppState) -> BillingVm {
    let card_holder = state
        .session
        .profile
        .as_ref()
        .map(|p| {
            if p.display_name.is_empty() {
                p.email.clone()
            } else {
                p.display_name.clone()
            }
        })
        .unwrap_or_default();

    BillingVm {
        company_name: state.selected_company().map(|c| c.name.clone()),
        card_holder,
        rows: state
            .invoices
            .loaded()
            .map(|list| list.iter().map(InvoiceRowVm::from).collect())
            .unwrap_or_default(),
        loading: state.invoices.is_loading(),
        empty_message: matches!(&state.invoices, Remote::Loaded(list) if list.is_empty())
            .then_some("No invoices issued for this company."),
    }
}

// --- Navigation chrome ---

#[derive(Debug, Clone)]
pub struct NavVm {
    pub routes: Vec<Route>,
    pub current: Route,
    pub operator_label: Option<String>,
}

pub fn nav_vm(state: &AppState) -> NavVm {
    NavVm {
        routes: vec![
            Route::Companies,
            Route::Customers,
            Route::Users,
            Route::Billing,
            Route::Settings,
        ],
        current: state.route,
        operator_label: state.session.profile.as_ref().map(|p| {
            if p.display_name.is_empty() {
                p.email.clone()
            } else {
                p.display_name.clone()
            }
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Session;
    use opsdesk_core::records::Profile;

    #[test]
    fn loaded_empty_companies_render_the_empty_state() {
        let mut state = AppState::default();
        state.companies = Remote::Loaded(vec![]);
        let vm = company_list_vm(&state);
        assert!(vm.rows.is_empty());
        assert_eq!(vm.empty_message, Some("No companies registered yet."));
        assert!(vm.idle_hint.is_none());
    }

    #[test]
    fn unfetched_companies_prompt_a_refresh() {
        let vm = company_list_vm(&AppState::default());
        assert!(vm.rows.is_empty());
        assert!(vm.empty_message.is_none());
        assert!(!vm.loading);
        assert_eq!(vm.idle_hint, Some("Press refresh to load companies."));
    }

    #[test]
    fn unfetched_customers_prompt_a_refresh_but_not_while_loading() {
        let mut state = AppState::default();
        let vm = customer_list_vm(&state);
        assert_eq!(vm.idle_hint, Some("Press refresh to load customers."));

        state.customers = Remote::Loading;
        let vm = customer_list_vm(&state);
        assert!(vm.idle_hint.is_none());
        assert!(vm.loading);
    }

    #[test]
    fn auth_toast_vm_carries_code_and_countdown() {
        use crate::notify::ToastContent;
        use opsdesk_api::classify::ClassifiedError;

        let mut err = ClassifiedError::new("timeout of 15000ms exceeded", Severity::Error);
        err.error_code = Some("TIMEOUT".into());

        let mut state = AppState::default();
        state.auth_toast.show(ToastContent::from_classified(err, 5));

        let vm = toast_vm(&state.auth_toast).expect("toast is visible");
        assert_eq!(vm.error_code.as_deref(), Some("TIMEOUT"));
        assert_eq!(vm.countdown, Some(5));
    }

    #[test]
    fn sign_in_vm_gates_submit_on_validity_even_when_errors_are_hidden() {
        let mut state = AppState::default();
        state.signin.email = "not-an-email".into();
        state.signin.password = "hunter2".into();
        let vm = sign_in_vm(&state, false);
        assert!(vm.email_error.is_none());
        assert!(!vm.can_submit);
    }

    #[test]
    fn sign_in_vm_allows_submit_with_valid_draft() {
        let mut state = AppState::default();
        state.signin.email = "ops@example.com".into();
        state.signin.password = "hunter2".into();
        let vm = sign_in_vm(&state, true);
        assert!(vm.email_error.is_none());
        assert!(vm.can_submit);
    }

    #[test]
    fn amounts_format_with_two_decimal_places() {
        assert_eq!(format_amount(123456, "BRL"), "BRL 1234.56");
        assert_eq!(format_amount(5, ""), "USD 0.05");
        assert_eq!(format_amount(-250, "EUR"), "-EUR 2.50");
    }

    #[test]
    fn billing_card_falls_back_to_email_without_display_name() {
        let mut state = AppState::default();
        state.session = Session {
            profile: Some(Profile {
                id: "u-1".into(),
                email: "ops@example.com".into(),
                display_name: String::new(),
                created_at: None,
            }),
            signed_in_at: None,
        };
        assert_eq!(billing_vm(&state).card_holder, "ops@example.com");
    }
}
