use opsdesk_core::records::{Company, CompanyId, Customer, CustomerId, Invoice, Profile, User};

use crate::domain::Route;
use crate::notify::{ToastContent, ToastSurface};
use crate::persistence::UiPrefs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Companies,
    Customers,
    Users,
    Invoices,
}

#[derive(Debug, Clone)]
pub enum DomainEvent {
    // Boot state
    BootLoadingStarted,
    InitialStateLoaded { prefs: UiPrefs },
    BootFailed { message: String },

    // Navigation
    RouteChanged(Route),

    // Session lifecycle
    SignInStarted,
    SignedIn { profile: Profile },
    SignInFailed { toast: ToastContent },
    SignedOut,

    // Toast surfaces
    ToastShown { surface: ToastSurface, content: ToastContent },
    ToastDismissed { surface: ToastSurface },
    ToastTick { surface: ToastSurface, generation: u64 },

    // Redirect countdown
    RedirectTick { generation: u64 },

    // Remote collections
    ResourceLoading(ResourceKind),
    ResourceLoadFailed(ResourceKind),
    CompaniesLoaded(Vec<Company>),
    CustomersLoaded(Vec<Customer>),
    UsersLoaded(Vec<User>),
    InvoicesLoaded(Vec<Invoice>),

    // Company lifecycle
    CompanySelected(CompanyId),
    CompanyDraftOpened(Company),
    CompanyDraftCancelled,
    CompanySaved(Company),
    CompanyDeleted(CompanyId),

    // Customer lifecycle
    CustomerDraftOpened(Customer),
    CustomerDraftCancelled,
    CustomerSaved(Customer),
    CustomerDeleted(CustomerId),
}
