use opsdesk_core::records::{CompanyId, CustomerId};

use crate::domain::Route;
use crate::notify::{ToastContent, ToastSurface};

#[derive(Debug, Clone)]
pub enum AppCommand {
    // Boot
    LoadInitialState,

    // Navigation
    Navigate(Route),

    // Session
    SignIn,
    SignOut,
    CancelRedirect,
    RedirectNow,

    // Toasts
    ShowToast { surface: ToastSurface, content: ToastContent },
    DismissToast(ToastSurface),

    // Companies
    RefreshCompanies,
    SelectCompany(CompanyId),
    StartNewCompany,
    EditCompany(CompanyId),
    SaveCompanyDraft,
    CancelCompanyDraft,
    DeleteCompany(CompanyId),

    // Customers
    RefreshCustomers,
    StartNewCustomer,
    EditCustomer(CustomerId),
    SaveCustomerDraft,
    CancelCustomerDraft,
    DeleteCustomer(CustomerId),

    // Users and billing
    RefreshUsers,
    RefreshInvoices,
}
