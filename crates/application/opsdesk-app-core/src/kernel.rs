use std::sync::Arc;

use tokio::sync::mpsc;

use opsdesk_api::classify::{Classifier, FallbackOrder};
use opsdesk_api::client::{default_http_client, ApiClient, SessionContext};
use opsdesk_api::services::{
    AuthService, CompanyService, CustomerService, InvoiceService, SupplierService, UserService,
};
use opsdesk_config::{Endpoints, DEFAULT_TOAST_SECONDS};
use opsdesk_core::records::Company;
use opsdesk_core::validate::{email_validation_error, required_error};

use crate::app_core::{AppCommand, AppStore, DomainEvent, ResourceKind};
use crate::async_runtime;
use crate::domain::{AppState, Remote};
use crate::notify::{ToastContent, ToastSurface};
use crate::persistence::{FilePersistence, UiPrefs};
use crate::timers::TimerDriver;

/// Concrete service bundle over the backend platform modules. All services
/// share one HTTP client and one session context.
#[derive(Clone)]
pub struct ServiceSet {
    pub auth: AuthService,
    pub companies: CompanyService,
    pub customers: CustomerService,
    pub suppliers: SupplierService,
    pub users: UserService,
    pub invoices: InvoiceService,
    pub session: SessionContext,
}

impl ServiceSet {
    pub fn new(endpoints: Endpoints) -> Self {
        let http = default_http_client().unwrap_or_else(|_| reqwest::Client::new());
        let session = SessionContext::new();
        let client = Arc::new(ApiClient::new(http, endpoints, session.clone()));
        Self {
            auth: AuthService::new(client.clone()),
            companies: CompanyService::new(client.clone()),
            customers: CustomerService::new(client.clone()),
            suppliers: SupplierService::new(client.clone()),
            users: UserService::new(client.clone()),
            invoices: InvoiceService::new(client),
            session,
        }
    }

    pub fn from_env() -> Self {
        Self::new(Endpoints::from_env())
    }
}

pub struct AppKernel {
    pub store: AppStore,
    services: ServiceSet,
    classifier: Classifier,
    timers: TimerDriver,

    tx: mpsc::Sender<DomainEvent>,
    rx: mpsc::Receiver<DomainEvent>,
}

impl AppKernel {
    pub fn new(services: ServiceSet) -> Self {
        let (tx, rx) = mpsc::channel(100);
        Self {
            store: AppStore::new(AppState::default()),
            services,
            classifier: Classifier::new(FallbackOrder::ErrorsFirst),
            timers: TimerDriver::new(tx.clone()),
            tx,
            rx,
        }
    }

    pub fn dispatch(&mut self, cmd: AppCommand) {
        match cmd {
            AppCommand::LoadInitialState => {
                self.store.apply(DomainEvent::BootLoadingStarted);
                let tx = self.tx.clone();
                let spawn_res = std::thread::Builder::new()
                    .name("opsdesk-load-initial-state".into())
                    .spawn(move || {
                        match FilePersistence::new().load_prefs() {
                            Ok(prefs) => {
                                let _ = tx.blocking_send(DomainEvent::InitialStateLoaded { prefs });
                            }
                            Err(e) => {
                                let _ = tx.blocking_send(DomainEvent::BootFailed {
                                    message: e.to_string(),
                                });
                            }
                        }
                    });
                if let Err(e) = spawn_res {
                    self.store.apply(DomainEvent::BootFailed {
                        message: format!("Failed to start boot worker thread: {e}"),
                    });
                }
            }

            AppCommand::Navigate(r) => {
                if r.requires_session() && !self.store.state().session.is_signed_in() {
                    return;
                }
                self.store.apply(DomainEvent::RouteChanged(r));
            }

            AppCommand::SignIn => {
                let snapshot = self.store.state();
                if snapshot.signing_in {
                    return;
                }
                let draft = snapshot.signin.clone();
                // The form gates submission on validity; a failed check here
                // means a programmatic dispatch, which is simply dropped.
                if !email_validation_error(&draft.email).is_empty() || draft.password.is_empty() {
                    return;
                }

                self.store.apply(DomainEvent::SignInStarted);
                self.remember_email(&draft.email);

                let auth = self.services.auth.clone();
                let classifier = self.classifier.clone();
                let tx = self.tx.clone();
                self.spawn_worker("opsdesk-sign-in", move || {
                    let res = async_runtime::runtime()
                        .map_err(runtime_failure)
                        .and_then(|rt| {
                            rt.block_on(auth.sign_in(&draft.email, &draft.password))
                                .map_err(|e| classifier.classify(&e))
                        });
                    match res {
                        Ok(profile) => {
                            let _ = tx.blocking_send(DomainEvent::SignedIn { profile });
                        }
                        Err(classified) => {
                            let _ = tx.blocking_send(DomainEvent::SignInFailed {
                                toast: ToastContent::from_classified(
                                    classified,
                                    DEFAULT_TOAST_SECONDS,
                                ),
                            });
                        }
                    }
                });
            }

            AppCommand::SignOut => {
                self.services.auth.sign_out();
                self.timers.cancel_all();
                self.store.apply(DomainEvent::SignedOut);
            }

            AppCommand::CancelRedirect => {
                self.timers.cancel_redirect();
                self.store.with_state_mut(|state| state.redirect.cancel());
            }

            AppCommand::RedirectNow => {
                self.timers.cancel_redirect();
                self.store.with_state_mut(|state| {
                    let dest = state.redirect.resolve_now(None);
                    state.pending_navigation = Some(dest);
                });
            }

            AppCommand::ShowToast { surface, content } => {
                let ev = DomainEvent::ToastShown { surface, content };
                self.store.apply(ev.clone());
                self.after_apply(&ev);
            }

            AppCommand::DismissToast(surface) => {
                self.timers.cancel_toast(surface);
                self.store.apply(DomainEvent::ToastDismissed { surface });
            }

            AppCommand::RefreshCompanies => {
                self.store
                    .apply(DomainEvent::ResourceLoading(ResourceKind::Companies));
                let companies = self.services.companies.clone();
                self.spawn_fetch(ResourceKind::Companies, "opsdesk-load-companies", move |rt| {
                    rt.block_on(companies.list()).map(DomainEvent::CompaniesLoaded)
                });
            }

            AppCommand::SelectCompany(id) => {
                self.store.apply(DomainEvent::CompanySelected(id));
                if self.store.state().customers == Remote::NotAsked {
                    self.dispatch(AppCommand::RefreshCustomers);
                    self.dispatch(AppCommand::RefreshInvoices);
                }
            }

            AppCommand::StartNewCompany => {
                self.store
                    .apply(DomainEvent::CompanyDraftOpened(Company::default()));
            }

            AppCommand::EditCompany(id) => {
                let snapshot = self.store.state();
                if let Some(c) = snapshot
                    .companies
                    .loaded()
                    .and_then(|list| list.iter().find(|c| c.id == id))
                    .cloned()
                {
                    self.store.apply(DomainEvent::CompanyDraftOpened(c));
                }
            }

            AppCommand::SaveCompanyDraft => {
                let Some(draft) = self.store.state().company_draft else {
                    return;
                };
                if !required_error("Name", &draft.name).is_empty() {
                    return;
                }

                let companies = self.services.companies.clone();
                let classifier = self.classifier.clone();
                let tx = self.tx.clone();
                let is_new = draft.id.is_empty();
                self.spawn_worker("opsdesk-save-company", move || {
                    let res = async_runtime::runtime()
                        .map_err(runtime_failure)
                        .and_then(|rt| {
                            let call = if is_new {
                                rt.block_on(companies.create(&draft))
                            } else {
                                rt.block_on(companies.update(&draft))
                            };
                            call.map_err(|e| classifier.classify(&e))
                        });
                    match res {
                        Ok(saved) => {
                            let _ = tx.blocking_send(DomainEvent::CompanySaved(saved));
                            let _ = tx.blocking_send(DomainEvent::ToastShown {
                                surface: ToastSurface::Global,
                                content: ToastContent::success("Company saved"),
                            });
                        }
                        Err(classified) => {
                            let _ = tx.blocking_send(DomainEvent::ToastShown {
                                surface: ToastSurface::Global,
                                content: ToastContent::from_classified(
                                    classified,
                                    DEFAULT_TOAST_SECONDS,
                                ),
                            });
                        }
                    }
                });
            }

            AppCommand::CancelCompanyDraft => {
                self.store.apply(DomainEvent::CompanyDraftCancelled);
            }

            AppCommand::DeleteCompany(id) => {
                let companies = self.services.companies.clone();
                let classifier = self.classifier.clone();
                let tx = self.tx.clone();
                self.spawn_worker("opsdesk-delete-company", move || {
                    let res = async_runtime::runtime()
                        .map_err(runtime_failure)
                        .and_then(|rt| {
                            rt.block_on(companies.delete(&id))
                                .map_err(|e| classifier.classify(&e))
                        });
                    match res {
                        Ok(()) => {
                            let _ = tx.blocking_send(DomainEvent::CompanyDeleted(id));
                            let _ = tx.blocking_send(DomainEvent::ToastShown {
                                surface: ToastSurface::Global,
                                content: ToastContent::success("Company deleted"),
                            });
                        }
                        Err(classified) => {
                            let _ = tx.blocking_send(DomainEvent::ToastShown {
                                surface: ToastSurface::Global,
                                content: ToastContent::from_classified(
                                    classified,
                                    DEFAULT_TOAST_SECONDS,
                                ),
                            });
                        }
                    }
                });
            }

            AppCommand::RefreshCustomers => {
                let Some(company_id) = self.store.state().selected_company_id else {
                    return;
                };
                self.store
                    .apply(DomainEvent::ResourceLoading(ResourceKind::Customers));
                let customers = self.services.customers.clone();
                self.spawn_fetch(ResourceKind::Customers, "opsdesk-load-customers", move |rt| {
                    rt.block_on(customers.list_for_company(&company_id))
                        .map(DomainEvent::CustomersLoaded)
                });
            }

            AppCommand::StartNewCustomer => {
                let Some(company_id) = self.store.state().selected_company_id else {
                    return;
                };
                self.store.apply(DomainEvent::CustomerDraftOpened(
                    opsdesk_core::Customer::draft_for(company_id),
                ));
            }

            AppCommand::EditCustomer(id) => {
                let snapshot = self.store.state();
                if let Some(c) = snapshot
                    .customers
                    .loaded()
                    .and_then(|list| list.iter().find(|c| c.id == id))
                    .cloned()
                {
                    self.store.apply(DomainEvent::CustomerDraftOpened(c));
                }
            }

            AppCommand::SaveCustomerDraft => {
                let Some(draft) = self.store.state().customer_draft else {
                    return;
                };
                if !required_error("Name", &draft.name).is_empty()
                    || !email_validation_error(&draft.email).is_empty()
                {
                    return;
                }

                let customers = self.services.customers.clone();
                let classifier = self.classifier.clone();
                let tx = self.tx.clone();
                let is_new = draft.id.is_empty();
                self.spawn_worker("opsdesk-save-customer", move || {
                    let res = async_runtime::runtime()
                        .map_err(runtime_failure)
                        .and_then(|rt| {
                            let call = if is_new {
                                rt.block_on(customers.create(&draft))
                            } else {
                                rt.block_on(customers.update(&draft))
                            };
                            call.map_err(|e| classifier.classify(&e))
                        });
                    match res {
                        Ok(saved) => {
                            let _ = tx.blocking_send(DomainEvent::CustomerSaved(saved));
                            let _ = tx.blocking_send(DomainEvent::ToastShown {
                                surface: ToastSurface::Global,
                                content: ToastContent::success("Customer saved"),
                            });
                        }
                        Err(classified) => {
                            let _ = tx.blocking_send(DomainEvent::ToastShown {
                                surface: ToastSurface::Global,
                                content: ToastContent::from_classified(
                                    classified,
                                    DEFAULT_TOAST_SECONDS,
                                ),
                            });
                        }
                    }
                });
            }

            AppCommand::CancelCustomerDraft => {
                self.store.apply(DomainEvent::CustomerDraftCancelled);
            }

            AppCommand::DeleteCustomer(id) => {
                let customers = self.services.customers.clone();
                let classifier = self.classifier.clone();
                let tx = self.tx.clone();
                self.spawn_worker("opsdesk-delete-customer", move || {
                    let res = async_runtime::runtime()
                        .map_err(runtime_failure)
                        .and_then(|rt| {
                            rt.block_on(customers.delete(&id))
                                .map_err(|e| classifier.classify(&e))
                        });
                    match res {
                        Ok(()) => {
                            let _ = tx.blocking_send(DomainEvent::CustomerDeleted(id));
                        }
                        Err(classified) => {
                            let _ = tx.blocking_send(DomainEvent::ToastShown {
                                surface: ToastSurface::Global,
                                content: ToastContent::from_classified(
                                    classified,
                                    DEFAULT_TOAST_SECONDS,
                                ),
                            });
                        }
                    }
                });
            }

            AppCommand::RefreshUsers => {
                self.store
                    .apply(DomainEvent::ResourceLoading(ResourceKind::Users));
                let users = self.services.users.clone();
                self.spawn_fetch(ResourceKind::Users, "opsdesk-load-users", move |rt| {
                    rt.block_on(users.list()).map(DomainEvent::UsersLoaded)
                });
            }

            AppCommand::RefreshInvoices => {
                let Some(company_id) = self.store.state().selected_company_id else {
                    return;
                };
                self.store
                    .apply(DomainEvent::ResourceLoading(ResourceKind::Invoices));
                let invoices = self.services.invoices.clone();
                self.spawn_fetch(ResourceKind::Invoices, "opsdesk-load-invoices", move |rt| {
                    rt.block_on(invoices.list_for_company(&company_id))
                        .map(DomainEvent::InvoicesLoaded)
                });
            }
        }
    }

    /// Drains worker events into the store. Called once per UI frame.
    pub fn tick(&mut self) {
        while let Ok(ev) = self.rx.try_recv() {
            self.store.apply(ev.clone());
            self.after_apply(&ev);
        }
    }

    pub fn sender(&self) -> mpsc::Sender<DomainEvent> {
        self.tx.clone()
    }

    /// Side effects that depend on post-reduce state: arming the wall-clock
    /// timers with the generation the reducer just minted.
    fn after_apply(&mut self, ev: &DomainEvent) {
        match ev {
            DomainEvent::ToastShown { surface, content } => {
                let generation = self.store.state().surface(*surface).generation();
                if let Err(e) = self.timers.arm_toast(*surface, generation, content.duration_secs)
                {
                    tracing::warn!("failed to arm toast timer: {e}");
                }
            }
            DomainEvent::SignInFailed { toast } => {
                let generation = self.store.state().auth_toast.generation();
                if let Err(e) =
                    self.timers
                        .arm_toast(ToastSurface::Auth, generation, toast.duration_secs)
                {
                    tracing::warn!("failed to arm toast timer: {e}");
                }
            }
            DomainEvent::SignedIn { .. } => {
                let snapshot = self.store.state();
                let generation = snapshot.redirect.generation();
                let seconds = snapshot.redirect.countdown_seconds;
                if let Err(e) = self.timers.arm_redirect(generation, seconds) {
                    tracing::warn!("failed to arm redirect timer: {e}");
                }
            }
            DomainEvent::CompaniesLoaded(_) => {
                let snapshot = self.store.state();
                if snapshot.selected_company_id.is_some()
                    && snapshot.customers == Remote::NotAsked
                {
                    self.dispatch(AppCommand::RefreshCustomers);
                    self.dispatch(AppCommand::RefreshInvoices);
                }
            }
            _ => {}
        }
    }

    fn remember_email(&self, email: &str) {
        let prefs = self.store.with_state_mut(|state| {
            if state.prefs.remember_email {
                state.prefs.remembered_email = email.to_string();
                Some(state.prefs.clone())
            } else {
                None
            }
        });
        if let Some(prefs) = prefs {
            self.spawn_worker("opsdesk-save-prefs", move || {
                if let Err(e) = FilePersistence::new().save_prefs(&prefs) {
                    tracing::warn!("failed to persist preferences: {e}");
                }
            });
        }
    }

    /// Updates preferences in memory without touching disk; pair with
    /// [`AppKernel::save_prefs`] to persist.
    pub fn set_prefs(&self, prefs: UiPrefs) {
        self.store.with_state_mut(|state| state.prefs = prefs);
    }

    pub fn save_prefs(&self, prefs: UiPrefs) {
        self.store
            .with_state_mut(|state| state.prefs = prefs.clone());
        self.spawn_worker("opsdesk-save-prefs", move || {
            if let Err(e) = FilePersistence::new().save_prefs(&prefs) {
                tracing::warn!("failed to persist preferences: {e}");
            }
        });
    }

    fn spawn_worker(&self, name: &'static str, body: impl FnOnce() + Send + 'static) {
        let spawn_res = std::thread::Builder::new().name(name.into()).spawn(body);
        if let Err(e) = spawn_res {
            self.store.apply(DomainEvent::ToastShown {
                surface: ToastSurface::Global,
                content: ToastContent::new(
                    format!("Failed to start worker thread: {e}"),
                    opsdesk_api::classify::Severity::Error,
                    DEFAULT_TOAST_SECONDS,
                ),
            });
        }
    }

    /// Shared list-fetch shape: on failure the slot reverts and the error
    /// lands on the global toast surface.
    fn spawn_fetch<F>(&self, kind: ResourceKind, name: &'static str, call: F)
    where
        F: FnOnce(&tokio::runtime::Runtime) -> Result<DomainEvent, opsdesk_api::ApiFailure>
            + Send
            + 'static,
    {
        let classifier = self.classifier.clone();
        let tx = self.tx.clone();
        self.spawn_worker(name, move || {
            let res = async_runtime::runtime()
                .map_err(runtime_failure)
                .and_then(|rt| call(rt).map_err(|e| classifier.classify(&e)));
            match res {
                Ok(ev) => {
                    let _ = tx.blocking_send(ev);
                }
                Err(classified) => {
                    let _ = tx.blocking_send(DomainEvent::ResourceLoadFailed(kind));
                    let _ = tx.blocking_send(DomainEvent::ToastShown {
                        surface: ToastSurface::Global,
                        content: ToastContent::from_classified(classified, DEFAULT_TOAST_SECONDS),
                    });
                }
            }
        });
    }
}

fn runtime_failure(e: anyhow::Error) -> opsdesk_api::ClassifiedError {
    opsdesk_api::ClassifiedError::new(
        format!("Worker runtime unavailable: {e}"),
        opsdesk_api::Severity::Error,
    )
}
