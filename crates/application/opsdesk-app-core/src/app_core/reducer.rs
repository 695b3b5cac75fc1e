use chrono::Utc;

use crate::domain::{AppState, BootState, Remote, Route, Session, SignInDraft};

use super::events::{DomainEvent, ResourceKind};

pub fn reduce(mut state: AppState, ev: DomainEvent) -> AppState {
    match ev {
        DomainEvent::BootLoadingStarted => {
            state.boot = BootState::Loading;
        }

        DomainEvent::InitialStateLoaded { prefs } => {
            if prefs.remember_email {
                state.signin.email = prefs.remembered_email.clone();
            }
            state.prefs = prefs;
            state.route = Route::SignIn;
            state.boot = BootState::Ready;
        }

        DomainEvent::BootFailed { message } => {
            state.boot = BootState::Failed(message);
        }

        DomainEvent::RouteChanged(r) => state.route = r,

        DomainEvent::SignInStarted => {
            state.signing_in = true;
            state.auth_toast.hide();
        }

        DomainEvent::SignedIn { profile } => {
            state.signing_in = false;
            state.session = Session {
                profile: Some(profile),
                signed_in_at: Some(Utc::now()),
            };
            state.signin.password.clear();
            state.redirect.start(None);
        }

        DomainEvent::SignInFailed { toast } => {
            state.signing_in = false;
            state.auth_toast.show(toast);
        }

        DomainEvent::SignedOut => {
            let prefs = state.prefs.clone();
            let email = if prefs.remember_email {
                prefs.remembered_email.clone()
            } else {
                String::new()
            };
            state = AppState {
                boot: BootState::Ready,
                signin: SignInDraft {
                    email,
                    password: String::new(),
                },
                prefs,
                ..AppState::default()
            };
        }

        DomainEvent::ToastShown { surface, content } => {
            state.surface_mut(surface).show(content);
        }

        DomainEvent::ToastDismissed { surface } => {
            state.surface_mut(surface).hide();
        }

        DomainEvent::ToastTick {
            surface,
            generation,
        } => {
            state.surface_mut(surface).apply_tick(generation);
        }

        DomainEvent::RedirectTick { generation } => {
            if let Some(dest) = state.redirect.apply_tick(generation) {
                state.pending_navigation = Some(dest);
            }
        }

        DomainEvent::ResourceLoading(kind) => match kind {
            ResourceKind::Companies => state.companies = Remote::Loading,
            ResourceKind::Customers => state.customers = Remote::Loading,
            ResourceKind::Users => state.users = Remote::Loading,
            ResourceKind::Invoices => state.invoices = Remote::Loading,
        },

        // A failed load falls back to "not asked" rather than clobbering
        // the screen with a bogus empty list.
        DomainEvent::ResourceLoadFailed(kind) => match kind {
            ResourceKind::Companies => reset_if_loading(&mut state.companies),
            ResourceKind::Customers => reset_if_loading(&mut state.customers),
            ResourceKind::Users => reset_if_loading(&mut state.users),
            ResourceKind::Invoices => reset_if_loading(&mut state.invoices),
        },

        DomainEvent::CompaniesLoaded(list) => {
            let selected_still_present = state
                .selected_company_id
                .as_ref()
                .is_some_and(|id| list.iter().any(|c| &c.id == id));
            if !selected_still_present {
                state.selected_company_id = list.first().map(|c| c.id.clone());
                state.customers = Remote::NotAsked;
                state.invoices = Remote::NotAsked;
            }
            state.companies = Remote::Loaded(list);
        }

        DomainEvent::CustomersLoaded(list) => state.customers = Remote::Loaded(list),
        DomainEvent::UsersLoaded(list) => state.users = Remote::Loaded(list),
        DomainEvent::InvoicesLoaded(list) => state.invoices = Remote::Loaded(list),

        DomainEvent::CompanySelected(id) => {
            if state.selected_company_id.as_ref() != Some(&id) {
                state.selected_company_id = Some(id);
                state.customers = Remote::NotAsked;
                state.invoices = Remote::NotAsked;
            }
        }

        DomainEvent::CompanyDraftOpened(c) => state.company_draft = Some(c),
        DomainEvent::CompanyDraftCancelled => state.company_draft = None,

        DomainEvent::CompanySaved(c) => {
            match state.companies.loaded_mut() {
                Some(list) => {
                    if let Some(ix) = list.iter().position(|x| x.id == c.id) {
                        list[ix] = c.clone();
                    } else {
                        list.push(c.clone());
                    }
                }
                None => state.companies = Remote::Loaded(vec![c.clone()]),
            }
            if state.selected_company_id.is_none() {
                state.selected_company_id = Some(c.id);
            }
            state.company_draft = None;
        }

        DomainEvent::CompanyDeleted(id) => {
            if let Some(list) = state.companies.loaded_mut() {
                list.retain(|c| c.id != id);
            }
            if state.selected_company_id.as_ref() == Some(&id) {
                state.selected_company_id = state
                    .companies
                    .loaded()
                    .and_then(|list| list.first())
                    .map(|c| c.id.clone());
                state.customers = Remote::NotAsked;
                state.invoices = Remote::NotAsked;
            }
        }

        DomainEvent::CustomerDraftOpened(c) => state.customer_draft = Some(c),
        DomainEvent::CustomerDraftCancelled => state.customer_draft = None,

        DomainEvent::CustomerSaved(c) => {
            match state.customers.loaded_mut() {
                Some(list) => {
                    if let Some(ix) = list.iter().position(|x| x.id == c.id) {
                        list[ix] = c;
                    } else {
                        list.push(c);
                    }
                }
                None => state.customers = Remote::Loaded(vec![c]),
            }
            state.customer_draft = None;
        }

        DomainEvent::CustomerDeleted(id) => {
            if let Some(list) = state.customers.loaded_mut() {
                list.retain(|c| c.id != id);
            }
        }
    }
    state
}

fn reset_if_loading<T>(slot: &mut Remote<T>) {
    if slot.is_loading() {
        *slot = Remote::NotAsked;
    }
}
