use std::sync::{Arc, Mutex};

use opsdesk_core::records::{Company, Customer};

use crate::domain::{AppState, Route, SignInDraft};

use super::{events::DomainEvent, reducer::reduce};

#[derive(Clone)]
pub struct AppStore {
    inner: Arc<Mutex<AppState>>,
}

impl AppStore {
    pub fn new(state: AppState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    pub fn state(&self) -> AppState {
        self.inner.lock().unwrap().clone()
    }

    pub fn apply(&self, ev: DomainEvent) {
        let mut guard = self.inner.lock().unwrap();
        let next = reduce(guard.clone(), ev);
        *guard = next;
    }

    pub(crate) fn with_state_mut<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        let mut guard = self.inner.lock().unwrap();
        f(&mut guard)
    }

    pub fn with_signin_mut<R>(&self, f: impl FnOnce(&mut SignInDraft) -> R) -> R {
        let mut guard = self.inner.lock().unwrap();
        f(&mut guard.signin)
    }

    pub fn with_company_draft_mut<R>(&self, f: impl FnOnce(&mut Company) -> R) -> Option<R> {
        let mut guard = self.inner.lock().unwrap();
        guard.company_draft.as_mut().map(f)
    }

    pub fn with_customer_draft_mut<R>(&self, f: impl FnOnce(&mut Customer) -> R) -> Option<R> {
        let mut guard = self.inner.lock().unwrap();
        guard.customer_draft.as_mut().map(f)
    }

    /// Hands the deferred navigation to the UI, clearing the slot so it
    /// fires exactly once.
    pub fn take_pending_navigation(&self) -> Option<Route> {
        self.inner.lock().unwrap().pending_navigation.take()
    }
}
