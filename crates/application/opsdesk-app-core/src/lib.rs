pub mod app_core;
pub mod async_runtime;
pub mod debounce;
pub mod domain;
pub mod kernel;
pub mod notify;
pub mod persistence;
pub mod redirect;
pub mod timers;
pub mod viewmodel;

pub use app_core::commands::AppCommand;
pub use app_core::events::{DomainEvent, ResourceKind};
pub use app_core::store::AppStore;
pub use domain::{AppState, BootState, Remote, Route, Session, SignInDraft};
pub use kernel::{AppKernel, ServiceSet};
pub use notify::{NotificationState, ToastContent, ToastSurface};
pub use persistence::{FilePersistence, UiPrefs};
pub use redirect::RedirectState;

pub use opsdesk_api::classify::Severity;
