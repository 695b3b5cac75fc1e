//! Wall-clock drivers for the toast and redirect countdowns.
//!
//! Each armed timer runs on its own worker thread, emitting one tick per
//! second into the event channel, stamped with the generation of the state
//! it was armed for. Cancellation is cooperative via [`CancellationToken`];
//! even a tick that slips past cancellation is harmless because the reducer
//! drops stale generations.

use std::time::Duration;

use anyhow::Context;
use tokio::sync::mpsc;
use tokio::time::interval;
use tokio_util::sync::CancellationToken;

use crate::app_core::DomainEvent;
use crate::async_runtime;
use crate::notify::ToastSurface;

pub struct TimerDriver {
    tx: mpsc::Sender<DomainEvent>,
    global_toast: Option<CancellationToken>,
    auth_toast: Option<CancellationToken>,
    redirect: Option<CancellationToken>,
}

impl TimerDriver {
    pub fn new(tx: mpsc::Sender<DomainEvent>) -> Self {
        Self {
            tx,
            global_toast: None,
            auth_toast: None,
            redirect: None,
        }
    }

    fn toast_slot(&mut self, surface: ToastSurface) -> &mut Option<CancellationToken> {
        match surface {
            ToastSurface::Global => &mut self.global_toast,
            ToastSurface::Auth => &mut self.auth_toast,
        }
    }

    pub fn arm_toast(
        &mut self,
        surface: ToastSurface,
        generation: u64,
        seconds: u32,
    ) -> anyhow::Result<()> {
        self.cancel_toast(surface);
        if seconds == 0 {
            return Ok(());
        }
        let token = CancellationToken::new();
        *self.toast_slot(surface) = Some(token.clone());

        let tx = self.tx.clone();
        spawn_ticker("opsdesk-toast-timer", token, seconds, move |_| {
            let tx = tx.clone();
            async move {
                let _ = tx
                    .send(DomainEvent::ToastTick {
                        surface,
                        generation,
                    })
                    .await;
            }
        })
    }

    pub fn cancel_toast(&mut self, surface: ToastSurface) {
        if let Some(token) = self.toast_slot(surface).take() {
            token.cancel();
        }
    }

    pub fn arm_redirect(&mut self, generation: u64, seconds: u32) -> anyhow::Result<()> {
        self.cancel_redirect();
        if seconds == 0 {
            return Ok(());
        }
        let token = CancellationToken::new();
        self.redirect = Some(token.clone());

        let tx = self.tx.clone();
        spawn_ticker("opsdesk-redirect-timer", token, seconds, move |_| {
            let tx = tx.clone();
            async move {
                let _ = tx.send(DomainEvent::RedirectTick { generation }).await;
            }
        })
    }

    pub fn cancel_redirect(&mut self) {
        if let Some(token) = self.redirect.take() {
            token.cancel();
        }
    }

    pub fn cancel_all(&mut self) {
        self.cancel_toast(ToastSurface::Global);
        self.cancel_toast(ToastSurface::Auth);
        self.cancel_redirect();
    }
}

fn spawn_ticker<F, Fut>(
    name: &'static str,
    token: CancellationToken,
    seconds: u32,
    mut on_tick: F,
) -> anyhow::Result<()>
where
    F: FnMut(u32) -> Fut + Send + 'static,
    Fut: std::future::Future<Output = ()> + Send,
{
    std::thread::Builder::new()
        .name(name.into())
        .spawn(move || {
            let rt = match async_runtime::runtime() {
                Ok(rt) => rt,
                Err(e) => {
                    tracing::warn!("timer runtime unavailable: {e}");
                    return;
                }
            };
            rt.block_on(async move {
                let mut ticker = interval(Duration::from_secs(1));
                // The first interval tick fires immediately; swallow it so
                // ticks land at one-second boundaries.
                ticker.tick().await;
                for n in 0..seconds {
                    tokio::select! {
                        _ = token.cancelled() => return,
                        _ = ticker.tick() => on_tick(n).await,
                    }
                }
            });
        })
        .with_context(|| format!("Failed to spawn timer thread {name}"))?;
    Ok(())
}
