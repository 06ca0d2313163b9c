//! Transient notifications.
//!
//! At most one toast is visible. Showing a toast replaces the current one and restarts
//! its dismissal timer. The timer is a cancellable task owned by the `Notifier`: a thread
//! waiting on either a cancel signal or the deadline. On deadline it sends a
//! `ToastExpired` tagged with the toast's generation to the owner's event loop, which
//! hands it back to [`Notifier::expire`]. Stale generations are ignored, so an expiry
//! racing a newer toast never hides it. Dropping the notifier cancels the pending timer.
use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, after, bounded, select, unbounded};
use log::debug;

/// Default toast lifetime.
pub const TOAST_LIFETIME: Duration = Duration::from_secs(3);

/// Toast state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub visible: bool,
}

/// Deadline reached for the toast of the given generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastExpired(pub u64);

/// Pending dismissal; cancelled explicitly or by being dropped.
struct DismissTimer {
    cancel_tx: Sender<()>,
}

impl DismissTimer {
    fn schedule(lifetime: Duration, generation: u64, expired_tx: Sender<ToastExpired>) -> Self {
        let (cancel_tx, cancel_rx) = bounded::<()>(1);
        thread::spawn(move || {
            select! {
                recv(cancel_rx) -> _ => debug!("Toast timer {} cancelled", generation),
                recv(after(lifetime)) -> _ => {
                    if expired_tx.send(ToastExpired(generation)).is_err() {
                        debug!("Toast timer {} fired after notifier was dropped", generation);
                    }
                }
            }
        });
        Self { cancel_tx }
    }

    fn cancel(self) {
        let _ = self.cancel_tx.try_send(());
    }
}

/// Owner of the single toast slot.
pub struct Notifier {
    toast: Toast,
    generation: u64,
    lifetime: Duration,
    timer: Option<DismissTimer>,
    expired_tx: Sender<ToastExpired>,
    expired_rx: Receiver<ToastExpired>,
}

impl Notifier {
    pub fn new(lifetime: Duration) -> Self {
        let (expired_tx, expired_rx) = unbounded();
        Self {
            toast: Toast::default(),
            generation: 0,
            lifetime,
            timer: None,
            expired_tx,
            expired_rx,
        }
    }

    /// Message of the visible toast, if any.
    pub fn visible_message(&self) -> Option<&str> {
        self.toast
            .visible
            .then_some(self.toast.message.as_str())
    }

    /// Deadlines to feed back into [`Self::expire`].
    pub fn expirations(&self) -> Receiver<ToastExpired> {
        self.expired_rx.clone()
    }

    /// Shows `message`, replacing any visible toast and restarting the timer.
    pub fn show(&mut self, message: &str) {
        self.cancel_timer();
        self.generation += 1;
        self.toast = Toast {
            message: message.to_string(),
            visible: true,
        };
        self.timer = Some(DismissTimer::schedule(
            self.lifetime,
            self.generation,
            self.expired_tx.clone(),
        ));
    }

    /// Hides the toast early.
    pub fn dismiss(&mut self) {
        self.cancel_timer();
        self.toast.visible = false;
    }

    /// Hides the toast if `expired` belongs to it. Returns whether anything changed.
    pub fn expire(&mut self, expired: ToastExpired) -> bool {
        if expired.0 != self.generation || !self.toast.visible {
            return false;
        }
        self.timer = None;
        self.toast.visible = false;
        true
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
    }
}

impl Drop for Notifier {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}
