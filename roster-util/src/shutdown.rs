use tokio::sync::watch;

/// A single-fire, multi-waiter shutdown signal.
///
/// Backed by a [`watch`] channel rather than [`tokio::sync::Notify`] so that
/// a waiter that calls [`Shutdown::wait`] *after* [`Shutdown::trigger`] still
/// observes the signal instead of blocking forever.
#[derive(Clone)]
pub struct Shutdown {
    tx: watch::Sender<bool>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Shutdown { tx }
    }

    /// Wake every current and future waiter. Idempotent.
    pub fn trigger(&self) {
        let _ = self.tx.send(true);
    }

    /// Resolves once [`Shutdown::trigger`] has been called, including if it
    /// was already called before this call.
    pub async fn wait(&self) {
        let mut rx = self.tx.subscribe();
        if *rx.borrow() {
            return;
        }
        let _ = rx.changed().await;
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
