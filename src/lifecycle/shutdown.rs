//! Cancellation of in-flight calls.

use std::sync::Arc;

use tokio::sync::watch;

/// Cancellation signal shared by in-flight calls.
///
/// The signal is a latched flag: a call that subscribes after
/// [`trigger`](Self::trigger) still sees it. Each call passes its own receiver to
/// [`RequestExecutor::execute_until`](crate::client::RequestExecutor::execute_until).
#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: Arc<watch::Sender<bool>>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Receiver for one call.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }

    /// Cancel every subscribed call, and every call subscribing later.
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_triggered(&self) -> bool {
        *self.tx.borrow()
    }

    /// Number of calls still listening.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
