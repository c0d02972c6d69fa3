use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;

/// Active lifetime of a page. Every fetch a page issues is scoped to it;
/// once [`PageLifetime::end`] is called, in-flight results are discarded.
#[derive(Debug, Clone)]
pub struct PageLifetime {
    ended: Arc<watch::Sender<bool>>,
}

impl Default for PageLifetime {
    fn default() -> Self {
        Self::new()
    }
}

impl PageLifetime {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { ended: Arc::new(tx) }
    }

    pub fn end(&self) {
        self.ended.send_replace(true);
    }

    pub fn is_ended(&self) -> bool {
        *self.ended.borrow()
    }

    /// Run `fut` unless the lifetime ends first. Returns `None` when the
    /// lifetime ended before or while `fut` was pending.
    pub async fn scope<F: Future>(&self, fut: F) -> Option<F::Output> {
        let mut ended = self.ended.subscribe();
        tokio::select! {
            biased;
            _ = ended.wait_for(|ended| *ended) => None,
            out = fut => (!self.is_ended()).then_some(out),
        }
    }
}
