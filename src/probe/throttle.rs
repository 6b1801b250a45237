use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// Global bound on concurrent HTTP requests, independent of the worker count.
/// Held only while the Prober is in flight; DNS resolution never acquires it.
pub struct HttpThrottle {
    semaphore: Arc<Semaphore>,
}

impl HttpThrottle {
    pub fn new(permits: usize) -> Self {
        Self { semaphore: Arc::new(Semaphore::new(permits)) }
    }

    pub async fn acquire(&self) -> OwnedSemaphorePermit {
        self.semaphore.clone().acquire_owned().await.expect("http semaphore closed")
    }
}
