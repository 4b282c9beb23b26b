//! Request dispatch
//!
//! The [`Dispatcher`] sends a built request through the transport, routes
//! the response through the caller's [`Shape`], and hands the result to the
//! [`CompletionQueue`]. Each request runs as its own tokio task.

use std::sync::Arc;

use canvaskit_transport::{HttpRequest, Transport};
use tokio::sync::oneshot;

use crate::error::{Error, Result};
use crate::observability::RequestTrace;

pub use completion::{CompletionQueue, DEFAULT_COMPLETION_QUEUE_NAME};
pub use shape::{Collection, Created, Empty, Shape, Single};

mod completion;
mod shape;

/// Sends requests and delivers their decoded results.
#[derive(Clone)]
pub struct Dispatcher {
    transport: Arc<dyn Transport>,
    completions: CompletionQueue,
}

impl Dispatcher {
    /// Create a dispatcher over `transport`, delivering on `completions`.
    pub fn new(transport: Arc<dyn Transport>, completions: CompletionQueue) -> Self {
        Self {
            transport,
            completions,
        }
    }

    /// The completion queue results are delivered on.
    pub fn completion_queue(&self) -> &CompletionQueue {
        &self.completions
    }

    /// Send `request` and run `completion` with the result on the completion
    /// queue.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn submit<S, F>(&self, request: HttpRequest, completion: F)
    where
        S: Shape,
        F: FnOnce(Result<S::Output>) + Send + 'static,
    {
        let transport = Arc::clone(&self.transport);
        let completions = self.completions.clone();

        tokio::spawn(async move {
            let result = execute::<S>(transport.as_ref(), request).await;
            if completions.deliver(move || completion(result)).is_err() {
                tracing::warn!(
                    queue = completions.name(),
                    "completion queue closed, dropping result"
                );
            }
        });
    }

    /// Send `request` and wait for the result, which is fulfilled from the
    /// completion queue.
    pub async fn send<S: Shape>(&self, request: HttpRequest) -> Result<S::Output> {
        let (tx, rx) = oneshot::channel();
        self.submit::<S, _>(request, move |result| {
            // The receiver is gone if the caller stopped waiting.
            let _ = tx.send(result);
        });
        rx.await.map_err(|_| Error::CompletionQueueClosed)?
    }

    /// Run `completion` with `error` on the completion queue, for a request
    /// that failed before it could be sent.
    pub fn reject<T, F>(&self, error: Error, completion: F)
    where
        F: FnOnce(Result<T>) + Send + 'static,
    {
        if self.completions.deliver(move || completion(Err(error))).is_err() {
            tracing::warn!(
                queue = self.completions.name(),
                "completion queue closed, dropping error"
            );
        }
    }

    /// Awaitable form of [`reject`](Self::reject).
    pub async fn fail<T: Send + 'static>(&self, error: Error) -> Result<T> {
        let (tx, rx) = oneshot::channel();
        self.reject(error, move |result| {
            let _ = tx.send(result);
        });
        rx.await.map_err(|_| Error::CompletionQueueClosed)?
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("completions", &self.completions)
            .finish_non_exhaustive()
    }
}

async fn execute<S: Shape>(transport: &dyn Transport, request: HttpRequest) -> Result<S::Output> {
    let trace = RequestTrace::begin::<S>(&request);

    let response = match transport.send_http(request).await {
        Ok(response) => response,
        Err(e) => {
            trace.transport_failed(&e);
            return Err(e.into());
        }
    };

    let result = S::from_response(&response);
    trace.completed(response.status, response.body.len(), &result);
    result
}
