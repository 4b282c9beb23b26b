//! Completion queue
//!
//! Results are handed back on a dedicated delivery thread that drains a
//! channel. One queue can be shared by any number of clients; the thread
//! exits once the last handle is dropped.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::thread::ThreadId;

use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::error::{Error, Result};

type Job = Box<dyn FnOnce() + Send + 'static>;

/// Name of the delivery thread unless one is given.
pub const DEFAULT_COMPLETION_QUEUE_NAME: &str = "canvaskit-completion";

/// Execution context on which request completions run.
#[derive(Clone)]
pub struct CompletionQueue {
    sender: mpsc::UnboundedSender<Job>,
    name: Arc<str>,
    thread: ThreadId,
}

impl CompletionQueue {
    /// Start a queue with the default thread name.
    pub fn spawn() -> std::io::Result<Self> {
        Self::named(DEFAULT_COMPLETION_QUEUE_NAME)
    }

    /// Start a queue whose delivery thread is called `name`.
    pub fn named(name: impl Into<String>) -> std::io::Result<Self> {
        let name: String = name.into();
        let (sender, mut receiver) = mpsc::unbounded_channel::<Job>();

        let thread_name = name.clone();
        let handle = std::thread::Builder::new().name(name.clone()).spawn(move || {
            while let Some(job) = receiver.blocking_recv() {
                if let Err(panic) = catch_unwind(AssertUnwindSafe(job)) {
                    error!(
                        queue = %thread_name,
                        panic = %panic_message(panic.as_ref()),
                        "completion callback panicked"
                    );
                }
            }
            debug!(queue = %thread_name, "completion queue stopped");
        })?;

        Ok(Self {
            sender,
            name: name.into(),
            thread: handle.thread().id(),
        })
    }

    /// Run `job` on the delivery thread.
    pub fn deliver(&self, job: impl FnOnce() + Send + 'static) -> Result<()> {
        self.sender
            .send(Box::new(job))
            .map_err(|_| Error::CompletionQueueClosed)
    }

    /// Name of the delivery thread. Several queues may share a name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the caller is running on this queue's delivery thread.
    pub fn is_current(&self) -> bool {
        std::thread::current().id() == self.thread
    }
}

impl std::fmt::Debug for CompletionQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionQueue")
            .field("name", &self.name)
            .field("closed", &self.sender.is_closed())
            .finish()
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
