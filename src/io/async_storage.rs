//! Background execution of key-value storage requests.
//!
//! Storage I/O never runs on the UI thread. [`AsyncStorage`] owns one worker
//! thread that executes requests in the order they were issued, so a later
//! write of the same key always lands after an earlier one. Each request
//! hands back a [`PendingOp`] the UI thread can poll once per frame.

use anyhow::{anyhow, Context, Result};
use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::debug;

use crate::traits::KeyValueStore;

/// Callback run on the worker thread after each completed request.
///
/// The GUI uses it to request a repaint so results are picked up promptly.
pub type Waker = Arc<dyn Fn() + Send + Sync>;

enum Request {
    Get {
        key: String,
        reply: Sender<Result<Option<String>>>,
    },
    Set {
        key: String,
        value: String,
        reply: Sender<Result<()>>,
    },
}

/// An issued storage request whose result has not been collected yet
#[derive(Debug)]
pub struct PendingOp<T> {
    key: String,
    receiver: Receiver<Result<T>>,
}

impl<T> PendingOp<T> {
    fn new(key: String, receiver: Receiver<Result<T>>) -> Self {
        Self { key, receiver }
    }

    fn failed(key: String, error: anyhow::Error) -> Self {
        let (sender, receiver) = channel();
        let _ = sender.send(Err(error));
        Self { key, receiver }
    }

    /// Key the request operates on
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the result if the worker has finished, without blocking
    pub fn try_complete(&mut self) -> Option<Result<T>> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(anyhow!(
                "storage worker stopped before completing request for '{}'",
                self.key
            ))),
        }
    }

    /// Blocks until the worker has finished the request
    pub fn wait(self) -> Result<T> {
        self.receiver
            .recv()
            .map_err(|_| anyhow!("storage worker stopped before completing request for '{}'", self.key))?
    }
}

/// Front end to the storage worker thread
pub struct AsyncStorage {
    sender: Option<Sender<Request>>,
    worker: Option<JoinHandle<()>>,
}

impl AsyncStorage {
    /// Starts a worker for `store` with no waker
    pub fn new(store: Arc<dyn KeyValueStore>) -> Result<Self> {
        Self::spawn(store, None)
    }

    /// Starts a worker for `store`, calling `waker` after every request
    pub fn spawn(store: Arc<dyn KeyValueStore>, waker: Option<Waker>) -> Result<Self> {
        let (sender, receiver) = channel::<Request>();

        let worker = thread::Builder::new()
            .name("folio-storage".to_string())
            .spawn(move || {
                // Ends once every sender is gone
                for request in receiver {
                    match request {
                        Request::Get { key, reply } => {
                            debug!(key = %key, "storage read");
                            let _ = reply.send(store.get(&key));
                        }
                        Request::Set { key, value, reply } => {
                            debug!(key = %key, "storage write");
                            let _ = reply.send(store.set(&key, &value));
                        }
                    }

                    if let Some(waker) = &waker {
                        waker();
                    }
                }
            })
            .context("Failed to start storage worker thread")?;

        Ok(Self {
            sender: Some(sender),
            worker: Some(worker),
        })
    }

    /// Issues a read of `key`
    pub fn get(&self, key: &str) -> PendingOp<Option<String>> {
        let (reply, receiver) = channel();
        let request = Request::Get {
            key: key.to_string(),
            reply,
        };
        match self.submit(request) {
            Ok(()) => PendingOp::new(key.to_string(), receiver),
            Err(e) => PendingOp::failed(key.to_string(), e),
        }
    }

    /// Issues a write of `value` under `key`
    pub fn set(&self, key: &str, value: &str) -> PendingOp<()> {
        let (reply, receiver) = channel();
        let request = Request::Set {
            key: key.to_string(),
            value: value.to_string(),
            reply,
        };
        match self.submit(request) {
            Ok(()) => PendingOp::new(key.to_string(), receiver),
            Err(e) => PendingOp::failed(key.to_string(), e),
        }
    }

    fn submit(&self, request: Request) -> Result<()> {
        let sender = self
            .sender
            .as_ref()
            .ok_or_else(|| anyhow!("storage worker already shut down"))?;
        sender
            .send(request)
            .map_err(|_| anyhow!("storage worker is no longer running"))
    }
}

impl Drop for AsyncStorage {
    /// Lets queued requests finish before the worker exits
    fn drop(&mut self) {
        self.sender.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl std::fmt::Debug for AsyncStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsyncStorage")
            .field("running", &self.sender.is_some())
            .finish_non_exhaustive()
    }
}
