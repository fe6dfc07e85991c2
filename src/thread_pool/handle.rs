use crossbeam::channel::{Receiver, TryRecvError};

use crate::{PoolError, Result};

/// A one-shot handle to the eventual result of a submitted task.
///
/// The executing worker writes the outcome at most once; `wait` consumes
/// the handle, so the result can be read at most once as well. A task that
/// panicked surfaces as [`PoolError::Task`] rather than killing the worker.
pub struct TaskHandle<T> {
    rx: Receiver<Result<T>>,
}

impl<T> TaskHandle<T> {
    pub(crate) fn new(rx: Receiver<Result<T>>) -> Self {
        TaskHandle { rx }
    }

    /// Blocks until the task has completed and returns its outcome.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Task`] if the task panicked, or
    /// [`PoolError::PoolClosed`] if the pool was torn down before the task
    /// could produce a result.
    pub fn wait(self) -> Result<T> {
        match self.rx.recv() {
            Ok(outcome) => outcome,
            Err(_) => Err(PoolError::PoolClosed),
        }
    }

    /// Polls for the outcome without blocking.
    ///
    /// Returns `None` while the task is still queued or running.
    pub fn try_wait(&self) -> Option<Result<T>> {
        match self.rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(PoolError::PoolClosed)),
        }
    }
}
