use std::panic::{self, AssertUnwindSafe};

use log::debug;

use crate::error::panic_message;
use crate::sampler::approx_pi;
use crate::thread_pool::{TaskHandle, ThreadPool, WorkerPool};
use crate::{PoolError, Result};

/// Submits pi estimations to a thread pool and delivers results
/// asynchronously.
///
/// Generic over the pool so callers choose the concurrency strategy; the
/// estimator owns the pool and tears it down on [`shutdown`].
///
/// [`shutdown`]: PiEstimator::shutdown
pub struct PiEstimator<P: ThreadPool> {
    pool: P,
}

impl<P: ThreadPool> PiEstimator<P> {
    /// Creates an estimator that runs its computations on the given pool.
    pub fn new(pool: P) -> Self {
        Self { pool }
    }

    /// Submits an estimation and delivers the outcome through `notify`.
    ///
    /// `notify` is invoked exactly once, on a worker thread, never on the
    /// submitting thread. Any routing context the caller needs travels as
    /// captured state of the closure. A panic inside the sampler is caught
    /// and delivered as [`PoolError::Task`] instead of killing the worker.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::PoolClosed`] if the pool has already begun
    /// shutdown; `notify` is then never invoked.
    pub fn submit_async<F>(&self, num_samples: u32, seed: u64, notify: F) -> Result<()>
    where
        F: FnOnce(Result<f64>) + Send + 'static,
    {
        debug!("Submitting estimation: {num_samples} samples, seed {seed}");
        self.pool.spawn(move || {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| approx_pi(num_samples, seed)))
                .map_err(|payload| PoolError::Task(panic_message(&*payload)));
            notify(outcome);
        })
    }

    /// Shuts the underlying pool down, blocking until all pending
    /// estimations have been delivered. Idempotent.
    pub fn shutdown(&self) {
        self.pool.shutdown();
    }
}

impl PiEstimator<WorkerPool> {
    /// Submits an estimation and returns a handle to its eventual result,
    /// for callers that prefer waiting over a callback.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::PoolClosed`] if the pool has already begun
    /// shutdown.
    pub fn submit(&self, num_samples: u32, seed: u64) -> Result<TaskHandle<f64>> {
        self.pool.submit(move || approx_pi(num_samples, seed))
    }
}
