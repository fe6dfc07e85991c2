use crate::Result;

/// A thread pool for executing jobs concurrently.
///
/// Implementors manage a fixed set of worker threads and distribute
/// incoming jobs across them in submission order.
pub trait ThreadPool {
    /// Creates a new thread pool with the given number of threads.
    ///
    /// A count of zero is treated as one. All workers are spawned before
    /// this returns.
    ///
    /// # Errors
    ///
    /// Returns an error if a worker thread cannot be spawned. No partial
    /// pool is left running in that case.
    fn new(threads: u32) -> Result<Self>
    where
        Self: Sized;

    /// Spawns a function into the thread pool.
    ///
    /// The function will be executed by one of the threads in the pool.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::PoolClosed`](crate::PoolError::PoolClosed) if
    /// shutdown has already begun; the job is not enqueued.
    fn spawn<F>(&self, job: F) -> Result<()>
    where
        F: FnOnce() + Send + 'static;

    /// Shuts the pool down, blocking until every worker has exited.
    ///
    /// Jobs already queued are still executed; new submissions are
    /// rejected. Calling this more than once is safe.
    fn shutdown(&self);
}

mod handle;
mod worker_pool;

pub use self::handle::TaskHandle;
pub use self::worker_pool::WorkerPool;
