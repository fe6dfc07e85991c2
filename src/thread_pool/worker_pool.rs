use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Mutex;
use std::thread::{self, JoinHandle};

use crossbeam::channel::{self, Receiver, Sender};
use log::{debug, error};

use super::{TaskHandle, ThreadPool};
use crate::error::panic_message;
use crate::{PoolError, Result};

type Job = Box<dyn FnOnce() + Send + 'static>;

/// A fixed-size thread pool pulling jobs from a shared FIFO queue.
///
/// Workers are spawned at construction and live until [`shutdown`]
/// (or drop). The queue is unbounded: sustained submission faster than the
/// workers drain it grows memory without limit, so size producers
/// accordingly.
///
/// Lifecycle: while the sender is present the pool is running and accepts
/// jobs. Shutdown drops the sender, which rejects new submissions and lets
/// the workers drain whatever is still queued before they exit; teardown
/// then joins every worker.
///
/// [`shutdown`]: ThreadPool::shutdown
pub struct WorkerPool {
    tx: Mutex<Option<Sender<Job>>>,
    workers: Mutex<Vec<JoinHandle<()>>>,
}

impl ThreadPool for WorkerPool {
    fn new(threads: u32) -> Result<Self> {
        let threads = threads.max(1);
        let (tx, rx) = channel::unbounded::<Job>();

        let mut workers = Vec::with_capacity(threads as usize);
        for id in 0..threads {
            match spawn_worker(id, rx.clone()) {
                Ok(handle) => workers.push(handle),
                Err(e) => {
                    // No partial pool: close the queue and wait for the
                    // workers that did start before reporting the failure.
                    drop(tx);
                    drop(rx);
                    for handle in workers {
                        let _ = handle.join();
                    }
                    return Err(PoolError::Spawn(e));
                }
            }
        }
        // Only the workers hold receivers now, so dropping the sender is
        // enough to disconnect the queue at shutdown.
        drop(rx);

        Ok(WorkerPool {
            tx: Mutex::new(Some(tx)),
            workers: Mutex::new(workers),
        })
    }

    fn spawn<F>(&self, job: F) -> Result<()>
    where
        F: FnOnce() + Send + 'static,
    {
        let tx = self.tx.lock().expect("pool sender lock poisoned");
        match tx.as_ref() {
            Some(tx) => tx
                .send(Box::new(job))
                .map_err(|_| PoolError::PoolClosed),
            None => Err(PoolError::PoolClosed),
        }
    }

    fn shutdown(&self) {
        if let Some(tx) = self.tx.lock().expect("pool sender lock poisoned").take() {
            debug!("Pool shutting down, draining queue");
            drop(tx);
        }

        // Joining under the lock makes a concurrent second shutdown block
        // here until the first one has seen every worker exit.
        let mut workers = self.workers.lock().expect("pool worker lock poisoned");
        while let Some(handle) = workers.pop() {
            if handle.join().is_err() {
                error!("Worker thread panicked during shutdown");
            }
        }
    }
}

impl WorkerPool {
    /// Creates a pool with one worker per available CPU (at least one).
    pub fn with_default_threads() -> Result<Self> {
        Self::new(num_cpus::get().max(1) as u32)
    }

    /// Submits a task and returns a handle to its eventual result.
    ///
    /// The handle is satisfied exactly once, after the task ran: with the
    /// returned value, or with [`PoolError::Task`] if the task panicked.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::PoolClosed`] if shutdown has already begun; the
    /// task is not enqueued and the closure is dropped unexecuted.
    pub fn submit<F, T>(&self, task: F) -> Result<TaskHandle<T>>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let (result_tx, result_rx) = channel::bounded(1);
        self.spawn(move || {
            let outcome = panic::catch_unwind(AssertUnwindSafe(task))
                .map_err(|payload| PoolError::Task(panic_message(&*payload)));
            // The receiver may have been dropped; the outcome is then
            // discarded, which is fine for fire-and-forget callers.
            let _ = result_tx.send(outcome);
        })?;
        Ok(TaskHandle::new(result_rx))
    }
}

/// Spawns a single worker thread that pulls jobs from the receiver until
/// the queue is disconnected and empty.
fn spawn_worker(id: u32, rx: Receiver<Job>) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name(format!("pool-worker-{id}"))
        .spawn(move || {
            for job in rx.iter() {
                debug!("Worker {id} executing job");
                // Catch panics so the worker loop continues
                if panic::catch_unwind(AssertUnwindSafe(job)).is_err() {
                    error!("Worker {id} job panicked, continuing");
                }
            }
            debug!("Worker {id}: queue closed, exiting");
        })
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        // Same graceful teardown as an explicit shutdown, so a dropped pool
        // still drains its queue and joins its workers.
        self.shutdown();
    }
}
