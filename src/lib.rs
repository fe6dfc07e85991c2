#![deny(missing_docs)]

//! Monte Carlo pi estimation backed by a fixed-size worker thread pool.
//!
//! The pool accepts arbitrary units of work over a shared FIFO queue,
//! executes them on a bounded set of long-lived workers, and hands back a
//! one-shot result handle per task. The [`PiEstimator`] façade adapts the
//! pure sampling routine into pool work and delivers each result exactly
//! once through a caller-supplied closure, always off the submitting
//! thread.

mod error;
mod estimator;
mod sampler;
/// Thread pool primitives: the pool trait, the shared-queue worker pool,
/// and one-shot task handles.
pub mod thread_pool;

pub use error::{PoolError, Result};
pub use estimator::PiEstimator;
pub use sampler::approx_pi;
pub use thread_pool::{TaskHandle, ThreadPool, WorkerPool};
