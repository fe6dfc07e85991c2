use std::any::Any;
use std::io;

use thiserror::Error;

/// Error type for pool and estimation operations.
#[derive(Error, Debug)]
pub enum PoolError {
    /// Submission attempted after pool shutdown began.
    #[error("thread pool is shut down")]
    PoolClosed,

    /// A submitted task panicked while executing.
    #[error("task panicked: {0}")]
    Task(String),

    /// A worker thread could not be spawned at pool construction.
    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[from] io::Error),
}

/// Result type alias for mcpool operations.
pub type Result<T> = std::result::Result<T, PoolError>;

/// Extracts a readable message from a panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
