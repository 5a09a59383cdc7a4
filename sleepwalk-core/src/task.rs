//! Task spawning abstraction for single-threaded environments.

use std::future::Future;

use tokio::task::JoinHandle;

/// Provider for spawning tasks on the current thread.
///
/// Spawned futures need not be `Send`, which lets workloads hold
/// `Rc`-based providers across await points.
pub trait TaskProvider: Clone {
    /// Spawn a named task that runs on the current thread.
    ///
    /// Must be called from within a [`tokio::task::LocalSet`].
    fn spawn_task<F>(&self, name: &str, future: F) -> JoinHandle<F::Output>
    where
        F: Future + 'static,
        F::Output: 'static;
}

/// Tokio-based task provider using `spawn_local`.
#[derive(Clone, Debug, Default)]
pub struct TokioTaskProvider;

impl TaskProvider for TokioTaskProvider {
    fn spawn_task<F>(&self, name: &str, future: F) -> JoinHandle<F::Output>
    where
        F: Future + 'static,
        F::Output: 'static,
    {
        let task_name = name.to_string();
        tokio::task::spawn_local(async move {
            tracing::trace!(task = %task_name, "Task starting");
            let output = future.await;
            tracing::trace!(task = %task_name, "Task completed");
            output
        })
    }
}
