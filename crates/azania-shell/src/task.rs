//! Cancellable tasks on the local executor.

use std::fmt;
use std::time::Duration;

use futures::future::{abortable, AbortHandle, LocalBoxFuture};
use futures::{Future, FutureExt};
use yew::platform::spawn_local;
use yew::platform::time::sleep;

/// A handle to a spawned task.
///
/// Dropping the handle cancels the task. A cancelled task never resumes, so any callback it would
/// have run after its next suspension point is never called.
pub struct TaskHandle {
    inner: AbortHandle,
}

impl fmt::Debug for TaskHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskHandle")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

impl TaskHandle {
    /// Cancels the task.
    pub fn cancel(&self) {
        self.inner.abort();
    }

    /// Returns `true` if the task has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.inner.is_aborted()
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.inner.abort();
    }
}

/// Wraps a future so it can be cancelled with the returned handle.
///
/// The returned future must be driven by an executor.
pub fn cancellable<F>(f: F) -> (TaskHandle, LocalBoxFuture<'static, ()>)
where
    F: 'static + Future<Output = ()>,
{
    let (f, inner) = abortable(f);

    (
        TaskHandle { inner },
        async move {
            let _ = f.await;
        }
        .boxed_local(),
    )
}

/// Spawns a cancellable future on the local executor.
pub fn spawn_cancellable<F>(f: F) -> TaskHandle
where
    F: 'static + Future<Output = ()>,
{
    let (handle, f) = cancellable(f);
    spawn_local(f);

    handle
}

/// A cancellable deferred callback.
///
/// The callback runs once after the duration has elapsed, unless the timeout is cancelled or
/// dropped before that.
#[derive(Debug)]
pub struct Timeout {
    handle: TaskHandle,
}

impl Timeout {
    /// Schedules `f` to run after `duration`.
    pub fn new<F>(duration: Duration, f: F) -> Self
    where
        F: 'static + FnOnce(),
    {
        Self::after(sleep(duration), f)
    }

    /// Schedules `f` to run once `delay` resolves.
    pub fn after<D, F>(delay: D, f: F) -> Self
    where
        D: 'static + Future<Output = ()>,
        F: 'static + FnOnce(),
    {
        let handle = spawn_cancellable(async move {
            delay.await;
            f();
        });

        Self { handle }
    }

    /// Cancels the timeout.
    pub fn cancel(&self) {
        self.handle.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use futures::channel::oneshot;
    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;

    use super::*;

    type Deferred = (oneshot::Sender<()>, TaskHandle, LocalBoxFuture<'static, ()>);

    fn deferred(fired: Rc<Cell<u32>>) -> Deferred {
        let (tx, rx) = oneshot::channel::<()>();
        let (handle, f) = cancellable(async move {
            if rx.await.is_ok() {
                fired.set(fired.get() + 1);
            }
        });

        (tx, handle, f)
    }

    #[test]
    fn runs_when_not_cancelled() {
        let mut pool = LocalPool::new();
        let fired = Rc::new(Cell::new(0));
        let (tx, handle, f) = deferred(fired.clone());

        pool.spawner().spawn_local(f).unwrap();
        pool.run_until_stalled();
        assert_eq!(fired.get(), 0);

        tx.send(()).unwrap();
        pool.run_until_stalled();
        assert_eq!(fired.get(), 1);
        assert!(!handle.is_cancelled());
    }

    #[test]
    fn cancel_suppresses_the_callback() {
        let mut pool = LocalPool::new();
        let fired = Rc::new(Cell::new(0));
        let (tx, handle, f) = deferred(fired.clone());

        pool.spawner().spawn_local(f).unwrap();
        pool.run_until_stalled();

        handle.cancel();
        assert!(handle.is_cancelled());
        let _ = tx.send(());
        pool.run_until_stalled();

        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn dropping_the_handle_cancels() {
        let mut pool = LocalPool::new();
        let fired = Rc::new(Cell::new(0));
        let (tx, handle, f) = deferred(fired.clone());

        pool.spawner().spawn_local(f).unwrap();
        drop(handle);
        let _ = tx.send(());
        pool.run();

        assert_eq!(fired.get(), 0);
    }
}
