//! Deferred asynchronous computations.
//!
//! A [`Task`] describes an asynchronous computation without running it. The
//! computation starts on the first poll, so building a task (for example
//! with [`send_request`](super::send_request)) never touches the transport.
//! `Task` implements `Future` through `pin_project_lite` and can be awaited
//! directly or spawned onto the tokio runtime.
//!
//! # Examples
//!
//! ```rust
//! use cached_remote_data::effect::Task;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let task = Task::new(|| async { 20 }).fmap(|n| n + 1).fmap(|n| n * 2);
//! assert_eq!(task.await, 42);
//! # });
//! ```

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::FutureExt;
use futures::future::BoxFuture;
use pin_project_lite::pin_project;

use super::error::TaskError;

type Thunk<A> = Box<dyn FnOnce() -> BoxFuture<'static, A> + Send>;

pin_project! {
    /// A deferred asynchronous computation producing an `A`.
    ///
    /// Nothing runs until the task is polled. A task completes exactly once.
    pub struct Task<A> {
        #[pin]
        state: TaskState<A>,
    }
}

pin_project! {
    /// `Pure` and `Defer` are initial; `Defer` moves to `Running` on the
    /// first poll, and every state ends in `Completed`.
    #[project = TaskStateProj]
    enum TaskState<A> {
        Pure {
            value: Option<A>,
        },
        Defer {
            thunk: Option<Thunk<A>>,
        },
        Running {
            #[pin]
            future: BoxFuture<'static, A>,
        },
        Completed,
    }
}

// =============================================================================
// Constructors
// =============================================================================

impl<A: 'static> Task<A> {
    /// Creates a task from a closure returning a future.
    ///
    /// The closure is not called until the task is first polled.
    pub fn new<F, Fut>(action: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = A> + Send + 'static,
    {
        Self {
            state: TaskState::Defer {
                thunk: Some(Box::new(move || action().boxed())),
            },
        }
    }

    /// Wraps a future that has not been polled yet.
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = A> + Send + 'static,
    {
        Self {
            state: TaskState::Running {
                future: future.boxed(),
            },
        }
    }

    /// A task that completes immediately with `value`.
    pub fn pure(value: A) -> Self {
        Self {
            state: TaskState::Pure { value: Some(value) },
        }
    }
}

// =============================================================================
// Functor Operations
// =============================================================================

impl<A: Send + 'static> Task<A> {
    /// Transforms the eventual value of the task.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cached_remote_data::effect::Task;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// assert_eq!(Task::pure(21).fmap(|n| n * 2).await, 42);
    /// # });
    /// ```
    pub fn fmap<B, F>(self, function: F) -> Task<B>
    where
        F: FnOnce(A) -> B + Send + 'static,
        B: 'static,
    {
        Task::new(move || async move { function(self.await) })
    }

    /// Runs the task on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime, like `tokio::spawn`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cached_remote_data::effect::Task;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let handle = Task::new(|| async { "done" }).spawn();
    /// assert_eq!(handle.await, Ok("done"));
    /// # });
    /// ```
    pub fn spawn(self) -> TaskHandle<A> {
        TaskHandle {
            inner: tokio::spawn(self),
        }
    }
}

impl<A> Future for Task<A> {
    type Output = A;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        loop {
            match this.state.as_mut().project() {
                TaskStateProj::Pure { value } => {
                    let result = value
                        .take()
                        .expect("Task polled after completion: pure value already taken");
                    this.state.set(TaskState::Completed);
                    return Poll::Ready(result);
                }
                TaskStateProj::Defer { thunk } => {
                    let thunk = thunk
                        .take()
                        .expect("Task polled after completion: thunk already taken");
                    let future = thunk();
                    this.state.set(TaskState::Running { future });
                }
                TaskStateProj::Running { future } => {
                    return match future.poll(context) {
                        Poll::Ready(result) => {
                            this.state.set(TaskState::Completed);
                            Poll::Ready(result)
                        }
                        Poll::Pending => Poll::Pending,
                    };
                }
                TaskStateProj::Completed => {
                    panic!("Task polled after completion");
                }
            }
        }
    }
}

// =============================================================================
// TaskHandle
// =============================================================================

pin_project! {
    /// A handle to a spawned [`Task`]; awaiting it yields the task's value,
    /// or a [`TaskError`] if the task was aborted or panicked.
    pub struct TaskHandle<A> {
        #[pin]
        inner: tokio::task::JoinHandle<A>,
    }
}

impl<A> TaskHandle<A> {
    /// Aborts the spawned task. Awaiting the handle afterwards yields
    /// [`TaskError::Cancelled`] unless the task had already finished.
    pub fn abort(&self) {
        self.inner.abort();
    }

    /// Returns `true` once the spawned task has finished.
    pub fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }
}

impl<A> Future for TaskHandle<A> {
    type Output = Result<A, TaskError>;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        self.project()
            .inner
            .poll(context)
            .map(|joined| joined.map_err(TaskError::from))
    }
}
