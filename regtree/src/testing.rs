//! Testing utilities for regtree.
//!
//! This module provides handler doubles for exercising registries in tests:
//!
//! - [`RecordingHandler`]: records every context it is invoked with
//! - [`CountingHandler`]: counts invocations
//! - [`FailingHandler`]: always fails with a fixed message
//!
//! All three are cheaply cloneable and share their recorded state across
//! clones, so a test can keep one clone for assertions while another is
//! wrapped into the registered [`SharedHandler`].
//!
//! # Identity caveat
//!
//! Registration identity is the `Arc`, not the double inside it. Wrap a
//! double exactly once (`Arc::new(double.clone())`) and keep that
//! [`SharedHandler`] if the test intends to unregister it; wrapping again
//! produces a distinct registration.

use regtree_core::{BoxError, Context, Handler, SharedHandler};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

/// A handler that records every context it receives.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingHandler::<MyEvent>::new();
/// let handler: SharedHandler<MyEvent> = Arc::new(recorder.clone());
/// registry.register("USERS::CHANGED", &handler)?;
///
/// registry.dispatch("USERS::CHANGED", &event).await?;
/// assert_eq!(recorder.count(), 1);
/// ```
pub struct RecordingHandler<C: Clone> {
    calls: Arc<Mutex<Vec<C>>>,
}

impl<C: Clone> RecordingHandler<C> {
    /// Create a new recording handler.
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Wrap a clone of this double into a registrable handler.
    ///
    /// Each call produces a distinct registration identity.
    pub fn shared(&self) -> SharedHandler<C>
    where
        C: Context,
    {
        Arc::new(self.clone())
    }

    /// Get a clone of the recorded contexts, in invocation order.
    pub fn calls(&self) -> Vec<C> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of recorded invocations.
    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Clear all recorded invocations.
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl<C: Clone> Default for RecordingHandler<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clone> Clone for RecordingHandler<C> {
    fn clone(&self) -> Self {
        Self {
            calls: self.calls.clone(),
        }
    }
}

impl<C: Context + Clone> Handler<C> for RecordingHandler<C> {
    async fn call(&self, ctx: &C) -> Result<(), BoxError> {
        self.calls.lock().unwrap().push(ctx.clone());
        Ok(())
    }
}

/// A handler that counts invocations without cloning the context.
pub struct CountingHandler {
    count: Arc<AtomicUsize>,
}

impl CountingHandler {
    /// Create a new counting handler.
    pub fn new() -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Wrap a clone of this double into a registrable handler.
    pub fn shared<C: Context>(&self) -> SharedHandler<C> {
        Arc::new(self.clone())
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl Default for CountingHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CountingHandler {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
        }
    }
}

impl<C: Context> Handler<C> for CountingHandler {
    async fn call(&self, _ctx: &C) -> Result<(), BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// A handler that always fails with a fixed message.
#[derive(Clone)]
pub struct FailingHandler {
    message: String,
}

impl FailingHandler {
    /// Create a failing handler with the given error message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Wrap a clone of this double into a registrable handler.
    pub fn shared<C: Context>(&self) -> SharedHandler<C> {
        Arc::new(self.clone())
    }
}

impl<C: Context> Handler<C> for FailingHandler {
    async fn call(&self, _ctx: &C) -> Result<(), BoxError> {
        Err(self.message.clone().into())
    }
}
