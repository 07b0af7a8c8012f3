//! The capability surface: opaque async callables registered by pattern.
//!
//! Handlers are what the registry stores and returns. The registry never
//! invokes them during resolution; the caller receives the resolved list
//! and applies its own invocation convention.
//!
//! # Static vs Dynamic Dispatch
//!
//! [`Handler`] uses native `async fn` for zero-cost static dispatch. The
//! registry stores the object-safe mirror [`DynHandler`], obtained through
//! a blanket impl, behind an `Arc` ([`SharedHandler`]).
//!
//! # Identity
//!
//! Registrations are de-duplicated by **pointer identity** (`Arc::ptr_eq`),
//! not structural equality. Two closures with identical bodies are distinct
//! registrations. Callers that intend to unregister a handler later must
//! retain the exact [`SharedHandler`] they registered and pass it back;
//! wrapping the same value in a fresh `Arc` produces a different identity.

use crate::context::Context;
use crate::error::BoxError;
use std::{future::Future, pin::Pin, sync::Arc};

/// An async capability invoked with a caller-supplied context.
///
/// # Example
///
/// ```rust,ignore
/// struct InvalidateCache { region: String }
///
/// impl Handler<ChangeEvent> for InvalidateCache {
///     async fn call(&self, event: &ChangeEvent) -> Result<(), BoxError> {
///         // ...
///         Ok(())
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Handler<{C}>`",
    label = "missing `Handler` implementation",
    note = "Handlers must implement `call` for the specific context type `{C}`."
)]
pub trait Handler<C: Context>: Send + Sync + 'static {
    /// Invoke the capability with the given context.
    fn call(&self, ctx: &C) -> impl Future<Output = Result<(), BoxError>> + Send;
}

/// Dynamic object-safe version of [`Handler`].
///
/// This is the form the registry stores; use it whenever handlers of
/// different concrete types share a collection.
pub trait DynHandler<C: Context>: Send + Sync + 'static {
    /// Invoke the capability (dynamic dispatch version).
    fn call_dyn<'a>(
        &'a self,
        ctx: &'a C,
    ) -> Pin<Box<dyn Future<Output = Result<(), BoxError>> + Send + 'a>>;
}

// Blanket implementation: any Handler is a DynHandler automatically.
impl<C: Context, H: Handler<C>> DynHandler<C> for H {
    fn call_dyn<'a>(
        &'a self,
        ctx: &'a C,
    ) -> Pin<Box<dyn Future<Output = Result<(), BoxError>> + Send + 'a>> {
        Box::pin(self.call(ctx))
    }
}

/// The registered form of a handler: shared and identity-comparable.
pub type SharedHandler<C> = Arc<dyn DynHandler<C>>;

// Allow a SharedHandler to be used where Handler is expected. The inner
// trait object is named explicitly: plain method syntax would select the
// blanket DynHandler impl on the Arc itself and recurse.
impl<C: Context> Handler<C> for SharedHandler<C> {
    async fn call(&self, ctx: &C) -> Result<(), BoxError> {
        DynHandler::call_dyn(&**self, ctx).await
    }
}

/// Adapt a plain synchronous closure into a [`SharedHandler`].
///
/// The returned `Arc` is the handler's identity; keep it if you intend to
/// unregister the handler later.
///
/// # Example
///
/// ```rust,ignore
/// let handler = handler_fn(|event: &ChangeEvent| {
///     println!("changed: {}", event.id);
///     Ok(())
/// });
/// registry.register("USERS::CHANGED", &handler)?;
/// ```
pub fn handler_fn<C, F>(f: F) -> SharedHandler<C>
where
    C: Context,
    F: Fn(&C) -> Result<(), BoxError> + Send + Sync + 'static,
{
    Arc::new(FnHandler(f))
}

struct FnHandler<F>(F);

impl<C, F> Handler<C> for FnHandler<F>
where
    C: Context,
    F: Fn(&C) -> Result<(), BoxError> + Send + Sync + 'static,
{
    async fn call(&self, ctx: &C) -> Result<(), BoxError> {
        (self.0)(ctx)
    }
}
