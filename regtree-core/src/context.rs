//! Context trait for handler invocation payloads.

/// A marker trait for the context value handlers are invoked with.
///
/// The registry is agnostic to what a context carries (a request object, an
/// event payload, a unit type); it only requires thread-safety so resolved
/// handlers can be invoked from any task.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone)]
/// struct RequestContext { tenant_id: u64 }
///
/// impl Context for RequestContext {}
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Context",
    label = "must be `Send + Sync + 'static`",
    note = "Handler contexts must be thread-safe and static."
)]
pub trait Context: Send + Sync + 'static {}

// Common Context implementations
impl Context for () {}
impl Context for String {}
impl Context for &'static str {}
impl<T: Context> Context for Box<T> {}
impl<T: Context> Context for std::sync::Arc<T> {}
impl<T: Context> Context for Vec<T> {}
impl<T: Context> Context for Option<T> {}
impl<T: Context, E: Context> Context for Result<T, E> {}
