//! # regtree - Hierarchical Scoped Capability Registry
//!
//! `regtree` lets business-logic units in different parts of a large system
//! call each other by name instead of by static import. Capabilities are
//! registered under `::`-delimited patterns on a tree of named scopes;
//! resolution walks the tree with **descendant shadowing** (a nested scope's
//! registration beats a same-named one higher up) and **ancestor fallback**
//! (a name with no local provider bubbles up to a more general one).
//!
//! ## Quick Start
//!
//! ```rust
//! use regtree::{ScopedRegistry, handler_fn};
//!
//! # fn main() -> Result<(), regtree::RegistryError> {
//! // One registry per organizational scope, wired into a tree at startup.
//! let root: ScopedRegistry<String> = ScopedRegistry::new("ROOT")?;
//! let billing = ScopedRegistry::new("BILLING")?;
//! root.attach_child("BILLING", &billing)?;
//!
//! let handler = handler_fn(|tenant: &String| {
//!     let _ = tenant;
//!     Ok(())
//! });
//! billing.register("INVOICE_CREATED", &handler)?;
//!
//! // Resolvable from anywhere in the tree.
//! assert_eq!(root.resolve("BILLING::INVOICE_CREATED").len(), 1);
//!
//! // Keep the SharedHandler around: identity is how you unregister.
//! billing.unregister("INVOICE_CREATED", &handler)?;
//! assert!(root.resolve("BILLING::INVOICE_CREATED").is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! Resolution never invokes anything; it returns the matched handlers for
//! the caller to invoke under its own conventions. The [`dispatch`] helpers
//! carry the common convention (invoke all, aggregate failures) for callers
//! that want it.
//!
//! [`dispatch`]: ScopedRegistry::dispatch

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod config;
mod scope;

pub mod dispatch;
pub mod testing;

pub use config::RegistryConfig;
pub use scope::ScopedRegistry;

pub use regtree_core::{
    // Pattern vocabulary
    DELIMITER,
    Pattern,
    ScopeName,
    // Context
    Context,
    // Handlers
    DynHandler,
    Handler,
    SharedHandler,
    handler_fn,
    // Errors
    BoxError,
    DispatchError,
    PatternError,
    RegistryError,
};

/// Common imports for working with regtree.
///
/// # Usage
///
/// ```rust,ignore
/// use regtree::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BoxError, Context, DynHandler, Handler, Pattern, RegistryConfig, RegistryError,
        ScopeName, ScopedRegistry, SharedHandler, handler_fn,
    };
}
