//! # regtree-core
//!
//! Core vocabulary for the regtree scoped capability registry.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! code that registers or implements capabilities without pulling in the
//! full `regtree` tree implementation.
//!
//! # Three-Piece Vocabulary
//!
//! The registry contract is built from three small pieces:
//!
//! ## Patterns ([`Pattern`], [`ScopeName`])
//!
//! Capability names arrive as `::`-delimited strings such as
//! `BILLING::INVOICES::CREATE`. They are parsed and case-normalized exactly
//! once, at the API boundary; everything behind the boundary operates on
//! structured segment lists, never on raw strings.
//!
//! - **Normalized**: matching is case-insensitive because both registration
//!   and resolution normalize through the same path
//! - **Validated**: empty patterns and empty segments are rejected up front,
//!   as registration-time programmer errors
//!
//! ## Handlers ([`Handler`], [`DynHandler`], [`SharedHandler`])
//!
//! A handler is an opaque async callable invoked with a caller-supplied
//! context. The registry never calls handlers during resolution; it only
//! stores and returns them.
//!
//! - **Static first**: [`Handler`] uses native `async fn` for zero-cost
//!   static dispatch
//! - **Dyn mirror**: [`DynHandler`] is the object-safe form stored in
//!   registries, with a blanket impl from [`Handler`]
//! - **Identity**: the registered form is [`SharedHandler`], an
//!   `Arc<dyn DynHandler>`; registrations are de-duplicated by pointer
//!   identity, so callers must retain the same `Arc` to unregister
//!
//! ## Errors ([`RegistryError`], [`PatternError`], [`DispatchError`])
//!
//! Configuration mistakes (duplicate scope names, malformed patterns) are
//! synchronous errors surfaced at wiring time. "No handler found" is never
//! an error; it is an empty resolution result.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod context;
mod error;
mod handler;
mod pattern;

pub use context::Context;
pub use error::{BoxError, DispatchError, PatternError, RegistryError};
pub use handler::{DynHandler, Handler, SharedHandler, handler_fn};
pub use pattern::{DELIMITER, Pattern, ScopeName};
