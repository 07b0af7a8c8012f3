//! Dispatch helpers: resolve a pattern and invoke everything it matched.
//!
//! The registry itself never invokes handlers; these helpers carry the
//! surrounding system's convention of fanning an event out to every matched
//! handler and aggregating failures, so one listener's error cannot starve
//! its siblings.

use crate::scope::ScopedRegistry;
use futures::future::join_all;
use regtree_core::{Context, DispatchError, Pattern, SharedHandler};

impl<C: Context> ScopedRegistry<C> {
    /// Resolve `pattern` and invoke every matched handler sequentially, in
    /// registration order.
    ///
    /// Every handler runs even when an earlier one fails; failures are
    /// collected and returned together. `Ok(n)` reports how many handlers
    /// ran. An empty resolution (including an unparseable pattern) is
    /// `Ok(0)`: no provider is a normal outcome, not an error.
    pub async fn dispatch(&self, pattern: &str, ctx: &C) -> Result<usize, DispatchError> {
        let Ok(parsed) = Pattern::parse(pattern) else {
            return Ok(0);
        };
        let handlers = self.resolve_pattern(&parsed);
        let total = handlers.len();

        let mut failures = Vec::new();
        for handler in &handlers {
            if let Err(err) = handler.call_dyn(ctx).await {
                failures.push(err);
            }
        }
        finish(&parsed, total, failures)
    }

    /// Like [`dispatch`](Self::dispatch), but all handlers run concurrently.
    ///
    /// Failures are still reported in registration order. Use when handlers
    /// are independent and latency matters more than ordering of side
    /// effects.
    pub async fn dispatch_concurrent(&self, pattern: &str, ctx: &C) -> Result<usize, DispatchError> {
        let Ok(parsed) = Pattern::parse(pattern) else {
            return Ok(0);
        };
        let handlers = self.resolve_pattern(&parsed);
        let total = handlers.len();

        let results = join_all(handlers.iter().map(|handler| handler.call_dyn(ctx))).await;
        let failures = results.into_iter().filter_map(Result::err).collect();
        finish(&parsed, total, failures)
    }
}

fn finish(
    pattern: &Pattern,
    total: usize,
    failures: Vec<regtree_core::BoxError>,
) -> Result<usize, DispatchError> {
    if failures.is_empty() {
        Ok(total)
    } else {
        Err(DispatchError::aggregate(pattern.segments(), total, failures))
    }
}

/// Invoke a pre-resolved handler list sequentially, aggregating failures.
///
/// For callers that resolve once and dispatch several times, or that
/// interleave their own logic between resolution and invocation.
pub async fn dispatch_all<C: Context>(
    handlers: &[SharedHandler<C>],
    ctx: &C,
) -> Result<usize, Vec<regtree_core::BoxError>> {
    let mut failures = Vec::new();
    for handler in handlers {
        if let Err(err) = handler.call_dyn(ctx).await {
            failures.push(err);
        }
    }
    if failures.is_empty() {
        Ok(handlers.len())
    } else {
        Err(failures)
    }
}
