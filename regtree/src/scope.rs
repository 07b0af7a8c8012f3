//! The scope tree: hierarchical capability lookup with shadowing and
//! ancestor fallback.
//!
//! A [`ScopedRegistry`] is one named node in a tree of registries. Each node
//! owns a local table of pattern → handler-list registrations and a table of
//! named child scopes. Resolving a pattern walks the tree, at each node:
//!
//! 1. A leading segment equal to this node's own scope name is consumed and
//!    the walk restarts here with the remainder.
//! 2. If a child scope is named by the leading segment, the walk descends
//!    into it and that subtree's answer is final: even when it is empty,
//!    resolution does not come back to try this node's table or parent.
//! 3. Otherwise the remaining pattern is looked up in the local table.
//! 4. On a local miss, the walk bubbles up to the parent, but only while
//!    no scope segment has been consumed yet. Once the pattern has matched
//!    its way into a scope, that scope's subtree is authoritative.
//!
//! The effect mirrors lexical scoping: a nested scope shadows a same-named
//! capability registered higher up (step 2 runs before step 3), while
//! lookups with no local provider bubble up to a more general one (step 4).
//!
//! Registration is strictly local: `register` writes only this node's table.
//! A redundant leading self-name is consumed first, so `"BILLING::CREATE"`
//! registered on the `BILLING` scope and `"CREATE"` registered there are the
//! same key, mirroring what resolution would consume on the way in.
//! `unregister` follows the same walk as `resolve` so that whatever a
//! pattern resolves to is also what it unregisters.
//!
//! # Concurrency
//!
//! Every node guards its tables with a single `parking_lot::RwLock`. No
//! operation holds two node locks at once (anything needed to continue a
//! tree walk is cloned out before the lock is released), so concurrent
//! `register`/`unregister`/`resolve`/`attach_child` calls cannot deadlock.
//! `resolve` returns a snapshot: a handler may be unregistered between
//! resolution and invocation, and callers must tolerate that staleness.

use crate::config::RegistryConfig;
use parking_lot::RwLock;
use regtree_core::{Context, Pattern, RegistryError, ScopeName, SharedHandler};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Weak};
use tracing::{debug, trace};

/// A handle to one node in the scope tree.
///
/// Cloning is cheap and clones share the node, in the same way that cloning
/// an `Arc` shares its referent. Nodes are constructed parentless and wired
/// into a tree with [`attach_child`](Self::attach_child); construction never
/// touches any other node.
///
/// # Example
///
/// ```rust,ignore
/// let root = ScopedRegistry::new("ROOT")?;
/// let billing = ScopedRegistry::new("BILLING")?;
/// root.attach_child("BILLING", &billing)?;
///
/// let handler = handler_fn(|event: &InvoiceEvent| Ok(()));
/// billing.register("INVOICE_CREATED", &handler)?;
///
/// // From anywhere in the tree:
/// let handlers = root.resolve("BILLING::INVOICE_CREATED");
/// assert_eq!(handlers.len(), 1);
/// ```
pub struct ScopedRegistry<C: Context> {
    node: Arc<Node<C>>,
}

struct Node<C: Context> {
    scope_name: ScopeName,
    config: RegistryConfig,
    state: RwLock<State<C>>,
}

struct State<C: Context> {
    parent: Weak<Node<C>>,
    children: HashMap<ScopeName, ScopedRegistry<C>>,
    handlers: HashMap<Vec<ScopeName>, Vec<SharedHandler<C>>>,
}

impl<C: Context> State<C> {
    fn new() -> Self {
        Self {
            parent: Weak::new(),
            children: HashMap::new(),
            handlers: HashMap::new(),
        }
    }
}

impl<C: Context> Clone for ScopedRegistry<C> {
    fn clone(&self) -> Self {
        Self {
            node: Arc::clone(&self.node),
        }
    }
}

impl<C: Context> fmt::Debug for ScopedRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopedRegistry")
            .field("scope", &self.node.scope_name.as_str())
            .finish_non_exhaustive()
    }
}

impl<C: Context> ScopedRegistry<C> {
    /// Create a detached node with the default (quiet) configuration.
    ///
    /// The name is case-normalized; `new("billing")` and `new("BILLING")`
    /// name the same scope.
    pub fn new(name: &str) -> Result<Self, RegistryError> {
        Self::with_config(name, RegistryConfig::default())
    }

    /// Create a detached node with an explicit configuration.
    pub fn with_config(name: &str, config: RegistryConfig) -> Result<Self, RegistryError> {
        let scope_name = ScopeName::new(name)?;
        Ok(Self {
            node: Arc::new(Node {
                scope_name,
                config,
                state: RwLock::new(State::new()),
            }),
        })
    }

    /// This node's normalized scope name.
    pub fn scope_name(&self) -> &ScopeName {
        &self.node.scope_name
    }

    /// The configuration this node was constructed with.
    pub fn config(&self) -> RegistryConfig {
        self.node.config
    }

    /// Whether this node currently has no live parent.
    pub fn is_root(&self) -> bool {
        self.node.state.read().parent.strong_count() == 0
    }

    /// A handle to this node's parent, if attached.
    pub fn parent(&self) -> Option<Self> {
        self.node
            .state
            .read()
            .parent
            .upgrade()
            .map(|node| Self { node })
    }

    /// A handle to the named child, if present.
    pub fn child(&self, name: &str) -> Option<Self> {
        let name = ScopeName::new(name).ok()?;
        self.node.state.read().children.get(&name).cloned()
    }

    /// Number of patterns with at least one registered handler.
    pub fn pattern_count(&self) -> usize {
        self.node.state.read().handlers.len()
    }

    /// Number of attached child scopes.
    pub fn child_count(&self) -> usize {
        self.node.state.read().children.len()
    }

    /// Whether two handles refer to the same node.
    pub fn same_node(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }

    /// The `::`-joined chain of scope names from the root down to this node.
    ///
    /// Diagnostics only; resolution never consults it.
    pub fn domain_path(&self) -> String {
        let mut names = vec![self.node.scope_name.as_str().to_string()];
        let mut current = self.node.state.read().parent.upgrade();
        while let Some(node) = current {
            names.push(node.scope_name.as_str().to_string());
            current = node.state.read().parent.upgrade();
        }
        names.reverse();
        names.join(regtree_core::DELIMITER)
    }

    /// Attach `child` under `name` in this node's child table.
    ///
    /// Links both directions: the child lands in this node's child table and
    /// its parent back-reference is set to this node.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::ScopeNameMismatch`] if `name` is not the child's
    ///   own scope name (resolution descends by the child's name, so any
    ///   other table key would be unreachable)
    /// - [`RegistryError::WouldCycle`] if `child` is this node or one of its
    ///   ancestors
    /// - [`RegistryError::AlreadyAttached`] if `child` already has a live
    ///   parent
    /// - [`RegistryError::DuplicateScope`] if the name is taken; the
    ///   existing mapping is left untouched
    pub fn attach_child(&self, name: &str, child: &Self) -> Result<(), RegistryError> {
        let name = ScopeName::new(name)?;
        if name != *child.scope_name() {
            return Err(RegistryError::ScopeNameMismatch {
                given: name,
                actual: child.scope_name().clone(),
            });
        }
        if Arc::ptr_eq(&self.node, &child.node) || self.is_descendant_of(child) {
            return Err(RegistryError::WouldCycle {
                child: name,
                parent: self.node.scope_name.clone(),
            });
        }

        // Claim the child's parent slot first; it is the arbiter when two
        // parents race to attach the same child.
        let current_parent = {
            let mut state = child.node.state.write();
            match state.parent.upgrade() {
                Some(existing) => Some(existing),
                None => {
                    state.parent = Arc::downgrade(&self.node);
                    None
                }
            }
        };
        if let Some(existing) = current_parent {
            return Err(RegistryError::AlreadyAttached {
                child: name,
                parent: Self { node: existing }.domain_path(),
            });
        }

        let duplicate = {
            let mut state = self.node.state.write();
            if state.children.contains_key(&name) {
                true
            } else {
                state.children.insert(name.clone(), child.clone());
                false
            }
        };
        if duplicate {
            // Roll the parent claim back; the existing mapping wins.
            child.node.state.write().parent = Weak::new();
            return Err(RegistryError::DuplicateScope(name));
        }

        if self.node.config.diagnostics {
            debug!(parent = %self.node.scope_name, child = %name, "attached child scope");
        }
        Ok(())
    }

    /// Remove and return the named child, clearing its parent back-reference.
    ///
    /// Returns `None` when no child holds that name (or the name does not
    /// parse); absence is an already-satisfied outcome, not an error.
    pub fn detach_child(&self, name: &str) -> Option<Self> {
        let name = ScopeName::new(name).ok()?;
        let child = self.node.state.write().children.remove(&name)?;
        child.node.state.write().parent = Weak::new();
        if self.node.config.diagnostics {
            debug!(parent = %self.node.scope_name, child = %name, "detached child scope");
        }
        Some(child)
    }

    /// Register a handler under a pattern in this node's local table.
    ///
    /// Appends the handler only when an identical handler (pointer identity,
    /// `Arc::ptr_eq`) is not already present under the key: repeat
    /// registrations of the same `(pattern, handler)` pair are absorbed and
    /// the first registration's position in the list is preserved. Multiple
    /// distinct handlers may coexist under one pattern; resolution returns
    /// them in registration order.
    ///
    /// The stored key is scope-relative: leading segments equal to this
    /// node's own scope name are consumed, exactly as resolution consumes
    /// them on the way in.
    ///
    /// Returns `Ok(true)` for a new registration, `Ok(false)` for an
    /// absorbed duplicate, and `Err` only for a malformed pattern or one
    /// that names this scope with no local key left over.
    pub fn register(
        &self,
        pattern: &str,
        handler: &SharedHandler<C>,
    ) -> Result<bool, RegistryError> {
        self.register_pattern(&Pattern::parse(pattern)?, handler)
    }

    /// [`register`](Self::register) with an already-parsed pattern.
    pub fn register_pattern(
        &self,
        pattern: &Pattern,
        handler: &SharedHandler<C>,
    ) -> Result<bool, RegistryError> {
        let key = self.local_key(pattern)?;
        let mut state = self.node.state.write();
        let entry = state.handlers.entry(key.to_vec()).or_default();
        if entry.iter().any(|existing| Arc::ptr_eq(existing, handler)) {
            if self.node.config.diagnostics {
                trace!(scope = %self.node.scope_name, pattern = %pattern, "absorbed duplicate registration");
            }
            return Ok(false);
        }
        entry.push(handler.clone());
        if self.node.config.diagnostics {
            debug!(
                scope = %self.node.scope_name,
                key = %Pattern::join(key),
                handlers = entry.len(),
                "registered handler"
            );
        }
        Ok(true)
    }

    /// Remove a handler (by pointer identity) from a pattern's list.
    ///
    /// Follows the same walk as [`resolve`](Self::resolve), so whatever
    /// table a pattern resolves against is the one the handler is removed
    /// from. A pattern that resolves nowhere, or a handler that was never
    /// registered, is an already-satisfied success (`Ok(false)`); an actual
    /// removal returns `Ok(true)`. Either way the call is idempotent. When
    /// a pattern's last handler is removed the key is deleted entirely, so
    /// tables never accumulate empty lists.
    pub fn unregister(
        &self,
        pattern: &str,
        handler: &SharedHandler<C>,
    ) -> Result<bool, RegistryError> {
        let pattern = Pattern::parse(pattern)?;
        Ok(self.unregister_pattern(&pattern, handler))
    }

    /// [`unregister`](Self::unregister) with an already-parsed pattern; cannot fail.
    pub fn unregister_pattern(&self, pattern: &Pattern, handler: &SharedHandler<C>) -> bool {
        self.unregister_segments(pattern.segments(), handler, false)
    }

    /// Resolve a pattern to its registered handlers, in registration order.
    ///
    /// Never fails: an unparseable pattern, like an unmatched one, yields an
    /// empty list; "no handler available" is a normal, cheap-to-check
    /// outcome. See the [module docs](self) for the walk policy.
    pub fn resolve(&self, pattern: &str) -> Vec<SharedHandler<C>> {
        match Pattern::parse(pattern) {
            Ok(pattern) => self.resolve_pattern(&pattern),
            Err(err) => {
                if self.node.config.diagnostics {
                    trace!(scope = %self.node.scope_name, pattern, %err, "unresolvable pattern");
                }
                Vec::new()
            }
        }
    }

    /// [`resolve`](Self::resolve) with an already-parsed pattern.
    pub fn resolve_pattern(&self, pattern: &Pattern) -> Vec<SharedHandler<C>> {
        self.resolve_segments(pattern.segments(), false)
    }

    /// Clear this node's handler table and child table and detach from the
    /// parent.
    ///
    /// Strictly local: children are not torn down (they typically belong to
    /// sub-scopes with independent lifecycles), and the parent keeps its
    /// child-table entry for this now-empty node until the parent itself is
    /// cleared or [`detach_child`](Self::detach_child) is called. For a
    /// cascading, leaf-first teardown use [`teardown`](Self::teardown).
    pub fn unregister_all(&self) {
        let (patterns, children) = {
            let mut state = self.node.state.write();
            let patterns = state.handlers.len();
            let children = state.children.len();
            state.handlers.clear();
            state.children.clear();
            state.parent = Weak::new();
            (patterns, children)
        };
        if self.node.config.diagnostics {
            debug!(scope = %self.node.scope_name, patterns, children, "unregistered all");
        }
    }

    /// Tear down this subtree leaf-first.
    ///
    /// Recurses into every child before clearing this node, so by the time a
    /// parent is cleared all of its children have already detached; no live
    /// child is ever left holding a cleared parent.
    pub fn teardown(&self) {
        let children: Vec<Self> = self.node.state.read().children.values().cloned().collect();
        for child in children {
            child.teardown();
        }
        self.unregister_all();
    }

    /// The scope-relative table key for a pattern registered on this node.
    fn local_key<'p>(&self, pattern: &'p Pattern) -> Result<&'p [ScopeName], RegistryError> {
        let mut key = pattern.segments();
        while let Some((first, rest)) = key.split_first() {
            if *first == self.node.scope_name {
                key = rest;
            } else {
                break;
            }
        }
        if key.is_empty() {
            return Err(RegistryError::ScopeOnlyPattern {
                pattern: pattern.to_string(),
                scope: self.node.scope_name.clone(),
            });
        }
        Ok(key)
    }

    /// The resolution walk. `anchored` flips to true once a scope segment
    /// has been consumed or the walk has descended into a child; from that
    /// point the pattern has committed to a subtree and never bubbles back
    /// up past it.
    fn resolve_segments(&self, segments: &[ScopeName], anchored: bool) -> Vec<SharedHandler<C>> {
        let Some((first, _)) = segments.split_first() else {
            return Vec::new();
        };

        // Consume our own scope segment and restart here.
        if *first == self.node.scope_name {
            return self.resolve_segments(&segments[1..], true);
        }

        let (descend, climb) = {
            let state = self.node.state.read();
            if let Some(child) = state.children.get(first) {
                (Some(child.clone()), None)
            } else if let Some(list) = state.handlers.get(segments) {
                if self.node.config.diagnostics {
                    trace!(
                        scope = %self.node.scope_name,
                        key = %Pattern::join(segments),
                        handlers = list.len(),
                        "local match"
                    );
                }
                return list.clone();
            } else if anchored {
                (None, None)
            } else {
                (None, state.parent.upgrade().map(|node| Self { node }))
            }
        };

        if let Some(child) = descend {
            if self.node.config.diagnostics {
                trace!(
                    scope = %self.node.scope_name,
                    child = %child.node.scope_name,
                    pattern = %Pattern::join(segments),
                    "descending"
                );
            }
            // The child's subtree is authoritative from here on.
            return child.resolve_segments(segments, true);
        }
        if let Some(parent) = climb {
            if self.node.config.diagnostics {
                trace!(
                    scope = %self.node.scope_name,
                    parent = %parent.node.scope_name,
                    pattern = %Pattern::join(segments),
                    "bubbling up"
                );
            }
            return parent.resolve_segments(segments, false);
        }
        if self.node.config.diagnostics {
            trace!(
                scope = %self.node.scope_name,
                pattern = %Pattern::join(segments),
                "no provider"
            );
        }
        Vec::new()
    }

    /// Mirror of [`resolve_segments`](Self::resolve_segments) that removes
    /// from whichever table the pattern resolves against.
    fn unregister_segments(
        &self,
        segments: &[ScopeName],
        handler: &SharedHandler<C>,
        anchored: bool,
    ) -> bool {
        let Some((first, _)) = segments.split_first() else {
            return false;
        };

        if *first == self.node.scope_name {
            return self.unregister_segments(&segments[1..], handler, true);
        }

        let child = self.node.state.read().children.get(first).cloned();
        if let Some(child) = child {
            return child.unregister_segments(segments, handler, true);
        }
        if let Some(removed) = self.remove_local(segments, handler) {
            return removed;
        }
        if anchored {
            return false;
        }
        let parent = self.node.state.read().parent.upgrade();
        match parent {
            Some(node) => Self { node }.unregister_segments(segments, handler, false),
            None => false,
        }
    }

    /// Remove `handler` from the local list under `segments`. `None` when
    /// the key is absent; `Some(removed)` when the key is present and this
    /// table is the authoritative stop for the walk.
    fn remove_local(&self, segments: &[ScopeName], handler: &SharedHandler<C>) -> Option<bool> {
        let mut state = self.node.state.write();
        let entry = state.handlers.get_mut(segments)?;
        let before = entry.len();
        entry.retain(|existing| !Arc::ptr_eq(existing, handler));
        let removed = entry.len() != before;
        let now_empty = entry.is_empty();
        if now_empty {
            state.handlers.remove(segments);
        }
        if removed && self.node.config.diagnostics {
            debug!(
                scope = %self.node.scope_name,
                key = %Pattern::join(segments),
                "unregistered handler"
            );
        }
        Some(removed)
    }

    fn is_descendant_of(&self, other: &Self) -> bool {
        let mut current = self.node.state.read().parent.upgrade();
        while let Some(node) = current {
            if Arc::ptr_eq(&node, &other.node) {
                return true;
            }
            current = node.state.read().parent.upgrade();
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::ScopedRegistry;
    use regtree_core::{RegistryError, handler_fn};
    use std::sync::Arc;

    fn registry(name: &str) -> ScopedRegistry<()> {
        ScopedRegistry::new(name).unwrap()
    }

    #[test]
    fn register_is_idempotent_per_identity() {
        let reg = registry("ROOT");
        let handler = handler_fn(|_: &()| Ok(()));

        assert!(reg.register("PING", &handler).unwrap());
        assert!(!reg.register("PING", &handler).unwrap());
        assert!(!reg.register("ping", &handler).unwrap());

        assert_eq!(reg.pattern_count(), 1);
        assert_eq!(reg.resolve("PING").len(), 1);
    }

    #[test]
    fn self_prefixed_patterns_share_the_scope_relative_key() {
        let reg = registry("ROOT");
        let handler = handler_fn(|_: &()| Ok(()));

        assert!(reg.register("ROOT::PING", &handler).unwrap());
        assert!(!reg.register("PING", &handler).unwrap());

        assert_eq!(reg.resolve("PING").len(), 1);
        assert_eq!(reg.resolve("ROOT::PING").len(), 1);
    }

    #[test]
    fn scope_only_pattern_is_rejected() {
        let reg = registry("ROOT");
        let handler = handler_fn(|_: &()| Ok(()));
        assert!(matches!(
            reg.register("ROOT", &handler),
            Err(RegistryError::ScopeOnlyPattern { .. })
        ));
    }

    #[test]
    fn distinct_handlers_fan_out_in_registration_order() {
        let reg = registry("ROOT");
        let first = handler_fn(|_: &()| Ok(()));
        let second = handler_fn(|_: &()| Ok(()));

        reg.register("PING", &first).unwrap();
        reg.register("PING", &second).unwrap();

        let resolved = reg.resolve("PING");
        assert_eq!(resolved.len(), 2);
        assert!(Arc::ptr_eq(&resolved[0], &first));
        assert!(Arc::ptr_eq(&resolved[1], &second));
    }

    #[test]
    fn unregister_deletes_emptied_pattern_keys() {
        let reg = registry("ROOT");
        let handler = handler_fn(|_: &()| Ok(()));

        reg.register("PING", &handler).unwrap();
        assert_eq!(reg.pattern_count(), 1);

        assert!(reg.unregister("PING", &handler).unwrap());
        assert_eq!(reg.pattern_count(), 0, "emptied key must be deleted");

        // Already satisfied, still a success.
        assert!(!reg.unregister("PING", &handler).unwrap());
        assert!(!reg.unregister("NEVER_REGISTERED", &handler).unwrap());
    }

    #[test]
    fn unregister_removes_only_the_given_identity() {
        let reg = registry("ROOT");
        let keep = handler_fn(|_: &()| Ok(()));
        let gone = handler_fn(|_: &()| Ok(()));

        reg.register("PING", &keep).unwrap();
        reg.register("PING", &gone).unwrap();
        assert!(reg.unregister("PING", &gone).unwrap());

        let resolved = reg.resolve("PING");
        assert_eq!(resolved.len(), 1);
        assert!(Arc::ptr_eq(&resolved[0], &keep));
    }

    #[test]
    fn diagnostics_config_does_not_change_semantics() {
        let config = crate::RegistryConfig::new().diagnostics(true);
        let reg: ScopedRegistry<()> = ScopedRegistry::with_config("ROOT", config).unwrap();
        assert!(reg.config().diagnostics);

        let handler = handler_fn(|_: &()| Ok(()));
        reg.register("PING", &handler).unwrap();
        assert_eq!(reg.resolve("PING").len(), 1);
        reg.unregister("PING", &handler).unwrap();
        assert!(reg.resolve("PING").is_empty());
    }

    #[test]
    fn register_rejects_malformed_patterns() {
        let reg = registry("ROOT");
        let handler = handler_fn(|_: &()| Ok(()));
        assert!(matches!(
            reg.register("", &handler),
            Err(RegistryError::Pattern(_))
        ));
        assert!(matches!(
            reg.register("A::::B", &handler),
            Err(RegistryError::Pattern(_))
        ));
    }

    #[test]
    fn attach_requires_matching_scope_name() {
        let root = registry("ROOT");
        let child = registry("BILLING");
        assert!(matches!(
            root.attach_child("INVOICES", &child),
            Err(RegistryError::ScopeNameMismatch { .. })
        ));
        assert!(root.child("BILLING").is_none());
        assert!(child.is_root());
    }

    #[test]
    fn attach_rejects_self_and_ancestors() {
        let root = registry("ROOT");
        let child = registry("CHILD");
        root.attach_child("CHILD", &child).unwrap();

        assert!(matches!(
            root.attach_child("ROOT", &root),
            Err(RegistryError::WouldCycle { .. })
        ));
        assert!(matches!(
            child.attach_child("ROOT", &root),
            Err(RegistryError::WouldCycle { .. })
        ));
    }

    #[test]
    fn attach_rejects_second_parent() {
        let a = registry("A");
        let b = registry("B");
        let child = registry("CHILD");

        a.attach_child("CHILD", &child).unwrap();
        let err = b.attach_child("CHILD", &child).unwrap_err();
        assert!(matches!(err, RegistryError::AlreadyAttached { .. }));
        assert!(child.parent().unwrap().same_node(&a));
    }

    #[test]
    fn names_are_case_insensitive_end_to_end() {
        let root = registry("Root");
        let handler = handler_fn(|_: &()| Ok(()));

        root.register("Foo::Bar", &handler).unwrap();
        assert_eq!(root.resolve("foo::BAR").len(), 1);
        assert_eq!(root.scope_name().as_str(), "ROOT");
    }

    #[test]
    fn domain_path_reflects_attachment() {
        let root = registry("ROOT");
        let billing = registry("BILLING");
        let invoices = registry("INVOICES");

        root.attach_child("BILLING", &billing).unwrap();
        billing.attach_child("INVOICES", &invoices).unwrap();

        assert_eq!(invoices.domain_path(), "ROOT::BILLING::INVOICES");
        assert_eq!(root.domain_path(), "ROOT");

        billing.unregister_all();
        assert_eq!(billing.domain_path(), "BILLING");
    }

    #[test]
    fn detach_child_clears_back_reference() {
        let root = registry("ROOT");
        let child = registry("CHILD");
        root.attach_child("CHILD", &child).unwrap();

        let detached = root.detach_child("child").unwrap();
        assert!(detached.same_node(&child));
        assert!(child.is_root());
        assert_eq!(root.child_count(), 0);
        assert!(root.detach_child("CHILD").is_none());
    }
}
