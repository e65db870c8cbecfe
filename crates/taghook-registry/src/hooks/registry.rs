//! Hook registry — callbacks stored per tag with priority ordering.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::{debug, trace};

use taghook_core::{HookError, HookResult};
use taghook_core::config::registry::RegistryConfig;

use super::callback::Callback;
use super::definitions::{HookEntry, HookList, HookOptions, priority_param};

/// Registry of filter and action callbacks organized by tag.
///
/// Filters and actions share one storage: a callback added with
/// [`add_action`](Self::add_action) can be fired with
/// [`apply_filters`](Self::apply_filters) and vice versa.
///
/// Each tag has its own lock, so registration, removal, and the
/// sort-before-dispatch step on one tag are serialized. Callbacks run with
/// no lock held.
#[derive(Debug)]
pub struct HookRegistry {
    /// Tag → callbacks.
    hooks: DashMap<String, HookList>,
    /// Registration defaults and pruning policy.
    config: RegistryConfig,
}

impl HookRegistry {
    /// Creates an empty registry with default settings.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Creates an empty registry with the given settings.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            hooks: DashMap::new(),
            config,
        }
    }

    /// Returns the registry settings.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Registers a callback under `tag` with the default priority and
    /// argument limit.
    pub fn add_filter(&self, tag: &str, callback: Callback) {
        self.add_filter_with(tag, callback, HookOptions::default());
    }

    /// Registers a callback under `tag`.
    ///
    /// Registering the same callback twice yields two independent entries.
    pub fn add_filter_with(&self, tag: &str, callback: Callback, options: HookOptions) {
        let (priority, args_limit) = options.resolve(&self.config);

        debug!(
            tag = %tag,
            callback = %callback.label(),
            priority = priority,
            args_limit = args_limit,
            "Hook callback registered"
        );

        let entry = HookEntry {
            callback,
            priority,
            args_limit,
        };

        match self.hooks.entry(tag.to_string()) {
            Entry::Occupied(mut list) => list.get_mut().push(entry),
            Entry::Vacant(slot) => {
                slot.insert(HookList::new(entry));
            }
        }
    }

    /// Registers a callback with `[priority, args_limit]` given positionally.
    pub fn add_filter_array(
        &self,
        tag: &str,
        callback: Callback,
        params: &[i64],
    ) -> HookResult<()> {
        let options = HookOptions::from_params(params)?;
        self.add_filter_with(tag, callback, options);
        Ok(())
    }

    /// Removes the first entry under `tag` whose callback is `callback` and
    /// whose priority equals `priority`.
    ///
    /// Returns false if the tag is absent or nothing matched. Only one entry
    /// is removed even when duplicates exist.
    pub fn remove_filter(&self, tag: &str, callback: &Callback, priority: i32) -> bool {
        let now_empty = {
            let Some(mut list) = self.hooks.get_mut(tag) else {
                return false;
            };
            if list.remove(callback, priority).is_none() {
                return false;
            }
            list.is_empty()
        };

        debug!(
            tag = %tag,
            callback = %callback.label(),
            priority = priority,
            "Hook callback removed"
        );

        if now_empty && self.config.prune_empty_tags {
            self.hooks.remove_if(tag, |_, list| list.is_empty());
        }

        true
    }

    /// Removes a callback registered with the default priority.
    pub fn remove_filter_default(&self, tag: &str, callback: &Callback) -> bool {
        self.remove_filter(tag, callback, self.config.default_priority)
    }

    /// Removes a callback with `[priority]` given positionally.
    pub fn remove_filter_array(
        &self,
        tag: &str,
        callback: &Callback,
        params: &[i64],
    ) -> HookResult<bool> {
        let priority = match params {
            [] => self.config.default_priority,
            [priority] => priority_param(*priority)?,
            _ => {
                return Err(HookError::validation(format!(
                    "expected at most [priority], got {} parameters",
                    params.len()
                )));
            }
        };
        Ok(self.remove_filter(tag, callback, priority))
    }

    /// Returns whether any tag has ever been registered.
    ///
    /// Tags whose callbacks were all removed still count unless
    /// `prune_empty_tags` is enabled.
    pub fn has_filters(&self) -> bool {
        !self.hooks.is_empty()
    }

    /// Returns whether `tag` is known, or, given a callback, whether that
    /// callback is registered under `tag`.
    pub fn has_filter(&self, tag: &str, callback: Option<&Callback>) -> bool {
        let Some(list) = self.hooks.get(tag) else {
            return false;
        };
        match callback {
            Some(callback) => list.contains(callback),
            None => true,
        }
    }

    /// Returns the number of callbacks registered under `tag`.
    pub fn hook_count(&self, tag: &str) -> usize {
        self.hooks.get(tag).map(|list| list.len()).unwrap_or(0)
    }

    /// Returns all known tags in alphabetical order.
    pub fn registered_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self.hooks.iter().map(|e| e.key().clone()).collect();
        tags.sort();
        tags
    }

    /// Removes every tag and callback.
    pub fn clear(&self) {
        self.hooks.clear();
    }

    /// Sorts the tag's list if needed and returns its entries in dispatch
    /// order. The lock is released before the caller invokes anything.
    pub(crate) fn dispatch_order(&self, tag: &str) -> Option<Vec<HookEntry>> {
        let mut list = self.hooks.get_mut(tag)?;
        if list.ensure_sorted() {
            trace!(tag = %tag, hook_count = list.len(), "Hook list sorted by priority");
        }
        Some(list.entries().to_vec())
    }
}

/// Action-named aliases. Actions and filters share storage and semantics.
impl HookRegistry {
    /// Alias of [`add_filter`](Self::add_filter).
    pub fn add_action(&self, tag: &str, callback: Callback) {
        self.add_filter(tag, callback);
    }

    /// Alias of [`add_filter_with`](Self::add_filter_with).
    pub fn add_action_with(&self, tag: &str, callback: Callback, options: HookOptions) {
        self.add_filter_with(tag, callback, options);
    }

    /// Alias of [`add_filter_array`](Self::add_filter_array).
    pub fn add_action_array(
        &self,
        tag: &str,
        callback: Callback,
        params: &[i64],
    ) -> HookResult<()> {
        self.add_filter_array(tag, callback, params)
    }

    /// Alias of [`remove_filter`](Self::remove_filter).
    pub fn remove_action(&self, tag: &str, callback: &Callback, priority: i32) -> bool {
        self.remove_filter(tag, callback, priority)
    }

    /// Alias of [`remove_filter_default`](Self::remove_filter_default).
    pub fn remove_action_default(&self, tag: &str, callback: &Callback) -> bool {
        self.remove_filter_default(tag, callback)
    }

    /// Alias of [`remove_filter_array`](Self::remove_filter_array).
    pub fn remove_action_array(
        &self,
        tag: &str,
        callback: &Callback,
        params: &[i64],
    ) -> HookResult<bool> {
        self.remove_filter_array(tag, callback, params)
    }

    /// Alias of [`has_filters`](Self::has_filters).
    pub fn has_actions(&self) -> bool {
        self.has_filters()
    }

    /// Alias of [`has_filter`](Self::has_filter).
    pub fn has_action(&self, tag: &str, callback: Option<&Callback>) -> bool {
        self.has_filter(tag, callback)
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn noop() -> Callback {
        Callback::new(|_| Ok(Value::Null))
    }

    #[test]
    fn test_dispatch_order_caches_sort() {
        let registry = HookRegistry::new();
        let (late, early) = (noop(), noop());
        registry.add_filter_with("tag", late.clone(), HookOptions::new().priority(20));
        registry.add_filter_with("tag", early.clone(), HookOptions::new().priority(5));

        let order = registry.dispatch_order("tag").expect("tag exists");
        assert_eq!(order[0].callback, early);
        assert_eq!(order[1].callback, late);

        let stored = registry.hooks.get("tag").expect("tag exists");
        assert_eq!(stored.entries()[0].callback, early);
    }

    #[test]
    fn test_dispatch_order_absent_tag() {
        let registry = HookRegistry::new();
        assert!(registry.dispatch_order("missing").is_none());
    }

    #[test]
    fn test_defaults_come_from_config() {
        let registry = HookRegistry::with_config(RegistryConfig {
            default_priority: 7,
            default_args_limit: 2,
            prune_empty_tags: false,
        });
        registry.add_filter("tag", noop());

        let order = registry.dispatch_order("tag").expect("tag exists");
        assert_eq!(order[0].priority, 7);
        assert_eq!(order[0].args_limit, 2);
    }
}
