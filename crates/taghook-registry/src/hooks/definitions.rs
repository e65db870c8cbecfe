//! Registry entries, per-tag lists, and registration options.

use taghook_core::config::registry::RegistryConfig;
use taghook_core::{HookError, HookResult};

use super::callback::Callback;

/// Optional per-registration settings.
///
/// Unset fields fall back to the registry's configured defaults
/// (priority 10, one trailing argument, unless configured otherwise).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HookOptions {
    /// Dispatch priority. Lower values run first.
    pub priority: Option<i32>,
    /// How many trailing arguments to forward to the callback.
    pub args_limit: Option<usize>,
}

impl HookOptions {
    /// Creates options that use the registry defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the priority.
    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the argument limit.
    pub fn args_limit(mut self, args_limit: usize) -> Self {
        self.args_limit = Some(args_limit);
        self
    }

    /// Builds options from a positional `[priority, args_limit]` sequence.
    /// Either trailing item may be omitted.
    pub fn from_params(params: &[i64]) -> HookResult<Self> {
        match params {
            [] => Ok(Self::new()),
            [priority] => Ok(Self::new().priority(priority_param(*priority)?)),
            [priority, args_limit] => {
                let args_limit = usize::try_from(*args_limit).map_err(|_| {
                    HookError::validation(format!("args_limit must be >= 0, got {args_limit}"))
                })?;
                Ok(Self::new()
                    .priority(priority_param(*priority)?)
                    .args_limit(args_limit))
            }
            _ => Err(HookError::validation(format!(
                "expected at most [priority, args_limit], got {} parameters",
                params.len()
            ))),
        }
    }

    pub(crate) fn resolve(&self, config: &RegistryConfig) -> (i32, usize) {
        (
            self.priority.unwrap_or(config.default_priority),
            self.args_limit.unwrap_or(config.default_args_limit),
        )
    }
}

pub(crate) fn priority_param(priority: i64) -> HookResult<i32> {
    i32::try_from(priority)
        .map_err(|_| HookError::validation(format!("priority {priority} is out of range")))
}

/// One registered callback with its dispatch settings.
#[derive(Debug, Clone)]
pub(crate) struct HookEntry {
    pub(crate) callback: Callback,
    pub(crate) priority: i32,
    pub(crate) args_limit: usize,
}

/// The callbacks registered under one tag.
#[derive(Debug)]
pub(crate) struct HookList {
    /// Storage order until sorted, dispatch order afterwards.
    entries: Vec<HookEntry>,
    /// Whether `entries` is currently in dispatch order.
    sorted: bool,
}

impl HookList {
    /// A single-entry list is trivially sorted.
    pub(crate) fn new(entry: HookEntry) -> Self {
        Self {
            entries: vec![entry],
            sorted: true,
        }
    }

    pub(crate) fn push(&mut self, entry: HookEntry) {
        self.entries.push(entry);
        self.sorted = false;
    }

    /// Removes the first entry in storage order matching both callback and
    /// priority.
    pub(crate) fn remove(&mut self, callback: &Callback, priority: i32) -> Option<HookEntry> {
        let index = self
            .entries
            .iter()
            .position(|e| e.callback == *callback && e.priority == priority)?;
        Some(self.entries.remove(index))
    }

    pub(crate) fn contains(&self, callback: &Callback) -> bool {
        self.entries.iter().any(|e| e.callback == *callback)
    }

    /// Puts entries into dispatch order if needed. Returns true when a sort
    /// actually happened.
    pub(crate) fn ensure_sorted(&mut self) -> bool {
        if self.sorted {
            return false;
        }
        // Stable: equal priorities keep registration order.
        self.entries.sort_by_key(|e| e.priority);
        self.sorted = true;
        true
    }

    #[cfg(test)]
    pub(crate) fn is_sorted(&self) -> bool {
        self.sorted
    }

    pub(crate) fn entries(&self) -> &[HookEntry] {
        &self.entries
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
