//! Hook dispatch — filter chains and action fan-out.
//!
//! Both entry points sort the tag's callbacks on first use after a
//! registration, then invoke them in priority order:
//!
//! - Filters thread a value through the chain. Each callback's return value
//!   becomes the next callback's input.
//! - Actions call every callback for its side effects and discard results.
//!
//! A callback error stops the chain and is returned to the caller as-is.
//!
//! ## Argument limits
//!
//! Each entry's `args_limit` caps what it receives:
//!
//! | limit                   | filter receives                  | action receives     |
//! |-------------------------|----------------------------------|---------------------|
//! | `0`                     | nothing                          | nothing             |
//! | `>= argument count`     | `value, extras..`                | `args..`            |
//! | otherwise               | `value, extras[..limit]..`       | `args[..limit]..`   |
//!
//! For filters the argument count includes the value, but the truncation
//! applies `limit` to the extras alone. A filter with limit 1 called with
//! one extra therefore still receives that extra, and with two extras
//! receives the first one.

use serde_json::Value;
use tracing::{trace, warn};

use taghook_core::{HookError, HookResult};

use super::definitions::HookEntry;
use super::registry::HookRegistry;

impl HookRegistry {
    /// Passes `value` through every filter registered under `tag` and
    /// returns the result. An unknown tag returns `value` unchanged.
    pub fn apply_filters(&self, tag: &str, value: Value, extras: &[Value]) -> HookResult<Value> {
        let Some(entries) = self.dispatch_order(tag) else {
            return Ok(value);
        };

        trace!(tag = %tag, hook_count = entries.len(), "Applying filters");

        let mut value = value;
        for entry in &entries {
            let args = filter_arguments(entry.args_limit, value, extras);
            value = invoke(tag, entry, &args)?;
        }

        Ok(value)
    }

    /// Like [`apply_filters`](Self::apply_filters) with the value and the
    /// extras given as one sequence. The first element is the value.
    pub fn apply_filters_array(&self, tag: &str, args: Vec<Value>) -> HookResult<Value> {
        let mut args = args.into_iter();
        let value = args.next().ok_or_else(|| {
            HookError::validation(format!("apply_filters_array('{tag}') requires a value"))
        })?;
        let extras: Vec<Value> = args.collect();
        self.apply_filters(tag, value, &extras)
    }

    /// Calls every callback registered under `tag` for its side effects.
    /// An unknown tag is a no-op.
    pub fn do_action(&self, tag: &str, args: &[Value]) -> HookResult<()> {
        let Some(entries) = self.dispatch_order(tag) else {
            return Ok(());
        };

        trace!(tag = %tag, hook_count = entries.len(), "Doing action");

        for entry in &entries {
            invoke(tag, entry, action_arguments(entry.args_limit, args))?;
        }

        Ok(())
    }

    /// Like [`do_action`](Self::do_action) with the arguments given as one
    /// owned sequence.
    pub fn do_action_array(&self, tag: &str, args: Vec<Value>) -> HookResult<()> {
        self.do_action(tag, &args)
    }
}

fn invoke(tag: &str, entry: &HookEntry, args: &[Value]) -> HookResult<Value> {
    entry.callback.invoke(args).inspect_err(|e| {
        warn!(
            tag = %tag,
            callback = %entry.callback.label(),
            priority = entry.priority,
            error = %e,
            "Hook callback failed, remaining callbacks skipped"
        );
    })
}

/// Builds the argument list for one filter callback.
pub(crate) fn filter_arguments(args_limit: usize, value: Value, extras: &[Value]) -> Vec<Value> {
    let num_args = extras.len() + 1;

    if args_limit == 0 {
        return Vec::new();
    }

    let forwarded = if args_limit >= num_args {
        extras
    } else {
        // args_limit < num_args, so args_limit <= extras.len()
        &extras[..args_limit]
    };

    let mut args = Vec::with_capacity(forwarded.len() + 1);
    args.push(value);
    args.extend_from_slice(forwarded);
    args
}

/// Selects the arguments for one action callback.
pub(crate) fn action_arguments(args_limit: usize, args: &[Value]) -> &[Value] {
    if args_limit >= args.len() {
        args
    } else {
        &args[..args_limit]
    }
}
