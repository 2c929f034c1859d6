//! Panel configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::env::VarError;

use crate::consts::{CACHED_ITEMS_RENDERED_PER_BATCH, ITEMS_RENDERED_PER_BATCH};
use crate::error::LibraryError;

pub const ITEMS_PER_BATCH_VAR: &str = "LIBRARY_ITEMS_PER_BATCH";
pub const CACHED_ITEMS_PER_BATCH_VAR: &str = "LIBRARY_CACHED_ITEMS_PER_BATCH";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelConfig {
    /// Previews revealed per batch while previews are being generated.
    pub items_per_batch: usize,
    /// Previews revealed per batch once every preview is cached.
    pub cached_items_per_batch: usize,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            items_per_batch: ITEMS_RENDERED_PER_BATCH,
            cached_items_per_batch: CACHED_ITEMS_RENDERED_PER_BATCH,
        }
    }
}

impl PanelConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `LIBRARY_ITEMS_PER_BATCH`: default 17
    /// - `LIBRARY_CACHED_ITEMS_PER_BATCH`: default 64
    ///
    /// Values must be positive integers. A value that is not valid unicode is
    /// rejected rather than treated as unset.
    pub fn from_env() -> Result<Self, LibraryError> {
        Self::from_values(env_value(ITEMS_PER_BATCH_VAR)?, env_value(CACHED_ITEMS_PER_BATCH_VAR)?)
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LibraryError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_values(lookup(ITEMS_PER_BATCH_VAR), lookup(CACHED_ITEMS_PER_BATCH_VAR))
    }

    fn from_values(items: Option<String>, cached: Option<String>) -> Result<Self, LibraryError> {
        let defaults = Self::default();
        Ok(Self {
            items_per_batch: parse_batch(ITEMS_PER_BATCH_VAR, items, defaults.items_per_batch)?,
            cached_items_per_batch: parse_batch(CACHED_ITEMS_PER_BATCH_VAR, cached, defaults.cached_items_per_batch)?,
        })
    }
}

/// Read `var`, treating only an absent variable as unset.
fn env_value(var: &'static str) -> Result<Option<String>, LibraryError> {
    match std::env::var(var) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(LibraryError::Config {
            var,
            value: raw.to_string_lossy().into_owned(),
        }),
    }
}

fn parse_batch(var: &'static str, raw: Option<String>, default: usize) -> Result<usize, LibraryError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().parse::<usize>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(LibraryError::Config { var, value: raw }),
    }
}
