// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::defaults;
use crate::resources::NamingMode;
use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

/// Operator configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Only watch Wordpress objects in this namespace; all namespaces when unset
    pub watch_namespace: Option<String>,
    /// How child names and selectors are derived from the owner
    pub naming_mode: NamingMode,
    /// Delay before re-running a reconciliation that completed
    pub requeue_interval_secs: u64,
    /// Delay before re-running a reconciliation that failed
    pub error_requeue_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            watch_namespace: None,
            naming_mode: NamingMode::default(),
            requeue_interval_secs: defaults::REQUEUE_INTERVAL_SECS,
            error_requeue_secs: defaults::ERROR_REQUEUE_SECS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let watch_namespace = lookup("WATCH_NAMESPACE").filter(|ns| !ns.is_empty());

        let naming_mode = match lookup("CHILD_NAMING") {
            Some(value) => value
                .parse()
                .context("CHILD_NAMING must be 'shared' or 'owner-scoped'")?,
            None => NamingMode::default(),
        };

        let requeue_interval_secs = parse_secs(
            &lookup,
            "REQUEUE_INTERVAL_SECS",
            defaults::REQUEUE_INTERVAL_SECS,
        )?;
        let error_requeue_secs =
            parse_secs(&lookup, "ERROR_REQUEUE_SECS", defaults::ERROR_REQUEUE_SECS)?;

        Ok(Config {
            watch_namespace,
            naming_mode,
            requeue_interval_secs,
            error_requeue_secs,
        })
    }

    pub fn requeue_interval(&self) -> Duration {
        Duration::from_secs(self.requeue_interval_secs)
    }

    pub fn error_requeue_interval(&self) -> Duration {
        Duration::from_secs(self.error_requeue_secs)
    }
}

fn parse_secs<F>(lookup: &F, key: &str, default: u64) -> Result<u64>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value
            .parse()
            .with_context(|| format!("{} must be a whole number of seconds, got '{}'", key, value)),
        None => Ok(default),
    }
}
