//! Query configuration that downstream crates can serialize/deserialize.
//!
//! Only sizing hints live here. None of them change results; they decide how
//! much room the pre-scan structures (lookups, seen-sets) and materialization
//! buffers reserve up front.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

static GLOBAL: Lazy<QueryConfig> = Lazy::new(QueryConfig::from_env);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Initial capacity of the hash index behind a `Lookup`.
    pub lookup_capacity_hint: usize,

    /// Initial bucket capacity of the seen-sets used by distinct/union/except/intersect.
    pub seen_set_capacity_hint: usize,

    /// Initial capacity of `to_vec`/`to_list` buffers.
    pub materialize_capacity_hint: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            lookup_capacity_hint: 16,
            seen_set_capacity_hint: 16,
            materialize_capacity_hint: 0,
        }
    }
}

impl QueryConfig {
    /// Process-wide configuration, read from the environment on first use.
    pub fn global() -> &'static QueryConfig {
        &GLOBAL
    }

    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `LAZYQ_LOOKUP_CAPACITY_HINT`: initial lookup index capacity
    /// - `LAZYQ_SEEN_SET_CAPACITY_HINT`: initial seen-set bucket capacity
    /// - `LAZYQ_MATERIALIZE_CAPACITY_HINT`: initial materialization buffer capacity
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("LAZYQ_LOOKUP_CAPACITY_HINT") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.lookup_capacity_hint = v;
            }
        }

        if let Ok(s) = std::env::var("LAZYQ_SEEN_SET_CAPACITY_HINT") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.seen_set_capacity_hint = v;
            }
        }

        if let Ok(s) = std::env::var("LAZYQ_MATERIALIZE_CAPACITY_HINT") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.materialize_capacity_hint = v;
            }
        }

        cfg
    }

    /// Parse a JSON document; missing fields keep their defaults.
    pub fn from_json(doc: &str) -> Result<Self> {
        serde_json::from_str(doc).map_err(|e| Error::Config(e.to_string()))
    }
}
