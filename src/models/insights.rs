use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A security-posture finding/rule definition tracked by the platform.
///
/// `filters` is server-defined and open-ended, so each entry is kept as a
/// string-keyed map of loosely-typed values rather than a fixed record.
/// The `timeseries`/`timeseries_cache` pair is server metadata; this library
/// performs no caching of its own.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Insight {
    #[serde(rename = "insight_id")]
    pub id: i64,
    pub name: String,
    pub description: String,
    pub template_id: i64,
    #[serde(rename = "organization_id")]
    pub org_id: i64,
    pub severity: i32,
    pub scopes: Vec<String>,
    pub tags: Vec<String>,
    pub resource_types: Vec<String>,
    pub filters: Vec<HashMap<String, serde_json::Value>>,
    pub timeseries: bool,
    pub timeseries_cache: i64,
}
