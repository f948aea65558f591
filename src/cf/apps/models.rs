//! App data models

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::cf::decode::{decode_body, null_as_default};
use crate::config::api;
use crate::error::Result;

/// Instance index to instance, as returned by the stats endpoint
pub type AppStats = BTreeMap<String, AppInstance>;

/// App entry from a space summary
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct App {
    pub guid: String,
    pub name: String,
    pub state: String,
}

impl App {
    /// Exact, case-sensitive match on `STARTED`
    pub fn is_started(&self) -> bool {
        self.state == api::STATE_STARTED
    }
}

/// Space summary envelope
#[derive(Deserialize, Debug)]
pub(crate) struct SpaceSummaryResponse {
    pub apps: Vec<App>,
}

/// One running copy of an app
///
/// Instances that are down come back without `stats`; they decode to zero
/// values and still get a line.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct AppInstance {
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stats: InstanceStats,
}

/// Network endpoint and usage of an instance
#[derive(Deserialize, Debug, Clone, Default)]
pub struct InstanceStats {
    #[serde(default, deserialize_with = "null_as_default")]
    pub usage: InstanceUsage,
    #[serde(default, deserialize_with = "null_as_default")]
    pub host: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub port: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub uris: Vec<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct InstanceUsage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub disk: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mem: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cpu: f64,
    /// Sample timestamp, kept as sent
    #[serde(default, deserialize_with = "null_as_default")]
    pub time: String,
}

/// Decode a space summary body into its apps, in response order
pub fn decode_apps(body: &[u8]) -> Result<Vec<App>> {
    let response: SpaceSummaryResponse = decode_body(body, "space summary")?;
    Ok(response.apps)
}

/// Decode an app stats body into its instances
pub fn decode_app_stats(body: &[u8]) -> Result<AppStats> {
    decode_body(body, "app stats")
}
