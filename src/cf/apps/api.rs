//! App API operations

use log::debug;

use crate::cf::CfClient;
use crate::config::api;
use crate::error::Result;

use super::models::{decode_app_stats, decode_apps, App, AppStats};

impl CfClient {
    /// Get the apps of a space from its summary, in response order
    pub async fn get_space_apps(&self, space_guid: &str) -> Result<Vec<App>> {
        let path = format!("{}/{}/{}", api::SPACES, space_guid, api::SUMMARY);
        let body = self.fetch(&path).await?;
        let apps = decode_apps(&body)?;
        debug!("Space '{}' has {} apps", space_guid, apps.len());
        Ok(apps)
    }

    /// Get per-instance stats of an app
    pub async fn get_app_stats(&self, app_guid: &str) -> Result<AppStats> {
        let path = format!("{}/{}/{}", api::APPS, app_guid, api::STATS);
        let body = self.fetch(&path).await?;
        decode_app_stats(&body)
    }
}
