//! Space API operations

use log::debug;

use crate::cf::CfClient;
use crate::config::api;
use crate::error::Result;

use super::models::{decode_spaces, SpaceIndex};

impl CfClient {
    /// Get all spaces visible to the token, keyed by name
    pub async fn get_spaces(&self) -> Result<SpaceIndex> {
        let body = self.fetch(api::SPACES).await?;
        let spaces = decode_spaces(&body)?;
        debug!("Found {} spaces", spaces.len());
        Ok(spaces)
    }
}
