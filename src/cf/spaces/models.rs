//! Space data models

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::cf::decode::decode_body;
use crate::config::api;
use crate::error::{CfError, Result};

/// Space name to space guid, iterated in name order
pub type SpaceIndex = BTreeMap<String, String>;

/// Space resource from the spaces list
#[derive(Deserialize, Debug, Clone)]
pub struct Space {
    pub metadata: SpaceMetadata,
    pub entity: SpaceEntity,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SpaceMetadata {
    pub guid: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SpaceEntity {
    pub name: String,
}

/// Spaces list envelope
#[derive(Deserialize, Debug)]
pub(crate) struct SpacesResponse {
    pub resources: Vec<Space>,
}

/// Decode a spaces list body into a name -> guid index
///
/// A body mentioning the invalid token marker fails with
/// [`CfError::InvalidAuthToken`] before any JSON parsing. Duplicate names keep
/// the last guid.
pub fn decode_spaces(body: &[u8]) -> Result<SpaceIndex> {
    if String::from_utf8_lossy(body).contains(api::INVALID_AUTH_TOKEN) {
        return Err(CfError::InvalidAuthToken);
    }

    let response: SpacesResponse = decode_body(body, "spaces")?;
    Ok(response
        .resources
        .into_iter()
        .map(|space| (space.entity.name, space.metadata.guid))
        .collect())
}
