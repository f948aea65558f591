//! Shared JSON decoding for control plane responses

use log::error;
use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;

use crate::error::{CfError, Result};

/// Decode a response body, logging it raw when it does not match `T`
pub(crate) fn decode_body<T: DeserializeOwned>(body: &[u8], context: &str) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| {
        error!("{}", String::from_utf8_lossy(body));
        CfError::Decode {
            context: context.to_string(),
            message: e.to_string(),
        }
    })
}

/// Treat an explicit JSON `null` like a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
