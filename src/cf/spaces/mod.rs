//! Space module

mod api;
mod models;

pub use models::{decode_spaces, Space, SpaceEntity, SpaceIndex, SpaceMetadata};
