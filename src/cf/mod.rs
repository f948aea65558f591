//! Control plane API client module
//!
//! Read-only access to the v2 spaces, space summary and app stats endpoints.

pub mod apps;
mod client;
mod decode;
pub mod spaces;

pub use apps::{App, AppInstance, AppStats, InstanceStats, InstanceUsage};
pub use client::CfClient;
pub use spaces::{Space, SpaceIndex};
