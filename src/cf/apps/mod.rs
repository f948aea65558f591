//! App module

mod api;
mod models;

pub use models::{
    decode_app_stats, decode_apps, App, AppInstance, AppStats, InstanceStats, InstanceUsage,
};
