//! cf-apps - Running Cloud Foundry apps and their endpoints
//!
//! Reads the v2 API of a Cloud Foundry control plane and prints, for every
//! space, the host, port and routes of each instance of each started app.
//!
//! # Example
//!
//! ```bash
//! cf-apps https://api.cf.example.com "$(cf oauth-token)"
//!
//! # Limit parallel stats requests per space
//! cf-apps -c 8 https://api.cf.example.com "$(cf oauth-token)"
//! ```
//!
//! Output:
//!
//! ```text
//! prod
//!     web-> 10.0.0.5:61001, Uris: web.example.com
//! ```

pub mod cf;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod report;

pub use cf::{App, AppInstance, AppStats, CfClient, InstanceStats, Space, SpaceIndex};
pub use cli::Cli;
pub use config::{CfConfig, ReportOptions};
pub use error::{CfError, Result};
pub use output::{format_app_line, Presenter};
pub use report::{run_report, ReportSummary};
