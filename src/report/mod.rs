//! Space/app report
//!
//! Walks every space in name order. For each space the summary is fetched,
//! the header printed, then stats for all started apps are fetched
//! concurrently and printed as they arrive. A space is finished before the
//! next one starts. The first error aborts the whole report.

use futures::stream::{self, StreamExt};
use log::debug;
use std::io::Write;

use crate::cf::{App, CfClient};
use crate::config::ReportOptions;
use crate::error::{CfError, Result};
use crate::output::Presenter;

/// Counts gathered while printing a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub spaces: usize,
    pub started_apps: usize,
    pub instances: usize,
}

/// Run the full report: all spaces, their started apps, and app instances
pub async fn run_report<W: Write>(
    client: &CfClient,
    options: &ReportOptions,
    presenter: &mut Presenter<W>,
) -> Result<ReportSummary> {
    let spaces = client.get_spaces().await?;
    let mut summary = ReportSummary::default();

    for (name, guid) in &spaces {
        let apps = client.get_space_apps(guid).await?;
        presenter.print_space_header(name)?;

        let (started_apps, instances) =
            report_space_apps(client, options, &apps, presenter).await?;
        debug!(
            "Space '{}': {} apps, {} started, {} instances",
            name,
            apps.len(),
            started_apps,
            instances
        );

        summary.spaces += 1;
        summary.started_apps += started_apps;
        summary.instances += instances;
    }

    presenter.flush()?;
    Ok(summary)
}

/// Fetch stats of every started app and print one line per instance
///
/// Returns `(started_apps, instances)`.
async fn report_space_apps<W: Write>(
    client: &CfClient,
    options: &ReportOptions,
    apps: &[App],
    presenter: &mut Presenter<W>,
) -> Result<(usize, usize)> {
    let started: Vec<&App> = apps.iter().filter(|app| app.is_started()).collect();
    let limit = options.concurrency_for(started.len());

    debug!(
        "Fetching stats for {} started apps (max {} concurrent)",
        started.len(),
        limit
    );

    let mut fetches = stream::iter(started.iter().map(|&app| async move {
        let stats = client.get_app_stats(&app.guid).await?;
        Ok::<_, CfError>((app, stats))
    }))
    .buffer_unordered(limit);

    let mut instances = 0;
    while let Some(result) = fetches.next().await {
        let (app, stats) = result?;
        for (index, instance) in &stats {
            let usage = &instance.stats.usage;
            debug!(
                "{}[{}] state={:?} cpu={} mem={} disk={} sampled={}",
                app.name, index, instance.state, usage.cpu, usage.mem, usage.disk, usage.time
            );
            presenter.print_app_line(&app.name, &instance.stats)?;
            instances += 1;
        }
    }

    Ok((started.len(), instances))
}
