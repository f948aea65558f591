//! Plain text report output
//!
//! One line per space name, followed by one tab-indented line per app
//! instance:
//!
//! ```text
//! prod
//!     web-> 10.0.0.5:61001, Uris: web.example.com
//! ```

use std::io::Write;

use crate::cf::InstanceStats;
use crate::error::Result;

/// Format the line for one app instance (without trailing newline)
pub fn format_app_line(app_name: &str, host: &str, port: i64, uris: &[String]) -> String {
    format!("\t{}-> {}:{}, Uris: {}", app_name, host, port, uris.join(", "))
}

/// Writes the space/app tree to any sink
pub struct Presenter<W: Write> {
    out: W,
}

impl<W: Write> Presenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write a space name on its own line
    pub fn print_space_header(&mut self, name: &str) -> Result<()> {
        writeln!(self.out, "{}", name)?;
        Ok(())
    }

    /// Write one indented line for an app instance
    pub fn print_app_line(&mut self, app_name: &str, stats: &InstanceStats) -> Result<()> {
        writeln!(
            self.out,
            "{}",
            format_app_line(app_name, &stats.host, stats.port, &stats.uris)
        )?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
