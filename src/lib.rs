#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use anyhow::Result;

mod app;
mod cli;
pub mod error;
pub mod providers;
mod report;

/// Runs the lookup pipeline.
///
/// This function parses command-line arguments, resolves the target to an IP
/// address, queries the geolocation API, optionally reverse-geocodes the
/// returned coordinates, and prints the report.
///
/// # Errors
///
/// Returns an error if initialization fails (e.g., building the HTTP client),
/// if the target cannot be resolved, or if the primary geolocation lookup
/// fails. Reverse-geocoding failures are absorbed locally and never surface
/// here.
pub async fn run() -> Result<()> {
  let app = app::App::new()?;

  app.run().await
}
