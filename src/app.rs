use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use reqwest::Client;

use crate::cli::Cli;
use crate::providers::{geocode, ipinfo, resolve};
use crate::report::{self, Report};

pub struct App {
  cli: Cli,
  client: Client,
}

impl App {
  pub fn new() -> Result<Self> {
    let cli = Cli::parse();
    let client = Client::builder()
      .user_agent(format!("ip_locator/{}", env!("CARGO_PKG_VERSION")))
      .build()?;

    Ok(Self { cli, client })
  }

  /// Runs the pipeline: resolve, geolocate, enrich, print.
  ///
  /// The three network calls execute strictly one after another; only the
  /// enrichment step is allowed to fail without aborting the report.
  pub async fn run(&self) -> Result<()> {
    let target = self.target()?;

    let ip = resolve::resolve_target(&target).await?;
    let lookup = ipinfo::fetch_lookup(ip, &self.client).await?;

    let full_address = match &lookup.loc {
      Some(loc) if !self.cli.no_geocode => {
        geocode::reverse(loc, &self.client).await
      }
      _ => None,
    };

    let report = Report {
      target,
      lookup,
      full_address,
    };
    self.print_report(&report)
  }

  fn target(&self) -> Result<String> {
    if let Some(target) = &self.cli.target {
      return Ok(target.trim().to_string());
    }

    println!("\n=== IP Address Geolocation Tracker ===\n");
    print!("Enter an IP address or hostname: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
      .read_line(&mut line)
      .context("Failed to read target from stdin")?;

    Ok(line.trim().to_string())
  }

  fn print_report(&self, report: &Report) -> Result<()> {
    if self.cli.json {
      report::print_json(report)
    } else {
      report::print_human_readable(report);
      Ok(())
    }
  }
}
