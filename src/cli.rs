use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "ip-locator", version)]
#[command(
  about = "Geolocate an IP address or hostname.",
  long_about = "A command-line utility that resolves a hostname or IP \
address, queries a geolocation API for it, optionally reverse-geocodes the \
returned coordinates to a street address, and prints a formatted report."
)]
pub struct Cli {
  /// The IP address or hostname to look up.
  /// Read interactively from stdin when omitted.
  pub target: Option<String>,

  /// Output results in JSON format instead of human-readable text.
  #[arg(long)]
  pub json: bool,

  /// Skip the reverse-geocoding enrichment step.
  #[arg(long)]
  pub no_geocode: bool,
}
