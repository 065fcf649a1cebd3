use anyhow::{Context, Result};
use console::{style, Style};
use serde::Serialize;

use crate::providers::ipinfo::LookupResult;

const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Serialize, Default)]
pub struct Report {
  pub target: String,

  #[serde(flatten)]
  pub lookup: LookupResult,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub full_address: Option<String>,
}

/// Helper: coloured keys so the report is easy to scan.
fn key(s: &str) -> console::StyledObject<&str> {
  style(s).bold().cyan()
}

fn header(title: &str) {
  println!(
    "\n{} {}",
    style("[+]").bold().green(),
    Style::new().bold().underlined().apply_to(title)
  );
}

fn opt(value: Option<&str>) -> String {
  value.unwrap_or(NOT_AVAILABLE).to_string()
}

/// The report lines in their fixed order.
///
/// The "Full Address" line only exists when the lookup carried coordinates;
/// a failed enrichment still renders it, as the absence marker.
fn field_lines(report: &Report) -> Vec<(&'static str, String)> {
  let lookup = &report.lookup;

  let mut lines = vec![
    ("IP:", opt(lookup.ip.as_deref())),
    ("Hostname:", opt(lookup.hostname.as_deref())),
    ("City:", opt(lookup.city.as_deref())),
    ("Region:", opt(lookup.region.as_deref())),
    ("Country:", opt(lookup.country.as_deref())),
    ("Location:", opt(lookup.loc.as_deref())),
  ];

  if lookup.loc.is_some() {
    lines.push(("Full Address:", opt(report.full_address.as_deref())));
  }

  lines.push(("ISP/Org:", opt(lookup.org.as_deref())));
  lines.push((
    "ASN:",
    opt(lookup.asn.as_ref().and_then(|a| a.asn.as_deref())),
  ));
  lines.push(("Timezone:", opt(lookup.timezone.as_deref())));
  lines.push(("Postal:", opt(lookup.postal.as_deref())));

  lines
}

pub fn print_human_readable(report: &Report) {
  header("IP Address Information");
  for (label, value) in field_lines(report) {
    println!("  {} {}", key(label), value);
  }
  println!();
}

pub fn print_json(report: &Report) -> Result<()> {
  serde_json::to_string_pretty(report)
    .map(|s| println!("{s}"))
    .context("Failed to serialize results to JSON")
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::providers::ipinfo::Asn;

  fn full_lookup() -> LookupResult {
    LookupResult {
      ip: Some("8.8.8.8".into()),
      hostname: Some("dns.google".into()),
      city: Some("Mountain View".into()),
      region: Some("California".into()),
      country: Some("US".into()),
      loc: Some("37.4056,-122.0775".into()),
      org: Some("AS15169 Google LLC".into()),
      asn: Some(Asn {
        asn: Some("AS15169".into()),
      }),
      timezone: Some("America/Los_Angeles".into()),
      postal: Some("94043".into()),
    }
  }

  #[test]
  fn missing_fields_render_marker() {
    let report = Report::default();
    let lines = field_lines(&report);

    assert!(lines.contains(&("City:", "N/A".to_string())));
    let (label, value) = &lines[2];
    assert_eq!(format!("{label} {value}"), "City: N/A");
  }

  #[test]
  fn full_address_line_absent_without_coordinates() {
    let report = Report::default();
    let lines = field_lines(&report);
    assert!(lines.iter().all(|(label, _)| *label != "Full Address:"));
  }

  #[test]
  fn failed_enrichment_renders_marker() {
    let report = Report {
      target: "8.8.8.8".into(),
      lookup: LookupResult {
        loc: Some("40.7128,-74.0060".into()),
        ..LookupResult::default()
      },
      full_address: None,
    };

    let lines = field_lines(&report);
    assert!(lines.contains(&("Full Address:", "N/A".to_string())));
  }

  #[test]
  fn full_report_renders_every_value_in_order() {
    let report = Report {
      target: "dns.google".into(),
      lookup: full_lookup(),
      full_address: Some(
        "1600 Amphitheatre Parkway, Mountain View, CA, United States".into(),
      ),
    };

    let lines = field_lines(&report);
    let expected = vec![
      ("IP:", "8.8.8.8".to_string()),
      ("Hostname:", "dns.google".to_string()),
      ("City:", "Mountain View".to_string()),
      ("Region:", "California".to_string()),
      ("Country:", "US".to_string()),
      ("Location:", "37.4056,-122.0775".to_string()),
      (
        "Full Address:",
        "1600 Amphitheatre Parkway, Mountain View, CA, United States"
          .to_string(),
      ),
      ("ISP/Org:", "AS15169 Google LLC".to_string()),
      ("ASN:", "AS15169".to_string()),
      ("Timezone:", "America/Los_Angeles".to_string()),
      ("Postal:", "94043".to_string()),
    ];
    assert_eq!(lines, expected);
  }

  #[test]
  fn json_report_flattens_lookup_and_skips_absent_address() {
    let report = Report {
      target: "8.8.8.8".into(),
      lookup: full_lookup(),
      full_address: None,
    };

    let json = serde_json::to_value(&report).expect("report serializes");
    assert_eq!(json["target"], "8.8.8.8");
    assert_eq!(json["city"], "Mountain View");
    assert_eq!(json["asn"]["asn"], "AS15169");
    assert!(json.get("full_address").is_none());
  }

  #[test]
  fn json_report_omits_absent_fields() {
    let report = Report {
      target: "example.com".into(),
      lookup: LookupResult {
        ip: Some("93.184.216.34".into()),
        ..LookupResult::default()
      },
      full_address: None,
    };

    let json = serde_json::to_value(&report).expect("report serializes");
    assert_eq!(json["ip"], "93.184.216.34");
    assert!(json.get("city").is_none());
    assert!(json.get("loc").is_none());
    assert!(json.get("asn").is_none());
  }
}
