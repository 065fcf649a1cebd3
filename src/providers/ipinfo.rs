//! Primary geolocation lookup against the ipinfo.io API.

use std::net::IpAddr;
use std::time::Duration;

use reqwest::{header, Client};
use serde::{Deserialize, Serialize};

use crate::error::LookupError;

const IPINFO_BASE_URL: &str = "https://ipinfo.io";
const LOOKUP_USER_AGENT: &str = "IPLocatorTool/1.0";
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Geolocation data from ipinfo.io.
///
/// The API omits keys it has no data for, so every field is optional and the
/// report falls back to a marker at display time. Unknown keys are ignored.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct LookupResult {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub ip: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub hostname: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub city: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub region: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub country: Option<String>,

  /// Coordinates as "lat,lon".
  #[serde(skip_serializing_if = "Option::is_none")]
  pub loc: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub org: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub asn: Option<Asn>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub timezone: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub postal: Option<String>,
}

/// Nested autonomous-system object; only the AS number itself is reported.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Asn {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub asn: Option<String>,
}

/// Fetches geolocation for a resolved IP address.
///
/// Issues a single GET to `https://ipinfo.io/<ip>/json` with a fixed
/// identifying user agent and a 5 second timeout.
///
/// # Errors
///
/// - [`LookupError::Network`] when the transport fails, times out, or the
///   body cannot be deserialized.
/// - [`LookupError::Upstream`] when the response status is not success.
pub async fn fetch_lookup(
  ip: IpAddr,
  client: &Client,
) -> Result<LookupResult, LookupError> {
  fetch_lookup_at(IPINFO_BASE_URL, ip, client).await
}

pub(crate) async fn fetch_lookup_at(
  base_url: &str,
  ip: IpAddr,
  client: &Client,
) -> Result<LookupResult, LookupError> {
  let url = format!("{base_url}/{ip}/json");

  let response = client
    .get(&url)
    .header(header::USER_AGENT, LOOKUP_USER_AGENT)
    .timeout(LOOKUP_TIMEOUT)
    .send()
    .await?;

  if !response.status().is_success() {
    return Err(LookupError::Upstream(response.status()));
  }

  Ok(response.json::<LookupResult>().await?)
}
