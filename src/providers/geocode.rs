//! Best-effort reverse geocoding through the Nominatim API.

use std::time::Duration;

use reqwest::{header, Client};
use serde::Deserialize;

const NOMINATIM_REVERSE_URL: &str =
  "https://nominatim.openstreetmap.org/reverse";
const GEOCODE_USER_AGENT: &str = "ip_locator";
const GEOCODE_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct ReverseResponse {
  display_name: Option<String>,
}

/// Resolves a "lat,lon" coordinate pair to a human-readable address.
///
/// Enrichment only: any failure (malformed coordinates, transport error or
/// timeout, non-success status, unexpected body) collapses to `None` and the
/// caller renders the absence marker instead.
pub async fn reverse(coords: &str, client: &Client) -> Option<String> {
  reverse_at(NOMINATIM_REVERSE_URL, coords, client).await
}

pub(crate) async fn reverse_at(
  url: &str,
  coords: &str,
  client: &Client,
) -> Option<String> {
  let (lat, lon) = coords.split_once(',')?;

  let response = client
    .get(url)
    .query(&[("lat", lat.trim()), ("lon", lon.trim()), ("format", "jsonv2")])
    .header(header::USER_AGENT, GEOCODE_USER_AGENT)
    .timeout(GEOCODE_TIMEOUT)
    .send()
    .await
    .ok()?;

  if !response.status().is_success() {
    return None;
  }

  response.json::<ReverseResponse>().await.ok()?.display_name
}
