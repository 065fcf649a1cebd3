use reqwest::StatusCode;
use thiserror::Error;

/// Failures of the lookup pipeline.
///
/// Resolution and the primary geolocation lookup are the only fatal steps;
/// reverse geocoding degrades to absence instead of producing one of these.
#[derive(Debug, Error)]
pub enum LookupError {
  /// The target is neither a literal IP address nor a resolvable hostname.
  #[error("Invalid hostname or IP address")]
  InvalidInput,

  /// The transport failed or timed out while talking to the geolocation API.
  #[error("Request failed: {0}")]
  Network(#[from] reqwest::Error),

  /// The geolocation API answered with a non-success status.
  #[error("API returned non-200 status: {0}")]
  Upstream(StatusCode),
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn invalid_input_message() {
    assert_eq!(
      LookupError::InvalidInput.to_string(),
      "Invalid hostname or IP address"
    );
  }

  #[test]
  fn upstream_message_carries_status() {
    let msg = LookupError::Upstream(StatusCode::NOT_FOUND).to_string();
    assert_eq!(msg, "API returned non-200 status: 404 Not Found");
  }

  #[test]
  fn upstream_message_mentions_non_200() {
    let msg = LookupError::Upstream(StatusCode::SERVICE_UNAVAILABLE).to_string();
    assert!(msg.contains("non-200 status"));
    assert!(msg.contains("503"));
  }
}
