//! Target resolution: literal IP passthrough or forward DNS.

use std::net::IpAddr;
use std::str::FromStr;

use hickory_resolver::{Resolver, TokioResolver};

use crate::error::LookupError;

/// Resolves a target string to an IP address.
///
/// A literal IPv4/IPv6 address is returned unchanged without touching the
/// network. Anything else is forward-resolved with the system-configured
/// resolver and the first answer wins.
///
/// # Errors
///
/// Returns [`LookupError::InvalidInput`] when the target is neither a literal
/// address nor a hostname that resolves to at least one address. No retries
/// are attempted.
pub async fn resolve_target(target: &str) -> Result<IpAddr, LookupError> {
  if let Ok(ip) = IpAddr::from_str(target) {
    return Ok(ip);
  }

  let resolver: TokioResolver = Resolver::builder_tokio()
    .map_err(|_| LookupError::InvalidInput)?
    .build();

  let answer = resolver
    .lookup_ip(target)
    .await
    .map_err(|_| LookupError::InvalidInput)?;

  answer.iter().next().ok_or(LookupError::InvalidInput)
}
