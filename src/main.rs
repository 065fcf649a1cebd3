#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use std::process;

#[tokio::main]
async fn main() {
  // Install the default crypto provider for rustls
  let _ = rustls::crypto::ring::default_provider().install_default();

  if let Err(e) = ip_locator::run().await {
    println!("[!] Error: {e}");
    process::exit(1);
  }
}
