//! Solis Intake Service
//!
//! Serves the contact-form submission endpoint for the marketing site.

use std::net::SocketAddr;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8088".to_string());
    let addr: SocketAddr = bind_addr.parse()?;

    solis_intake::serve(addr).await?;
    Ok(())
}
