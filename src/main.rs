// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use kube::Client;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use draven::config::Config;
use draven::kubernetes::wait_for_draven_crd;
use draven::reconcilers::DravenReconciler;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting Draven controller");

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: happy_marker={}, abort_on_fetch_error={}",
        config.happy_marker, config.abort_on_fetch_error
    );

    // Create Kubernetes client
    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    // Wait for the Draven CRD before starting the reconciler
    if config.wait_for_crd {
        info!("Waiting for Draven CRD to become available...");
        wait_for_draven_crd(&client).await?;
    }

    let reconciler = DravenReconciler::new(client, config);

    info!("Starting reconciler...");
    reconciler.run().await?;

    // Only reached once the controller shuts down
    warn!("Draven reconciler stopped");
    Ok(())
}
