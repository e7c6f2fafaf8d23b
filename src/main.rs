// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use kube::{Client, CustomResourceExt};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use wordpress_operator::config::Config;
use wordpress_operator::constants::OPERATOR_NAME;
use wordpress_operator::kubernetes::wait_for_wordpress_crd;
use wordpress_operator::reconcilers::WordpressReconciler;
use wordpress_operator::types::Wordpress;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--print-crd") {
        let crd = serde_yaml::to_string(&Wordpress::crd()).context("Failed to render CRD")?;
        print!("{}", crd);
        return Ok(());
    }

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting {}", OPERATOR_NAME);

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: watch_namespace={}, child_naming={}, requeue={}s",
        config.watch_namespace.as_deref().unwrap_or("<all>"),
        config.naming_mode,
        config.requeue_interval_secs
    );

    // Create Kubernetes client
    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    info!("Waiting for Wordpress CRD to become available...");
    wait_for_wordpress_crd(&client).await?;

    WordpressReconciler::new(client, config).run().await?;

    warn!("Wordpress reconciler stopped");
    Ok(())
}
