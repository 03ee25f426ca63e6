// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Add-on API availability checking utilities

use crate::constants::api;
use crate::constants::crd::{POLL_INTERVAL_SECS, POLL_MAX_INTERVAL_SECS};
use crate::error::{AddonError, Result};
use kube::{discovery::Discovery, Client};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

const REQUIRED_KINDS: [&str; 2] = [
    api::CLUSTER_MANAGEMENT_ADDON_KIND,
    api::MANAGED_CLUSTER_ADDON_KIND,
];

/// Wait for the add-on API to become available in the cluster.
/// This uses exponential backoff starting at POLL_INTERVAL_SECS seconds.
pub async fn wait_for_addon_api(client: &Client) -> Result<()> {
    let mut interval = POLL_INTERVAL_SECS;

    loop {
        match ensure_addon_api(client).await {
            Ok(()) => {
                info!("Add-on API ({}/{}) is available", api::GROUP, api::VERSION);
                return Ok(());
            }
            Err(AddonError::ApiUnavailable(reason)) => {
                info!("{}, waiting {} seconds...", reason, interval);
            }
            Err(e) => {
                warn!(
                    "Error checking for add-on API: {}, retrying in {} seconds...",
                    e, interval
                );
            }
        }

        sleep(Duration::from_secs(interval)).await;

        // Exponential backoff with max cap
        interval = (interval * 2).min(POLL_MAX_INTERVAL_SECS);
    }
}

/// Fail with [`AddonError::ApiUnavailable`] unless both add-on kinds are served.
pub async fn ensure_addon_api(client: &Client) -> Result<()> {
    let discovery = Discovery::new(client.clone())
        .filter(&[api::GROUP])
        .run()
        .await?;

    let served: Vec<(String, String)> = discovery
        .groups()
        .filter(|group| group.name() == api::GROUP)
        .flat_map(|group| group.recommended_resources())
        .map(|(ar, _)| (ar.kind, ar.version))
        .collect();

    let missing = missing_kinds(&served);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(AddonError::ApiUnavailable(format!(
            "{}/{} does not serve {}",
            api::GROUP,
            api::VERSION,
            missing.join(", ")
        )))
    }
}

/// Add-on kinds absent from the served (kind, version) pairs
fn missing_kinds(served: &[(String, String)]) -> Vec<&'static str> {
    REQUIRED_KINDS
        .into_iter()
        .filter(|kind| {
            !served
                .iter()
                .any(|(k, v)| k == kind && v == api::VERSION)
        })
        .collect()
}
