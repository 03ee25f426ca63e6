// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Fetching both add-on lists for a managed cluster and resolving them.

use crate::addons::{map_addons, Addon};
use crate::constants::retry::{INITIAL_BACKOFF_SECS, MAX_BACKOFF_SECS};
use crate::error::{AddonError, Result};
use crate::kubernetes::{get_all_addons, AddonRequest};
use crate::types::{ClusterManagementAddOn, ManagedClusterAddOn};
use futures::future::ready;
use futures::stream::{self, BoxStream};
use futures::StreamExt;
use kube::{Api, Client};
use kube_runtime::watcher::{self, Event};
use kube_runtime::WatchStreamExt;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info, instrument, warn};

/// Settle a pending request and resolve the add-ons, failing if either list failed
pub async fn resolve_addons(request: AddonRequest) -> Result<Vec<Addon>> {
    let listing = request.settled().await;

    if let Err(e) = &listing.definitions {
        error!("Failed to list ClusterManagementAddOns: {}", e);
    }
    if let Err(e) = &listing.instances {
        error!("Failed to list ManagedClusterAddOns: {}", e);
    }

    let definitions = listing.definitions?;
    let instances = listing.instances?;

    Ok(map_addons(&definitions, &instances))
}

/// Fetch and resolve the add-ons of a managed cluster once
#[instrument(skip(client))]
pub async fn load_addon_overview(client: &Client, cluster: &str) -> Result<Vec<Addon>> {
    let addons = resolve_addons(get_all_addons(client, cluster)).await?;
    info!("Resolved {} add-ons for cluster {}", addons.len(), cluster);
    Ok(addons)
}

/// Like [`load_addon_overview`], retrying failed requests with exponential backoff
async fn load_with_retry(client: &Client, cluster: &str) -> Vec<Addon> {
    let mut backoff = INITIAL_BACKOFF_SECS;

    loop {
        match load_addon_overview(client, cluster).await {
            Ok(addons) => return addons,
            Err(e) => {
                warn!(
                    "Failed to load add-ons for cluster {}: {}, retrying in {} seconds...",
                    cluster, e, backoff
                );
            }
        }

        sleep(Duration::from_secs(backoff)).await;
        backoff = (backoff * 2).min(MAX_BACKOFF_SECS);
    }
}

/// Resolve the cluster's add-ons and call `on_change` with every new result.
/// Re-resolves whenever a ClusterManagementAddOn or a ManagedClusterAddOn in
/// the cluster namespace changes.
pub async fn watch_addon_overview<F>(client: &Client, cluster: &str, mut on_change: F) -> Result<()>
where
    F: FnMut(&[Addon]) -> Result<()>,
{
    let mut current = load_with_retry(client, cluster).await;
    on_change(&current)?;

    let mut changes = addon_changes(client, cluster);
    while changes.next().await.is_some() {
        let addons = load_with_retry(client, cluster).await;
        if addons != current {
            on_change(&addons)?;
            current = addons;
        } else {
            debug!("Add-ons of cluster {} unchanged", cluster);
        }
    }

    Err(AddonError::WatchEnded(format!("add-ons of cluster {}", cluster)))
}

/// One item per watch event, from either add-on kind, that may change the result
fn addon_changes(client: &Client, cluster: &str) -> BoxStream<'static, ()> {
    let instances: Api<ManagedClusterAddOn> = Api::namespaced(client.clone(), cluster);
    let instance_changes = watcher::watcher(instances, watcher::Config::default())
        .default_backoff()
        .filter_map(|event| ready(change_signal("ManagedClusterAddOn", event)));

    let definitions: Api<ClusterManagementAddOn> = Api::all(client.clone());
    let definition_changes = watcher::watcher(definitions, watcher::Config::default())
        .default_backoff()
        .filter_map(|event| ready(change_signal("ClusterManagementAddOn", event)));

    stream::select(instance_changes, definition_changes).boxed()
}

fn change_signal<K>(kind: &str, event: std::result::Result<Event<K>, watcher::Error>) -> Option<()> {
    match event {
        Ok(event) => is_change(&event).then_some(()),
        Err(e) => {
            warn!("{} watch error: {}", kind, e);
            None
        }
    }
}

/// Initial listing events are covered by the load that precedes the watch
fn is_change<K>(event: &Event<K>) -> bool {
    !matches!(event, Event::Init | Event::InitApply(_))
}
