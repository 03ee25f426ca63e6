// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Listing add-on resources and fetching both kinds together

use crate::error::{AddonError, Result};
use crate::types::{ClusterManagementAddOn, ManagedClusterAddOn};
use futures::future::{abortable, join, AbortHandle, Aborted, BoxFuture};
use futures::FutureExt;
use kube::{api::ListParams, Api, Client};
use tracing::{debug, instrument};

/// List every ClusterManagementAddOn on the hub
#[instrument(skip(client))]
pub async fn list_cluster_management_addons(client: &Client) -> Result<Vec<ClusterManagementAddOn>> {
    let addons: Api<ClusterManagementAddOn> = Api::all(client.clone());
    let addon_list = addons.list(&ListParams::default()).await?;

    debug!("Listed {} ClusterManagementAddOns", addon_list.items.len());
    Ok(addon_list.items)
}

/// List the ManagedClusterAddOns in a managed cluster's namespace
#[instrument(skip(client))]
pub async fn list_managed_cluster_addons(
    client: &Client,
    cluster: &str,
) -> Result<Vec<ManagedClusterAddOn>> {
    let addons: Api<ManagedClusterAddOn> = Api::namespaced(client.clone(), cluster);
    let addon_list = addons.list(&ListParams::default()).await?;

    debug!(
        "Listed {} ManagedClusterAddOns in {}",
        addon_list.items.len(),
        cluster
    );
    Ok(addon_list.items)
}

/// Outcome of both list requests, each settled on its own
#[derive(Debug)]
pub struct AddonListing {
    pub definitions: Result<Vec<ClusterManagementAddOn>>,
    pub instances: Result<Vec<ManagedClusterAddOn>>,
}

/// Cancels every request of an [`AddonRequest`] at once
#[derive(Clone, Debug)]
pub struct AddonAbortHandle {
    handles: [AbortHandle; 2],
}

impl AddonAbortHandle {
    pub fn abort(&self) {
        for handle in &self.handles {
            handle.abort();
        }
    }

    pub fn is_aborted(&self) -> bool {
        self.handles.iter().all(AbortHandle::is_aborted)
    }
}

/// Both add-on list requests for one managed cluster. The requests run
/// concurrently once [`AddonRequest::settled`] is awaited.
pub struct AddonRequest {
    future: BoxFuture<'static, AddonListing>,
    abort: AddonAbortHandle,
}

impl AddonRequest {
    pub fn abort_handle(&self) -> AddonAbortHandle {
        self.abort.clone()
    }

    pub fn abort(&self) {
        self.abort.abort();
    }

    /// Wait for both requests to finish, successfully or not
    pub async fn settled(self) -> AddonListing {
        self.future.await
    }
}

/// Start listing the hub's add-on definitions and the cluster's add-on instances
pub fn get_all_addons(client: &Client, cluster: &str) -> AddonRequest {
    let definitions_client = client.clone();
    let (definitions, definitions_handle) = abortable(async move {
        list_cluster_management_addons(&definitions_client).await
    });

    let instances_client = client.clone();
    let cluster = cluster.to_string();
    let (instances, instances_handle) = abortable(async move {
        list_managed_cluster_addons(&instances_client, &cluster).await
    });

    let future = join(definitions, instances)
        .map(|(definitions, instances)| AddonListing {
            definitions: settle(definitions),
            instances: settle(instances),
        })
        .boxed();

    AddonRequest {
        future,
        abort: AddonAbortHandle {
            handles: [definitions_handle, instances_handle],
        },
    }
}

fn settle<T>(outcome: std::result::Result<Result<T>, Aborted>) -> Result<T> {
    outcome.unwrap_or_else(|Aborted| Err(AddonError::Aborted))
}
