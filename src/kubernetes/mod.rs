// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for API discovery, client creation, and add-on listing.

pub mod addons;
pub mod client;
pub mod crd;

pub use addons::{
    get_all_addons, list_cluster_management_addons, list_managed_cluster_addons,
    AddonAbortHandle, AddonListing, AddonRequest,
};
pub use client::create_client;
pub use crd::{ensure_addon_api, wait_for_addon_api};
