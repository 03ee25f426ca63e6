// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed add-on custom resources.

pub mod addon;

pub use addon::{
    ClusterManagementAddOn, ClusterManagementAddOnSpec, Condition, ManagedClusterAddOn,
    ManagedClusterAddOnSpec, ManagedClusterAddOnStatus,
};
