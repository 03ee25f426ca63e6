// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Kubernetes annotation keys read by addonscope
pub mod annotations {
    /// Target URL of an add-on's launch link
    pub const LAUNCH_LINK: &str = "console.open-cluster-management.io/launch-link";
    /// Label shown for an add-on's launch link
    pub const LAUNCH_LINK_TEXT: &str = "console.open-cluster-management.io/launch-link-text";
}

/// Add-on API coordinates
pub mod api {
    pub const GROUP: &str = "addon.open-cluster-management.io";
    pub const VERSION: &str = "v1alpha1";
    pub const CLUSTER_MANAGEMENT_ADDON_KIND: &str = "ClusterManagementAddOn";
    pub const MANAGED_CLUSTER_ADDON_KIND: &str = "ManagedClusterAddOn";
}

/// API discovery polling configuration
pub mod crd {
    /// Initial polling interval in seconds when waiting for the add-on API
    pub const POLL_INTERVAL_SECS: u64 = 10;
    /// Maximum polling interval in seconds (exponential backoff cap)
    pub const POLL_MAX_INTERVAL_SECS: u64 = 60;
}

/// Retry configuration for watch mode
pub mod retry {
    pub const INITIAL_BACKOFF_SECS: u64 = 2;
    pub const MAX_BACKOFF_SECS: u64 = 60;
}

/// Condition status values
pub mod conditions {
    pub const TRUE: &str = "True";
    pub const FALSE: &str = "False";
}
