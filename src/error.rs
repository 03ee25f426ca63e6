// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddonError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to load kubeconfig: {0}")]
    KubeconfigError(String),

    #[error("Add-on API not available: {0}")]
    ApiUnavailable(String),

    #[error("Watch ended: {0}")]
    WatchEnded(String),

    #[error("Request aborted")]
    Aborted,

    #[error("Failed to render add-ons: {0}")]
    RenderError(String),
}

pub type Result<T> = std::result::Result<T, AddonError>;
