// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Hub cluster client creation and kubeconfig utilities

use crate::config::Config;
use crate::error::{AddonError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config as KConfig};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Create a Kubernetes client for the hub cluster
#[instrument(skip(config))]
pub async fn create_client(config: &Config) -> Result<Client> {
    let client_config = match &config.kubeconfig_path {
        Some(path) => load_kubeconfig_file(path, config.kube_context.as_deref()).await?,
        None => infer_config(config.kube_context.as_deref()).await?,
    };

    info!("Using cluster {}", client_config.cluster_url);

    Client::try_from(client_config)
        .map_err(|e| AddonError::KubeconfigError(format!("Failed to create client: {}", e)))
}

/// In-cluster or default kubeconfig, optionally pinned to a context
async fn infer_config(context: Option<&str>) -> Result<KConfig> {
    match context {
        Some(context) => {
            debug!("Loading default kubeconfig with context {}", context);
            KConfig::from_kubeconfig(&kube_config_options(Some(context)))
                .await
                .map_err(|e| {
                    AddonError::KubeconfigError(format!("Failed to load context {}: {}", context, e))
                })
        }
        None => KConfig::infer()
            .await
            .map_err(|e| AddonError::KubeconfigError(format!("Failed to infer config: {}", e))),
    }
}

/// Read a kubeconfig file from disk
async fn load_kubeconfig_file(path: &Path, context: Option<&str>) -> Result<KConfig> {
    debug!("Reading kubeconfig from {}", path.display());

    let kubeconfig = tokio::fs::read_to_string(path).await.map_err(|e| {
        AddonError::KubeconfigError(format!(
            "Failed to read kubeconfig {}: {}",
            path.display(),
            e
        ))
    })?;

    config_from_kubeconfig(&kubeconfig, context).await
}

/// Build a client configuration from a kubeconfig string
async fn config_from_kubeconfig(kubeconfig: &str, context: Option<&str>) -> Result<KConfig> {
    let kubeconfig_parsed: Kubeconfig = serde_yaml::from_str(kubeconfig)
        .map_err(|e| AddonError::KubeconfigError(format!("Failed to parse kubeconfig: {}", e)))?;

    KConfig::from_custom_kubeconfig(kubeconfig_parsed, &kube_config_options(context))
        .await
        .map_err(|e| AddonError::KubeconfigError(format!("Failed to create config: {}", e)))
}

fn kube_config_options(context: Option<&str>) -> KubeConfigOptions {
    KubeConfigOptions {
        context: context.map(str::to_string),
        ..Default::default()
    }
}
