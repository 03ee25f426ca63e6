// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// How resolved add-ons are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            other => bail!("unsupported output format '{}', expected table, json or yaml", other),
        }
    }
}

/// Configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Managed cluster whose add-ons are resolved (also its namespace on the hub)
    pub managed_cluster: String,
    pub output_format: OutputFormat,
    /// Keep running and re-render whenever the cluster's add-ons change
    pub watch: bool,
    pub kubeconfig_path: Option<PathBuf>,
    pub kube_context: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let managed_cluster = lookup("MANAGED_CLUSTER")
            .filter(|v| !v.is_empty())
            .context("MANAGED_CLUSTER environment variable not set")?;
        let output_format = match lookup("OUTPUT_FORMAT") {
            Some(v) => v.parse().context("invalid OUTPUT_FORMAT")?,
            None => OutputFormat::default(),
        };
        let watch: bool = lookup("WATCH")
            .unwrap_or("false".to_string())
            .parse()
            .unwrap_or(false);

        Ok(Config {
            managed_cluster,
            output_format,
            watch,
            kubeconfig_path: lookup("KUBECONFIG_PATH").map(PathBuf::from),
            kube_context: lookup("KUBE_CONTEXT"),
        })
    }
}
