// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use addonscope::config::Config;
use addonscope::error::AddonError;
use addonscope::kubernetes::{create_client, ensure_addon_api, get_all_addons, wait_for_addon_api};
use addonscope::overview::{resolve_addons, watch_addon_overview};
use addonscope::render::render;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so rendered output stays clean on stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: managed_cluster={}, output_format={:?}, watch={}",
        config.managed_cluster, config.output_format, config.watch
    );

    let client = create_client(&config).await?;

    if config.watch {
        info!("Waiting for add-on API to become available...");
        wait_for_addon_api(&client).await?;

        let format = config.output_format;
        tokio::select! {
            result = watch_addon_overview(&client, &config.managed_cluster, |addons| {
                print!("{}", render(addons, format)?);
                Ok(())
            }) => result?,
            _ = tokio::signal::ctrl_c() => info!("Interrupted, stopping watch"),
        }
        return Ok(());
    }

    ensure_addon_api(&client).await?;

    let request = get_all_addons(&client, &config.managed_cluster);
    let abort = request.abort_handle();
    let interrupt = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupted, aborting add-on requests");
            abort.abort();
        }
    });

    let result = resolve_addons(request).await;
    interrupt.abort();

    match result {
        Ok(addons) => {
            print!("{}", render(&addons, config.output_format)?);
            Ok(())
        }
        Err(AddonError::Aborted) => {
            warn!("Add-on requests aborted");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
