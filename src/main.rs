// SPDX-License-Identifier: GPL-3.0-only
use anyhow::Context;
use serde::Serialize;
use tracing::{error, info};

use embedded_mysqld::logging::setup_logging;
use embedded_mysqld::{Distribution, MysqldSettings, PackagePaths, PackageResolver, ResolvedArtifact};

/// What a downloader and launcher would be handed for this host
#[derive(Serialize)]
struct LaunchPlan {
    distribution: String,
    download_url: String,
    artifact: ResolvedArtifact,
    port: u16,
    rw_user: String,
    ro_user: String,
    time_zone: String,
    timeout_secs: u64,
    temp_dir: String,
    enforce_gtid: bool,
    server_args: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    // Load configuration
    let settings = MysqldSettings::load()?;

    // Initialize logging
    setup_logging(&settings.log_level, settings.log_format)?;

    info!("Starting embedded-mysqld v{}", env!("CARGO_PKG_VERSION"));

    let download = settings.download_config()?;
    let version = settings.version()?;
    let distribution = Distribution::detect(version).context("Failed to detect host platform")?;

    let resolver = PackagePaths::new();
    let artifact = match resolver.resolve(&distribution) {
        Ok(artifact) => artifact,
        Err(e) => {
            error!(error = %e, distribution = %distribution, "No archive available for this host");
            return Err(e.into());
        }
    };
    let download_url = download.download_url(&resolver, &distribution)?;
    info!(url = %download_url, archive_type = ?artifact.archive_type, "Resolved distribution");

    let config = settings.into_builder()?.build()?;
    info!(config = %config, "Built mysqld configuration");

    let plan = LaunchPlan {
        distribution: distribution.to_string(),
        download_url: download_url.to_string(),
        artifact,
        port: config.port(),
        rw_user: config.rw_user().name().to_string(),
        ro_user: config.ro_user().name().to_string(),
        time_zone: config.time_zone().id().to_string(),
        timeout_secs: config.timeout().as_secs(),
        temp_dir: config.temp_dir().to_string(),
        enforce_gtid: config.enforce_gtid(),
        server_args: config.server_variable_args(),
    };

    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
