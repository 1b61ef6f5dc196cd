/*
 * SPDX-FileCopyrightText: 2026 DriveMate Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod consts;
pub mod database;
pub mod input;
pub mod permission;
pub mod pricing;
pub mod rides;
pub mod types;

use anyhow::Context;
use clap::Parser;
use database::connect_db;
use input::resolve_secret;
use std::sync::Arc;
use tracing_subscriber::{fmt, EnvFilter};
use types::*;

pub fn init_logging(cli: &Cli) {
    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt().with_env_filter(filter);

    if cli.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}

pub async fn init_state() -> anyhow::Result<Arc<ServerState>> {
    let cli = Cli::parse();
    init_logging(&cli);

    let jwt_secret = resolve_secret(cli.jwt_secret.as_deref(), cli.jwt_secret_file.as_deref())
        .context("No JWT secret provided")?;

    tracing::info!("Starting DriveMate Server on {}:{}", cli.ip, cli.port);

    let db = connect_db(&cli).await?;

    Ok(Arc::new(ServerState {
        db,
        cli,
        jwt_secret,
    }))
}
