/*
 * SPDX-FileCopyrightText: 2026 DriveMate Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use drivemate_core::init_state;
use std::sync::Arc;

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    let state = init_state().await?;

    let _guard = match (state.cli.report_errors, state.cli.sentry_dsn.as_deref()) {
        (true, Some(dsn)) => Some(sentry::init(dsn)),
        (true, None) => {
            tracing::warn!("Error reporting enabled but no Sentry DSN configured");
            None
        }
        _ => None,
    };

    web::serve_web(Arc::clone(&state)).await?;

    Ok(())
}
