use anyhow::Result;

use super::super::{ExitStatus, args::BumpCommand};
use crate::{core::ProjectContext, release::{BumpType, classify}};

/// Print exactly one of `minor`, `patch` or `none` to stdout.
///
/// Classification failures fall back to `patch`, including a config that
/// cannot be loaded.
pub fn bump(cmd: &BumpCommand) -> Result<ExitStatus> {
    let bump = match ProjectContext::new(&cmd.common) {
        Ok(ctx) => classify(&ctx, cmd.base_ref.as_deref()),
        Err(e) => {
            tracing::warn!("{:#}", e);
            BumpType::Patch
        }
    };

    println!("{}", bump);
    Ok(ExitStatus::Success)
}
