use anyhow::Result;

use super::super::{ExitStatus, args::CommonArgs, report};
use crate::{core::ProjectContext, rules::validate};

pub fn check(args: &CommonArgs) -> Result<ExitStatus> {
    let ctx = ProjectContext::new(args)?;

    let registry_path = ctx.output_path();
    if !registry_path.exists() {
        report::print_failure(&format!(
            "{} not found. Please run \"{}\" first.",
            ctx.display_path(&registry_path),
            ctx.config.regenerate_hint
        ));
        return Ok(ExitStatus::Failure);
    }

    let validation = validate(&ctx)?;
    if !validation.is_valid() {
        report::print_validation(&validation, &ctx.config.regenerate_hint);
        return Ok(ExitStatus::Failure);
    }

    report::print_success(&format!(
        "All templates are valid! ({} checked)",
        validation.files_checked()
    ));
    Ok(ExitStatus::Success)
}
