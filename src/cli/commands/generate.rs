use anyhow::Result;

use super::super::{ExitStatus, args::CommonArgs, report};
use crate::core::{ProjectContext, generate::generate as generate_registry, registry::WriteStatus};

pub fn generate(args: &CommonArgs) -> Result<ExitStatus> {
    let ctx = ProjectContext::new(args)?;

    if !ctx.templates_root.is_dir() {
        report::print_failure(&format!(
            "Templates directory not found at: {}",
            ctx.display_path(&ctx.templates_root)
        ));
        return Ok(ExitStatus::Failure);
    }

    let summary = generate_registry(&ctx)?;
    if summary.files_scanned == 0 {
        report::print_warning(&format!(
            "No {} files found under {}. Wrote a minimal registry.",
            ctx.config.extension,
            ctx.display_path(&ctx.templates_root)
        ));
    }

    let action = match summary.status {
        WriteStatus::Created | WriteStatus::Updated => "Generated",
        WriteStatus::Unchanged => "Up to date:",
    };
    report::print_success(&format!(
        "{} {} with {} template(s).",
        action,
        ctx.display_path(&summary.output_path),
        summary.registry.len()
    ));

    Ok(ExitStatus::Success)
}
