use anyhow::Result;

use super::super::{ExitStatus, args::NewCommand, report};
use crate::{
    core::ProjectContext,
    scaffold::{ScaffoldRequest, scaffold},
};

pub fn new(cmd: &NewCommand) -> Result<ExitStatus> {
    let ctx = ProjectContext::new(&cmd.common)?;

    let request = ScaffoldRequest {
        name: cmd.name.clone(),
        domain: Some(cmd.domain.clone()),
        preview_text: cmd.preview.clone(),
        button_path: cmd.button_path.clone(),
    };

    let (path, template) = match scaffold(&ctx, &request, cmd.force) {
        Ok(created) => created,
        Err(e) => {
            report::print_failure(&format!("{:#}", e));
            return Ok(ExitStatus::Failure);
        }
    };

    report::print_success(&format!(
        "Created {} ({}). Run \"{}\" to register it.",
        ctx.display_path(&path),
        template.component,
        ctx.config.regenerate_hint
    ));
    Ok(ExitStatus::Success)
}
