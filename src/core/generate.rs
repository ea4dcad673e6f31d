use std::path::PathBuf;

use anyhow::{Result, bail};

use crate::core::{
    ProjectContext,
    registry::{Registry, WriteStatus, build_registry, render_registry, write_if_changed},
};

/// Result of one generator run.
#[derive(Debug)]
pub struct GenerateSummary {
    pub output_path: PathBuf,
    pub files_scanned: usize,
    pub registry: Registry,
    pub status: WriteStatus,
}

/// Scan the templates root, build the registry and write the registry file.
///
/// Fails only when the templates root does not exist. Files that export no
/// component are left out of the registry.
pub fn generate(ctx: &ProjectContext) -> Result<GenerateSummary> {
    if !ctx.templates_root.is_dir() {
        bail!(
            "Templates directory not found at: {}",
            ctx.display_path(&ctx.templates_root)
        );
    }

    let files = ctx.template_files();
    if files.is_empty() {
        tracing::debug!(
            "No {} files found under {}, writing an empty registry",
            ctx.config.extension,
            ctx.display_path(&ctx.templates_root)
        );
    }

    let registry = build_registry(&files, &ctx.templates_root, &ctx.config.extension);
    let content = render_registry(&registry, &ctx.config.regenerate_hint);
    let output_path = ctx.output_path();
    let status = write_if_changed(&output_path, &content)?;

    tracing::debug!(
        "Registry {:?}: {} template(s) from {} file(s)",
        status,
        registry.len(),
        files.len()
    );

    Ok(GenerateSummary {
        output_path,
        files_scanned: files.len(),
        registry,
        status,
    })
}
