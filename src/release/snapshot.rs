use std::{
    fs,
    path::Path,
    process::{Command, Stdio},
};

use anyhow::{Context, Result, bail};

use crate::core::{ProjectContext, collect::collect_files, generate::generate};

const UNKNOWN: &str = "UNKNOWN";

/// Concatenated type declarations of one revision, compared byte for byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarationSnapshot(String);

impl DeclarationSnapshot {
    /// Snapshot used when the declarations could not be produced.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Sentinel for a revision that could not be checked out. Never equal to
    /// a real snapshot, so it forces a `minor` classification.
    pub fn unknown() -> Self {
        Self(UNKNOWN.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Read every `.d.ts` file under `dir` into a snapshot.
///
/// Each file contributes `FILE: <relative path>\n<content>`; blocks are joined
/// by `\n---\n` in path order. A missing directory gives an empty snapshot.
pub fn read_declarations(dir: &Path) -> Result<DeclarationSnapshot> {
    let mut blocks = Vec::new();

    for file in collect_files(dir, Some(".d.ts"), &[]) {
        let rel = file
            .strip_prefix(dir)
            .unwrap_or(&file)
            .to_string_lossy()
            .replace('\\', "/");
        let content = fs::read_to_string(&file)
            .with_context(|| format!("Failed to read {}", file.display()))?;
        blocks.push(format!("FILE: {}\n{}", rel, content));
    }

    Ok(DeclarationSnapshot(blocks.join("\n---\n")))
}

/// Run a shell command line in `dir`, discarding its output on success.
pub fn run_shell(command: &str, dir: &Path) -> Result<()> {
    tracing::debug!("Running `{}`", command);

    let mut cmd = if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", command]);
        cmd
    } else {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", command]);
        cmd
    };

    let output = cmd
        .current_dir(dir)
        .stdin(Stdio::null())
        .output()
        .with_context(|| format!("Failed to run `{}`", command))?;

    if !output.status.success() {
        bail!(
            "`{}` exited with {}: {}",
            command,
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    Ok(())
}

/// Regenerate the registry, build the declarations and read them back.
pub fn build_snapshot(ctx: &ProjectContext) -> Result<DeclarationSnapshot> {
    generate(ctx)?;
    run_shell(&ctx.config.build_types_command, &ctx.root_dir)?;
    read_declarations(&ctx.declarations_dir())
}

/// Like [`build_snapshot`], but any failure yields the empty snapshot.
pub fn take_snapshot(ctx: &ProjectContext) -> DeclarationSnapshot {
    match build_snapshot(ctx) {
        Ok(snapshot) => {
            tracing::debug!("Declaration snapshot: {} bytes", snapshot.as_str().len());
            snapshot
        }
        Err(e) => {
            tracing::warn!("Error generating snapshot: {:#}", e);
            DeclarationSnapshot::empty()
        }
    }
}
