use std::{
    path::PathBuf,
    process::{Command, Stdio},
};

use anyhow::{Context, Result, bail};

/// Thin wrapper around the `git` executable, run in a fixed directory.
#[derive(Debug, Clone)]
pub struct Git {
    dir: PathBuf,
}

impl Git {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Run `git <args>` and return trimmed stdout.
    pub fn run(&self, args: &[&str]) -> Result<String> {
        tracing::debug!("git {}", args.join(" "));
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.dir)
            .stdin(Stdio::null())
            .output()
            .context("Failed to run git")?;

        if !output.status.success() {
            bail!(
                "git {} failed: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Current branch name, or `HEAD` when detached.
    pub fn current_branch(&self) -> Result<String> {
        self.run(&["rev-parse", "--abbrev-ref", "HEAD"])
    }

    /// Something `git checkout` can return to: the branch name, or the commit
    /// id when HEAD is detached.
    pub fn current_revision(&self) -> Result<String> {
        let branch = self.current_branch()?;
        if branch == "HEAD" {
            self.run(&["rev-parse", "HEAD"])
        } else {
            Ok(branch)
        }
    }

    pub fn checkout(&self, revision: &str) -> Result<()> {
        self.run(&["checkout", "--quiet", revision]).map(|_| ())
    }

    pub fn fetch(&self, remote: &str, branch: &str, depth: u32) -> Result<()> {
        let depth = format!("--depth={}", depth);
        self.run(&["fetch", "--quiet", remote, branch, &depth])
            .map(|_| ())
    }

    /// Names of files under `paths` that differ between `base` and `HEAD`.
    pub fn changed_files(&self, base: &str, paths: &[String]) -> Result<Vec<String>> {
        let mut args = vec!["diff", "--name-only", base, "HEAD", "--"];
        args.extend(paths.iter().map(String::as_str));

        let output = self.run(&args)?;
        Ok(output
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect())
    }
}

/// Scoped checkout of another revision.
///
/// The original revision is recorded on construction and checked out again
/// when the guard is finished or dropped, whether or not the switch or the
/// work done in between succeeded.
pub struct CheckoutGuard<'a> {
    git: &'a Git,
    original: String,
    restored: bool,
}

impl<'a> CheckoutGuard<'a> {
    /// Record the current revision. Nothing is checked out yet.
    pub fn new(git: &'a Git) -> Result<Self> {
        let original = git
            .current_revision()
            .context("Failed to determine the current revision")?;
        Ok(Self {
            git,
            original,
            restored: false,
        })
    }

    /// Check out `revision` for the lifetime of the guard.
    pub fn switch_to(&self, revision: &str) -> Result<()> {
        self.git
            .checkout(revision)
            .with_context(|| format!("Failed to check out {}", revision))
    }

    /// Return to the original revision now and report failures.
    pub fn finish(mut self) -> Result<()> {
        self.restored = true;
        self.git
            .checkout(&self.original)
            .with_context(|| format!("Failed to restore {}", self.original))
    }
}

impl Drop for CheckoutGuard<'_> {
    fn drop(&mut self) {
        if self.restored {
            return;
        }
        if let Err(e) = self.git.checkout(&self.original) {
            tracing::error!("Failed to restore {}: {:#}", self.original, e);
        }
    }
}
