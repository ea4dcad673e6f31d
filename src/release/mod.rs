//! Release classification.
//!
//! Compares the generated type declarations of the working tree with those of
//! the base revision:
//!
//! - declarations differ -> `minor` (the public type shape changed)
//! - declarations equal, monitored sources changed -> `patch`
//! - nothing relevant changed -> `none`
//!
//! Unexpected failures classify as `patch`.

pub mod git;
pub mod snapshot;

use anyhow::Result;

use crate::core::ProjectContext;
use git::{CheckoutGuard, Git};
use snapshot::{DeclarationSnapshot, take_snapshot};

/// Environment variable naming the pull request's target branch.
pub const BASE_REF_ENV: &str = "GITHUB_BASE_REF";

/// Kind of version bump a change set calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpType {
    Minor,
    Patch,
    None,
}

impl std::fmt::Display for BumpType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BumpType::Minor => write!(f, "minor"),
            BumpType::Patch => write!(f, "patch"),
            BumpType::None => write!(f, "none"),
        }
    }
}

/// Revision to compare against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseRef {
    /// Branch fetched from `origin`.
    pub branch: String,
    /// Revision checked out and diffed against.
    pub revision: String,
}

/// Pick the comparison revision.
///
/// `origin/<branch>` where the branch comes from `GITHUB_BASE_REF` or the
/// configured default. Without `GITHUB_BASE_REF` on the base branch itself
/// (a push to main), the previous commit is used instead.
pub fn resolve_base_ref(
    env_base_ref: Option<&str>,
    default_branch: &str,
    current_branch: &str,
) -> BaseRef {
    let env_base_ref = env_base_ref.filter(|b| !b.trim().is_empty());
    let branch = env_base_ref.unwrap_or(default_branch).to_string();

    let revision = if env_base_ref.is_none() && current_branch == branch {
        "HEAD^".to_string()
    } else {
        format!("origin/{}", branch)
    };

    BaseRef { branch, revision }
}

/// Decide the bump from the two snapshots and, when they match, whether any
/// monitored source changed.
pub fn decide(
    current: &DeclarationSnapshot,
    base: &DeclarationSnapshot,
    sources_changed: impl FnOnce() -> Result<bool>,
) -> Result<BumpType> {
    if current != base {
        return Ok(BumpType::Minor);
    }
    if sources_changed()? {
        Ok(BumpType::Patch)
    } else {
        Ok(BumpType::None)
    }
}

/// Classify the working tree against its base revision. Never fails.
pub fn classify(ctx: &ProjectContext, env_base_ref: Option<&str>) -> BumpType {
    match try_classify(ctx, env_base_ref) {
        Ok(bump) => bump,
        Err(e) => {
            tracing::warn!("Release classification failed, falling back to patch: {:#}", e);
            BumpType::Patch
        }
    }
}

fn try_classify(ctx: &ProjectContext, env_base_ref: Option<&str>) -> Result<BumpType> {
    let git = Git::new(&ctx.root_dir);

    let current = take_snapshot(ctx);

    let current_branch = git.current_branch()?;
    let base = resolve_base_ref(env_base_ref, &ctx.config.base_branch, &current_branch);
    tracing::debug!("Comparing {} against {}", current_branch, base.revision);

    if let Err(e) = git.fetch("origin", &base.branch, 2) {
        tracing::debug!("Ignoring fetch failure: {:#}", e);
    }

    let guard = CheckoutGuard::new(&git)?;
    let base_snapshot = match guard.switch_to(&base.revision) {
        Ok(()) => take_snapshot(ctx),
        Err(e) => {
            tracing::warn!("Error checking out base ref: {:#}", e);
            DeclarationSnapshot::unknown()
        }
    };
    guard.finish()?;

    decide(&current, &base_snapshot, || {
        let changed = git.changed_files(&base.revision, &ctx.config.monitored_paths)?;
        tracing::debug!("{} monitored file(s) changed", changed.len());
        Ok(!changed.is_empty())
    })
}
