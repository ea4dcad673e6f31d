use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result};
use glob::Pattern;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::collect::collect_files,
};

/// Resolved project layout shared by every command.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g. `--root templates`)
/// 2. `.mailgenrc.json` config file
/// 3. Built-in defaults
pub struct ProjectContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Directory holding the config file (or the working directory).
    pub root_dir: PathBuf,

    /// Absolute templates root (e.g. `<root_dir>/emails`).
    pub templates_root: PathBuf,

    ignore_patterns: Vec<Pattern>,
}

impl ProjectContext {
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let start_dir = match &args.path {
            Some(path) => path.clone(),
            None => env::current_dir().context("Failed to determine working directory")?,
        };
        let loaded = load_config(&start_dir)?;
        if loaded.from_file {
            tracing::debug!("Using {}", loaded.project_root.join(CONFIG_FILE_NAME).display());
        } else {
            tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
        }

        let mut config = loaded.config;
        if let Some(root) = &args.root {
            config.templates_root = root.to_string_lossy().into_owned();
        }

        Ok(Self::from_config(config, loaded.project_root))
    }

    pub fn from_config(config: Config, root_dir: PathBuf) -> Self {
        let templates_root = root_dir.join(&config.templates_root);
        let ignore_patterns = config.ignore_patterns();
        Self {
            config,
            root_dir,
            templates_root,
            ignore_patterns,
        }
    }

    /// Path of the generated registry file.
    pub fn output_path(&self) -> PathBuf {
        self.templates_root.join(&self.config.output_file)
    }

    /// Path of the type declaration output directory.
    pub fn declarations_dir(&self) -> PathBuf {
        self.root_dir.join(&self.config.declarations_dir)
    }

    /// All template files, sorted, minus the registry file and `ignores` matches.
    pub fn template_files(&self) -> Vec<PathBuf> {
        let files = collect_files(
            &self.templates_root,
            Some(&self.config.extension),
            &[self.config.output_file.as_str()],
        );

        files
            .into_iter()
            .filter(|file| !self.is_ignored(file))
            .collect()
    }

    fn is_ignored(&self, file: &Path) -> bool {
        let rel = file.strip_prefix(&self.root_dir).unwrap_or(file);
        let ignored = self.ignore_patterns.iter().any(|p| p.matches_path(rel));
        if ignored {
            tracing::debug!("Ignoring {} (matches 'ignores')", rel.display());
        }
        ignored
    }

    /// `path` relative to the project root, for display.
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
    }
}
