use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".mailgenrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_templates_root", alias = "emailsDir")]
    pub templates_root: String,
    #[serde(default = "default_output_file")]
    pub output_file: String,
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_declarations_dir")]
    pub declarations_dir: String,
    #[serde(default = "default_build_types_command")]
    pub build_types_command: String,
    #[serde(default = "default_base_branch")]
    pub base_branch: String,
    #[serde(default = "default_monitored_paths")]
    pub monitored_paths: Vec<String>,
    #[serde(default = "default_watermark")]
    pub watermark: String,
    #[serde(default = "default_wrapper_component")]
    pub wrapper_component: String,
    #[serde(default = "default_regenerate_hint")]
    pub regenerate_hint: String,
}

fn default_templates_root() -> String {
    "emails".to_string()
}

fn default_output_file() -> String {
    "index.ts".to_string()
}

fn default_extension() -> String {
    ".tsx".to_string()
}

fn default_declarations_dir() -> String {
    "dist".to_string()
}

fn default_build_types_command() -> String {
    "yarn build:types".to_string()
}

fn default_base_branch() -> String {
    "main".to_string()
}

fn default_monitored_paths() -> Vec<String> {
    ["emails/", "components/", "lib/", "utils/"]
        .map(String::from)
        .to_vec()
}

fn default_watermark() -> String {
    "// @generated-by-plop".to_string()
}

fn default_wrapper_component() -> String {
    "EmailContentWrapper".to_string()
}

fn default_regenerate_hint() -> String {
    "mailgen generate".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            templates_root: default_templates_root(),
            output_file: default_output_file(),
            extension: default_extension(),
            ignores: Vec::new(),
            declarations_dir: default_declarations_dir(),
            build_types_command: default_build_types_command(),
            base_branch: default_base_branch(),
            monitored_paths: default_monitored_paths(),
            watermark: default_watermark(),
            wrapper_component: default_wrapper_component(),
            regenerate_hint: default_regenerate_hint(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error naming the offending field when a value cannot work.
    pub fn validate(&self) -> Result<()> {
        if !self.extension.starts_with('.') || self.extension.len() < 2 {
            bail!(
                "Invalid 'extension': \"{}\" (expected something like \".tsx\")",
                self.extension
            );
        }

        if self.output_file.is_empty() || self.output_file.contains(['/', '\\']) {
            bail!(
                "Invalid 'outputFile': \"{}\" (expected a file name inside templatesRoot)",
                self.output_file
            );
        }

        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.monitored_paths.iter().any(|p| p.trim().is_empty()) {
            bail!("Invalid 'monitoredPaths': entries must not be empty");
        }

        if self.build_types_command.trim().is_empty() {
            bail!("Invalid 'buildTypesCommand': must not be empty");
        }

        if self.watermark.trim().is_empty() {
            bail!("Invalid 'watermark': must not be empty");
        }

        Ok(())
    }

    /// Compiled `ignores` patterns. Call after [`Config::validate`].
    pub fn ignore_patterns(&self) -> Vec<Pattern> {
        self.ignores
            .iter()
            .filter_map(|p| Pattern::new(p).ok())
            .collect()
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory that relative config paths are resolved against.
    pub project_root: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let project_root = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                project_root,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            project_root: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
