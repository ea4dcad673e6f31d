//! Template convention checks.
//!
//! Every template file is checked against the scaffolding conventions and
//! against the generated registry. All violations of a file are reported,
//! not just the first one. Checks never modify sources or the registry.

pub mod conventions;

use std::{fs, path::PathBuf};

use anyhow::{Context, Result, bail};

use crate::core::{ProjectContext, collect::read_source, naming::to_import_path};
use conventions::{ExpectedNames, check_conventions};

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    MissingWatermark { watermark: String },
    MissingWrapper { wrapper: String },
    MissingEmailBody,
    PreviewPropsMismatch { expected: String },
    ComponentNameMismatch { expected: String },
    DefaultExportMismatch { expected: String },
    InterfaceNameMismatch { expected: String },
    NotRegistered { registry: String, hint: String },
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::MissingWatermark { watermark } => {
                write!(f, "Missing \"{}\" watermark", watermark)
            }
            Violation::MissingWrapper { wrapper } => write!(f, "Does not use \"{}\"", wrapper),
            Violation::MissingEmailBody => write!(f, "Missing \"EmailBody\" definition"),
            Violation::PreviewPropsMismatch { expected } => write!(
                f,
                "Missing or incorrect \".PreviewProps\" definition. Expected \"{}.PreviewProps\"",
                expected
            ),
            Violation::ComponentNameMismatch { expected } => write!(
                f,
                "Component name mismatch. Expected \"export const {}\"",
                expected
            ),
            Violation::DefaultExportMismatch { expected } => write!(
                f,
                "Default export mismatch. Expected \"export default {}\"",
                expected
            ),
            Violation::InterfaceNameMismatch { expected } => write!(
                f,
                "Interface name mismatch. Expected \"export interface {}\"",
                expected
            ),
            Violation::NotRegistered { registry, hint } => {
                write!(f, "Not registered in {}. Run \"{}\"", registry, hint)
            }
        }
    }
}

/// Violations found in one template file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    /// Path relative to the project root.
    pub display_path: String,
    pub violations: Vec<Violation>,
}

impl FileReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Result of checking every template file.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub files: Vec<FileReport>,
}

impl ValidationReport {
    pub fn invalid_files(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| !f.is_valid())
    }

    pub fn is_valid(&self) -> bool {
        self.files.iter().all(FileReport::is_valid)
    }

    pub fn files_checked(&self) -> usize {
        self.files.len()
    }
}

/// Registration check: the registry must import from the template's path.
pub fn check_registration(registry_text: &str, import_path: &str) -> bool {
    registry_text.contains(&format!("from \"{}\"", import_path))
}

/// Check every template file under the templates root.
///
/// Fails when the registry file does not exist yet.
pub fn validate(ctx: &ProjectContext) -> Result<ValidationReport> {
    let registry_path = ctx.output_path();
    let registry_display = ctx.display_path(&registry_path);
    if !registry_path.exists() {
        bail!(
            "{} not found. Please run \"{}\" first.",
            registry_display,
            ctx.config.regenerate_hint
        );
    }
    let registry_text = fs::read_to_string(&registry_path)
        .with_context(|| format!("Failed to read {}", registry_display))?;

    let mut report = ValidationReport::default();
    for path in ctx.template_files() {
        let content = read_source(&path)
            .with_context(|| format!("Failed to read template: {}", path.display()))?;

        let names = ExpectedNames::for_file(&path, &ctx.templates_root, &ctx.config.extension);
        let mut violations = check_conventions(&content, &names, &ctx.config);

        let import_path = to_import_path(&path, &ctx.templates_root, &ctx.config.extension);
        if !check_registration(&registry_text, &import_path) {
            violations.push(Violation::NotRegistered {
                registry: registry_display.clone(),
                hint: ctx.config.regenerate_hint.clone(),
            });
        }

        tracing::debug!(
            "Checked {}: {} violation(s)",
            ctx.display_path(&path),
            violations.len()
        );

        report.files.push(FileReport {
            display_path: ctx.display_path(&path),
            path,
            violations,
        });
    }

    Ok(report)
}
