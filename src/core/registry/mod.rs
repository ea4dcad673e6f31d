//! Template registry: grouping analyzed template files by module and
//! rendering the generated index module.
//!
//! ## Module Structure
//!
//! - `render`: Text rendering of the registry artifact (imports, `templates`
//!   literal, type helpers)

mod render;

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::core::{analyze::analyze, collect::read_source, naming};

pub use render::{GENERATED_HEADER, render_registry};

/// One registered template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRecord {
    pub module: String,
    pub template_key: String,
    pub component_name: String,
    pub props_name: Option<String>,
    /// Import specifier relative to the registry file (e.g. `./general/christmas`).
    pub import_path: String,
}

/// Module name -> template key -> record, both levels sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    modules: BTreeMap<String, BTreeMap<String, TemplateRecord>>,
}

impl Registry {
    /// Insert a record. A later record for the same (module, key) replaces the earlier one.
    pub fn insert(&mut self, record: TemplateRecord) {
        self.modules
            .entry(record.module.clone())
            .or_default()
            .insert(record.template_key.clone(), record);
    }

    pub fn get(&self, module: &str, template_key: &str) -> Option<&TemplateRecord> {
        self.modules.get(module)?.get(template_key)
    }

    pub fn modules(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, TemplateRecord>)> {
        self.modules.iter().map(|(name, templates)| (name.as_str(), templates))
    }

    /// All records in module order, then template key order.
    pub fn records(&self) -> impl Iterator<Item = &TemplateRecord> {
        self.modules.values().flat_map(|templates| templates.values())
    }

    pub fn len(&self) -> usize {
        self.modules.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Analyze one template file into a record.
///
/// Returns `None` when the file lies outside `root` or exports no component.
pub fn analyze_template(
    path: &Path,
    source: &str,
    root: &Path,
    extension: &str,
) -> Option<TemplateRecord> {
    let (module, template_key) = naming::module_and_template(path, root, extension)?;
    let analysis = analyze(source);

    let Some(component_name) = analysis.component_name else {
        tracing::debug!("No component export found in {}, skipping", path.display());
        return None;
    };

    Some(TemplateRecord {
        module,
        template_key,
        component_name,
        props_name: analysis.props_name,
        import_path: naming::to_import_path(path, root, extension),
    })
}

/// Build the registry from already collected template files.
///
/// Files that cannot be read are skipped with a warning; they never fail the run.
pub fn build_registry(files: &[PathBuf], root: &Path, extension: &str) -> Registry {
    let mut registry = Registry::default();

    for file in files {
        let source = match read_source(file) {
            Ok(source) => source,
            Err(e) => {
                tracing::warn!("Skipping {}: {}", file.display(), e);
                continue;
            }
        };
        if let Some(record) = analyze_template(file, &source, root, extension) {
            registry.insert(record);
        }
    }

    registry
}

/// Outcome of writing the registry file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    Created,
    Updated,
    Unchanged,
}

/// Write `content` to `path` unless the file already holds exactly that text.
pub fn write_if_changed(path: &Path, content: &str) -> Result<WriteStatus> {
    let status = match fs::read_to_string(path) {
        Ok(existing) if existing == content => return Ok(WriteStatus::Unchanged),
        Ok(_) => WriteStatus::Updated,
        Err(_) => WriteStatus::Created,
    };

    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(status)
}
