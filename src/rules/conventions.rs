use std::path::Path;

use regex::Regex;

use super::Violation;
use crate::{config::Config, core::naming::to_pascal_case};

/// Names a template file is expected to declare, derived from its path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedNames {
    /// PascalCase of the file's base name (`new-year.tsx` -> `NewYear`).
    pub component: String,
    /// PascalCase(module) + component + `Props`, where the module is the first
    /// folder under the templates root. Files directly in the root have no
    /// module prefix.
    pub props_interface: String,
}

impl ExpectedNames {
    pub fn for_file(path: &Path, root: &Path, extension: &str) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let base = file_name.strip_suffix(extension).unwrap_or(&file_name);
        let module = path
            .strip_prefix(root)
            .ok()
            .and_then(Path::parent)
            .and_then(|dir| dir.components().next())
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .unwrap_or_default();

        let component = to_pascal_case(base);
        let props_interface = format!("{}{}Props", to_pascal_case(&module), component);

        Self {
            component,
            props_interface,
        }
    }
}

/// Check the scaffolding conventions of one template source.
///
/// Every rule is evaluated; violations come back in rule order.
pub fn check_conventions(content: &str, names: &ExpectedNames, config: &Config) -> Vec<Violation> {
    let mut violations = Vec::new();

    if !content.contains(&config.watermark) {
        violations.push(Violation::MissingWatermark {
            watermark: config.watermark.clone(),
        });
    }

    if !content.contains(&config.wrapper_component) {
        violations.push(Violation::MissingWrapper {
            wrapper: config.wrapper_component.clone(),
        });
    }

    if !content.contains("const EmailBody") {
        violations.push(Violation::MissingEmailBody);
    }

    if !content.contains(&format!("{}.PreviewProps =", names.component)) {
        violations.push(Violation::PreviewPropsMismatch {
            expected: names.component.clone(),
        });
    }

    let component = regex::escape(&names.component);

    if !matches(&format!(r"export const {}\s*=\s*", component), content) {
        violations.push(Violation::ComponentNameMismatch {
            expected: names.component.clone(),
        });
    }

    if !matches(&format!(r"export default {}\s*;?", component), content) {
        violations.push(Violation::DefaultExportMismatch {
            expected: names.component.clone(),
        });
    }

    let interface = regex::escape(&names.props_interface);
    if !matches(&format!(r"export interface {}\b", interface), content) {
        violations.push(Violation::InterfaceNameMismatch {
            expected: names.props_interface.clone(),
        });
    }

    violations
}

fn matches(pattern: &str, content: &str) -> bool {
    Regex::new(pattern)
        .map(|re| re.is_match(content))
        .unwrap_or(false)
}
