//! Textual extraction of the exported component and props type names.
//!
//! This is a shallow scan over source text, not a parse: it tolerates
//! arbitrary surrounding code and an unmatched file is a normal outcome.

use std::sync::LazyLock;

use regex::Regex;

/// `export const ComponentName = (`
static NAMED_EXPORT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"export\s+const\s+(\w+)\s*=\s*\(").unwrap());

/// `export default ComponentName;`
static DEFAULT_EXPORT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"export\s+default\s+(\w+)\s*;").unwrap());

/// `export interface FooProps` / `export type FooProps`
static PROPS_EXPORT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"export\s+(?:interface|type)\s+(\w*Props)\b").unwrap());

/// Names found in a template source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analysis {
    pub component_name: Option<String>,
    pub props_name: Option<String>,
}

/// Extract the component and props identifiers from `source`.
///
/// The component is the first `export const X = (` binding, falling back to
/// the first `export default X;`. The props type is the first exported
/// interface or type alias whose name ends in `Props`, in text order.
pub fn analyze(source: &str) -> Analysis {
    let component_name = first_capture(&NAMED_EXPORT_REGEX, source)
        .or_else(|| first_capture(&DEFAULT_EXPORT_REGEX, source));
    let props_name = first_capture(&PROPS_EXPORT_REGEX, source);

    Analysis {
        component_name,
        props_name,
    }
}

fn first_capture(regex: &Regex, source: &str) -> Option<String> {
    regex
        .captures(source)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
