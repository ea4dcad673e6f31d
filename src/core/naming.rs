//! Identifier and path derivations shared by the generator, the checker and
//! the scaffolder.

use std::{
    path::{Component, Path},
    sync::LazyLock,
};

use regex::Regex;

static SEPARATOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_]([A-Za-z0-9_])").unwrap());

/// Capitalized words, lowercase runs, or bare uppercase runs.
static WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]?[a-z0-9]+|[A-Z]+").unwrap());

/// Convert a kebab- or snake-case name to PascalCase.
///
/// Every `-` or `_` followed by a word character is dropped and that character
/// is upper-cased, then the first character is upper-cased.
///
/// ```
/// use mailgen::core::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("new-year"), "NewYear");
/// assert_eq!(to_pascal_case("buyer_order-confirmation"), "BuyerOrderConfirmation");
/// assert_eq!(to_pascal_case("general"), "General");
/// ```
pub fn to_pascal_case(name: &str) -> String {
    let joined = SEPARATOR_REGEX.replace_all(name, |caps: &regex::Captures| {
        caps[1].to_ascii_uppercase()
    });

    let mut chars = joined.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphanumeric() || first == '_' => {
            first.to_ascii_uppercase().to_string() + chars.as_str()
        }
        _ => joined.into_owned(),
    }
}

/// Convert free-form text to kebab-case (`"Offer Update"` -> `"offer-update"`).
pub fn to_kebab_case(text: &str) -> String {
    WORD_REGEX
        .find_iter(text)
        .map(|m| m.as_str().to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// Module and template key of a template file relative to the templates root.
///
/// The module is the first path segment under `root`, the template key is the
/// file name with `extension` removed. Returns `None` when `path` is not under
/// `root`.
pub fn module_and_template(path: &Path, root: &Path, extension: &str) -> Option<(String, String)> {
    let rel = path.strip_prefix(root).ok()?;
    let mut segments = rel.components().filter_map(|c| match c {
        Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
        _ => None,
    });

    let module = segments.next()?;
    let file_name = rel.file_name()?.to_string_lossy();
    let template = file_name
        .strip_suffix(extension)
        .unwrap_or(&file_name)
        .to_string();

    Some((module, template))
}

/// Import specifier for `path` as seen from `from_dir`.
///
/// Uses `/` separators, strips `extension`, and prefixes `./` unless the path
/// already starts with `./` or `../`.
pub fn to_import_path(path: &Path, from_dir: &Path, extension: &str) -> String {
    let rel = relative_path(path, from_dir);
    let rel = rel.strip_suffix(extension).unwrap_or(&rel);

    if rel.starts_with("./") || rel.starts_with("../") {
        rel.to_string()
    } else {
        format!("./{}", rel)
    }
}

fn relative_path(path: &Path, base: &Path) -> String {
    let path_parts: Vec<Component> = path.components().collect();
    let base_parts: Vec<Component> = base.components().collect();

    let common = path_parts
        .iter()
        .zip(base_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let ups = std::iter::repeat_n("..".to_string(), base_parts.len() - common);
    let downs = path_parts[common..]
        .iter()
        .map(|c| c.as_os_str().to_string_lossy().into_owned());

    ups.chain(downs).collect::<Vec<_>>().join("/")
}

/// Whether `name` can be used as a bare TypeScript object key.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}
