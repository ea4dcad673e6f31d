use std::collections::BTreeSet;

use super::Registry;
use crate::core::naming::is_identifier;

pub const GENERATED_HEADER: &str = "/* AUTO-GENERATED FILE. DO NOT EDIT MANUALLY. */";

/// Type helpers appended to every registry. Consumers index into `templates`
/// through these names, so they must stay stable.
const TYPES_BLOCK: &str = r#"
/**
 * All available email modules and their templates as generated from the filesystem.
 *
 * @example
 * // Iterate available modules and templates at runtime
 * for (const mod of Object.keys(templates)) {
 *   for (const tpl of Object.keys(templates[mod])) {
 *     console.log(mod, tpl);
 *   }
 * }
 */
export type TemplateModules = typeof templates;

/**
 * Canonical entry type for a given module/template pair.
 * Useful when you need access to the full entry (component + variables).
 *
 * @example
 * type Entry = TemplateEntry<"order", "buyer-order-confirmation">;
 * // Entry["component"] is the React component, Entry["variables"] is the props type
 */
export type TemplateEntry<
  M extends keyof TemplateModules,
  T extends keyof TemplateModules[M]
> = TemplateModules[M][T];

/**
 * Resolves the props (variables) type for a given module/template pair.
 *
 * @example
 * type Props = TemplateProps<"order", "buyer-order-confirmation">;
 */
export type TemplateProps<
  M extends keyof TemplateModules,
  T extends keyof TemplateModules[M]
> =
  "variables" extends keyof TemplateEntry<M, T>
    ? TemplateEntry<M, T>["variables"]
    : never;

/**
 * Backwards-compatible alias for TemplateProps.
 * Prefer using TemplateProps in new code.
 *
 * @example
 * type Props = EmailVariableType<"order", "buyer-order-confirmation">;
 */
export type EmailVariableType<
  M extends keyof TemplateModules,
  T extends keyof TemplateModules[M]
> = TemplateProps<M, T>;

/**
 * All props (variables) types grouped by module and template.
 *
 * @example
 * type Props = Variables["order"]["buyer-order-confirmation"];
 */
export type Variables = {
  [M in keyof TemplateModules]: {
    [T in keyof TemplateModules[M]]: TemplateProps<M, T>
  }
};

/**
 * Payload expected by the render endpoints and helpers.
 *
 * @example
 * const payload: EmailRenderPayload<"order", "buyer-order-confirmation"> = {
 *   emailModule: "order",
 *   template: "buyer-order-confirmation",
 *   variables: { ... },
 * };
 */
export type EmailRenderPayload<
  M extends keyof TemplateModules = keyof TemplateModules,
  T extends keyof TemplateModules[M] = keyof TemplateModules[M]
> = {
  emailModule: M;
  template: T;
  variables: TemplateProps<M, T>;
};

/**
 * Union of valid template keys exported by each module.
 */
export type EmailModuleExportKeys = {
  [K in keyof TemplateModules]: keyof TemplateModules[K];
}[keyof TemplateModules];

/** @internal Helper type used to derive EmailRenderRecord union */
type AnyEmailRenderPayload = {
  [M in keyof TemplateModules]: {
    [T in keyof TemplateModules[M]]: EmailRenderPayload<M, T>
  }[keyof TemplateModules[M]]
}[keyof TemplateModules];

/**
 * Minimal record containing only identifying fields for an email to render.
 *
 * @example
 * const rec: EmailRenderRecord = { emailModule: "order", template: "order-placed" };
 */
export type EmailRenderRecord = Pick<AnyEmailRenderPayload, "emailModule" | "template">;
"#;

/// Render the full registry module.
///
/// Output depends only on the registry contents: imports are deduplicated and
/// sorted, modules and templates come out in key order.
pub fn render_registry(registry: &Registry, regenerate_hint: &str) -> String {
    let header = format!("{}\n/* Run: {} */", GENERATED_HEADER, regenerate_hint);

    [
        header,
        render_imports(registry),
        String::new(),
        render_templates(registry),
        TYPES_BLOCK.to_string(),
    ]
    .join("\n\n")
}

fn render_imports(registry: &Registry) -> String {
    let mut values: BTreeSet<String> = BTreeSet::new();
    let mut types: BTreeSet<String> = BTreeSet::new();

    for record in registry.records() {
        values.insert(format!(
            "import {{ {} }} from \"{}\";",
            record.component_name, record.import_path
        ));
        if let Some(props) = &record.props_name {
            types.insert(format!(
                "import type {{ {} }} from \"{}\";",
                props, record.import_path
            ));
        }
    }

    std::iter::once("import * as React from \"react\";".to_string())
        .chain(values)
        .chain(types)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_templates(registry: &Registry) -> String {
    let blocks = registry
        .modules()
        .map(|(module, templates)| {
            let items = templates
                .values()
                .map(|record| {
                    let component = &record.component_name;
                    match &record.props_name {
                        Some(props) => format!(
                            "    {}: {{ component: {} as React.ComponentType<{}>, variables: {{}} as {} }},",
                            string_literal(&record.template_key),
                            component,
                            props,
                            props
                        ),
                        None => format!(
                            "    {}: {{ component: {}, variables: {{}} }},",
                            string_literal(&record.template_key),
                            component
                        ),
                    }
                })
                .collect::<Vec<_>>()
                .join("\n");
            format!("  {}: {{\n{}\n  }},", object_key(module), items)
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("export const templates = {{\n{}\n}} as const", blocks)
}

fn object_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        string_literal(name)
    }
}

/// Double-quoted string literal with JSON escaping, which TypeScript accepts.
fn string_literal(text: &str) -> String {
    serde_json::Value::from(text).to_string()
}
