use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CHRISTMAS, CliTest, stderr, stdout};

#[test]
fn test_generate_registry() -> Result<()> {
    let test = CliTest::with_file("emails/general/christmas.tsx", CHRISTMAS)?;

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Generated emails/index.ts with 1 template(s).

    ----- stderr -----
    ");

    insta::assert_snapshot!(test.read_file("emails/index.ts")?, @r#"
    /* AUTO-GENERATED FILE. DO NOT EDIT MANUALLY. */
    /* Run: mailgen generate */

    import * as React from "react";
    import { Christmas } from "./general/christmas";
    import type { GeneralChristmasProps } from "./general/christmas";



    export const templates = {
      general: {
        "christmas": { component: Christmas as React.ComponentType<GeneralChristmasProps>, variables: {} as GeneralChristmasProps },
      },
    } as const


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
    "#);

    Ok(())
}

#[test]
fn test_generate_is_idempotent() -> Result<()> {
    let test = CliTest::with_file("emails/general/christmas.tsx", CHRISTMAS)?;
    test.write_file(
        "emails/order/placed.tsx",
        "export const Placed = (props: OrderPlacedProps) => null\nexport type OrderPlacedProps = {}\n",
    )?;

    test.generate_command().output()?;
    let first = test.read_file("emails/index.ts")?;

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Up to date: emails/index.ts with 2 template(s).

    ----- stderr -----
    ");
    assert_eq!(first, test.read_file("emails/index.ts")?);

    Ok(())
}

#[test]
fn test_modules_and_templates_are_sorted() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("emails/order/shipped.tsx", "export default Shipped;\n")?;
    test.write_file("emails/order/cancelled.tsx", "export default Cancelled;\n")?;
    test.write_file("emails/general/welcome.tsx", "export default Welcome;\n")?;

    test.generate_command().output()?;
    let registry = test.read_file("emails/index.ts")?;
    let start = registry.find("export const templates").unwrap_or_default();
    let end = registry.find("} as const").unwrap_or_default() + "} as const".len();

    insta::assert_snapshot!(&registry[start..end], @r#"
    export const templates = {
      general: {
        "welcome": { component: Welcome, variables: {} },
      },
      order: {
        "cancelled": { component: Cancelled, variables: {} },
        "shipped": { component: Shipped, variables: {} },
      },
    } as const
    "#);

    Ok(())
}

#[test]
fn test_files_without_component_are_skipped() -> Result<()> {
    let test = CliTest::with_file("emails/general/christmas.tsx", CHRISTMAS)?;
    test.write_file("emails/general/helpers.tsx", "export function format() {}\n")?;

    let output = test.generate_command().output()?;
    let registry = test.read_file("emails/index.ts")?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("with 1 template(s)"));
    assert!(!registry.contains("./general/helpers"));
    assert!(!registry.contains("\"helpers\":"));

    Ok(())
}

#[test]
fn test_invalid_utf8_template_does_not_abort() -> Result<()> {
    let test = CliTest::with_file("emails/general/christmas.tsx", CHRISTMAS)?;
    std::fs::write(
        test.root().join("emails/general/easter.tsx"),
        b"// Joyeuses P\xE2ques\nexport default Easter;\n",
    )?;

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Generated emails/index.ts with 2 template(s).

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_missing_templates_root() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    ✘ Templates directory not found at: emails
    ");
    assert!(!test.root().join("emails/index.ts").exists());

    Ok(())
}

#[test]
fn test_empty_templates_root() -> Result<()> {
    let test = CliTest::with_file("emails/README.md", "# Emails\n")?;

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Generated emails/index.ts with 0 template(s).

    ----- stderr -----
    warning: No .tsx files found under emails. Wrote a minimal registry.
    ");
    assert!(
        test.read_file("emails/index.ts")?
            .contains("export const templates = {\n\n} as const")
    );

    Ok(())
}

#[test]
fn test_root_override() -> Result<()> {
    let test = CliTest::with_file("mail/general/christmas.tsx", CHRISTMAS)?;

    let output = test.generate_command().args(["--root", "mail"]).output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(test.root().join("mail/index.ts").exists());

    Ok(())
}

#[test]
fn test_config_templates_root_and_ignores() -> Result<()> {
    let test = CliTest::with_file(
        ".mailgenrc.json",
        r#"{ "templatesRoot": "templates", "ignores": ["templates/drafts/**"] }"#,
    )?;
    test.write_file("templates/general/christmas.tsx", CHRISTMAS)?;
    test.write_file("templates/drafts/wip.tsx", "export default Wip;\n")?;

    let output = test.generate_command().output()?;
    let registry = test.read_file("templates/index.ts")?;

    assert!(output.status.success());
    assert!(registry.contains("Christmas"));
    assert!(!registry.contains("Wip"));

    Ok(())
}
