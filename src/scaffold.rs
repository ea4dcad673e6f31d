//! Scaffolding of new template files.
//!
//! A scaffolded file carries the watermark, the shared wrapper, an `EmailBody`,
//! `PreviewProps` and the expected exports, so it passes every convention
//! check once the registry is regenerated.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result, bail};

use crate::{
    config::Config,
    core::{
        ProjectContext,
        naming::{to_kebab_case, to_pascal_case},
    },
};

pub const DEFAULT_DOMAIN: &str = "general";

/// Input for a new template.
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    /// Free-form name, e.g. `"offer update"`.
    pub name: String,
    /// Folder under the templates root. Defaults to `general`.
    pub domain: Option<String>,
    /// Preview line shown by mail clients. Defaults to the name.
    pub preview_text: Option<String>,
    /// Path appended to the base URL for the call-to-action button.
    pub button_path: Option<String>,
}

/// A rendered template, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldedTemplate {
    /// Path relative to the templates root (`general/offer-update.tsx`).
    pub relative_path: String,
    pub component: String,
    pub props_interface: String,
    pub content: String,
}

pub fn render_template(request: &ScaffoldRequest, config: &Config) -> Result<ScaffoldedTemplate> {
    let file_stem = to_kebab_case(&request.name);
    if file_stem.is_empty() {
        bail!("Please enter a name (got \"{}\")", request.name);
    }

    let domain = to_kebab_case(request.domain.as_deref().unwrap_or(DEFAULT_DOMAIN));
    if domain.is_empty() {
        bail!(
            "Enter a valid folder name (got \"{}\")",
            request.domain.as_deref().unwrap_or_default()
        );
    }

    let component = to_pascal_case(&file_stem);
    let props_interface = format!("{}{}Props", to_pascal_case(&domain), component);
    let preview_text = request
        .preview_text
        .clone()
        .unwrap_or_else(|| request.name.trim().to_string());
    let button_path = request
        .button_path
        .clone()
        .unwrap_or_else(|| format!("/account/{}", domain));

    let content = SKELETON
        .replace("{{watermark}}", &config.watermark)
        .replace("{{wrapper}}", &config.wrapper_component)
        .replace("{{props}}", &props_interface)
        .replace("{{component}}", &component)
        .replace("{{preview}}", &serde_json::to_string(&preview_text)?)
        .replace("{{button_path}}", &serde_json::to_string(&button_path)?);

    Ok(ScaffoldedTemplate {
        relative_path: format!("{}/{}{}", domain, file_stem, config.extension),
        component,
        props_interface,
        content,
    })
}

/// Render and write a new template under the templates root.
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn scaffold(
    ctx: &ProjectContext,
    request: &ScaffoldRequest,
    force: bool,
) -> Result<(PathBuf, ScaffoldedTemplate)> {
    let template = render_template(request, &ctx.config)?;
    let path = ctx.templates_root.join(&template.relative_path);

    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            ctx.display_path(&path)
        );
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(&path, &template.content)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok((path, template))
}

const SKELETON: &str = r#"{{watermark}}
import { Button } from '@/components/button'
import { {{wrapper}} } from '@/components/email-wrapper'
import { Typography } from '@/components/typography'
import { useEmailVariables } from '@/lib/context/variable-context'

export interface {{props}} {
  email: string
  name?: string
}

const EmailBody = ({ name }: {{props}}) => {
  const { baseHref, org } = useEmailVariables()

  return (
    <div className={'content-body'}>
      <Typography className="text-primary text-2xl font-bold">
        {name ? `Hi ${name},` : 'Hi,'}
      </Typography>
      <Typography className="mt-4 text-gray-600">{{{preview}}}</Typography>
      <Button className="mt-6" href={baseHref({{button_path}})}>
        Open
      </Button>
      <Typography className="text-primary mt-4">
        From all of us at <b>{org}</b>
      </Typography>
    </div>
  )
}

export const {{component}} = ({ ...props }: {{props}}) => {
  return (
    <{{wrapper}} email={props.email} previewText={{{preview}}}>
      <EmailBody {...props} />
    </{{wrapper}}>
  )
}

{{component}}.PreviewProps = {
  email: 'preview@example.com',
  name: 'Jane Doe',
} as {{props}}

export default {{component}}
"#;
