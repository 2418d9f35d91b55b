use serde::Serialize;
use tera::{Context, Tera};

use crate::error::ExportError;
use crate::templates;

/// Render a Tera template against any serializable context.
///
/// The `template_content` is the raw template string (Jinja2 syntax).
/// The fields of `context` become the template variables.
pub fn render_template<T: Serialize>(
    template_name: &str,
    template_content: &str,
    context: &T,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    // Convert the context to a Tera context via serde_json
    let value = serde_json::to_value(context)?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    tracing::debug!(template = template_name, bytes = rendered.len(), "template rendered");
    Ok(rendered)
}

/// Render one of the built-in templates by name.
pub fn render_builtin<T: Serialize>(
    template_name: &str,
    context: &T,
) -> Result<String, ExportError> {
    let content = templates::builtin(template_name)
        .ok_or_else(|| ExportError::TemplateNotFound(template_name.to_string()))?;
    render_template(template_name, content, context)
}
