use super::template::{CREDITS_NAME, DEFAULT_TEMPLATE, MACROS, MACROS_NAME};
use crate::application::read_models::CreditsReadModel;
use crate::ports::outbound::CreditsRenderer;
use crate::shared::error::CreditsError;
use crate::shared::security::read_checked;
use crate::shared::Result;
use std::path::Path;
use tera::{Context, Tera};

/// TeraCreditsRenderer adapter for rendering the credits document with Tera
///
/// Templates are rendered without autoescaping. Printing a variable missing
/// from the read model (`{{ name }}`) fails the render; Tera evaluates an
/// undefined name in an `{% if %}` test as false instead. The `dep_line`
/// macro is always registered as `macros.md`, so custom templates can
/// import it too.
pub struct TeraCreditsRenderer {
    template: String,
}

impl TeraCreditsRenderer {
    /// Creates a renderer using the built-in template
    pub fn new() -> Self {
        Self::with_template(DEFAULT_TEMPLATE.to_string())
    }

    pub fn with_template(template: String) -> Self {
        Self { template }
    }

    /// Creates a renderer from a template file on disk
    pub fn from_file(path: &Path) -> Result<Self> {
        let template = read_checked(path, "template file")?;
        tracing::debug!(template = %path.display(), "using custom template");
        Ok(Self::with_template(template))
    }

    fn build_tera(&self) -> Result<Tera> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_templates(vec![
            (MACROS_NAME, MACROS),
            (CREDITS_NAME, self.template.as_str()),
        ])
        .map_err(template_error)?;
        Ok(tera)
    }
}

impl Default for TeraCreditsRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl CreditsRenderer for TeraCreditsRenderer {
    fn render(&self, model: &CreditsReadModel) -> Result<String> {
        let tera = self.build_tera()?;
        let context = Context::from_serialize(model).map_err(template_error)?;

        tracing::debug!(
            prod = model.prod_dependencies.len(),
            dev = model.dev_dependencies.len(),
            "rendering credits"
        );
        tera.render(CREDITS_NAME, &context).map_err(template_error)
    }
}

fn template_error(error: tera::Error) -> anyhow::Error {
    CreditsError::TemplateRenderError {
        details: format_tera_error(&error),
    }
    .into()
}

/// Flattens a Tera error chain into one readable message.
///
/// Tera wraps the useful cause ("Variable `x` not found ...") in generic
/// "Failed to render" layers; those layers are dropped.
fn format_tera_error(error: &tera::Error) -> String {
    use std::error::Error;

    let mut messages = vec![error.to_string()];
    let mut current: Option<&dyn Error> = error.source();
    while let Some(err) = current {
        messages.push(err.to_string());
        current = err.source();
    }

    let useful: Vec<String> = messages
        .iter()
        .map(|msg| msg.trim().to_string())
        .filter(|msg| !msg.is_empty() && !msg.starts_with("Failed to render"))
        .collect();

    if useful.is_empty() {
        messages.join("\n  → ")
    } else {
        useful.join("\n  → ")
    }
}
