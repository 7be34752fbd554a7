use crate::adapters::outbound::rendering::TeraCreditsRenderer;
use crate::ports::outbound::CreditsRenderer;
use crate::shared::Result;
use std::path::Path;

/// Factory for creating credits renderers
pub struct RendererFactory;

impl RendererFactory {
    /// Creates the renderer for an optional custom template file
    ///
    /// # Errors
    /// Returns an error if the template file cannot be read
    pub fn create(template_path: Option<&Path>) -> Result<Box<dyn CreditsRenderer>> {
        match template_path {
            Some(path) => Ok(Box::new(TeraCreditsRenderer::from_file(path)?)),
            None => Ok(Box::new(TeraCreditsRenderer::new())),
        }
    }
}
