use crate::application::read_models::CreditsReadModel;
use crate::shared::Result;

/// CreditsRenderer port for turning the credits read model into a document
pub trait CreditsRenderer {
    /// Renders the credits document
    ///
    /// # Arguments
    /// * `model` - Project name, sorted runtime and development rows, extra credits link
    ///
    /// # Returns
    /// The rendered document as a string
    ///
    /// # Errors
    /// Returns an error if the template is invalid or references a variable
    /// the model does not provide
    fn render(&self, model: &CreditsReadModel) -> Result<String>;
}
