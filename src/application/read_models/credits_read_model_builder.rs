//! Builder for constructing CreditsReadModel from the use case response

use super::credits_read_model::CreditsReadModel;
use super::dependency_view::DependencyView;
use crate::application::dto::CreditsResponse;
use crate::credits::domain::DependencyRecord;

/// Builder for constructing CreditsReadModel from domain objects
pub struct CreditsReadModelBuilder;

impl CreditsReadModelBuilder {
    /// Builds the read model
    ///
    /// Rows keep the order of the response (sorted by name). Free-text
    /// cells are escaped so they cannot break the Markdown table.
    pub fn build(response: &CreditsResponse, more_credits: Option<&str>) -> CreditsReadModel {
        CreditsReadModel {
            project_name: response.project_name.clone(),
            prod_dependencies: Self::build_rows(&response.prod_dependencies),
            dev_dependencies: Self::build_rows(&response.dev_dependencies),
            more_credits: more_credits.unwrap_or_default().to_string(),
        }
    }

    fn build_rows(records: &[DependencyRecord]) -> Vec<DependencyView> {
        records
            .iter()
            .map(|record| DependencyView {
                name: record.name().to_string(),
                summary: Self::escape_markdown_table_cell(record.summary()),
                spec: record.specifier().to_string(),
                version: record.version().to_string(),
                license: Self::escape_markdown_table_cell(record.license()),
            })
            .collect()
    }

    /// Escape pipe characters and flatten newlines for Markdown table cells
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }
}
