//! Read models for CQRS-lite pattern
//!
//! This module contains the view structs handed to the renderer: the
//! closure sets flattened into sorted, Markdown-safe table rows.

pub mod credits_read_model;
pub mod credits_read_model_builder;
pub mod dependency_view;

pub use credits_read_model::CreditsReadModel;
pub use credits_read_model_builder::CreditsReadModelBuilder;
pub use dependency_view::DependencyView;
