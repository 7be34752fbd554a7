mod dependency_expander;

pub use dependency_expander::DependencyExpander;
