pub mod closure_set;
pub mod dependency_record;
pub mod dependency_spec;
pub mod distribution_metadata;
pub mod lock_record;
pub mod manifest;

pub use closure_set::{ClosureEntry, ClosureSet};
pub use dependency_record::DependencyRecord;
pub use dependency_spec::{DependencySpec, PackageName};
pub use distribution_metadata::DistributionMetadata;
pub use lock_record::{LockIndex, LockRecord};
pub use manifest::{resolve_dependency_groups, GroupEntry, ProjectManifest};
