/// Credits domain - Pure business logic for turning a manifest and a lockfile
/// into license-annotated dependency records
///
/// Nothing in this module performs I/O.
pub mod domain;
pub mod policies;
pub mod services;
