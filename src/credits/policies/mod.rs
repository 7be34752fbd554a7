mod license_fallback;

pub use license_fallback::{LicenseFallback, UNKNOWN_LICENSE};
