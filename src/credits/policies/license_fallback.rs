use crate::credits::domain::DistributionMetadata;

/// Rendered in place of a license that cannot be determined
pub const UNKNOWN_LICENSE: &str = "?";

/// Metadata value some build backends write when no license was given
const UNKNOWN_LICENSE_FIELD: &str = "UNKNOWN";

const LICENSE_CLASSIFIER_PREFIX: &str = "License ::";

/// LicenseFallback policy for deriving a license string from installed metadata
///
/// Priority order:
/// 1. `License` field (trimmed, if non-empty, not "UNKNOWN" and single-line)
/// 2. the first `License ::` classifier, reduced to its last `::` segment
/// 3. the `?` placeholder
pub struct LicenseFallback;

impl LicenseFallback {
    /// Resolves the license to render for a package
    ///
    /// # Arguments
    /// * `metadata` - Installed metadata, or None when the package is not installed
    pub fn resolve(metadata: Option<&DistributionMetadata>) -> String {
        metadata
            .and_then(|m| Self::select_license(m.license(), m.classifiers()))
            .unwrap_or_else(|| UNKNOWN_LICENSE.to_string())
    }

    /// Selects the license text from the license field and classifiers
    ///
    /// # Returns
    /// The selected license text, or None if neither source yields one
    pub fn select_license(license: Option<&str>, classifiers: &[String]) -> Option<String> {
        let license = license.map(str::trim).unwrap_or_default();

        if Self::is_usable_field(license) {
            return Some(license.to_string());
        }

        Self::extract_license_from_classifiers(classifiers)
    }

    fn is_usable_field(license: &str) -> bool {
        !license.is_empty() && license != UNKNOWN_LICENSE_FIELD && !license.contains('\n')
    }

    /// Takes the first `License ::` classifier and returns its last segment,
    /// e.g. `License :: OSI Approved :: MIT License` gives `MIT License`.
    fn extract_license_from_classifiers(classifiers: &[String]) -> Option<String> {
        classifiers
            .iter()
            .find(|classifier| classifier.starts_with(LICENSE_CLASSIFIER_PREFIX))
            .and_then(|classifier| classifier.rsplit("::").next())
            .map(str::trim)
            .filter(|license| !license.is_empty())
            .map(String::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifiers(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_select_license_prefers_license_field() {
        let result = LicenseFallback::select_license(
            Some("MIT"),
            &classifiers(&["License :: OSI Approved :: BSD License"]),
        );
        assert_eq!(result, Some("MIT".to_string()));
    }

    #[test]
    fn test_select_license_trims_field() {
        let result = LicenseFallback::select_license(Some("  BSD-3-Clause \n"), &[]);
        assert_eq!(result, Some("BSD-3-Clause".to_string()));
    }

    #[test]
    fn test_empty_field_falls_back_to_classifier() {
        let result = LicenseFallback::select_license(
            Some(""),
            &classifiers(&[
                "Programming Language :: Python :: 3",
                "License :: OSI Approved :: MIT License",
            ]),
        );
        assert_eq!(result, Some("MIT License".to_string()));
    }

    #[test]
    fn test_unknown_field_falls_back_to_classifier() {
        let result = LicenseFallback::select_license(
            Some("UNKNOWN"),
            &classifiers(&["License :: OSI Approved :: Apache Software License"]),
        );
        assert_eq!(result, Some("Apache Software License".to_string()));
    }

    #[test]
    fn test_multiline_field_falls_back_to_classifier() {
        let full_text = "Copyright (c) 2019\nPermission is hereby granted...";
        let result = LicenseFallback::select_license(
            Some(full_text),
            &classifiers(&["License :: OSI Approved :: ISC License (ISCL)"]),
        );
        assert_eq!(result, Some("ISC License (ISCL)".to_string()));
    }

    #[test]
    fn test_first_license_classifier_wins() {
        let result = LicenseFallback::select_license(
            None,
            &classifiers(&[
                "License :: OSI Approved :: BSD License",
                "License :: OSI Approved :: MIT License",
            ]),
        );
        assert_eq!(result, Some("BSD License".to_string()));
    }

    #[test]
    fn test_classifier_without_segment_is_ignored() {
        let result = LicenseFallback::select_license(None, &classifiers(&["License ::"]));
        assert_eq!(result, None);
    }

    #[test]
    fn test_no_license_found() {
        let result = LicenseFallback::select_license(
            Some("UNKNOWN"),
            &classifiers(&["Programming Language :: Python :: 3"]),
        );
        assert_eq!(result, None);
    }

    #[test]
    fn test_resolve_not_installed_is_placeholder() {
        assert_eq!(LicenseFallback::resolve(None), "?");
    }

    #[test]
    fn test_resolve_multiline_without_classifier_is_placeholder() {
        let metadata = DistributionMetadata::new(Some("line one\nline two".to_string()), vec![]);
        assert_eq!(LicenseFallback::resolve(Some(&metadata)), "?");
    }

    #[test]
    fn test_resolve_installed() {
        let metadata = DistributionMetadata::new(
            None,
            classifiers(&["License :: OSI Approved :: Python Software Foundation License"]),
        );
        assert_eq!(
            LicenseFallback::resolve(Some(&metadata)),
            "Python Software Foundation License"
        );
    }
}
