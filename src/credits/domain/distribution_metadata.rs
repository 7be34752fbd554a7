/// DistributionMetadata value object: the license-related headers of an
/// installed distribution's core metadata
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistributionMetadata {
    license: Option<String>,
    classifiers: Vec<String>,
}

impl DistributionMetadata {
    pub fn new(license: Option<String>, classifiers: Vec<String>) -> Self {
        Self {
            license,
            classifiers,
        }
    }

    /// Builds the value object from header/value pairs in file order.
    ///
    /// The first `License` header is kept; every `Classifier` header is kept in order.
    pub fn from_headers(headers: &[(String, String)]) -> Self {
        let mut license = None;
        let mut classifiers = Vec::new();

        for (header, value) in headers {
            if header.eq_ignore_ascii_case("License") {
                if license.is_none() {
                    license = Some(value.clone());
                }
            } else if header.eq_ignore_ascii_case("Classifier") {
                classifiers.push(value.clone());
            }
        }

        Self {
            license,
            classifiers,
        }
    }

    pub fn license(&self) -> Option<&str> {
        self.license.as_deref()
    }

    pub fn classifiers(&self) -> &[String] {
        &self.classifiers
    }
}
