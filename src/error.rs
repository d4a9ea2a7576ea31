use thiserror::Error;

/// Errors that can occur while turning an AI response into a recipe
#[derive(Error, Debug)]
pub enum ImportError {
    /// The response contains no ```json block
    #[error("No JSON recipe block found in the response")]
    NotFound,

    /// A ```json block was found but it does not hold a JSON object
    #[error("Malformed recipe data: {0}")]
    MalformedData(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Failed to read the response text
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize the normalized recipe
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ImportError {
    /// True when there was simply nothing to import
    pub fn is_not_found(&self) -> bool {
        matches!(self, ImportError::NotFound)
    }
}

/// A field that could only be partially understood.
///
/// Never fatal: the caller logs it and falls back to a safe default.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionFault {
    #[error("invalid number {input:?} in {field}")]
    InvalidNumber { field: &'static str, input: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_distinguishable() {
        assert!(ImportError::NotFound.is_not_found());
        assert!(!ImportError::MalformedData("oops".to_string()).is_not_found());
    }

    #[test]
    fn test_messages() {
        let err = ImportError::MalformedData("expected value at line 1 column 2".to_string());
        assert_eq!(
            err.to_string(),
            "Malformed recipe data: expected value at line 1 column 2"
        );

        let fault = ConversionFault::InvalidNumber {
            field: "hours",
            input: "x".to_string(),
        };
        assert_eq!(fault.to_string(), "invalid number \"x\" in hours");
    }
}
