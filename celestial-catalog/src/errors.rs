use celestial_core::AstroError;
use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("Invalid catalog entry '{name}': {message}")]
    InvalidEntry { name: String, message: String },

    #[error("Duplicate star name: '{0}'")]
    DuplicateName(String),

    #[error("Constellation '{name}' has {count} points; at least {min} are required")]
    TooFewPoints {
        name: String,
        count: usize,
        min: usize,
    },

    #[error("Catalog parsing failed: {0}")]
    ParseError(String),

    #[error(transparent)]
    Core(#[from] AstroError),
}

impl CatalogError {
    pub fn invalid_entry(name: &str, message: impl Into<String>) -> Self {
        Self::InvalidEntry {
            name: name.to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CatalogError::invalid_entry("Vega", "magnitude is NaN");
        assert_eq!(err.to_string(), "Invalid catalog entry 'Vega': magnitude is NaN");

        let err = CatalogError::TooFewPoints {
            name: "Pair".into(),
            count: 2,
            min: 3,
        };
        assert_eq!(
            err.to_string(),
            "Constellation 'Pair' has 2 points; at least 3 are required"
        );
    }
}
