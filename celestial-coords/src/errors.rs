use celestial_core::AstroError;
use celestial_time::TimeError;
use thiserror::Error;

pub type CoordResult<T> = Result<T, CoordError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordError {
    #[error("Invalid coordinate: {message}")]
    InvalidCoordinate { message: String },

    #[error("Invalid projection: {message}")]
    InvalidProjection { message: String },

    #[error("Epoch conversion failed: {source}")]
    EpochError {
        #[from]
        source: TimeError,
    },

    #[error("Core astronomical calculation failed: {message}")]
    CoreError { message: String },
}

impl CoordError {
    pub fn invalid_coordinate(message: impl Into<String>) -> Self {
        Self::InvalidCoordinate {
            message: message.into(),
        }
    }

    pub fn invalid_projection(message: impl Into<String>) -> Self {
        Self::InvalidProjection {
            message: message.into(),
        }
    }

    pub fn from_core(error: AstroError) -> Self {
        Self::CoreError {
            message: error.to_string(),
        }
    }
}

impl From<AstroError> for CoordError {
    fn from(error: AstroError) -> Self {
        Self::from_core(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_core::MathErrorKind;

    #[test]
    fn test_invalid_coordinate() {
        let err = CoordError::invalid_coordinate("RA is NaN");
        assert_eq!(err.to_string(), "Invalid coordinate: RA is NaN");
    }

    #[test]
    fn test_core_error_conversion() {
        let core = AstroError::math_error("validate", MathErrorKind::OutOfRange, "dec 91");
        let err: CoordError = core.into();
        assert!(matches!(err, CoordError::CoreError { .. }));
        assert!(err.to_string().contains("dec 91"));
    }

    #[test]
    fn test_time_error_conversion() {
        let err: CoordError = TimeError::InvalidDate("month 13".into()).into();
        assert!(err.to_string().starts_with("Epoch conversion failed"));
    }
}
