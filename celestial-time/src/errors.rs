use celestial_core::AstroError;
use thiserror::Error;

pub type TimeResult<T> = Result<T, TimeError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimeError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),

    #[error(transparent)]
    Core(#[from] AstroError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_core::MathErrorKind;

    #[test]
    fn test_parse_error_message() {
        let err = TimeError::ParseError("Invalid clock time: '25:00'".to_string());
        assert_eq!(err.to_string(), "Parse error: Invalid clock time: '25:00'");
    }

    #[test]
    fn test_core_error_is_transparent() {
        let core = AstroError::math_error("lst", MathErrorKind::NotFinite, "longitude is NaN");
        let err: TimeError = core.clone().into();
        assert_eq!(err.to_string(), core.to_string());
    }
}
