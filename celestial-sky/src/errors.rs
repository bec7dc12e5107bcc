use celestial_catalog::CatalogError;
use celestial_coords::CoordError;
use celestial_core::AstroError;
use celestial_time::TimeError;
use thiserror::Error;

pub type SkyResult<T> = Result<T, SkyError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SkyError {
    #[error("Invalid observer: {0}")]
    InvalidObserver(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A computed coordinate came out NaN or infinite; the scene is discarded.
    #[error("Non-finite {quantity} computed for '{object}'")]
    NonFinite {
        object: String,
        quantity: &'static str,
    },

    #[error(transparent)]
    Time(#[from] TimeError),

    #[error(transparent)]
    Coord(#[from] CoordError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Core(#[from] AstroError),
}

impl SkyError {
    pub fn non_finite(object: &str, quantity: &'static str) -> Self {
        Self::NonFinite {
            object: object.to_string(),
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_core::MathErrorKind;

    #[test]
    fn test_non_finite_message() {
        let err = SkyError::non_finite("Sirius", "altitude");
        assert_eq!(err.to_string(), "Non-finite altitude computed for 'Sirius'");
    }

    #[test]
    fn test_lower_errors_pass_through() {
        let core = AstroError::math_error("validate_latitude", MathErrorKind::OutOfRange, "lat 91");
        let err: SkyError = core.clone().into();
        assert_eq!(err.to_string(), core.to_string());

        let err: SkyError = TimeError::ParseError("bad".into()).into();
        assert!(matches!(err, SkyError::Time(_)));
    }
}
