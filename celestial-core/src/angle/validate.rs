use crate::{AstroError, AstroResult, MathErrorKind};

/// Rejects NaN and infinities, naming the offending quantity.
pub fn require_finite(operation: &str, what: &str, value: f64) -> AstroResult<f64> {
    if value.is_finite() {
        return Ok(value);
    }
    Err(AstroError::math_error(
        operation,
        MathErrorKind::NotFinite,
        &format!("{} is not finite ({})", what, value),
    ))
}

/// Validates a declination in degrees against [-90°, +90°].
pub fn validate_declination_deg(dec_deg: f64) -> AstroResult<f64> {
    let dec_deg = require_finite("validate_declination", "declination", dec_deg)?;
    if (-90.0..=90.0).contains(&dec_deg) {
        return Ok(dec_deg);
    }
    Err(AstroError::math_error(
        "validate_declination",
        MathErrorKind::OutOfRange,
        &format!("Dec {:.2}° out of range [-90°, +90°]", dec_deg),
    ))
}

pub fn validate_latitude_deg(lat_deg: f64) -> AstroResult<f64> {
    let lat_deg = require_finite("validate_latitude", "latitude", lat_deg)?;
    if (-90.0..=90.0).contains(&lat_deg) {
        return Ok(lat_deg);
    }
    Err(AstroError::math_error(
        "validate_latitude",
        MathErrorKind::OutOfRange,
        &format!("Latitude {:.4}° out of range [-90°, +90°]", lat_deg),
    ))
}
