//! `+`, `-`, scalar `*` and unary `-` for [`Angle`].

use super::core::Angle;
use core::ops::{Add, Mul, Neg, Sub};

impl Add for Angle {
    type Output = Angle;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Angle::from_radians(self.radians() + rhs.radians())
    }
}

impl Sub for Angle {
    type Output = Angle;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Angle::from_radians(self.radians() - rhs.radians())
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;
    #[inline]
    fn mul(self, k: f64) -> Self {
        Angle::from_radians(self.radians() * k)
    }
}

impl Neg for Angle {
    type Output = Angle;
    #[inline]
    fn neg(self) -> Self {
        Angle::from_radians(-self.radians())
    }
}
