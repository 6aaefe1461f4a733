use crate::galois_field::{FieldElement, FieldError};
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use std::fmt;

///
/// The operator set a coordinate type must provide for the elliptic curve group law:
/// equality, `+`, `-`, negation, `*`, `/` and small powers.
///
/// Implemented by [`FieldElement`] for curves over `GF(p)` and by [`BigInt`] for
/// illustrative curves over the integers.
///
pub trait Arithmetic: Clone + PartialEq + fmt::Debug + fmt::Display {
    fn add(&self, rhs: &Self) -> Result<Self, FieldError>;

    fn sub(&self, rhs: &Self) -> Result<Self, FieldError>;

    fn mul(&self, rhs: &Self) -> Result<Self, FieldError>;

    fn div(&self, rhs: &Self) -> Result<Self, FieldError>;

    fn neg(&self) -> Self;

    fn pow(&self, exp: u32) -> Result<Self, FieldError>;

    fn is_zero(&self) -> bool;
}

impl Arithmetic for FieldElement {
    fn add(&self, rhs: &Self) -> Result<Self, FieldError> {
        FieldElement::add(self, rhs)
    }

    fn sub(&self, rhs: &Self) -> Result<Self, FieldError> {
        FieldElement::subtract(self, rhs)
    }

    fn mul(&self, rhs: &Self) -> Result<Self, FieldError> {
        FieldElement::mult(self, rhs)
    }

    fn div(&self, rhs: &Self) -> Result<Self, FieldError> {
        FieldElement::divide(self, rhs)
    }

    fn neg(&self) -> Self {
        FieldElement::inv_add(self)
    }

    fn pow(&self, exp: u32) -> Result<Self, FieldError> {
        FieldElement::pow(self, &BigInt::from(exp))
    }

    fn is_zero(&self) -> bool {
        FieldElement::is_zero(self)
    }
}

/// Integer arithmetic. Division has to be exact, a truncated slope would move the
/// result off the curve.
impl Arithmetic for BigInt {
    fn add(&self, rhs: &Self) -> Result<Self, FieldError> {
        Ok(self + rhs)
    }

    fn sub(&self, rhs: &Self) -> Result<Self, FieldError> {
        Ok(self - rhs)
    }

    fn mul(&self, rhs: &Self) -> Result<Self, FieldError> {
        Ok(self * rhs)
    }

    fn div(&self, rhs: &Self) -> Result<Self, FieldError> {
        if rhs.sign() == Sign::NoSign {
            return Err(FieldError::DivisionByZero);
        }

        let (quotient, remainder) = self.div_rem(rhs);
        if remainder.sign() != Sign::NoSign {
            return Err(FieldError::InexactDivision {
                dividend: self.clone(),
                divisor: rhs.clone(),
            });
        }

        Ok(quotient)
    }

    fn neg(&self) -> Self {
        -self
    }

    fn pow(&self, exp: u32) -> Result<Self, FieldError> {
        Ok(BigInt::pow(self, exp))
    }

    fn is_zero(&self) -> bool {
        self.sign() == Sign::NoSign
    }
}
