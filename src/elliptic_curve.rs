use crate::arithmetic::Arithmetic;
use crate::galois_field::FieldError;
use std::fmt;

///
/// Short Weierstrass curve `y^2 = x^3 + a * x + b`.
///
/// The coefficients may be integers (`BigInt`) for toy curves, or elements of a
/// Galois Field for the curves used in cryptography, e.g. secp256k1 with `a = 0`
/// and `b = 7`.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EllipticCurve<T> {
    pub a: T,
    pub b: T,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Point<T> {
    Coor(T, T),
    Identity,
}

///
/// A point bound to the curve it lies on. Built through [`EllipticCurve::point`] or
/// [`CurvePoint::new`], both of which check the curve equation.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurvePoint<T> {
    point: Point<T>,
    curve: EllipticCurve<T>,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EllipticCurveError {
    #[error("({x}, {y}) is not on the curve")]
    NotOnCurve { x: String, y: String },
    #[error("points on {left} and {right} are not on the same curve")]
    CurveMismatch { left: String, right: String },
    #[error("field arithmetic failed: {0}")]
    Field(#[from] FieldError),
}

impl<T: Arithmetic> EllipticCurve<T> {
    pub fn new(a: T, b: T) -> Self {
        EllipticCurve { a, b }
    }

    ///
    /// `y^2 == x^3 + a * x + b`
    ///
    pub fn is_on_curve(&self, x: &T, y: &T) -> Result<bool, EllipticCurveError> {
        let y2 = y.pow(2)?;
        let rhs = x.pow(3)?.add(&self.a.mul(x)?)?.add(&self.b)?;

        Ok(y2 == rhs)
    }

    pub fn point(&self, x: T, y: T) -> Result<CurvePoint<T>, EllipticCurveError> {
        if !self.is_on_curve(&x, &y)? {
            return Err(EllipticCurveError::NotOnCurve {
                x: x.to_string(),
                y: y.to_string(),
            });
        }

        Ok(CurvePoint {
            point: Point::Coor(x, y),
            curve: self.clone(),
        })
    }

    pub fn identity(&self) -> CurvePoint<T> {
        CurvePoint {
            point: Point::Identity,
            curve: self.clone(),
        }
    }
}

impl<T: Arithmetic> CurvePoint<T> {
    ///
    /// Builds the point `(x, y)` on `y^2 = x^3 + a * x + b`. A missing coordinate
    /// yields the identity of that curve, which is not checked against the equation.
    ///
    pub fn new(x: Option<T>, y: Option<T>, a: T, b: T) -> Result<Self, EllipticCurveError> {
        let curve = EllipticCurve::new(a, b);

        match (x, y) {
            (Some(x), Some(y)) => curve.point(x, y),
            _ => Ok(curve.identity()),
        }
    }

    pub fn point(&self) -> &Point<T> {
        &self.point
    }

    pub fn curve(&self) -> &EllipticCurve<T> {
        &self.curve
    }

    pub fn coordinates(&self) -> Option<(&T, &T)> {
        match &self.point {
            Point::Coor(x, y) => Some((x, y)),
            Point::Identity => None,
        }
    }

    pub fn is_identity(&self) -> bool {
        self.point == Point::Identity
    }

    ///
    /// Reflection over the x axis: `-(x, y) = (x, -y)`
    ///
    pub fn neg(&self) -> Self {
        let point = match &self.point {
            Point::Coor(x, y) => Point::Coor(x.clone(), y.neg()),
            Point::Identity => Point::Identity,
        };

        CurvePoint {
            point,
            curve: self.curve.clone(),
        }
    }

    ///
    /// Group law. With `k` the slope of the chord (or tangent when doubling):
    ///
    /// `x3 = k^2 - x1 - x2`
    /// `y3 = k * (x1 - x3) - y1`
    ///
    pub fn add(&self, rhs: &CurvePoint<T>) -> Result<Self, EllipticCurveError> {
        // vertical tangent
        if self == rhs {
            if let Point::Coor(_, y) = &self.point {
                if y.is_zero() {
                    return Ok(self.curve.identity());
                }
            }
        }

        if self.curve != rhs.curve {
            return Err(EllipticCurveError::CurveMismatch {
                left: self.curve.to_string(),
                right: rhs.curve.to_string(),
            });
        }

        let (x1, y1) = match &self.point {
            Point::Coor(x, y) => (x, y),
            Point::Identity => return Ok(rhs.clone()),
        };
        let (x2, y2) = match &rhs.point {
            Point::Coor(x, y) => (x, y),
            Point::Identity => return Ok(self.clone()),
        };

        if x1 == x2 && *y1 == y2.neg() {
            return Ok(self.curve.identity());
        }

        let k = if self == rhs {
            // (3 * x1^2 + a) / (2 * y1)
            let x1_sq = x1.pow(2)?;
            let numerator = x1_sq.add(&x1_sq)?.add(&x1_sq)?.add(&self.curve.a)?;
            let denominator = y1.add(y1)?;
            numerator.div(&denominator)?
        } else {
            y2.sub(y1)?.div(&x2.sub(x1)?)?
        };

        let x3 = k.pow(2)?.sub(x1)?.sub(x2)?;
        let y3 = k.mul(&x1.sub(&x3)?)?.sub(y1)?;

        Ok(CurvePoint {
            point: Point::Coor(x3, y3),
            curve: self.curve.clone(),
        })
    }

    pub fn double(&self) -> Result<Self, EllipticCurveError> {
        self.add(self)
    }
}

impl<T: fmt::Display> fmt::Display for EllipticCurve<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "y^2 = x^3 + {}x + {}", self.a, self.b)
    }
}

impl<T: fmt::Display> fmt::Display for CurvePoint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.point {
            Point::Coor(x, y) => write!(
                f,
                "Point(x:{}, y:{}, a:{}, b:{})",
                x, y, self.curve.a, self.curve.b
            ),
            Point::Identity => write!(
                f,
                "Point(infinity, a:{}, b:{})",
                self.curve.a, self.curve.b
            ),
        }
    }
}
