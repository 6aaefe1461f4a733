pub mod arithmetic;
pub mod elliptic_curve;
pub mod galois_field;

pub use arithmetic::Arithmetic;
pub use elliptic_curve::{CurvePoint, EllipticCurve, EllipticCurveError, Point};
pub use galois_field::{FieldElement, FieldError};
