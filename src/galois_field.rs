use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use std::fmt;

///
/// An element of the Galois Field `GF(p)`: a residue `num` modulo the prime `order`.
///
/// The field is closed under `+`, `*`, `^` and `/`: every operation produces a new
/// element of the same order. `order` has to be prime for division and the Fermat
/// based inverse to hold; that is the caller's responsibility and is not checked.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldElement {
    num: BigUint,
    order: BigUint,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    #[error("element {num} must lie between 0 and {order} - 1")]
    OutOfRange { num: BigUint, order: BigUint },
    #[error("elements of order {left} and {right} belong to different fields")]
    OrderMismatch { left: BigUint, right: BigUint },
    #[error("division by zero")]
    DivisionByZero,
    #[error("{dividend} is not divisible by {divisor}")]
    InexactDivision { dividend: BigInt, divisor: BigInt },
}

impl FieldElement {
    ///
    /// Creates the element `num` of `GF(order)`, requiring `0 <= num < order`.
    ///
    pub fn new(num: BigUint, order: BigUint) -> Result<Self, FieldError> {
        FieldElement::check_less_than(&num, &order)?;

        Ok(FieldElement { num, order })
    }

    ///
    /// Reduces a signed integer into `GF(order)`:
    ///
    /// `num mod order`, always in `[0, order)`
    ///
    pub fn from_int(num: &BigInt, order: BigUint) -> Result<Self, FieldError> {
        if order == BigUint::from(0u32) {
            return Err(FieldError::OutOfRange {
                num: num.magnitude().clone(),
                order,
            });
        }

        let (_, num) = num.mod_floor(&BigInt::from(order.clone())).into_parts();

        Ok(FieldElement { num, order })
    }

    pub fn zero(order: BigUint) -> Result<Self, FieldError> {
        FieldElement::new(BigUint::from(0u32), order)
    }

    pub fn one(order: BigUint) -> Result<Self, FieldError> {
        FieldElement::new(BigUint::from(1u32), order)
    }

    pub fn num(&self) -> &BigUint {
        &self.num
    }

    pub fn order(&self) -> &BigUint {
        &self.order
    }

    pub fn is_zero(&self) -> bool {
        self.num == BigUint::from(0u32)
    }

    ///
    /// Adds two elements in the set
    ///
    /// `(a + b) mod p`
    ///
    pub fn add(&self, rhs: &FieldElement) -> Result<Self, FieldError> {
        self.check_same_order(rhs)?;

        Ok(FieldElement {
            num: (&self.num + &rhs.num) % &self.order,
            order: self.order.clone(),
        })
    }

    ///
    /// Multiplies two elements in the set
    ///
    /// `(a * b) mod p`
    ///
    pub fn mult(&self, rhs: &FieldElement) -> Result<Self, FieldError> {
        self.check_same_order(rhs)?;

        Ok(FieldElement {
            num: (&self.num * &rhs.num) % &self.order,
            order: self.order.clone(),
        })
    }

    ///
    /// Finds the additive inverse of an element in the set:
    ///
    /// `a + (-a) = 0 mod p`
    ///
    pub fn inv_add(&self) -> Self {
        if self.is_zero() {
            return self.clone();
        }

        FieldElement {
            num: &self.order - &self.num,
            order: self.order.clone(),
        }
    }

    ///
    /// Subtract two elements in the set:
    ///
    /// `a - b = a + (-b) mod p`
    ///
    pub fn subtract(&self, rhs: &FieldElement) -> Result<Self, FieldError> {
        self.check_same_order(rhs)?;

        self.add(&rhs.inv_add())
    }

    ///
    /// Raises the element to a signed power:
    ///
    /// `a^e mod p`
    ///
    /// Negative exponents are folded into `[0, p - 1)` using the order of the
    /// multiplicative group, so `a^(-e) = (a^(-1))^e`. Zero has no negative powers.
    ///
    pub fn pow(&self, exp: &BigInt) -> Result<Self, FieldError> {
        let exp = if exp.sign() == Sign::Minus {
            if self.is_zero() {
                return Err(FieldError::DivisionByZero);
            }
            let group_order = BigInt::from(&self.order - BigUint::from(1u32));
            exp.mod_floor(&group_order)
        } else {
            exp.clone()
        };
        let (_, exp) = exp.into_parts();

        Ok(FieldElement {
            num: self.num.modpow(&exp, &self.order),
            order: self.order.clone(),
        })
    }

    ///
    /// Finds the multiplicative inverse of an element in the set if p is a
    /// prime number using Fermat's Little Theorem:
    ///  a^(p-1) mod p = 1
    ///  a * a^(p-2) mod p = 1
    /// `a^(-1) mod p = a^(p-2) mod p`
    ///
    /// Zero has no inverse.
    ///
    pub fn inv_mult_prime(&self) -> Result<Self, FieldError> {
        if self.is_zero() {
            return Err(FieldError::DivisionByZero);
        }

        Ok(FieldElement {
            num: self
                .num
                .modpow(&(&self.order - BigUint::from(2u32)), &self.order),
            order: self.order.clone(),
        })
    }

    ///
    /// Divides two elements in the set:
    ///
    /// `a / b = a * b^(-1) mod p`
    ///
    pub fn divide(&self, rhs: &FieldElement) -> Result<Self, FieldError> {
        self.check_same_order(rhs)?;

        let rhs_inv = rhs.inv_mult_prime()?;

        self.mult(&rhs_inv)
    }

    pub fn check_less_than(a: &BigUint, b: &BigUint) -> Result<(), FieldError> {
        if a >= b {
            return Err(FieldError::OutOfRange {
                num: a.clone(),
                order: b.clone(),
            });
        }
        Ok(())
    }

    fn check_same_order(&self, rhs: &FieldElement) -> Result<(), FieldError> {
        if self.order != rhs.order {
            return Err(FieldError::OrderMismatch {
                left: self.order.clone(),
                right: rhs.order.clone(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement_{}({})", self.order, self.num)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use num_bigint::RandBigInt;

    fn fe(num: u32, order: u32) -> FieldElement {
        FieldElement::new(BigUint::from(num), BigUint::from(order)).unwrap()
    }

    fn secp256k1_p() -> BigUint {
        BigUint::parse_bytes(
            b"FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F",
            16,
        )
        .unwrap()
    }

    #[test]
    fn test_new() {
        assert_eq!(fe(30, 31).num(), &BigUint::from(30u32));
        assert_eq!(fe(0, 31).order(), &BigUint::from(31u32));

        assert_eq!(
            FieldElement::new(BigUint::from(31u32), BigUint::from(31u32)),
            Err(FieldError::OutOfRange {
                num: BigUint::from(31u32),
                order: BigUint::from(31u32),
            })
        );
        assert!(FieldElement::new(BigUint::from(0u32), BigUint::from(0u32)).is_err());
    }

    #[test]
    fn test_from_int() {
        let p = BigUint::from(31u32);

        assert_eq!(FieldElement::from_int(&BigInt::from(-1), p.clone()), Ok(fe(30, 31)));
        assert_eq!(FieldElement::from_int(&BigInt::from(38), p.clone()), Ok(fe(7, 31)));
        assert_eq!(FieldElement::from_int(&BigInt::from(-62), p), Ok(fe(0, 31)));
        assert!(FieldElement::from_int(&BigInt::from(5), BigUint::from(0u32)).is_err());
    }

    #[test]
    fn test_eq() {
        assert_eq!(fe(2, 31), fe(2, 31));
        assert_ne!(fe(2, 31), fe(15, 31));
        // same residue, different field
        assert_ne!(fe(2, 31), fe(2, 11));
    }

    #[test]
    fn test_add() {
        assert_eq!(fe(17, 31).add(&fe(21, 31)), Ok(fe(7, 31)));
        assert_eq!(fe(10, 11).add(&fe(1, 11)), Ok(fe(0, 11)));
        assert_eq!(fe(4, 31).add(&fe(10, 31)), Ok(fe(14, 31)));

        assert_eq!(
            fe(4, 31).add(&fe(4, 11)),
            Err(FieldError::OrderMismatch {
                left: BigUint::from(31u32),
                right: BigUint::from(11u32),
            })
        );
    }

    #[test]
    fn test_multiply() {
        assert_eq!(fe(4, 11).mult(&fe(10, 11)), Ok(fe(7, 11)));
        assert_eq!(fe(24, 31).mult(&fe(19, 31)), Ok(fe(22, 31)));

        assert_eq!(
            fe(4, 31).mult(&fe(4, 11)),
            Err(FieldError::OrderMismatch {
                left: BigUint::from(31u32),
                right: BigUint::from(11u32),
            })
        );
    }

    #[test]
    fn test_inv_add() {
        assert_eq!(fe(4, 51).inv_add(), fe(47, 51));
        assert_eq!(fe(0, 51).inv_add(), fe(0, 51));

        let a = fe(4, 51);
        assert_eq!(a.add(&a.inv_add()), Ok(fe(0, 51)));
    }

    #[test]
    fn test_subtract() {
        // a - a = 0 mod p
        assert_eq!(fe(4, 51).subtract(&fe(4, 51)), Ok(fe(0, 51)));
        assert_eq!(fe(29, 31).subtract(&fe(4, 31)), Ok(fe(25, 31)));
        assert_eq!(fe(15, 31).subtract(&fe(30, 31)), Ok(fe(16, 31)));
        assert!(fe(1, 31).subtract(&fe(1, 11)).is_err());
    }

    #[test]
    fn test_pow() {
        assert_eq!(fe(17, 31).pow(&BigInt::from(3)), Ok(fe(15, 31)));
        assert_eq!(fe(5, 31).pow(&BigInt::from(0)), Ok(fe(1, 31)));
        assert_eq!(fe(0, 31).pow(&BigInt::from(30)), Ok(fe(0, 31)));
    }

    #[test]
    fn test_pow_negative() {
        // 17^-3 = 17^27 mod 31, folded over the multiplicative group order 30
        assert_eq!(fe(17, 31).pow(&BigInt::from(-3)), Ok(fe(29, 31)));
        assert_eq!(
            fe(4, 31).pow(&BigInt::from(-4)).and_then(|r| r.mult(&fe(11, 31))),
            Ok(fe(13, 31))
        );
        assert_eq!(fe(0, 31).pow(&BigInt::from(-1)), Err(FieldError::DivisionByZero));

        let a = fe(17, 31);
        let inv = a.pow(&BigInt::from(-1)).unwrap();
        assert_eq!(a.mult(&inv), Ok(fe(1, 31)));
    }

    #[test]
    fn test_inv_mult() {
        // 4 * 3 mod 11 = 12 mod 11 = 1
        let a = fe(4, 11);
        let c_inv = a.inv_mult_prime();

        assert_eq!(c_inv, Ok(fe(3, 11)));
        assert_eq!(a.mult(&c_inv.unwrap()), Ok(fe(1, 11)));

        assert_eq!(fe(0, 11).inv_mult_prime(), Err(FieldError::DivisionByZero));
    }

    #[test]
    fn test_divide() {
        // a / a = 1 mod p
        assert_eq!(fe(4, 11).divide(&fe(4, 11)), Ok(fe(1, 11)));
        assert_eq!(fe(3, 31).divide(&fe(24, 31)), Ok(fe(4, 31)));
        assert_eq!(fe(0, 31).divide(&fe(24, 31)), Ok(fe(0, 31)));

        assert_eq!(fe(3, 31).divide(&fe(0, 31)), Err(FieldError::DivisionByZero));
        assert!(fe(3, 31).divide(&fe(3, 11)).is_err());
    }

    #[test]
    fn test_field_laws_sampled() {
        let mut rng = rand::thread_rng();
        let p = BigUint::from(223u32);
        let zero = FieldElement::zero(p.clone()).unwrap();
        let one = FieldElement::one(p.clone()).unwrap();
        let fermat = BigInt::from(p.clone() - BigUint::from(1u32));

        for _ in 0..100 {
            let a = FieldElement::new(rng.gen_biguint_below(&p), p.clone()).unwrap();
            let b = FieldElement::new(rng.gen_biguint_below(&p), p.clone()).unwrap();

            assert!(a.add(&b).unwrap().num() < &p);
            assert!(a.mult(&b).unwrap().num() < &p);
            assert_eq!(a.add(&zero), Ok(a.clone()));
            assert_eq!(a.mult(&one), Ok(a.clone()));

            if !a.is_zero() {
                assert_eq!(a.mult(&one.divide(&a).unwrap()), Ok(one.clone()));
                assert_eq!(a.pow(&fermat), Ok(one.clone()));
            }
        }
    }

    #[test]
    fn test_large_prime_inverse() {
        let mut rng = rand::thread_rng();
        let p = secp256k1_p();
        let one = FieldElement::one(p.clone()).unwrap();

        for _ in 0..10 {
            let a = FieldElement::new(
                rng.gen_biguint_range(&BigUint::from(1u32), &p),
                p.clone(),
            )
            .unwrap();
            let inv = a.inv_mult_prime().unwrap();

            assert_eq!(a.mult(&inv), Ok(one.clone()));
            assert_eq!(one.divide(&a), Ok(inv));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(fe(7, 31).to_string(), "FieldElement_31(7)");
    }
}
