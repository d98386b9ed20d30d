//! Exact complex numbers over the rationals.
//!
//! A [`Complex`] is a Gaussian rational `re + im*i`. The canonical form
//! stored inside [`crate::Number`] requires `im != 0`; the arithmetic
//! here is written over raw pairs and the [`crate::Number`] factory
//! collapses real results back to `Rational`/`Integer`.

use num_traits::{One, Zero};
use std::fmt;

use crate::error::ArithmeticError;
use crate::{Integer, Rational};

/// An exact complex number with rational real and imaginary parts.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Complex {
    re: Rational,
    im: Rational,
}

impl Complex {
    /// Creates a complex number from raw parts without canonicalizing.
    ///
    /// Callers that store the result in a [`crate::Number`] must go
    /// through [`crate::Number::complex`], which collapses a zero
    /// imaginary part.
    #[must_use]
    pub fn from_parts(re: Rational, im: Rational) -> Self {
        Self { re, im }
    }

    /// The imaginary unit `i`.
    #[must_use]
    pub fn i() -> Self {
        Self {
            re: Rational::zero(),
            im: Rational::one(),
        }
    }

    /// Returns the real part.
    #[must_use]
    pub fn real_part(&self) -> &Rational {
        &self.re
    }

    /// Returns the imaginary part.
    #[must_use]
    pub fn imaginary_part(&self) -> &Rational {
        &self.im
    }

    /// Returns true if the imaginary part is zero.
    #[must_use]
    pub fn is_real(&self) -> bool {
        self.im.is_zero()
    }

    /// Returns true if both parts are zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }

    /// Returns the complex conjugate.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self {
            re: self.re.clone(),
            im: -self.im.clone(),
        }
    }

    /// Componentwise addition.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self {
            re: &self.re + &other.re,
            im: &self.im + &other.im,
        }
    }

    /// Componentwise subtraction.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        Self {
            re: &self.re - &other.re,
            im: &self.im - &other.im,
        }
    }

    /// Complex multiplication.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        Self {
            re: &(&self.re * &other.re) - &(&self.im * &other.im),
            im: &(&self.re * &other.im) + &(&self.im * &other.re),
        }
    }

    /// Complex division through the conjugate.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `other` is zero.
    pub fn div(&self, other: &Self) -> Result<Self, ArithmeticError> {
        let norm = &(&other.re * &other.re) + &(&other.im * &other.im);
        if norm.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        let num = self.mul(&other.conjugate());
        let norm_inv = norm.recip()?;
        Ok(Self {
            re: &num.re * &norm_inv,
            im: &num.im * &norm_inv,
        })
    }

    /// Raises to an integer power by binary exponentiation.
    ///
    /// Purely imaginary bases are expanded through the `i` power cycle so
    /// the rational factor is computed with real arithmetic only.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] for a negative
    /// exponent on zero, and a domain error for exponents outside the
    /// `i64` range.
    pub fn pow_integer(&self, exp: &Integer) -> Result<Self, ArithmeticError> {
        let Some(e) = exp.to_i64() else {
            return Err(ArithmeticError::domain("complex integer power"));
        };
        if e == 0 {
            return Ok(Self {
                re: Rational::one(),
                im: Rational::zero(),
            });
        }
        if self.re.is_zero() {
            // (b*i)^e = b^e * i^e with i^e cycling through {1, i, -1, -i}.
            let small = i32::try_from(e)
                .map_err(|_| ArithmeticError::domain("complex integer power"))?;
            let b = self.im.pow_signed(small)?;
            let cycle = e.rem_euclid(4);
            return Ok(match cycle {
                0 => Self {
                    re: b,
                    im: Rational::zero(),
                },
                1 => Self {
                    re: Rational::zero(),
                    im: b,
                },
                2 => Self {
                    re: -b,
                    im: Rational::zero(),
                },
                _ => Self {
                    re: Rational::zero(),
                    im: -b,
                },
            });
        }
        if e < 0 {
            let positive = self.pow_unsigned(e.unsigned_abs());
            let one = Self {
                re: Rational::one(),
                im: Rational::zero(),
            };
            return one.div(&positive);
        }
        Ok(self.pow_unsigned(e.unsigned_abs()))
    }

    fn pow_unsigned(&self, mut exp: u64) -> Self {
        let mut result = Self {
            re: Rational::one(),
            im: Rational::zero(),
        };
        let mut base = self.clone();
        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base);
            }
            base = base.mul(&base);
            exp >>= 1;
        }
        result
    }

    /// Lossy conversion to a machine (re, im) pair.
    #[must_use]
    pub fn to_f64_parts(&self) -> (f64, f64) {
        (self.re.to_f64(), self.im.to_f64())
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im.is_negative() {
            write!(f, "{} - {}*I", self.re, self.im.abs())
        } else {
            write!(f, "{} + {}*I", self.re, self.im)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re_n: i64, re_d: i64, im_n: i64, im_d: i64) -> Complex {
        Complex::from_parts(
            Rational::from_i64(re_n, re_d).unwrap(),
            Rational::from_i64(im_n, im_d).unwrap(),
        )
    }

    #[test]
    fn mul_conjugate_is_real() {
        let z = c(1, 1, 1, 1);
        let w = z.mul(&z.conjugate());
        assert!(w.is_real());
        assert_eq!(w.real_part().numerator().to_i64(), Some(2));
    }

    #[test]
    fn division() {
        let z = c(1, 1, 1, 1);
        let q = z.div(&z).unwrap();
        assert!(q.is_real());
        assert!(q.real_part().is_one());
    }

    #[test]
    fn division_by_zero() {
        let z = c(1, 1, 1, 1);
        let zero = Complex::from_parts(Rational::zero(), Rational::zero());
        assert_eq!(z.div(&zero).unwrap_err(), ArithmeticError::DivisionByZero);
    }

    #[test]
    fn imaginary_power_cycle() {
        let i = Complex::i();
        let p2 = i.pow_integer(&Integer::new(2)).unwrap();
        assert!(p2.is_real());
        assert!(p2.real_part().is_negative());

        let p4 = i.pow_integer(&Integer::new(4)).unwrap();
        assert!(p4.is_real());
        assert!(p4.real_part().is_one());
    }

    #[test]
    fn negative_power() {
        let z = c(0, 1, 2, 1); // 2i
        let p = z.pow_integer(&Integer::new(-1)).unwrap();
        // 1/(2i) = -i/2
        assert!(p.real_part().is_zero());
        assert_eq!(p.imaginary_part().numerator().to_i64(), Some(-1));
        assert_eq!(p.imaginary_part().denominator().to_i64(), Some(2));
    }
}
