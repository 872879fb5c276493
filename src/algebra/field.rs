//! GF(2^8) field engine
//!
//! Elements are bytes. Addition is XOR; multiplication, division and
//! exponentiation are exp/log table lookups with exponents reduced mod 255.

use std::sync::OnceLock;

use super::tables::{carryless_mul, ExpLogTables, FIELD_ORDER, GROUP_ORDER};
use crate::{Result, RsError};

/// Field convention: generating polynomial and primitive element
///
/// Both sides of a Reed-Solomon link must agree on this pair. A different
/// polynomial yields an isomorphic but incompatible field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldConfig {
    /// Degree-8 generating polynomial, bit 8 set (x^8 + x^4 + x^3 + x^2 + 1 = 0x11D)
    pub generating_poly: u16,

    /// Generator of the multiplicative group
    pub primitive_element: u8,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            generating_poly: 0x11D,
            primitive_element: 2,
        }
    }
}

static STANDARD: OnceLock<Result<FiniteField>> = OnceLock::new();

/// Finite field GF(2^8) backed by verified exp/log tables
///
/// Immutable after construction; share it by reference.
#[derive(Debug, Clone)]
pub struct FiniteField {
    config: FieldConfig,
    tables: ExpLogTables,
}

impl FiniteField {
    /// Create field for the given convention
    ///
    /// # Errors
    ///
    /// Fails with `FieldConfiguration` if the primitive element does not
    /// generate all 255 nonzero elements.
    pub fn new(config: FieldConfig) -> Result<Self> {
        let tables = ExpLogTables::build(config.generating_poly, config.primitive_element)?;
        Ok(Self { config, tables })
    }

    /// Process-wide 0x11D / α = 2 field, built on first use
    pub fn standard() -> Result<&'static Self> {
        STANDARD
            .get_or_init(|| Self::new(FieldConfig::default()))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Field convention in use
    pub fn config(&self) -> FieldConfig {
        self.config
    }

    /// Field size
    pub fn size(&self) -> usize {
        FIELD_ORDER
    }

    /// Generator α of the multiplicative group
    pub fn primitive_element(&self) -> u8 {
        self.config.primitive_element
    }

    /// Add two field elements (XOR for characteristic 2)
    #[inline]
    pub fn add(&self, a: u8, b: u8) -> u8 {
        a ^ b
    }

    /// Multiply two field elements in GF(2^8)
    #[inline]
    pub fn mul(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }

        let log_sum = self.tables.log(a) as usize + self.tables.log(b) as usize;
        self.tables.exp(log_sum)
    }

    /// Shift-and-reduce multiplication, bypassing the tables
    pub fn carryless_mul(&self, a: u8, b: u8) -> u8 {
        carryless_mul(a, b, self.config.generating_poly)
    }

    /// Divide `a` by `b`
    pub fn div(&self, a: u8, b: u8) -> Result<u8> {
        if b == 0 {
            return Err(RsError::DivideByZero);
        }
        if a == 0 {
            return Ok(0);
        }

        let log_diff =
            self.tables.log(a) as usize + GROUP_ORDER - self.tables.log(b) as usize;
        Ok(self.tables.exp(log_diff))
    }

    /// Multiplicative inverse
    pub fn inv(&self, a: u8) -> Result<u8> {
        if a == 0 {
            return Err(RsError::DivideByZero);
        }

        Ok(self.tables.exp(GROUP_ORDER - self.tables.log(a) as usize))
    }

    /// `base^exponent`, with `0^0 == 1`
    pub fn pow(&self, base: u8, exponent: u32) -> u8 {
        if exponent == 0 {
            return 1;
        }
        if base == 0 {
            return 0;
        }

        let log_product = self.tables.log(base) as u64 * exponent as u64;
        self.tables.exp((log_product % GROUP_ORDER as u64) as usize)
    }

    /// α^i, with i reduced modulo 255
    #[inline]
    pub fn exp(&self, i: usize) -> u8 {
        self.tables.exp(i)
    }

    /// Discrete log base α
    pub fn log(&self, a: u8) -> Result<u8> {
        if a == 0 {
            return Err(RsError::LogOfZero);
        }
        Ok(self.tables.log(a))
    }

    /// Evaluate polynomial at point using Horner's method
    ///
    /// `coeffs` is lowest degree first; an empty slice evaluates to 0.
    pub fn eval_poly(&self, coeffs: &[u8], point: u8) -> u8 {
        coeffs
            .iter()
            .rev()
            .fold(0, |acc, &c| self.add(self.mul(acc, point), c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> &'static FiniteField {
        FiniteField::standard().unwrap()
    }

    #[test]
    fn test_constant_size() {
        assert_eq!(field().size(), 256);
        assert_eq!(field().primitive_element(), 2);
    }

    #[test]
    fn test_standard_is_shared() {
        let a = FiniteField::standard().unwrap();
        let b = FiniteField::standard().unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_add_self_inverse() {
        for a in 0..=255u8 {
            assert_eq!(field().add(a, a), 0);
        }
    }

    #[test]
    fn test_mul_known_values() {
        let gf = field();
        assert_eq!(gf.mul(2, 4), 8);
        assert_eq!(gf.mul(0x80, 2), 0x1D);
        assert_eq!(gf.mul(3, 7), 9);
        assert_eq!(gf.mul(0, 77), 0);
    }

    #[test]
    fn test_table_mul_matches_carryless() {
        let gf = field();
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                assert_eq!(gf.mul(a, b), gf.carryless_mul(a, b), "{a} * {b}");
            }
        }
    }

    #[test]
    fn test_inverse() {
        let gf = field();
        assert_eq!(gf.inv(0), Err(RsError::DivideByZero));
        assert_eq!(gf.inv(1), Ok(1));
        for a in 1..=255u8 {
            assert_eq!(gf.mul(a, gf.inv(a).unwrap()), 1);
        }
    }

    #[test]
    fn test_div() {
        let gf = field();
        assert_eq!(gf.div(5, 0), Err(RsError::DivideByZero));
        assert_eq!(gf.div(0, 5), Ok(0));
        for a in 1..=255u8 {
            assert_eq!(gf.div(a, a), Ok(1));
            assert_eq!(gf.mul(gf.div(7, a).unwrap(), a), 7);
        }
    }

    #[test]
    fn test_pow() {
        let gf = field();
        assert_eq!(gf.pow(0, 0), 1);
        assert_eq!(gf.pow(0, 5), 0);
        assert_eq!(gf.pow(2, 8), 29);
        assert_eq!(gf.pow(2, 255), 1);
        assert_eq!(gf.pow(2, 256), 2);
        assert_eq!(gf.pow(7, u32::MAX), gf.pow(7, u32::MAX % 255));
        for i in 0..300 {
            assert_eq!(gf.pow(2, i), gf.exp(i as usize));
        }
    }

    #[test]
    fn test_log() {
        let gf = field();
        assert_eq!(gf.log(0), Err(RsError::LogOfZero));
        assert_eq!(gf.log(1), Ok(0));
        assert_eq!(gf.log(29), Ok(8));
    }

    #[test]
    fn test_eval_poly() {
        let gf = field();
        assert_eq!(gf.eval_poly(&[], 9), 0);
        assert_eq!(gf.eval_poly(&[42], 9), 42);
        // x^2 + 6x + 8 vanishes at α and α^2
        assert_eq!(gf.eval_poly(&[8, 6, 1], 2), 0);
        assert_eq!(gf.eval_poly(&[8, 6, 1], 4), 0);
        assert_ne!(gf.eval_poly(&[8, 6, 1], 8), 0);
    }

    #[test]
    fn test_alternate_convention() {
        let gf = FiniteField::new(FieldConfig {
            generating_poly: 0x11B,
            primitive_element: 3,
        })
        .unwrap();
        assert_eq!(gf.mul(0x57, 0x83), 0xC1);
        assert_eq!(gf.inv(0x53), Ok(0xCA));
    }
}
