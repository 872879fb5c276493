//! Reed-Solomon generator polynomial
//!
//! g(x) = (x + α^1)(x + α^2)...(x + α^2t), a monic polynomial of degree 2t.
//! An encoder appends the remainder of m(x)·x^2t divided by g(x) as parity.

use crate::algebra::{CoefficientOrder, FiniteField, Polynomial, GROUP_ORDER};
use crate::{Result, RsError};

/// Largest supported t: 2t parity symbols must leave room for at least one
/// message symbol in a 255-symbol codeword
pub const MAX_CORRECTABLE_ERRORS: usize = (GROUP_ORDER - 1) / 2;

/// Generator polynomial for a given error-correction capability
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorPolynomial {
    max_errors: usize,
    roots: Vec<u8>,
    polynomial: Polynomial,
}

impl GeneratorPolynomial {
    /// Derive the generator correcting up to `max_errors` symbol errors
    ///
    /// Starts from [1] and multiplies in (x + α^i) for i = 1..=2t.
    /// Pure in `max_errors` and the field convention.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `max_errors` exceeds
    /// [`MAX_CORRECTABLE_ERRORS`].
    pub fn compute(field: &FiniteField, max_errors: usize) -> Result<Self> {
        if max_errors > MAX_CORRECTABLE_ERRORS {
            tracing::warn!(max_errors, "rejected error-correction capability");
            return Err(RsError::InvalidParameter(format!(
                "max errors must be in 0..={}, got {}",
                MAX_CORRECTABLE_ERRORS, max_errors
            )));
        }

        let parity_symbols = 2 * max_errors;

        let roots: Vec<u8> = (1..=parity_symbols).map(|i| field.exp(i)).collect();
        let polynomial = roots.iter().fold(Polynomial::one(), |acc, &root| {
            acc.mul(&Polynomial::monomial_root_factor(root), field)
        });

        tracing::debug!(
            max_errors,
            degree = polynomial.degree(),
            "computed generator polynomial"
        );

        Ok(Self {
            max_errors,
            roots,
            polynomial,
        })
    }

    /// Number of correctable symbol errors t
    pub fn max_errors(&self) -> usize {
        self.max_errors
    }

    /// Number of parity symbols 2t (the generator's degree)
    pub fn parity_symbols(&self) -> usize {
        2 * self.max_errors
    }

    /// Roots α^1 ..= α^2t
    pub fn roots(&self) -> &[u8] {
        &self.roots
    }

    /// The generator as a polynomial (low-first storage)
    pub fn polynomial(&self) -> &Polynomial {
        &self.polynomial
    }

    /// Coefficients in the requested order
    pub fn coefficients(&self, order: CoefficientOrder) -> Vec<u8> {
        self.polynomial.in_order(order)
    }

    /// Printed form: one decimal coefficient per line
    pub fn render(&self, order: CoefficientOrder) -> String {
        self.coefficients(order)
            .iter()
            .map(|c| format!("{}\n", c))
            .collect()
    }

    /// Consume into the underlying polynomial
    pub fn into_polynomial(self) -> Polynomial {
        self.polynomial
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> &'static FiniteField {
        FiniteField::standard().unwrap()
    }

    #[test]
    fn test_zero_capability_is_one() {
        let g = GeneratorPolynomial::compute(field(), 0).unwrap();
        assert_eq!(g.polynomial(), &Polynomial::one());
        assert!(g.roots().is_empty());
        assert_eq!(g.render(CoefficientOrder::LowFirst), "1\n");
    }

    #[test]
    fn test_single_error() {
        let g = GeneratorPolynomial::compute(field(), 1).unwrap();
        assert_eq!(g.roots(), &[2, 4]);
        assert_eq!(g.coefficients(CoefficientOrder::LowFirst), vec![8, 6, 1]);
        assert_eq!(g.coefficients(CoefficientOrder::HighFirst), vec![1, 6, 8]);
        assert_eq!(g.render(CoefficientOrder::LowFirst), "8\n6\n1\n");
    }

    #[test]
    fn test_two_errors() {
        let g = GeneratorPolynomial::compute(field(), 2).unwrap();
        assert_eq!(g.coefficients(CoefficientOrder::LowFirst), vec![116, 231, 216, 30, 1]);
    }

    #[test]
    fn test_roots_vanish() {
        let gf = field();
        let g = GeneratorPolynomial::compute(gf, 8).unwrap();
        assert_eq!(g.parity_symbols(), 16);
        for &root in g.roots() {
            assert_eq!(g.polynomial().evaluate(root, gf), 0);
        }
        assert_ne!(g.polynomial().evaluate(1, gf), 0);
    }

    #[test]
    fn test_largest_capability() {
        let gf = field();
        let g = GeneratorPolynomial::compute(gf, MAX_CORRECTABLE_ERRORS).unwrap();
        assert_eq!(g.parity_symbols(), 254);
        assert_eq!(g.polynomial().degree(), 254);
        assert!(g.polynomial().is_monic());
        // Roots are α^1 ..= α^254: every nonzero element except 1
        assert_eq!(g.polynomial().roots(gf).len(), 254);
    }

    #[test]
    fn test_capability_above_bound_rejected() {
        for t in [MAX_CORRECTABLE_ERRORS + 1, usize::MAX / 2 + 1, usize::MAX] {
            assert!(matches!(
                GeneratorPolynomial::compute(field(), t),
                Err(RsError::InvalidParameter(_))
            ));
        }
    }
}
