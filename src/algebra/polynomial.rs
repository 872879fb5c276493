//! Polynomials over GF(2^8)
//!
//! Coefficients are stored lowest degree first: `[c0, c1, ..., cn]` is
//! c0 + c1·x + ... + cn·x^n. Construction trims surplus high-degree zeros,
//! so the top coefficient is nonzero except for the zero polynomial `[0]`.

use super::FiniteField;
use crate::{Result, RsError};

/// Presentation order for coefficient lists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum CoefficientOrder {
    /// Constant term first (storage order)
    #[default]
    LowFirst,
    /// Leading term first
    HighFirst,
}

impl CoefficientOrder {
    /// Reorder a low-first coefficient slice into this order
    pub fn arrange(self, low_first: &[u8]) -> Vec<u8> {
        match self {
            Self::LowFirst => low_first.to_vec(),
            Self::HighFirst => low_first.iter().rev().copied().collect(),
        }
    }
}

/// Polynomial with GF(2^8) coefficients
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Polynomial {
    coeffs: Vec<u8>,
}

impl Polynomial {
    /// Create polynomial from low-first coefficients
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for an empty coefficient list.
    pub fn new(coeffs: Vec<u8>) -> Result<Self> {
        if coeffs.is_empty() {
            return Err(RsError::InvalidParameter(
                "polynomial needs at least one coefficient".to_string(),
            ));
        }
        Ok(Self::normalized(coeffs))
    }

    /// Create polynomial from coefficients given in `order`
    pub fn from_order(coeffs: &[u8], order: CoefficientOrder) -> Result<Self> {
        // Reversal is its own inverse
        Self::new(order.arrange(coeffs))
    }

    /// The constant polynomial 1
    pub fn one() -> Self {
        Self { coeffs: vec![1] }
    }

    /// The zero polynomial
    pub fn zero() -> Self {
        Self { coeffs: vec![0] }
    }

    /// (x + root), which equals (x - root) in characteristic 2
    pub fn monomial_root_factor(root: u8) -> Self {
        Self {
            coeffs: vec![root, 1],
        }
    }

    fn normalized(mut coeffs: Vec<u8>) -> Self {
        while coeffs.len() > 1 && coeffs.last() == Some(&0) {
            coeffs.pop();
        }
        if coeffs.is_empty() {
            coeffs.push(0);
        }
        Self { coeffs }
    }

    /// Degree (the zero polynomial reports 0)
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Whether this is the zero polynomial
    pub fn is_zero(&self) -> bool {
        self.coeffs == [0]
    }

    /// Highest-degree coefficient
    pub fn leading_coefficient(&self) -> u8 {
        self.coeffs[self.coeffs.len() - 1]
    }

    /// Whether the leading coefficient is 1
    pub fn is_monic(&self) -> bool {
        self.leading_coefficient() == 1
    }

    /// Coefficients, lowest degree first
    pub fn coefficients(&self) -> &[u8] {
        &self.coeffs
    }

    /// Coefficients in the requested order
    pub fn in_order(&self, order: CoefficientOrder) -> Vec<u8> {
        order.arrange(&self.coeffs)
    }

    /// Consume into low-first coefficients
    pub fn into_coefficients(self) -> Vec<u8> {
        self.coeffs
    }

    /// Sum (coefficient-wise XOR)
    pub fn add(&self, other: &Self, field: &FiniteField) -> Self {
        let (long, short) = if self.coeffs.len() >= other.coeffs.len() {
            (&self.coeffs, &other.coeffs)
        } else {
            (&other.coeffs, &self.coeffs)
        };

        let mut coeffs = long.clone();
        for (c, &s) in coeffs.iter_mut().zip(short.iter()) {
            *c = field.add(*c, s);
        }
        Self::normalized(coeffs)
    }

    /// Product by convolution: c_k = Σ_{i+j=k} p_i · q_j
    pub fn mul(&self, other: &Self, field: &FiniteField) -> Self {
        let mut coeffs = vec![0u8; self.coeffs.len() + other.coeffs.len() - 1];

        for (i, &p) in self.coeffs.iter().enumerate() {
            if p == 0 {
                continue;
            }
            for (j, &q) in other.coeffs.iter().enumerate() {
                coeffs[i + j] = field.add(coeffs[i + j], field.mul(p, q));
            }
        }

        Self::normalized(coeffs)
    }

    /// Value at `x` (Horner's method)
    pub fn evaluate(&self, x: u8, field: &FiniteField) -> u8 {
        field.eval_poly(&self.coeffs, x)
    }

    /// Formal derivative
    ///
    /// In characteristic 2, k·c_k vanishes for even k, so only odd-power
    /// terms survive, each shifted down one degree.
    pub fn derivative(&self) -> Self {
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(k, &c)| if k % 2 == 1 { c } else { 0 })
            .collect();
        Self::normalized(coeffs)
    }

    /// Long division, returning (quotient, remainder)
    ///
    /// # Errors
    ///
    /// Returns `DivideByZero` if `divisor` is the zero polynomial.
    pub fn div_rem(&self, divisor: &Self, field: &FiniteField) -> Result<(Self, Self)> {
        if divisor.is_zero() {
            return Err(RsError::DivideByZero);
        }
        if self.degree() < divisor.degree() {
            return Ok((Self::zero(), self.clone()));
        }

        let divisor_deg = divisor.degree();
        let lead_inv = field.inv(divisor.leading_coefficient())?;
        let mut remainder = self.coeffs.clone();
        let mut quotient = vec![0u8; self.degree() - divisor_deg + 1];

        for shift in (0..quotient.len()).rev() {
            let coeff = field.mul(remainder[shift + divisor_deg], lead_inv);
            quotient[shift] = coeff;
            if coeff == 0 {
                continue;
            }
            for (j, &d) in divisor.coeffs.iter().enumerate() {
                remainder[shift + j] = field.add(remainder[shift + j], field.mul(coeff, d));
            }
        }

        remainder.truncate(divisor_deg.max(1));
        Ok((Self::normalized(quotient), Self::normalized(remainder)))
    }

    /// All field elements at which the polynomial vanishes, ascending
    ///
    /// Exhaustive over the 256 elements. The zero polynomial returns all of them.
    pub fn roots(&self, field: &FiniteField) -> Vec<u8> {
        (0..=u8::MAX)
            .filter(|&x| self.evaluate(x, field) == 0)
            .collect()
    }
}
