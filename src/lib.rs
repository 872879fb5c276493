//! # Reed-Solomon Generator Polynomials over GF(2^8)
//!
//! This library derives the generator polynomial used by Reed-Solomon
//! encoders over the byte field GF(2^8), together with the field and
//! polynomial arithmetic it is built on.
//!
//! ## Layers
//!
//! 1. **Field engine**: exp/log tables for GF(2^8), verified at construction
//! 2. **Polynomial engine**: owned coefficient vectors, convolution, Horner evaluation
//! 3. **Generator driver**: g(x) = (x + α^1)(x + α^2)...(x + α^2t)
//!
//! The field is fixed to the generating polynomial x^8 + x^4 + x^3 + x^2 + 1
//! (0x11D) with primitive element α = 2, the convention used by QR codes and
//! most byte-oriented RS decoders. Coefficients are stored lowest degree first.
//!
//! ## Usage Example
//!
//! ```
//! use rsgen::{FiniteField, GeneratorPolynomial};
//!
//! let field = FiniteField::standard()?;
//! let generator = GeneratorPolynomial::compute(field, 1)?;
//! assert_eq!(generator.polynomial().coefficients(), &[8, 6, 1]);
//! # Ok::<(), rsgen::RsError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod algebra;    // GF(2^8) field and polynomial engines
pub mod generator;  // Generator polynomial driver

// Re-exports for convenience
pub use algebra::{CoefficientOrder, FieldConfig, FiniteField, Polynomial};
pub use generator::{GeneratorPolynomial, MAX_CORRECTABLE_ERRORS};

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, RsError>;

/// Default error-correction capability t (16 correctable symbols, 32 parity bytes)
pub const DEFAULT_MAX_ERRORS: usize = 16;

/// Configuration parameters for generator computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of correctable symbol errors t
    pub max_errors: usize,

    /// Presentation order for emitted coefficients
    pub order: CoefficientOrder,

    /// Field convention (generating polynomial and primitive element)
    pub field: FieldConfig,
}

impl GeneratorConfig {
    /// Create configuration for a caller-supplied t
    ///
    /// Values outside `0..=MAX_CORRECTABLE_ERRORS` are rejected before any
    /// field work happens.
    pub fn new(max_errors: i64) -> Result<Self> {
        let max_errors = usize::try_from(max_errors)
            .ok()
            .filter(|&t| t <= MAX_CORRECTABLE_ERRORS)
            .ok_or_else(|| {
                RsError::InvalidParameter(format!(
                    "max errors must be in 0..={}, got {}",
                    MAX_CORRECTABLE_ERRORS, max_errors
                ))
            })?;

        Ok(Self {
            max_errors,
            ..Self::default()
        })
    }

    /// Number of parity symbols 2t
    pub fn parity_symbols(&self) -> usize {
        2 * self.max_errors
    }

    /// Build the field and derive the generator polynomial
    pub fn compute(&self) -> Result<GeneratorPolynomial> {
        let field = FiniteField::new(self.field)?;
        GeneratorPolynomial::compute(&field, self.max_errors)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_errors: DEFAULT_MAX_ERRORS,
            order: CoefficientOrder::LowFirst,
            field: FieldConfig::default(),
        }
    }
}

/// Errors that can occur during field or polynomial arithmetic
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RsError {
    /// The primitive element does not generate all 255 nonzero elements
    #[error(
        "primitive element {primitive_element:#04x} has period {period} under generating polynomial {generating_poly:#05x}, expected 255"
    )]
    FieldConfiguration {
        /// Generating polynomial that was tried
        generating_poly: u16,
        /// Candidate primitive element
        primitive_element: u8,
        /// Number of distinct powers reached before repeating or hitting zero
        period: usize,
    },

    /// Inverse or division by the zero element
    #[error("division by zero in GF(256)")]
    DivideByZero,

    /// Discrete logarithm of the zero element
    #[error("logarithm of zero is undefined in GF(256)")]
    LogOfZero,

    /// Caller-supplied parameter out of range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
