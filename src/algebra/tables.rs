//! Discrete log / antilog tables for GF(2^8)
//!
//! Built by walking 1, α, α^2, ..., α^254 with shift-and-reduce
//! multiplication. Construction fails unless all 255 powers are distinct
//! nonzero bytes, so a wrong (polynomial, α) pair never yields a table.

use crate::{Result, RsError};

/// Number of field elements
pub const FIELD_ORDER: usize = 256;

/// Order of the multiplicative group (nonzero elements)
pub const GROUP_ORDER: usize = 255;

/// Multiply two bytes as polynomials over GF(2), reducing by `generating_poly`
///
/// Russian peasant algorithm. Independent of any table, so it serves both
/// as the table builder and as an oracle for table-driven multiplication.
pub fn carryless_mul(a: u8, b: u8, generating_poly: u16) -> u8 {
    let mut result = 0u16;
    let mut a_val = a as u16;
    let mut b_val = b as u16;

    while b_val > 0 {
        if b_val & 1 != 0 {
            result ^= a_val;
        }
        a_val <<= 1;
        if a_val & 0x100 != 0 {
            a_val ^= generating_poly;
        }
        b_val >>= 1;
    }

    result as u8
}

/// Precomputed exp/log tables
///
/// Invariants: `exp[log[e]] == e` for every nonzero `e`, `log[1] == 0`.
/// `log[0]` is a placeholder and never read by field operations.
#[derive(Clone)]
pub struct ExpLogTables {
    /// exp[i] = α^i for i in 0..255
    exp: [u8; GROUP_ORDER],
    /// log[α^i] = i
    log: [u8; FIELD_ORDER],
}

impl ExpLogTables {
    /// Build and verify tables for the given field convention
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` if `generating_poly` is not of degree 8
    /// - `FieldConfiguration` if `primitive_element` has period below 255
    pub fn build(generating_poly: u16, primitive_element: u8) -> Result<Self> {
        if generating_poly >> 8 != 1 {
            return Err(RsError::InvalidParameter(format!(
                "generating polynomial {:#05x} is not of degree 8",
                generating_poly
            )));
        }

        let mut exp = [0u8; GROUP_ORDER];
        let mut log = [0u8; FIELD_ORDER];
        let mut seen = [false; FIELD_ORDER];

        let fail = |period: usize| RsError::FieldConfiguration {
            generating_poly,
            primitive_element,
            period,
        };

        let mut x = 1u8;
        for i in 0..GROUP_ORDER {
            if x == 0 || seen[x as usize] {
                return Err(fail(i));
            }
            seen[x as usize] = true;
            exp[i] = x;
            log[x as usize] = i as u8;
            x = carryless_mul(x, primitive_element, generating_poly);
        }

        // α^255 must close the cycle
        if x != 1 {
            return Err(fail(GROUP_ORDER));
        }

        tracing::debug!(
            generating_poly = %format!("{:#05x}", generating_poly),
            primitive_element,
            "built GF(256) exp/log tables"
        );

        Ok(Self { exp, log })
    }

    /// α^i, with i reduced modulo 255
    #[inline]
    pub fn exp(&self, i: usize) -> u8 {
        self.exp[i % GROUP_ORDER]
    }

    /// Discrete log of a nonzero element (returns 0 for 0; callers must guard)
    #[inline]
    pub fn log(&self, e: u8) -> u8 {
        self.log[e as usize]
    }
}

impl std::fmt::Debug for ExpLogTables {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpLogTables")
            .field("exp[..8]", &&self.exp[..8])
            .field("log[..8]", &&self.log[..8])
            .finish()
    }
}
