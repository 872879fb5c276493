//! Algebraic engines over GF(2^8)
//!
//! - Exp/log tables built once from a verified primitive element
//! - Field arithmetic as table lookups
//! - Polynomials as owned coefficient vectors, lowest degree first

mod field;
mod polynomial;
mod tables;

pub use field::{FieldConfig, FiniteField};
pub use polynomial::{CoefficientOrder, Polynomial};
pub use tables::{carryless_mul, ExpLogTables, FIELD_ORDER, GROUP_ORDER};
