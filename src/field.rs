//! Finite field.
//!
//! This module defines the field GF(2^255-19), used as base field by
//! Curve25519 and Edwards25519. It is merely a re-export of the
//! backend-provided `GF25519` type; see the `backend` module
//! documentation for the contract fulfilled by that type.

pub use crate::backend::GF25519;
