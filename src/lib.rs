//! Gf25519 is a Rust implementation of the field of integers modulo
//! the prime 2^255 - 19.
//!
//! This is the base field of Curve25519 and Edwards25519; every curve
//! operation (point doubling and addition, scalar multiplication,
//! signature generation and verification) ultimately reduces to
//! sequences of additions, multiplications and squarings in this field.
//! The library provides exactly that layer: an efficient and secure
//! (constant-time) implementation, with portable code, and with a
//! convenient API so that field elements may be used in straightforward
//! expressions with normal arithmetic operators.
//!
//! Field elements are held in a 5-limb radix-2^51 representation (the
//! amd64-51 representation from the original Ed25519 software), which
//! makes carries cheap on 64-bit hardware: additions are pure limb-wise
//! sums, and the reduction after a multiplication is interleaved with
//! the multiplication itself through the identity 2^255 = 19 mod q.
//! Point representations, the curve group law, scalar arithmetic and
//! signature protocols are out of scope; they are meant to consume this
//! crate's field type as an opaque arithmetic unit.
//!
//! # Usage
//!
//! The library is `no_std`; it relies only on `core` and performs no
//! heap allocation. The field type is exported as `field::GF25519`.
//!
//! # Conventions
//!
//! All implemented functions are strictly constant-time: instruction
//! sequence and memory-access pattern depend only on the fixed
//! representation width, never on the values of the processed elements.
//! In order to avoid unwanted side-channel leaks, Booleans are avoided
//! (compilers tend to "optimize" things a bit too eagerly when handling
//! `bool` values). All functions that return or use a potentially
//! secret Boolean value use the `u32` type; the convention is that 1
//! means "true", and 0 means "false". No other value shall be used, for
//! they would lead to unpredictable results. Similarly, the `Eq` or
//! `PartialEq` traits are not implemented; comparisons go through the
//! constant-time `equals()` and `iszero()` functions.
//!
//! Algebraic operations on field elements are performed with the usual
//! operators (e.g. `+`); appropriate traits are defined so that
//! structure types and pointers to structure types can be used more or
//! less interchangeably. Throughout the code, functions that modify the
//! object on which they are called have a name in `set_*()` (e.g. for a
//! field element `x`, `x.set_square()` replaces the value with its
//! square in place, while `x.square()` leaves `x` unmodified and
//! returns the square as a new instance).
//!
//! Additions deserve a specific warning: they are limb-wise and do not
//! propagate carries, so that they compile to five additions and
//! nothing else. Every other operation tolerates such unreduced
//! operands, but limbs must stay below 2^54; long sequences of
//! additions without an intervening multiplication, squaring,
//! subtraction or encoding are therefore not allowed.

#![no_std]

pub mod backend;
pub mod field;
