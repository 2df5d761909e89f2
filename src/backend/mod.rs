//! Architecture-specific implementation of the finite field.
//!
//! This module provides the structure that implements the field of
//! integers modulo 2^255 - 19. The following properties apply:
//!
//!  - An instance encapsulates a field element.
//!
//!  - The constant values `Self::ZERO`, `Self::ONE` and
//!    `Self::MINUS_ONE` contain the elements of value 0, 1 and -1,
//!    respectively.
//!
//!  - Usual arithmetic operators can be used on field elements (`+`,
//!    `-`, `*`, `/`, and the compound assignments `+=`, `-=`, `*=` and
//!    `/=`). Division by zero is tolerated, and yields zero (regardless
//!    of the dividend). Operators can use both the raw type, and
//!    references thereof. Additions are limb-wise and do not propagate
//!    carries; see the limb range discipline documented in the
//!    implementation.
//!
//!  - Function `set_square(&mut self)` squares a field element (in
//!    place). Corresponding function `square(self) -> Self` returns the
//!    result as a new instance. These functions are somewhat faster than
//!    general multiplications. Sequences of multiple squarings can be
//!    performed with `xsquare(self, n: u32)`. The doubled square
//!    (`2*x^2`, as used in point doubling formulas) is provided by
//!    `set_square2()` / `square2()`.
//!
//!  - Function `set_neg(&mut self)` negates the instance on which it is
//!    applied.
//!
//!  - Function `set_cond(&mut self, a: &Self, ctl: u32)` sets the
//!    instance to the value of the other instance `a` if `ctl` is equal
//!    to 1, or leaves the instance value unmodified if `ctl` is equal
//!    to 0. It is constant-time. Similarly, `select(a0, a1, ctl)`
//!    returns a copy of `a0` (if `ctl` is 0) or `a1` (if `ctl` is 1),
//!    and `cswap(a, b, ctl)` conditionally exchanges two elements.
//!    For all of these, `ctl` MUST be 0 or 1; no other value may be
//!    used.
//!
//!  - Encoding (`encode32()`) always produces the canonical 32-byte
//!    little-endian representation of the element. Decoding is lenient
//!    by default (`decode32()` masks the top bit and accepts values not
//!    lower than the modulus); `decode32_canonical()` additionally
//!    reports, in constant time, whether the encoding was canonical.

// Only a 64-bit backend is provided: the radix-2^51 representation
// relies on 64x64->128 multiplications being available and
// constant-time, which is not the case on the 32-bit targets this
// technique would otherwise run on.
#[cfg(target_pointer_width = "64")]
pub mod w64;

#[cfg(target_pointer_width = "64")]
pub use w64::GF25519;

#[cfg(not(target_pointer_width = "64"))]
compile_error!("only 64-bit targets are supported");
