use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use core::convert::TryFrom;

use super::{umull, umull_acc, sgnw};

#[derive(Clone, Copy, Debug)]
pub struct GF25519([u64; 5]);

// 2^51 - 1
const M51: u64 = 0x0007FFFFFFFFFFFF;

impl GF25519 {

    // INTERNAL FORMAT
    // ===============
    //
    // Value is split over five unsigned limbs, in base 2^51. If the limbs
    // are y0 to y4, then the value is:
    //   y0 + y1*2^51 + y2*2^102 + y3*2^153 + y4*2^204
    // The value is implicitly considered modulo q = 2^255 - 19.
    //
    // Limbs are nominally lower than 2^51 ("reduced"); operations accept
    // and produce limbs that may exceed that bound ("loose"), under the
    // following discipline:
    //
    //  - Decoding and normalization produce limbs below 2^51.
    //  - Multiplications and squarings produce limbs below 2^51 + 2^16,
    //    and accept operands with limbs up to 2^54.
    //  - Additions are pure limb-wise sums: each output limb may be one
    //    bit wider than the widest input limb. Since multiplications
    //    require limbs below 2^54, only short chains of unreduced
    //    additions are permitted between reducing operations; callers
    //    must not accumulate long addition chains.
    //  - Subtractions first propagate carries in the subtrahend (bringing
    //    its limbs below 2^51), then add 2*q limb-wise before
    //    subtracting, so that no limb ever wraps below zero; output limbs
    //    are at most 2^52 plus the minuend's limb excess.
    //
    // For multiplications, the schoolbook 5x5 product would yield
    // coefficients r0..r8; coefficients r5..r8 are folded back into
    // r0..r3 during accumulation, using 2^255 = 19 mod q: any partial
    // product a_i*b_j with i+j >= 5 has one operand pre-multiplied
    // by 19. Each of the five remaining coefficients is accumulated over
    // 128 bits, kept as two 64-bit halves. With operand limbs below
    // 2^54, a coefficient is at most (1 + 4*19)*2^108 < 2^115, so its
    // high half is below 2^51 and the subsequent left-shift by 13 loses
    // no bits.
    //
    // The carry pass after accumulation aligns the 64-bit register
    // split to the 51-bit limb split: the high half of each coefficient
    // is shifted left by 13 (= 64 - 51) while receiving the top bits of
    // the low half, the low half is masked to 51 bits, and the shifted
    // high half is added into the next coefficient; the top coefficient
    // wraps around into r0 times 19. A second shift-51 carry pass then
    // brings every limb below 2^51 plus a small excess (at most 19*2^13).

    // Element encoding length (in bytes); always 32 bytes.
    pub const ENC_LEN: usize = 32;

    // Modulus q in base 2^64 (low-to-high order).
    pub const MODULUS: [u64; 4] = [
        0xFFFFFFFFFFFFFFED,
        0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF,
        0x7FFFFFFFFFFFFFFF,
    ];

    pub const ZERO: GF25519 = GF25519([ 0, 0, 0, 0, 0 ]);
    pub const ONE: GF25519 = GF25519([ 1, 0, 0, 0, 0 ]);
    pub const MINUS_ONE: GF25519 = GF25519([
        0x0007FFFFFFFFFFEC,
        0x0007FFFFFFFFFFFF,
        0x0007FFFFFFFFFFFF,
        0x0007FFFFFFFFFFFF,
        0x0007FFFFFFFFFFFF,
    ]);

    // Modulus q, over 51-bit limbs.
    const MOD_M51: [u64; 5] = [
        0x0007FFFFFFFFFFED,
        0x0007FFFFFFFFFFFF,
        0x0007FFFFFFFFFFFF,
        0x0007FFFFFFFFFFFF,
        0x0007FFFFFFFFFFFF,
    ];

    // 2*q, with limb values up to 52 bits. Adding these limbs to any
    // reduced or loose operand makes every limb at least as large as the
    // corresponding limb of a carry-propagated value, which is how
    // subtraction avoids unsigned underflow.
    const DMOD_M51: [u64; 5] = [
        0x000FFFFFFFFFFFDA,
        0x000FFFFFFFFFFFFE,
        0x000FFFFFFFFFFFFE,
        0x000FFFFFFFFFFFFE,
        0x000FFFFFFFFFFFFE,
    ];

    // Create an element from a 256-bit value (implicitly reduced modulo
    // the field order) provided as four 64-bit limbs (in low-to-high order).
    pub const fn w64le(x0: u64, x1: u64, x2: u64, x3: u64) -> Self {
        // The top bit wraps around into +19; limb 0 may thus slightly
        // exceed 2^51 - 1, which all operations tolerate.
        let y0 = (x0 & M51) + (19 & sgnw(x3));
        let y1 = (x0 >> 51) | ((x1 << 13) & M51);
        let y2 = (x1 >> 38) | ((x2 << 26) & M51);
        let y3 = (x2 >> 25) | ((x3 << 39) & M51);
        let y4 = (x3 >> 12) & M51;
        Self([ y0, y1, y2, y3, y4 ])
    }

    // Create an element from a 256-bit value (implicitly reduced modulo
    // the field order) provided as four 64-bit limbs (in high-to-low order).
    pub const fn w64be(x3: u64, x2: u64, x1: u64, x0: u64) -> Self {
        Self::w64le(x0, x1, x2, x3)
    }

    // Create an element by converting the provided integer.
    #[inline(always)]
    pub fn from_u32(x: u32) -> Self {
        Self::w64le(x as u64, 0, 0, 0)
    }

    // Create an element by converting the provided integer.
    #[inline(always)]
    pub fn from_u64(x: u64) -> Self {
        Self::w64le(x, 0, 0, 0)
    }

    // Set this value to the provided limbs, with carry propagation: on
    // output, limbs 1 to 4 fit on 51 bits, and limb 0 may keep a small
    // excess (at most 19*2^13) from the top wraparound.
    #[inline(always)]
    fn set_carry_propagate(&mut self,
        d0: u64, d1: u64, d2: u64, d3: u64, d4: u64)
    {
        let d1 = d1 + (d0 >> 51);
        let d0 = d0 & M51;
        let d2 = d2 + (d1 >> 51);
        let d1 = d1 & M51;
        let d3 = d3 + (d2 >> 51);
        let d2 = d2 & M51;
        let d4 = d4 + (d3 >> 51);
        let d3 = d3 & M51;
        let d0 = d0 + 19 * (d4 >> 51);
        let d4 = d4 & M51;
        self.0 = [ d0, d1, d2, d3, d4 ];
    }

    // Limb-wise addition; carries are not propagated. See the format
    // notes above for the rules on chaining unreduced additions.
    #[inline]
    fn set_add(&mut self, rhs: &Self) {
        self.0[0] += rhs.0[0];
        self.0[1] += rhs.0[1];
        self.0[2] += rhs.0[2];
        self.0[3] += rhs.0[3];
        self.0[4] += rhs.0[4];
    }

    #[inline]
    fn set_sub(&mut self, rhs: &Self) {
        // Bring the subtrahend's limbs below 2^51 (limb 0 may keep a
        // small excess from the top wraparound). This would not be
        // needed for a reduced operand.
        let mut t = *rhs;
        let [t0, t1, t2, t3, t4] = t.0;
        t.set_carry_propagate(t0, t1, t2, t3, t4);

        // Limbs are unsigned, so we add 2*q limb-wise before
        // subtracting; every 2*q limb exceeds the corresponding
        // carry-propagated limb, so no subtraction wraps below zero.
        self.0[0] = (self.0[0] + Self::DMOD_M51[0]) - t.0[0];
        self.0[1] = (self.0[1] + Self::DMOD_M51[1]) - t.0[1];
        self.0[2] = (self.0[2] + Self::DMOD_M51[2]) - t.0[2];
        self.0[3] = (self.0[3] + Self::DMOD_M51[3]) - t.0[3];
        self.0[4] = (self.0[4] + Self::DMOD_M51[4]) - t.0[4];
    }

    // Negate this value (in place).
    #[inline]
    pub fn set_neg(&mut self) {
        let mut r = Self::ZERO;
        r.set_sub(self);
        *self = r;
    }

    // Conditionally copy the provided value ('a') into self:
    //  - If ctl == 1, then the value of 'a' is copied into self.
    //  - If ctl == 0, then the value of self is unchanged.
    // ctl MUST be equal to 0 or 1.
    #[inline]
    pub fn set_cond(&mut self, a: &Self, ctl: u32) {
        let cw = (ctl as u64).wrapping_neg();
        self.0[0] ^= cw & (self.0[0] ^ a.0[0]);
        self.0[1] ^= cw & (self.0[1] ^ a.0[1]);
        self.0[2] ^= cw & (self.0[2] ^ a.0[2]);
        self.0[3] ^= cw & (self.0[3] ^ a.0[3]);
        self.0[4] ^= cw & (self.0[4] ^ a.0[4]);
    }

    // Return a value equal to either a0 (if ctl == 0) or a1 (if ctl == 1).
    // ctl MUST be either 0 or 1.
    #[inline(always)]
    pub fn select(a0: &Self, a1: &Self, ctl: u32) -> Self {
        let mut r = *a0;
        r.set_cond(a1, ctl);
        r
    }

    // Conditionally swap two elements: values a and b are exchanged if
    // ctl == 1, or not exchanged if ctl == 0. ctl MUST be either 0 or 1.
    #[inline]
    pub fn cswap(a: &mut Self, b: &mut Self, ctl: u32) {
        let cw = (ctl as u64).wrapping_neg();
        let t = cw & (a.0[0] ^ b.0[0]); a.0[0] ^= t; b.0[0] ^= t;
        let t = cw & (a.0[1] ^ b.0[1]); a.0[1] ^= t; b.0[1] ^= t;
        let t = cw & (a.0[2] ^ b.0[2]); a.0[2] ^= t; b.0[2] ^= t;
        let t = cw & (a.0[3] ^ b.0[3]); a.0[3] ^= t; b.0[3] ^= t;
        let t = cw & (a.0[4] ^ b.0[4]); a.0[4] ^= t; b.0[4] ^= t;
    }

    #[inline(always)]
    fn set_mul(&mut self, rhs: &Self) {
        let (a0, a1, a2, a3, a4) =
            (self.0[0], self.0[1], self.0[2], self.0[3], self.0[4]);
        let (b0, b1, b2, b3, b4) =
            (rhs.0[0], rhs.0[1], rhs.0[2], rhs.0[3], rhs.0[4]);

        // Partial products that would land in coefficients r5..r8 are
        // folded back on the fly: one operand is pre-multiplied by 19
        // and the product is accumulated four coefficients lower
        // (2^255 = 19 mod q).
        let a1_19 = a1 * 19;
        let a2_19 = a2 * 19;
        let a3_19 = a3 * 19;
        let a4_19 = a4 * 19;

        // r0 = a0*b0 + 19*(a1*b4 + a2*b3 + a3*b2 + a4*b1)
        let (r00, r01) = umull(a0, b0);
        let (r00, r01) = umull_acc(r00, r01, a1_19, b4);
        let (r00, r01) = umull_acc(r00, r01, a2_19, b3);
        let (r00, r01) = umull_acc(r00, r01, a3_19, b2);
        let (r00, r01) = umull_acc(r00, r01, a4_19, b1);

        // r1 = a0*b1 + a1*b0 + 19*(a2*b4 + a3*b3 + a4*b2)
        let (r10, r11) = umull(a0, b1);
        let (r10, r11) = umull_acc(r10, r11, a1, b0);
        let (r10, r11) = umull_acc(r10, r11, a2_19, b4);
        let (r10, r11) = umull_acc(r10, r11, a3_19, b3);
        let (r10, r11) = umull_acc(r10, r11, a4_19, b2);

        // r2 = a0*b2 + a1*b1 + a2*b0 + 19*(a3*b4 + a4*b3)
        let (r20, r21) = umull(a0, b2);
        let (r20, r21) = umull_acc(r20, r21, a1, b1);
        let (r20, r21) = umull_acc(r20, r21, a2, b0);
        let (r20, r21) = umull_acc(r20, r21, a3_19, b4);
        let (r20, r21) = umull_acc(r20, r21, a4_19, b3);

        // r3 = a0*b3 + a1*b2 + a2*b1 + a3*b0 + 19*a4*b4
        let (r30, r31) = umull(a0, b3);
        let (r30, r31) = umull_acc(r30, r31, a1, b2);
        let (r30, r31) = umull_acc(r30, r31, a2, b1);
        let (r30, r31) = umull_acc(r30, r31, a3, b0);
        let (r30, r31) = umull_acc(r30, r31, a4_19, b4);

        // r4 = a0*b4 + a1*b3 + a2*b2 + a3*b1 + a4*b0
        let (r40, r41) = umull(a0, b4);
        let (r40, r41) = umull_acc(r40, r41, a1, b3);
        let (r40, r41) = umull_acc(r40, r41, a2, b2);
        let (r40, r41) = umull_acc(r40, r41, a3, b1);
        let (r40, r41) = umull_acc(r40, r41, a4, b0);

        // Align the 64-bit register split of each coefficient to the
        // 51-bit limb split: shift the high half left by 13 while pulling
        // in the top bits of the low half, mask the low half, and add the
        // shifted high half into the next coefficient. The top
        // coefficient wraps around into r0, times 19. Each high half is
        // computed from the not-yet-incremented low half of the same
        // coefficient.
        let r01 = (r01 << 13) | (r00 >> 51);
        let r00 = r00 & M51;
        let r11 = (r11 << 13) | (r10 >> 51);
        let r10 = (r10 & M51) + r01;
        let r21 = (r21 << 13) | (r20 >> 51);
        let r20 = (r20 & M51) + r11;
        let r31 = (r31 << 13) | (r30 >> 51);
        let r30 = (r30 & M51) + r21;
        let r41 = (r41 << 13) | (r40 >> 51);
        let r40 = (r40 & M51) + r31;
        let r00 = r00 + 19 * r41;

        // A second shift-51 pass brings all limbs below 2^51 plus a
        // small excess in limb 0.
        self.set_carry_propagate(r00, r10, r20, r30, r40);
    }

    // Square this value (in place).
    #[inline(always)]
    pub fn set_square(&mut self) {
        let (a0, a1, a2, a3, a4) =
            (self.0[0], self.0[1], self.0[2], self.0[3], self.0[4]);

        // Squaring needs only 15 distinct products. Symmetric cross
        // products are counted twice by pre-doubling one operand; the
        // doubling is merged with the wraparound multiplication by 19
        // where both apply (hence the operands multiplied by 38).

        let a0_2 = a0 << 1;
        let a1_2 = a1 << 1;

        let a1_38 = a1 * 38;
        let a2_38 = a2 * 38;
        let a3_38 = a3 * 38;

        let a3_19 = a3 * 19;
        let a4_19 = a4 * 19;

        // r0 = a0*a0 + 38*(a1*a4 + a2*a3)
        let (r00, r01) = umull(a0, a0);
        let (r00, r01) = umull_acc(r00, r01, a1_38, a4);
        let (r00, r01) = umull_acc(r00, r01, a2_38, a3);

        // r1 = 2*a0*a1 + 38*a2*a4 + 19*a3*a3
        let (r10, r11) = umull(a0_2, a1);
        let (r10, r11) = umull_acc(r10, r11, a2_38, a4);
        let (r10, r11) = umull_acc(r10, r11, a3_19, a3);

        // r2 = 2*a0*a2 + a1*a1 + 38*a3*a4
        let (r20, r21) = umull(a0_2, a2);
        let (r20, r21) = umull_acc(r20, r21, a1, a1);
        let (r20, r21) = umull_acc(r20, r21, a3_38, a4);

        // r3 = 2*a0*a3 + 2*a1*a2 + 19*a4*a4
        let (r30, r31) = umull(a0_2, a3);
        let (r30, r31) = umull_acc(r30, r31, a1_2, a2);
        let (r30, r31) = umull_acc(r30, r31, a4_19, a4);

        // r4 = 2*a0*a4 + 2*a1*a3 + a2*a2
        let (r40, r41) = umull(a0_2, a4);
        let (r40, r41) = umull_acc(r40, r41, a1_2, a3);
        let (r40, r41) = umull_acc(r40, r41, a2, a2);

        // Same reduction as for multiplications.
        let r01 = (r01 << 13) | (r00 >> 51);
        let r00 = r00 & M51;
        let r11 = (r11 << 13) | (r10 >> 51);
        let r10 = (r10 & M51) + r01;
        let r21 = (r21 << 13) | (r20 >> 51);
        let r20 = (r20 & M51) + r11;
        let r31 = (r31 << 13) | (r30 >> 51);
        let r30 = (r30 & M51) + r21;
        let r41 = (r41 << 13) | (r40 >> 51);
        let r40 = (r40 & M51) + r31;
        let r00 = r00 + 19 * r41;

        self.set_carry_propagate(r00, r10, r20, r30, r40);
    }

    // Square this value.
    #[inline(always)]
    pub fn square(self) -> Self {
        let mut r = self;
        r.set_square();
        r
    }

    // Square this value n times (in place).
    #[inline(always)]
    fn set_xsquare(&mut self, n: u32) {
        for _ in 0..n {
            self.set_square();
        }
    }

    // Square this value n times.
    #[inline(always)]
    pub fn xsquare(self, n: u32) -> Self {
        let mut r = self;
        r.set_xsquare(n);
        r
    }

    // Set this value to twice its square (in place). The doubled square
    // appears directly in point doubling formulas.
    #[inline]
    pub fn set_square2(&mut self) {
        self.set_square();
        let r = *self;
        self.set_add(&r);
    }

    // Return twice the square of this value.
    #[inline(always)]
    pub fn square2(self) -> Self {
        let mut r = self;
        r.set_square2();
        r
    }

    // Invert this value; if this value is zero, then it remains equal
    // to zero. This is a Fermat inversion (raise to the power q-2) with
    // the usual addition chain: 254 squarings and 11 multiplications.
    pub fn set_invert(&mut self) {
        let z = *self;
        let z2 = z.square();
        let z9 = z2.xsquare(2) * z;
        let z11 = z9 * z2;
        let x5 = z11.square() * z9;             // z^(2^5 - 1)
        let x10 = x5.xsquare(5) * x5;           // z^(2^10 - 1)
        let x20 = x10.xsquare(10) * x10;        // z^(2^20 - 1)
        let x40 = x20.xsquare(20) * x20;        // z^(2^40 - 1)
        let x50 = x40.xsquare(10) * x10;        // z^(2^50 - 1)
        let x100 = x50.xsquare(50) * x50;       // z^(2^100 - 1)
        let x200 = x100.xsquare(100) * x100;    // z^(2^200 - 1)
        let x250 = x200.xsquare(50) * x50;      // z^(2^250 - 1)
        *self = x250.xsquare(5) * z11;          // z^(2^255 - 21)
    }

    #[inline(always)]
    pub fn invert(self) -> Self {
        let mut r = self;
        r.set_invert();
        r
    }

    fn set_div(&mut self, rhs: &Self) {
        // Division by zero yields zero.
        self.set_mul(&rhs.invert());
    }

    // Fully reduce this value to the unique representative in the
    // 0 to q-1 range (all limbs below 2^51).
    #[inline]
    fn set_normalized(&mut self) {
        // First carry pass: limbs 1 to 4 end up below 2^51; limb 0 may
        // keep a small excess from the top wraparound, so the value is
        // below 2^255 + 19*2^13.
        let [t0, t1, t2, t3, t4] = self.0;
        self.set_carry_propagate(t0, t1, t2, t3, t4);

        // Add 19 and keep only the carry out of bit 255; that carry is 1
        // exactly when the value is at least q = 2^255 - 19.
        let c = (self.0[0] + 19) >> 51;
        let c = (self.0[1] + c) >> 51;
        let c = (self.0[2] + c) >> 51;
        let c = (self.0[3] + c) >> 51;
        let c = (self.0[4] + c) >> 51;

        // Add 19*c, propagate, and drop bit 255; this subtracts q when,
        // and only when, the value was at least q. No branch is taken:
        // the selection is carried entirely by the arithmetic.
        let d0 = self.0[0] + 19 * c;
        let d1 = self.0[1] + (d0 >> 51);
        let d2 = self.0[2] + (d1 >> 51);
        let d3 = self.0[3] + (d2 >> 51);
        let d4 = self.0[4] + (d3 >> 51);
        self.0[0] = d0 & M51;
        self.0[1] = d1 & M51;
        self.0[2] = d2 & M51;
        self.0[3] = d3 & M51;
        self.0[4] = d4 & M51;
    }

    // Encode this value into four 64-bit limbs in little-endian order
    // (fully normalized).
    fn to_limbs64(self) -> [u64; 4] {
        let mut x = self;
        x.set_normalized();
        let x0 = x.0[0] | (x.0[1] << 51);
        let x1 = (x.0[1] >> 13) | (x.0[2] << 38);
        let x2 = (x.0[2] >> 26) | (x.0[3] << 25);
        let x3 = (x.0[3] >> 39) | (x.0[4] << 12);
        [ x0, x1, x2, x3 ]
    }

    // Compare this value with zero (constant-time); returned value is 1
    // if this element is zero, 0 otherwise.
    #[inline]
    pub fn iszero(self) -> u32 {
        // Normalization leaves a unique representation of zero.
        let mut x = self;
        x.set_normalized();
        let t = x.0[0] | x.0[1] | x.0[2] | x.0[3] | x.0[4];
        (((t | t.wrapping_neg()) >> 63) as u32) ^ 1
    }

    // Equality check between two field elements (constant-time);
    // returned value is 1 on equality, 0 otherwise. Both operands may
    // be in loose form.
    #[inline(always)]
    pub fn equals(self, rhs: Self) -> u32 {
        (self - rhs).iszero()
    }

    // Decode 32 bytes (unsigned little-endian). Only the low 255 bits
    // are used: the top bit of the last byte is masked off, and no check
    // is made that the remaining value is lower than q. Values in the
    // q to 2^255-1 range decode to non-canonical representations, which
    // all other operations accept; encoding normalizes them.
    pub fn set_decode32(&mut self, buf: &[u8; 32]) {
        let d0 = u64::from_le_bytes(*<&[u8; 8]>::try_from(&buf[ 0.. 8]).unwrap());
        let d1 = u64::from_le_bytes(*<&[u8; 8]>::try_from(&buf[ 8..16]).unwrap());
        let d2 = u64::from_le_bytes(*<&[u8; 8]>::try_from(&buf[16..24]).unwrap());
        let d3 = u64::from_le_bytes(*<&[u8; 8]>::try_from(&buf[24..32]).unwrap());
        self.0[0] = d0 & M51;
        self.0[1] = (d0 >> 51) | ((d1 << 13) & M51);
        self.0[2] = (d1 >> 38) | ((d2 << 26) & M51);
        self.0[3] = (d2 >> 25) | ((d3 << 39) & M51);
        self.0[4] = (d3 >> 12) & M51;
    }

    // Decode 32 bytes (unsigned little-endian); see set_decode32().
    // This process never fails.
    #[inline(always)]
    pub fn decode32(buf: &[u8; 32]) -> Self {
        let mut r = Self::ZERO;
        r.set_decode32(buf);
        r
    }

    // Decode 32 bytes in unsigned little-endian convention, enforcing
    // canonicity: the returned status is 1 if the bytes encoded an
    // integer in the 0 to q-1 range (top bit of the last byte clear),
    // 0 otherwise. On a non-canonical input the returned element is
    // zero. Constant-time: the status may be used with set_cond().
    // Protocols that mandate rejection of non-canonical encodings should
    // use this function instead of decode32().
    pub fn decode32_canonical(buf: &[u8; 32]) -> (Self, u32) {
        // Decode without masking the top bit; the top limb may use
        // 52 bits.
        let d0 = u64::from_le_bytes(*<&[u8; 8]>::try_from(&buf[ 0.. 8]).unwrap());
        let d1 = u64::from_le_bytes(*<&[u8; 8]>::try_from(&buf[ 8..16]).unwrap());
        let d2 = u64::from_le_bytes(*<&[u8; 8]>::try_from(&buf[16..24]).unwrap());
        let d3 = u64::from_le_bytes(*<&[u8; 8]>::try_from(&buf[24..32]).unwrap());
        let mut r = Self([
            d0 & M51,
            (d0 >> 51) | ((d1 << 13) & M51),
            (d1 >> 38) | ((d2 << 26) & M51),
            (d2 >> 25) | ((d3 << 39) & M51),
            d3 >> 12,
        ]);

        // Try to subtract q from the value; if that does not yield a
        // borrow, then the encoding was not canonical.
        let cc = r.0[0].wrapping_sub(Self::MOD_M51[0]) >> 63;
        let cc = r.0[1].wrapping_sub(Self::MOD_M51[1] + cc) >> 63;
        let cc = r.0[2].wrapping_sub(Self::MOD_M51[2] + cc) >> 63;
        let cc = r.0[3].wrapping_sub(Self::MOD_M51[3] + cc) >> 63;
        let cc = r.0[4].wrapping_sub(Self::MOD_M51[4] + cc) >> 63;

        // Clear the value if not canonical.
        let w = cc.wrapping_neg();
        r.0[0] &= w;
        r.0[1] &= w;
        r.0[2] &= w;
        r.0[3] &= w;
        r.0[4] &= w;

        (r, cc as u32)
    }

    // Encode this value over exactly 32 bytes. Encoding is always
    // canonical (little-endian encoding of the value in the 0 to q-1
    // range, top bit of the last byte always 0), regardless of whether
    // the limbs were in loose or reduced form.
    #[inline(always)]
    pub fn encode32(self) -> [u8; 32] {
        let k = self.to_limbs64();
        let mut d = [0u8; 32];
        d[ 0.. 8].copy_from_slice(&k[0].to_le_bytes());
        d[ 8..16].copy_from_slice(&k[1].to_le_bytes());
        d[16..24].copy_from_slice(&k[2].to_le_bytes());
        d[24..32].copy_from_slice(&k[3].to_le_bytes());
        d
    }
}

// ========================================================================
// Implementations of all the traits needed to use the simple operators
// (+, -, *, /) on field element instances, with or without references.

impl Add<GF25519> for GF25519 {
    type Output = GF25519;

    #[inline(always)]
    fn add(self, other: GF25519) -> GF25519 {
        let mut r = self;
        r.set_add(&other);
        r
    }
}

impl Add<&GF25519> for GF25519 {
    type Output = GF25519;

    #[inline(always)]
    fn add(self, other: &GF25519) -> GF25519 {
        let mut r = self;
        r.set_add(other);
        r
    }
}

impl Add<GF25519> for &GF25519 {
    type Output = GF25519;

    #[inline(always)]
    fn add(self, other: GF25519) -> GF25519 {
        let mut r = *self;
        r.set_add(&other);
        r
    }
}

impl Add<&GF25519> for &GF25519 {
    type Output = GF25519;

    #[inline(always)]
    fn add(self, other: &GF25519) -> GF25519 {
        let mut r = *self;
        r.set_add(other);
        r
    }
}

impl AddAssign<GF25519> for GF25519 {
    #[inline(always)]
    fn add_assign(&mut self, other: GF25519) {
        self.set_add(&other);
    }
}

impl AddAssign<&GF25519> for GF25519 {
    #[inline(always)]
    fn add_assign(&mut self, other: &GF25519) {
        self.set_add(other);
    }
}

impl Div<GF25519> for GF25519 {
    type Output = GF25519;

    #[inline(always)]
    fn div(self, other: GF25519) -> GF25519 {
        let mut r = self;
        r.set_div(&other);
        r
    }
}

impl Div<&GF25519> for GF25519 {
    type Output = GF25519;

    #[inline(always)]
    fn div(self, other: &GF25519) -> GF25519 {
        let mut r = self;
        r.set_div(other);
        r
    }
}

impl Div<GF25519> for &GF25519 {
    type Output = GF25519;

    #[inline(always)]
    fn div(self, other: GF25519) -> GF25519 {
        let mut r = *self;
        r.set_div(&other);
        r
    }
}

impl Div<&GF25519> for &GF25519 {
    type Output = GF25519;

    #[inline(always)]
    fn div(self, other: &GF25519) -> GF25519 {
        let mut r = *self;
        r.set_div(other);
        r
    }
}

impl DivAssign<GF25519> for GF25519 {
    #[inline(always)]
    fn div_assign(&mut self, other: GF25519) {
        self.set_div(&other);
    }
}

impl DivAssign<&GF25519> for GF25519 {
    #[inline(always)]
    fn div_assign(&mut self, other: &GF25519) {
        self.set_div(other);
    }
}

impl Mul<GF25519> for GF25519 {
    type Output = GF25519;

    #[inline(always)]
    fn mul(self, other: GF25519) -> GF25519 {
        let mut r = self;
        r.set_mul(&other);
        r
    }
}

impl Mul<&GF25519> for GF25519 {
    type Output = GF25519;

    #[inline(always)]
    fn mul(self, other: &GF25519) -> GF25519 {
        let mut r = self;
        r.set_mul(other);
        r
    }
}

impl Mul<GF25519> for &GF25519 {
    type Output = GF25519;

    #[inline(always)]
    fn mul(self, other: GF25519) -> GF25519 {
        let mut r = *self;
        r.set_mul(&other);
        r
    }
}

impl Mul<&GF25519> for &GF25519 {
    type Output = GF25519;

    #[inline(always)]
    fn mul(self, other: &GF25519) -> GF25519 {
        let mut r = *self;
        r.set_mul(other);
        r
    }
}

impl MulAssign<GF25519> for GF25519 {
    #[inline(always)]
    fn mul_assign(&mut self, other: GF25519) {
        self.set_mul(&other);
    }
}

impl MulAssign<&GF25519> for GF25519 {
    #[inline(always)]
    fn mul_assign(&mut self, other: &GF25519) {
        self.set_mul(other);
    }
}

impl Neg for GF25519 {
    type Output = GF25519;

    #[inline(always)]
    fn neg(self) -> GF25519 {
        let mut r = self;
        r.set_neg();
        r
    }
}

impl Neg for &GF25519 {
    type Output = GF25519;

    #[inline(always)]
    fn neg(self) -> GF25519 {
        let mut r = *self;
        r.set_neg();
        r
    }
}

impl Sub<GF25519> for GF25519 {
    type Output = GF25519;

    #[inline(always)]
    fn sub(self, other: GF25519) -> GF25519 {
        let mut r = self;
        r.set_sub(&other);
        r
    }
}

impl Sub<&GF25519> for GF25519 {
    type Output = GF25519;

    #[inline(always)]
    fn sub(self, other: &GF25519) -> GF25519 {
        let mut r = self;
        r.set_sub(other);
        r
    }
}

impl Sub<GF25519> for &GF25519 {
    type Output = GF25519;

    #[inline(always)]
    fn sub(self, other: GF25519) -> GF25519 {
        let mut r = *self;
        r.set_sub(&other);
        r
    }
}

impl Sub<&GF25519> for &GF25519 {
    type Output = GF25519;

    #[inline(always)]
    fn sub(self, other: &GF25519) -> GF25519 {
        let mut r = *self;
        r.set_sub(other);
        r
    }
}

impl SubAssign<GF25519> for GF25519 {
    #[inline(always)]
    fn sub_assign(&mut self, other: GF25519) {
        self.set_sub(&other);
    }
}

impl SubAssign<&GF25519> for GF25519 {
    #[inline(always)]
    fn sub_assign(&mut self, other: &GF25519) {
        self.set_sub(other);
    }
}

// ========================================================================
