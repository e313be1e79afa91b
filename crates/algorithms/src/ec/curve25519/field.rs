//! Curve25519 field arithmetic implementation

use crate::ec::curve25519::constants::{
    adc8, bytes_to_limbs_le, limbs_to_bytes_le, sbb8, CURVE25519_FIELD_ELEMENT_SIZE, NLIMBS,
};
use crate::error::{Error, Result};
use montcrypt_internal::ct_swap;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Quadratic character of a field element, as computed by the Legendre symbol
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Legendre {
    /// Non-zero square
    Residue,
    /// The element is zero
    Zero,
    /// Not a square
    NonResidue,
}

/// Curve25519 field element representing values in 𝔽ₚ, where
/// p = 2²⁵⁵ − 19.
/// Internally stored as 8 little‐endian 32‐bit limbs, always canonical (< p).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldElement(pub(crate) [u32; NLIMBS]);

impl FieldElement {
    /* ---------------------------------------------------------------- */
    /*  Field constants (little‐endian 32‐bit limbs)                    */
    /* ---------------------------------------------------------------- */

    /// p = 2²⁵⁵ − 19
    pub(crate) const MOD_LIMBS: [u32; NLIMBS] = [
        0xFFFF_FFED, // least significant
        0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF,
        0x7FFF_FFFF, // most significant
    ];

    /// p − 2, the Fermat inversion exponent
    const P_MINUS_2: [u32; NLIMBS] = [
        0xFFFF_FFEB, 0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF,
        0x7FFF_FFFF,
    ];

    /// (p − 1) / 2, the Euler criterion exponent
    const LEGENDRE_EXP: [u32; NLIMBS] = [
        0xFFFF_FFF6, 0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF,
        0x3FFF_FFFF,
    ];

    /// p − 1 = q · 2^s with q odd
    const TS_S: u32 = 2;

    /// q = (p − 1) / 4
    const TS_Q: [u32; NLIMBS] = [
        0xFFFF_FFFB, 0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF,
        0x1FFF_FFFF,
    ];

    /// (q + 1) / 2
    const TS_Q_PLUS_1_HALF: [u32; NLIMBS] = [
        0xFFFF_FFFE, 0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF,
        0x0FFF_FFFF,
    ];

    /* ================================================================= */
    /*  Tiny helpers                                                     */
    /* ================================================================= */

    /// Build a field element from a small literal (`0 ≤ n < 2³²`)
    #[inline]
    pub const fn from_u32(n: u32) -> Self {
        let mut limbs = [0u32; NLIMBS];
        limbs[0] = n;
        FieldElement(limbs)
    }

    /// The additive identity: 0
    #[inline]
    pub const fn zero() -> Self {
        FieldElement([0u32; NLIMBS])
    }

    /// The multiplicative identity: 1
    #[inline]
    pub const fn one() -> Self {
        Self::from_u32(1)
    }

    /// Create a field element from little‐endian bytes.
    /// Rejects encodings of values ≥ p instead of reducing them.
    pub fn from_bytes(bytes: &[u8; CURVE25519_FIELD_ELEMENT_SIZE]) -> Result<Self> {
        let limbs = bytes_to_limbs_le(bytes);
        let (_, borrow) = sbb8(&limbs, &Self::MOD_LIMBS);
        if borrow == 0 {
            return Err(Error::param("FieldElement Curve25519", "Value ≥ modulus"));
        }
        Ok(FieldElement(limbs))
    }

    /// Build from bytes already known to be canonical (curve constants)
    pub(crate) const fn from_bytes_unchecked(bytes: &[u8; CURVE25519_FIELD_ELEMENT_SIZE]) -> Self {
        FieldElement(bytes_to_limbs_le(bytes))
    }

    /// Convert this field element into little‐endian bytes.
    pub fn to_bytes(&self) -> [u8; CURVE25519_FIELD_ELEMENT_SIZE] {
        limbs_to_bytes_le(&self.0)
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> bool {
        self.ct_eq(&Self::zero()).into()
    }

    /// Return true if the element is odd (least‐significant bit = 1).
    pub fn is_odd(&self) -> bool {
        (self.0[0] & 1) == 1
    }

    /* ================================================================= */
    /*  Ring operations                                                  */
    /* ================================================================= */

    /// Constant‐time addition: (self + other) mod p
    pub fn add(&self, other: &Self) -> Self {
        let (sum, carry) = adc8(&self.0, &other.0);

        // If carry = 1 or sum >= p, subtract p
        let (reduced, borrow) = sbb8(&sum, &Self::MOD_LIMBS);
        let need_reduce = (carry | (borrow ^ 1)) & 1;

        Self::select_limbs(&sum, &reduced, Choice::from(need_reduce as u8))
    }

    /// Constant‐time subtraction: (self - other) mod p
    pub fn sub(&self, other: &Self) -> Self {
        let (diff, borrow) = sbb8(&self.0, &other.0);
        let (diff_plus_p, _) = adc8(&diff, &Self::MOD_LIMBS);
        Self::select_limbs(&diff, &diff_plus_p, Choice::from(borrow as u8))
    }

    /// Additive inverse: p − self, or zero for zero
    pub fn negate(&self) -> Self {
        Self::zero().sub(self)
    }

    /// Field multiplication: (self * other) mod p
    /// Schoolbook 8×8 → 16‐limb product, then reduction
    pub fn mul(&self, other: &Self) -> Self {
        // Phase 1: 8×8 → 16 128-bit partial accumulators
        let mut t = [0u128; NLIMBS * 2];
        for i in 0..NLIMBS {
            for j in 0..NLIMBS {
                t[i + j] += (self.0[i] as u128) * (other.0[j] as u128);
            }
        }

        // Phase 2: carry‐propagate into 16 × u32 limbs
        let mut wide = [0u32; NLIMBS * 2];
        let mut carry: u128 = 0;
        for (w, &acc) in wide.iter_mut().zip(t.iter()) {
            let v = acc + carry;
            *w = v as u32;
            carry = v >> 32;
        }

        Self::reduce_wide(wide)
    }

    /// Field squaring: (self²) mod p
    #[inline(always)]
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Multiply by a small constant (the ladder's a24, codec multipliers)
    pub fn mul_small(&self, k: u32) -> Self {
        let mut wide = [0u32; NLIMBS * 2];
        let mut carry = 0u64;
        for (w, &limb) in wide.iter_mut().zip(self.0.iter()) {
            let v = (limb as u64) * (k as u64) + carry;
            *w = v as u32;
            carry = v >> 32;
        }
        wide[NLIMBS] = carry as u32;
        Self::reduce_wide(wide)
    }

    /* ================================================================= */
    /*  Exponentiation, inversion, square roots                          */
    /* ================================================================= */

    /// self^exp for a secret exponent (little-endian limbs).
    ///
    /// Every bit costs one squaring and one multiplication; the product is
    /// kept or discarded with a constant-time select.
    pub fn pow(&self, exp: &[u32; NLIMBS]) -> Self {
        let mut result = Self::one();
        for i in (0..NLIMBS * 32).rev() {
            result = result.square();
            let product = result.mul(self);
            let bit = Choice::from(((exp[i / 32] >> (i % 32)) & 1) as u8);
            result = Self::conditional_select(&result, &product, bit);
        }
        result
    }

    /// self^exp for a public exponent; skips the multiplications for zero bits
    pub fn pow_vartime(&self, exp: &[u32; NLIMBS]) -> Self {
        let mut result = Self::one();
        for i in (0..NLIMBS * 32).rev() {
            result = result.square();
            if (exp[i / 32] >> (i % 32)) & 1 == 1 {
                result = result.mul(self);
            }
        }
        result
    }

    /// Compute multiplicative inverse via Fermat: a^(p-2) mod p
    pub fn invert(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::NoInverse {
                context: "FieldElement Curve25519",
            });
        }
        Ok(self.pow(&Self::P_MINUS_2))
    }

    /// Legendre symbol via Euler's criterion: self^((p−1)/2)
    pub fn legendre(&self) -> Legendre {
        let r = self.pow_vartime(&Self::LEGENDRE_EXP);
        if r.is_zero() {
            Legendre::Zero
        } else if r == Self::one() {
            Legendre::Residue
        } else {
            Legendre::NonResidue
        }
    }

    /// Square root by Tonelli–Shanks.
    ///
    /// This is the general algorithm, not the p ≡ 5 (mod 8) shortcut. It runs
    /// in variable time and must only see public inputs such as encoded
    /// messages. Returns one of the two roots; the other is its negation.
    pub fn sqrt(&self) -> Option<Self> {
        match self.legendre() {
            Legendre::Zero => return Some(Self::zero()),
            Legendre::NonResidue => return None,
            Legendre::Residue => {}
        }

        let one = Self::one();
        let z = Self::smallest_non_residue();

        let mut m = Self::TS_S;
        let mut c = z.pow_vartime(&Self::TS_Q);
        let mut t = self.pow_vartime(&Self::TS_Q);
        let mut r = self.pow_vartime(&Self::TS_Q_PLUS_1_HALF);

        while t != one {
            // least i in (0, m) with t^(2^i) = 1
            let mut i = 0u32;
            let mut t2i = t;
            while t2i != one {
                t2i = t2i.square();
                i += 1;
                if i == m {
                    return None;
                }
            }

            let mut b = c;
            for _ in 0..(m - i - 1) {
                b = b.square();
            }
            m = i;
            c = b.square();
            t = t.mul(&c);
            r = r.mul(&b);
        }

        if r.square() == *self {
            Some(r)
        } else {
            None
        }
    }

    /// First quadratic non-residue found by counting up from 2
    fn smallest_non_residue() -> Self {
        let mut z = Self::from_u32(2);
        while z.legendre() != Legendre::NonResidue {
            z = z.add(&Self::one());
        }
        z
    }

    /// Integer division of the canonical value by a small divisor.
    /// Returns (quotient, remainder).
    pub fn div_rem_small(&self, divisor: u32) -> Result<(Self, u32)> {
        if divisor == 0 {
            return Err(Error::param("divisor", "must be non-zero"));
        }
        let d = divisor as u64;
        let mut q = [0u32; NLIMBS];
        let mut rem = 0u64;
        for i in (0..NLIMBS).rev() {
            let cur = (rem << 32) | self.0[i] as u64;
            q[i] = (cur / d) as u32;
            rem = cur % d;
        }
        Ok((FieldElement(q), rem as u32))
    }

    /* ================================================================= */
    /*  Private helper methods (constant‐time arithmetic)                */
    /* ================================================================= */

    /// Constant‐time select: if flag == 0 return a else return b
    fn select_limbs(a: &[u32; NLIMBS], b: &[u32; NLIMBS], flag: Choice) -> Self {
        let mut out = [0u32; NLIMBS];
        for ((a_limb, b_limb), out_limb) in a.iter().zip(b.iter()).zip(out.iter_mut()) {
            *out_limb = u32::conditional_select(a_limb, b_limb, flag);
        }
        FieldElement(out)
    }

    /// Reduce a 16-word (512-bit) value modulo p = 2²⁵⁵ − 19.
    ///
    /// Folds the high half with 2²⁵⁶ ≡ 38 (mod p), folds the residual carry
    /// twice, then applies two conditional subtractions of p.
    fn reduce_wide(t: [u32; NLIMBS * 2]) -> FieldElement {
        // step 1: r = low + 38·high
        let mut r = [0u32; NLIMBS];
        let mut carry = 0u64;
        for i in 0..NLIMBS {
            let v = t[i] as u64 + 38 * (t[i + NLIMBS] as u64) + carry;
            r[i] = v as u32;
            carry = v >> 32;
        }

        // step 2: carry ≤ 39 stands for carry·2²⁵⁶ ≡ 38·carry. The first fold
        // leaves at most 1, the second leaves nothing.
        for _ in 0..2 {
            let mut c = 38 * carry;
            for limb in r.iter_mut() {
                let v = *limb as u64 + c;
                *limb = v as u32;
                c = v >> 32;
            }
            carry = c;
        }

        // step 3: r < 2²⁵⁶ = 2p + 38, so two conditional subtractions suffice
        for _ in 0..2 {
            let (sub, borrow) = sbb8(&r, &Self::MOD_LIMBS);
            r = Self::select_limbs(&r, &sub, Choice::from((borrow ^ 1) as u8)).0;
        }

        FieldElement(r)
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::select_limbs(&a.0, &b.0, choice)
    }

    fn conditional_swap(a: &mut Self, b: &mut Self, choice: Choice) {
        ct_swap(&mut a.0, &mut b.0, choice);
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl Default for FieldElement {
    fn default() -> Self {
        Self::zero()
    }
}
