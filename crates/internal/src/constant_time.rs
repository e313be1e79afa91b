//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Slices of different length compare unequal; the length itself is not
/// treated as secret.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// Constant-time selection: `a` when `choice` is 0, `b` when it is 1
#[inline]
pub fn ct_select<T>(a: &T, b: &T, choice: Choice) -> T
where
    T: ConditionallySelectable,
{
    T::conditional_select(a, b, choice)
}

/// Swap two limb arrays when `choice` is 1, touching every limb either way
#[inline]
pub fn ct_swap<const N: usize>(a: &mut [u32; N], b: &mut [u32; N], choice: Choice) {
    for (x, y) in a.iter_mut().zip(b.iter_mut()) {
        u32::conditional_swap(x, y, choice);
    }
}

/// XOR two equal-size byte arrays
pub fn ct_xor<const N: usize>(a: &[u8; N], b: &[u8; N]) -> [u8; N] {
    let mut result = [0u8; N];
    for ((r, x), y) in result.iter_mut().zip(a.iter()).zip(b.iter()) {
        *r = x ^ y;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ct_eq_lengths_and_content() {
        assert!(ct_eq([1u8, 2, 3], [1u8, 2, 3]));
        assert!(!ct_eq([1u8, 2, 3], [1u8, 2, 4]));
        assert!(!ct_eq([1u8, 2], [1u8, 2, 3]));
    }

    #[test]
    fn test_ct_swap() {
        let mut a = [1u32, 2, 3];
        let mut b = [4u32, 5, 6];
        ct_swap(&mut a, &mut b, Choice::from(0));
        assert_eq!(a, [1, 2, 3]);
        ct_swap(&mut a, &mut b, Choice::from(1));
        assert_eq!(a, [4, 5, 6]);
        assert_eq!(b, [1, 2, 3]);
    }

    #[test]
    fn test_ct_select_and_xor() {
        assert_eq!(ct_select(&7u32, &9u32, Choice::from(0)), 7);
        assert_eq!(ct_select(&7u32, &9u32, Choice::from(1)), 9);
        assert_eq!(ct_xor(&[0xF0u8, 0x0F], &[0xFF, 0xFF]), [0x0F, 0xF0]);
    }
}
