//! Secret data types with guaranteed zeroization

use core::fmt;
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Fixed-size secret buffer that is wiped on drop
///
/// Equality is constant-time and `Debug` never prints the contents.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBuffer<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> SecretBuffer<N> {
    /// Create a new secret buffer with the given data
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create a zeroed secret buffer
    pub fn zeroed() -> Self {
        Self { data: [0u8; N] }
    }

    /// Copy a slice into a new buffer; `None` if the length is not `N`
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() != N {
            return None;
        }
        let mut data = [0u8; N];
        data.copy_from_slice(slice);
        Some(Self { data })
    }

    /// Get the length of the buffer
    pub fn len(&self) -> usize {
        N
    }

    /// Check if the buffer is empty (only for `N == 0`)
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Borrow the contents as a fixed-size array
    pub fn as_array(&self) -> &[u8; N] {
        &self.data
    }
}

impl<const N: usize> AsRef<[u8]> for SecretBuffer<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> AsMut<[u8]> for SecretBuffer<N> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl<const N: usize> ConstantTimeEq for SecretBuffer<N> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.data[..].ct_eq(&other.data[..])
    }
}

impl<const N: usize> PartialEq for SecretBuffer<N> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<const N: usize> Eq for SecretBuffer<N> {}

impl<const N: usize> fmt::Debug for SecretBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBuffer<{}>([REDACTED])", N)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_buffer_zeroize() {
        let mut buf = SecretBuffer::new([0xAAu8; 16]);
        buf.zeroize();
        assert_eq!(buf.as_array(), &[0u8; 16]);
    }

    #[test]
    fn test_secret_buffer_from_slice() {
        assert!(SecretBuffer::<4>::from_slice(&[1, 2, 3]).is_none());
        let buf = SecretBuffer::<4>::from_slice(&[1, 2, 3, 4]).unwrap();
        assert_eq!(buf.as_ref(), &[1, 2, 3, 4]);
        assert_eq!(buf, SecretBuffer::new([1, 2, 3, 4]));
    }

    #[test]
    fn test_debug_redacts() {
        let buf = SecretBuffer::new([0x42u8; 8]);
        assert_eq!(format!("{:?}", buf), "SecretBuffer<8>([REDACTED])");
    }
}
