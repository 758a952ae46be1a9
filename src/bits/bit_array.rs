//! Immutable packed bit array.

use crate::error::{EvoError, Result};
use num_bigint::BigUint;
use std::fmt;
use std::str::FromStr;

/// A fixed-length sequence of bits packed into bytes.
///
/// Bit `0` is the least significant bit of the logical value and bit
/// `len() - 1` the most significant one. Storage is `ceil(len / 8)` bytes
/// whose unused high bits are always zero, so the derived equality and
/// hash compare exactly the logical bits and the length.
///
/// Instances are created once and never mutated afterwards.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct BitArray {
    data: Vec<u8>,
    len: usize,
}

#[allow(clippy::len_without_is_empty)]
impl BitArray {
    /// Creates a bit array from the bits `[start, end)` of `bytes`.
    ///
    /// The selected bits are re-indexed from zero: bit `start` of the
    /// source becomes bit `0` of the result.
    ///
    /// # Errors
    /// Returns [`EvoError::InvalidRange`] if `start >= end` or `end`
    /// exceeds `bytes.len() * 8`.
    pub fn from_bytes_range(bytes: &[u8], start: usize, end: usize) -> Result<Self> {
        let capacity = bytes.len() * 8;
        if start >= end || end > capacity {
            return Err(EvoError::InvalidRange {
                start,
                end,
                capacity,
            });
        }

        let len = end - start;
        let offset = start / 8;
        let shift = start % 8;

        let mut data = vec![0u8; byte_len(len)];
        for (i, byte) in data.iter_mut().enumerate() {
            let lo = bytes[offset + i] >> shift;
            let hi = if shift == 0 {
                0
            } else {
                bytes.get(offset + i + 1).map_or(0, |&b| b << (8 - shift))
            };
            *byte = lo | hi;
        }
        clear_unused(&mut data, len);

        Ok(Self { data, len })
    }

    /// Creates a bit array holding every bit of `bytes`.
    ///
    /// # Errors
    /// Returns [`EvoError::InvalidRange`] if `bytes` is empty.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes_range(bytes, 0, bytes.len() * 8)
    }

    /// Encodes the magnitude of `value` into exactly `length` bits.
    ///
    /// # Errors
    /// - [`EvoError::InvalidLength`] if `length == 0`
    /// - [`EvoError::MagnitudeTooLarge`] if `value` needs more than
    ///   `length` bits
    pub fn from_biguint_with_length(value: &BigUint, length: usize) -> Result<Self> {
        if length == 0 {
            return Err(EvoError::InvalidLength(length));
        }
        let bits = value.bits();
        if bits > length as u64 {
            return Err(EvoError::MagnitudeTooLarge { bits, length });
        }

        let mut data = vec![0u8; byte_len(length)];
        let le = value.to_bytes_le();
        let n = le.len().min(data.len());
        data[..n].copy_from_slice(&le[..n]);

        Ok(Self { data, len: length })
    }

    /// Encodes `value` using its minimal bit length (at least one bit).
    pub fn from_biguint(value: &BigUint) -> Self {
        let length = (value.bits() as usize).max(1);
        let mut data = value.to_bytes_le();
        data.resize(byte_len(length), 0);
        Self { data, len: length }
    }

    /// Parses a bit string into exactly `length` bits.
    ///
    /// The string occupies the low-order bits. A shorter string is padded
    /// with leading zero bits; a longer one keeps only its rightmost
    /// `length` characters.
    ///
    /// # Errors
    /// - [`EvoError::InvalidLength`] if `length == 0`
    /// - [`EvoError::InvalidCharacter`] for anything but `'0'` and `'1'`
    pub fn from_str_with_length(value: &str, length: usize) -> Result<Self> {
        if length == 0 {
            return Err(EvoError::InvalidLength(length));
        }
        check_bit_string(value)?;

        let text = value.as_bytes();
        let mut data = vec![0u8; byte_len(length)];
        for i in 0..length.min(text.len()) {
            if text[text.len() - 1 - i] == b'1' {
                data[i / 8] |= 1 << (i % 8);
            }
        }

        Ok(Self { data, len: length })
    }

    /// Creates a bit array of `length` zero bits.
    ///
    /// # Errors
    /// Returns [`EvoError::InvalidLength`] if `length == 0`.
    pub fn of_length(length: usize) -> Result<Self> {
        if length == 0 {
            return Err(EvoError::InvalidLength(length));
        }
        Ok(Self {
            data: vec![0u8; byte_len(length)],
            len: length,
        })
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns bit `index`, or `None` if it is out of range.
    pub fn get(&self, index: usize) -> Option<bool> {
        (index < self.len).then(|| self.bit(index))
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Iterates the bits from least to most significant.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| self.bit(i))
    }

    /// Packed storage, little-endian bit order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Copies the packed storage into a new byte vector.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.data.clone()
    }

    /// Interprets the bits as an unsigned magnitude.
    ///
    /// Leading zero bits are lost; use
    /// [`from_biguint_with_length`](Self::from_biguint_with_length) with
    /// [`len`](Self::len) to restore the original array.
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_le(&self.data)
    }

    fn bit(&self, index: usize) -> bool {
        (self.data[index / 8] >> (index % 8)) & 1 == 1
    }
}

fn byte_len(bits: usize) -> usize {
    bits.div_ceil(8)
}

/// Zeroes the bits of the last byte that lie beyond `len`.
fn clear_unused(data: &mut [u8], len: usize) {
    let rem = len % 8;
    if rem != 0 {
        if let Some(last) = data.last_mut() {
            *last &= (1u8 << rem) - 1;
        }
    }
}

fn check_bit_string(value: &str) -> Result<()> {
    match value.chars().enumerate().find(|&(_, c)| c != '0' && c != '1') {
        Some((position, character)) => Err(EvoError::InvalidCharacter {
            character,
            position,
        }),
        None => Ok(()),
    }
}

impl FromStr for BitArray {
    type Err = EvoError;

    /// Parses a non-empty `'0'`/`'1'` string, most significant bit first.
    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(EvoError::EmptyBitString);
        }
        Self::from_str_with_length(s, s.len())
    }
}

impl TryFrom<String> for BitArray {
    type Error = EvoError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<BitArray> for String {
    fn from(value: BitArray) -> Self {
        value.to_string()
    }
}

impl fmt::Display for BitArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = (0..self.len)
            .rev()
            .map(|i| if self.bit(i) { '1' } else { '0' })
            .collect();
        f.write_str(&text)
    }
}

impl fmt::Debug for BitArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitArray[{}]({})", self.len, self)
    }
}
