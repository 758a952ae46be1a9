//! Packed, fixed-length bit sequences.
//!
//! [`BitArray`] is the genome encoding used by bit-string chromosomes.
//! It converts losslessly between three external representations:
//!
//! - **Bytes**: little-endian bit order, bit 0 of the array is bit 0 of
//!   byte 0; unused high bits of the last byte are zero.
//! - **Integers**: unsigned [`BigUint`](num_bigint::BigUint) magnitude,
//!   bit `len - 1` is the most significant bit.
//! - **Text**: `'0'`/`'1'` characters, most significant bit first.
//!
//! # Examples
//!
//! ```
//! use u_evocore::bits::BitArray;
//!
//! let bits: BitArray = "1011".parse().unwrap();
//! assert_eq!(bits.len(), 4);
//! assert_eq!(bits.to_bytes(), vec![0b1011]);
//! assert_eq!(bits.to_string(), "1011");
//! ```

mod bit_array;

pub use bit_array::BitArray;
