//! Fixed-Width Unsigned Values.
//!
//! Every wire in the machine carries a value of a declared bit width. `UInt<W>` pins that
//! width into the type so a 9-bit jump target can never be handed to an 8-bit port, and
//! out-of-range values are rejected when the value is built rather than silently truncated.
//! Truncation is still available, but only through the explicit [`UInt::masked`].

use std::fmt;

use super::constants::{DEST_BITS, OPCODE_BITS, OPERAND_BITS, SELECT_BITS};
use super::error::WidthError;

/// An unsigned integer constrained to `W` bits (`1 <= W <= 32`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UInt<const W: u32>(u32);

/// 2-bit value (multiplexer selects).
pub type U2 = UInt<SELECT_BITS>;
/// 4-bit value (opcodes).
pub type U4 = UInt<OPCODE_BITS>;
/// 8-bit value (operands, data cells, register contents).
pub type U8 = UInt<OPERAND_BITS>;
/// 9-bit value (register indices, addresses, jump targets).
pub type U9 = UInt<DEST_BITS>;

impl<const W: u32> UInt<W> {
    const WIDTH_OK: () = assert!(W >= 1 && W <= 32, "UInt width must be within 1..=32");

    /// Declared width in bits.
    pub const BITS: u32 = W;

    /// Mask covering the declared width.
    pub const MASK: u32 = if W >= 32 { u32::MAX } else { (1u32 << W) - 1 };

    /// The all-zero value.
    pub const ZERO: Self = Self(0);

    /// Largest representable value.
    pub const MAX: Self = Self(Self::MASK);

    /// Builds a value, rejecting anything wider than `W` bits.
    pub const fn new(value: u32) -> Result<Self, WidthError> {
        let () = Self::WIDTH_OK;
        if value & !Self::MASK == 0 {
            Ok(Self(value))
        } else {
            Err(WidthError { value, bits: W })
        }
    }

    /// Builds a value by discarding every bit above `W`.
    pub const fn masked(value: u32) -> Self {
        let () = Self::WIDTH_OK;
        Self(value & Self::MASK)
    }

    /// Returns the raw value.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns the value as a storage index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns `value + 1` modulo `2^W`.
    #[inline]
    pub const fn wrapping_inc(self) -> Self {
        Self::masked(self.0.wrapping_add(1))
    }

    /// Widens (or narrows, masking) into another width.
    #[inline]
    pub const fn resize<const V: u32>(self) -> UInt<V> {
        UInt::<V>::masked(self.0)
    }
}

impl<const W: u32> TryFrom<u32> for UInt<W> {
    type Error = WidthError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<const W: u32> From<UInt<W>> for u32 {
    fn from(value: UInt<W>) -> Self {
        value.0
    }
}

impl<const W: u32> fmt::Display for UInt<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<const W: u32> fmt::LowerHex for UInt<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}
