// SPDX-License-Identifier: MIT OR Apache-2.0

//! The two fixed-width character types path components are stored in.

use core::fmt::{self, Debug, Display, Formatter};

/// A character has no representation in the requested encoding.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CharConversionError;

impl Display for CharConversionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("character is not representable in the target encoding")
    }
}

impl core::error::Error for CharConversionError {}

/// A Latin-1 character. Every byte value is one.
#[derive(Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Char8(u8);

impl Char8 {
    /// Wraps a byte.
    #[must_use]
    pub const fn from_u8(byte: u8) -> Self {
        Self(byte)
    }
}

impl From<u8> for Char8 {
    fn from(byte: u8) -> Self {
        Self(byte)
    }
}

impl From<Char8> for u8 {
    fn from(c: Char8) -> Self {
        c.0
    }
}

impl From<Char8> for char {
    fn from(c: Char8) -> Self {
        Self::from(c.0)
    }
}

impl TryFrom<char> for Char8 {
    type Error = CharConversionError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        u8::try_from(c).map(Self).map_err(|_| CharConversionError)
    }
}

impl Debug for Char8 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&char::from(*self), f)
    }
}

impl Display for Char8 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&char::from(*self), f)
    }
}

/// Latin-1 null terminator.
pub const NUL_8: Char8 = Char8(0);

/// A UCS-2 character: a code point of the Basic Multilingual Plane.
///
/// Surrogate code units are rejected, so one `Char16` is always one whole
/// character and never half of a UTF-16 pair.
#[derive(Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Char16(u16);

impl Char16 {
    /// Wraps a code unit without checking it.
    ///
    /// # Safety
    ///
    /// `unit` must not be a surrogate (`0xd800..=0xdfff`).
    #[must_use]
    pub const unsafe fn from_u16_unchecked(unit: u16) -> Self {
        Self(unit)
    }

    pub(crate) const fn is_valid(unit: u16) -> bool {
        !matches!(unit, 0xd800..=0xdfff)
    }
}

impl TryFrom<u16> for Char16 {
    type Error = CharConversionError;

    fn try_from(unit: u16) -> Result<Self, Self::Error> {
        if Self::is_valid(unit) {
            Ok(Self(unit))
        } else {
            Err(CharConversionError)
        }
    }
}

impl TryFrom<char> for Char16 {
    type Error = CharConversionError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        // A `char` is never a surrogate.
        u16::try_from(u32::from(c))
            .map(Self)
            .map_err(|_| CharConversionError)
    }
}

impl From<Char16> for u16 {
    fn from(c: Char16) -> Self {
        c.0
    }
}

impl From<Char16> for char {
    fn from(c: Char16) -> Self {
        Self::from_u32(u32::from(c.0)).unwrap_or(Self::REPLACEMENT_CHARACTER)
    }
}

impl Debug for Char16 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&char::from(*self), f)
    }
}

impl Display for Char16 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&char::from(*self), f)
    }
}

/// UCS-2 null terminator.
pub const NUL_16: Char16 = Char16(0);
