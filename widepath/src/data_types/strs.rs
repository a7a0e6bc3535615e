//! Borrowed, null-terminated path components.

use super::chars::{Char16, Char8};
use core::fmt::{self, Debug, Display, Formatter, Write};
use core::slice;

/// Reasons a sequence of code units cannot be used as a path component.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ComponentError {
    /// The unit at this index is not a character of the encoding.
    InvalidChar(usize),
    /// A null character at this index would end the component early.
    InteriorNul(usize),
    /// The input does not end with a null character.
    NotNulTerminated,
    /// The conversion buffer cannot hold the text and its terminator.
    BufferTooSmall,
}

impl Display for ComponentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChar(at) => write!(f, "invalid character at index {at}"),
            Self::InteriorNul(at) => write!(f, "null character at index {at} ends the component early"),
            Self::NotNulTerminated => f.write_str("component is not null-terminated"),
            Self::BufferTooSmall => f.write_str("buffer cannot hold the component and its terminator"),
        }
    }
}

impl core::error::Error for ComponentError {}

/// Checks that the only null unit is the last one and that `valid` accepts
/// every unit before it.
fn check_terminated<T>(units: &[T], valid: impl Fn(T) -> bool) -> Result<(), ComponentError>
where
    T: Copy + Default + PartialEq,
{
    let nul = T::default();
    for (at, &unit) in units.iter().enumerate() {
        if unit == nul {
            return if at + 1 == units.len() {
                Ok(())
            } else {
                Err(ComponentError::InteriorNul(at))
            };
        }
        if !valid(unit) {
            return Err(ComponentError::InvalidChar(at));
        }
    }
    Err(ComponentError::NotNulTerminated)
}

/// A null-terminated Latin-1 path component.
///
/// One byte is one character.
///
/// ```
/// use widepath::CStr8;
///
/// let dir = CStr8::from_bytes_with_nul(b"logs\0").unwrap();
/// assert_eq!(dir.num_chars(), 4);
/// ```
#[repr(transparent)]
#[derive(Eq, PartialEq)]
pub struct CStr8([Char8]);

impl CStr8 {
    /// Borrows `bytes` as a component, checking for exactly one trailing
    /// null.
    pub fn from_bytes_with_nul(bytes: &[u8]) -> Result<&Self, ComponentError> {
        check_terminated(bytes, |_| true)?;
        // SAFETY: checked above.
        Ok(unsafe { Self::from_bytes_with_nul_unchecked(bytes) })
    }

    /// Borrows `bytes` as a component without checks.
    ///
    /// # Safety
    ///
    /// `bytes` must end with its only null byte.
    #[must_use]
    pub const unsafe fn from_bytes_with_nul_unchecked(bytes: &[u8]) -> &Self {
        // SAFETY: `Char8` and `CStr8` are transparent over `u8` and
        // `[Char8]`.
        unsafe { &*(bytes as *const [u8] as *const Self) }
    }

    /// Same as [`Self::from_bytes_with_nul_unchecked`] for characters.
    pub(crate) const unsafe fn from_chars_with_nul_unchecked(chars: &[Char8]) -> &Self {
        // SAFETY: `CStr8` is transparent over `[Char8]`.
        unsafe { &*(chars as *const [Char8] as *const Self) }
    }

    /// The characters without the terminator.
    #[must_use]
    pub fn as_slice(&self) -> &[Char8] {
        &self.0[..self.num_chars()]
    }

    /// The raw bytes including the terminator.
    #[must_use]
    pub const fn to_bytes_with_nul(&self) -> &[u8] {
        // SAFETY: `Char8` is transparent over `u8`.
        unsafe { &*(&self.0 as *const [Char8] as *const [u8]) }
    }

    /// Number of characters, not counting the terminator.
    #[must_use]
    pub const fn num_chars(&self) -> usize {
        self.0.len() - 1
    }

    /// Returns true for a component holding only the terminator.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.num_chars() == 0
    }
}

impl Debug for CStr8 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "CStr8({:?})", self.as_slice())
    }
}

impl Display for CStr8 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.as_slice()
            .iter()
            .try_for_each(|&c| f.write_char(char::from(c)))
    }
}

/// A null-terminated UCS-2 path component.
///
/// Surrogates are rejected on construction, so each element is one whole
/// character. Literals are built with [`cstr16!`], runtime text with
/// [`CStr16::from_str_with_buf`].
#[repr(transparent)]
#[derive(Eq, PartialEq)]
pub struct CStr16([Char16]);

impl CStr16 {
    /// Borrows `units` as a component, checking for UCS-2 validity and
    /// exactly one trailing null.
    pub fn from_u16_with_nul(units: &[u16]) -> Result<&Self, ComponentError> {
        check_terminated(units, Char16::is_valid)?;
        // SAFETY: checked above.
        Ok(unsafe { Self::from_u16_with_nul_unchecked(units) })
    }

    /// Borrows `units` as a component without checks.
    ///
    /// # Safety
    ///
    /// `units` must be UCS-2 and end with its only null unit.
    #[must_use]
    pub const unsafe fn from_u16_with_nul_unchecked(units: &[u16]) -> &Self {
        // SAFETY: `Char16` and `CStr16` are transparent over `u16` and
        // `[Char16]`.
        unsafe { &*(units as *const [u16] as *const Self) }
    }

    /// Same as [`Self::from_u16_with_nul_unchecked`] for characters.
    pub(crate) const unsafe fn from_chars_with_nul_unchecked(chars: &[Char16]) -> &Self {
        // SAFETY: `CStr16` is transparent over `[Char16]`.
        unsafe { &*(chars as *const [Char16] as *const Self) }
    }

    /// Encodes `text` into `buf` and borrows the result as a component.
    ///
    /// `buf` needs room for the text and one null unit.
    ///
    /// ```
    /// use widepath::CStr16;
    ///
    /// let mut buf = [0; 8];
    /// let name = CStr16::from_str_with_buf("report", &mut buf).unwrap();
    /// assert_eq!(name.num_chars(), 6);
    /// ```
    pub fn from_str_with_buf<'a>(text: &str, buf: &'a mut [u16]) -> Result<&'a Self, ComponentError> {
        let mut len = 0;
        for unit in text.encode_utf16() {
            *buf.get_mut(len).ok_or(ComponentError::BufferTooSmall)? = unit;
            len += 1;
        }
        *buf.get_mut(len).ok_or(ComponentError::BufferTooSmall)? = 0;
        Self::from_u16_with_nul(&buf[..=len])
    }

    /// The characters without the terminator.
    #[must_use]
    pub fn as_slice(&self) -> &[Char16] {
        &self.0[..self.num_chars()]
    }

    /// The characters including the terminator.
    #[must_use]
    pub const fn as_slice_with_nul(&self) -> &[Char16] {
        &self.0
    }

    /// The raw code units including the terminator.
    #[must_use]
    pub const fn to_u16_slice_with_nul(&self) -> &[u16] {
        // SAFETY: `Char16` is transparent over `u16`.
        unsafe { &*(&self.0 as *const [Char16] as *const [u16]) }
    }

    /// Iterates over the characters, without the terminator.
    pub fn iter(&self) -> slice::Iter<'_, Char16> {
        self.as_slice().iter()
    }

    /// Number of characters, not counting the terminator.
    #[must_use]
    pub const fn num_chars(&self) -> usize {
        self.0.len() - 1
    }

    /// Returns true for a component holding only the terminator.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.num_chars() == 0
    }
}

impl Debug for CStr16 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "CStr16({:?})", self.as_slice())
    }
}

impl Display for CStr16 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|&c| f.write_char(char::from(c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn test_directory_with_surrogate_is_rejected() {
        // "d", high surrogate, "r", null
        assert_eq!(
            CStr16::from_u16_with_nul(&[0x64, 0xd800, 0x72, 0]),
            Err(ComponentError::InvalidChar(1))
        );
    }

    #[test]
    fn test_component_must_end_at_its_only_null() {
        assert_eq!(
            CStr16::from_u16_with_nul(&[0x61, 0, 0x62, 0]),
            Err(ComponentError::InteriorNul(1))
        );
        assert_eq!(
            CStr16::from_u16_with_nul(&[0x61, 0x62]),
            Err(ComponentError::NotNulTerminated)
        );
        assert_eq!(
            CStr8::from_bytes_with_nul(b"a\0b\0"),
            Err(ComponentError::InteriorNul(1))
        );
        assert_eq!(CStr8::from_bytes_with_nul(b""), Err(ComponentError::NotNulTerminated));
    }

    #[test]
    fn test_empty_component() {
        let empty = CStr16::from_u16_with_nul(&[0]).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty, cstr16!());
        assert!(CStr8::from_bytes_with_nul(b"\0").unwrap().is_empty());
    }

    #[test]
    fn test_file_name_from_runtime_text() {
        let mut buf = [0; 7];
        let name = CStr16::from_str_with_buf("report", &mut buf).unwrap();
        assert_eq!(name, cstr16!("report"));

        let mut small = [0; 6];
        assert_eq!(
            CStr16::from_str_with_buf("report", &mut small),
            Err(ComponentError::BufferTooSmall)
        );

        let mut buf = [0; 8];
        assert_eq!(
            CStr16::from_str_with_buf("x\u{1f4c4}", &mut buf),
            Err(ComponentError::InvalidChar(1))
        );
        assert_eq!(
            CStr16::from_str_with_buf("a\0b", &mut buf),
            Err(ComponentError::InteriorNul(1))
        );
    }

    #[test]
    fn test_display_keeps_separators() {
        assert_eq!(cstr16!("C:\\temp/logs").to_string(), "C:\\temp/logs");
        assert_eq!(cstr8!("caf\u{e9}\\").to_string(), "caf\u{e9}\\");
    }

    #[test]
    fn test_last_char_is_whole() {
        let dir = cstr16!("\u{5c5c}");
        assert_eq!(dir.iter().last().map(|&c| u16::from(c)), Some(0x5c5c));
        assert_eq!(dir.to_u16_slice_with_nul(), [0x5c5c, 0]);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ComponentError::InteriorNul(3).to_string(),
            "null character at index 3 ends the component early"
        );
    }
}
