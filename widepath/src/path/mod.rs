//! This module offers the path assembler [`make_path`] and its output type
//! [`PathBuffer`].
//!
//! # Path Structure
//!
//! An assembled path has the shape
//!
//! ```text
//! [drive ':'] [directory [SEPARATOR]] [file name] ['.' extension]
//! ```
//!
//! Both [`SEPARATOR`] (`\`) and [`ALT_SEPARATOR`] (`/`) are accepted in
//! caller input and copied verbatim. Only [`SEPARATOR`] is ever inserted.
//! Components are not validated: illegal characters, reserved names and `.`
//! or `..` components are passed through unchanged.
//!
//! # Encodings
//!
//! The assembler is generic over [`PathChar`]. It works on UCS-2
//! ([`Char16`], [`CStr16`]), Latin-1 ([`Char8`], [`CStr8`]) and Unicode
//! scalar values (`char`, `str`). In all three encodings a character is a
//! whole code point, so the directory stage looks back at the last decoded
//! character and never mistakes the tail of a multi-unit sequence for a
//! separator.

mod buffer;
mod make;

pub use buffer::{PathBuffer, WidePathBuffer};
pub use make::{make_path, make_path_with_buf, try_make_path, PathError};
#[cfg(feature = "alloc")]
pub use make::{make_path_cstring16, make_path_string};

use crate::data_types::{NUL_16, NUL_8};
use crate::{CStr16, CStr8, Char16, Char8};
use core::fmt;

/// The conventional maximum path length, including the null terminator.
///
/// This is the default capacity of a [`PathBuffer`]. Other capacities can be
/// chosen through the buffer's const parameter.
pub const MAX_PATH: usize = 260;

/// The separator inserted between directory and file name.
pub const SEPARATOR: Char16 = unsafe { Char16::from_u16_unchecked('\\' as u16) };

/// The alternative separator, accepted in caller input but never inserted.
pub const ALT_SEPARATOR: Char16 = unsafe { Char16::from_u16_unchecked('/' as u16) };

/// The delimiter between file name and extension.
pub const EXTENSION_DELIMITER: Char16 = unsafe { Char16::from_u16_unchecked('.' as u16) };

/// The delimiter written after the drive letter.
pub const DRIVE_DELIMITER: Char16 = unsafe { Char16::from_u16_unchecked(':' as u16) };

mod sealed {
    pub trait Sealed {}

    impl Sealed for crate::Char16 {}
    impl Sealed for crate::Char8 {}
    impl Sealed for char {}
}

/// A character type paths can be assembled from.
///
/// Implemented for [`Char16`] (UCS-2), [`Char8`] (Latin-1) and `char`.
pub trait PathChar: Copy + Eq + fmt::Debug + fmt::Display + sealed::Sealed {
    /// Borrowed text made of this character type.
    type Text: PathText<Char = Self> + ?Sized;

    /// The null terminator.
    const NUL: Self;

    /// See [`SEPARATOR`].
    const SEPARATOR: Self;

    /// See [`ALT_SEPARATOR`].
    const ALT_SEPARATOR: Self;

    /// See [`EXTENSION_DELIMITER`].
    const EXTENSION_DELIMITER: Self;

    /// See [`DRIVE_DELIMITER`].
    const DRIVE_DELIMITER: Self;

    /// Returns true for both accepted separator characters.
    #[must_use]
    fn is_separator(self) -> bool {
        self == Self::SEPARATOR || self == Self::ALT_SEPARATOR
    }
}

impl PathChar for Char16 {
    type Text = CStr16;

    const NUL: Self = NUL_16;
    const SEPARATOR: Self = SEPARATOR;
    const ALT_SEPARATOR: Self = ALT_SEPARATOR;
    const EXTENSION_DELIMITER: Self = EXTENSION_DELIMITER;
    const DRIVE_DELIMITER: Self = DRIVE_DELIMITER;
}

impl PathChar for Char8 {
    type Text = CStr8;

    const NUL: Self = NUL_8;
    const SEPARATOR: Self = Char8::from_u8(b'\\');
    const ALT_SEPARATOR: Self = Char8::from_u8(b'/');
    const EXTENSION_DELIMITER: Self = Char8::from_u8(b'.');
    const DRIVE_DELIMITER: Self = Char8::from_u8(b':');
}

impl PathChar for char {
    type Text = str;

    const NUL: Self = '\0';
    const SEPARATOR: Self = '\\';
    const ALT_SEPARATOR: Self = '/';
    const EXTENSION_DELIMITER: Self = '.';
    const DRIVE_DELIMITER: Self = ':';
}

/// Text that can serve as a path component.
pub trait PathText {
    /// The decoded character type.
    type Char: PathChar;

    /// Iterates over the decoded characters of the text, without the null
    /// terminator.
    fn path_chars(&self) -> impl Iterator<Item = Self::Char> + '_;
}

impl PathText for CStr16 {
    type Char = Char16;

    fn path_chars(&self) -> impl Iterator<Item = Char16> + '_ {
        self.iter().copied()
    }
}

impl PathText for CStr8 {
    type Char = Char8;

    fn path_chars(&self) -> impl Iterator<Item = Char8> + '_ {
        self.as_slice().iter().copied()
    }
}

/// A `str` component ends at its first `'\0'`, like a C string would.
impl PathText for str {
    type Char = char;

    fn path_chars(&self) -> impl Iterator<Item = char> + '_ {
        self.chars().take_while(|&c| c != '\0')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    #[test]
    fn test_separators() {
        assert!(SEPARATOR.is_separator());
        assert!(ALT_SEPARATOR.is_separator());
        assert!(!EXTENSION_DELIMITER.is_separator());
        assert!(<Char8 as PathChar>::SEPARATOR.is_separator());
        assert!('/'.is_separator());
        assert!(!'|'.is_separator());
    }

    /// U+5C5C shares its low byte with `\`, but it is not a separator.
    #[test]
    fn test_separator_is_a_whole_character() {
        let c = Char16::try_from('\u{5c5c}').unwrap();
        assert!(!c.is_separator());
        assert!(!'\u{5c5c}'.is_separator());
    }

    #[test]
    fn test_str_path_chars_stop_at_nul() {
        let chars: Vec<char> = "ab\0cd".path_chars().collect();
        assert_eq!(chars, ['a', 'b']);
    }

    #[test]
    fn test_cstr_path_chars() {
        let wide: Vec<Char16> = cstr16!("a\\b").path_chars().collect();
        assert_eq!(wide, cstr16!("a\\b").as_slice());

        let narrow: Vec<Char8> = cstr8!("a/b").path_chars().collect();
        assert_eq!(narrow, cstr8!("a/b").as_slice());
    }
}
