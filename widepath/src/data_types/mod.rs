//! Data type definitions
//!
//! This module defines the character and string types that path components
//! are made of: UCS-2 ([`Char16`], [`CStr16`]) and Latin-1 ([`Char8`],
//! [`CStr8`]). Both encodings have a fixed width of one unit per character,
//! so stepping back by one unit always lands on a whole character.

mod chars;
pub use self::chars::{CharConversionError, Char16, Char8, NUL_16, NUL_8};

mod strs;
pub use self::strs::{CStr16, CStr8, ComponentError};

#[cfg(feature = "alloc")]
mod owned_strs;
#[cfg(feature = "alloc")]
pub use self::owned_strs::CString16;

/// Count the number of Latin-1 characters in a string.
///
/// Panics if the string contains a character outside of Latin-1 or an
/// interior null character. Used by the [`cstr8!`](crate::cstr8!) macro, where the panic
/// turns into a compile error.
#[doc(hidden)]
#[must_use]
pub const fn str_num_latin1_chars(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;
    let mut num_chars = 0;

    while i < bytes.len() {
        match bytes[i] {
            0 => panic!("interior null character"),
            0x01..=0x7f => i += 1,
            // U+0080 through U+00FF are encoded as two bytes starting with
            // 0xc2 or 0xc3.
            0xc2 | 0xc3 => i += 2,
            _ => panic!("character is not valid Latin-1"),
        }
        num_chars += 1;
    }

    num_chars
}

/// Convert a string to a null-terminated Latin-1 byte array.
///
/// `N` must be the value of [`str_num_latin1_chars`] plus one for the
/// trailing null. Used by the [`cstr8!`](crate::cstr8!) macro.
#[doc(hidden)]
#[must_use]
pub const fn str_to_latin1<const N: usize>(s: &str) -> [u8; N] {
    let bytes = s.as_bytes();
    let mut output = [0; N];
    let mut input_index = 0;
    let mut output_index = 0;

    while input_index < bytes.len() {
        let byte = bytes[input_index];
        if byte < 0x80 {
            output[output_index] = byte;
            input_index += 1;
        } else {
            output[output_index] = ((byte & 0x03) << 6) | (bytes[input_index + 1] & 0x3f);
            input_index += 2;
        }
        output_index += 1;
    }

    output
}
