// SPDX-License-Identifier: MIT OR Apache-2.0

/// Builds a Latin-1 path component ([`&CStr8`]) from a string literal.
///
/// The literal is checked and encoded at compile time: characters above
/// U+00FF or an embedded `\0` fail the build. `cstr8!()` is the empty
/// component.
///
/// ```
/// use widepath::{cstr8, CStr8};
///
/// const DIR: &CStr8 = cstr8!("caf\u{e9}");
/// assert_eq!(DIR.to_bytes_with_nul(), b"caf\xe9\0");
/// assert!(cstr8!().is_empty());
/// ```
///
/// [`&CStr8`]: crate::CStr8
#[macro_export]
macro_rules! cstr8 {
    () => {
        $crate::cstr8!("")
    };
    ($s:literal) => {{
        const LEN: usize = $crate::data_types::str_num_latin1_chars($s) + 1;
        const BYTES: [u8; LEN] = $crate::data_types::str_to_latin1($s);
        // SAFETY: `str_to_latin1` appends the only null byte.
        unsafe { $crate::CStr8::from_bytes_with_nul_unchecked(&BYTES) }
    }};
}

/// Builds a UCS-2 path component ([`&CStr16`]) from a string literal.
///
/// The literal is encoded at compile time by [`ucs2`]. Characters outside
/// the Basic Multilingual Plane fail the build. `cstr16!()` is the empty
/// component.
///
/// ```
/// use widepath::{cstr16, CStr16};
///
/// const DIR: &CStr16 = cstr16!("C:\\temp");
/// assert_eq!(DIR.to_u16_slice_with_nul(), [67, 58, 92, 116, 101, 109, 112, 0]);
/// assert!(cstr16!().is_empty());
/// ```
///
/// [`&CStr16`]: crate::CStr16
/// [`ucs2`]: https://docs.rs/ucs2
#[macro_export]
macro_rules! cstr16 {
    () => {
        $crate::cstr16!("")
    };
    ($s:literal) => {{
        const UNITS: &[u16] = &$crate::ucs2_cstr!($s);
        // SAFETY: `ucs2_cstr!` yields UCS-2 with the only null at the end.
        unsafe { $crate::CStr16::from_u16_with_nul_unchecked(UNITS) }
    }};
}
