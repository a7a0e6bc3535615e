//! Assembly of a path from drive, directory, file name and extension.
//!
//! All variants share one algorithm and differ only in where the characters
//! go. A fixed-capacity destination truncates, a growable one never does.

use super::{PathBuffer, PathChar, PathText};
use crate::{CStr16, Char16};
use core::fmt::{self, Display, Formatter};

#[cfg(feature = "alloc")]
use {crate::CString16, alloc::string::String, core::convert::Infallible};

/// Errors related to path assembly.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PathError {
    /// The assembled path did not fit into the output buffer and was
    /// truncated to `capacity - 1` characters.
    TooLong {
        /// Capacity of the output buffer, including the null terminator.
        capacity: usize,
    },
}

impl Display for PathError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLong { capacity } => write!(
                f,
                "path does not fit into a buffer of {capacity} characters"
            ),
        }
    }
}

impl core::error::Error for PathError {}

/// A fixed-capacity destination has no room left for another character.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct CapacityExceeded;

/// Destination of the assembled characters.
pub(super) trait PathSink<C> {
    type Error;

    /// Appends one character. Nothing is written on error.
    fn push(&mut self, c: C) -> Result<(), Self::Error>;
}

/// Copies `text` into `sink` and returns the last character copied.
fn push_text<C, S>(sink: &mut S, text: &C::Text) -> Result<Option<C>, S::Error>
where
    C: PathChar,
    S: PathSink<C>,
{
    let mut last = None;
    for c in text.path_chars() {
        sink.push(c)?;
        last = Some(c);
    }
    Ok(last)
}

/// Runs the four stages. The first failing push abandons the remaining
/// stages.
fn assemble<C, S>(
    sink: &mut S,
    drive: Option<&C::Text>,
    dir: Option<&C::Text>,
    fname: Option<&C::Text>,
    ext: Option<&C::Text>,
) -> Result<(), S::Error>
where
    C: PathChar,
    S: PathSink<C>,
{
    // Only the drive letter is used, the colon is always ours.
    if let Some(letter) = drive.and_then(|drive| drive.path_chars().next()) {
        sink.push(letter)?;
        sink.push(C::DRIVE_DELIMITER)?;
    }

    if let Some(dir) = dir {
        // `last` is a decoded character, not a raw storage unit.
        match push_text(sink, dir)? {
            Some(last) if !last.is_separator() => sink.push(C::SEPARATOR)?,
            _ => {}
        }
    }

    if let Some(fname) = fname {
        push_text(sink, fname)?;
    }

    if let Some(ext) = ext {
        let mut chars = ext.path_chars().peekable();
        if chars
            .peek()
            .is_some_and(|&first| first != C::EXTENSION_DELIMITER)
        {
            sink.push(C::EXTENSION_DELIMITER)?;
        }
        for c in chars {
            sink.push(c)?;
        }
    }

    Ok(())
}

/// Builds a path from its components into `out`.
///
/// - `drive`: only its first character is used, followed by `:`. A trailing
///   `:` in the input is therefore harmless.
/// - `dir`: copied verbatim. If its last character is neither `\` nor `/`, a
///   `\` is appended.
/// - `fname`: copied verbatim.
/// - `ext`: a `.` is inserted unless the extension already starts with one.
///
/// Absent and empty components are skipped. Nothing is validated.
///
/// This function cannot fail. If the path does not fit, `out` holds its
/// first `N - 1` characters and the remaining stages are skipped. Callers
/// that must detect this condition compare the resulting length against
/// their expectation, or use [`try_make_path`].
///
/// # Example
///
/// ```
/// use widepath::{cstr16, make_path, WidePathBuffer};
///
/// let mut path = WidePathBuffer::new();
/// make_path(&mut path, None, Some(cstr16!("/var/data/")), Some(cstr16!("x")), Some(cstr16!(".bin")));
/// assert_eq!(path.as_cstr16(), cstr16!("/var/data/x.bin"));
/// ```
pub fn make_path<C: PathChar, const N: usize>(
    out: &mut PathBuffer<C, N>,
    drive: Option<&C::Text>,
    dir: Option<&C::Text>,
    fname: Option<&C::Text>,
    ext: Option<&C::Text>,
) {
    out.clear();
    if assemble::<C, _>(out, drive, dir, fname, ext).is_err() {
        log::debug!("path truncated to {} characters", out.len());
    }
}

/// Like [`make_path`], but reports truncation.
///
/// On [`PathError::TooLong`], `out` holds the same truncated path that
/// [`make_path`] would have produced.
pub fn try_make_path<C: PathChar, const N: usize>(
    out: &mut PathBuffer<C, N>,
    drive: Option<&C::Text>,
    dir: Option<&C::Text>,
    fname: Option<&C::Text>,
    ext: Option<&C::Text>,
) -> Result<(), PathError> {
    out.clear();
    assemble::<C, _>(out, drive, dir, fname, ext).map_err(|_| PathError::TooLong { capacity: N })
}

/// A caller-provided `u16` slice used as output buffer.
struct SliceSink<'a> {
    buf: &'a mut [u16],
    len: usize,
}

impl PathSink<Char16> for SliceSink<'_> {
    type Error = CapacityExceeded;

    fn push(&mut self, c: Char16) -> Result<(), CapacityExceeded> {
        if self.len + 1 >= self.buf.len() {
            return Err(CapacityExceeded);
        }
        self.buf[self.len] = u16::from(c);
        self.len += 1;
        Ok(())
    }
}

/// Builds a UCS-2 path into a caller-provided `u16` buffer of any length.
///
/// The buffer length takes the role of the capacity: at most
/// `buf.len() - 1` characters are kept, followed by a null terminator. An
/// empty buffer yields an empty string. Otherwise this behaves like
/// [`make_path`].
///
/// # Example
///
/// ```
/// use widepath::{cstr16, make_path_with_buf};
///
/// let mut buf = [0; 16];
/// let path = make_path_with_buf(&mut buf, Some(cstr16!("D:")), None, Some(cstr16!("file")), None);
/// assert_eq!(path, cstr16!("D:file"));
/// ```
pub fn make_path_with_buf<'a>(
    buf: &'a mut [u16],
    drive: Option<&CStr16>,
    dir: Option<&CStr16>,
    fname: Option<&CStr16>,
    ext: Option<&CStr16>,
) -> &'a CStr16 {
    if buf.is_empty() {
        return cstr16!();
    }

    let mut sink = SliceSink { buf, len: 0 };
    if assemble::<Char16, _>(&mut sink, drive, dir, fname, ext).is_err() {
        log::debug!("path truncated to {} characters", sink.len);
    }

    let SliceSink { buf, len } = sink;
    buf[len] = 0;
    // SAFETY: `buf[..len]` only holds non-null `Char16` values and
    // `buf[len]` is the terminator.
    unsafe { CStr16::from_u16_with_nul_unchecked(&buf[..=len]) }
}

#[cfg(feature = "alloc")]
impl PathSink<Char16> for CString16 {
    type Error = Infallible;

    fn push(&mut self, c: Char16) -> Result<(), Infallible> {
        CString16::push(self, c);
        Ok(())
    }
}

#[cfg(feature = "alloc")]
impl PathSink<char> for String {
    type Error = Infallible;

    fn push(&mut self, c: char) -> Result<(), Infallible> {
        String::push(self, c);
        Ok(())
    }
}

/// Growable variant of [`make_path`] for UCS-2 components. Never truncates.
#[cfg(feature = "alloc")]
#[must_use]
pub fn make_path_cstring16(
    drive: Option<&CStr16>,
    dir: Option<&CStr16>,
    fname: Option<&CStr16>,
    ext: Option<&CStr16>,
) -> CString16 {
    let mut path = CString16::new();
    let Ok(()) = assemble::<Char16, _>(&mut path, drive, dir, fname, ext);
    path
}

/// Growable variant of [`make_path`] for Rust string components. Never
/// truncates.
///
/// Each component ends at its first `'\0'`, if any.
///
/// # Example
///
/// ```
/// use widepath::path::make_path_string;
///
/// let path = make_path_string(Some("C"), Some("temp"), Some("report"), Some("log"));
/// assert_eq!(path, "C:temp\\report.log");
/// ```
#[cfg(feature = "alloc")]
#[must_use]
pub fn make_path_string(
    drive: Option<&str>,
    dir: Option<&str>,
    fname: Option<&str>,
    ext: Option<&str>,
) -> String {
    let mut path = String::new();
    let Ok(()) = assemble::<char, _>(&mut path, drive, dir, fname, ext);
    path
}
