use super::chars::{Char16, NUL_16};
use super::strs::CStr16;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{self, Debug, Display, Formatter};
use core::ops::Deref;

/// An owned UCS-2 string that grows on demand and stays null-terminated.
///
/// This is the output of [`make_path_cstring16`]. It dereferences to
/// [`CStr16`].
///
/// [`make_path_cstring16`]: crate::path::make_path_cstring16
#[derive(Clone, Eq, PartialEq)]
pub struct CString16(Vec<Char16>);

impl CString16 {
    /// Creates a string holding only the terminator.
    #[must_use]
    pub fn new() -> Self {
        Self(vec![NUL_16])
    }

    /// Appends `c` in front of the terminator.
    ///
    /// # Panics
    ///
    /// Panics if `c` is the null character.
    pub fn push(&mut self, c: Char16) {
        assert_ne!(c, NUL_16, "a null character would end the string early");
        // The terminator is always the last element.
        let end = self.0.len() - 1;
        self.0.insert(end, c);
    }
}

impl Default for CString16 {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for CString16 {
    type Target = CStr16;

    fn deref(&self) -> &CStr16 {
        // SAFETY: `push` rejects null, so the last element is the only null
        // and no element is a surrogate.
        unsafe { CStr16::from_chars_with_nul_unchecked(&self.0) }
    }
}

impl AsRef<CStr16> for CString16 {
    fn as_ref(&self) -> &CStr16 {
        self
    }
}

impl PartialEq<&CStr16> for CString16 {
    fn eq(&self, other: &&CStr16) -> bool {
        **self == **other
    }
}

impl Debug for CString16 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "CString16({:?})", self.as_slice())
    }
}

impl Display for CString16 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&**self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    fn wide(c: char) -> Char16 {
        Char16::try_from(c).unwrap()
    }

    #[test]
    fn test_new_holds_only_terminator() {
        let path = CString16::new();
        assert!(path.is_empty());
        assert_eq!(path.as_slice_with_nul(), [NUL_16]);
        assert_eq!(path, CString16::default());
    }

    #[test]
    fn test_push_keeps_terminator_last() {
        let mut path = CString16::new();
        for c in "temp\\".chars() {
            path.push(wide(c));
            assert_eq!(path.as_slice_with_nul().last(), Some(&NUL_16));
        }
        assert_eq!(path.num_chars(), 5);
        assert_eq!(path, cstr16!("temp\\"));
        assert_eq!(path.to_string(), "temp\\");
    }

    #[test]
    #[should_panic(expected = "a null character would end the string early")]
    fn test_push_rejects_null() {
        CString16::new().push(NUL_16);
    }
}
