use super::make::{CapacityExceeded, PathSink};
use super::{PathChar, MAX_PATH};
use crate::{CStr16, CStr8, Char16, Char8};
use core::fmt::{self, Debug, Display, Formatter};

/// A fixed-capacity, caller-owned output buffer for [`make_path`].
///
/// The buffer holds `N` characters of storage. One of them is always taken
/// by the null terminator, so at most `N - 1` path characters fit. The
/// buffer never grows and never allocates.
///
/// `N` must not be zero, which is checked at compile time.
///
/// [`make_path`]: super::make_path
#[derive(Clone)]
pub struct PathBuffer<C: PathChar, const N: usize = MAX_PATH> {
    chars: [C; N],
    // Invariant: `len < N` and `chars[len]` is the null terminator.
    len: usize,
}

/// A UCS-2 [`PathBuffer`] of [`MAX_PATH`] characters.
pub type WidePathBuffer = PathBuffer<Char16, MAX_PATH>;

impl<C: PathChar, const N: usize> PathBuffer<C, N> {
    /// Creates an empty, null-terminated buffer.
    #[must_use]
    pub fn new() -> Self {
        const { assert!(N > 0, "a path buffer needs room for the null terminator") };
        Self {
            chars: [C::NUL; N],
            len: 0,
        }
    }

    /// Total storage in characters, including the null terminator.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the number of characters without the trailing null character.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns if the buffer holds no path characters.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Resets the buffer to the empty string.
    pub fn clear(&mut self) {
        self.len = 0;
        self.chars[0] = C::NUL;
    }

    /// Get the path characters as slice without the trailing null.
    #[must_use]
    pub fn as_slice(&self) -> &[C] {
        &self.chars[..self.len]
    }

    /// Get the path characters as slice including the trailing null.
    #[must_use]
    pub fn as_slice_with_nul(&self) -> &[C] {
        &self.chars[..=self.len]
    }
}

impl<const N: usize> PathBuffer<Char16, N> {
    /// Borrows the assembled path as a [`CStr16`].
    #[must_use]
    pub fn as_cstr16(&self) -> &CStr16 {
        // SAFETY: every character before `len` is non-null and
        // `chars[len]` is null.
        unsafe { CStr16::from_chars_with_nul_unchecked(self.as_slice_with_nul()) }
    }
}

impl<const N: usize> PathBuffer<Char8, N> {
    /// Borrows the assembled path as a [`CStr8`].
    #[must_use]
    pub fn as_cstr8(&self) -> &CStr8 {
        // SAFETY: every character before `len` is non-null and
        // `chars[len]` is null.
        unsafe { CStr8::from_chars_with_nul_unchecked(self.as_slice_with_nul()) }
    }
}

impl<C: PathChar, const N: usize> PathSink<C> for PathBuffer<C, N> {
    type Error = CapacityExceeded;

    fn push(&mut self, c: C) -> Result<(), CapacityExceeded> {
        // The last slot belongs to the terminator.
        if self.len + 1 >= N {
            return Err(CapacityExceeded);
        }
        self.chars[self.len] = c;
        self.len += 1;
        self.chars[self.len] = C::NUL;
        Ok(())
    }
}

impl<C: PathChar, const N: usize> Default for PathBuffer<C, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: PathChar, const N: usize> PartialEq for PathBuffer<C, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<C: PathChar, const N: usize> Eq for PathBuffer<C, N> {}

impl<C: PathChar, const N: usize> Display for PathBuffer<C, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for c in self.as_slice() {
            Display::fmt(c, f)?;
        }
        Ok(())
    }
}

impl<C: PathChar, const N: usize> Debug for PathBuffer<C, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "PathBuffer({:?})", self.as_slice())
    }
}
