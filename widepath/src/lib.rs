//! Bounded assembly of file system paths from their components.
//!
//! # Crate organisation
//!
//! The top-level module re-exports the most used types: the character types
//! [`Char16`] and [`Char8`], the null-terminated string types [`CStr16`] and
//! [`CStr8`], and the path assembler from the [`path`] module.
//!
//! ## Path assembly
//!
//! [`make_path`] concatenates an optional drive letter, directory, file name
//! and extension into a caller-owned [`PathBuffer`]. It inserts a `:` after
//! the drive letter, ensures exactly one separator between directory and file
//! name, and inserts the `.` extension delimiter when the extension lacks one.
//! The buffer has a fixed capacity (by default [`MAX_PATH`]) and the result is
//! always null-terminated. Paths that do not fit are silently truncated to
//! `capacity - 1` characters; [`try_make_path`] reports that condition
//! instead.
//!
//! ```
//! use widepath::{cstr16, make_path, WidePathBuffer};
//!
//! let mut path = WidePathBuffer::new();
//! make_path(
//!     &mut path,
//!     Some(cstr16!("C")),
//!     Some(cstr16!("temp")),
//!     Some(cstr16!("report")),
//!     Some(cstr16!("log")),
//! );
//! assert_eq!(path.as_cstr16(), cstr16!("C:temp\\report.log"));
//! ```
//!
//! The assembler never allocates, which makes it usable on failure paths
//! where allocation is not an option.
//!
//! ## Optional crate features
//!
//! - `alloc`: Enable functionality requiring the [`alloc`] crate from
//!   the Rust standard library. This adds [`CString16`] and the growable
//!   variants [`make_path_cstring16`] and [`make_path_string`], which never
//!   truncate.
//! - `std` (enabled by default): Implies `alloc`. Adds the [`exe_path`]
//!   module, a process-wide cache of the running executable's path.
//!
//! [`alloc`]: https://doc.rust-lang.org/alloc/
//! [`make_path_cstring16`]: path::make_path_cstring16
//! [`make_path_string`]: path::make_path_string

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![no_std]
// Enable some additional warnings and lints.
#![warn(clippy::ptr_as_ptr, missing_docs, unused)]
#![deny(clippy::all)]
#![deny(clippy::must_use_candidate)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

#[macro_use]
mod macros;

pub mod data_types;
#[cfg(feature = "alloc")]
pub use self::data_types::CString16;
pub use self::data_types::{CStr16, CStr8, Char16, Char8};

pub mod path;
pub use self::path::{
    make_path, make_path_with_buf, try_make_path, PathBuffer, PathError, WidePathBuffer, MAX_PATH,
};

#[cfg(feature = "std")]
pub mod exe_path;

// Used by the `cstr16!` macro.
#[doc(hidden)]
pub use ucs2::ucs2_cstr;
