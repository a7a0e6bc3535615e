// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process-wide cache of the running executable's path.
//!
//! The path is queried from the operating system on first use and served
//! from memory afterwards. A failed query is not cached, the next call asks
//! the operating system again.

use core::fmt::{self, Display, Formatter};
use core::ptr;
use core::sync::atomic::{AtomicPtr, Ordering};
use std::boxed::Box;
use std::io;
use std::path::{Path, PathBuf};

/// Global cache behind [`process_exe_path`].
static PROCESS_EXE_PATH: ExePathCache = ExePathCache::new();

/// Error returned when the executable's path cannot be determined.
#[derive(Debug)]
pub enum ExePathError {
    /// The operating system did not report the executable's location.
    OsQuery(io::Error),
}

impl Display for ExePathError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::OsQuery(err) => write!(f, "failed to query the executable path: {err}"),
        }
    }
}

impl core::error::Error for ExePathError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::OsQuery(err) => Some(err),
        }
    }
}

/// A lazily populated, thread-safe slot holding one path.
///
/// Concurrent first callers may all run the query. Exactly one result is
/// published with a compare-and-exchange; the others are freed and their
/// callers see the published value.
#[derive(Debug)]
pub struct ExePathCache {
    // Null, or a pointer from `Box::into_raw` that stays valid until drop.
    slot: AtomicPtr<PathBuf>,
}

impl ExePathCache {
    /// Creates an empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slot: AtomicPtr::new(ptr::null_mut()),
        }
    }

    /// Returns the cached path, if one has been published.
    #[must_use]
    pub fn get(&self) -> Option<&Path> {
        let ptr = self.slot.load(Ordering::Acquire);
        // Safety: `slot` is either null or a published box that lives as long
        // as `self`.
        unsafe { ptr.as_ref() }.map(PathBuf::as_path)
    }

    /// Returns the cached path, running `query` to fill the cache if it is
    /// still empty.
    ///
    /// An error from `query` is returned as [`ExePathError::OsQuery`] and
    /// leaves the cache empty.
    pub fn get_or_try_init<F>(&self, query: F) -> Result<&Path, ExePathError>
    where
        F: FnOnce() -> io::Result<PathBuf>,
    {
        if let Some(path) = self.get() {
            return Ok(path);
        }

        let path = query().map_err(|err| {
            log::warn!("failed to query the executable path: {err}");
            ExePathError::OsQuery(err)
        })?;

        let candidate = Box::into_raw(Box::new(path));
        match self.slot.compare_exchange(
            ptr::null_mut(),
            candidate,
            Ordering::AcqRel,
            Ordering::Acquire,
        ) {
            Ok(_) => {
                // Safety: `candidate` is now owned by the cache.
                let path = unsafe { &*candidate }.as_path();
                log::debug!("cached executable path {}", path.display());
                Ok(path)
            }
            Err(winner) => {
                // Safety: `candidate` was never published, so this is its
                // only owner.
                drop(unsafe { Box::from_raw(candidate) });
                log::debug!("executable path was cached concurrently");
                // Safety: `winner` is a published box.
                Ok(unsafe { &*winner }.as_path())
            }
        }
    }
}

impl Default for ExePathCache {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ExePathCache {
    fn drop(&mut self) {
        let ptr = *self.slot.get_mut();
        if !ptr.is_null() {
            // Safety: the pointer came from `Box::into_raw` and no borrow of
            // `self` outlives this call.
            drop(unsafe { Box::from_raw(ptr) });
        }
    }
}

/// Returns the absolute path of the running executable.
///
/// The first successful lookup is cached for the life of the process.
///
/// # Example
///
/// ```
/// let exe = widepath::exe_path::process_exe_path().unwrap();
/// assert!(exe.is_absolute());
/// ```
pub fn process_exe_path() -> Result<&'static Path, ExePathError> {
    PROCESS_EXE_PATH.get_or_try_init(std::env::current_exe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;
    use std::sync::atomic::AtomicUsize;
    use std::thread;
    use std::vec::Vec;

    #[test]
    fn test_failed_query_is_not_cached() {
        let cache = ExePathCache::new();

        let err = cache
            .get_or_try_init(|| Err(io::Error::from(io::ErrorKind::PermissionDenied)))
            .unwrap_err();
        assert!(matches!(err, ExePathError::OsQuery(ref e) if e.kind() == io::ErrorKind::PermissionDenied));
        assert!(cache.get().is_none());

        let path = cache
            .get_or_try_init(|| Ok(PathBuf::from("/opt/app/bin/app")))
            .unwrap();
        assert_eq!(path, Path::new("/opt/app/bin/app"));
    }

    #[test]
    fn test_query_runs_once_after_success() {
        let cache = ExePathCache::new();
        let calls = AtomicUsize::new(0);
        let query = || {
            calls.fetch_add(1, Ordering::Relaxed);
            Ok(PathBuf::from("/usr/bin/tool"))
        };

        let first = cache.get_or_try_init(query).unwrap() as *const Path;
        let second = cache.get_or_try_init(query).unwrap() as *const Path;
        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_concurrent_initialization_publishes_one_value() {
        let cache = ExePathCache::new();

        let results: Vec<usize> = thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|i| {
                    let cache = &cache;
                    s.spawn(move || {
                        let path = cache
                            .get_or_try_init(|| Ok(PathBuf::from(std::format!("/bin/racer{i}"))))
                            .unwrap();
                        path as *const Path as *const u8 as usize
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(results.windows(2).all(|w| w[0] == w[1]));
        let published = cache.get().unwrap();
        assert!(published.to_string_lossy().starts_with("/bin/racer"));
    }

    #[test]
    fn test_process_exe_path() {
        let exe = process_exe_path().unwrap();
        assert!(exe.is_absolute());
        assert_eq!(exe, std::env::current_exe().unwrap());
        assert!(core::ptr::eq(exe, process_exe_path().unwrap()));
    }

    #[test]
    fn test_error_display() {
        let err = ExePathError::OsQuery(io::Error::other("no handle"));
        assert_eq!(
            err.to_string(),
            "failed to query the executable path: no handle"
        );
        assert!(core::error::Error::source(&err).is_some());
    }
}
