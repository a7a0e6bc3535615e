// SPDX-License-Identifier: MIT OR Apache-2.0

#![cfg(feature = "std")]

use std::thread;
use widepath::exe_path::process_exe_path;

/// Every thread sees the same cached allocation.
#[test]
fn exe_path_is_shared_across_threads() {
    let expected = std::env::current_exe().unwrap();

    let paths: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| process_exe_path().unwrap())).collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for path in &paths {
        assert_eq!(*path, expected);
        assert!(std::ptr::eq(*path, paths[0]));
    }
}

#[test]
fn exe_path_can_be_joined_with_make_path() {
    let exe = process_exe_path().unwrap();
    let dir = exe.parent().unwrap().to_str().unwrap();
    let name = exe.file_stem().unwrap().to_str().unwrap();

    let log = widepath::path::make_path_string(None, Some(dir), Some(name), Some("log"));
    assert!(log.starts_with(dir));
    assert!(log.ends_with(".log"));
}
