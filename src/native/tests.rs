#![cfg(test)]

use std::ffi::CString;
use std::fs;
use std::os::unix::fs::symlink;
use std::path::Path;

use libc::c_int;

use super::*;
use crate::panic::InternalConflictPanic;
use crate::util::panic::assert_panics;

fn c(path: &Path) -> CString {
    c_path(path).expect("test paths contain no NUL bytes")
}

#[test]
fn test_decode_stat() {
    assert_eq!(decode_stat(0), Ok(()));

    let err = decode_stat(libc::ENOENT).expect_err("positive codes are errnos");
    assert_eq!(err.name, "ENOENT");
    assert_eq!(err.errno, libc::ENOENT);

    assert_eq!(
        decode_stat(libc::EINTR).map_err(|e| e.name),
        Err("EINTR"),
        "Interrupts should surface as ordinary errors, not be retried."
    );

    assert_panics!(
        { decode_stat(-1) },
        InternalConflictPanic,
        "negative stat codes should panic"
    );
    assert_panics!(
        { decode_stat(INTERNAL_CONFLICT) },
        InternalConflictPanic,
        "the conflict sentinel should panic"
    );
}

#[test]
fn test_decode_symlink() {
    assert_eq!(decode_symlink(0), Ok(false));
    assert_eq!(decode_symlink(1), Ok(true));

    let err = decode_symlink(libc::ENOENT + ERRNO_OFFSET).expect_err("offset codes are failures");
    assert_eq!(err.name, "ENOENT", "The offset should be removed before translating.");
    assert_eq!(
        decode_symlink(libc::EACCES + ERRNO_OFFSET).map_err(|e| e.errno),
        Err(libc::EACCES)
    );

    for code in [-1, INTERNAL_CONFLICT, 2, ERRNO_OFFSET - 1, ERRNO_OFFSET] {
        assert_panics!(
            { decode_symlink(code) },
            InternalConflictPanic,
            "codes outside of the symlink contract should panic"
        );
    }
}

#[test]
fn test_link_mode() {
    assert_eq!(LinkMode::default(), LinkMode::Follow, "Links should be followed by default.");
    assert_eq!(LinkMode::Follow.discriminant(), 0);
    assert_ne!(LinkMode::NoFollow.discriminant(), 0);
    assert_eq!(LinkMode::from_follow(true), LinkMode::Follow);
    assert_eq!(LinkMode::from_follow(false), LinkMode::NoFollow);
    assert!(!LinkMode::NoFollow.follows());
}

#[test]
fn test_c_path_rejects_nul() {
    let err = c_path(Path::new("bad\0path")).expect_err("interior NUL can't reach the kernel");
    assert_eq!(err.errno, libc::EINVAL);
}

#[test]
fn test_libc_boundary() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let file = dir.path().join("file");
    let link = dir.path().join("link");
    fs::write(&file, b"twelve bytes").expect("failed to write file");
    symlink(&file, &link).expect("failed to create symlink");

    let mut out = RawStat::default();
    assert_eq!(LibcBoundary.stat(&c(&file), LinkMode::Follow.discriminant(), &mut out), 0);
    assert_eq!(out.size, 12);
    assert_eq!(out.file_format(), S_IFREG);

    let mut link_out = RawStat::default();
    assert_eq!(LibcBoundary.stat(&c(&link), LinkMode::Follow.discriminant(), &mut link_out), 0);
    assert_eq!(link_out.ino, out.ino, "Following a link should report on its target.");

    assert_eq!(LibcBoundary.stat(&c(&link), LinkMode::NoFollow.discriminant(), &mut link_out), 0);
    assert_eq!(link_out.file_format(), S_IFLNK, "Not following should report on the link.");

    let missing = dir.path().join("missing");
    assert_eq!(LibcBoundary.stat(&c(&missing), 0, &mut out), libc::ENOENT);

    assert_eq!(LibcBoundary.symlink_check(&c(&file)), 0);
    assert_eq!(LibcBoundary.symlink_check(&c(&link)), 1);
    assert_eq!(LibcBoundary.symlink_check(&c(&missing)), libc::ENOENT + ERRNO_OFFSET);
}

#[test]
fn test_boundary_by_reference() {
    struct Fixed(c_int);

    impl NativeBoundary for Fixed {
        fn stat(&self, _path: &std::ffi::CStr, _no_follow: c_int, _out: &mut RawStat) -> c_int {
            self.0
        }

        fn symlink_check(&self, _path: &std::ffi::CStr) -> c_int {
            self.0
        }
    }

    let fixed = Fixed(1);
    let by_ref: &dyn NativeBoundary = &fixed;
    assert_eq!(decode_symlink((&by_ref).symlink_check(c"/")), Ok(true));
    assert_eq!(
        decode_stat((&fixed).stat(c"/", 0, &mut RawStat::default())).map_err(|e| e.errno),
        Err(1)
    );
}
