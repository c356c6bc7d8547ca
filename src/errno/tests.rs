#![cfg(test)]

use std::io;

use super::*;

#[test]
fn test_known_codes() {
    let err = translate(libc::ENOENT);
    assert_eq!(err.errno, libc::ENOENT);
    assert_eq!(err.name, "ENOENT", "Names should be the symbolic constant from errno.h.");
    assert!(
        err.description.contains("does not exist"),
        "ENOENT should be described as a missing path component."
    );
    assert!(!err.is_unknown());

    let required = [
        (libc::EPERM, "EPERM"),
        (libc::EINTR, "EINTR"),
        (libc::EIO, "EIO"),
        (libc::ENXIO, "ENXIO"),
        (libc::E2BIG, "E2BIG"),
        (libc::EBADF, "EBADF"),
        (libc::ENOMEM, "ENOMEM"),
        (libc::EAGAIN, "EAGAIN"),
        (libc::EBUSY, "EBUSY"),
        (libc::EEXIST, "EEXIST"),
        (libc::EXDEV, "EXDEV"),
        (libc::ENOTDIR, "ENOTDIR"),
        (libc::EISDIR, "EISDIR"),
        (libc::EINVAL, "EINVAL"),
        (libc::ENFILE, "ENFILE"),
        (libc::EMFILE, "EMFILE"),
        (libc::ETXTBSY, "ETXTBSY"),
        (libc::EFBIG, "EFBIG"),
        (libc::ENOSPC, "ENOSPC"),
        (libc::ESPIPE, "ESPIPE"),
        (libc::EROFS, "EROFS"),
        (libc::EMLINK, "EMLINK"),
        (libc::EPIPE, "EPIPE"),
        (libc::EDOM, "EDOM"),
        (libc::ERANGE, "ERANGE"),
        (libc::ENAMETOOLONG, "ENAMETOOLONG"),
        (libc::ELOOP, "ELOOP"),
        (libc::EOVERFLOW, "EOVERFLOW"),
    ];
    for (code, expected) in required {
        assert_eq!(name(code), expected, "Code {code} should map to {expected}.");
        assert!(lookup(code).is_some());
    }

    assert_eq!(name(0), "OK");
}

#[test]
fn test_unknown_codes() {
    let err = translate(9999);
    assert_eq!(err.name, UNKNOWN_NAME);
    assert_eq!(err.description, "Unknown error number (9999)");
    assert!(err.is_unknown());
    assert!(err.is(9999));

    assert_eq!(
        translate(-3).description,
        "Unknown error number (-3)",
        "Negative codes aren't errnos but should still translate."
    );
}

#[test]
fn test_translate_is_deterministic() {
    for code in [libc::EACCES, libc::ELOOP, 4242] {
        assert_eq!(translate(code), translate(code), "Same code should give identical errors.");
    }
}

#[test]
fn test_display() {
    assert_eq!(
        translate(libc::EROFS).to_string(),
        "system call returned EROFS / Read-only file system"
    );
}

#[test]
fn test_display_with_path() {
    let err = translate(libc::ENOENT).with_path("/no/such/file");
    assert_eq!(err.path.as_deref(), Some(std::path::Path::new("/no/such/file")));
    assert_eq!(
        err.to_string(),
        format!("could not stat /no/such/file: system call returned ENOENT / {}", err.description)
    );
    assert_eq!(err.errno, libc::ENOENT, "Attaching a path shouldn't change the error itself.");
}

#[test]
fn test_into_io_error() {
    let err: io::Error = translate(libc::ENOENT).into();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
    assert_eq!(err.raw_os_error(), Some(libc::ENOENT));
}
