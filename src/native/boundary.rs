use std::ffi::{CStr, CString};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use libc::c_int;

use super::RawStat;
use crate::errno::{SyscallError, translate};
use crate::panic::{InternalConflictPanic, Panic};

/// Added to the errno by [`NativeBoundary::symlink_check`] so failures can't collide with the
/// boolean results.
pub const ERRNO_OFFSET: c_int = 1000;

/// The sentinel [`LibcBoundary`](super::LibcBoundary) reports when it can't honour its own
/// contract. Any negative value is treated the same way.
pub const INTERNAL_CONFLICT: c_int = -2;

/// A narrow, numeric interface to the native metadata calls.
///
/// Implementors must stick to the return code protocol documented on each method. Anything outside
/// of it is an internal conflict and makes the decoders panic.
pub trait NativeBoundary {
    /// Queries the metadata of `path`, following links when `no_follow` is 0.
    ///
    /// Returns 0 after filling `out`, a positive errno if the call failed or a negative value on an
    /// internal conflict. `out` is only meaningful after a 0.
    fn stat(&self, path: &CStr, no_follow: c_int, out: &mut RawStat) -> c_int;

    /// Checks whether `path` itself is a symbolic link.
    ///
    /// Returns 0 if it isn't, 1 if it is, `errno + ERRNO_OFFSET` if the call failed or a negative
    /// value on an internal conflict.
    fn symlink_check(&self, path: &CStr) -> c_int;
}

impl<B: NativeBoundary + ?Sized> NativeBoundary for &B {
    fn stat(&self, path: &CStr, no_follow: c_int, out: &mut RawStat) -> c_int {
        (**self).stat(path, no_follow, out)
    }

    fn symlink_check(&self, path: &CStr) -> c_int {
        (**self).symlink_check(path)
    }
}

/// Decodes the result of [`NativeBoundary::stat`].
///
/// # Panics
/// Panics with an [`InternalConflictPanic`] if `code` is negative.
pub fn decode_stat(code: c_int) -> Result<(), SyscallError> {
    match code {
        0 => Ok(()),
        errno if errno > 0 => Err(translate(errno)),
        _ => conflict("stat", code),
    }
}

/// Decodes the result of [`NativeBoundary::symlink_check`].
///
/// # Panics
/// Panics with an [`InternalConflictPanic`] if `code` is negative or falls between the boolean
/// results and [`ERRNO_OFFSET`].
pub fn decode_symlink(code: c_int) -> Result<bool, SyscallError> {
    match code {
        0 => Ok(false),
        1 => Ok(true),
        offset if offset > ERRNO_OFFSET => Err(translate(offset - ERRNO_OFFSET)),
        _ => conflict("symlink check", code),
    }
}

fn conflict(call: &str, code: c_int) -> ! {
    log::error!("native {call} returned {code}, which is outside of its contract");
    InternalConflictPanic.panic()
}

/// Converts a path into the NUL terminated form the kernel expects.
///
/// A path with an interior NUL byte can never name a file, so it fails with `EINVAL` without
/// reaching the boundary.
pub(crate) fn c_path(path: &Path) -> Result<CString, SyscallError> {
    CString::new(path.as_os_str().as_bytes()).map_err(|_| translate(libc::EINVAL))
}
