use std::ffi::CStr;
use std::mem::MaybeUninit;

use libc::c_int;

use super::{ERRNO_OFFSET, INTERNAL_CONFLICT, NativeBoundary, RawStat, S_IFLNK};
use crate::util;

/// The production boundary, calling `stat(2)` and `lstat(2)` through `libc`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LibcBoundary;

impl LibcBoundary {
    fn raw_stat(path: &CStr, follow_links: bool) -> Result<libc::stat, c_int> {
        let mut raw_meta: MaybeUninit<libc::stat> = MaybeUninit::uninit();
        // SAFETY: path is NUL terminated and raw_meta is valid for writes of a whole stat struct.
        let ret = unsafe {
            if follow_links {
                libc::stat(path.as_ptr(), raw_meta.as_mut_ptr())
            } else {
                libc::lstat(path.as_ptr(), raw_meta.as_mut_ptr())
            }
        };
        if ret == -1 {
            return Err(util::err_no());
        }
        // SAFETY: stat and lstat initialize raw_meta whenever they don't return -1.
        Ok(unsafe { raw_meta.assume_init() })
    }
}

impl NativeBoundary for LibcBoundary {
    fn stat(&self, path: &CStr, no_follow: c_int, out: &mut RawStat) -> c_int {
        match LibcBoundary::raw_stat(path, no_follow == 0) {
            Ok(raw) => {
                *out = RawStat::from_stat(&raw);
                0
            }
            Err(errno) if errno > 0 => errno,
            Err(_) => INTERNAL_CONFLICT,
        }
    }

    fn symlink_check(&self, path: &CStr) -> c_int {
        match LibcBoundary::raw_stat(path, false) {
            Ok(raw) => c_int::from(RawStat::from_stat(&raw).file_format() == S_IFLNK),
            Err(errno) if errno > 0 => errno + ERRNO_OFFSET,
            Err(_) => INTERNAL_CONFLICT,
        }
    }
}
