use std::io;

use libc::c_int;

/// The calling thread's current errno, or 0 if the OS didn't leave one.
pub fn err_no() -> c_int {
    io::Error::last_os_error().raw_os_error().unwrap_or(0)
}
