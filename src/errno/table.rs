use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;

use libc::c_int;

/// The symbolic name reported for codes that have no entry in the table.
pub const UNKNOWN_NAME: &str = "*UNKNOWN*";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrnoEntry {
    pub name: &'static str,
    pub description: &'static str,
}

macro_rules! errno_table {
    ($($code:ident => $description:literal,)*) => {
        [$(
            (libc::$code, ErrnoEntry { name: stringify!($code), description: $description }),
        )*]
    };
}

static ERRNO_TABLE: LazyLock<HashMap<c_int, ErrnoEntry>> = LazyLock::new(|| {
    let mut table = HashMap::new();
    table.insert(0, ErrnoEntry { name: "OK", description: "Operation successful" });
    table.extend(errno_table! {
        EPERM => "Operation not permitted",
        ENOENT => "A component of the path does not exist, or the path is an empty string",
        ESRCH => "No such process",
        EINTR => "Interrupted system call",
        EIO => "I/O error",
        ENXIO => "No such device or address",
        E2BIG => "Argument list too long",
        ENOEXEC => "Exec format error",
        EBADF => "Bad file number",
        ECHILD => "No child processes",
        EAGAIN => "Try again",
        ENOMEM => "Out of memory (i.e. kernel memory)",
        EACCES => "Search permission is denied for one of the directories in the path prefix",
        EFAULT => "Bad address",
        ENOTBLK => "Block device required",
        EBUSY => "Device or resource busy",
        EEXIST => "File exists",
        EXDEV => "Cross-device link",
        ENODEV => "No such device",
        ENOTDIR => "A component of the path prefix is not a directory",
        EISDIR => "Is a directory",
        EINVAL => "Invalid argument",
        ENFILE => "File table overflow",
        EMFILE => "Too many open files",
        ENOTTY => "Not a typewriter",
        ETXTBSY => "Text file busy",
        EFBIG => "File too large",
        ENOSPC => "No space left on device",
        ESPIPE => "Illegal seek",
        EROFS => "Read-only file system",
        EMLINK => "Too many links",
        EPIPE => "Broken pipe",
        EDOM => "Math argument out of domain of func",
        ERANGE => "Math result not representable",
        ENAMETOOLONG => "File name too long",
        ELOOP => "Too many symbolic links encountered",
        EOVERFLOW => "File size, inode number or block count cannot be represented",
    });
    table
});

/// Looks up the table entry for `code`, if there is one.
pub fn lookup(code: c_int) -> Option<&'static ErrnoEntry> {
    ERRNO_TABLE.get(&code)
}

/// The symbolic name for `code`, or [`UNKNOWN_NAME`].
pub fn name(code: c_int) -> &'static str {
    lookup(code).map_or(UNKNOWN_NAME, |entry| entry.name)
}

/// The description for `code`. Unknown codes get a description that embeds the number itself.
pub fn description(code: c_int) -> Cow<'static, str> {
    match lookup(code) {
        Some(entry) => Cow::Borrowed(entry.description),
        None => Cow::Owned(format!("Unknown error number ({code})")),
    }
}
