use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};

use derive_more::Error;
use libc::c_int;

use super::table::{self, UNKNOWN_NAME};

/// A system call failed. Carries the raw errno along with its symbolic name and a description.
///
/// Callers can branch on either the name or the platform constant:
/// ```no_run
/// # use filestat::StatOptions;
/// match StatOptions::new().query("/nonexistent") {
///     Err(e) if e.is(libc::ENOENT) => println!("missing"),
///     Err(e) => println!("{e}"),
///     Ok(meta) => println!("{meta}"),
/// }
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub struct SyscallError {
    pub errno: c_int,
    pub name: &'static str,
    pub description: Cow<'static, str>,
    /// The path the failing call was made for, if there was one.
    pub path: Option<PathBuf>,
}

impl SyscallError {
    pub fn with_path<P: AsRef<Path>>(self, path: P) -> SyscallError {
        SyscallError {
            path: Some(path.as_ref().to_path_buf()),
            ..self
        }
    }

    pub const fn is(&self, code: c_int) -> bool {
        self.errno == code
    }

    pub fn is_unknown(&self) -> bool {
        self.name == UNKNOWN_NAME
    }
}

/// Builds the [`SyscallError`] for a raw errno. Never fails: codes without a table entry map to
/// [`UNKNOWN_NAME`] with the code embedded in the description.
pub fn translate(code: c_int) -> SyscallError {
    SyscallError {
        errno: code,
        name: table::name(code),
        description: table::description(code),
        path: None,
    }
}

impl Display for SyscallError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(path) = &self.path {
            write!(f, "could not stat {}: ", path.display())?;
        }
        write!(f, "system call returned {} / {}", self.name, self.description)
    }
}

impl From<SyscallError> for io::Error {
    fn from(value: SyscallError) -> Self {
        io::Error::from_raw_os_error(value.errno)
    }
}
