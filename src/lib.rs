//! Typed access to Unix file metadata, as reported by the `stat` and `lstat` syscalls.
//!
//! # Purpose
//! The kernel reports file metadata as a raw `struct stat` and reports failure as a bare `errno`.
//! This crate does the mapping between the two worlds: the raw record is marshaled into a
//! [`FileMetadata`] with well defined signedness and units, and a failing call produces a
//! [`SyscallError`] with a stable symbolic name and a readable description.
//!
//! ```no_run
//! use filestat::StatOptions;
//!
//! let meta = StatOptions::new().query("/etc/hostname")?;
//! println!("{} is {} bytes", meta.path.display(), meta.format_size());
//! # Ok::<(), filestat::SyscallError>(())
//! ```
//!
//! # Error Handling
//! Two kinds of failure are kept strictly apart:
//! - The OS declined the call. This is an ordinary, recoverable [`SyscallError`] which callers can
//!   branch on via its name or errno.
//! - The native boundary returned a value outside of its documented contract. That is a bug in
//!   this crate rather than a runtime condition, so it panics with an [`InternalConflictPanic`]
//!   instead of being returned.
//!
//! # Dependencies
//! The [`native`] module relies on `libc` for the syscalls themselves. Errors use derive macros
//! from `derive_more` and diagnostics go through the `log` facade, leaving it to the binary to
//! install a logger. With the `display` feature (on by default), `chrono` renders timestamps in
//! the [`Display`](std::fmt::Display) report of a [`FileMetadata`].

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(not(unix))]
compile_error!(
    "filestat links against the platform C library for stat(2) and lstat(2), which is only \
     available on Unix-like targets"
);

pub mod errno;
pub mod native;
pub mod panic;
pub mod stat;

pub(crate) mod util;

pub use errno::{SyscallError, translate};
pub use panic::InternalConflictPanic;
pub use stat::*;
