//! Metadata queries and the typed record they produce.
//!
//! [`StatOptions`] is the entry point. The free functions [`query`], [`stat`], [`lstat`] and
//! [`is_symlink`] are shorthands for the common cases using the default [`LibcBoundary`].
//!
//! [`LibcBoundary`]: crate::native::LibcBoundary

mod display;
mod file_type;
mod metadata;
mod options;
mod timestamp;

pub use file_type::*;
pub use metadata::*;
pub use options::*;
pub use timestamp::*;
