//! The boundary between the typed API and the syscalls themselves.
//!
//! Everything crossing the boundary is numeric, the same way a C function would report it. A
//! [`NativeBoundary`] issues the call and the decoders in this module turn its return codes into
//! [`Result`]s, so the decoding can be exercised with a fake boundary and no syscall at all.

mod boundary;
mod raw;
mod sys;
mod tests;

pub use boundary::*;
pub use raw::*;
pub use sys::*;
