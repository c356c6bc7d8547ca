//! Translation of raw `errno` values into structured errors.
//!
//! The lookup table is built once, on first use, from the constants `libc` exposes for the
//! compilation target. Numbering differs between Unix variants, so no code is ever spelled out
//! as a literal here.

mod error;
mod table;
mod tests;

pub use error::*;
pub use table::*;
