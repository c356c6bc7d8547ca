//! Conditions that are bugs rather than runtime failures.
//!
//! Types in here implement [`Error`] so they display like every other error in the crate, but they
//! are never returned in a [`Result`]. Invoking [`Panic::panic`] is the only thing to do with them.

use std::error::Error;

use derive_more::{Display, Error};

pub trait Panic: Error {
    fn panic(&self) -> ! {
        panic!("{}", self)
    }
}

/// The native boundary returned a code outside of its documented contract.
///
/// This is distinct from a [`SyscallError`](crate::SyscallError): the OS never reported anything,
/// the marshaling layer and the native call simply disagree with each other.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("INTERNAL CONFLICT in native boundary")]
pub struct InternalConflictPanic;
impl Panic for InternalConflictPanic {}
