mod fmt;
mod syscall;

pub mod panic;

pub use fmt::*;
pub use syscall::*;
