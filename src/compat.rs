/// Compatibility layer for `std`/`no_std`
#[cfg(feature = "std")]
pub use std::{format, string::String, vec::Vec};

#[cfg(not(feature = "std"))]
pub use alloc::{format, string::String, vec::Vec};
