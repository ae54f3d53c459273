//! Reverse-routed HTTP calls.
//!
//! A [`RoutedCall`] is what a reverse router hands back for a route and its
//! parameters: an HTTP method, the path plus query string, and an optional
//! fragment. From it you build the strings responses need: relative paths,
//! absolute `http(s)` URLs, `ws(s)` URLs and cache-busted links.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod call;
mod error;
mod helpers;
mod request;
mod scheme;
mod token;
mod types;

// Public API
pub use call::RoutedCall;
pub use error::{CallError, Result};
pub use request::{RequestContext, RequestHeader};
pub use token::{FixedToken, SequenceTokens, TokenSource};
#[cfg(feature = "std")]
pub use token::RandomTokens;
pub use types::SchemeType;
