#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![cfg_attr(not(feature = "std"), no_std)]

//! A strict parser and canonical serializer for [package URLs] (purls).
//!
//! [package URLs]: https://github.com/package-url/purl-spec
//!
//! A package URL names a software package across ecosystems:
//!
//! ```text
//! pkg:type/namespace/name@version?qualifiers#subpath
//! ```
//!
//! See the documentation of [`PackageUrl`] for more details.
//!
//! # Examples
//!
//! Parse a package URL and get its canonical form:
//!
//! ```
//! use purl_canon::PackageUrl;
//!
//! let purl = PackageUrl::parse("PKG:GitHub/ACME/Repo@main?Arch=i386#/src//lib/")?;
//! assert_eq!(purl.to_string(), "pkg:github/acme/repo@main?arch=i386#src/lib");
//! # Ok::<_, purl_canon::ParseError>(())
//! ```
//!
//! Build a package URL from its components:
//!
//! ```
//! use purl_canon::PackageUrl;
//!
//! let purl = PackageUrl::builder("npm", "core")
//!     .namespace("@angular")
//!     .version("16.0.0")
//!     .build()?;
//! assert_eq!(purl.to_string(), "pkg:npm/%40angular/core@16.0.0");
//! # Ok::<_, purl_canon::ParseError>(())
//! ```
//!
//! # Feature flags
//!
//! All features except `std` are disabled by default.
//!
//! - `std`: Enables `std` support. This includes [`Error`] implementations.
//!   Without it the crate is `no_std` and only needs `alloc`.
//!
//! - `impl-error`: Enables [`Error`] implementations without `std`.
//!
//! - `serde`: Enables [`serde`] support. A [`PackageUrl`] serializes as a map of its
//!   components and deserializes from either such a map or a package URL string.
//!
//! - `logging`: Logs rejected inputs at debug level through the [`log`] facade.
//!
//! [`Error`]: core::error::Error
//! [`serde`]: https://docs.rs/serde
//! [`log`]: https://docs.rs/log

extern crate alloc;

#[cfg(all(feature = "impl-error", not(feature = "std")))]
use core::error::Error;
#[cfg(feature = "std")]
use std::error::Error;

/// Logs at debug level when the `logging` feature is enabled.
#[cfg(feature = "logging")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

/// Type-checks the arguments and does nothing when the `logging` feature is disabled.
#[cfg(not(feature = "logging"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        let _ = format_args!($($arg)*);
    }};
}

mod build;
mod error;
mod fmt;
mod grammar;
mod normalize;
mod parse;
pub mod pct_enc;
mod purl;
mod qualifiers;
#[cfg(feature = "serde")]
mod serde_impl;

pub use build::Builder;
pub use error::{ParseError, ParseErrorKind};
pub use purl::PackageUrl;
pub use qualifiers::{Iter, Qualifiers};
