//! Percent-encoders for package URL components.
//!
//! Each encoder leaves the `unreserved` characters of RFC 3986 literal,
//! plus the few delimiters its component keeps readable in canonical form.

use super::table::{self, Table};

/// A trait used by [`encode`] and [`encode_to`] to specify the table used for encoding.
///
/// [`encode`]: super::encode
/// [`encode_to`]: super::encode_to
///
/// # Sub-encoders
///
/// A sub-encoder `SubE` of `E` is an encoder such that `SubE::TABLE` is a [subset] of `E::TABLE`.
///
/// [subset]: Table::is_subset
pub trait Encoder: 'static {
    /// The table used for encoding.
    const TABLE: Table;
}

/// An encoder for the namespace, keeping `'/'` between segments.
#[derive(Debug)]
pub struct Namespace(());

impl Encoder for Namespace {
    const TABLE: Table = table::NAMESPACE;
}

/// An encoder for the name, keeping `':'`.
#[derive(Debug)]
pub struct Name(());

impl Encoder for Name {
    const TABLE: Table = table::NAME;
}

/// An encoder for the version, keeping `':'`.
#[derive(Debug)]
pub struct Version(());

impl Encoder for Version {
    const TABLE: Table = table::VERSION;
}

/// An encoder for qualifier values, keeping `'/'`.
#[derive(Debug)]
pub struct QualifierValue(());

impl Encoder for QualifierValue {
    const TABLE: Table = table::QUALIFIER_VALUE;
}

/// An encoder for the subpath, keeping `'/'` and `':'`.
#[derive(Debug)]
pub struct Subpath(());

impl Encoder for Subpath {
    const TABLE: Table = table::SUBPATH;
}
