//! Error types.

use core::fmt;

/// Detailed cause of a [`ParseError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// The input is empty or consists only of whitespace.
    Empty,
    /// The input does not start with the `pkg:` scheme (case-insensitive).
    MissingScheme,
    /// The input carries a URL authority with userinfo or a port.
    ///
    /// The error index points to the first byte of the authority.
    Authority,
    /// The path has fewer than two segments, so the type or the name is missing.
    MissingTypeOrName,
    /// The type does not match `ALPHA 1*( ALPHA / DIGIT / "." / "-" )`.
    ///
    /// The error index points to the first byte of the type.
    InvalidType,
    /// A segment of the namespace is empty.
    ///
    /// The error index points to the first byte of the namespace.
    EmptyNamespaceSegment,
    /// The name is empty after decoding.
    EmptyName,
    /// A qualifier key does not match `ALPHA *( ALPHA / DIGIT / "." / "_" / "-" )`.
    ///
    /// The error index points to the first byte of the key.
    InvalidQualifierKey,
    /// A qualifier key appears twice after lowercasing.
    ///
    /// The error index points to the first byte of the second occurrence.
    DuplicateQualifierKey,
    /// A segment of the subpath is `"."` or `".."`.
    ///
    /// The error index points to the first byte of the subpath.
    InvalidSubpathSegment,
    /// A percent character `'%'` is not followed by two hexadecimal digits.
    ///
    /// The error index points to the percent character.
    InvalidOctet,
    /// A component does not decode to valid UTF-8.
    ///
    /// The error index points to the first byte of the component.
    InvalidUtf8,
}

impl ParseErrorKind {
    fn description(self) -> &'static str {
        match self {
            Self::Empty => "empty package URL",
            Self::MissingScheme => "missing \"pkg:\" scheme",
            Self::Authority => "package URL must not contain userinfo or port",
            Self::MissingTypeOrName => "type and name required",
            Self::InvalidType => "invalid type",
            Self::EmptyNamespaceSegment => "empty namespace segment",
            Self::EmptyName => "empty name",
            Self::InvalidQualifierKey => "invalid qualifier key",
            Self::DuplicateQualifierKey => "duplicate qualifier key",
            Self::InvalidSubpathSegment => "subpath segment must not be \".\" or \"..\"",
            Self::InvalidOctet => "invalid percent-encoded octet",
            Self::InvalidUtf8 => "component does not decode to valid UTF-8",
        }
    }
}

/// An error occurred when parsing or building a malformed package URL.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ParseError {
    pub(crate) index: usize,
    pub(crate) kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) const fn new(index: usize, kind: ParseErrorKind) -> Self {
        Self { index, kind }
    }

    /// Returns the index at which the error occurred in the input.
    ///
    /// Errors from building a package URL from its components
    /// always have index `0`.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the detailed cause of the error.
    #[must_use]
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    pub(crate) fn at(self, offset: usize) -> Self {
        Self {
            index: self.index + offset,
            kind: self.kind,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "malformed package URL: {} at index {}",
            self.kind.description(),
            self.index
        )
    }
}

#[cfg(feature = "impl-error")]
impl crate::Error for ParseError {}

pub(crate) type Result<T, E = ParseError> = core::result::Result<T, E>;

/// Returns immediately with an error.
macro_rules! err {
    ($index:expr, $kind:ident) => {
        return Err($crate::error::ParseError::new(
            $index,
            $crate::error::ParseErrorKind::$kind,
        ))
    };
}

pub(crate) use err;
