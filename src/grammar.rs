//! Grammar checks for the components of a package URL.
//!
//! Every check takes a decoded component and reports errors at index `0`;
//! the parser shifts the index to where the component starts in the input.

use crate::{
    error::{err, Result},
    pct_enc::table,
};

/// Checks that `s` is a valid type: `ALPHA 1*( ALPHA / DIGIT / "." / "-" )`.
pub(crate) fn check_type(s: &str) -> Result<()> {
    match s.as_bytes() {
        [first, rest @ ..]
            if !rest.is_empty()
                && table::ALPHA.allows_ascii(*first)
                && table::TYPE.validate(rest) =>
        {
            Ok(())
        }
        _ => err!(0, InvalidType),
    }
}

/// Checks that no segment of the namespace is empty.
///
/// Unlike the subpath, a leading, trailing or doubled `'/'` is an error here.
pub(crate) fn check_namespace(s: &str) -> Result<()> {
    if s.split('/').any(str::is_empty) {
        err!(0, EmptyNamespaceSegment);
    }
    Ok(())
}

pub(crate) fn check_name(s: &str) -> Result<()> {
    if s.is_empty() {
        err!(0, EmptyName);
    }
    Ok(())
}

/// Checks that `s` is a valid qualifier key: `ALPHA *( ALPHA / DIGIT / "." / "_" / "-" )`.
pub(crate) fn check_qualifier_key(s: &str) -> Result<()> {
    match s.as_bytes() {
        [first, rest @ ..]
            if table::ALPHA.allows_ascii(*first) && table::QUALIFIER_KEY.validate(rest) =>
        {
            Ok(())
        }
        _ => err!(0, InvalidQualifierKey),
    }
}

/// Checks a non-empty subpath segment.
pub(crate) fn check_subpath_segment(s: &str) -> Result<()> {
    if s == "." || s == ".." {
        err!(0, InvalidSubpathSegment);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParseErrorKind;

    fn kind<T>(r: Result<T>) -> Option<ParseErrorKind> {
        r.err().map(|e| e.kind())
    }

    #[test]
    fn types() {
        for ty in ["npm", "pypi", "Maven", "a1", "cocoa.pods", "x-y"] {
            assert!(check_type(ty).is_ok(), "{ty}");
        }
        for ty in ["", "n", "1npm", ".npm", "np m", "t#y", "np_m", "np%6D", "ñpm"] {
            assert_eq!(kind(check_type(ty)), Some(ParseErrorKind::InvalidType), "{ty}");
        }
    }

    #[test]
    fn namespaces() {
        assert!(check_namespace("acme").is_ok());
        assert!(check_namespace("a/b/c").is_ok());
        for ns in ["", "/a", "a/", "a//b", "/"] {
            assert_eq!(
                kind(check_namespace(ns)),
                Some(ParseErrorKind::EmptyNamespaceSegment),
                "{ns}"
            );
        }
    }

    #[test]
    fn qualifier_keys() {
        for key in ["arch", "a", "repository_url", "x.y-z", "K9"] {
            assert!(check_qualifier_key(key).is_ok(), "{key}");
        }
        for key in ["", "bad!key", "9lives", "_x", "-x", "a b", "ä"] {
            assert_eq!(
                kind(check_qualifier_key(key)),
                Some(ParseErrorKind::InvalidQualifierKey),
                "{key}"
            );
        }
    }

    #[test]
    fn subpath_segments() {
        assert!(check_subpath_segment("...").is_ok());
        assert!(check_subpath_segment(".hidden").is_ok());
        assert!(check_subpath_segment(".").is_err());
        assert!(check_subpath_segment("..").is_err());
    }
}
