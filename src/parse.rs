//! Splitting of package URL strings into components.

use crate::{
    build::{Builder, Offsets},
    error::{err, ParseError, ParseErrorKind, Result},
    pct_enc::EStr,
    qualifiers::Qualifiers,
    PackageUrl,
};
use alloc::borrow::Cow;

const SCHEME_PREFIX: &str = "pkg:";

/// Percent-decodes a raw component starting at `offset` in the input.
pub(crate) fn decode(s: &str, offset: usize) -> Result<Cow<'_, str>> {
    EStr::try_new(s)
        .map_err(|i| ParseError::new(offset + i, ParseErrorKind::InvalidOctet))?
        .decode()
        .to_string()
        .map_err(|_| ParseError::new(offset, ParseErrorKind::InvalidUtf8))
}

/// A raw component together with the index where it starts in the input.
#[derive(Clone, Copy)]
struct Span<'a> {
    s: &'a str,
    start: usize,
}

impl<'a> Span<'a> {
    /// Splits on the last occurrence of `delim`, returning the parts before and after it.
    fn rsplit_once(self, delim: char) -> (Self, Option<Self>) {
        match self.s.rfind(delim) {
            Some(i) => (
                Span {
                    s: &self.s[..i],
                    start: self.start,
                },
                Some(Span {
                    s: &self.s[i + 1..],
                    start: self.start + i + 1,
                }),
            ),
            None => (self, None),
        }
    }

    fn decode(self) -> Result<Cow<'a, str>> {
        decode(self.s, self.start)
    }
}

/// Rejects a URL authority carrying userinfo or a port, as in `pkg://user@host:8080/...`.
fn check_authority(rest: Span<'_>) -> Result<()> {
    let Some(s) = rest.s.strip_prefix("//") else {
        return Ok(());
    };
    let authority = s.split('/').next().unwrap_or_default();

    let has_port = authority
        .rsplit_once(':')
        .is_some_and(|(_, port)| !port.is_empty() && port.bytes().all(|x| x.is_ascii_digit()));

    if authority.contains('@') || has_port {
        err!(rest.start + 2, Authority);
    }
    Ok(())
}

pub(crate) fn parse(s: &str) -> Result<PackageUrl> {
    let res = parse_inner(s);
    if let Err(e) = &res {
        log_debug!("rejected package URL {s:?}: {e}");
    }
    res
}

fn parse_inner(s: &str) -> Result<PackageUrl> {
    if s.trim().is_empty() {
        err!(0, Empty);
    }

    let rest = match s.get(..SCHEME_PREFIX.len()) {
        Some(scheme) if scheme.eq_ignore_ascii_case(SCHEME_PREFIX) => Span {
            s: &s[SCHEME_PREFIX.len()..],
            start: SCHEME_PREFIX.len(),
        },
        _ => err!(0, MissingScheme),
    };
    check_authority(rest)?;

    // Peel from the right, outermost component first, so that delimiters
    // inside the qualifiers and the subpath never split the path.
    let (rest, subpath) = rest.rsplit_once('#');
    let (rest, qualifiers) = rest.rsplit_once('?');
    let (rest, version) = rest.rsplit_once('@');

    let trimmed = rest.s.trim_start_matches('/');
    let path = Span {
        s: trimmed.trim_end_matches('/'),
        start: rest.start + (rest.s.len() - trimmed.len()),
    };

    let Some((ty, rest)) = path.s.split_once('/') else {
        err!(path.start, MissingTypeOrName);
    };
    let rest = Span {
        s: rest,
        start: path.start + ty.len() + 1,
    };
    let (namespace, name) = match rest.rsplit_once('/') {
        (namespace, Some(name)) => (Some(namespace), name),
        (name, None) => (None, name),
    };

    let mut offsets = Offsets {
        ty: path.start,
        name: name.start,
        ..Offsets::default()
    };

    let mut builder = Builder::new(ty, name.decode()?);
    if let Some(namespace) = namespace {
        offsets.namespace = namespace.start;
        builder = builder.namespace(namespace.decode()?);
    }
    if let Some(version) = version {
        builder = builder.version(version.decode()?);
    }
    if let Some(qualifiers) = qualifiers {
        builder = builder.qualifiers(Qualifiers::parse(qualifiers.s, qualifiers.start)?);
    }
    if let Some(subpath) = subpath {
        offsets.subpath = subpath.start;
        builder = builder.subpath(subpath.decode()?);
    }
    builder.build_at(&offsets)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn err_of(s: &str) -> (ParseErrorKind, usize) {
        let e = parse(s).unwrap_err();
        (e.kind(), e.index())
    }

    #[test]
    fn error_indexes() {
        use ParseErrorKind::*;

        assert_eq!(err_of(""), (Empty, 0));
        assert_eq!(err_of(" \t"), (Empty, 0));
        assert_eq!(err_of("npm/foo"), (MissingScheme, 0));
        assert_eq!(err_of("pkg"), (MissingScheme, 0));
        assert_eq!(err_of("pkg://user@host/npm/foo"), (Authority, 6));
        assert_eq!(err_of("pkg://host:8080/npm/foo"), (Authority, 6));
        assert_eq!(err_of("pkg:onlytype"), (MissingTypeOrName, 4));
        assert_eq!(err_of("pkg:///onlytype"), (MissingTypeOrName, 7));
        assert_eq!(err_of("pkg:n_pm/foo"), (InvalidType, 4));
        assert_eq!(err_of("pkg:npm//pkg@1.0"), (EmptyNamespaceSegment, 8));
        assert_eq!(err_of("pkg:npm/a/b%2F/pkg"), (EmptyNamespaceSegment, 8));
        assert_eq!(err_of("pkg:npm/foo?a=1&bad!key=v"), (InvalidQualifierKey, 16));
        assert_eq!(err_of("pkg:npm/foo?a=1&A=2"), (DuplicateQualifierKey, 16));
        assert_eq!(err_of("pkg:npm/foo#a/../b"), (InvalidSubpathSegment, 12));
        assert_eq!(err_of("pkg:npm/fo%zzo"), (InvalidOctet, 10));
        assert_eq!(err_of("pkg:npm/foo@%C3"), (InvalidUtf8, 12));
    }

    #[test]
    fn authority_without_userinfo_or_port() {
        let purl = parse("pkg://npm/foo").unwrap();
        assert_eq!(purl.ty(), "npm");
        assert_eq!(purl.name(), "foo");

        let purl = parse("pkg://github/user%40host/repo").unwrap();
        assert_eq!(purl.namespace(), Some("user@host"));
    }
}
