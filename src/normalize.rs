//! Type-specific normalization of names and namespaces, and subpath normalization.

use crate::{error::Result, grammar};
use alloc::{borrow::ToOwned, string::String, vec::Vec};

/// A folding rule applied to a decoded component.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Fold {
    Keep,
    Lowercase,
    /// Replaces `'_'` with `'-'`, then lowercases.
    PypiName,
}

impl Fold {
    fn apply(self, s: &str) -> String {
        match self {
            Fold::Keep => s.to_owned(),
            Fold::Lowercase => s.to_lowercase(),
            Fold::PypiName => s.replace('_', "-").to_lowercase(),
        }
    }
}

struct TypeRules {
    ty: &'static str,
    namespace: Fold,
    name: Fold,
}

const fn rules(ty: &'static str, namespace: Fold, name: Fold) -> TypeRules {
    TypeRules {
        ty,
        namespace,
        name,
    }
}

/// Types with folding rules, keyed by lowercase type.
///
/// Types not listed here keep their namespace and name unchanged.
const TYPE_RULES: &[TypeRules] = &[
    rules("bitbucket", Fold::Lowercase, Fold::Lowercase),
    rules("github", Fold::Lowercase, Fold::Lowercase),
    rules("gitlab", Fold::Lowercase, Fold::Lowercase),
    rules("pypi", Fold::Lowercase, Fold::PypiName),
];

fn lookup(ty: &str) -> Option<&'static TypeRules> {
    TYPE_RULES.iter().find(|r| r.ty == ty)
}

/// Normalizes a decoded namespace for the given lowercase type.
pub(crate) fn namespace(ty: &str, s: &str) -> String {
    lookup(ty).map_or(Fold::Keep, |r| r.namespace).apply(s)
}

/// Normalizes a decoded name for the given lowercase type.
pub(crate) fn name(ty: &str, s: &str) -> String {
    lookup(ty).map_or(Fold::Keep, |r| r.name).apply(s)
}

/// Normalizes a decoded subpath.
///
/// Empty segments are dropped, so leading, trailing and doubled slashes go away.
/// Returns `None` if no segment is left.
pub(crate) fn subpath(s: &str) -> Result<Option<String>> {
    let segments = s
        .split('/')
        .filter(|seg| !seg.is_empty())
        .map(|seg| grammar::check_subpath_segment(seg).map(|()| seg))
        .collect::<Result<Vec<_>>>()?;

    if segments.is_empty() {
        Ok(None)
    } else {
        Ok(Some(segments.join("/")))
    }
}
