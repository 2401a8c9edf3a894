//! The classification rule deciding whether a release entry is missing from a version
//!
//! Every category of release entry goes through [`is_missing`]; the only thing that
//! varies per category is its [`BackportScope`].

use serde::{Deserialize, Serialize};

use crate::version::number::VersionNumber;

/// Which major branches an entry's tagging version must share with the user's version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BackportScope {
    /// The entry only counts when it was released on the user's own major branch.
    /// Fixes are back-ported per branch, so a fix tagged `16.1` says nothing about 15.x.
    SameMajor,
    /// Any strictly newer release counts, regardless of branch.
    AnyMajor,
}

/// Per-category scopes used by the release index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassificationRules {
    pub bugs: BackportScope,
    pub security: BackportScope,
    pub features: BackportScope,
    pub performance: BackportScope,
}

impl Default for ClassificationRules {
    fn default() -> Self {
        Self {
            bugs: BackportScope::SameMajor,
            security: BackportScope::SameMajor,
            features: BackportScope::AnyMajor,
            performance: BackportScope::AnyMajor,
        }
    }
}

/// Returns true when an entry tagged `tagged` is something `current` does not have yet.
pub fn is_missing(tagged: &VersionNumber, current: &VersionNumber, scope: BackportScope) -> bool {
    if !tagged.is_strictly_newer(current) {
        return false;
    }
    match scope {
        BackportScope::SameMajor => tagged.same_major(current),
        BackportScope::AnyMajor => true,
    }
}
