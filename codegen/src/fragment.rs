//! Generated source fragments.

use std::fmt;
use std::hash::Hasher;

use crate::skeleton::OperatorShape;

/// Immutable device source produced for one operator descriptor.
///
/// The text is meant to be concatenated verbatim with a generic algorithm
/// kernel. It is a pure function of the synthesis inputs, so
/// [`Self::content_hash`] is a sound key for caching compiled modules.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceFragment {
    code: String,
    shape: OperatorShape,
}

impl SourceFragment {
    pub(crate) fn new(code: String, shape: OperatorShape) -> Self {
        Self { code, shape }
    }

    pub fn as_str(&self) -> &str {
        &self.code
    }

    pub fn into_string(self) -> String {
        self.code
    }

    /// Shape the fragment was rendered from.
    pub fn shape(&self) -> OperatorShape {
        self.shape
    }

    /// xxh64 (seed 0) of the source text.
    pub fn content_hash(&self) -> u64 {
        use xxhash_rust::xxh64::Xxh64;

        let mut hasher = Xxh64::new(0);
        hasher.write(self.code.as_bytes());
        hasher.finish()
    }
}

impl fmt::Display for SourceFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl AsRef<str> for SourceFragment {
    fn as_ref(&self) -> &str {
        &self.code
    }
}

impl From<SourceFragment> for String {
    fn from(fragment: SourceFragment) -> Self {
        fragment.code
    }
}
