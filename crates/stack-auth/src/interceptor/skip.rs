//! Methods exempt from authorization.

use std::collections::HashSet;

/// Immutable set of fully-qualified method names (`/package.Service/Method`)
/// that may be called without a token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodSkipSet {
    methods: HashSet<String>,
}

impl MethodSkipSet {
    /// Creates a skip-set from method names.
    pub fn new<I, S>(methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            methods: methods.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `true` if `method` is exempt.
    pub fn contains(&self, method: &str) -> bool {
        self.methods.contains(method)
    }

    /// Number of exempt methods.
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Returns `true` if no method is exempt.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for MethodSkipSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
