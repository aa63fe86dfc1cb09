//! Public-visibility policy of a field.

use std::collections::BTreeSet;

/// Which parts of a field appear in public output.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Visibility {
    /// The field and all of its entries are public.
    #[default]
    Public,
    /// The field never appears in public output, even when requested.
    Private,
    /// Only the listed collection entries or nested fields are public.
    ///
    /// Valid for collection and nested fields only. An empty set hides the
    /// field entirely.
    Only(BTreeSet<String>),
}

impl Visibility {
    /// Build an [`Visibility::Only`] policy from a list of keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_object::Visibility;
    /// let policy = Visibility::only(["alpha", "charlie"]);
    /// assert!(policy.admits("alpha"));
    /// assert!(!policy.admits("bravo"));
    /// ```
    #[must_use]
    pub fn only<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Only(keys.into_iter().map(Into::into).collect())
    }

    /// Whether the field itself appears in its parent's public output.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        match self {
            Self::Public => true,
            Self::Private => false,
            Self::Only(keys) => !keys.is_empty(),
        }
    }

    /// Whether a collection entry with `key` appears in public output.
    #[must_use]
    pub fn admits(&self, key: &str) -> bool {
        match self {
            Self::Public => true,
            Self::Private => false,
            Self::Only(keys) => keys.contains(key),
        }
    }

    /// The key restriction, when one applies.
    #[must_use]
    pub const fn restriction(&self) -> Option<&BTreeSet<String>> {
        match self {
            Self::Only(keys) => Some(keys),
            Self::Public | Self::Private => None,
        }
    }
}

impl From<bool> for Visibility {
    fn from(public: bool) -> Self {
        if public { Self::Public } else { Self::Private }
    }
}
