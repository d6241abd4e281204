//! Configuration options for merging and sorting.
//!
//! - [`MergeOptions`]: whether a merge consumes its update sequence
//! - [`SortOptions`]: what a reference sort does with keys missing from the
//!   reference order ([`MissingKey`])
//!
//! ## Examples
//!
//! ```rust
//! use seqmerge::{merge_with_options, seq, MergeOptions};
//!
//! let mut update = seq![3, 1, 2];
//! let merged = merge_with_options(&seq![1, "a"], &mut update, &MergeOptions::strict());
//! assert_eq!(merged, seq![3, 1, 2, "a"]);
//! assert!(update.is_empty());
//! ```

/// Configuration for [`merge_with_options`](crate::merge_with_options).
///
/// # Examples
///
/// ```rust
/// use seqmerge::MergeOptions;
///
/// let options = MergeOptions::new();
/// assert!(!options.strict);
///
/// let options = MergeOptions::new().with_strict(true);
/// assert!(options.strict);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MergeOptions {
    /// Consume the update sequence: merged items are moved out of it.
    ///
    /// When the two sequences share no anchor, nothing is merged and the
    /// update is left as it was.
    pub strict: bool,
}

impl MergeOptions {
    /// Creates default options (non-strict).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for a strict, consuming merge.
    #[must_use]
    pub fn strict() -> Self {
        MergeOptions { strict: true }
    }

    /// Sets the strict flag.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Policy for items whose key is absent from the reference order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MissingKey {
    /// Place such items after every item with a known key, keeping their
    /// relative order.
    #[default]
    Last,
    /// Fail with [`Error::UndefinedOrdering`](crate::Error::UndefinedOrdering).
    Error,
}

/// Configuration for reference sorting.
///
/// # Examples
///
/// ```rust
/// use seqmerge::{MissingKey, SortOptions};
///
/// assert_eq!(SortOptions::new().missing, MissingKey::Last);
/// assert_eq!(SortOptions::strict().missing, MissingKey::Error);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortOptions {
    pub missing: MissingKey,
}

impl SortOptions {
    /// Creates default options (missing keys sort last).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that reject keys missing from the reference order.
    #[must_use]
    pub fn strict() -> Self {
        SortOptions {
            missing: MissingKey::Error,
        }
    }

    /// Sets the missing key policy.
    #[must_use]
    pub fn with_missing(mut self, missing: MissingKey) -> Self {
        self.missing = missing;
        self
    }
}
