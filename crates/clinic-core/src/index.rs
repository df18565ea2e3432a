//! Positions in user-visible lists.

use std::fmt;

/// A position in a displayed list.
///
/// Users count from 1; the store counts from 0. Keeping both behind one type
/// stops the two conventions from mixing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index(usize);

impl Index {
    pub fn from_zero_based(index: usize) -> Self {
        Self(index)
    }

    /// Returns `None` for 0, which has no 1-based meaning.
    pub fn from_one_based(index: usize) -> Option<Self> {
        index.checked_sub(1).map(Self)
    }

    pub fn zero_based(&self) -> usize {
        self.0
    }

    pub fn one_based(&self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}
