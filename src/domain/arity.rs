//! Arity policy: how many children a node may hold.

use std::fmt;
use std::num::NonZeroUsize;

/// Child-count policy shared by every node of a tree.
///
/// `Fixed(n)` nodes own exactly `n` slots, some of which may be vacant.
/// `Unbounded` nodes keep a dense list without holes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Arity {
    #[default]
    Unbounded,
    Fixed(NonZeroUsize),
}

impl Arity {
    /// Normalizes a signed capacity: anything below 1 means unbounded.
    pub fn from_capacity(capacity: i64) -> Self {
        usize::try_from(capacity)
            .ok()
            .and_then(NonZeroUsize::new)
            .map_or(Arity::Unbounded, Arity::Fixed)
    }

    /// Slot count for fixed arity, `None` when unbounded.
    pub fn capacity(&self) -> Option<usize> {
        match self {
            Arity::Unbounded => None,
            Arity::Fixed(n) => Some(n.get()),
        }
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, Arity::Fixed(_))
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Unbounded => write!(f, "unbounded"),
            Arity::Fixed(n) => write!(f, "fixed({})", n),
        }
    }
}
