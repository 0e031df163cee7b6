//! Universe levels attached to `Type` terms.
//!
//! Levels are treated as opaque values by the term layer: they are hashed, compared
//! structurally and printed, never normalized.
use crate::Shared;
use crate::hash::hash_of;
use crate::name::Name;

/// A universe level expression.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Level {
    /// The bottom universe.
    #[default]
    Zero,
    /// The universe directly above the inner level.
    Succ(Shared<Level>),
    /// The least upper bound of two levels.
    Max(Shared<Level>, Shared<Level>),
    /// A universe parameter.
    Param(Name),
}

impl Level {
    pub fn zero() -> Self {
        Level::Zero
    }

    pub fn param(name: impl Into<Name>) -> Self {
        Level::Param(name.into())
    }

    /// The closed level `n`, i.e. `n` successors applied to zero.
    pub fn from_offset(n: usize) -> Self {
        (0..n).fold(Level::Zero, |l, _| l.succ())
    }

    pub fn succ(&self) -> Self {
        Level::Succ(Shared::new(self.clone()))
    }

    pub fn max(&self, other: &Level) -> Self {
        Level::Max(Shared::new(self.clone()), Shared::new(other.clone()))
    }

    /// Stable 64-bit hash of this level.
    #[inline]
    pub fn hash(&self) -> u64 {
        hash_of(self)
    }

    /// Split off the successor chain: returns the innermost non-`Succ` level and the number
    /// of successors wrapped around it.
    pub fn to_offset(&self) -> (&Level, usize) {
        let mut level = self;
        let mut k = 0;
        while let Level::Succ(inner) = level {
            level = &**inner;
            k += 1;
        }
        (level, k)
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (base, k) = self.to_offset();
        match base {
            Level::Zero => return write!(f, "{}", k),
            Level::Param(n) => write!(f, "{}", n)?,
            Level::Max(a, b) => write!(f, "(max {} {})", a, b)?,
            Level::Succ(_) => unreachable!(),
        }
        if k > 0 {
            write!(f, "+{}", k)?;
        }
        Ok(())
    }
}
