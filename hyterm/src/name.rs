//! Identifiers carried by constants and binders.
use crate::hash::hash_of;

/// An opaque identifier, either textual or machine-generated.
///
/// Names are only ever hashed, compared and displayed by this crate.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Name {
    // Boxed to keep the enum two words wide
    Str(Box<str>),

    /// Doesn't have a string name and was given a number
    Num(usize),
}

impl Name {
    /// Stable 64-bit hash of this name.
    #[inline]
    pub fn hash(&self) -> u64 {
        hash_of(self)
    }

    /// Textual form of the name, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Name::Str(s) => Some(s),
            Name::Num(_) => None,
        }
    }
}

impl From<String> for Name {
    fn from(s: String) -> Self {
        Name::Str(s.into_boxed_str())
    }
}

impl From<&str> for Name {
    fn from(s: &str) -> Self {
        Name::Str(Box::from(s))
    }
}

impl From<usize> for Name {
    fn from(n: usize) -> Self {
        Name::Num(n)
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Name::Str(s) => write!(f, "{}", s),
            Name::Num(n) => write!(f, "%{}", n),
        }
    }
}
