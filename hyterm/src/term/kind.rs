use strum::{Display, EnumIs, EnumIter, FromRepr};

/// Variant tag of a term node.
///
/// The discriminant is mixed into every node hash, so its values are part of the hash
/// contract and must stay stable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIs, EnumIter, FromRepr,
)]
#[repr(u8)]
pub enum TermKind {
    // Leaves
    Var,
    Constant,
    Type,
    Numeral,

    // Composite
    App,
    Lambda,
    Pi,
}

impl TermKind {
    /// Whether nodes of this kind own child terms.
    #[inline]
    pub fn is_composite(self) -> bool {
        matches!(self, TermKind::App | TermKind::Lambda | TermKind::Pi)
    }

    /// Lambda or Pi.
    #[inline]
    pub fn is_abstraction(self) -> bool {
        matches!(self, TermKind::Lambda | TermKind::Pi)
    }
}
