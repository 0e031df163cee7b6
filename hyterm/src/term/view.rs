//! Borrowed, exhaustively-matchable view of a term node.
//!
//! Matching on a [`TermView`] is the access path that cannot ask a node for a payload it
//! does not carry; the panicking accessors on [`Term`] are sugar over it.
use num_bigint::BigInt;
use strum::EnumIs;

use crate::level::Level;
use crate::name::Name;
use crate::term::{Term, TermKind};

/// Describes the outer constructor of a term and borrows its payload.
#[derive(Debug, Clone, Copy, EnumIs)]
pub enum TermView<'a> {
    /// Bound variable, as a de Bruijn index.
    Var(u32),
    /// Named constant. `pos` is provenance only and never compared.
    Constant { name: &'a Name, pos: u32 },
    /// Flattened n-ary application; the head is `args[0]` and never itself an application.
    App(&'a [Term]),
    Lambda {
        name: &'a Name,
        ty: &'a Term,
        body: &'a Term,
    },
    Pi {
        name: &'a Name,
        ty: &'a Term,
        body: &'a Term,
    },
    Type(&'a Level),
    Numeral(&'a BigInt),
}

impl<'a> TermView<'a> {
    /// Tag of the viewed node.
    pub fn kind(&self) -> TermKind {
        match self {
            TermView::Var(_) => TermKind::Var,
            TermView::Constant { .. } => TermKind::Constant,
            TermView::App(_) => TermKind::App,
            TermView::Lambda { .. } => TermKind::Lambda,
            TermView::Pi { .. } => TermKind::Pi,
            TermView::Type(_) => TermKind::Type,
            TermView::Numeral(_) => TermKind::Numeral,
        }
    }

    /// Binder name, type and body of a Lambda or Pi.
    pub fn abstraction(&self) -> Option<(&'a Name, &'a Term, &'a Term)> {
        match *self {
            TermView::Lambda { name, ty, body } | TermView::Pi { name, ty, body } => {
                Some((name, ty, body))
            }
            _ => None,
        }
    }
}
