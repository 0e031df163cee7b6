//! Free-function constructors for terms.
//!
//! Every constructor allocates exactly one node holding one fresh ownership count. Children
//! passed in are shared, not copied: the new node holds one more handle on each of them.
use num_bigint::BigInt;

use crate::error::{TermError, TermResult, contract};
use crate::level::Level;
use crate::name::Name;
use crate::term::{Abstraction, Payload, Term, TermView};

/// Bound variable with de Bruijn index `idx`.
#[inline]
pub fn var(idx: u32) -> Term {
    Term::new(Payload::Var(idx))
}

/// Named constant. `pos` is provenance only: it is neither hashed nor compared.
#[inline]
pub fn constant(name: impl Into<Name>, pos: u32) -> Term {
    Term::new(Payload::Constant {
        name: name.into(),
        pos,
    })
}

/// Universe `Type level`.
#[inline]
pub fn type_(level: Level) -> Term {
    Term::new(Payload::Type(level))
}

/// Same as [`type_`]
#[inline]
pub fn r#type(level: Level) -> Term {
    type_(level)
}

/// Numeral literal.
#[inline]
pub fn numeral(value: impl Into<BigInt>) -> Term {
    Term::new(Payload::Numeral(value.into()))
}

/// Lambda abstraction `fun (name : ty) body`.
#[inline]
pub fn lambda(name: impl Into<Name>, ty: Term, body: Term) -> Term {
    Term::new(Payload::Lambda(Abstraction {
        name: name.into(),
        ty,
        body,
    }))
}

/// Dependent function type `pi (name : ty) body`.
#[inline]
pub fn pi(name: impl Into<Name>, ty: Term, body: Term) -> Term {
    Term::new(Payload::Pi(Abstraction {
        name: name.into(),
        ty,
        body,
    }))
}

/// Build an application, flattening a head that is itself an application.
///
/// `try_app(&[app(&[g, a]), b])` yields the single node `(g a b)`. The old head node is left
/// untouched; its children gain one more handle each.
pub fn try_app(children: &[Term]) -> TermResult<Term> {
    let [head, rest @ ..] = children else {
        return Err(TermError::AppArity(0));
    };
    if rest.is_empty() {
        return Err(TermError::AppArity(1));
    }

    let args: Vec<Term> = match head.view() {
        TermView::App(inner) => {
            let mut args = Vec::with_capacity(inner.len() + rest.len());
            args.extend_from_slice(inner);
            args.extend_from_slice(rest);
            args
        }
        _ => children.to_vec(),
    };
    Ok(Term::new(Payload::App(args.into_boxed_slice())))
}

/// Build an application. Panics with fewer than two children.
#[track_caller]
pub fn app(children: &[Term]) -> Term {
    contract(try_app(children))
}

/// `(f a)`
#[inline]
pub fn app2(f: &Term, a: &Term) -> Term {
    app(&[f.clone(), a.clone()])
}

/// `(f a b)`
#[inline]
pub fn app3(f: &Term, a: &Term, b: &Term) -> Term {
    app(&[f.clone(), a.clone(), b.clone()])
}

/// Rebuild the outermost node of `term` through the ordinary constructors.
///
/// The result is a distinct node for every kind of term; children are shared with the
/// original rather than copied.
pub fn copy(term: &Term) -> Term {
    match term.view() {
        TermView::Var(idx) => var(idx),
        TermView::Constant { name, pos } => constant(name.clone(), pos),
        TermView::Type(level) => type_(level.clone()),
        TermView::Numeral(value) => numeral(value.clone()),
        TermView::App(args) => app(args),
        TermView::Lambda { name, ty, body } => lambda(name.clone(), ty.clone(), body.clone()),
        TermView::Pi { name, ty, body } => pi(name.clone(), ty.clone(), body.clone()),
    }
}
