//! Term node model: shared, immutable, hash-annotated lambda terms.
//!
//! Role
//! - A [`Term`] is a cheap handle to an immutable node. Cloning bumps an ownership count,
//!   dropping releases it; the node and its owned children go away when the last handle does.
//! - Nodes form a DAG: the same subterm may be reached from many parents, but a node can never
//!   reach itself since children must exist before their parent is built.
//! - Every node carries a hash computed once at construction (see [`crate::hash`]).
//!
//! Access
//! - [`Term::view`] returns a [`TermView`] to match on; this is the mismatch-free path.
//! - Variant accessors such as [`Term::var_idx`] panic when called on the wrong kind of node,
//!   the `try_*` counterparts return a [`TermError`] instead.
//!
//! Performance
//! - Construction is O(1) for leaves and binders and O(n) in the flattened argument count for
//!   applications. Teardown is iterative, so dropping a very deep chain does not recurse.
pub mod func;
pub mod kind;
pub mod pretty;
pub mod view;

pub use kind::TermKind;
pub use view::TermView;

use num_bigint::BigInt;
use smallvec::SmallVec;

use crate::Shared;
use crate::error::{TermError, TermResult, contract};
use crate::hash::{hash_children, hash_leaf, hash_of};
use crate::level::Level;
use crate::name::Name;

/// Payload shared by Lambda and Pi nodes.
pub(crate) struct Abstraction {
    /// Display only; never hashed nor compared.
    pub(crate) name: Name,
    pub(crate) ty: Term,
    pub(crate) body: Term,
}

pub(crate) enum Payload {
    Var(u32),
    Constant { name: Name, pos: u32 },
    App(Box<[Term]>),
    Lambda(Abstraction),
    Pi(Abstraction),
    Type(Level),
    Numeral(BigInt),
}

impl Payload {
    fn kind(&self) -> TermKind {
        match self {
            Payload::Var(_) => TermKind::Var,
            Payload::Constant { .. } => TermKind::Constant,
            Payload::App(_) => TermKind::App,
            Payload::Lambda(_) => TermKind::Lambda,
            Payload::Pi(_) => TermKind::Pi,
            Payload::Type(_) => TermKind::Type,
            Payload::Numeral(_) => TermKind::Numeral,
        }
    }

    fn hash(&self) -> u64 {
        let kind = self.kind();
        match self {
            Payload::Var(idx) => hash_leaf(kind, u64::from(*idx)),
            Payload::Constant { name, .. } => hash_leaf(kind, name.hash()),
            Payload::App(args) => hash_children(kind, args.iter().map(Term::hash)),
            Payload::Lambda(abst) | Payload::Pi(abst) => {
                hash_children(kind, [abst.ty.hash(), abst.body.hash()])
            }
            Payload::Type(level) => hash_leaf(kind, level.hash()),
            Payload::Numeral(value) => hash_leaf(kind, hash_of(value)),
        }
    }
}

pub(crate) struct Node {
    hash: u64,
    payload: Payload,
}

type ReleaseStack = SmallVec<[Term; 16]>;

impl Node {
    /// Move the owned children out of this node, leaving a childless placeholder behind.
    fn release_children(&mut self, stack: &mut ReleaseStack) {
        match std::mem::replace(&mut self.payload, Payload::Var(0)) {
            Payload::App(args) => stack.extend(args.into_vec()),
            Payload::Lambda(abst) | Payload::Pi(abst) => {
                stack.push(abst.ty);
                stack.push(abst.body);
            }
            _ => {}
        }
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        if !self.payload.kind().is_composite() {
            return;
        }

        // Unlink children onto an explicit stack; only nodes we held the last handle to are
        // expanded further, everything else just loses one count.
        let mut stack = ReleaseStack::new();
        self.release_children(&mut stack);
        while let Some(term) = stack.pop() {
            if let Some(mut node) = Shared::into_inner(term.0) {
                node.release_children(&mut stack);
            }
        }
    }
}

/// Shared handle to an immutable term node.
///
/// Equality semantics
/// - `==` is alpha-equivalence (see [`crate::eq`]); binder names never matter.
/// - [`Term::ptr_eq`] tests node identity.
/// - [`std::hash::Hash`] feeds the cached node hash, which is consistent with `==`.
#[derive(Clone)]
pub struct Term(Shared<Node>);

impl Term {
    pub(crate) fn new(payload: Payload) -> Self {
        let hash = payload.hash();
        Term(Shared::new(Node { hash, payload }))
    }

    #[inline]
    pub(crate) fn payload(&self) -> &Payload {
        &self.0.payload
    }

    /// Variant tag of this node.
    #[inline]
    pub fn kind(&self) -> TermKind {
        self.0.payload.kind()
    }

    /// Hash cached at construction.
    #[inline]
    pub fn hash(&self) -> u64 {
        self.0.hash
    }

    /// Describe the node's constructor and borrow its payload.
    pub fn view(&self) -> TermView<'_> {
        match self.payload() {
            Payload::Var(idx) => TermView::Var(*idx),
            Payload::Constant { name, pos } => TermView::Constant { name, pos: *pos },
            Payload::App(args) => TermView::App(&args[..]),
            Payload::Lambda(abst) => TermView::Lambda {
                name: &abst.name,
                ty: &abst.ty,
                body: &abst.body,
            },
            Payload::Pi(abst) => TermView::Pi {
                name: &abst.name,
                ty: &abst.ty,
                body: &abst.body,
            },
            Payload::Type(level) => TermView::Type(level),
            Payload::Numeral(value) => TermView::Numeral(value),
        }
    }

    /// Whether both handles point at the very same node.
    #[inline]
    pub fn ptr_eq(a: &Term, b: &Term) -> bool {
        Shared::ptr_eq(&a.0, &b.0)
    }

    /// Number of live handles to this node, counting parents that hold it as a child.
    #[inline]
    pub fn use_count(&self) -> usize {
        Shared::strong_count(&self.0)
    }

    /// More than one handle refers to this node.
    #[inline]
    pub fn is_shared(&self) -> bool {
        self.use_count() > 1
    }

    /// Node identity, valid for as long as this handle is alive.
    #[inline]
    pub(crate) fn addr(&self) -> usize {
        Shared::as_ptr(&self.0) as usize
    }

    pub fn is_var(&self) -> bool {
        self.kind().is_var()
    }

    pub fn is_constant(&self) -> bool {
        self.kind().is_constant()
    }

    pub fn is_app(&self) -> bool {
        self.kind().is_app()
    }

    pub fn is_lambda(&self) -> bool {
        self.kind().is_lambda()
    }

    pub fn is_pi(&self) -> bool {
        self.kind().is_pi()
    }

    pub fn is_abstraction(&self) -> bool {
        self.kind().is_abstraction()
    }

    pub fn is_type(&self) -> bool {
        self.kind().is_type()
    }

    pub fn is_numeral(&self) -> bool {
        self.kind().is_numeral()
    }

    /// Apply this term to one more argument: `(self arg)`, flattened.
    #[inline]
    pub fn apply(&self, arg: &Term) -> Term {
        func::app(&[self.clone(), arg.clone()])
    }

    fn mismatch(&self, expected: &'static str) -> TermError {
        TermError::KindMismatch {
            expected,
            found: self.kind(),
        }
    }

    // ---- Checked accessors ----

    pub fn try_var_idx(&self) -> TermResult<u32> {
        match self.payload() {
            Payload::Var(idx) => Ok(*idx),
            _ => Err(self.mismatch("a variable")),
        }
    }

    pub fn try_const_name(&self) -> TermResult<&Name> {
        match self.payload() {
            Payload::Constant { name, .. } => Ok(name),
            _ => Err(self.mismatch("a constant")),
        }
    }

    pub fn try_const_pos(&self) -> TermResult<u32> {
        match self.payload() {
            Payload::Constant { pos, .. } => Ok(*pos),
            _ => Err(self.mismatch("a constant")),
        }
    }

    pub fn try_args(&self) -> TermResult<&[Term]> {
        match self.payload() {
            Payload::App(args) => Ok(&args[..]),
            _ => Err(self.mismatch("an application")),
        }
    }

    pub fn try_num_args(&self) -> TermResult<usize> {
        self.try_args().map(<[Term]>::len)
    }

    pub fn try_arg(&self, index: usize) -> TermResult<&Term> {
        let args = self.try_args()?;
        args.get(index).ok_or(TermError::ArgOutOfRange {
            index,
            len: args.len(),
        })
    }

    fn try_abstraction(&self) -> TermResult<&Abstraction> {
        match self.payload() {
            Payload::Lambda(abst) | Payload::Pi(abst) => Ok(abst),
            _ => Err(self.mismatch("a lambda or pi")),
        }
    }

    pub fn try_abst_name(&self) -> TermResult<&Name> {
        self.try_abstraction().map(|abst| &abst.name)
    }

    pub fn try_abst_type(&self) -> TermResult<&Term> {
        self.try_abstraction().map(|abst| &abst.ty)
    }

    pub fn try_abst_body(&self) -> TermResult<&Term> {
        self.try_abstraction().map(|abst| &abst.body)
    }

    pub fn try_ty_level(&self) -> TermResult<&Level> {
        match self.payload() {
            Payload::Type(level) => Ok(level),
            _ => Err(self.mismatch("a type")),
        }
    }

    pub fn try_num_value(&self) -> TermResult<&BigInt> {
        match self.payload() {
            Payload::Numeral(value) => Ok(value),
            _ => Err(self.mismatch("a numeral")),
        }
    }

    // ---- Panicking accessors ----

    /// De Bruijn index of a variable. Panics on any other kind.
    #[track_caller]
    pub fn var_idx(&self) -> u32 {
        contract(self.try_var_idx())
    }

    #[track_caller]
    pub fn const_name(&self) -> &Name {
        contract(self.try_const_name())
    }

    #[track_caller]
    pub fn const_pos(&self) -> u32 {
        contract(self.try_const_pos())
    }

    /// Flattened arguments of an application, head first.
    #[track_caller]
    pub fn args(&self) -> &[Term] {
        contract(self.try_args())
    }

    #[track_caller]
    pub fn num_args(&self) -> usize {
        contract(self.try_num_args())
    }

    #[track_caller]
    pub fn arg(&self, index: usize) -> &Term {
        contract(self.try_arg(index))
    }

    #[track_caller]
    pub fn abst_name(&self) -> &Name {
        contract(self.try_abst_name())
    }

    #[track_caller]
    pub fn abst_type(&self) -> &Term {
        contract(self.try_abst_type())
    }

    #[track_caller]
    pub fn abst_body(&self) -> &Term {
        contract(self.try_abst_body())
    }

    #[track_caller]
    pub fn ty_level(&self) -> &Level {
        contract(self.try_ty_level())
    }

    #[track_caller]
    pub fn num_value(&self) -> &BigInt {
        contract(self.try_num_value())
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        crate::eq::equals(self, other)
    }
}

impl Eq for Term {}

impl std::hash::Hash for Term {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.0.hash);
    }
}

impl std::fmt::Debug for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Term")
            .field(&format_args!("{}", self))
            .finish()
    }
}
