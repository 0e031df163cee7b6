//! Hyterm: the term representation of the hyperion kernel.
//!
//! This crate provides the data structure the type checker and elaborator manipulate: typed
//! lambda terms with de Bruijn variables, constants, flattened n-ary applications, lambda and
//! Pi binders, universes and numeral literals.
//!
//! Terms are immutable and shared. A [`term::Term`] is a reference-counted handle; building a
//! larger term from smaller ones never copies the smaller ones, so terms form a DAG. Every node
//! caches a hash at construction, which the equality engine uses to reject mismatches without
//! descending.
//!
//! Sharing
//!  - By default handles are `Rc`-based. Enable the `sync` feature to switch to `Arc` and make
//!    terms `Send + Sync`.
//!
//! Example
//! ```
//! use hyterm::prelude::*;
//!
//! let nat = constant("Nat", 0);
//! let id_ty = pi("x", nat.clone(), nat.clone());
//! assert_eq!(id_ty.to_string(), "(pi (x : Nat) Nat)");
//!
//! // Binder names do not matter for equality
//! let id1 = lambda("x", nat.clone(), var(0));
//! let id2 = lambda("y", nat.clone(), var(0));
//! assert!(equals(&id1, &id2));
//!
//! // Applications are flattened
//! let f = constant("f", 0);
//! let fab = app(&[app(&[f, var(0)]), var(1)]);
//! assert_eq!(fab.num_args(), 3);
//! ```

/// Structural (alpha-equivalence) equality engine.
pub mod eq;
/// Typed errors reported by the checked term API.
pub mod error;
/// Deterministic hashing helpers.
pub mod hash;
/// Universe levels.
pub mod level;
/// Identifiers.
pub mod name;
/// Term nodes, constructors and printers.
pub mod term;

/// Ownership-counted pointer behind terms and levels.
#[cfg(not(feature = "sync"))]
pub type Shared<T> = std::rc::Rc<T>;
/// Ownership-counted pointer behind terms and levels.
#[cfg(feature = "sync")]
pub type Shared<T> = std::sync::Arc<T>;

pub use num_bigint::BigInt;

pub mod prelude {
    //! Convenient re-exports for end users.
    //!
    //! - `Term`, its kind tag and its view
    //! - Free-function constructors from `term::func`
    //! - Equality via `equals` / `TermEq`
    //! - Pretty-printing via `PrettyTerm`
    pub use crate::eq::{TermEq, equals};
    pub use crate::error::{TermError, TermResult};
    pub use crate::level::Level;
    pub use crate::name::Name;
    pub use crate::term::{
        Term, TermKind, TermView,
        func::*,
        pretty::{PrettyTerm, Style},
    };
    pub use num_bigint::BigInt;
}
