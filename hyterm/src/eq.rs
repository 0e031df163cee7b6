//! Alpha-equivalence of terms.
//!
//! Two terms are equal iff they denote the same lambda term up to the names chosen for bound
//! variables. Since variables are de Bruijn indices, this amounts to structural equality that
//! skips binder names and constant positions.
//!
//! Algorithm
//! - Identity, then cached hash, then kind: the first three checks reject or accept without
//!   touching children.
//! - When both sides are shared, the pair of node identities is recorded before descending.
//!   Meeting the pair again returns `true` at once, which keeps the work proportional to the
//!   number of distinct node pairs instead of the unfolded tree size. If the first visit turns
//!   out unequal, the whole comparison is already `false`, so the early `true` is sound.
//! - Pairs are walked from an explicit work stack, so comparing very deep chains does not
//!   recurse. The walk stops at the first mismatching pair.
//! - The memo set lives in one [`TermEq`] and is dropped with it.
use std::collections::HashSet;

use log::trace;
use smallvec::SmallVec;

use crate::term::{Term, TermView};

type WorkStack<'t> = SmallVec<[(&'t Term, &'t Term); 12]>;

/// Counters describing the work done by a [`TermEq`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EqStats {
    /// Number of pairwise comparisons entered, including the top-level one.
    pub calls: usize,
    /// Comparisons answered by the memo set.
    pub memo_hits: usize,
    /// Pairs currently recorded in the memo set.
    pub memo_entries: usize,
}

/// Equality engine owning the memo set for one or more comparisons.
///
/// Reuse an engine only while every term compared through it stays alive: the memo set is
/// keyed by node addresses.
#[derive(Debug, Default)]
pub struct TermEq {
    visited: HashSet<(usize, usize)>,
    stats: EqStats,
}

impl TermEq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare two terms for alpha-equivalence.
    pub fn equals(&mut self, a: &Term, b: &Term) -> bool {
        let result = self.apply(a, b);
        trace!(
            "term equality on hash 0x{:016x} -> {} ({} calls, {} memo hits, {} memo entries)",
            a.hash(),
            result,
            self.stats.calls,
            self.stats.memo_hits,
            self.stats.memo_entries
        );
        result
    }

    pub fn stats(&self) -> EqStats {
        self.stats
    }

    fn apply(&mut self, a: &Term, b: &Term) -> bool {
        // Pairs still to compare; children are pushed in reverse so they pop left to right
        let mut stack: WorkStack<'_> = SmallVec::new();
        stack.push((a, b));

        while let Some((a, b)) = stack.pop() {
            if !self.step(a, b, &mut stack) {
                return false;
            }
        }

        // Every pair matched
        true
    }

    /// Compare one pair without descending, queueing its child pairs on `stack`.
    fn step<'t>(&mut self, a: &'t Term, b: &'t Term, stack: &mut WorkStack<'t>) -> bool {
        self.stats.calls += 1;

        if Term::ptr_eq(a, b) {
            return true;
        }
        if a.hash() != b.hash() {
            return false;
        }
        if a.kind() != b.kind() {
            return false;
        }

        if a.is_shared() && b.is_shared() {
            if !self.visited.insert((a.addr(), b.addr())) {
                self.stats.memo_hits += 1;
                return true;
            }
            self.stats.memo_entries += 1;
        }

        match (a.view(), b.view()) {
            (TermView::Var(i), TermView::Var(j)) => i == j,
            (TermView::Constant { name: n1, .. }, TermView::Constant { name: n2, .. }) => n1 == n2,
            (TermView::App(xs), TermView::App(ys)) => {
                if xs.len() != ys.len() {
                    return false;
                }
                stack.extend(xs.iter().zip(ys).rev());
                true
            }
            // Binder names are skipped on purpose: alpha-equivalence
            (
                TermView::Lambda {
                    ty: t1, body: b1, ..
                },
                TermView::Lambda {
                    ty: t2, body: b2, ..
                },
            )
            | (
                TermView::Pi {
                    ty: t1, body: b1, ..
                },
                TermView::Pi {
                    ty: t2, body: b2, ..
                },
            ) => {
                stack.push((b1, b2));
                stack.push((t1, t2));
                true
            }
            (TermView::Type(l1), TermView::Type(l2)) => l1 == l2,
            (TermView::Numeral(x), TermView::Numeral(y)) => x == y,
            _ => false,
        }
    }
}

/// Alpha-equivalence with a fresh memo set.
pub fn equals(a: &Term, b: &Term) -> bool {
    TermEq::new().equals(a, b)
}
