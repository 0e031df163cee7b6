//! Seeded random terms shared by the integration tests.
#![allow(dead_code)]

use hyterm::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

const BINDER_NAMES: [&str; 4] = ["x", "y", "z", "w"];
const CONSTANTS: [&str; 4] = ["Nat", "Bool", "f", "g"];

/// Random term whose structure is driven by `shape` only. Cosmetic data (binder names and
/// constant positions) is drawn from `cosmetic`, so two calls with equally-seeded `shape`
/// generators always produce alpha-equivalent terms.
pub fn gen_term<R: Rng>(shape: &mut R, cosmetic: &mut R, budget: usize) -> Term {
    if budget == 0 || shape.random_bool(0.25) {
        return match shape.random_range(0..4) {
            0 => var(shape.random_range(0..3)),
            1 => constant(
                CONSTANTS[shape.random_range(0..CONSTANTS.len())],
                cosmetic.random_range(0..100),
            ),
            2 => type_(Level::from_offset(shape.random_range(0..3))),
            3 => numeral(shape.random_range(0..5u32)),
            _ => unreachable!(),
        };
    }

    let binder = BINDER_NAMES[cosmetic.random_range(0..BINDER_NAMES.len())];
    match shape.random_range(0..3) {
        0 => {
            let n = shape.random_range(2..=4);
            let children: Vec<Term> = (0..n)
                .map(|_| gen_term(shape, cosmetic, budget - 1))
                .collect();
            app(&children)
        }
        1 => {
            let ty = gen_term(shape, cosmetic, budget - 1);
            let body = gen_term(shape, cosmetic, budget - 1);
            lambda(binder, ty, body)
        }
        2 => {
            let ty = gen_term(shape, cosmetic, budget - 1);
            let body = gen_term(shape, cosmetic, budget - 1);
            pi(binder, ty, body)
        }
        _ => unreachable!(),
    }
}

pub fn gen_pool() -> Vec<Term> {
    let mut pool = Vec::new();
    for seed in 0..12u64 {
        for variant in 0..2u64 {
            let mut shape = ChaCha20Rng::seed_from_u64(seed);
            let mut cosmetic = ChaCha20Rng::seed_from_u64(1000 * (variant + 1) + seed);
            pool.push(gen_term(&mut shape, &mut cosmetic, 4));
        }
    }
    let copies: Vec<Term> = pool.iter().step_by(3).map(copy).collect();
    pool.extend(copies);
    pool
}
