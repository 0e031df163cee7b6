mod common;

use common::{gen_pool, gen_term};
use hyterm::prelude::*;
use hyterm::term::pretty::{FLAT_WIDTH, Pretty};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use termcolor::Buffer;

fn sample_terms() -> Vec<Term> {
    let nat = constant("Nat", 0);
    let f = constant("f", 0);
    let id = lambda("x", nat.clone(), var(0));
    vec![
        var(0),
        constant("foo", 0),
        pi("x", nat.clone(), var(0)),
        id.clone(),
        app3(&f, &var(0), &numeral(42u32)),
        app2(&id, &app2(&f, &var(2))),
        type_(Level::zero()),
        type_(Level::param("u").max(&Level::from_offset(1)).succ()),
        numeral(-7i32),
        pi(
            "A",
            type_(Level::from_offset(1)),
            pi("a", var(0), app2(&var(1), &lambda(Name::Num(3), var(1), var(0)))),
        ),
    ]
}

fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[test]
fn debug_form_of_basic_terms() {
    assert_eq!(var(0).to_string(), "#0");
    assert_eq!(constant("foo", 0).to_string(), "foo");
    assert_eq!(
        pi("x", constant("Nat", 0), var(0)).to_string(),
        "(pi (x : Nat) #0)"
    );
}

#[test]
fn debug_form_of_every_kind() {
    let f = constant("f", 0);
    assert_eq!(app3(&f, &var(0), &var(1)).debug_string(), "(f #0 #1)");
    assert_eq!(
        lambda("x", constant("Nat", 0), var(0)).to_string(),
        "(fun (x : Nat) #0)"
    );
    assert_eq!(type_(Level::zero()).to_string(), "(Type 0)");
    assert_eq!(type_(Level::from_offset(2)).to_string(), "(Type 2)");
    assert_eq!(type_(Level::param("u").succ()).to_string(), "(Type u+1)");
    assert_eq!(
        type_(Level::param("u").max(&Level::param("v"))).to_string(),
        "(Type (max u v))"
    );
    assert_eq!(numeral(123456789u64).to_string(), "123456789");
    assert_eq!(numeral(-3i32).to_string(), "-3");
    assert_eq!(constant(Name::Num(4), 0).to_string(), "%4");
}

#[test]
fn debug_form_prints_flattened_applications() {
    let f = constant("f", 0);
    let nested = app2(&app2(&f, &var(0)), &var(1));
    assert_eq!(nested.to_string(), "(f #0 #1)");

    let arg_app = app2(&f, &app2(&f, &var(1)));
    assert_eq!(arg_app.to_string(), "(f (f #1))");
}

#[test]
fn plain_document_matches_debug_form() {
    for t in sample_terms() {
        assert_eq!(t.pretty_string(), t.to_string());
        assert_eq!(Pretty::new(&t, FLAT_WIDTH).to_string(), t.to_string());
    }
}

#[test]
fn stripped_colored_output_matches_debug_form() {
    for t in sample_terms() {
        let mut colored = Buffer::ansi();
        t.pretty_render_to(FLAT_WIDTH, &mut colored).unwrap();
        let colored = String::from_utf8(colored.into_inner()).unwrap();
        assert_eq!(strip_ansi(&colored), t.to_string());

        let mut plain = Buffer::no_color();
        t.pretty_render_to(FLAT_WIDTH, &mut plain).unwrap();
        assert_eq!(String::from_utf8(plain.into_inner()).unwrap(), t.to_string());
    }
}

#[test]
fn generated_terms_print_the_debug_form_without_colors() {
    let deep = (0..16u64).map(|seed| {
        gen_term(
            &mut ChaCha20Rng::seed_from_u64(seed),
            &mut ChaCha20Rng::seed_from_u64(seed + 100),
            7,
        )
    });
    for t in gen_pool().into_iter().chain(deep) {
        let debug = t.to_string();
        assert_eq!(t.pretty_string(), debug);

        let mut colored = Buffer::ansi();
        t.pretty_render_to(FLAT_WIDTH, &mut colored).unwrap();
        let colored = String::from_utf8(colored.into_inner()).unwrap();
        assert_eq!(strip_ansi(&colored), debug);
    }
}

#[test]
fn binder_keywords_use_distinct_colors() {
    let nat = constant("Nat", 0);

    let mut buf = Buffer::ansi();
    lambda("x", nat.clone(), var(0))
        .pretty_render_to(FLAT_WIDTH, &mut buf)
        .unwrap();
    let lam = String::from_utf8(buf.into_inner()).unwrap();

    let mut buf = Buffer::ansi();
    pi("x", nat.clone(), var(0))
        .pretty_render_to(FLAT_WIDTH, &mut buf)
        .unwrap();
    let p = String::from_utf8(buf.into_inner()).unwrap();

    // Magenta for `fun`, yellow for `pi`
    assert!(lam.contains("\x1b[35m"));
    assert!(!lam.contains("\x1b[33m"));
    assert!(p.contains("\x1b[33m"));
    assert!(!p.contains("\x1b[35m"));
}

#[test]
fn narrow_layout_wraps_but_keeps_tokens() {
    let f = constant("some_long_function_name", 0);
    let args: Vec<Term> = std::iter::once(f)
        .chain((0..12).map(|i| constant(format!("argument_{i}"), 0)))
        .collect();
    let t = lambda("x", constant("Nat", 0), app(&args));

    let wrapped = t.pretty_string_width(40);
    assert!(wrapped.contains('\n'));

    let debug = t.to_string();
    let wrapped_tokens: Vec<&str> = wrapped.split_whitespace().collect();
    let debug_tokens: Vec<&str> = debug.split_whitespace().collect();
    assert_eq!(wrapped_tokens, debug_tokens);
}

#[test]
fn debug_impl_wraps_display() {
    assert_eq!(format!("{:?}", var(1)), "Term(#1)");
}
