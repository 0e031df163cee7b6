#![cfg(feature = "sync")]

use std::thread;

use hyterm::prelude::*;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn terms_are_send_and_sync() {
    assert_send_sync::<Term>();
    assert_send_sync::<Level>();
}

#[test]
fn shared_term_is_readable_from_many_threads() {
    let nat = constant("Nat", 0);
    let id = lambda("x", nat.clone(), var(0));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let id = id.clone();
            let nat = nat.clone();
            thread::spawn(move || {
                let other = lambda(format!("y{i}"), nat, var(0));
                equals(&id, &other) && id.to_string() == "(fun (x : Nat) #0)"
            })
        })
        .collect();

    for h in handles {
        assert!(h.join().unwrap());
    }
    // Every worker released its handles
    assert_eq!(id.use_count(), 1);
    assert_eq!(nat.use_count(), 2);
}
