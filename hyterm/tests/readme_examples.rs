use hyterm::prelude::*;

#[test]
fn lib_rs_doc_example_compiles_and_behaves() {
    let nat = constant("Nat", 0);
    let id_ty = pi("x", nat.clone(), nat.clone());
    assert_eq!(id_ty.to_string(), "(pi (x : Nat) Nat)");

    let id1 = lambda("x", nat.clone(), var(0));
    let id2 = lambda("y", nat.clone(), var(0));
    assert!(equals(&id1, &id2));

    let f = constant("f", 0);
    let fab = app(&[app(&[f, var(0)]), var(1)]);
    assert_eq!(fab.num_args(), 3);
    assert!(fab.arg(0).is_constant());
}
