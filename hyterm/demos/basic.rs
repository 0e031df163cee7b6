use hyterm::prelude::*;

fn main() {
    let nat = constant("Nat", 0);
    let eq = constant("Eq", 0);
    let add = constant("add", 0);

    // pi (n : Nat) (Eq Nat (add n 0) n)
    let stmt = pi(
        "n",
        nat.clone(),
        app(&[eq, nat.clone(), app3(&add, &var(0), &numeral(0u32)), var(0)]),
    );
    println!("{}", stmt);

    let proof_ty = pi("A", type_(Level::param("u")), pi("a", var(0), var(1)));
    proof_ty.pretty_print().unwrap();
    println!();

    let renamed = pi("m", nat, stmt.abst_body().clone());
    println!("alpha-equivalent: {}", equals(&stmt, &renamed));
}
