use hylinear::prelude::*;

fn main() {
    let a = PackedStr::from("ksjkajf");
    for word in a.words() {
        println!("{word}");
    }

    let joined = a.concat(PackedStr::from(" and more"));
    println!("{joined}");

    Term::from(&joined).pretty_print().unwrap();
    println!();
}
