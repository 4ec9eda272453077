//! Walkthrough of the polynomial API.
//!
//! Run with: cargo run --example walkthrough
//! Set `RUST_LOG=polycalc_poly=debug` to see the search logs.

use polycalc::prelude::*;
use tracing_subscriber::EnvFilter;

fn print_root(label: &str, p: &Polynomial, start_x: f64) {
    match p.find_root(start_x) {
        Ok((x, value)) => println!("  {label} from x = {start_x}: x = {x} (p(x) = {value})"),
        Err(err) => println!("  {label} from x = {start_x}: {err}"),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let p = poly![1.0, 2.0, -5.0];
    let q = poly![2.0, -2.0, 10.0, -1.0];

    println!("Polynomials");
    println!("  P = {p}    {p:?}");
    println!("  Q = {q}    {q:?}");
    println!("  deg P = {}, deg Q = {}\n", p.degree(), q.degree());

    println!("Arithmetic");
    println!("  P + Q = {}", &p + &q);
    println!("  P - Q = {}", &p - &q);
    println!("  P * Q = {}\n", &p * &q);

    println!("Calculus");
    println!("  P' = {}", p.derivative());
    println!("  Q' = {}", q.derivative());
    println!("  ∫P = {}", p.antiderivative());
    println!("  ∫Q = {}", q.antiderivative());
    println!("  ∫_0^1 P = {}\n", p.definite_integral(0.0, 1.0));

    println!("Numeric search");
    print_root("root of P", &p, 1.0);
    print_root("root of P", &p, -1.0);
    print_root("root of Q", &q, 1.0);
    let (x, value) = p.local_maximum(1.0);
    println!("  maximum of P at x = {x} with value {value}");
}
