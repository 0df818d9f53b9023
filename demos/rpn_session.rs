// ============================================================================
// RPN Session Example
// ============================================================================
//
// Run with `cargo run --example rpn_session --features logging` to see the
// stack's trace events.

use rpn_stack::prelude::*;
use std::ops::Mul;

fn show<T: std::fmt::Debug>(label: &str, stack: &Stack<T>) {
    println!("{:<12} {:?}", label, stack.as_slice());
}

/// `( a b -- a*b )`
fn multiply<T: Mul<Output = T>>(stack: &mut Stack<T>) -> StackResult<()> {
    let b = stack.pop()?;
    let a = stack.pop()?;
    stack.push(a * b)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== RPN Stack Example ===\n");

    let mut stack = Stack::new(4);
    for v in [1, 2, 3] {
        stack.push(v)?;
    }
    show("1 2 3", &stack);

    stack.rot()?;
    show("rot", &stack);

    stack.tuck()?;
    show("tuck", &stack);

    match stack.dup() {
        Ok(()) => show("dup", &stack),
        Err(err) => println!("{:<12} rejected: {}", "dup", err),
    }

    stack.allocate(8);
    stack.dup()?;
    show("allocate dup", &stack);

    multiply(&mut stack)?;
    show("*", &stack);

    stack.clear();
    if let Err(err) = stack.drop() {
        println!("{:<12} rejected: {}", "clear drop", err);
    }

    println!("\n=== Complex Values ===\n");

    let mut zs: Stack<Complex64> = Stack::new(4);
    zs.push(Complex::new(0.0, 1.0))?;
    zs.dup()?;
    multiply(&mut zs)?;
    println!("i i *        {}", zs.peek()?);

    zs.push(Complex::new(-4.0, 0.0))?;
    let root = zs.pop()?.sqrt();
    zs.push(root)?;
    println!("-4 sqrt      {}", zs.peek()?);

    Ok(())
}
