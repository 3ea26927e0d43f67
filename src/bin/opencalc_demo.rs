//! Demonstration of the operation registry
//!
//! Registers the four basic arithmetic operations, evaluates a few
//! expressions, then adds exponentiation at runtime without touching the
//! dispatcher.

use opencalc::{Add, Calculator, Divide, Multiply, OperationResult, Power, Subtract};

fn main() -> OperationResult<()> {
    env_logger::init();

    let mut calculator = Calculator::new();

    calculator.register(Add);
    calculator.register(Subtract);
    calculator.register(Multiply);
    calculator.register(Divide);

    println!("=== Basic operations ===");
    println!("2 + 3 = {}", calculator.compute(2.0, "+", 3.0)?);
    println!("10 - 4 = {}", calculator.compute(10.0, "-", 4.0)?);
    println!("6 * 7 = {}", calculator.compute(6.0, "*", 7.0)?);
    println!("9 / 3 = {}", calculator.compute(9.0, "/", 3.0)?);

    // A new operation plugs in without any change to the calculator.
    calculator.register(Power);

    println!();
    println!("=== After registering Power ===");
    println!("2 pow 5 = {}", calculator.compute(2.0, "pow", 5.0)?);

    Ok(())
}
