//! Extensible arithmetic calculator built around an operation registry
//!
//! This crate provides a trait-based registry for binary arithmetic
//! operations, allowing the set of supported operations to grow without
//! modifying the dispatcher.

#![warn(missing_docs)]

pub mod operation;
pub mod operations;

pub use operation::{Calculator, Operation, OperationError, OperationResult};
pub use operations::{Add, Divide, Multiply, Power, Subtract};

/// Create a calculator with all built-in operations registered
pub fn create_standard_calculator() -> Calculator {
    let mut calculator = Calculator::new();

    operations::register_builtin_operations(&mut calculator);

    calculator
}
