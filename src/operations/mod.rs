//! Built-in operation implementations

pub mod arithmetic;

// Re-export all operations
pub use arithmetic::*;

use crate::operation::Calculator;

/// Register all built-in operations
pub fn register_builtin_operations(calculator: &mut Calculator) {
    arithmetic::register_arithmetic_operations(calculator);
}
