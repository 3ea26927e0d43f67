//! Arithmetic operations

use crate::operation::{Calculator, Operation, OperationError, OperationResult};

/// Register all arithmetic operations
pub fn register_arithmetic_operations(calculator: &mut Calculator) {
    calculator.register(Add);
    calculator.register(Subtract);
    calculator.register(Multiply);
    calculator.register(Divide);
    calculator.register(Power);
}

/// Addition operation (+)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Add;

impl Operation for Add {
    fn symbol(&self) -> &str {
        "+"
    }

    fn human_friendly_name(&self) -> &str {
        "Addition"
    }

    fn execute(&self, a: f64, b: f64) -> OperationResult<f64> {
        Ok(a + b)
    }
}

/// Subtraction operation (-)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subtract;

impl Operation for Subtract {
    fn symbol(&self) -> &str {
        "-"
    }

    fn human_friendly_name(&self) -> &str {
        "Subtraction"
    }

    fn execute(&self, a: f64, b: f64) -> OperationResult<f64> {
        Ok(a - b)
    }
}

/// Multiplication operation (*)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Multiply;

impl Operation for Multiply {
    fn symbol(&self) -> &str {
        "*"
    }

    fn human_friendly_name(&self) -> &str {
        "Multiplication"
    }

    fn execute(&self, a: f64, b: f64) -> OperationResult<f64> {
        Ok(a * b)
    }
}

/// Division operation (/)
///
/// Fails with [`OperationError::DivisionByZero`] when the divisor is exactly
/// zero. The check is an exact comparison, not a tolerance test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Divide;

impl Operation for Divide {
    fn symbol(&self) -> &str {
        "/"
    }

    fn human_friendly_name(&self) -> &str {
        "Division"
    }

    fn execute(&self, a: f64, b: f64) -> OperationResult<f64> {
        if b == 0.0 {
            return Err(OperationError::DivisionByZero);
        }
        Ok(a / b)
    }
}

/// Exponentiation operation (pow)
///
/// Edge cases (0^0, negative base with fractional exponent, ...) follow IEEE
/// 754 semantics as implemented by [`f64::powf`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Power;

impl Operation for Power {
    fn symbol(&self) -> &str {
        "pow"
    }

    fn human_friendly_name(&self) -> &str {
        "Exponentiation"
    }

    fn execute(&self, a: f64, b: f64) -> OperationResult<f64> {
        Ok(a.powf(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(Add.execute(2.0, 3.0), Ok(5.0));
        assert_eq!(Add.symbol(), "+");
    }

    #[test]
    fn test_subtract() {
        assert_eq!(Subtract.execute(10.0, 4.0), Ok(6.0));
        assert_eq!(Subtract.symbol(), "-");
    }

    #[test]
    fn test_multiply() {
        assert_eq!(Multiply.execute(6.0, 7.0), Ok(42.0));
        assert_eq!(Multiply.symbol(), "*");
    }

    #[test]
    fn test_divide() {
        assert_eq!(Divide.execute(9.0, 3.0), Ok(3.0));
        assert_eq!(Divide.symbol(), "/");
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(Divide.execute(1.0, 0.0), Err(OperationError::DivisionByZero));
        assert_eq!(
            Divide.execute(0.0, 0.0),
            Err(OperationError::DivisionByZero)
        );
    }

    #[test]
    fn test_divide_by_negative_zero() {
        // -0.0 == 0.0 under IEEE 754, so the exact-equality guard fires
        assert_eq!(
            Divide.execute(1.0, -0.0),
            Err(OperationError::DivisionByZero)
        );
    }

    #[test]
    fn test_divide_small_divisor_is_not_zero() {
        // the guard is exact equality against zero, not a tolerance check
        assert!(Divide.execute(1.0, f64::MIN_POSITIVE).is_ok());
        assert_eq!(Divide.execute(1.0, 0.5), Ok(2.0));
    }

    #[test]
    fn test_power() {
        assert_eq!(Power.execute(2.0, 5.0), Ok(32.0));
        assert_eq!(Power.symbol(), "pow");
    }

    #[test]
    fn test_power_edge_cases() {
        // powf semantics, no special handling
        assert_eq!(Power.execute(0.0, 0.0), Ok(1.0));
        assert_eq!(Power.execute(2.0, -1.0), Ok(0.5));
        assert!(Power.execute(-2.0, 0.5).unwrap().is_nan());
    }

    #[test]
    fn test_operations_are_interchangeable_values() {
        // Two instances of the same variant compare equal
        assert_eq!(Add, Add);
        let (first, second) = (Divide, Divide);
        assert_eq!(first.execute(8.0, 2.0), second.execute(8.0, 2.0));
    }
}
