//! Operation trait, calculator registry and dispatch errors

use std::sync::Arc;

use log::{debug, trace};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Result type for operation evaluation
pub type OperationResult<T> = Result<T, OperationError>;

/// Operation evaluation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OperationError {
    /// Division by zero
    #[error("Division by zero")]
    DivisionByZero,

    /// No operation registered under the requested symbol
    #[error("Unsupported operation '{symbol}'. Available: {available:?}")]
    UnsupportedOperation {
        /// The symbol that was requested
        symbol: String,
        /// Symbols registered at the time of the call
        available: Vec<String>,
    },
}

/// Trait for implementing calculator operations
///
/// An operation is a stateless binary transform over `f64` identified by a
/// short textual symbol. Implementations must be pure: the same operands
/// always produce the same result and no external state is touched.
pub trait Operation: Send + Sync {
    /// Get the operation symbol (e.g., "+", "pow")
    ///
    /// The symbol is used purely as a dispatch key; no format is enforced.
    fn symbol(&self) -> &str;

    /// Get a human-friendly name for the operation
    fn human_friendly_name(&self) -> &str;

    /// Apply the operation to two operands
    fn execute(&self, a: f64, b: f64) -> OperationResult<f64>;
}

/// Registry of operations keyed by symbol, with a fixed dispatch routine
///
/// The calculator owns the symbol-to-operation bindings. Registering under a
/// symbol that is already bound silently replaces the earlier binding; the
/// dispatcher itself never changes when new operations are added.
#[derive(Clone)]
pub struct Calculator {
    operations: FxHashMap<String, Arc<dyn Operation>>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a new calculator with no operations registered
    pub fn new() -> Self {
        Calculator {
            operations: FxHashMap::default(),
        }
    }

    /// Register an operation under its symbol
    ///
    /// A later registration for the same symbol replaces the earlier one
    /// (last write wins). Empty symbols are accepted as ordinary keys.
    pub fn register<O: Operation + 'static>(&mut self, operation: O) {
        self.register_arc(Arc::new(operation));
    }

    /// Register an already-shared operation instance
    pub fn register_arc(&mut self, operation: Arc<dyn Operation>) {
        let symbol = operation.symbol().to_string();
        debug!(
            "registering operation '{}' under symbol '{}'",
            operation.human_friendly_name(),
            symbol
        );
        self.operations.insert(symbol, operation);
    }

    /// Get a snapshot of the current symbol-to-operation bindings
    ///
    /// The returned map is a copy: later registrations do not show up in it,
    /// and mutating it does not affect the calculator.
    pub fn available(&self) -> FxHashMap<String, Arc<dyn Operation>> {
        self.operations.clone()
    }

    /// Get all registered symbols, sorted
    pub fn symbols(&self) -> Vec<String> {
        let mut symbols: Vec<String> = self.operations.keys().cloned().collect();
        symbols.sort();
        symbols
    }

    /// Check whether an operation is registered under a symbol
    pub fn contains(&self, symbol: &str) -> bool {
        self.operations.contains_key(symbol)
    }

    /// Get the operation registered under a symbol
    pub fn get(&self, symbol: &str) -> Option<Arc<dyn Operation>> {
        self.operations.get(symbol).cloned()
    }

    /// Look up `symbol` and apply the bound operation to the operands
    ///
    /// # Errors
    /// Returns [`OperationError::UnsupportedOperation`] when no operation is
    /// registered under `symbol`. Failures raised by the operation itself,
    /// such as [`OperationError::DivisionByZero`], propagate unchanged.
    pub fn compute(&self, a: f64, symbol: &str, b: f64) -> OperationResult<f64> {
        let operation =
            self.operations
                .get(symbol)
                .ok_or_else(|| OperationError::UnsupportedOperation {
                    symbol: symbol.to_string(),
                    available: self.symbols(),
                })?;

        trace!("dispatching '{symbol}' with operands {a} and {b}");
        operation.execute(a, b)
    }
}
