//! Derived value representation

mod callable;
mod display;
mod impls;
#[cfg(feature = "serde")]
mod serialize;

pub use callable::{FunctionKind, FunctionValue};

use std::sync::Arc;

use indexmap::IndexMap;

/// Ordered key/value mapping produced by object literals.
pub type ObjectMap = IndexMap<String, Value>;

/// The evaluator's best-effort approximation of a runtime value.
///
/// Values mirror the scripting language's own types:
/// - Primitives: `undefined`, `null`, booleans, numbers, strings
/// - Compound values (Arc-wrapped): arrays and plain objects
/// - Callable placeholders standing in for function literals
///
/// Compound values are freshly built for every evaluation and never share
/// anything with the syntax tree they were derived from.
#[derive(Clone, Default)]
pub enum Value {
    // ═══════════════════════════════════════════════════════════════════
    // Primitives
    // ═══════════════════════════════════════════════════════════════════
    /// The absent-value sentinel: no determinable value
    #[default]
    Undefined,

    /// The `null` literal
    Null,

    /// Boolean: `true` or `false`
    Bool(bool),

    /// IEEE-754 double, the language's only number type
    Number(f64),

    /// String or identifier placeholder
    String(Arc<String>),

    // ═══════════════════════════════════════════════════════════════════
    // Compound Values
    // ═══════════════════════════════════════════════════════════════════
    /// Array literal result
    Array(Arc<Vec<Value>>),

    /// Object literal or constructor placeholder
    Object(Arc<ObjectMap>),

    // ═══════════════════════════════════════════════════════════════════
    // Callables
    // ═══════════════════════════════════════════════════════════════════
    /// Function or arrow literal placeholder
    Function(Arc<FunctionValue>),
}
