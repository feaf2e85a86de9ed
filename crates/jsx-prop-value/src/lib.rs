//! # jsx-prop-value
//!
//! Static evaluation of JSX attribute values.
//!
//! Given an attribute from a parsed JSX element, the evaluator derives a
//! best-effort value for it without running any code: literals pass
//! through, names stand in for themselves as strings, and operators apply
//! the scripting language's own coercion rules to whatever was derived for
//! their operands.
//!
//! ## Architecture
//!
//! - **Frontend**: Parse JSX source text with `swc_ecma_parser`
//! - **Lookup**: Find a named attribute on an element
//! - **Evaluator**: Walk the `swc_ecma_ast` tree and derive a [`Value`]
//!
//! ```ignore
//! use jsx_prop_value::{get_prop, parse_opening_element, prop_value, PropOptions, Value};
//!
//! let opening = parse_opening_element("<div foo={bar && baz} />")?;
//! let attr = get_prop(&opening.attrs, "foo", PropOptions::default()).unwrap();
//! assert_eq!(prop_value(attr), Value::from("baz"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod element;
pub mod error;
pub mod eval;
pub mod frontend;
pub mod prop;
pub mod semantics;
pub mod value;

// Re-export main types
pub use context::{EvalContext, EvalMode};
pub use element::{element_name, element_type};
pub use error::{ParseError, Result};
pub use eval::{expr_kind_name, literal_prop_value, prop_value, prop_value_with, Evaluate};
pub use frontend::{parse_element, parse_expr, parse_opening_element};
pub use prop::{get_prop, has_any_prop, has_every_prop, has_prop, prop_name, PropOptions};
pub use value::{FunctionKind, FunctionValue, ObjectMap, Value};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
