//! Identifier and `this` evaluation
//!
//! Names are never resolved against a scope. An identifier stands in for
//! itself as a string, so operators still have something to coerce.

use swc_ecma_ast::{Ident, ThisExpr};

use super::Evaluate;
use crate::{EvalContext, Value};

/// The identifier naming the absent value.
pub const UNDEFINED_IDENT: &str = "undefined";

impl Evaluate for Ident {
    fn eval(&self, _ctx: &EvalContext) -> Value {
        eval_name(&self.sym)
    }
}

impl Evaluate for ThisExpr {
    fn eval(&self, _ctx: &EvalContext) -> Value {
        Value::string("this")
    }
}

/// Derive the placeholder for a bare name.
pub fn eval_name(name: &str) -> Value {
    if name == UNDEFINED_IDENT {
        Value::Undefined
    } else {
        Value::string(name)
    }
}
