//! Literal-only evaluation
//!
//! Restricts the outermost expression to shapes whose value is written out
//! in the source. Anything that depends on code outside static reach
//! becomes `null` rather than a placeholder.

use swc_ecma_ast::{Expr, Lit};

use super::{unwrap_transparent, Evaluate};
use crate::{EvalContext, Value};

/// Evaluate `expr` under literal rules. `derived` is used for operands.
pub(crate) fn eval_literal_only(expr: &Expr, derived: &EvalContext) -> Value {
    match unwrap_transparent(expr) {
        Expr::Lit(Lit::Null(_)) => Value::string("null"),

        Expr::Ident(ident) if &*ident.sym == super::ident::UNDEFINED_IDENT => Value::Undefined,
        Expr::Ident(_) => Value::Null,

        Expr::Unary(_) | Expr::Update(_) => match expr.eval(derived) {
            Value::Undefined => Value::Null,
            other => other,
        },

        Expr::Array(array) => match array.eval(derived) {
            Value::Array(items) => {
                let kept = items.iter().filter(|item| !matches!(item, Value::Null));
                Value::array(kept.cloned().collect())
            }
            other => other,
        },

        Expr::JSXElement(_)
        | Expr::JSXFragment(_)
        | Expr::Fn(_)
        | Expr::Arrow(_)
        | Expr::Bin(_)
        | Expr::Member(_)
        | Expr::SuperProp(_)
        | Expr::Call(_)
        | Expr::OptChain(_)
        | Expr::This(_)
        | Expr::Cond(_)
        | Expr::Object(_)
        | Expr::New(_) => Value::Null,

        other => other.eval(derived),
    }
}
