//! Literal evaluation

use swc_ecma_ast::Lit;

use super::Evaluate;
use crate::{EvalContext, Value};

impl Evaluate for Lit {
    fn eval(&self, _ctx: &EvalContext) -> Value {
        eval_lit(self)
    }
}

/// Evaluate a literal to a Value.
pub fn eval_lit(lit: &Lit) -> Value {
    match lit {
        Lit::Str(s) => normalize_string(&s.value),

        Lit::Num(n) => Value::Number(n.value),

        Lit::Bool(b) => Value::Bool(b.value),

        Lit::Null(_) => Value::Null,

        Lit::BigInt(b) => Value::string(b.value.to_string()),

        Lit::Regex(re) => Value::string(format!("/{}/{}", re.exp, re.flags)),

        Lit::JSXText(text) => Value::string(&*text.value),
    }
}

/// Booleans are commonly written as string attributes (`foo="true"`), so
/// the exact strings `"true"` and `"false"` become booleans.
pub fn normalize_string(text: &str) -> Value {
    match text {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        other => Value::string(other),
    }
}
