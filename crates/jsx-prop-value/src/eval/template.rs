//! Template literal rendering
//!
//! The `${}` marker cannot be reproduced in a plain string, so each
//! substitution is rendered inside `{}` instead: `` `bar ${baz}` `` becomes
//! `"bar {baz}"`. Substitutions deriving `undefined` are dropped.

use swc_ecma_ast::{TaggedTpl, Tpl};

use super::Evaluate;
use crate::{EvalContext, Value};

impl Evaluate for Tpl {
    fn eval(&self, ctx: &EvalContext) -> Value {
        Value::string(render_template(self, ctx))
    }
}

impl Evaluate for TaggedTpl {
    fn eval(&self, ctx: &EvalContext) -> Value {
        Value::string(render_template(&self.tpl, ctx))
    }
}

/// Concatenate the raw text spans with the rendered substitutions.
pub fn render_template(tpl: &Tpl, ctx: &EvalContext) -> String {
    let mut out = String::new();
    let mut exprs = tpl.exprs.iter();

    // quasis always has one more element than exprs
    for quasi in &tpl.quasis {
        out.push_str(&quasi.raw);
        if let Some(expr) = exprs.next() {
            push_substitution(&mut out, &expr.eval(ctx));
        }
    }

    out
}

fn push_substitution(out: &mut String, value: &Value) {
    if value.is_undefined() {
        return;
    }
    out.push('{');
    out.push_str(&value.to_string());
    out.push('}');
}
