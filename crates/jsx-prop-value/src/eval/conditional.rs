//! Conditional (ternary) expression evaluation

use swc_ecma_ast::CondExpr;

use super::Evaluate;
use crate::semantics::truthy;
use crate::{EvalContext, Value};

/// Only the branch selected by the test is derived.
impl Evaluate for CondExpr {
    fn eval(&self, ctx: &EvalContext) -> Value {
        if truthy(&self.test.eval(ctx)) {
            self.cons.eval(ctx)
        } else {
            self.alt.eval(ctx)
        }
    }
}
