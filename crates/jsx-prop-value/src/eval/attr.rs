//! Attribute evaluation: the dispatcher's entry layer

use swc_ecma_ast::{JSXAttr, JSXAttrOrSpread, JSXAttrValue, JSXExpr, JSXExprContainer};

use super::Evaluate;
use crate::{EvalContext, Value};

impl Evaluate for JSXAttrOrSpread {
    fn eval(&self, ctx: &EvalContext) -> Value {
        match self {
            JSXAttrOrSpread::JSXAttr(attr) => attr.eval(ctx),
            JSXAttrOrSpread::SpreadElement(_) => {
                tracing::debug!("Spread attribute has no single value");
                Value::Undefined
            }
        }
    }
}

impl Evaluate for JSXAttr {
    fn eval(&self, ctx: &EvalContext) -> Value {
        match &self.value {
            // A flag attribute is present, hence true
            None => Value::Bool(true),
            Some(value) => value.eval(ctx),
        }
    }
}

impl Evaluate for JSXAttrValue {
    fn eval(&self, ctx: &EvalContext) -> Value {
        match self {
            JSXAttrValue::Lit(lit) => lit.eval(ctx),
            JSXAttrValue::JSXExprContainer(container) => container.eval(ctx),
            JSXAttrValue::JSXElement(_) | JSXAttrValue::JSXFragment(_) if ctx.is_literal() => {
                Value::Null
            }
            JSXAttrValue::JSXElement(element) => element.eval(ctx),
            JSXAttrValue::JSXFragment(fragment) => fragment.eval(ctx),
        }
    }
}

impl Evaluate for JSXExprContainer {
    fn eval(&self, ctx: &EvalContext) -> Value {
        match &self.expr {
            JSXExpr::Expr(expr) => expr.eval(ctx),
            JSXExpr::JSXEmptyExpr(_) => Value::Undefined,
        }
    }
}
