//! Function and arrow literal evaluation

use swc_ecma_ast::{ArrowExpr, FnExpr, Function};

use super::Evaluate;
use crate::value::FunctionValue;
use crate::{EvalContext, Value};

impl Evaluate for FnExpr {
    fn eval(&self, _ctx: &EvalContext) -> Value {
        let name = self.ident.as_ref().map(|ident| ident.sym.to_string());
        Value::function(function_value(name, &self.function))
    }
}

impl Evaluate for ArrowExpr {
    fn eval(&self, _ctx: &EvalContext) -> Value {
        let placeholder = FunctionValue::arrow(self.params.len()).with_async(self.is_async);
        Value::function(placeholder)
    }
}

/// Build the placeholder for a `function` body, named or not.
pub fn function_value(name: Option<String>, function: &Function) -> FunctionValue {
    FunctionValue::new(name, function.params.len())
        .with_async(function.is_async)
        .with_generator(function.is_generator)
}
