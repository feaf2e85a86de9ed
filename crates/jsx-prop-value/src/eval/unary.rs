//! Unary and update operation evaluation

use swc_ecma_ast::{UnaryExpr, UnaryOp, UpdateExpr, UpdateOp};

use super::Evaluate;
use crate::semantics::{add, to_int32, to_number, truthy, type_of};
use crate::{EvalContext, Value};

impl Evaluate for UnaryExpr {
    fn eval(&self, ctx: &EvalContext) -> Value {
        // Operators whose result does not depend on the operand
        match self.op {
            UnaryOp::Delete => return Value::Bool(true),
            UnaryOp::Void => return Value::Undefined,
            UnaryOp::TypeOf if !ctx.resolve_typeof => return Value::Undefined,
            _ => {}
        }

        let operand = self.arg.eval(ctx);
        eval_unary(&self.op, &operand)
    }
}

/// Apply a unary operator to an already derived operand.
pub fn eval_unary(op: &UnaryOp, operand: &Value) -> Value {
    match op {
        UnaryOp::Minus => Value::Number(-to_number(operand)),
        UnaryOp::Plus => Value::Number(to_number(operand)),
        UnaryOp::Bang => Value::Bool(!truthy(operand)),
        UnaryOp::Tilde => Value::Number(f64::from(!to_int32(operand))),
        UnaryOp::TypeOf => Value::string(type_of(operand)),
        UnaryOp::Delete => Value::Bool(true),
        UnaryOp::Void => Value::Undefined,
    }
}

impl Evaluate for UpdateExpr {
    fn eval(&self, ctx: &EvalContext) -> Value {
        let operand = self.arg.eval(ctx);
        eval_update(&self.op, &operand)
    }
}

/// `++x` combines with `+`, so a placeholder concatenates: `++x` is `"x1"`.
pub fn eval_update(op: &UpdateOp, operand: &Value) -> Value {
    match op {
        UpdateOp::PlusPlus => add(operand, &Value::Number(1.0)),
        UpdateOp::MinusMinus => Value::Number(to_number(operand) - 1.0),
    }
}
