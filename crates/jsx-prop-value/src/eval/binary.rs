//! Binary, logical, assignment and sequence evaluation

use std::cmp::Ordering;

use swc_ecma_ast::{AssignExpr, BinExpr, BinaryOp, Expr, SeqExpr};

use super::Evaluate;
use crate::semantics::{
    add, compare, has_property, loose_equals, pow, strict_equals, to_int32, to_number,
    to_uint32, truthy,
};
use crate::{EvalContext, Value};

impl Evaluate for BinExpr {
    fn eval(&self, ctx: &EvalContext) -> Value {
        // Short-circuit evaluation for &&, || and ??
        match self.op {
            BinaryOp::LogicalAnd | BinaryOp::LogicalOr | BinaryOp::NullishCoalescing => {
                return eval_logical(&self.op, &self.left, &self.right, ctx);
            }
            _ => {}
        }

        let left = self.left.eval(ctx);
        let right = self.right.eval(ctx);
        eval_binary(&self.op, &left, &right)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Short-Circuit Logical Operators
// ═══════════════════════════════════════════════════════════════════════

/// The right operand is only derived when the left one does not decide.
fn eval_logical(op: &BinaryOp, left: &Expr, right: &Expr, ctx: &EvalContext) -> Value {
    let left_val = left.eval(ctx);
    if logical_takes_left(op, &left_val) {
        left_val
    } else {
        right.eval(ctx)
    }
}

fn logical_takes_left(op: &BinaryOp, left: &Value) -> bool {
    match op {
        BinaryOp::LogicalAnd => !truthy(left),
        BinaryOp::LogicalOr => truthy(left),
        _ => !left.is_nullish(),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Binary Operators
// ═══════════════════════════════════════════════════════════════════════

/// Apply a binary operator to two already derived operands.
pub fn eval_binary(op: &BinaryOp, left: &Value, right: &Value) -> Value {
    match op {
        // Equality
        BinaryOp::EqEq => Value::Bool(loose_equals(left, right)),
        BinaryOp::NotEq => Value::Bool(!loose_equals(left, right)),
        BinaryOp::EqEqEq => Value::Bool(strict_equals(left, right)),
        BinaryOp::NotEqEq => Value::Bool(!strict_equals(left, right)),

        // Relational
        BinaryOp::Lt => Value::Bool(compare(left, right) == Some(Ordering::Less)),
        BinaryOp::LtEq => Value::Bool(matches!(
            compare(left, right),
            Some(Ordering::Less | Ordering::Equal)
        )),
        BinaryOp::Gt => Value::Bool(compare(left, right) == Some(Ordering::Greater)),
        BinaryOp::GtEq => Value::Bool(matches!(
            compare(left, right),
            Some(Ordering::Greater | Ordering::Equal)
        )),

        // Shifts: the count is taken modulo 32
        BinaryOp::LShift => {
            let shifted = to_int32(left).wrapping_shl(to_uint32(right) & 31);
            Value::Number(f64::from(shifted))
        }
        BinaryOp::RShift => {
            let shifted = to_int32(left) >> (to_uint32(right) & 31);
            Value::Number(f64::from(shifted))
        }
        BinaryOp::ZeroFillRShift => {
            let shifted = to_uint32(left) >> (to_uint32(right) & 31);
            Value::Number(f64::from(shifted))
        }

        // Arithmetic
        BinaryOp::Add => add(left, right),
        BinaryOp::Sub => Value::Number(to_number(left) - to_number(right)),
        BinaryOp::Mul => Value::Number(to_number(left) * to_number(right)),
        BinaryOp::Div => Value::Number(to_number(left) / to_number(right)),
        BinaryOp::Mod => Value::Number(to_number(left) % to_number(right)),
        BinaryOp::Exp => Value::Number(pow(to_number(left), to_number(right))),

        // Bitwise
        BinaryOp::BitOr => Value::Number(f64::from(to_int32(left) | to_int32(right))),
        BinaryOp::BitXor => Value::Number(f64::from(to_int32(left) ^ to_int32(right))),
        BinaryOp::BitAnd => Value::Number(f64::from(to_int32(left) & to_int32(right))),

        // Membership
        BinaryOp::In => Value::Bool(has_property(left, right)),

        // No class identity exists statically
        BinaryOp::InstanceOf => Value::Bool(false),

        // Logical, for operands that are already derived
        BinaryOp::LogicalAnd | BinaryOp::LogicalOr | BinaryOp::NullishCoalescing => {
            if logical_takes_left(op, left) {
                left.clone()
            } else {
                right.clone()
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Assignment and Sequence
// ═══════════════════════════════════════════════════════════════════════

/// An assignment expression evaluates to the assigned value.
impl Evaluate for AssignExpr {
    fn eval(&self, ctx: &EvalContext) -> Value {
        self.right.eval(ctx)
    }
}

/// A sequence expression evaluates to its last expression.
impl Evaluate for SeqExpr {
    fn eval(&self, ctx: &EvalContext) -> Value {
        self.exprs
            .last()
            .map(|expr| expr.eval(ctx))
            .unwrap_or_default()
    }
}
