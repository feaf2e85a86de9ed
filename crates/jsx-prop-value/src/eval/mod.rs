//! Expression evaluation

pub mod attr;
pub mod binary;
pub mod conditional;
pub mod function;
pub mod ident;
pub mod jsx;
pub mod literal;
pub mod literal_only;
pub mod member;
pub mod object;
pub mod template;
pub mod unary;

use swc_ecma_ast::{Expr, JSXAttrOrSpread};

use crate::{EvalContext, Value};

/// Trait for deriving values from syntax tree nodes.
///
/// This is the core abstraction of the evaluator. Each supported node type
/// implements it; evaluation is total and never mutates the tree.
pub trait Evaluate {
    /// Derive a best-effort value for this node.
    fn eval(&self, ctx: &EvalContext) -> Value;
}

// ═══════════════════════════════════════════════════════════════════════
// Main Expression Dispatcher
// ═══════════════════════════════════════════════════════════════════════

impl Evaluate for Expr {
    fn eval(&self, ctx: &EvalContext) -> Value {
        if ctx.is_literal() {
            return literal_only::eval_literal_only(self, &ctx.derived());
        }

        match self {
            // Leaves
            Expr::Lit(expr) => expr.eval(ctx),
            Expr::Ident(expr) => expr.eval(ctx),
            Expr::This(expr) => expr.eval(ctx),

            // Operators
            Expr::Unary(expr) => expr.eval(ctx),
            Expr::Update(expr) => expr.eval(ctx),
            Expr::Bin(expr) => expr.eval(ctx),
            Expr::Assign(expr) => expr.eval(ctx),
            Expr::Cond(expr) => expr.eval(ctx),
            Expr::Seq(expr) => expr.eval(ctx),

            // Strings
            Expr::Tpl(expr) => expr.eval(ctx),
            Expr::TaggedTpl(expr) => expr.eval(ctx),

            // Paths and calls
            Expr::Member(expr) => expr.eval(ctx),
            Expr::SuperProp(expr) => expr.eval(ctx),
            Expr::Call(expr) => expr.eval(ctx),
            Expr::OptChain(expr) => expr.eval(ctx),

            // Builders
            Expr::Object(expr) => expr.eval(ctx),
            Expr::Array(expr) => expr.eval(ctx),
            Expr::New(expr) => expr.eval(ctx),
            Expr::Fn(expr) => expr.eval(ctx),
            Expr::Arrow(expr) => expr.eval(ctx),

            // Nested markup
            Expr::JSXElement(expr) => expr.eval(ctx),
            Expr::JSXFragment(expr) => expr.eval(ctx),

            // Parentheses and type-only wrappers - just unwrap
            Expr::Paren(_)
            | Expr::TsAs(_)
            | Expr::TsNonNull(_)
            | Expr::TsTypeAssertion(_)
            | Expr::TsConstAssertion(_)
            | Expr::TsSatisfies(_)
            | Expr::TsInstantiation(_) => unwrap_transparent(self).eval(ctx),

            // Everything else
            other => {
                tracing::debug!("Expression not supported: {}", expr_kind_name(other));
                Value::Undefined
            }
        }
    }
}

/// Strip parentheses and type-only wrappers, which never change a value.
pub(crate) fn unwrap_transparent(mut expr: &Expr) -> &Expr {
    loop {
        expr = match expr {
            Expr::Paren(inner) => &*inner.expr,
            Expr::TsAs(inner) => &*inner.expr,
            Expr::TsNonNull(inner) => &*inner.expr,
            Expr::TsTypeAssertion(inner) => &*inner.expr,
            Expr::TsConstAssertion(inner) => &*inner.expr,
            Expr::TsSatisfies(inner) => &*inner.expr,
            Expr::TsInstantiation(inner) => &*inner.expr,
            other => return other,
        };
    }
}

/// Get a human-readable name for an expression kind.
pub fn expr_kind_name(expr: &Expr) -> &'static str {
    match expr {
        Expr::This(_) => "this",
        Expr::Array(_) => "array literal",
        Expr::Object(_) => "object literal",
        Expr::Fn(_) => "function expression",
        Expr::Unary(_) => "unary operation",
        Expr::Update(_) => "update",
        Expr::Bin(_) => "binary operation",
        Expr::Assign(_) => "assignment",
        Expr::Member(_) => "member access",
        Expr::SuperProp(_) => "super property",
        Expr::Cond(_) => "conditional",
        Expr::Call(_) => "call",
        Expr::New(_) => "constructor invocation",
        Expr::Seq(_) => "sequence",
        Expr::Ident(_) => "identifier",
        Expr::Lit(_) => "literal",
        Expr::Tpl(_) => "template literal",
        Expr::TaggedTpl(_) => "tagged template",
        Expr::Arrow(_) => "arrow function",
        Expr::Class(_) => "class expression",
        Expr::Yield(_) => "yield",
        Expr::MetaProp(_) => "meta property",
        Expr::Await(_) => "await",
        Expr::Paren(_) => "parenthesized",
        Expr::JSXElement(_) => "JSX element",
        Expr::JSXFragment(_) => "JSX fragment",
        Expr::OptChain(_) => "optional chain",
        Expr::PrivateName(_) => "private name",
        Expr::JSXMember(_) => "JSX member name",
        Expr::JSXNamespacedName(_) => "JSX namespaced name",
        Expr::JSXEmpty(_) => "empty JSX expression",
        Expr::TsTypeAssertion(_) => "type assertion",
        Expr::TsConstAssertion(_) => "const assertion",
        Expr::TsNonNull(_) => "non-null assertion",
        Expr::TsAs(_) => "as expression",
        Expr::TsInstantiation(_) => "type instantiation",
        Expr::TsSatisfies(_) => "satisfies expression",
        Expr::Invalid(_) => "invalid expression",
        #[allow(unreachable_patterns)]
        _ => "unknown",
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Entry Points
// ═══════════════════════════════════════════════════════════════════════

/// Derive the value of a JSX attribute.
///
/// A flag attribute (`<div foo />`) is `true`; a spread attribute is not a
/// named attribute and yields [`Value::Undefined`].
pub fn prop_value(attr: &JSXAttrOrSpread) -> Value {
    prop_value_with(attr, &EvalContext::default())
}

/// Derive the value of a JSX attribute with an explicit context.
pub fn prop_value_with(attr: &JSXAttrOrSpread, ctx: &EvalContext) -> Value {
    tracing::trace!(mode = ?ctx.mode, "Evaluating attribute");
    attr.eval(ctx)
}

/// Derive the value of a JSX attribute, accepting only literal-like shapes.
///
/// Identifiers, calls, operators, functions and markup evaluate to
/// [`Value::Null`] instead of a placeholder.
pub fn literal_prop_value(attr: &JSXAttrOrSpread) -> Value {
    prop_value_with(attr, &EvalContext::literal())
}
