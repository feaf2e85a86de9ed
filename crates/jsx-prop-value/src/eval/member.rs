//! Member access and call expression evaluation
//!
//! No property is ever looked up and nothing is ever called: member access
//! derives a dotted path (`bar.baz`) and a call derives the text of its
//! callee (`bar.call()` is `"bar.call"`).

use swc_ecma_ast::{
    CallExpr, Callee, Expr, MemberExpr, MemberProp, OptChainBase, OptChainExpr, SuperProp,
    SuperPropExpr,
};

use super::Evaluate;
use crate::{EvalContext, Value};

impl Evaluate for MemberExpr {
    fn eval(&self, ctx: &EvalContext) -> Value {
        Value::string(member_path(self, false, ctx))
    }
}

impl Evaluate for SuperPropExpr {
    fn eval(&self, ctx: &EvalContext) -> Value {
        let path = match &self.prop {
            SuperProp::Ident(ident) => format!("super.{}", ident.sym),
            SuperProp::Computed(computed) => format!("super[{}]", computed.expr.eval(ctx)),
        };
        Value::string(path)
    }
}

impl Evaluate for CallExpr {
    fn eval(&self, ctx: &EvalContext) -> Value {
        match &self.callee {
            Callee::Expr(callee) => callee_text(callee, ctx),
            Callee::Super(_) => Value::string("super"),
            Callee::Import(_) => Value::string("import"),
        }
    }
}

impl Evaluate for OptChainExpr {
    fn eval(&self, ctx: &EvalContext) -> Value {
        match &*self.base {
            OptChainBase::Member(member) => Value::string(member_path(member, self.optional, ctx)),
            OptChainBase::Call(call) => callee_text(&call.callee, ctx),
        }
    }
}

/// Render `object.property`, with `?.` for an optional link.
///
/// The object side is derived recursively, so nested paths, `this` and
/// call results all flatten into one string.
pub fn member_path(member: &MemberExpr, optional: bool, ctx: &EvalContext) -> String {
    let object = member.obj.eval(ctx);
    let dot = if optional { "?." } else { "." };

    match &member.prop {
        MemberProp::Ident(ident) => format!("{}{}{}", object, dot, ident.sym),
        MemberProp::PrivateName(name) => format!("{}{}#{}", object, dot, name.id.sym),
        MemberProp::Computed(computed) => {
            let key = computed.expr.eval(ctx);
            let link = if optional { "?." } else { "" };
            format!("{}{}[{}]", object, link, key)
        }
    }
}

/// Text of a callee; the arguments play no part.
fn callee_text(callee: &Expr, ctx: &EvalContext) -> Value {
    match callee.eval(ctx) {
        Value::Undefined => Value::Undefined,
        Value::String(name) => Value::String(name),
        other => Value::string(other.to_string()),
    }
}
