//! Nested markup stringification
//!
//! An element used as a value is turned back into source text. Only the
//! tag and the children survive; attributes of the nested element are not
//! reproduced.

use swc_ecma_ast::{JSXElement, JSXElementChild, JSXFragment};

use super::Evaluate;
use crate::element::element_type;
use crate::{EvalContext, Value};

impl Evaluate for JSXElement {
    fn eval(&self, ctx: &EvalContext) -> Value {
        Value::string(render_element(self, ctx))
    }
}

impl Evaluate for JSXFragment {
    fn eval(&self, ctx: &EvalContext) -> Value {
        Value::string(render_fragment(self, ctx))
    }
}

/// `<Tag />` when self-closing, `<Tag>children</Tag>` otherwise.
pub fn render_element(element: &JSXElement, ctx: &EvalContext) -> String {
    let tag = element_type(&element.opening);
    if element.opening.self_closing {
        return format!("<{} />", tag);
    }

    format!("<{}>{}</{}>", tag, render_children(&element.children, ctx), tag)
}

/// `<>children</>`
pub fn render_fragment(fragment: &JSXFragment, ctx: &EvalContext) -> String {
    format!("<>{}</>", render_children(&fragment.children, ctx))
}

fn render_children(children: &[JSXElementChild], ctx: &EvalContext) -> String {
    let mut out = String::new();

    for child in children {
        match child {
            JSXElementChild::JSXText(text) => out.push_str(&text.value),
            JSXElementChild::JSXExprContainer(container) => {
                push_rendered(&mut out, container.eval(ctx));
            }
            JSXElementChild::JSXSpreadChild(spread) => push_rendered(&mut out, spread.expr.eval(ctx)),
            JSXElementChild::JSXElement(element) => out.push_str(&render_element(element, ctx)),
            JSXElementChild::JSXFragment(fragment) => {
                out.push_str(&render_fragment(fragment, ctx));
            }
        }
    }

    out
}

// Booleans and nullish values render nothing
fn push_rendered(out: &mut String, value: Value) {
    match value {
        Value::Undefined | Value::Null | Value::Bool(_) => {}
        other => out.push_str(&other.to_string()),
    }
}
