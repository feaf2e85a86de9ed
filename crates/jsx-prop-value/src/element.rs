//! Element type names

use swc_ecma_ast::{JSXElementName, JSXMemberExpr, JSXObject, JSXOpeningElement};

/// The type of an element as written: `div`, `Foo.Bar` or `svg:path`.
pub fn element_type(opening: &JSXOpeningElement) -> String {
    element_name(&opening.name)
}

/// Render an element name back to its source spelling.
pub fn element_name(name: &JSXElementName) -> String {
    match name {
        JSXElementName::Ident(ident) => ident.sym.to_string(),
        JSXElementName::JSXMemberExpr(member) => member_name(member),
        JSXElementName::JSXNamespacedName(namespaced) => {
            format!("{}:{}", namespaced.ns.sym, namespaced.name.sym)
        }
    }
}

fn member_name(member: &JSXMemberExpr) -> String {
    let object = match &member.obj {
        JSXObject::Ident(ident) => ident.sym.to_string(),
        JSXObject::JSXMemberExpr(inner) => member_name(inner),
    };
    format!("{}.{}", object, member.prop.sym)
}
