//! Attribute lookup on an element's attribute list
//!
//! These helpers find the attribute to hand to the evaluator. They never
//! evaluate anything themselves.

use swc_ecma_ast::{JSXAttr, JSXAttrName, JSXAttrOrSpread};

/// Options for matching attribute names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropOptions {
    /// Compare names without regard to ASCII case
    pub ignore_case: bool,

    /// When `false`, a spread attribute (`{...props}`) counts as possibly
    /// supplying any prop
    pub spread_strict: bool,
}

impl Default for PropOptions {
    fn default() -> Self {
        Self {
            ignore_case: true,
            spread_strict: true,
        }
    }
}

impl PropOptions {
    /// Require names to match exactly (builder pattern)
    pub fn case_sensitive(mut self) -> Self {
        self.ignore_case = false;
        self
    }

    /// Let spread attributes satisfy presence checks (builder pattern)
    pub fn spread_lenient(mut self) -> Self {
        self.spread_strict = false;
        self
    }
}

/// The attribute's name as written, `ns:name` for namespaced attributes.
pub fn prop_name(attr: &JSXAttr) -> String {
    match &attr.name {
        JSXAttrName::Ident(ident) => ident.sym.to_string(),
        JSXAttrName::JSXNamespacedName(namespaced) => {
            format!("{}:{}", namespaced.ns.sym, namespaced.name.sym)
        }
    }
}

/// Find the first explicit attribute called `name`.
///
/// Spread attributes are never returned: they have no single name.
pub fn get_prop<'a>(
    attrs: &'a [JSXAttrOrSpread],
    name: &str,
    options: PropOptions,
) -> Option<&'a JSXAttrOrSpread> {
    attrs.iter().find(|attr| match attr {
        JSXAttrOrSpread::JSXAttr(attr) => names_match(&prop_name(attr), name, options),
        JSXAttrOrSpread::SpreadElement(_) => false,
    })
}

/// Is an attribute called `name` present?
pub fn has_prop(attrs: &[JSXAttrOrSpread], name: &str, options: PropOptions) -> bool {
    if !options.spread_strict && attrs.iter().any(is_spread) {
        return true;
    }
    get_prop(attrs, name, options).is_some()
}

/// Is at least one of `names` present?
pub fn has_any_prop(attrs: &[JSXAttrOrSpread], names: &[&str], options: PropOptions) -> bool {
    names.iter().any(|name| has_prop(attrs, name, options))
}

/// Are all of `names` present?
pub fn has_every_prop(attrs: &[JSXAttrOrSpread], names: &[&str], options: PropOptions) -> bool {
    names.iter().all(|name| has_prop(attrs, name, options))
}

fn is_spread(attr: &JSXAttrOrSpread) -> bool {
    matches!(attr, JSXAttrOrSpread::SpreadElement(_))
}

fn names_match(actual: &str, wanted: &str, options: PropOptions) -> bool {
    if options.ignore_case {
        actual.eq_ignore_ascii_case(wanted)
    } else {
        actual == wanted
    }
}
