//! Object, array and constructor evaluation

use swc_ecma_ast::{ArrayLit, NewExpr, ObjectLit, Prop, PropName, PropOrSpread};

use super::function::function_value;
use super::Evaluate;
use crate::semantics::{number_to_string, to_property_key};
use crate::value::{FunctionValue, ObjectMap};
use crate::{EvalContext, Value};

// ═══════════════════════════════════════════════════════════════════════
// Object Literals
// ═══════════════════════════════════════════════════════════════════════

impl Evaluate for ObjectLit {
    fn eval(&self, ctx: &EvalContext) -> Value {
        let mut map = ObjectMap::new();

        for prop in &self.props {
            match prop {
                PropOrSpread::Spread(spread) => merge_spread(&mut map, spread.expr.eval(ctx)),
                PropOrSpread::Prop(prop) => {
                    if let Some((key, value)) = eval_prop(prop, ctx) {
                        // A repeated key keeps its first position, last value wins
                        map.insert(key, value);
                    }
                }
            }
        }

        Value::object(map)
    }
}

fn eval_prop(prop: &Prop, ctx: &EvalContext) -> Option<(String, Value)> {
    match prop {
        Prop::Shorthand(ident) => Some((ident.sym.to_string(), ident.eval(ctx))),
        Prop::KeyValue(kv) => Some((prop_key(&kv.key, ctx), kv.value.eval(ctx))),
        Prop::Method(method) => {
            let key = prop_key(&method.key, ctx);
            let value = Value::function(function_value(Some(key.clone()), &method.function));
            Some((key, value))
        }
        // Accessors become placeholders too; their bodies are never run
        Prop::Getter(getter) => Some(accessor(prop_key(&getter.key, ctx), 0)),
        Prop::Setter(setter) => Some(accessor(prop_key(&setter.key, ctx), 1)),
        // Only valid inside destructuring patterns
        Prop::Assign(_) => None,
    }
}

fn accessor(key: String, params: usize) -> (String, Value) {
    let value = Value::function(FunctionValue::new(Some(key.clone()), params));
    (key, value)
}

/// Derive the key a property name denotes.
pub fn prop_key(name: &PropName, ctx: &EvalContext) -> String {
    match name {
        PropName::Ident(ident) => ident.sym.to_string(),
        PropName::Str(s) => s.value.to_string(),
        PropName::Num(n) => number_to_string(n.value),
        PropName::BigInt(b) => b.value.to_string(),
        PropName::Computed(computed) => to_property_key(&computed.expr.eval(ctx)),
    }
}

/// `{...x}` copies own enumerable keys: object entries, array indices or
/// string indices. Other values have none.
fn merge_spread(map: &mut ObjectMap, source: Value) {
    match source {
        Value::Object(entries) => {
            for (key, value) in entries.iter() {
                map.insert(key.clone(), value.clone());
            }
        }
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                map.insert(i.to_string(), item.clone());
            }
        }
        Value::String(s) => {
            for (i, c) in s.chars().enumerate() {
                map.insert(i.to_string(), Value::string(c));
            }
        }
        _ => {}
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Array Literals
// ═══════════════════════════════════════════════════════════════════════

impl Evaluate for ArrayLit {
    fn eval(&self, ctx: &EvalContext) -> Value {
        let mut items = Vec::with_capacity(self.elems.len());

        for elem in &self.elems {
            match elem {
                // A hole reads as undefined
                None => items.push(Value::Undefined),
                Some(elem) if elem.spread.is_some() => spread_into(&mut items, elem.expr.eval(ctx)),
                Some(elem) => items.push(elem.expr.eval(ctx)),
            }
        }

        Value::array(items)
    }
}

fn spread_into(items: &mut Vec<Value>, source: Value) {
    match source {
        Value::Array(source) => items.extend(source.iter().cloned()),
        Value::String(s) => items.extend(s.chars().map(Value::string)),
        _ => {}
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Constructor Invocation
// ═══════════════════════════════════════════════════════════════════════

/// The shape of a constructed object is unknowable, so it is empty.
impl Evaluate for NewExpr {
    fn eval(&self, _ctx: &EvalContext) -> Value {
        Value::empty_object()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spread_object_overrides() {
        let mut map = ObjectMap::new();
        map.insert("a".into(), Value::from(1));

        let mut source = ObjectMap::new();
        source.insert("a".into(), Value::from(2));
        source.insert("b".into(), Value::from(3));
        merge_spread(&mut map, Value::object(source));

        assert_eq!(map.get("a"), Some(&Value::from(2)));
        assert_eq!(map.get("b"), Some(&Value::from(3)));
    }

    #[test]
    fn test_spread_string_and_placeholders() {
        let mut map = ObjectMap::new();
        merge_spread(&mut map, Value::from("ab"));
        merge_spread(&mut map, Value::Undefined);
        merge_spread(&mut map, Value::from(4));
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("1"), Some(&Value::from("b")));
    }

    #[test]
    fn test_accessor_placeholder() {
        let (key, value) = accessor("b".to_string(), 1);
        assert_eq!(key, "b");
        assert_eq!(value.as_function().map(|f| f.params), Some(1));
    }

    #[test]
    fn test_array_spread() {
        let mut items = vec![Value::from(0)];
        spread_into(&mut items, Value::array(vec![Value::from(1), Value::from(2)]));
        spread_into(&mut items, Value::from("xy"));
        spread_into(&mut items, Value::Null);
        assert_eq!(
            items,
            vec![
                Value::from(0),
                Value::from(1),
                Value::from(2),
                Value::from("x"),
                Value::from("y"),
            ]
        );
    }
}
