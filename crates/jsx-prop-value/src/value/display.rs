//! Display and Debug implementations for Value

use std::fmt;

use super::*;
use crate::semantics::number_to_string;

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", number_to_string(*n)),
            Value::String(s) => write!(f, "{:?}", s.as_ref()),

            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", item)?;
                }
                write!(f, "]")
            }

            Value::Object(map) => {
                if map.is_empty() {
                    return write!(f, "{{}}");
                }
                write!(f, "{{ ")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {:?}", k, v)?;
                }
                write!(f, " }}")
            }

            Value::Function(func) => match &func.name {
                Some(name) => write!(f, "[Function: {}]", name),
                None => write!(f, "[Function (anonymous)]"),
            },
        }
    }
}

/// Renders the value as the language's `String(value)` would.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", number_to_string(*n)),
            Value::String(s) => write!(f, "{}", s.as_ref()),

            // Holes and nullish elements join as empty strings
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    if !item.is_nullish() {
                        write!(f, "{}", item)?;
                    }
                }
                Ok(())
            }

            Value::Object(_) => write!(f, "[object Object]"),
            Value::Function(func) => write!(f, "{}", func.source_text()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_primitives() {
        assert_eq!(Value::Undefined.to_string(), "undefined");
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Number(-42.0).to_string(), "-42");
        assert_eq!(Value::Number(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::from("bar").to_string(), "bar");
    }

    #[test]
    fn test_display_compound() {
        let array = Value::array(vec![
            Value::from(1),
            Value::Undefined,
            Value::from("a"),
            Value::Null,
        ]);
        assert_eq!(array.to_string(), "1,,a,");
        assert_eq!(Value::empty_object().to_string(), "[object Object]");
    }

    #[test]
    fn test_debug_object() {
        let mut map = ObjectMap::new();
        map.insert("bar".into(), Value::from("baz"));
        map.insert("n".into(), Value::from(1));
        assert_eq!(format!("{:?}", Value::object(map)), r#"{ bar: "baz", n: 1 }"#);
        assert_eq!(format!("{:?}", Value::empty_object()), "{}");
    }

    #[test]
    fn test_debug_function() {
        let named = Value::function(FunctionValue::new(Some("go".into()), 0));
        assert_eq!(format!("{:?}", named), "[Function: go]");
        let anon = Value::function(FunctionValue::arrow(1));
        assert_eq!(format!("{:?}", anon), "[Function (anonymous)]");
    }
}
