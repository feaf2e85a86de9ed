//! Serde support for derived values

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use super::Value;

/// `undefined` and `null` serialize as unit; functions as their inspector text.
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Undefined | Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items.iter() {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map.iter() {
                    out.serialize_entry(k, v)?;
                }
                out.end()
            }
            Value::Function(_) => serializer.serialize_str(&format!("{:?}", self)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{FunctionValue, ObjectMap};
    use super::*;

    #[test]
    fn test_serialize_object() {
        let mut map = ObjectMap::new();
        map.insert("bar".into(), Value::from("baz"));
        map.insert("flag".into(), Value::Bool(true));
        map.insert("missing".into(), Value::Undefined);
        let json = serde_json::to_string(&Value::object(map)).unwrap();
        assert_eq!(json, r#"{"bar":"baz","flag":true,"missing":null}"#);
    }

    #[test]
    fn test_serialize_function_and_array() {
        let value = Value::array(vec![
            Value::from(1.5),
            Value::function(FunctionValue::new(Some("go".into()), 0)),
        ]);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"[1.5,"[Function: go]"]"#);
    }
}
