//! Coercion rules of the scripting language
//!
//! Every operator evaluator goes through these helpers, so the language's
//! truthiness, numeric conversion, equality and 32-bit integer rules are
//! defined exactly once.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::Value;

// ═══════════════════════════════════════════════════════════════════════
// Type Conversion
// ═══════════════════════════════════════════════════════════════════════

/// `ToBoolean`: `undefined`, `null`, `false`, `0`, `NaN` and `""` are falsy.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Undefined | Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => !(n.is_nan() || *n == 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) | Value::Function(_) => true,
    }
}

/// `ToPrimitive`: objects collapse to their string form.
pub fn to_primitive(value: &Value) -> Value {
    if value.is_object() {
        Value::string(value.to_string())
    } else {
        value.clone()
    }
}

/// `ToNumber`.
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Undefined => f64::NAN,
        Value::Null => 0.0,
        Value::Bool(true) => 1.0,
        Value::Bool(false) => 0.0,
        Value::Number(n) => *n,
        Value::String(s) => string_to_number(s),
        compound => string_to_number(&compound.to_string()),
    }
}

/// `ToInt32`: wrap into the signed 32-bit range.
pub fn to_int32(value: &Value) -> i32 {
    to_uint32(value) as i32
}

/// `ToUint32`: wrap into the unsigned 32-bit range.
pub fn to_uint32(value: &Value) -> u32 {
    let n = to_number(value);
    if !n.is_finite() {
        return 0;
    }
    n.trunc().rem_euclid(4_294_967_296.0) as u32
}

/// `ToPropertyKey`.
pub fn to_property_key(value: &Value) -> String {
    value.to_string()
}

/// The `typeof` tag of a derived value.
pub fn type_of(value: &Value) -> &'static str {
    match value {
        Value::Undefined => "undefined",
        Value::Null => "object",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) | Value::Object(_) => "object",
        Value::Function(_) => "function",
    }
}

fn is_js_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// `StringToNumber`.
///
/// Rust's float parser also accepts `inf`, `nan` and friends, so the input
/// is checked against the numeric literal alphabet first.
fn string_to_number(s: &str) -> f64 {
    let s = s.trim_matches(is_js_whitespace);
    match s {
        "" => return 0.0,
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x" | "0X") => 16,
        Some("0o" | "0O") => 8,
        Some("0b" | "0B") => 2,
        _ => 10,
    };

    if radix != 10 {
        let digits = &s[2..];
        if digits.is_empty() {
            return f64::NAN;
        }
        return digits
            .chars()
            .try_fold(0.0_f64, |acc, c| {
                c.to_digit(radix)
                    .map(|d| acc * f64::from(radix) + f64::from(d))
            })
            .unwrap_or(f64::NAN);
    }

    let numeric = s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !numeric {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// `Number::toString` for radix 10.
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    if (1e-6..1e21).contains(&n.abs()) {
        return format!("{}", n);
    }

    // Exponent form: the language always signs the exponent
    let s = format!("{:e}", n);
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => s,
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Equality and Comparison
// ═══════════════════════════════════════════════════════════════════════

/// `IsStrictlyEqual` (`===`). Compound values compare by identity.
pub fn strict_equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => Arc::ptr_eq(x, y),
        (Value::Object(x), Value::Object(y)) => Arc::ptr_eq(x, y),
        (Value::Function(x), Value::Function(y)) => Arc::ptr_eq(x, y),
        _ => false,
    }
}

/// `IsLooselyEqual` (`==`).
pub fn loose_equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined | Value::Null, Value::Undefined | Value::Null) => true,
        (Value::Undefined | Value::Null, _) | (_, Value::Undefined | Value::Null) => false,
        _ if std::mem::discriminant(a) == std::mem::discriminant(b) => strict_equals(a, b),
        (Value::Number(x), Value::String(_)) => *x == to_number(b),
        (Value::String(_), Value::Number(y)) => to_number(a) == *y,
        (Value::Bool(_), _) => loose_equals(&Value::Number(to_number(a)), b),
        (_, Value::Bool(_)) => loose_equals(a, &Value::Number(to_number(b))),
        (Value::Number(_) | Value::String(_), other) if other.is_object() => {
            loose_equals(a, &to_primitive(b))
        }
        (other, Value::Number(_) | Value::String(_)) if other.is_object() => {
            loose_equals(&to_primitive(a), b)
        }
        _ => false,
    }
}

/// Abstract relational comparison.
///
/// Two strings compare by UTF-16 code units; everything else numerically.
/// `None` means the comparison is undefined (a `NaN` was involved), which
/// makes every relational operator yield `false`.
pub fn compare(a: &Value, b: &Value) -> Option<Ordering> {
    let (pa, pb) = (to_primitive(a), to_primitive(b));
    if let (Value::String(x), Value::String(y)) = (&pa, &pb) {
        return Some(x.encode_utf16().cmp(y.encode_utf16()));
    }
    to_number(&pa).partial_cmp(&to_number(&pb))
}

// ═══════════════════════════════════════════════════════════════════════
// Arithmetic
// ═══════════════════════════════════════════════════════════════════════

/// The `+` operator: concatenation if either primitive is a string.
pub fn add(a: &Value, b: &Value) -> Value {
    let (pa, pb) = (to_primitive(a), to_primitive(b));
    if matches!(pa, Value::String(_)) || matches!(pb, Value::String(_)) {
        Value::string(format!("{}{}", pa, pb))
    } else {
        Value::Number(to_number(&pa) + to_number(&pb))
    }
}

/// The `**` operator.
pub fn pow(base: f64, exponent: f64) -> f64 {
    if exponent.is_nan() {
        return f64::NAN;
    }
    if exponent == 0.0 {
        return 1.0;
    }
    if base.abs() == 1.0 && exponent.is_infinite() {
        return f64::NAN;
    }
    base.powf(exponent)
}

/// The `in` operator: does `target` own the key `key`?
pub fn has_property(key: &Value, target: &Value) -> bool {
    let key = to_property_key(key);
    match target {
        Value::Object(map) => map.contains_key(&key),
        Value::Array(items) => {
            key == "length"
                || key
                    .parse::<usize>()
                    .is_ok_and(|i| i < items.len() && i.to_string() == key)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{FunctionValue, ObjectMap};

    fn s(text: &str) -> Value {
        Value::from(text)
    }

    fn n(num: f64) -> Value {
        Value::Number(num)
    }

    #[test]
    fn test_truthy() {
        assert!(!truthy(&Value::Undefined));
        assert!(!truthy(&Value::Null));
        assert!(!truthy(&Value::Bool(false)));
        assert!(!truthy(&n(0.0)));
        assert!(!truthy(&n(-0.0)));
        assert!(!truthy(&n(f64::NAN)));
        assert!(!truthy(&s("")));
        assert!(truthy(&s("0")));
        assert!(truthy(&s("bar")));
        assert!(truthy(&Value::empty_object()));
        assert!(truthy(&Value::array(vec![])));
        assert!(truthy(&Value::function(FunctionValue::arrow(0))));
    }

    #[test]
    fn test_to_number_strings() {
        assert_eq!(to_number(&s("42")), 42.0);
        assert_eq!(to_number(&s("  1.5\n")), 1.5);
        assert_eq!(to_number(&s("")), 0.0);
        assert_eq!(to_number(&s("   ")), 0.0);
        assert_eq!(to_number(&s("0x1F")), 31.0);
        assert_eq!(to_number(&s("0b101")), 5.0);
        assert_eq!(to_number(&s("0o17")), 15.0);
        assert_eq!(to_number(&s("1e3")), 1000.0);
        assert_eq!(to_number(&s("-Infinity")), f64::NEG_INFINITY);
        assert!(to_number(&s("bar")).is_nan());
        assert!(to_number(&s("inf")).is_nan());
        assert!(to_number(&s("nan")).is_nan());
        assert!(to_number(&s("0x")).is_nan());
        assert!(to_number(&s("-0x10")).is_nan());
    }

    #[test]
    fn test_to_number_other() {
        assert!(to_number(&Value::Undefined).is_nan());
        assert_eq!(to_number(&Value::Null), 0.0);
        assert_eq!(to_number(&Value::Bool(true)), 1.0);
        assert_eq!(to_number(&Value::array(vec![])), 0.0);
        assert_eq!(to_number(&Value::array(vec![n(7.0)])), 7.0);
        assert!(to_number(&Value::empty_object()).is_nan());
    }

    #[test]
    fn test_int32_wrapping() {
        assert_eq!(to_int32(&n(4_294_967_295.0)), -1);
        assert_eq!(to_int32(&n(2_147_483_648.0)), -2_147_483_648);
        assert_eq!(to_int32(&n(-1.9)), -1);
        assert_eq!(to_int32(&n(f64::NAN)), 0);
        assert_eq!(to_int32(&n(f64::INFINITY)), 0);
        assert_eq!(to_uint32(&n(-1.0)), 4_294_967_295);
        assert_eq!(to_int32(&s("bar")), 0);
    }

    #[test]
    fn test_number_to_string() {
        assert_eq!(number_to_string(1.0), "1");
        assert_eq!(number_to_string(-0.0), "0");
        assert_eq!(number_to_string(0.1), "0.1");
        assert_eq!(number_to_string(1.5e-7), "1.5e-7");
        assert_eq!(number_to_string(0.000001), "0.000001");
        assert_eq!(number_to_string(1e21), "1e+21");
        assert_eq!(number_to_string(1e20), "100000000000000000000");
        assert_eq!(number_to_string(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_strict_equals() {
        assert!(strict_equals(&n(1.0), &n(1.0)));
        assert!(!strict_equals(&n(1.0), &s("1")));
        assert!(!strict_equals(&n(f64::NAN), &n(f64::NAN)));
        assert!(strict_equals(&n(0.0), &n(-0.0)));

        let object = Value::empty_object();
        assert!(strict_equals(&object, &object.clone()));
        assert!(!strict_equals(&object, &Value::empty_object()));
    }

    #[test]
    fn test_loose_equals() {
        assert!(loose_equals(&n(1.0), &s("1")));
        assert!(loose_equals(&s("1"), &n(1.0)));
        assert!(!loose_equals(&n(1.0), &s("bar")));
        assert!(loose_equals(&Value::Null, &Value::Undefined));
        assert!(!loose_equals(&Value::Null, &n(0.0)));
        assert!(loose_equals(&Value::Bool(true), &n(1.0)));
        assert!(loose_equals(&Value::Bool(false), &s("")));
        assert!(loose_equals(&Value::array(vec![n(1.0)]), &s("1")));
        assert!(loose_equals(&Value::empty_object(), &s("[object Object]")));
        assert!(!loose_equals(&Value::empty_object(), &Value::empty_object()));
    }

    #[test]
    fn test_compare() {
        assert_eq!(compare(&n(1.0), &n(2.0)), Some(Ordering::Less));
        assert_eq!(compare(&s("b"), &s("a")), Some(Ordering::Greater));
        assert_eq!(compare(&s("10"), &s("9")), Some(Ordering::Less));
        assert_eq!(compare(&s("10"), &n(9.0)), Some(Ordering::Greater));
        assert_eq!(compare(&s("bar"), &n(1.0)), None);
        assert_eq!(compare(&Value::Null, &n(0.0)), Some(Ordering::Equal));
    }

    #[test]
    fn test_add() {
        assert_eq!(add(&n(1.0), &n(1.0)), n(2.0));
        assert_eq!(add(&n(1.0), &s("1")), s("11"));
        assert_eq!(add(&s("x"), &n(1.0)), s("x1"));
        assert_eq!(add(&Value::Bool(true), &n(1.0)), n(2.0));
        assert!(add(&Value::Undefined, &n(1.0)).is_nan());
        assert_eq!(add(&Value::array(vec![]), &Value::empty_object()), s("[object Object]"));
    }

    #[test]
    fn test_pow() {
        assert_eq!(pow(2.0, 10.0), 1024.0);
        assert_eq!(pow(f64::NAN, 0.0), 1.0);
        assert!(pow(1.0, f64::INFINITY).is_nan());
        assert!(pow(2.0, f64::NAN).is_nan());
    }

    #[test]
    fn test_has_property() {
        let mut map = ObjectMap::new();
        map.insert("foo".into(), Value::Null);
        let object = Value::object(map);
        assert!(has_property(&s("foo"), &object));
        assert!(!has_property(&s("bar"), &object));
        assert!(!has_property(&s("foo"), &s("foo")));

        let array = Value::array(vec![n(1.0), n(2.0)]);
        assert!(has_property(&n(1.0), &array));
        assert!(!has_property(&n(2.0), &array));
        assert!(!has_property(&s("01"), &array));
        assert!(has_property(&s("length"), &array));
    }

    #[test]
    fn test_type_of() {
        assert_eq!(type_of(&Value::Null), "object");
        assert_eq!(type_of(&s("bar")), "string");
        assert_eq!(type_of(&Value::function(FunctionValue::arrow(0))), "function");
    }
}
