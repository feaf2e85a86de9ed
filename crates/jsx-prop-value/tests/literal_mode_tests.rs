//! Literal-only evaluation over real JSX source

use jsx_prop_value::*;
use pretty_assertions::assert_eq;

fn literal(code: &str) -> Value {
    let opening = parse_opening_element(code).expect("parse failed");
    let attr = get_prop(&opening.attrs, "foo", PropOptions::default()).expect("no foo attribute");
    literal_prop_value(attr)
}

fn s(text: &str) -> Value {
    Value::from(text)
}

#[test]
fn test_literals_pass_through() {
    assert_eq!(literal("<div foo />"), Value::Bool(true));
    assert_eq!(literal(r#"<div foo="bar" />"#), s("bar"));
    assert_eq!(literal(r#"<div foo="false" />"#), Value::Bool(false));
    assert_eq!(literal("<div foo={1} />"), Value::Number(1.0));
}

#[test]
fn test_null_literal_is_string() {
    assert_eq!(literal("<div foo={null} />"), s("null"));
}

#[test]
fn test_identifiers() {
    assert_eq!(literal("<div foo={bar} />"), Value::Null);
    assert_eq!(literal("<div foo={undefined} />"), Value::Undefined);
}

#[test]
fn test_template_is_rendered() {
    assert_eq!(literal("<div foo={`bar ${baz}`} />"), s("bar {baz}"));
}

#[test]
fn test_unknowable_shapes_are_null() {
    let sources = [
        "<div foo=<bar /> />",
        "<div foo={<bar />} />",
        "<div foo={() => 1} />",
        "<div foo={function() {}} />",
        "<div foo={bar && baz} />",
        "<div foo={1 + 1} />",
        "<div foo={bar.baz} />",
        "<div foo={bar()} />",
        "<div foo={bar?.baz} />",
        "<div foo={this} />",
        "<div foo={bar ? 1 : 2} />",
        "<div foo={{ a: 1 }} />",
        "<div foo={new Bar()} />",
    ];
    for source in sources {
        assert_eq!(literal(source), Value::Null, "{}", source);
    }
}

#[test]
fn test_unary_uses_derived_operand() {
    assert_eq!(literal("<div foo={-42} />"), Value::Number(-42.0));
    assert_eq!(literal("<div foo={!bar} />"), Value::Bool(false));
    assert_eq!(literal("<div foo={void 0} />"), Value::Null);
    assert_eq!(literal("<div foo={typeof bar} />"), Value::Null);
}

#[test]
fn test_array_drops_null_entries() {
    assert_eq!(
        literal(r#"<div foo={["a", null, 1]} />"#),
        Value::array(vec![s("a"), Value::Number(1.0)])
    );
}

#[test]
fn test_parentheses_before_restriction() {
    assert_eq!(literal("<div foo={(bar)} />"), Value::Null);
    assert_eq!(literal("<div foo={(null)} />"), s("null"));
}

#[test]
fn test_mode_through_context() {
    let opening = parse_opening_element("<div foo={bar} />").expect("parse failed");
    let ctx = EvalContext::new().with_mode(EvalMode::Literal);
    assert_eq!(prop_value_with(&opening.attrs[0], &ctx), Value::Null);
    assert_eq!(prop_value(&opening.attrs[0]), s("bar"));
}
