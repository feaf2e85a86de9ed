//! Callable placeholders for function and arrow literals

use super::Value;

/// Syntactic flavour of the function literal a placeholder stands in for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FunctionKind {
    /// `function () {}` expression, or an object method
    #[default]
    Function,
    /// `() => {}` arrow function
    Arrow,
}

/// A callable placeholder.
///
/// Only the shape of the literal is recorded; the body is never kept and
/// never run. Invoking the placeholder is always safe and yields
/// [`Value::Undefined`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FunctionValue {
    /// Binding name, if the literal had one (`function foo() {}`)
    pub name: Option<String>,

    /// Number of declared parameters
    pub params: usize,

    /// Function expression or arrow
    pub kind: FunctionKind,

    /// Declared with `async`
    pub is_async: bool,

    /// Declared with `function*`
    pub is_generator: bool,
}

impl FunctionValue {
    /// Create a placeholder for a `function` expression.
    pub fn new(name: Option<String>, params: usize) -> Self {
        Self {
            name,
            params,
            ..Default::default()
        }
    }

    /// Create a placeholder for an arrow function.
    pub fn arrow(params: usize) -> Self {
        Self {
            params,
            kind: FunctionKind::Arrow,
            ..Default::default()
        }
    }

    /// Mark the placeholder as `async` (builder pattern)
    pub fn with_async(mut self, is_async: bool) -> Self {
        self.is_async = is_async;
        self
    }

    /// Mark the placeholder as a generator (builder pattern)
    pub fn with_generator(mut self, is_generator: bool) -> Self {
        self.is_generator = is_generator;
        self
    }

    /// Invoke the placeholder.
    ///
    /// Arguments are ignored and nothing observable happens.
    pub fn call(&self, _args: &[Value]) -> Value {
        Value::Undefined
    }

    /// Text used when the placeholder is coerced to a string.
    pub fn source_text(&self) -> String {
        let prefix = if self.is_async { "async " } else { "" };
        let params = (0..self.params)
            .map(|i| format!("arg{i}"))
            .collect::<Vec<_>>()
            .join(", ");

        match self.kind {
            FunctionKind::Arrow => format!("{prefix}({params}) => {{}}"),
            FunctionKind::Function => {
                let star = if self.is_generator { "*" } else { "" };
                let name = self.name.as_deref().unwrap_or("");
                format!("{prefix}function{star} {name}({params}) {{}}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_returns_undefined() {
        let f = FunctionValue::arrow(2);
        assert_eq!(f.call(&[Value::Bool(true), Value::Null]), Value::Undefined);
    }

    #[test]
    fn test_source_text() {
        assert_eq!(FunctionValue::arrow(0).source_text(), "() => {}");
        assert_eq!(
            FunctionValue::new(Some("foo".into()), 2).source_text(),
            "function foo(arg0, arg1) {}"
        );
        assert_eq!(
            FunctionValue::new(None, 0)
                .with_async(true)
                .with_generator(true)
                .source_text(),
            "async function* () {}"
        );
    }
}
