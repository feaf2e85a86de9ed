//! Evaluation context configuration

/// Which family of rules the outermost expression is evaluated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvalMode {
    /// Derive a value for every supported shape
    #[default]
    Derived,

    /// Only literal-like shapes produce values; everything else is `null`
    Literal,
}

/// Configuration for evaluation.
///
/// This is passed through all evaluation calls. It carries no state, so a
/// single context can be shared freely between evaluations and threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalContext {
    /// Evaluation rules for the outermost expression
    pub mode: EvalMode,

    /// Compute `typeof x` from the operand's derived value instead of
    /// treating it as unknown
    pub resolve_typeof: bool,
}

impl EvalContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context for literal-only evaluation.
    pub fn literal() -> Self {
        Self {
            mode: EvalMode::Literal,
            ..Default::default()
        }
    }

    /// Set the evaluation mode (builder pattern)
    pub fn with_mode(mut self, mode: EvalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Enable or disable static `typeof` resolution (builder pattern)
    pub fn with_resolve_typeof(mut self, resolve: bool) -> Self {
        self.resolve_typeof = resolve;
        self
    }

    /// Is the outermost expression restricted to literal shapes?
    pub fn is_literal(&self) -> bool {
        self.mode == EvalMode::Literal
    }

    /// The same context with full derivation rules, used for operands.
    pub fn derived(&self) -> Self {
        self.with_mode(EvalMode::Derived)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let ctx = EvalContext::default();
        assert_eq!(ctx.mode, EvalMode::Derived);
        assert!(!ctx.resolve_typeof);
        assert!(!ctx.is_literal());
    }

    #[test]
    fn test_literal_context_derives_operands() {
        let ctx = EvalContext::literal().with_resolve_typeof(true);
        assert!(ctx.is_literal());
        let operands = ctx.derived();
        assert!(!operands.is_literal());
        assert!(operands.resolve_typeof);
    }
}
