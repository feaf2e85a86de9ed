//! Parsing frontend: JSX source text to syntax tree
//!
//! A thin wrapper over `swc_ecma_parser` with JSX enabled. This is the only
//! place in the crate that can fail.
//!
//! Source is parsed as a sloppy-mode script holding one expression
//! statement. Parsing through a statement keeps the `in` operator legal,
//! and sloppy mode keeps `delete x` legal.

use swc_common::input::StringInput;
use swc_common::{sync::Lrc, FileName, SourceMap};
use swc_ecma_ast::{EsVersion, Expr, JSXElement, JSXOpeningElement, Stmt};
use swc_ecma_parser::error::Error as SwcError;
use swc_ecma_parser::lexer::Lexer;
use swc_ecma_parser::{EsConfig, Parser, Syntax};

use crate::error::{ParseError, Result};
use crate::eval::{expr_kind_name, unwrap_transparent};

/// Parse a single expression, with JSX syntax enabled.
pub fn parse_expr(source: &str) -> Result<Box<Expr>> {
    let cm: Lrc<SourceMap> = Default::default();
    let fm = cm.new_source_file(FileName::Custom("<jsx>".into()), source.to_string());

    let syntax = Syntax::Es(EsConfig {
        jsx: true,
        ..Default::default()
    });
    let lexer = Lexer::new(syntax, EsVersion::EsNext, StringInput::from(&*fm), None);
    let mut parser = Parser::new_from(lexer);

    let script = parser.parse_script().map_err(syntax_error)?;
    if let Some(err) = parser.take_errors().into_iter().next() {
        return Err(syntax_error(err));
    }

    let mut body = script.body.into_iter();
    match (body.next(), body.next()) {
        (Some(Stmt::Expr(stmt)), None) => Ok(stmt.expr),
        _ => Err(ParseError::Syntax {
            message: "Expected a single expression".to_string(),
        }),
    }
}

/// Parse source text that must be a JSX element, such as `<div foo="bar" />`.
///
/// Surrounding parentheses are accepted.
pub fn parse_element(source: &str) -> Result<JSXElement> {
    let expr = parse_expr(source)?;
    match unwrap_transparent(&expr) {
        Expr::JSXElement(element) => Ok((**element).clone()),
        other => Err(ParseError::NotAnElement {
            kind: expr_kind_name(other).to_string(),
        }),
    }
}

/// Parse a JSX element and keep only its opening tag, where the attributes live.
pub fn parse_opening_element(source: &str) -> Result<JSXOpeningElement> {
    parse_element(source).map(|element| element.opening)
}

fn syntax_error(err: SwcError) -> ParseError {
    ParseError::Syntax {
        message: err.kind().msg().to_string(),
    }
}
