//! # tally
//!
//! tally is the engine of an interactive calculator: a tokenizer, a
//! recursive-descent parser producing an abstract syntax tree, a mutable
//! binding environment, and a tree-walking evaluator with
//! type-signature-based dispatch over scalar numbers, fixed arrays, and
//! lazy generators.
//!
//! The two entry points are [`Parser::parse`](interpreter::parser::Parser)
//! and [`evaluate`]; everything else hangs off [`Environment`], which is
//! created once per session with the builtin operator and function tables.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum representing the syntactic
/// structure of an input line as a tree, along with the s-expression
/// pretty-printer used by the REPL's debug mode and the parser tests.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing, or evaluating a line. Every error is recoverable and carries
/// the offending token text, names, lengths, or indexes needed to report it.
pub mod error;
/// Orchestrates the entire process of expression execution.
///
/// This module ties together lexing, parsing, dispatch, evaluation, and the
/// value representations to provide a complete engine for one calculator
/// session.
pub mod interpreter;

use crate::{ast::Expr, interpreter::environment::Environment};

pub use crate::{
    error::{EvalError, SyntaxError},
    interpreter::{parser::Parser, value::core::Value},
};

/// Evaluates a top-level expression and records its result.
///
/// This is the crate's evaluation entry point: it evaluates `expr` against
/// `env` and, on success, additionally binds the result to `_` so the next
/// input line can refer to the most recent value.
///
/// # Errors
/// Returns an [`EvalError`] if evaluation fails; `_` keeps its previous
/// binding in that case.
///
/// # Examples
/// ```
/// use bigdecimal::BigDecimal;
/// use tally::{evaluate, interpreter::environment::Environment, Parser, Value};
///
/// let mut env = Environment::new();
/// let parser = Parser::new();
///
/// let expr = parser.parse(&env, "x := 3").unwrap();
/// evaluate(&mut env, &expr).unwrap();
///
/// let expr = parser.parse(&env, "x + 1").unwrap();
/// let value = evaluate(&mut env, &expr).unwrap();
/// assert_eq!(value, Value::from(BigDecimal::from(4)));
///
/// let expr = parser.parse(&env, "_").unwrap();
/// assert_eq!(evaluate(&mut env, &expr).unwrap(),
///            Value::from(BigDecimal::from(4)));
/// ```
pub fn evaluate(env: &mut Environment, expr: &Expr) -> Result<Value, EvalError> {
    let value = interpreter::evaluator::eval(env, expr)?;
    env.set_variable("_", value.clone());
    Ok(value)
}
