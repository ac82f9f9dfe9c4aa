use std::rc::Rc;

use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{
        builtins::ASSIGN,
        dispatch::EvalResult,
        environment::Environment,
        value::core::Value,
    },
};

/// Evaluates an expression against an environment.
///
/// Evaluation is a plain recursive tree walk: one stack frame per nested
/// sub-expression, no iteration limit beyond call-stack depth, and no
/// suspension points. Sub-expressions evaluate left to right and the first
/// error short-circuits the walk; the AST itself is never mutated.
///
/// Assignment (`:=`) is intercepted here rather than dispatched: its left
/// side must be a plain identifier, its right side evaluates first, and the
/// bound value is also the result of the whole expression.
///
/// ## Example
/// ```
/// use bigdecimal::BigDecimal;
/// use tally::{
///     interpreter::{environment::Environment, evaluator::eval, parser::Parser},
///     Value,
/// };
///
/// let mut env = Environment::new();
/// let parser = Parser::new();
///
/// let expr = parser.parse(&env, "1 + 2 * 3").unwrap();
/// assert_eq!(eval(&mut env, &expr).unwrap(),
///            Value::from(BigDecimal::from(7)));
/// ```
///
/// # Errors
/// Returns an [`EvalError`] for undefined names, dispatch failures, invalid
/// assignment targets, and the other failure modes of the builtin table.
/// Every error is recoverable; the environment keeps whatever bindings were
/// written before the failure.
pub fn eval(env: &mut Environment, expr: &Expr) -> EvalResult<Value> {
    match expr {
        Expr::Number(value) => Ok(Value::Number(value.clone())),

        Expr::ArrayLiteral(values) => Ok(Value::Array(Rc::new(values.clone()))),

        Expr::Identifier(name) => match env.variable(name) {
            Some(value) => Ok(value.clone()),
            None => Err(EvalError::UndefinedVariable { name: name.clone() }),
        },

        Expr::Group(Some(sub)) => eval(env, sub),
        // An empty group is a parse artifact inside nested groups; it has
        // no value of its own.
        Expr::Group(None) => Err(EvalError::EmptyGroup),

        Expr::Apply { name, args } => {
            if !env.has_function(name) {
                return Err(EvalError::UndefinedFunction { name: name.clone() });
            }

            let mut values = Vec::with_capacity(args.len());
            for arg in args {
                values.push(eval(env, arg)?);
            }

            match env.function(name) {
                Some(function) => function.dispatch(name, &values),
                None => Err(EvalError::UndefinedFunction { name: name.clone() }),
            }
        },

        Expr::BinaryOp { op, lhs, rhs } if op == ASSIGN => assign(env, lhs, rhs),

        Expr::BinaryOp { op, lhs, rhs } => {
            if !env.has_operator(op) {
                return Err(EvalError::UndefinedOperator { name: op.clone() });
            }

            let left = eval(env, lhs)?;
            let right = eval(env, rhs)?;

            match env.operator(op) {
                Some(operator) => operator.dispatch(op, &left, &right),
                None => Err(EvalError::UndefinedOperator { name: op.clone() }),
            }
        },
    }
}

/// Binds the result of `rhs` to the identifier on the left side of an
/// assignment. The bound value is the result of the expression.
fn assign(env: &mut Environment, lhs: &Expr, rhs: &Expr) -> EvalResult<Value> {
    let Expr::Identifier(name) = lhs else {
        return Err(EvalError::InvalidAssignment);
    };

    let value = eval(env, rhs)?;
    env.set_variable(name, value.clone());
    Ok(value)
}
