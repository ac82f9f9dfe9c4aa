/// Syntax errors.
///
/// Defines all error types that can occur during tokenization and parsing of
/// an input line: unexpected end of input, unexpected tokens, and malformed
/// numeric literals.
pub mod syntax_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while evaluating an
/// expression: undefined names, dispatch failures, length and bounds
/// violations, invalid assignment targets, and generator exhaustion.
pub mod eval_error;

pub use eval_error::EvalError;
pub use syntax_error::SyntaxError;
