/// The lexer module tokenizes an input line.
///
/// The lexer reads raw text and produces a fully materialized token stream
/// of numbers, words, and parentheses. Tokenization is total: unrecognized
/// input becomes a word token instead of an error, so every diagnostic is
/// produced by the parser with the token in hand.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// Parsing is recursive descent and context-sensitive: the parser consults
/// the environment's operator and function tables to decide whether a word
/// begins a prefix application (and with how many arguments) or acts as an
/// infix operator.
pub mod parser;
/// The environment module holds one session's bindings.
///
/// An environment maps names to operators, functions, and variables. It is
/// seeded once with the builtin tables and only ever grows.
pub mod environment;
/// Type-signature-based dispatch for operators and functions.
///
/// Defines the `Operator` and `Function` tables mapping ordered argument
/// type signatures to handler implementations, including the arity check
/// performed ahead of signature lookup.
pub mod dispatch;
/// The builtin operator and function implementations.
///
/// Contains every handler seeded into a new environment: polymorphic
/// addition, ranges, array access and fill, generator construction and
/// take, and the unary numeric functions.
pub mod builtins;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST against an environment, resolves names,
/// dispatches operators and functions on runtime types, and intercepts
/// assignment. It produces a value or a structured, recoverable error.
pub mod evaluator;
/// The value module defines the runtime data types for evaluation.
///
/// Declares the `Value` variants (number, array, generator), the closed
/// type-tag set used for dispatch signatures, and the generator state
/// machine.
pub mod value;
