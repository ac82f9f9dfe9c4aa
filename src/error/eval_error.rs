#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression.
///
/// Every variant is recoverable: the evaluator returns the error to its
/// caller and the session continues with the environment unchanged except
/// for mutations that completed before the failure.
pub enum EvalError {
    /// Tried to read a variable that has no binding.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// An infix expression named an operator the environment does not know.
    UndefinedOperator {
        /// The name of the operator.
        name: String,
    },
    /// A prefix application named a function the environment does not know.
    UndefinedFunction {
        /// The name of the function.
        name: String,
    },
    /// A function received the wrong number of arguments.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// The function's declared arity.
        expected: usize,
        /// How many arguments were actually passed.
        found:    usize,
    },
    /// An operator has no implementation for the argument type signature.
    NoOperatorImpl {
        /// The name of the operator.
        operator:  String,
        /// The unsupported signature, tags joined with `/`.
        signature: String,
    },
    /// A function has no implementation for the argument type signature.
    NoFunctionImpl {
        /// The name of the function.
        function:  String,
        /// The unsupported signature, tags joined with `/`.
        signature: String,
    },
    /// An elementwise operation received arrays of different lengths.
    LengthMismatch {
        /// Length of the left-hand array.
        left:  usize,
        /// Length of the right-hand array.
        right: usize,
    },
    /// Tried to access an array element outside its bounds.
    IndexOutOfBounds {
        /// The length of the array.
        len:   usize,
        /// The index that was requested.
        index: i64,
    },
    /// The left side of an assignment was not a plain identifier.
    InvalidAssignment,
    /// A generator ran out of values before a take completed.
    GeneratorExhausted {
        /// How many values were produced before exhaustion.
        taken:     usize,
        /// How many values were requested.
        requested: usize,
    },
    /// An empty group `()` reached evaluation. It is a parse artifact with
    /// no value of its own.
    EmptyGroup,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name }
            | Self::UndefinedOperator { name }
            | Self::UndefinedFunction { name } => write!(f, "{name} is not defined"),

            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found, } => {
                write!(f, "{name} expects {expected} argument(s) but got {found}")
            },

            Self::NoOperatorImpl { operator, signature } => {
                write!(f, "operator {operator} does not implement {signature}")
            },

            Self::NoFunctionImpl { function, signature } => {
                write!(f, "function {function} does not implement {signature}")
            },

            Self::LengthMismatch { left, right } => {
                write!(f,
                       "cannot operate on arrays of different lengths: {left} vs {right}")
            },

            Self::IndexOutOfBounds { len, index } => {
                write!(f,
                       "index {index} is out of bounds for an array of length {len}")
            },

            Self::InvalidAssignment => write!(f, "invalid identifier"),

            Self::GeneratorExhausted { taken, requested } => {
                write!(f,
                       "generator exhausted after {taken} of {requested} value(s)")
            },

            Self::EmptyGroup => write!(f, "empty group has no value"),
        }
    }
}

impl std::error::Error for EvalError {}
