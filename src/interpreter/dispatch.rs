use std::collections::HashMap;

use crate::{
    error::EvalError,
    interpreter::value::core::{TypeTag, Value},
};

/// Result type used by evaluation and dispatch.
pub type EvalResult<T> = Result<T, EvalError>;

/// Handler for a binary operator implementation.
pub type OpHandler = fn(&Value, &Value) -> EvalResult<Value>;

/// Handler for a function implementation. Receives exactly as many values
/// as the function's arity once dispatch has validated the count.
pub type FnHandler = fn(&[Value]) -> EvalResult<Value>;

/// A binary operator with per-signature implementations.
///
/// Signatures are ordered pairs of [`TypeTag`]s. An operator that treats an
/// argument order as interchangeable (array plus scalar, for example)
/// registers both orders against one handler that branches on the runtime
/// order internally; strictly positional operators register only the orders
/// they support.
pub struct Operator {
    impls: HashMap<(TypeTag, TypeTag), OpHandler>,
}

impl Operator {
    /// Creates an operator with no implementations. Dispatching it always
    /// fails; this is how reserved operators like `:=` are declared so the
    /// parser recognizes them while the evaluator intercepts them before
    /// dispatch.
    #[must_use]
    pub fn new() -> Self {
        Self { impls: HashMap::new() }
    }

    /// Registers the handler for an ordered pair of argument types.
    #[must_use]
    pub fn with(mut self, lhs: TypeTag, rhs: TypeTag, handler: OpHandler) -> Self {
        self.impls.insert((lhs, rhs), handler);
        self
    }

    /// Resolves and invokes the implementation for the operands' runtime
    /// types.
    ///
    /// # Errors
    /// Returns [`EvalError::NoOperatorImpl`] naming the operator and the
    /// unsupported signature when no handler is registered for it.
    pub fn dispatch(&self, name: &str, lhs: &Value, rhs: &Value) -> EvalResult<Value> {
        let signature = (lhs.type_tag(), rhs.type_tag());
        match self.impls.get(&signature) {
            Some(handler) => handler(lhs, rhs),
            None => Err(EvalError::NoOperatorImpl { operator:  name.to_string(),
                                                    signature: format!("{}/{}",
                                                                       signature.0,
                                                                       signature.1), }),
        }
    }
}

impl Default for Operator {
    fn default() -> Self {
        Self::new()
    }
}

/// A prefix function with a fixed arity and per-signature implementations.
///
/// Signatures are ordered lists of exactly `argc` [`TypeTag`]s.
pub struct Function {
    argc:  usize,
    impls: HashMap<Vec<TypeTag>, FnHandler>,
}

impl Function {
    /// Creates a function of the given arity with no implementations.
    #[must_use]
    pub fn new(argc: usize) -> Self {
        Self { argc,
               impls: HashMap::new() }
    }

    /// Registers the handler for an ordered argument type signature.
    #[must_use]
    pub fn with(mut self, signature: &[TypeTag], handler: FnHandler) -> Self {
        self.impls.insert(signature.to_vec(), handler);
        self
    }

    /// Returns the function's declared arity. The parser uses this to decide
    /// how many argument expressions to consume.
    #[must_use]
    pub const fn argc(&self) -> usize {
        self.argc
    }

    /// Resolves and invokes the implementation for the arguments' runtime
    /// types.
    ///
    /// # Errors
    /// - [`EvalError::ArgumentCountMismatch`] if the argument count differs
    ///   from the arity. This is checked before any signature lookup.
    /// - [`EvalError::NoFunctionImpl`] naming the function and signature
    ///   when no handler is registered for the argument types.
    pub fn dispatch(&self, name: &str, args: &[Value]) -> EvalResult<Value> {
        if args.len() != self.argc {
            return Err(EvalError::ArgumentCountMismatch { name:     name.to_string(),
                                                          expected: self.argc,
                                                          found:    args.len(), });
        }

        let signature: Vec<TypeTag> = args.iter().map(Value::type_tag).collect();
        match self.impls.get(&signature) {
            Some(handler) => handler(args),
            None => {
                let signature = signature.iter()
                                         .map(ToString::to_string)
                                         .collect::<Vec<_>>()
                                         .join("/");
                Err(EvalError::NoFunctionImpl { function: name.to_string(),
                                                signature })
            },
        }
    }
}
