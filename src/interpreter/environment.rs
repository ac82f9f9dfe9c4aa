use std::collections::HashMap;

use crate::interpreter::{
    builtins,
    dispatch::{Function, Operator},
    value::core::Value,
};

/// The mutable binding environment for one calculator session.
///
/// An environment holds three independent name tables: infix operators,
/// prefix functions, and variable bindings. It is created once per session,
/// seeded with the builtin operator and function tables, and then only ever
/// grows; assignments add or overwrite variable bindings (including the `_`
/// binding holding the most recent top-level result) and nothing is removed.
///
/// The parser reads the operator and function tables to disambiguate the
/// grammar; the evaluator reads all three tables and writes the variable
/// table. If an environment is ever shared across threads, callers must
/// synchronize a whole parse-plus-evaluate cycle externally.
pub struct Environment {
    ops:  HashMap<String, Operator>,
    fns:  HashMap<String, Function>,
    vars: HashMap<String, Value>,
}

impl Environment {
    /// Creates an environment seeded with the builtin tables.
    #[must_use]
    pub fn new() -> Self {
        Self { ops:  builtins::operators(),
               fns:  builtins::functions(),
               vars: HashMap::new(), }
    }

    /// Returns `true` if `name` is a known infix operator.
    #[must_use]
    pub fn has_operator(&self, name: &str) -> bool {
        self.ops.contains_key(name)
    }

    /// Looks up an operator by name.
    #[must_use]
    pub fn operator(&self, name: &str) -> Option<&Operator> {
        self.ops.get(name)
    }

    /// Returns `true` if `name` is a known prefix function.
    #[must_use]
    pub fn has_function(&self, name: &str) -> bool {
        self.fns.contains_key(name)
    }

    /// Looks up a function by name.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&Function> {
        self.fns.get(name)
    }

    /// Returns the arity of the named function, if it exists. This is the
    /// query the parser uses to decide how many argument expressions a
    /// prefix application consumes.
    #[must_use]
    pub fn function_arity(&self, name: &str) -> Option<usize> {
        self.fns.get(name).map(Function::argc)
    }

    /// Returns `true` if `name` has a variable binding.
    #[must_use]
    pub fn has_variable(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Looks up a variable binding by name.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    /// Adds or overwrites a variable binding.
    pub fn set_variable(&mut self, name: &str, value: Value) {
        self.vars.insert(name.to_string(), value);
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use bigdecimal::BigDecimal;

    use super::Environment;
    use crate::interpreter::value::core::Value;

    #[test]
    fn seeded_with_builtin_tables() {
        let env = Environment::new();

        for op in ["+", "*", "..", "@", "!=", "---", ":="] {
            assert!(env.has_operator(op), "missing operator {op}");
        }
        for func in ["abs", "neg", "len", "...", "...$"] {
            assert_eq!(env.function_arity(func), Some(1), "bad arity for {func}");
        }
    }

    #[test]
    fn operator_and_function_names_do_not_overlap_variables() {
        let env = Environment::new();
        assert!(!env.has_variable("+"));
        assert!(!env.has_variable("abs"));
    }

    #[test]
    fn variables_can_be_overwritten() {
        let mut env = Environment::new();
        env.set_variable("x", Value::from(BigDecimal::from(1)));
        env.set_variable("x", Value::from(BigDecimal::from(2)));

        assert_eq!(env.variable("x"), Some(&Value::from(BigDecimal::from(2))));
        assert_eq!(env.variable("y"), None);
    }
}
