use bigdecimal::BigDecimal;

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` is a closed set of variants covering everything the surface
/// grammar can produce: numeric literals, identifiers, parenthesized groups,
/// infix operator applications, prefix function applications, and implicit
/// array literals (a run of adjacent numbers). Nodes are immutable once
/// built; evaluation never modifies them.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An arbitrary-precision decimal literal.
    Number(BigDecimal),
    /// A variable reference by name.
    Identifier(String),
    /// A parenthesized sub-expression. `None` is the empty group produced
    /// by `()`; it is a parse artifact and has no value of its own.
    Group(Option<Box<Expr>>),
    /// An infix operator application. Operators are right-associative, so
    /// `1 + 2 + 3` parses as `1 + (2 + 3)`.
    BinaryOp {
        /// The operator name, exactly as written (`+`, `..`, `:=`, ...).
        op:  String,
        /// Left operand.
        lhs: Box<Expr>,
        /// Right operand.
        rhs: Box<Expr>,
    },
    /// A prefix function application with a fixed, environment-declared
    /// arity, such as `abs 1` or `--- g 3` spelled as `g --- 3`.
    Apply {
        /// The function name.
        name: String,
        /// The argument expressions, exactly as many as the arity.
        args: Vec<Expr>,
    },
    /// A run of two or more adjacent numeric literals: `1 2 3`.
    ArrayLiteral(Vec<BigDecimal>),
}

impl Expr {
    /// Renders the expression as an indented s-expression.
    ///
    /// This is the debug rendering printed by the REPL's debug mode and
    /// asserted on by the parser tests. `indent` is the column at which the
    /// node starts; children are indented two further columns.
    ///
    /// ## Example
    /// ```
    /// use tally::ast::Expr;
    ///
    /// let expr = Expr::Identifier("a".to_string());
    /// assert_eq!(expr.stringify(0), "(id a)");
    /// ```
    #[must_use]
    pub fn stringify(&self, indent: usize) -> String {
        let pad = " ".repeat(indent + 2);
        match self {
            Self::Number(value) => format!("(num {})", value.normalized()),
            Self::Identifier(name) => format!("(id {name})"),
            Self::Group(None) => "(group empty)".to_string(),
            Self::Group(Some(sub)) => {
                format!("(group\n{pad}{})", sub.stringify(indent + 2))
            },
            Self::BinaryOp { op, lhs, rhs } => {
                format!("(op {op}\n{pad}{}\n{pad}{})",
                        lhs.stringify(indent + 2),
                        rhs.stringify(indent + 2))
            },
            Self::Apply { name, args } => {
                let args = args.iter()
                               .map(|arg| arg.stringify(indent + 2))
                               .collect::<Vec<_>>()
                               .join(&format!("\n{pad}"));
                format!("(app {name}\n{pad}{args})")
            },
            Self::ArrayLiteral(values) => {
                let values = values.iter()
                                   .map(|value| format!("(num {})", value.normalized()))
                                   .collect::<Vec<_>>()
                                   .join(&format!("\n{pad}"));
                format!("(array\n{pad}{values})")
            },
        }
    }
}
