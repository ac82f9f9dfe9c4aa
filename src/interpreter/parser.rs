use std::sync::{Mutex, PoisonError};

use bigdecimal::BigDecimal;

use crate::{
    ast::Expr,
    error::SyntaxError,
    interpreter::{
        environment::Environment,
        lexer::{tokenize, Token},
    },
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, SyntaxError>;

/// A recursive-descent, context-sensitive parser.
///
/// The grammar cannot be parsed from tokens alone: whether a word begins a
/// prefix application (and how many arguments it consumes) or acts as an
/// infix operator depends on the environment's operator and function tables.
/// The parser therefore receives a read-only environment with every call and
/// queries exactly two things: operator-ness and function arity.
///
/// Grammar:
///
/// ```text
/// expr  = function-application | operator-application | unit
/// unit  = group | array-literal | number | identifier
/// group = "(" expr ")"
/// ```
///
/// Infix operators are right-associative: `1 + 2 + 3` parses as
/// `1 + (2 + 3)`.
///
/// A parse call is atomic with respect to the token buffer and cursor: they
/// live behind a mutex held for the whole call, so a single parser instance
/// can be shared and has at most one parse in flight at a time.
pub struct Parser {
    state: Mutex<ParseState>,
}

#[derive(Default)]
struct ParseState {
    tokens: Vec<Token>,
    pos:    usize,
}

impl ParseState {
    fn peek(&self) -> Option<&Token> {
        self.lookahead(0)
    }

    fn lookahead(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.pos + n)
    }

    fn eat(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        self.pos += 1;
        token
    }

    fn done(&self) -> bool {
        self.pos >= self.tokens.len()
    }
}

/// Renders the token the parser stopped on, or the end of input.
fn found(token: Option<&Token>) -> String {
    token.map_or_else(|| "end of input".to_string(), ToString::to_string)
}

impl Parser {
    /// Creates a parser with an empty token buffer.
    #[must_use]
    pub fn new() -> Self {
        Self { state: Mutex::new(ParseState::default()) }
    }

    /// Parses one input line into an expression.
    ///
    /// ## Example
    /// ```
    /// use tally::interpreter::{environment::Environment, parser::Parser};
    ///
    /// let env = Environment::new();
    /// let parser = Parser::new();
    ///
    /// let expr = parser.parse(&env, "1 + 2").unwrap();
    /// assert_eq!(expr.stringify(0), "(op +\n  (num 1)\n  (num 2))");
    /// ```
    ///
    /// # Errors
    /// Returns a [`SyntaxError`] on unexpected end of input, an unexpected
    /// token (including a dangling `)`), or a malformed numeric literal.
    pub fn parse(&self, env: &Environment, input: &str) -> ParseResult<Expr> {
        let mut state = self.state
                            .lock()
                            .unwrap_or_else(PoisonError::into_inner);
        state.tokens = tokenize(input);
        state.pos = 0;

        match Self::expr(&mut state, env)? {
            Some(expr) => Ok(expr),
            None => Err(SyntaxError::UnexpectedToken { expected: "an expression".to_string(),
                                                       found:    found(state.peek()), }),
        }
    }

    /// Parses an expression, disambiguating between a prefix application, an
    /// infix operator application, and a plain unit.
    ///
    /// Returns `Ok(None)` for the empty placeholder: the next token is a `)`
    /// and belongs to the enclosing group.
    fn expr(state: &mut ParseState, env: &Environment) -> ParseResult<Option<Expr>> {
        if state.done() {
            return Err(SyntaxError::UnexpectedEndOfInput);
        }

        // A known function name starts a prefix application consuming
        // exactly as many argument expressions as its declared arity.
        let application = match state.peek() {
            Some(Token::Word(word)) => {
                env.function_arity(word).map(|argc| (word.clone(), argc))
            },
            _ => None,
        };
        if let Some((name, argc)) = application {
            state.eat();
            let mut args = Vec::with_capacity(argc);
            for _ in 0..argc {
                match Self::expr(state, env)? {
                    Some(arg) => args.push(arg),
                    None => {
                        return Err(SyntaxError::UnexpectedToken { expected:
                                                                      format!("an argument for {name}"),
                                                                  found:    found(state.peek()), });
                    },
                }
            }
            return Ok(Some(Expr::Apply { name, args }));
        }

        let Some(unit) = Self::unit(state, env)? else {
            return Ok(None);
        };

        // A known operator name after a unit makes this an infix
        // application; the whole remainder becomes the right-hand side,
        // which is what makes operators right-associative.
        let operator = match state.peek() {
            Some(Token::Word(word)) if env.has_operator(word) => Some(word.clone()),
            _ => None,
        };
        if let Some(op) = operator {
            state.eat();
            match Self::expr(state, env)? {
                Some(rhs) => {
                    return Ok(Some(Expr::BinaryOp { op,
                                                    lhs: Box::new(unit),
                                                    rhs: Box::new(rhs) }));
                },
                None => {
                    return Err(SyntaxError::UnexpectedToken { expected:
                                                                  format!("an operand for {op}"),
                                                              found:    found(state.peek()), });
                },
            }
        }

        Ok(Some(unit))
    }

    /// Parses a unit: a group, an array literal, a number, or an identifier.
    fn unit(state: &mut ParseState, env: &Environment) -> ParseResult<Option<Expr>> {
        match state.peek() {
            None => Err(SyntaxError::UnexpectedEndOfInput),
            // The closing paren belongs to the enclosing group; an empty
            // group placeholder percolates up without consuming it.
            Some(Token::RParen) => Ok(None),
            Some(Token::LParen) => Self::group(state, env).map(Some),
            Some(token) if token.is_num() => {
                if state.lookahead(1).is_some_and(Token::is_num) {
                    Self::array(state).map(Some)
                } else {
                    Self::number(state).map(|n| Some(Expr::Number(n)))
                }
            },
            Some(_) => Self::identifier(state).map(Some),
        }
    }

    /// Parses `"(" expr ")"`. The inner expression may be empty.
    fn group(state: &mut ParseState, env: &Environment) -> ParseResult<Expr> {
        match state.eat() {
            Some(Token::LParen) => {},
            other => {
                return Err(SyntaxError::UnexpectedToken { expected: "an open paren".to_string(),
                                                          found:    found(other.as_ref()), });
            },
        }

        let sub = Self::expr(state, env)?;

        match state.eat() {
            Some(Token::RParen) => Ok(Expr::Group(sub.map(Box::new))),
            other => Err(SyntaxError::UnexpectedToken { expected: "a closing paren".to_string(),
                                                        found:    found(other.as_ref()), }),
        }
    }

    /// Parses a greedy run of adjacent numeric literals into an array
    /// literal. Only called when at least two are adjacent.
    fn array(state: &mut ParseState) -> ParseResult<Expr> {
        let mut values = Vec::new();
        while state.peek().is_some_and(Token::is_num) {
            values.push(Self::number(state)?);
        }
        Ok(Expr::ArrayLiteral(values))
    }

    /// Parses a single numeric literal into a decimal value.
    fn number(state: &mut ParseState) -> ParseResult<BigDecimal> {
        match state.eat() {
            Some(Token::Num(literal)) => {
                literal.parse().map_err(|e| SyntaxError::MalformedNumber { literal,
                                                                           reason: format!("{e}") })
            },
            other => Err(SyntaxError::UnexpectedToken { expected: "a number".to_string(),
                                                        found:    found(other.as_ref()), }),
        }
    }

    /// Parses any remaining word token as an identifier. The lexer
    /// guarantees everything that is not a number or parenthesis is a word.
    fn identifier(state: &mut ParseState) -> ParseResult<Expr> {
        match state.eat() {
            Some(Token::Word(name)) => Ok(Expr::Identifier(name)),
            other => Err(SyntaxError::UnexpectedToken { expected: "an identifier".to_string(),
                                                        found:    found(other.as_ref()), }),
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}
