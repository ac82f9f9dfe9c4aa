use logos::Logos;

/// Represents a lexical token in the source input.
///
/// The token set is deliberately tiny: parentheses, numeric literals, and
/// words. Everything that is not whitespace or a parenthesis is consumed as a
/// maximal run of characters, so operator names like `+`, `...$`, or `---`
/// are ordinary words, and a literal that starts with a digit keeps any
/// trailing non-digit characters (`1+2` without spaces is a single numeric
/// token; the parser reports it as malformed).
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Numeric literal tokens: a digit followed by a maximal run of
    /// characters that are neither whitespace nor `)`. The raw text is kept
    /// so the parser can surface malformed literals in its own error.
    #[regex(r"[0-9][^ \t\r\n\f)]*", |lex| lex.slice().to_string())]
    Num(String),
    /// Word tokens; identifiers, operator names, and anything else that is
    /// not a number or parenthesis, such as `abs`, `+`, or `jfkdlsa$%%#`.
    #[regex(r"[^ \t\r\n\f0-9()][^ \t\r\n\f)]*", |lex| lex.slice().to_string())]
    Word(String),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,

    /// Whitespace between tokens.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns `true` if this token is a numeric literal.
    #[must_use]
    pub const fn is_num(&self) -> bool {
        matches!(self, Self::Num(_))
    }

    /// Returns the textual content of the token, as written in the source.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Num(s) | Self::Word(s) => s,
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Ignored => "",
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Num(s) => write!(f, "(token-num `{s}`)"),
            Self::Word(s) => write!(f, "(token-word `{s}`)"),
            Self::LParen => write!(f, "(token-word `(`)"),
            Self::RParen => write!(f, "(token-word `)`)"),
            Self::Ignored => write!(f, "(token-unknown)"),
        }
    }
}

/// Tokenizes an input line into a fully materialized token sequence.
///
/// Tokenization is total: it never fails. Any input the lexer does not
/// recognize is preserved as a `Word` token so the parser can report it in
/// context instead of the lexer erroring out.
///
/// ## Example
/// ```
/// use tally::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("1 + 2");
/// assert_eq!(tokens,
///            vec![Token::Num("1".to_string()),
///                 Token::Word("+".to_string()),
///                 Token::Num("2".to_string())]);
/// ```
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut lexer = Token::lexer(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push(token),
            Err(()) => tokens.push(Token::Word(lexer.slice().to_string())),
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::{tokenize, Token};

    fn num(s: &str) -> Token {
        Token::Num(s.to_string())
    }

    fn word(s: &str) -> Token {
        Token::Word(s.to_string())
    }

    #[test]
    fn empty_input_produces_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t ").is_empty());
    }

    #[test]
    fn parens_are_single_character_tokens() {
        assert_eq!(tokenize("(()"), vec![Token::LParen, Token::LParen, Token::RParen]);
    }

    #[test]
    fn numbers_consume_a_maximal_run() {
        assert_eq!(tokenize("42"), vec![num("42")]);
        assert_eq!(tokenize("1+2"), vec![num("1+2")]);
        assert_eq!(tokenize("3.14)"), vec![num("3.14"), Token::RParen]);
    }

    #[test]
    fn words_consume_a_maximal_run() {
        assert_eq!(tokenize("abs"), vec![word("abs")]);
        assert_eq!(tokenize("jfkdlsa$%%@$@#"), vec![word("jfkdlsa$%%@$@#")]);
        assert_eq!(tokenize("...$ 5"), vec![word("...$"), num("5")]);
    }

    #[test]
    fn open_paren_may_appear_inside_a_word() {
        // Only a token-initial `(` lexes as a parenthesis.
        assert_eq!(tokenize("ab(c"), vec![word("ab(c")]);
        assert_eq!(tokenize("(ab"), vec![Token::LParen, word("ab")]);
    }

    #[test]
    fn mixed_expression() {
        assert_eq!(tokenize("x := (1 + 2)"),
                   vec![word("x"),
                        word(":="),
                        Token::LParen,
                        num("1"),
                        word("+"),
                        num("2"),
                        Token::RParen]);
    }
}
