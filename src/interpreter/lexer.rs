use logos::Logos;

/// Represents a lexical token in Cixac source text.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Two-character operators are single tokens, keywords are distinguished
/// from identifiers, and literal payloads are parsed by lexer callbacks.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Int(i64),
    /// Float literal tokens, such as `3.14`, `.5` or `5.`.
    #[regex(r"[0-9]+\.[0-9]*", parse_float)]
    #[regex(r"\.[0-9]+", parse_float)]
    Float(f64),
    /// String literal tokens. The inner bytes are taken verbatim; no escape
    /// processing is performed. An unterminated literal runs to the end of
    /// the input.
    #[regex(r#""[^"]*""#, closed_string)]
    #[regex(r#""[^"]*"#, open_string)]
    Str(String),
    /// Identifier tokens such as `x` or `newAdder`.
    ///
    /// The second pattern covers digit-led runs that contain letters, such
    /// as `1.get` or `123abc`. They lex as a single identifier so a method
    /// call on a bare number reports `Identifier not found: 1.get`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    #[regex(r"[0-9][0-9A-Za-z_.]*[A-Za-z_][0-9A-Za-z_.]*", |lex| lex.slice().to_string())]
    Ident(String),

    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `const`
    #[token("const")]
    Const,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `null`
    #[token("null")]
    Null,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// `for`
    #[token("for")]
    For,
    /// `in`
    #[token("in")]
    In,
    /// `while`
    #[token("while")]
    While,
    /// `break`
    #[token("break")]
    Break,
    /// `continue`
    #[token("continue")]
    Continue,

    /// `=`
    #[token("=")]
    Assign,
    /// `+=`
    #[token("+=")]
    AddAssign,
    /// `-=`
    #[token("-=")]
    SubAssign,
    /// `*=`
    #[token("*=")]
    MulAssign,
    /// `/=`
    #[token("/=")]
    DivAssign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `++`
    #[token("++")]
    Increment,
    /// `--`
    #[token("--")]
    Decrement,
    /// `&&`
    #[token("&&")]
    And,
    /// `||`
    #[token("||")]
    Or,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `==`
    #[token("==")]
    Equal,
    /// `!=`
    #[token("!=")]
    NotEqual,
    /// `.`
    #[token(".")]
    Period,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,

    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip)]
    Comment,
    /// ```text
    /// /* Multi-line comments (non-nesting). */
    /// ```
    #[regex(r"/\*([^*]|\*[^/])*\*/", |lex| {
        let comment      = lex.slice();
        let newlines     = comment.chars().filter(|&c| c == '\n').count();
        lex.extras.line += newlines;
        logos::Skip
    })]
    BlockComment,
    /// Newlines increment the line counter and are otherwise skipped.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Whitespace,

    /// A character (or out-of-range numeric literal) the lexer cannot
    /// accept. Never produced by a pattern; [`tokenize`] substitutes it for
    /// lexer errors so the token stream always covers the input.
    Illegal(String),
    /// End of input. Appended by [`tokenize`].
    Eof,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for parser diagnostics. Incremented as
/// newlines are processed, including those inside strings and block
/// comments.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses an integer literal from the current token slice.
///
/// Returns `None` when the digits do not fit an `i64`; the failed token
/// surfaces as [`Token::Illegal`] through [`tokenize`].
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Parses a float literal from the current token slice.
///
/// `5.` and `.5` are valid inputs and parse as `5.0` and `0.5`.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Extracts the contents of a terminated string literal.
fn closed_string(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    lex.extras.line += slice.chars().filter(|&c| c == '\n').count();
    slice[1..slice.len() - 1].to_string()
}

/// Extracts the contents of a string literal that runs to end of input.
fn open_string(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    lex.extras.line += slice.chars().filter(|&c| c == '\n').count();
    slice[1..].to_string()
}

/// Tokenizes a complete source string.
///
/// Produces the token stream the parser consumes: every token paired with
/// the line it starts on, lexer errors mapped to [`Token::Illegal`], and a
/// trailing [`Token::Eof`]. The lexer never halts on bad input.
///
/// # Parameters
/// - `source`: UTF-8 source text.
///
/// # Returns
/// The tokens of `source` in order, each with its line number.
///
/// # Example
/// ```
/// use cixac::interpreter::lexer::{tokenize, Token};
///
/// let tokens = tokenize("let x = 5.;");
/// let kinds: Vec<&Token> = tokens.iter().map(|(token, _)| token).collect();
///
/// assert_eq!(kinds[0], &Token::Let);
/// assert_eq!(kinds[1], &Token::Ident("x".to_string()));
/// assert_eq!(kinds[2], &Token::Assign);
/// assert_eq!(kinds[3], &Token::Float(5.0));
/// assert_eq!(kinds[4], &Token::Semicolon);
/// assert_eq!(kinds[5], &Token::Eof);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<(Token, usize)> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        let line = lexer.extras.line;
        match token {
            Ok(token) => tokens.push((token, line)),
            Err(()) => tokens.push((Token::Illegal(lexer.slice().to_string()), line)),
        }
    }

    tokens.push((Token::Eof, lexer.extras.line));
    tokens
}

impl std::fmt::Display for Token {
    /// Writes the token's type name, matching the names used in parser
    /// error messages (`IDENT`, `INT`, `=`, `EOF`, …).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Int(_) => "INT",
            Self::Float(_) => "FLOAT",
            Self::Str(_) => "STRING",
            Self::Ident(_) => "IDENT",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::Const => "CONST",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Null => "NULL",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
            Self::For => "FOR",
            Self::In => "IN",
            Self::While => "WHILE",
            Self::Break => "BREAK",
            Self::Continue => "CONTINUE",
            Self::Assign => "=",
            Self::AddAssign => "+=",
            Self::SubAssign => "-=",
            Self::MulAssign => "*=",
            Self::DivAssign => "/=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Increment => "++",
            Self::Decrement => "--",
            Self::And => "&&",
            Self::Or => "||",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Period => ".",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Comment | Self::BlockComment => "COMMENT",
            Self::NewLine | Self::Whitespace => "WHITESPACE",
            Self::Illegal(_) => "ILLEGAL",
            Self::Eof => "EOF",
        };
        write!(f, "{name}")
    }
}
