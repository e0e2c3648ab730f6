use logos::Logos;

/// The lexical category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A run of letters, such as `simplify`. Keywords are unary operators.
    Keyword,
    /// A run of digits, optionally preceded by a `-` that is not in operator
    /// position, such as `42` or `-7`.
    Number,
    /// One of the binary operators `+`, `-` or `*`.
    Operator,
    /// `(` or `)`.
    Paren,
}

/// Represents a lexical token of one formula.
///
/// Tokens borrow their text from the line they were produced from and are
/// never modified after tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    /// The lexical category.
    pub kind:   TokenKind,
    /// The exact text matched.
    pub text:   &'src str,
    /// Byte offset of the first character within the line.
    pub offset: usize,
}

impl<'src> Token<'src> {
    /// Creates a token of the given kind.
    #[must_use]
    pub const fn new(kind: TokenKind, text: &'src str, offset: usize) -> Self {
        Self { kind,
               text,
               offset }
    }
}

/// Raw lexemes produced by the scanner before the `-` lookback rule is
/// applied.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Lexeme {
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `+`
    #[token("+")]
    Plus,
    /// `*`
    #[token("*")]
    Star,
    /// `-`, either an operator or the sign of a literal.
    #[token("-")]
    Minus,
    /// Digit runs such as `42`.
    #[regex(r"[0-9]+")]
    Digits,
    /// Letter runs such as `simplify`.
    #[regex(r"[a-zA-Z]+")]
    Letters,
    /// Spaces, tabs, feeds and line breaks.
    #[regex(r"[ \t\f\r\n]+", logos::skip)]
    Ignored,
}

/// Converts one line of text into its token sequence.
///
/// Whitespace is skipped and any character the scanner does not recognise is
/// dropped silently. A `-` is an operator only when it is the first character
/// of the line or directly follows `(`; anywhere else it starts a numeric
/// literal and absorbs the digit run that immediately follows it.
///
/// # Parameters
/// - `line`: The raw text of one formula.
///
/// # Returns
/// The tokens in input order. A blank line yields an empty vector.
///
/// # Example
/// ```
/// use smtcalc::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("(- 3 -4)");
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Paren,
///             TokenKind::Operator,
///             TokenKind::Number,
///             TokenKind::Number,
///             TokenKind::Paren]);
/// assert_eq!(tokens[3].text, "-4");
/// ```
#[must_use]
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut lexemes = Lexeme::lexer(line).spanned()
                                         .filter_map(|(lexeme, span)| lexeme.ok().map(|l| (l, span)))
                                         .peekable();

    while let Some((lexeme, span)) = lexemes.next() {
        let kind = match lexeme {
            Lexeme::LParen | Lexeme::RParen => TokenKind::Paren,
            Lexeme::Plus | Lexeme::Star => TokenKind::Operator,
            Lexeme::Minus if is_operator_position(line, span.start) => TokenKind::Operator,
            Lexeme::Minus => {
                let end = lexemes.next_if(|(next, digits)| {
                                     *next == Lexeme::Digits && digits.start == span.end
                                 })
                                 .map_or(span.end, |(_, digits)| digits.end);
                tokens.push(Token::new(TokenKind::Number, &line[span.start..end], span.start));
                continue;
            },
            Lexeme::Digits => TokenKind::Number,
            Lexeme::Letters => TokenKind::Keyword,
            Lexeme::Ignored => continue,
        };
        tokens.push(Token::new(kind, &line[span.start..span.end], span.start));
    }

    tokens
}

/// Returns whether a `-` at byte `start` is the subtraction operator.
fn is_operator_position(line: &str, start: usize) -> bool {
    start == 0 || line[..start].ends_with('(')
}
