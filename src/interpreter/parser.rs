use crate::{
    ast::SyntaxNode,
    error::ParseError,
    interpreter::lexer::{Token, TokenKind},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Maximum number of nested keyword and operator applications in one formula.
///
/// Evaluating, printing and dropping a tree all recurse once per level, so
/// the limit keeps every later phase within the stack.
pub const MAX_DEPTH: usize = 1_000;

/// Builds syntax trees from a token sequence.
///
/// The builder owns a single forward cursor. Parenthesis tokens are
/// transparent: they are skipped wherever a node is expected, without any
/// check that they pair up. Operator arity alone decides how many tokens each
/// node consumes.
pub struct TreeBuilder<'tok, 'src> {
    tokens:     &'tok [Token<'src>],
    position:   usize,
    /// Offset reported when the sequence runs out.
    end_offset: usize,
}

impl<'tok, 'src> TreeBuilder<'tok, 'src> {
    /// Creates a builder positioned before the first token.
    ///
    /// # Parameters
    /// - `tokens`: The token sequence of one formula.
    /// - `line_len`: Length of the source line, used as the error offset when
    ///   the sequence ends early.
    #[must_use]
    pub const fn new(tokens: &'tok [Token<'src>], line_len: usize) -> Self {
        Self { tokens,
               position: 0,
               end_offset: line_len }
    }

    /// Tokens not consumed so far.
    #[must_use]
    pub fn remaining(&self) -> &'tok [Token<'src>] {
        &self.tokens[self.position..]
    }

    /// Builds one node, recursing into its operands.
    ///
    /// Grammar, with parentheses skipped before every node:
    /// ```text
    ///     node := operator node node
    ///           | keyword node
    ///           | number
    /// ```
    ///
    /// # Errors
    /// - `UnexpectedEndOfInput` if the sequence ends before the node and all
    ///   its operands are complete.
    /// - `UnexpectedToken` if a token that cannot start a node is found.
    /// - `NestingTooDeep` if applications nest more than [`MAX_DEPTH`] levels.
    pub fn build_node(&mut self) -> ParseResult<SyntaxNode<'src>> {
        self.build_nested(0)
    }

    /// Builds one node whose parent sits `depth` applications below the root.
    fn build_nested(&mut self, depth: usize) -> ParseResult<SyntaxNode<'src>> {
        let token = self.next_non_paren()?;

        if depth == MAX_DEPTH && token.kind != TokenKind::Number {
            return Err(ParseError::NestingTooDeep { limit:  MAX_DEPTH,
                                                    offset: token.offset, });
        }

        match token.kind {
            TokenKind::Operator => {
                let left = self.build_nested(depth + 1)?;
                let right = self.build_nested(depth + 1)?;
                Ok(SyntaxNode::Binary { token,
                                        left: Box::new(left),
                                        right: Box::new(right) })
            },
            TokenKind::Keyword => {
                let operand = self.build_nested(depth + 1)?;
                Ok(SyntaxNode::Unary { token,
                                       operand: Box::new(operand) })
            },
            TokenKind::Number => Ok(SyntaxNode::Number { token }),
            TokenKind::Paren => Err(ParseError::UnexpectedToken { token:  token.text.to_string(),
                                                                  offset: token.offset, }),
        }
    }

    /// Advances the cursor past any run of parentheses and returns the first
    /// other token.
    fn next_non_paren(&mut self) -> ParseResult<Token<'src>> {
        loop {
            let Some(token) = self.tokens.get(self.position) else {
                return Err(ParseError::UnexpectedEndOfInput { offset: self.end_offset });
            };
            self.position += 1;
            if token.kind != TokenKind::Paren {
                return Ok(*token);
            }
        }
    }
}

/// Builds the syntax tree of one formula.
///
/// Tokens left over once the root node is complete are ignored.
///
/// # Parameters
/// - `tokens`: The token sequence of one formula.
/// - `line_len`: Length of the source line, for error offsets.
///
/// # Returns
/// The root node.
///
/// # Errors
/// Returns a `ParseError` if the tokens cannot supply every operand.
///
/// # Example
/// ```
/// use smtcalc::interpreter::{lexer::tokenize, parser::parse};
///
/// let line = "((+ 1 2))";
/// let tokens = tokenize(line);
/// let tree = parse(&tokens, line.len()).unwrap();
/// assert_eq!(tree.to_string(), "(+ 1 2)");
///
/// let line = "(+ 1)";
/// assert!(parse(&tokenize(line), line.len()).is_err());
/// ```
pub fn parse<'src>(tokens: &[Token<'src>], line_len: usize) -> ParseResult<SyntaxNode<'src>> {
    let mut builder = TreeBuilder::new(tokens, line_len);
    let root = builder.build_node()?;

    let trailing = builder.remaining()
                          .iter()
                          .filter(|t| t.kind != TokenKind::Paren)
                          .count();
    if trailing > 0 {
        tracing::debug!(trailing, "ignoring tokens after a complete formula");
    }

    Ok(root)
}
