use crate::interpreter::lexer::Token;

/// A node of the binary-shaped syntax tree built for one formula.
///
/// Every node is labeled with the token it was built from. Leaves are numeric
/// literals, keyword applications have exactly one operand and operator
/// applications have exactly two. Each child is owned by its parent, so the
/// tree has no sharing and no cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxNode<'src> {
    /// A numeric literal such as `42` or `-7`.
    Number {
        /// The literal token.
        token: Token<'src>,
    },
    /// A keyword applied to one operand, such as `(simplify x)`.
    Unary {
        /// The keyword token.
        token:   Token<'src>,
        /// The single operand.
        operand: Box<Self>,
    },
    /// An operator applied to two operands, such as `(+ x y)`.
    Binary {
        /// The operator token.
        token: Token<'src>,
        /// First operand; the minuend for `-`.
        left:  Box<Self>,
        /// Second operand.
        right: Box<Self>,
    },
}

impl<'src> SyntaxNode<'src> {
    /// The token labeling this node.
    #[must_use]
    pub const fn token(&self) -> &Token<'src> {
        match self {
            Self::Number { token } | Self::Unary { token, .. } | Self::Binary { token, .. } => token,
        }
    }

    /// The left child: the operand of a unary node or the first operand of a
    /// binary node.
    #[must_use]
    pub fn left(&self) -> Option<&Self> {
        match self {
            Self::Number { .. } => None,
            Self::Unary { operand, .. } => Some(operand),
            Self::Binary { left, .. } => Some(left),
        }
    }

    /// The right child, present only on binary nodes.
    #[must_use]
    pub fn right(&self) -> Option<&Self> {
        match self {
            Self::Binary { right, .. } => Some(right),
            _ => None,
        }
    }

    /// Number of nodes in the tree rooted here.
    #[must_use]
    pub fn size(&self) -> usize {
        1 + self.left().map_or(0, Self::size) + self.right().map_or(0, Self::size)
    }

    /// Length of the longest root-to-leaf path, counting nodes.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.left()
                .map_or(0, Self::depth)
                .max(self.right().map_or(0, Self::depth))
    }
}

impl std::fmt::Display for SyntaxNode<'_> {
    /// Renders the tree back into fully parenthesized prefix notation.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number { token } => write!(f, "{}", token.text),
            Self::Unary { token, operand } => write!(f, "({} {operand})", token.text),
            Self::Binary { token, left, right } => {
                write!(f, "({} {left} {right})", token.text)
            },
        }
    }
}
