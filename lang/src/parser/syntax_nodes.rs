use either::Either;

use crate::{lexer::syntax_token::SyntaxToken, text::TextSpan, value::Value};

/// A child of a syntax node, either a token or another node.
pub type SyntaxElement<'n, 'a> = Either<&'n SyntaxToken<'a>, &'n SyntaxNode<'a>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode<'a> {
    pub kind: SyntaxNodeKind<'a>,
    pub span: TextSpan,
    /// The parser made this node up while recovering from an error.
    pub is_inserted: bool,
}

impl<'a> SyntaxNode<'a> {
    pub fn binary(
        lhs: SyntaxNode<'a>,
        operator_token: SyntaxToken<'a>,
        rhs: SyntaxNode<'a>,
    ) -> Self {
        let span = TextSpan::bounds(lhs.span, rhs.span);
        Self {
            kind: SyntaxNodeKind::Binary(BinaryNodeKind {
                lhs: Box::new(lhs),
                operator_token,
                rhs: Box::new(rhs),
            }),
            span,
            is_inserted: false,
        }
    }

    /// A literal `0` standing in for a missing expression.
    pub fn error(token: SyntaxToken<'a>) -> Self {
        let mut result = Self::literal(token);
        result.is_inserted = true;
        result
    }

    /// Tokens without a value are read as the number `0`, which only happens
    /// for tokens inserted during error recovery.
    pub fn literal(token: SyntaxToken<'a>) -> Self {
        let value = token.value.unwrap_or(Value::Number(0));
        Self {
            span: token.span(),
            kind: SyntaxNodeKind::Literal(LiteralNodeKind { token, value }),
            is_inserted: false,
        }
    }

    pub fn unary(operator_token: SyntaxToken<'a>, operand: SyntaxNode<'a>) -> Self {
        let span = TextSpan::bounds(operator_token.span(), operand.span());
        Self {
            kind: SyntaxNodeKind::Unary(UnaryNodeKind {
                operator_token,
                operand: Box::new(operand),
            }),
            span,
            is_inserted: false,
        }
    }

    pub fn parenthesized(
        lparen: SyntaxToken<'a>,
        expression: SyntaxNode<'a>,
        rparen: SyntaxToken<'a>,
    ) -> Self {
        let span = TextSpan::bounds(lparen.span(), rparen.span());
        Self {
            kind: SyntaxNodeKind::Parenthesized(ParenthesizedNodeKind {
                lparen,
                expression: Box::new(expression),
                rparen,
            }),
            span,
            is_inserted: false,
        }
    }

    pub fn span(&self) -> TextSpan {
        self.span
    }

    /// The direct children in source order.
    pub fn children<'n>(&'n self) -> Vec<SyntaxElement<'n, 'a>> {
        match &self.kind {
            SyntaxNodeKind::Literal(literal) => vec![Either::Left(&literal.token)],
            SyntaxNodeKind::Unary(unary) => vec![
                Either::Left(&unary.operator_token),
                Either::Right(&*unary.operand),
            ],
            SyntaxNodeKind::Binary(binary) => vec![
                Either::Right(&*binary.lhs),
                Either::Left(&binary.operator_token),
                Either::Right(&*binary.rhs),
            ],
            SyntaxNodeKind::Parenthesized(parenthesized) => vec![
                Either::Left(&parenthesized.lparen),
                Either::Right(&*parenthesized.expression),
                Either::Left(&parenthesized.rparen),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxNodeKind<'a> {
    Literal(LiteralNodeKind<'a>),
    Unary(UnaryNodeKind<'a>),
    Binary(BinaryNodeKind<'a>),
    Parenthesized(ParenthesizedNodeKind<'a>),
}

impl SyntaxNodeKind<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            SyntaxNodeKind::Literal(_) => "LiteralExpression",
            SyntaxNodeKind::Unary(_) => "UnaryExpression",
            SyntaxNodeKind::Binary(_) => "BinaryExpression",
            SyntaxNodeKind::Parenthesized(_) => "ParenthesizedExpression",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralNodeKind<'a> {
    pub token: SyntaxToken<'a>,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnaryNodeKind<'a> {
    pub operator_token: SyntaxToken<'a>,
    pub operand: Box<SyntaxNode<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryNodeKind<'a> {
    pub lhs: Box<SyntaxNode<'a>>,
    pub operator_token: SyntaxToken<'a>,
    pub rhs: Box<SyntaxNode<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParenthesizedNodeKind<'a> {
    pub lparen: SyntaxToken<'a>,
    pub expression: Box<SyntaxNode<'a>>,
    pub rparen: SyntaxToken<'a>,
}
