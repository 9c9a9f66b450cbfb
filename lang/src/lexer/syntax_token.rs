
use either::Either;

use crate::{
    diagnostics::DiagnosticBag, parser::syntax_nodes::SyntaxNode, text::TextSpan, value::Value,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxToken<'a> {
    pub kind: SyntaxTokenKind,
    pub lexeme: &'a str,
    pub start: usize,
    pub value: Option<Value>,
}

impl<'a> SyntaxToken<'a> {
    pub fn number_literal(
        start: usize,
        lexeme: &'a str,
        diagnostic_bag: &mut DiagnosticBag,
    ) -> Self {
        let value = match lexeme.parse::<i64>() {
            Ok(value) => value,
            Err(_) => {
                diagnostic_bag.report_bad_number(start, lexeme);
                0
            }
        };
        Self {
            kind: SyntaxTokenKind::NumberLiteral,
            lexeme,
            start,
            value: Some(value.into()),
        }
    }

    /// Returns [`None`] if `lexeme` is not a keyword.
    pub fn keyword(start: usize, lexeme: &'a str) -> Option<Self> {
        let kind = SyntaxTokenKind::keyword(lexeme)?;
        let value = match kind {
            SyntaxTokenKind::TrueKeyword => Some(true.into()),
            SyntaxTokenKind::FalseKeyword => Some(false.into()),
            _ => None,
        };
        Some(Self {
            kind,
            lexeme,
            start,
            value,
        })
    }

    pub fn identifier(start: usize, lexeme: &'a str) -> Self {
        Self::new(SyntaxTokenKind::Identifier, start, lexeme)
    }

    /// Returns [`None`] if `lexeme` is not an operator.
    pub fn operator(start: usize, lexeme: &'a str) -> Option<Self> {
        let kind = SyntaxTokenKind::operator(lexeme)?;
        Some(Self::new(kind, start, lexeme))
    }

    pub fn whitespace(start: usize, lexeme: &'a str) -> Self {
        Self::new(SyntaxTokenKind::Whitespace, start, lexeme)
    }

    pub fn bad(start: usize, lexeme: &'a str) -> Self {
        Self::new(SyntaxTokenKind::BadToken, start, lexeme)
    }

    pub fn eoi(start: usize) -> Self {
        Self::new(SyntaxTokenKind::Eoi, start, "")
    }

    /// A token the parser made up while recovering from an error. It has no
    /// text, number literals carry the value 0.
    pub fn inserted(kind: SyntaxTokenKind, start: usize) -> Self {
        let value = match kind {
            SyntaxTokenKind::NumberLiteral => Some(Value::Number(0)),
            SyntaxTokenKind::TrueKeyword => Some(true.into()),
            SyntaxTokenKind::FalseKeyword => Some(false.into()),
            _ => None,
        };
        Self {
            kind,
            lexeme: "",
            start,
            value,
        }
    }

    fn new(kind: SyntaxTokenKind, start: usize, lexeme: &'a str) -> Self {
        Self {
            kind,
            lexeme,
            start,
            value: None,
        }
    }

    pub fn span(&self) -> TextSpan {
        TextSpan::new(self.start, self.lexeme.len())
    }

    /// Tokens are always leaves.
    pub fn children<'n>(&'n self) -> Vec<Either<&'n SyntaxToken<'a>, &'n SyntaxNode<'a>>> {
        vec![]
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, strum::IntoStaticStr, strum::EnumIter)]
pub enum SyntaxTokenKind {
    Eoi,
    BadToken,
    Whitespace,
    NumberLiteral,
    Identifier,
    LParen,
    RParen,
    Plus,
    Minus,
    Star,
    Slash,
    Bang,
    AmpersandAmpersand,
    PipePipe,
    EqualsEquals,
    BangEquals,

    // Keywords
    FalseKeyword,
    TrueKeyword,
}

impl SyntaxTokenKind {
    pub fn unary_precedence(&self) -> u32 {
        match self {
            Self::Plus | Self::Minus | Self::Bang => 5,
            _ => 0,
        }
    }

    pub fn binary_precedence(&self) -> u32 {
        match self {
            Self::Star | Self::Slash => 4,
            Self::Plus | Self::Minus => 3,
            Self::AmpersandAmpersand => 2,
            Self::PipePipe | Self::EqualsEquals | Self::BangEquals => 1,
            _ => 0,
        }
    }

    /// ```
    /// # use lang::lexer::syntax_token::SyntaxTokenKind;
    /// # use strum::IntoEnumIterator;
    ///
    /// for value in SyntaxTokenKind::iter() {
    ///     let name: &str = value.into();
    ///     assert_eq!(name.ends_with("Keyword"), value.is_keyword(), "Failed for value {value:?}");
    /// }
    /// ```
    pub fn is_keyword(&self) -> bool {
        matches!(self, Self::FalseKeyword | Self::TrueKeyword)
    }

    pub fn keyword(identifier: &str) -> Option<Self> {
        match identifier {
            "false" => Some(Self::FalseKeyword),
            "true" => Some(Self::TrueKeyword),
            _ => None,
        }
    }

    pub fn operator(lexeme: &str) -> Option<Self> {
        match lexeme {
            "+" => Some(Self::Plus),
            "-" => Some(Self::Minus),
            "*" => Some(Self::Star),
            "/" => Some(Self::Slash),
            "!" => Some(Self::Bang),
            "(" => Some(Self::LParen),
            ")" => Some(Self::RParen),
            "&&" => Some(Self::AmpersandAmpersand),
            "||" => Some(Self::PipePipe),
            "==" => Some(Self::EqualsEquals),
            "!=" => Some(Self::BangEquals),
            _ => None,
        }
    }

    /// The fixed text of operators and keywords.
    pub fn text(&self) -> Option<&'static str> {
        match self {
            Self::Plus => Some("+"),
            Self::Minus => Some("-"),
            Self::Star => Some("*"),
            Self::Slash => Some("/"),
            Self::Bang => Some("!"),
            Self::LParen => Some("("),
            Self::RParen => Some(")"),
            Self::AmpersandAmpersand => Some("&&"),
            Self::PipePipe => Some("||"),
            Self::EqualsEquals => Some("=="),
            Self::BangEquals => Some("!="),
            Self::FalseKeyword => Some("false"),
            Self::TrueKeyword => Some("true"),
            Self::Eoi
            | Self::BadToken
            | Self::Whitespace
            | Self::NumberLiteral
            | Self::Identifier => None,
        }
    }

    pub fn name(&self) -> &'static str {
        (*self).into()
    }
}

impl std::fmt::Debug for SyntaxTokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyntaxTokenKind::Eoi => write!(f, "End-of-Input-Token"),
            SyntaxTokenKind::BadToken => write!(f, "Bad-Token"),
            SyntaxTokenKind::Whitespace => write!(f, "Whitespace-Token"),
            SyntaxTokenKind::NumberLiteral => write!(f, "Number-Literal-Token"),
            SyntaxTokenKind::Identifier => write!(f, "Identifier"),
            SyntaxTokenKind::LParen => write!(f, "Open-Parenthesis-Token"),
            SyntaxTokenKind::RParen => write!(f, "Close-Parenthesis-Token"),
            SyntaxTokenKind::Plus => write!(f, "PlusToken"),
            SyntaxTokenKind::Minus => write!(f, "MinusToken"),
            SyntaxTokenKind::Star => write!(f, "StarToken"),
            SyntaxTokenKind::Slash => write!(f, "SlashToken"),
            SyntaxTokenKind::Bang => write!(f, "BangToken"),
            SyntaxTokenKind::AmpersandAmpersand => write!(f, "Ampersand-Ampersand-Token"),
            SyntaxTokenKind::PipePipe => write!(f, "Pipe-Pipe-Token"),
            SyntaxTokenKind::EqualsEquals => write!(f, "Equals-Equals-Token"),
            SyntaxTokenKind::BangEquals => write!(f, "Bang-Equals-Token"),
            SyntaxTokenKind::FalseKeyword => write!(f, "false"),
            SyntaxTokenKind::TrueKeyword => write!(f, "true"),
        }
    }
}
