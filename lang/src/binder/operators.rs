use std::fmt;

use crate::lexer::syntax_token::SyntaxTokenKind;

use super::typing::Type;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundUnaryOperatorKind {
    ArithmeticIdentity,
    ArithmeticNegate,
    LogicalNegation,
}

impl fmt::Display for BoundUnaryOperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                BoundUnaryOperatorKind::ArithmeticIdentity => "+",
                BoundUnaryOperatorKind::ArithmeticNegate => "-",
                BoundUnaryOperatorKind::LogicalNegation => "!",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundBinaryOperatorKind {
    ArithmeticAddition,
    ArithmeticSubtraction,
    ArithmeticMultiplication,
    ArithmeticDivision,
    LogicalAnd,
    LogicalOr,
    Equals,
    NotEquals,
}

impl fmt::Display for BoundBinaryOperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                BoundBinaryOperatorKind::ArithmeticAddition => "+",
                BoundBinaryOperatorKind::ArithmeticSubtraction => "-",
                BoundBinaryOperatorKind::ArithmeticMultiplication => "*",
                BoundBinaryOperatorKind::ArithmeticDivision => "/",
                BoundBinaryOperatorKind::LogicalAnd => "&&",
                BoundBinaryOperatorKind::LogicalOr => "||",
                BoundBinaryOperatorKind::Equals => "==",
                BoundBinaryOperatorKind::NotEquals => "!=",
            }
        )
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct BoundUnaryOperator {
    pub syntax_kind: SyntaxTokenKind,
    pub kind: BoundUnaryOperatorKind,
    pub operand_type: Type,
    pub result_type: Type,
}

impl BoundUnaryOperator {
    const fn same_type(syntax_kind: SyntaxTokenKind, kind: BoundUnaryOperatorKind, type_: Type) -> Self {
        Self {
            syntax_kind,
            kind,
            operand_type: type_,
            result_type: type_,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct BoundBinaryOperator {
    pub syntax_kind: SyntaxTokenKind,
    pub kind: BoundBinaryOperatorKind,
    pub lhs_type: Type,
    pub rhs_type: Type,
    pub result_type: Type,
}

impl BoundBinaryOperator {
    const fn same_output(syntax_kind: SyntaxTokenKind, kind: BoundBinaryOperatorKind, type_: Type) -> Self {
        Self::same_input(syntax_kind, kind, type_, type_)
    }

    const fn same_input(
        syntax_kind: SyntaxTokenKind,
        kind: BoundBinaryOperatorKind,
        input: Type,
        result_type: Type,
    ) -> Self {
        Self {
            syntax_kind,
            kind,
            lhs_type: input,
            rhs_type: input,
            result_type,
        }
    }
}

static UNARY_OPERATORS: &[BoundUnaryOperator] = &[
    BoundUnaryOperator::same_type(SyntaxTokenKind::Plus, BoundUnaryOperatorKind::ArithmeticIdentity, Type::Number),
    BoundUnaryOperator::same_type(SyntaxTokenKind::Minus, BoundUnaryOperatorKind::ArithmeticNegate, Type::Number),
    BoundUnaryOperator::same_type(SyntaxTokenKind::Bang, BoundUnaryOperatorKind::LogicalNegation, Type::Boolean),
];

static BINARY_OPERATORS: &[BoundBinaryOperator] = &[
    BoundBinaryOperator::same_output(SyntaxTokenKind::Plus, BoundBinaryOperatorKind::ArithmeticAddition, Type::Number),
    BoundBinaryOperator::same_output(SyntaxTokenKind::Minus, BoundBinaryOperatorKind::ArithmeticSubtraction, Type::Number),
    BoundBinaryOperator::same_output(SyntaxTokenKind::Star, BoundBinaryOperatorKind::ArithmeticMultiplication, Type::Number),
    BoundBinaryOperator::same_output(SyntaxTokenKind::Slash, BoundBinaryOperatorKind::ArithmeticDivision, Type::Number),
    BoundBinaryOperator::same_output(SyntaxTokenKind::AmpersandAmpersand, BoundBinaryOperatorKind::LogicalAnd, Type::Boolean),
    BoundBinaryOperator::same_output(SyntaxTokenKind::PipePipe, BoundBinaryOperatorKind::LogicalOr, Type::Boolean),
    BoundBinaryOperator::same_input(SyntaxTokenKind::EqualsEquals, BoundBinaryOperatorKind::Equals, Type::Number, Type::Boolean),
    BoundBinaryOperator::same_input(SyntaxTokenKind::BangEquals, BoundBinaryOperatorKind::NotEquals, Type::Number, Type::Boolean),
    BoundBinaryOperator::same_output(SyntaxTokenKind::EqualsEquals, BoundBinaryOperatorKind::Equals, Type::Boolean),
    BoundBinaryOperator::same_output(SyntaxTokenKind::BangEquals, BoundBinaryOperatorKind::NotEquals, Type::Boolean),
];

pub fn look_up_unary_operator(
    syntax_kind: SyntaxTokenKind,
    operand_type: Type,
) -> Option<&'static BoundUnaryOperator> {
    UNARY_OPERATORS
        .iter()
        .find(|op| op.syntax_kind == syntax_kind && op.operand_type == operand_type)
}

pub fn look_up_binary_operator(
    syntax_kind: SyntaxTokenKind,
    lhs_type: Type,
    rhs_type: Type,
) -> Option<&'static BoundBinaryOperator> {
    BINARY_OPERATORS.iter().find(|op| {
        op.syntax_kind == syntax_kind && op.lhs_type == lhs_type && op.rhs_type == rhs_type
    })
}
