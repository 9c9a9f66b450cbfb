use crate::{text::TextSpan, value::Value};

use super::{
    operators::{BoundBinaryOperator, BoundUnaryOperator},
    typing::Type,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundNode {
    pub span: TextSpan,
    pub kind: BoundNodeKind,
    pub type_: Type,
}

impl BoundNode {
    pub fn error(span: TextSpan) -> Self {
        Self {
            span,
            kind: BoundNodeKind::ErrorExpression,
            type_: Type::Error,
        }
    }

    pub fn literal(span: TextSpan, value: Value) -> Self {
        Self {
            span,
            kind: BoundNodeKind::LiteralExpression(BoundLiteralNodeKind { value }),
            type_: value.infer_type(),
        }
    }

    pub fn unary(
        span: TextSpan,
        operator: &'static BoundUnaryOperator,
        operand: BoundNode,
    ) -> Self {
        Self {
            span,
            kind: BoundNodeKind::UnaryExpression(BoundUnaryNodeKind {
                operator,
                operand: Box::new(operand),
            }),
            type_: operator.result_type,
        }
    }

    pub fn binary(
        span: TextSpan,
        lhs: BoundNode,
        operator: &'static BoundBinaryOperator,
        rhs: BoundNode,
    ) -> Self {
        Self {
            span,
            kind: BoundNodeKind::BinaryExpression(BoundBinaryNodeKind {
                lhs: Box::new(lhs),
                operator,
                rhs: Box::new(rhs),
            }),
            type_: operator.result_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundNodeKind {
    ErrorExpression,
    LiteralExpression(BoundLiteralNodeKind),
    UnaryExpression(BoundUnaryNodeKind),
    BinaryExpression(BoundBinaryNodeKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundLiteralNodeKind {
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundUnaryNodeKind {
    pub operator: &'static BoundUnaryOperator,
    pub operand: Box<BoundNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundBinaryNodeKind {
    pub lhs: Box<BoundNode>,
    pub operator: &'static BoundBinaryOperator,
    pub rhs: Box<BoundNode>,
}
