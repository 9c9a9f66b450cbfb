
use crate::{
    binder::{
        bound_nodes::{BoundBinaryNodeKind, BoundNode, BoundNodeKind, BoundUnaryNodeKind},
        operators::{BoundBinaryOperatorKind, BoundUnaryOperatorKind},
    },
    text::TextSpan,
    value::Value,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    #[error("Division by zero at {0}.")]
    DivisionByZero(TextSpan),
    #[error("Arithmetic overflow in operator {operator} at {span}.")]
    Overflow { operator: String, span: TextSpan },
    #[error("The expression at {0} did not bind and cannot be evaluated.")]
    ErrorExpression(TextSpan),
    #[error("Operator {operator} cannot be applied to {operands} at {span}.")]
    InvalidOperands {
        operator: String,
        operands: String,
        span: TextSpan,
    },
}

impl RuntimeError {
    pub fn span(&self) -> TextSpan {
        match self {
            RuntimeError::DivisionByZero(span) | RuntimeError::ErrorExpression(span) => *span,
            RuntimeError::Overflow { span, .. } | RuntimeError::InvalidOperands { span, .. } => {
                *span
            }
        }
    }
}

/// Walks the bound tree depth first. Both operands of a binary expression are
/// always evaluated, left before right, so `&&` and `||` never short-circuit.
pub fn evaluate(node: &BoundNode) -> Result<Value, RuntimeError> {
    let result = evaluate_node(node);
    match &result {
        Ok(value) => log::trace!("evaluated {} to {}", node.span, value),
        Err(error) => log::debug!("evaluation failed: {}", error),
    }
    result
}

fn evaluate_node(node: &BoundNode) -> Result<Value, RuntimeError> {
    match &node.kind {
        BoundNodeKind::ErrorExpression => Err(RuntimeError::ErrorExpression(node.span)),
        BoundNodeKind::LiteralExpression(literal) => Ok(literal.value),
        BoundNodeKind::UnaryExpression(unary) => evaluate_unary(node.span, unary),
        BoundNodeKind::BinaryExpression(binary) => evaluate_binary(node.span, binary),
    }
}

fn evaluate_unary(span: TextSpan, unary: &BoundUnaryNodeKind) -> Result<Value, RuntimeError> {
    let operand = evaluate_node(&unary.operand)?;
    let kind = unary.operator.kind;
    match (kind, operand) {
        (BoundUnaryOperatorKind::ArithmeticIdentity, Value::Number(number)) => Ok(number.into()),
        (BoundUnaryOperatorKind::ArithmeticNegate, Value::Number(number)) => number
            .checked_neg()
            .map(Value::from)
            .ok_or_else(|| RuntimeError::Overflow {
                operator: kind.to_string(),
                span,
            }),
        (BoundUnaryOperatorKind::LogicalNegation, Value::Boolean(boolean)) => Ok((!boolean).into()),
        (_, operand) => Err(RuntimeError::InvalidOperands {
            operator: kind.to_string(),
            operands: operand.to_string(),
            span,
        }),
    }
}

fn evaluate_binary(span: TextSpan, binary: &BoundBinaryNodeKind) -> Result<Value, RuntimeError> {
    let lhs = evaluate_node(&binary.lhs)?;
    let rhs = evaluate_node(&binary.rhs)?;
    let kind = binary.operator.kind;
    let overflow = || RuntimeError::Overflow {
        operator: kind.to_string(),
        span,
    };
    match (lhs, kind, rhs) {
        (Value::Number(lhs), BoundBinaryOperatorKind::ArithmeticAddition, Value::Number(rhs)) => {
            lhs.checked_add(rhs).map(Value::from).ok_or_else(overflow)
        }
        (Value::Number(lhs), BoundBinaryOperatorKind::ArithmeticSubtraction, Value::Number(rhs)) => {
            lhs.checked_sub(rhs).map(Value::from).ok_or_else(overflow)
        }
        (
            Value::Number(lhs),
            BoundBinaryOperatorKind::ArithmeticMultiplication,
            Value::Number(rhs),
        ) => lhs.checked_mul(rhs).map(Value::from).ok_or_else(overflow),
        (Value::Number(_), BoundBinaryOperatorKind::ArithmeticDivision, Value::Number(0)) => {
            Err(RuntimeError::DivisionByZero(span))
        }
        (Value::Number(lhs), BoundBinaryOperatorKind::ArithmeticDivision, Value::Number(rhs)) => {
            lhs.checked_div(rhs).map(Value::from).ok_or_else(overflow)
        }
        (Value::Boolean(lhs), BoundBinaryOperatorKind::LogicalAnd, Value::Boolean(rhs)) => {
            Ok((lhs && rhs).into())
        }
        (Value::Boolean(lhs), BoundBinaryOperatorKind::LogicalOr, Value::Boolean(rhs)) => {
            Ok((lhs || rhs).into())
        }
        (lhs, BoundBinaryOperatorKind::Equals, rhs) if lhs.infer_type() == rhs.infer_type() => {
            Ok((lhs == rhs).into())
        }
        (lhs, BoundBinaryOperatorKind::NotEquals, rhs) if lhs.infer_type() == rhs.infer_type() => {
            Ok((lhs != rhs).into())
        }
        (lhs, _, rhs) => Err(RuntimeError::InvalidOperands {
            operator: kind.to_string(),
            operands: format!("{} and {}", lhs, rhs),
            span,
        }),
    }
}
