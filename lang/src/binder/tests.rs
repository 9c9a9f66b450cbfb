use assert_matches::assert_matches;
use pretty_assertions::assert_eq;

use crate::{
    binder::{
        bound_nodes::{BoundLiteralNodeKind, BoundNodeKind},
        operators::{BoundBinaryOperatorKind, BoundUnaryOperatorKind},
        typing::Type,
    },
    diagnostics::Diagnostic,
    parser,
    value::Value,
};

use super::*;

#[test]
fn successful_binding() {
    bind_helper("1 + 1", |node| {
        assert_matches!(node.kind, BoundNodeKind::BinaryExpression(binary) => {
            assert_matches!(binary.lhs.kind, BoundNodeKind::LiteralExpression(BoundLiteralNodeKind { value: Value::Number(1) }));
            assert_matches!(binary.lhs.type_, Type::Number);
            assert_matches!(binary.operator.kind, BoundBinaryOperatorKind::ArithmeticAddition);
            assert_matches!(binary.rhs.kind, BoundNodeKind::LiteralExpression(BoundLiteralNodeKind { value: Value::Number(1) }));
            assert_matches!(binary.rhs.type_, Type::Number);
        });
        assert_matches!(node.type_, Type::Number);
    });

    bind_helper("true != false", |node| {
        assert_matches!(node.kind, BoundNodeKind::BinaryExpression(binary) => {
            assert_matches!(binary.lhs.kind, BoundNodeKind::LiteralExpression(BoundLiteralNodeKind { value: Value::Boolean(true) }));
            assert_matches!(binary.lhs.type_, Type::Boolean);
            assert_matches!(binary.operator.kind, BoundBinaryOperatorKind::NotEquals);
            assert_matches!(binary.rhs.kind, BoundNodeKind::LiteralExpression(BoundLiteralNodeKind { value: Value::Boolean(false) }));
            assert_matches!(binary.rhs.type_, Type::Boolean);
        });
        assert_matches!(node.type_, Type::Boolean);
    });

    bind_helper("(1 == 2) == (3 != 4)", |node| {
        assert_matches!(node.kind, BoundNodeKind::BinaryExpression(binary) => {
            assert_matches!(&binary.lhs.kind, BoundNodeKind::BinaryExpression(binary) => {
                assert_matches!(binary.lhs.type_, Type::Number);
                assert_matches!(binary.operator.kind, BoundBinaryOperatorKind::Equals);
                assert_matches!(binary.rhs.type_, Type::Number);
            });
            assert_matches!(binary.lhs.type_, Type::Boolean);
            assert_matches!(binary.operator.kind, BoundBinaryOperatorKind::Equals);
            assert_matches!(&binary.rhs.kind, BoundNodeKind::BinaryExpression(binary) => {
                assert_matches!(binary.operator.kind, BoundBinaryOperatorKind::NotEquals);
            });
            assert_matches!(binary.rhs.type_, Type::Boolean);
        });
        assert_matches!(node.type_, Type::Boolean);
    });

    bind_helper("-(1 * 2)", |node| {
        assert_matches!(node.kind, BoundNodeKind::UnaryExpression(unary) => {
            assert_matches!(unary.operator.kind, BoundUnaryOperatorKind::ArithmeticNegate);
            assert_matches!(&unary.operand.kind, BoundNodeKind::BinaryExpression(binary) => {
                assert_matches!(binary.operator.kind, BoundBinaryOperatorKind::ArithmeticMultiplication);
            });
            assert_eq!(unary.operand.span, TextSpan::new(2, 5));
        });
        assert_matches!(node.type_, Type::Number);
    });

    bind_helper("!true || (+1 == 1) && false", |node| {
        assert_matches!(node.type_, Type::Boolean);
    });
}

#[test]
fn parenthesized_binds_to_inner_expression() {
    bind_helper("((7))", |node| {
        assert_matches!(node.kind, BoundNodeKind::LiteralExpression(BoundLiteralNodeKind { value: Value::Number(7) }));
        assert_eq!(node.span, TextSpan::new(2, 1));
    });
}

fn bind_helper(input: &str, callback: impl FnOnce(BoundNode)) {
    let mut diagnostic_bag = DiagnosticBag::new();
    let (node, _) = parser::parse(input, &mut diagnostic_bag, DebugFlags::default());
    assert!(!diagnostic_bag.has_errors(), "input: {}", input);
    let result = bind(&node, &mut diagnostic_bag, DebugFlags::default());
    assert!(!diagnostic_bag.has_errors(), "input: {}", input);
    callback(result)
}

#[test]
fn binding_error() {
    let (node, diagnostics) = bind_helper_error("1 + true");
    assert_matches!(node.kind, BoundNodeKind::ErrorExpression);
    assert_matches!(node.type_, Type::Error);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].to_string(),
        "Error at 2-3: No binary operator + for types number and bool."
    );

    let (_, diagnostics) = bind_helper_error("-true");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].to_string(),
        "Error at 0-1: No unary operator - for type bool."
    );

    let (_, diagnostics) = bind_helper_error("!1");
    assert_eq!(
        diagnostics[0].to_string(),
        "Error at 0-1: No unary operator ! for type number."
    );

    let (_, diagnostics) = bind_helper_error("1 == 1 || 2");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].to_string(),
        "Error at 7-9: No binary operator || for types bool and number."
    );

    let (_, diagnostics) = bind_helper_error("true / false");
    assert_eq!(
        diagnostics[0].to_string(),
        "Error at 5-6: No binary operator / for types bool and bool."
    );
}

#[test]
fn error_operands_do_not_cascade() {
    let (node, diagnostics) = bind_helper_error("-(1 + true) * 2 == !3");
    assert_matches!(node.kind, BoundNodeKind::ErrorExpression);
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(
        diagnostics[0].to_string(),
        "Error at 4-5: No binary operator + for types number and bool."
    );
    assert_eq!(
        diagnostics[1].to_string(),
        "Error at 19-20: No unary operator ! for type number."
    );
}

fn bind_helper_error(input: &str) -> (BoundNode, Vec<Diagnostic>) {
    let mut diagnostic_bag = DiagnosticBag::new();
    let (node, _) = parser::parse(input, &mut diagnostic_bag, DebugFlags::default());
    assert!(!diagnostic_bag.has_errors(), "input: {}", input);
    let result = bind(&node, &mut diagnostic_bag, DebugFlags::default());
    assert!(diagnostic_bag.has_errors(), "input: {}", input);
    (result, diagnostic_bag.diagnostics)
}

#[test]
fn operator_tables() {
    use super::operators::{look_up_binary_operator, look_up_unary_operator};
    use crate::lexer::syntax_token::SyntaxTokenKind;

    let equals = look_up_binary_operator(SyntaxTokenKind::EqualsEquals, Type::Boolean, Type::Boolean)
        .expect("bool == bool");
    assert_eq!(equals.result_type, Type::Boolean);
    let equals = look_up_binary_operator(SyntaxTokenKind::EqualsEquals, Type::Number, Type::Number)
        .expect("number == number");
    assert_eq!(equals.result_type, Type::Boolean);
    assert_eq!(equals.kind, BoundBinaryOperatorKind::Equals);
    assert!(look_up_binary_operator(SyntaxTokenKind::EqualsEquals, Type::Number, Type::Boolean).is_none());
    assert!(look_up_binary_operator(SyntaxTokenKind::Plus, Type::Error, Type::Number).is_none());
    assert!(look_up_binary_operator(SyntaxTokenKind::LParen, Type::Number, Type::Number).is_none());
    assert!(look_up_unary_operator(SyntaxTokenKind::Star, Type::Number).is_none());
    let negate = look_up_unary_operator(SyntaxTokenKind::Bang, Type::Boolean).expect("!bool");
    assert_eq!(negate.kind, BoundUnaryOperatorKind::LogicalNegation);
}
