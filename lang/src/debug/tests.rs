use pretty_assertions::assert_eq;

use crate::{
    binder::{self, bound_nodes::BoundNode},
    diagnostics::DiagnosticBag,
    lexer::syntax_token::SyntaxToken,
    parser,
    text::TextSpan,
};

use super::*;

#[test]
fn print_syntax_tree() {
    let mut diagnostic_bag = DiagnosticBag::new();
    let (node, _) = parser::parse("1 + 2", &mut diagnostic_bag, DebugFlags::default());
    assert_eq!(
        syntax_tree_to_string(&node),
        "└──BinaryExpression\n\
        \x20   ├──LiteralExpression\n\
        \x20   │   └──Number-Literal-Token 1\n\
        \x20   ├──PlusToken\n\
        \x20   └──LiteralExpression\n\
        \x20       └──Number-Literal-Token 2\n"
    );

    let (node, _) = parser::parse("-(true)", &mut diagnostic_bag, DebugFlags::default());
    assert_eq!(
        syntax_tree_to_string(&node),
        "└──UnaryExpression\n\
        \x20   ├──MinusToken\n\
        \x20   └──ParenthesizedExpression\n\
        \x20       ├──Open-Parenthesis-Token\n\
        \x20       ├──LiteralExpression\n\
        \x20       │   └──true true\n\
        \x20       └──Close-Parenthesis-Token\n"
    );
    assert!(!diagnostic_bag.has_errors());
}

#[test]
fn print_token() {
    let mut diagnostic_bag = DiagnosticBag::new();
    let token = SyntaxToken::number_literal(4, "12", &mut diagnostic_bag);
    assert_eq!(token_to_string(&token), "Number-Literal-Token '12' 4-6 12");
    let token = SyntaxToken::eoi(7);
    assert_eq!(token_to_string(&token), "End-of-Input-Token '' 7-7");
    let token = SyntaxToken::keyword(0, "false").unwrap();
    assert_eq!(token_to_string(&token), "false 'false' 0-5 false");
}

#[test]
fn print_bound_tree() {
    assert_eq!(bound_helper("1 + 2 * 3"), "(1 + (2 * 3)): number");
    assert_eq!(bound_helper("(1 + 2) * 3"), "((1 + 2) * 3): number");
    assert_eq!(bound_helper("-1"), "(-1): number");
    assert_eq!(bound_helper("!true == false"), "((!true) == false): bool");
    assert_eq!(
        bound_node_as_code(&BoundNode::error(TextSpan::new(0, 1))),
        "#error: error"
    );
}

fn bound_helper(input: &str) -> String {
    let mut diagnostic_bag = DiagnosticBag::new();
    let (node, _) = parser::parse(input, &mut diagnostic_bag, DebugFlags::default());
    let bound = binder::bind(&node, &mut diagnostic_bag, DebugFlags::default());
    assert!(!diagnostic_bag.has_errors(), "input: {}", input);
    bound_node_as_code(&bound)
}

#[test]
fn debug_flags_default_to_off() {
    assert_eq!(
        DebugFlags::default(),
        DebugFlags {
            print_tokens: false,
            print_syntax_tree: false,
            print_bound_tree: false,
        }
    );
}
