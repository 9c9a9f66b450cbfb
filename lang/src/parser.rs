mod match_token;
pub mod syntax_nodes;

use std::collections::VecDeque;

use crate::{
    debug,
    diagnostics::DiagnosticBag,
    lexer::{
        self,
        syntax_token::{SyntaxToken, SyntaxTokenKind},
    },
    DebugFlags,
};

use self::syntax_nodes::SyntaxNode;
use crate::match_token;

/// Parses a single expression spanning the whole text. Returns the expression
/// and the end of input token. Never fails, problems end up in the
/// `diagnostic_bag` and the returned tree is patched up with inserted nodes.
pub fn parse<'a>(
    text: &'a str,
    diagnostic_bag: &mut DiagnosticBag,
    debug_flags: DebugFlags,
) -> (SyntaxNode<'a>, SyntaxToken<'a>) {
    let mut tokens = lexer::lex(text, diagnostic_bag, debug_flags);
    let result = parse_expression(&mut tokens, diagnostic_bag);
    let eoi = match_token!(&mut tokens, diagnostic_bag, Eoi);
    log::trace!("parsed {} spanning {}", result.kind.name(), result.span);
    if debug_flags.print_syntax_tree {
        print!("{}", debug::syntax_tree_to_string(&result));
    }
    (result, eoi)
}

/// The last token is always the end of input, it is never removed.
fn next_token<'a>(tokens: &mut VecDeque<SyntaxToken<'a>>) -> SyntaxToken<'a> {
    if tokens.len() == 1 {
        peek_token(tokens).clone()
    } else {
        tokens.pop_front().expect("No tokens could be found!")
    }
}

fn peek_token<'a, 'b>(tokens: &'b VecDeque<SyntaxToken<'a>>) -> &'b SyntaxToken<'a> {
    tokens.front().expect("No tokens could be found!")
}

fn parse_expression<'a>(
    tokens: &mut VecDeque<SyntaxToken<'a>>,
    diagnostic_bag: &mut DiagnosticBag,
) -> SyntaxNode<'a> {
    parse_binary_with_parent_precedence(tokens, diagnostic_bag, 0)
}

fn parse_binary_with_parent_precedence<'a>(
    tokens: &mut VecDeque<SyntaxToken<'a>>,
    diagnostic_bag: &mut DiagnosticBag,
    parent_precedence: u32,
) -> SyntaxNode<'a> {
    let mut lhs;
    let unary_precedence = peek_token(tokens).kind.unary_precedence();
    if unary_precedence != 0 && unary_precedence >= parent_precedence {
        let operator_token = next_token(tokens);
        let operand = parse_binary_with_parent_precedence(tokens, diagnostic_bag, unary_precedence);
        lhs = SyntaxNode::unary(operator_token, operand);
    } else {
        lhs = parse_primary(tokens, diagnostic_bag);
    }

    loop {
        let precedence = peek_token(tokens).kind.binary_precedence();
        if precedence == 0 || precedence <= parent_precedence {
            break;
        }

        let operator_token = next_token(tokens);
        let rhs = parse_binary_with_parent_precedence(tokens, diagnostic_bag, precedence);
        lhs = SyntaxNode::binary(lhs, operator_token, rhs);
    }
    lhs
}

fn parse_primary<'a>(
    tokens: &mut VecDeque<SyntaxToken<'a>>,
    diagnostic_bag: &mut DiagnosticBag,
) -> SyntaxNode<'a> {
    match peek_token(tokens).kind {
        SyntaxTokenKind::LParen => {
            let lparen = next_token(tokens);
            let expression = parse_expression(tokens, diagnostic_bag);
            let rparen = match_token!(tokens, diagnostic_bag, RParen);
            SyntaxNode::parenthesized(lparen, expression, rparen)
        }
        SyntaxTokenKind::NumberLiteral => parse_number_literal(tokens, diagnostic_bag),
        SyntaxTokenKind::TrueKeyword | SyntaxTokenKind::FalseKeyword => {
            parse_boolean_literal(tokens)
        }
        unexpected_token => {
            let current = peek_token(tokens);
            diagnostic_bag.report_expected_expression(current.span(), unexpected_token);
            SyntaxNode::error(SyntaxToken::inserted(
                SyntaxTokenKind::NumberLiteral,
                current.start,
            ))
        }
    }
}

fn parse_number_literal<'a>(
    tokens: &mut VecDeque<SyntaxToken<'a>>,
    diagnostic_bag: &mut DiagnosticBag,
) -> SyntaxNode<'a> {
    SyntaxNode::literal(match_token!(tokens, diagnostic_bag, NumberLiteral))
}

fn parse_boolean_literal<'a>(tokens: &mut VecDeque<SyntaxToken<'a>>) -> SyntaxNode<'a> {
    let token = next_token(tokens);
    debug_assert!(matches!(
        token.kind,
        SyntaxTokenKind::TrueKeyword | SyntaxTokenKind::FalseKeyword
    ));
    SyntaxNode::literal(token)
}
