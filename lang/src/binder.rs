pub mod bound_nodes;
pub mod operators;
#[cfg(test)]
mod tests;
pub mod typing;

use crate::{
    debug,
    diagnostics::DiagnosticBag,
    parser::syntax_nodes::{BinaryNodeKind, SyntaxNode, SyntaxNodeKind, UnaryNodeKind},
    text::TextSpan,
    DebugFlags,
};

use self::bound_nodes::BoundNode;

struct BindingState<'b> {
    diagnostic_bag: &'b mut DiagnosticBag,
}

/// Annotates the syntax tree with types and resolves every operator against
/// the operator tables. Nodes which fail to bind become error expressions and
/// leave a diagnostic behind.
pub fn bind(
    node: &SyntaxNode,
    diagnostic_bag: &mut DiagnosticBag,
    debug_flags: DebugFlags,
) -> BoundNode {
    let mut binder = BindingState { diagnostic_bag };
    let result = bind_node(node, &mut binder);
    log::trace!("bound expression of type {} spanning {}", result.type_, result.span);
    if debug_flags.print_bound_tree {
        println!("{}", debug::bound_node_as_code(&result));
    }
    result
}

fn bind_node(node: &SyntaxNode, binder: &mut BindingState) -> BoundNode {
    match &node.kind {
        SyntaxNodeKind::Literal(literal) => BoundNode::literal(node.span, literal.value),
        SyntaxNodeKind::Unary(unary) => bind_unary(node.span, unary, binder),
        SyntaxNodeKind::Binary(binary) => bind_binary(node.span, binary, binder),
        SyntaxNodeKind::Parenthesized(parenthesized) => {
            bind_node(&parenthesized.expression, binder)
        }
    }
}

fn bind_unary(span: TextSpan, unary: &UnaryNodeKind, binder: &mut BindingState) -> BoundNode {
    let operand = bind_node(&unary.operand, binder);
    if operand.type_.is_error() {
        return BoundNode::error(span);
    }
    let operator_token = &unary.operator_token;
    match operators::look_up_unary_operator(operator_token.kind, operand.type_) {
        Some(operator) => {
            log::trace!("resolved unary {} on {}", operator.kind, operand.type_);
            BoundNode::unary(span, operator, operand)
        }
        None => {
            binder.diagnostic_bag.report_no_unary_operator(
                operator_token.span(),
                operator_token.lexeme,
                operand.type_,
            );
            BoundNode::error(span)
        }
    }
}

fn bind_binary(span: TextSpan, binary: &BinaryNodeKind, binder: &mut BindingState) -> BoundNode {
    let lhs = bind_node(&binary.lhs, binder);
    let rhs = bind_node(&binary.rhs, binder);
    if lhs.type_.is_error() || rhs.type_.is_error() {
        return BoundNode::error(span);
    }
    let operator_token = &binary.operator_token;
    match operators::look_up_binary_operator(operator_token.kind, lhs.type_, rhs.type_) {
        Some(operator) => {
            log::trace!(
                "resolved binary {} on {} and {}",
                operator.kind,
                lhs.type_,
                rhs.type_
            );
            BoundNode::binary(span, lhs, operator, rhs)
        }
        None => {
            binder.diagnostic_bag.report_no_binary_operator(
                operator_token.span(),
                lhs.type_,
                operator_token.lexeme,
                rhs.type_,
            );
            BoundNode::error(span)
        }
    }
}
