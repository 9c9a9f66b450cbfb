use std::fmt;

use crate::binder::bound_nodes::*;

/// Renders the bound tree as fully parenthesized code followed by its type,
/// e.g. `(1 + (2 * 3)): number`.
pub fn bound_node_as_code(node: &BoundNode) -> String {
    format!("{}: {}", BoundCode(node), node.type_)
}

struct BoundCode<'n>(&'n BoundNode);

impl fmt::Display for BoundCode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        print_bound_node_as_code(self.0, f)
    }
}

fn print_bound_node_as_code(node: &BoundNode, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &node.kind {
        BoundNodeKind::ErrorExpression => write!(f, "#error"),
        BoundNodeKind::LiteralExpression(literal) => write!(f, "{}", literal.value),
        BoundNodeKind::UnaryExpression(unary) => {
            write!(f, "({}", unary.operator.kind)?;
            print_bound_node_as_code(&unary.operand, f)?;
            write!(f, ")")
        }
        BoundNodeKind::BinaryExpression(binary) => {
            write!(f, "(")?;
            print_bound_node_as_code(&binary.lhs, f)?;
            write!(f, " {} ", binary.operator.kind)?;
            print_bound_node_as_code(&binary.rhs, f)?;
            write!(f, ")")
        }
    }
}
