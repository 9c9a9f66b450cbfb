use std::fmt;

use either::Either;

use super::DebugPrinter;
use crate::{lexer::syntax_token::SyntaxToken, parser::syntax_nodes::*};

pub fn token_to_string(token: &SyntaxToken) -> String {
    let mut result = format!("{:?} '{}' {}", token.kind, token.lexeme, token.span());
    if let Some(value) = token.value {
        result.push_str(&format!(" {}", value));
    }
    result
}

/// Renders the tree one node per line, children below their parent and
/// connected with box drawing characters.
pub fn syntax_tree_to_string(node: &SyntaxNode) -> String {
    SyntaxTreePrinter(node).to_string()
}

struct SyntaxTreePrinter<'n, 'a>(&'n SyntaxNode<'a>);

impl fmt::Display for SyntaxTreePrinter<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        print_element(Either::Right(self.0), DebugPrinter::default(), true, f)
    }
}

fn print_element(
    element: SyntaxElement,
    printer: DebugPrinter,
    is_last: bool,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    let marker = if is_last { "└──" } else { "├──" };
    write!(f, "{}{}", printer.indent, marker)?;
    let children = match element {
        Either::Left(token) => {
            write!(f, "{:?}", token.kind)?;
            if let Some(value) = token.value {
                write!(f, " {}", value)?;
            }
            token.children()
        }
        Either::Right(node) => {
            write!(f, "{}", node.kind.name())?;
            node.children()
        }
    };
    writeln!(f)?;

    let printer = printer.child(is_last);
    let count = children.len();
    for (index, child) in children.into_iter().enumerate() {
        print_element(child, printer.clone(), index + 1 == count, f)?;
    }
    Ok(())
}
