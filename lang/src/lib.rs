pub mod binder;
pub mod debug;
pub mod diagnostics;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod text;
pub mod value;

use crate::{
    binder::bound_nodes::BoundNode, diagnostics::DiagnosticBag,
    lexer::syntax_token::SyntaxToken, parser::syntax_nodes::SyntaxNode,
};

pub use debug::DebugFlags;
pub use diagnostics::Diagnostic;
pub use evaluator::RuntimeError;
pub use value::Value;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("{} error(s) reported for the expression", .0.len())]
    Diagnostics(Vec<Diagnostic>),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// The result of parsing a single line. It borrows the line it was parsed
/// from and keeps every diagnostic the lexer, parser and binder reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree<'a> {
    root: SyntaxNode<'a>,
    end_of_input: SyntaxToken<'a>,
    /// Only present if the line was free of syntax errors.
    bound: Option<BoundNode>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> SyntaxTree<'a> {
    /// Lines without syntax errors are bound right away, so
    /// [`SyntaxTree::diagnostics`] also contains the type errors.
    pub fn parse(text: &'a str, debug_flags: DebugFlags) -> Self {
        let mut diagnostic_bag = DiagnosticBag::new();
        let (root, end_of_input) = parser::parse(text, &mut diagnostic_bag, debug_flags);
        let bound = if diagnostic_bag.has_errors() {
            None
        } else {
            Some(binder::bind(&root, &mut diagnostic_bag, debug_flags))
        };
        Self {
            root,
            end_of_input,
            bound,
            diagnostics: diagnostic_bag.diagnostics,
        }
    }

    pub fn root(&self) -> &SyntaxNode<'a> {
        &self.root
    }

    pub fn end_of_input(&self) -> &SyntaxToken<'a> {
        &self.end_of_input
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Refuses trees with diagnostics, otherwise evaluates the bound root.
    pub fn evaluate(&self) -> Result<Value, Error> {
        match &self.bound {
            Some(bound) if self.diagnostics.is_empty() => Ok(evaluator::evaluate(bound)?),
            _ => Err(Error::Diagnostics(self.diagnostics.clone())),
        }
    }
}

pub fn parse(line: &str) -> SyntaxTree<'_> {
    SyntaxTree::parse(line, DebugFlags::default())
}

/// Binds and evaluates `root`. Binding diagnostics are returned as
/// [`Error::Diagnostics`] and nothing is evaluated in that case.
pub fn evaluate(root: &SyntaxNode) -> Result<Value, Error> {
    let mut diagnostic_bag = DiagnosticBag::new();
    let bound = binder::bind(root, &mut diagnostic_bag, DebugFlags::default());
    if diagnostic_bag.has_errors() {
        return Err(Error::Diagnostics(diagnostic_bag.diagnostics));
    }
    Ok(evaluator::evaluate(&bound)?)
}
