use crate::{binder::typing::Type, lexer::syntax_token::SyntaxTokenKind, text::TextSpan};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    message: String,
    span: TextSpan,
}

impl Diagnostic {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn span(&self) -> TextSpan {
        self.span
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error at {}: {}", self.span, self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DiagnosticBag {
    pub diagnostics: Vec<Diagnostic>,
}

impl DiagnosticBag {
    pub fn new() -> Self {
        Self {
            diagnostics: vec![],
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    fn report(&mut self, message: String, span: TextSpan) {
        log::debug!("diagnostic at {}: {}", span, message);
        self.diagnostics.push(Diagnostic { message, span });
    }

    pub fn report_bad_input(&mut self, start: usize, character: char) {
        let message = format!("Bad character in input: {}", character);
        let span = TextSpan::new(start, character.len_utf8());
        self.report(message, span)
    }

    pub fn report_bad_number(&mut self, start: usize, text: &str) {
        let message = format!("'{}' is no valid number.", text);
        let span = TextSpan::new(start, text.len());
        self.report(message, span)
    }

    pub fn report_unexpected_token_kind(
        &mut self,
        span: TextSpan,
        actual_token_kind: SyntaxTokenKind,
        expected_token_kind: SyntaxTokenKind,
    ) {
        let message = format!(
            "Expected token kind {:?} but actually found {:?}.",
            expected_token_kind, actual_token_kind
        );
        self.report(message, span)
    }

    pub fn report_expected_expression(&mut self, span: TextSpan, actual_token_kind: SyntaxTokenKind) {
        let message = format!(
            "Expected expression but actually found {:?}.",
            actual_token_kind
        );
        self.report(message, span)
    }

    pub fn report_no_unary_operator(&mut self, span: TextSpan, operator: &str, type_: Type) {
        let message = format!("No unary operator {} for type {}.", operator, type_);
        self.report(message, span);
    }

    pub fn report_no_binary_operator(
        &mut self,
        span: TextSpan,
        lhs_type: Type,
        operator: &str,
        rhs_type: Type,
    ) {
        let message = format!(
            "No binary operator {} for types {} and {}.",
            operator, lhs_type, rhs_type
        );
        self.report(message, span);
    }
}
