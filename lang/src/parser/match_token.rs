/// Consumes the next token if it is of the expected kind. Otherwise a
/// diagnostic is reported and an empty token of the expected kind is inserted
/// at the position of the current token, which is left in place.
#[macro_export]
macro_rules! match_token {
    ($tokens:expr, $diagnostic_bag:expr, $kind:ident) => {
        if matches!(peek_token($tokens).kind, SyntaxTokenKind::$kind) {
            next_token($tokens)
        } else {
            let current = peek_token($tokens);
            $diagnostic_bag.report_unexpected_token_kind(
                current.span(),
                current.kind,
                SyntaxTokenKind::$kind,
            );
            SyntaxToken::inserted(SyntaxTokenKind::$kind, current.start)
        }
    };
}
