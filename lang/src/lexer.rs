pub mod syntax_token;

use std::collections::VecDeque;

use crate::{debug, diagnostics::DiagnosticBag, DebugFlags};

use self::syntax_token::{SyntaxToken, SyntaxTokenKind};

/// Splits a line of text into tokens, one per call to [`Lexer::next_token`].
/// Every character of the input ends up in exactly one token, so whitespace
/// and characters which are not part of the language produce tokens as well.
pub struct Lexer<'a, 'b> {
    text: &'a str,
    /// Byte offset of the next character, always on a char boundary.
    position: usize,
    diagnostic_bag: &'b mut DiagnosticBag,
    /// Set once the iterator handed out the end of input.
    finished: bool,
}

impl<'a, 'b> Lexer<'a, 'b> {
    pub fn new(text: &'a str, diagnostic_bag: &'b mut DiagnosticBag) -> Self {
        Self {
            text,
            position: 0,
            diagnostic_bag,
            finished: false,
        }
    }

    /// Returns the end of input token forever once the text is used up.
    pub fn next_token(&mut self) -> SyntaxToken<'a> {
        let start = self.position;
        let Some(character) = self.current() else {
            return SyntaxToken::eoi(self.text.len());
        };
        let token = match character {
            d if d.is_ascii_digit() => {
                let lexeme = self.consume_while(|c| c.is_ascii_digit());
                SyntaxToken::number_literal(start, lexeme, self.diagnostic_bag)
            }
            ws if ws.is_whitespace() => {
                let lexeme = self.consume_while(char::is_whitespace);
                SyntaxToken::whitespace(start, lexeme)
            }
            c if c.is_alphabetic() => {
                let lexeme = self.consume_while(char::is_alphabetic);
                SyntaxToken::keyword(start, lexeme)
                    .unwrap_or_else(|| SyntaxToken::identifier(start, lexeme))
            }
            _ => self.operator_or_bad_token(start, character),
        };
        log::trace!("lexed {:?} '{}' at {}", token.kind, token.lexeme, token.start);
        token
    }

    fn current(&self) -> Option<char> {
        self.text[self.position..].chars().next()
    }

    fn consume_while(&mut self, predicate: impl Fn(char) -> bool) -> &'a str {
        let text = self.text;
        let start = self.position;
        let rest = &text[start..];
        let length = rest
            .char_indices()
            .find(|&(_, c)| !predicate(c))
            .map_or(rest.len(), |(index, _)| index);
        self.position += length;
        &text[start..self.position]
    }

    fn operator_or_bad_token(&mut self, start: usize, character: char) -> SyntaxToken<'a> {
        let text = self.text;
        let rest = &text[start..];
        // "!=" has to win over "!".
        for length in [2, 1] {
            let token = rest
                .get(..length)
                .and_then(|lexeme| SyntaxToken::operator(start, lexeme));
            if let Some(token) = token {
                self.position += length;
                return token;
            }
        }
        self.diagnostic_bag.report_bad_input(start, character);
        let length = character.len_utf8();
        self.position += length;
        SyntaxToken::bad(start, &rest[..length])
    }
}

impl<'a> Iterator for Lexer<'a, '_> {
    type Item = SyntaxToken<'a>;

    /// Yields every token up to and including the first end of input.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = token.kind == SyntaxTokenKind::Eoi;
        Some(token)
    }
}

/// The tokens the parser works on. Whitespace and bad tokens are dropped, the
/// last token is always [`SyntaxTokenKind::Eoi`].
pub fn lex<'a>(
    text: &'a str,
    diagnostic_bag: &mut DiagnosticBag,
    debug_flags: DebugFlags,
) -> VecDeque<SyntaxToken<'a>> {
    let mut result = VecDeque::new();
    for token in Lexer::new(text, diagnostic_bag) {
        if debug_flags.print_tokens {
            println!("{}", debug::token_to_string(&token));
        }
        if !matches!(
            token.kind,
            SyntaxTokenKind::Whitespace | SyntaxTokenKind::BadToken
        ) {
            result.push_back(token);
        }
    }
    result
}
