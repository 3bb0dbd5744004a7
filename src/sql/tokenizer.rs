use crate::sql::{
    token::{Statement, Token},
    symbol::{Quote, SYMBOLS, TERMINATOR, is_terminal, is_word_char},
    trim_blank_start,
};

/// Naive SQL tokenizer reducing one statement to its ordered tokens.
///
/// Normalization:
/// - Leading whitespace and trailing `;` are stripped, then exactly one `;`
///   is appended so every lexeme is followed by a terminal.
/// - `\n` and `\r` become spaces. Whitespace between tokens is dropped.
///
/// Scanning, at each position, in priority order:
/// 1. The first symbol of [`SYMBOLS`] that is followed by a terminal.
/// 2. The first symbol followed by any character.
/// 3. A bare word `@?[A-Za-z0-9_.]+` followed by a terminal.
///
/// A quote symbol extends to the next occurrence of the same quote and is
/// emitted as one token. Scanning stops at the first position where nothing
/// matches; this is always reached at the appended `;`, which is never
/// emitted itself, and earlier for characters outside the grammar such as
/// `!` or a tab directly after a word.
///
/// Guarantees:
/// - Never panics and never returns an error.
/// - Pure: equal input gives equal output.
pub fn tokenize(sql: &str) -> Statement {
    let mut text = trim_blank_start(sql)
        .trim_end_matches(TERMINATOR)
        .replace(['\n', '\r'], " ");
    text.push(TERMINATOR);

    let mut out = Vec::new();
    let mut rest = text.as_str();
    while let Some(lexeme) = next_lexeme(rest) {
        out.push(Token::from(lexeme));
        rest = trim_blank_start(&rest[lexeme.len()..]);
    }

    Statement::from(out)
}

/// Scan one lexeme at the start of `rest`.
fn next_lexeme(rest: &str) -> Option<&str> {
    let symbol = SYMBOLS
        .iter()
        .find(|s| rest.starts_with(**s) && is_terminal(&rest[s.len()..]))
        .or_else(|| {
            SYMBOLS
                .iter()
                .find(|s| rest.starts_with(**s) && rest.len() > s.len())
        });

    if let Some(symbol) = symbol {
        return Some(match Quote::from_symbol(symbol) {
            Some(quote) => quote.literal(rest),
            None => &rest[..symbol.len()],
        });
    }

    word(rest)
}

fn word(rest: &str) -> Option<&str> {
    let start = usize::from(rest.starts_with('@'));
    let body = &rest[start..];
    let len = body.find(|c: char| !is_word_char(c)).unwrap_or(body.len());
    if len == 0 {
        return None;
    }
    let end = start + len;
    is_terminal(&rest[end..]).then(|| &rest[..end])
}
