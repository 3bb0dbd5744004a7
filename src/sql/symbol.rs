//! Symbol table and character classes used by the tokenizer.
//!
//! The tokenizer only needs to know enough about a lexeme to decide whether
//! it opens a quoted literal. Everything else is compared as plain text.

/// Operator and punctuation symbols, in the order the scanner tries them.
///
/// Multi-character operators come before the single characters they start
/// with, but a shorter symbol still wins when only it is followed by a
/// terminal (`<>x` scans as `<` then `>`).
pub const SYMBOLS: [&str; 17] = [
    "(", ")", "'", "\"", "`", "<>", "<=", ">=", ":=", "*", "/", "<", ">", ",", "+", "=", "-",
];

/// Statement terminator appended before scanning and accepted as a terminal.
pub const TERMINATOR: char = ';';

/// Quote characters that open an atomic literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Quote {
    /// `'...'` string literal.
    #[display("'")]
    Single,
    /// `"..."` quoted identifier.
    #[display("\"")]
    Double,
    /// `` `...` `` quoted identifier.
    #[display("`")]
    Back,
}

impl Quote {
    pub const fn as_char(self) -> char {
        match self {
            Quote::Single => '\'',
            Quote::Double => '"',
            Quote::Back => '`',
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "'" => Some(Quote::Single),
            "\"" => Some(Quote::Double),
            "`" => Some(Quote::Back),
            _ => None,
        }
    }

    /// The literal opening at the start of `rest`, up to and including the
    /// next occurrence of the same quote character.
    ///
    /// No escape handling: a quote inside the literal always closes it. An
    /// unterminated literal runs to the end of `rest`.
    pub fn literal(self, rest: &str) -> &str {
        let open = self.as_char().len_utf8();
        match rest[open..].find(self.as_char()) {
            Some(close) => &rest[..open + close + self.as_char().len_utf8()],
            None => rest,
        }
    }
}

/// Characters allowed in a bare word.
pub const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.')
}

/// True if `rest` begins with something that may follow a token: a symbol,
/// the terminator, a space or a newline.
pub fn is_terminal(rest: &str) -> bool {
    rest.starts_with([TERMINATOR, ' ', '\n']) || SYMBOLS.iter().any(|s| rest.starts_with(s))
}
