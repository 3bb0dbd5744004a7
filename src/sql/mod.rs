//! Naive, whitespace-insensitive SQL lexing.
//!
//! This module holds the two pieces of real parsing logic in the crate:
//!
//! Modules:
//! - `symbol`     : Symbol table, quote characters and the terminal test.
//! - `token`      : `Token` (one lexeme, verbatim) and `Statement` (ordered tokens).
//! - `tokenizer`  : Reduces one SQL statement to its `Statement`.
//! - `splitter`   : Partitions a multi-statement script into statement strings,
//!   honoring `DELIMITER` directives.
//!
//! Design Principles:
//! 1. No grammar: tokens carry no meaning beyond their text.
//! 2. Never fail on input. Malformed SQL degrades to fewer or longer tokens.
//! 3. Quoted literals are atomic and have no escape handling.
//!
//! Example:
//! ```rust
//! use sqleq::sql::prelude::*;
//!
//! let statement = tokenize("SELECT *\nFROM `t1`;");
//! assert_eq!(statement.export(), "SELECT * FROM `t1`");
//!
//! let statements = split("SELECT 1;\nSELECT 2;\n");
//! assert_eq!(statements, vec!["SELECT 1", "SELECT 2"]);
//! ```
//!
//! NOTE: This is **not** a SQL parser. Two statements compare equal only when
//! their token sequences are identical.

pub mod splitter;
pub mod symbol;
pub mod token;
pub mod tokenizer;


pub use splitter::{DEFAULT_DELIMITER, ScriptSplitter, load_file, split};
pub use token::{Statement, Token};
pub use symbol::Quote;
pub use tokenizer::tokenize;

/// Convenience prelude re-exporting the most commonly used items.
///
/// Import with:
/// `use sqleq::sql::prelude::*;`
pub mod prelude {
    pub use super::{ScriptSplitter, Statement, Token, load_file, split, tokenize};
}

/// Whitespace as trimmed around statements and tokens: space, `\t`, `\n`,
/// `\r`, NUL and vertical tab.
pub(crate) const fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B')
}

pub(crate) fn trim_blank(s: &str) -> &str {
    s.trim_matches(is_blank)
}

pub(crate) fn trim_blank_start(s: &str) -> &str {
    s.trim_start_matches(is_blank)
}

pub(crate) fn trim_blank_end(s: &str) -> &str {
    s.trim_end_matches(is_blank)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_and_export() {
        let statement = tokenize("SELECT col FROM tbl");
        assert_eq!(statement.len(), 4);
        assert_eq!(statement.export(), "SELECT col FROM tbl");
    }

    #[test]
    fn prelude_import_works() {
        use super::prelude::*;
        let statements = ScriptSplitter::new().split("FROM X;\n");
        assert_eq!(statements, vec!["FROM X"]);
        assert_eq!(tokenize(&statements[0]).export(), "FROM X");
    }

    #[test]
    fn blank_set_matches_trim_semantics() {
        assert_eq!(trim_blank("\0\x0B\t SELECT \r\n"), "SELECT");
        assert_eq!(trim_blank_start("\n\tx "), "x ");
        assert_eq!(trim_blank_end(" x\r\n"), " x");
        // Non-breaking space is content, not whitespace.
        assert_eq!(trim_blank("\u{a0}x"), "\u{a0}x");
    }
}
