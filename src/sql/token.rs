//! Token and statement model.
//!
//! A `Token` is the verbatim text of one lexeme, quotes included for quoted
//! literals. Two tokens are equal exactly when their text is equal; there is
//! no case folding and no type tag. A `Statement` is the ordered token
//! sequence of one SQL statement.
use itertools::Itertools as _;

/// One lexical unit of a statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display, derive_more::From)]
pub struct Token(String);

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Token(value.to_owned())
    }
}

impl PartialEq<str> for Token {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Ordered tokens of one SQL statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, derive_more::Deref, derive_more::From)]
pub struct Statement(Vec<Token>);

impl Statement {
    /// Tokens joined by a single space.
    pub fn export(&self) -> String {
        self.0.iter().join(" ")
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.0
    }
}

impl FromIterator<Token> for Statement {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Statement(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Statement {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.export())
    }
}
