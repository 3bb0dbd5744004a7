//! Operands of a comparison and their normalized form.
use crate::*;
use itertools::Itertools as _;
use serde_json::Value;
use std::fmt;

/// A SQL statement or an arbitrarily nested group of statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Leaf(String),
    Group(Vec<Query>),
}

impl Query {
    /// Leaf statements in pre-order, left to right.
    pub fn leaves(&self) -> impl Iterator<Item = &str> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            while let Some(node) = stack.pop() {
                match node {
                    Query::Leaf(sql) => return Some(sql.as_str()),
                    Query::Group(children) => stack.extend(children.iter().rev()),
                }
            }
            None
        })
    }

    /// Convert a dynamically typed operand, accepting only strings and
    /// (nested) arrays of strings.
    pub fn from_json(position: Operand, value: &Value) -> Result<Self> {
        match value {
            Value::String(sql) => Ok(Query::Leaf(sql.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| Query::from_json(position, item))
                .collect::<Result<Vec<_>>>()
                .map(Query::Group),
            other => Err(Error::InvalidOperand {
                position,
                expected: "string or array",
                found: json_type(other),
            }),
        }
    }
}

impl Drop for Query {
    // Unnest iteratively; the derived drop recurses once per level.
    fn drop(&mut self) {
        let Query::Group(children) = self else {
            return;
        };
        let mut stack = std::mem::take(children);
        while let Some(mut node) = stack.pop() {
            if let Query::Group(children) = &mut node {
                stack.append(children);
            }
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl From<String> for Query {
    fn from(value: String) -> Self {
        Query::Leaf(value)
    }
}

impl From<&String> for Query {
    fn from(value: &String) -> Self {
        Query::Leaf(value.clone())
    }
}

impl From<&str> for Query {
    fn from(value: &str) -> Self {
        Query::Leaf(value.to_owned())
    }
}

impl<T: Into<Query>> From<Vec<T>> for Query {
    fn from(value: Vec<T>) -> Self {
        Query::Group(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Query>, const N: usize> From<[T; N]> for Query {
    fn from(value: [T; N]) -> Self {
        Query::Group(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Query>> From<&[T]> for Query {
    fn from(value: &[T]) -> Self {
        Query::Group(value.iter().cloned().map(Into::into).collect())
    }
}

/// Ordered, tokenized statements: the unit compared for equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, derive_more::Deref, derive_more::From)]
pub struct QuerySet(Vec<Statement>);

impl QuerySet {
    /// Each statement rendered as its tokens joined by a single space.
    pub fn export(&self) -> Vec<String> {
        self.0.iter().map(Statement::export).collect()
    }

    pub fn into_statements(self) -> Vec<Statement> {
        self.0
    }
}

impl FromIterator<Statement> for QuerySet {
    fn from_iter<I: IntoIterator<Item = Statement>>(iter: I) -> Self {
        QuerySet(iter.into_iter().collect())
    }
}

impl fmt::Display for QuerySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&export_array(&self.export()))
    }
}

/// Flatten `input` and tokenize every statement, in order.
pub fn normalize(input: impl Into<Query>) -> QuerySet {
    let query: Query = input.into();
    query.leaves().map(tokenize).collect()
}

/// Render exported statements in array notation:
///
/// ```text
/// Array (
///     0 => 'SELECT * FROM `t1`'
/// )
/// ```
pub fn export_array(statements: &[String]) -> String {
    if statements.is_empty() {
        return "Array ()".to_owned();
    }
    let body = statements
        .iter()
        .enumerate()
        .map(|(i, sql)| format!("    {i} => '{}'", escape(sql)))
        .join("\n");
    format!("Array (\n{body}\n)")
}

fn escape(sql: &str) -> String {
    sql.replace('\\', "\\\\").replace('\'', "\\'")
}
