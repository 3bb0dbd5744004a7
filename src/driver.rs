//! Assertion entry points for test fixtures and the executed-query collaborator.
use crate::*;
use serde_json::Value;

/// Source of the SQL a database double has executed so far, in order.
pub trait ExecutedQueries {
    fn executed_queries(&self) -> Vec<String>;
}

/// Recording [`ExecutedQueries`] implementation for database doubles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryLog {
    queries: Vec<String>,
}

impl QueryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, sql: impl Into<String>) {
        self.queries.push(sql.into());
    }

    pub fn clear(&mut self) {
        self.queries.clear();
    }
}

impl ExecutedQueries for QueryLog {
    fn executed_queries(&self) -> Vec<String> {
        self.queries.clone()
    }
}

/// SQL assertions for test fixtures.
///
/// Implementors that track executed queries override
/// [`database_driver`](AssertSql::database_driver); everything else has a
/// default.
pub trait AssertSql {
    /// The executed-query provider, if this fixture has one.
    fn database_driver(&self) -> Option<&dyn ExecutedQueries> {
        None
    }

    /// Fails with [`Error::Mismatch`] unless both sides are equal, whitespace ignored.
    fn assert_equals_sql_queries(
        &self,
        expected: impl Into<Query>,
        actual: impl Into<Query>,
    ) -> Result {
        compare(expected, actual)?;
        Ok(())
    }

    /// Like [`assert_equals_sql_queries`](AssertSql::assert_equals_sql_queries)
    /// for dynamically typed operands. Each operand must be a string or a
    /// (nested) array of strings.
    fn assert_equals_sql_json(&self, expected: &Value, actual: &Value) -> Result {
        let expected = Query::from_json(Operand::First, expected)?;
        let actual = Query::from_json(Operand::Second, actual)?;
        self.assert_equals_sql_queries(expected, actual)
    }

    /// Compare `expected` with the provider's executed queries.
    fn assert_executed_sql_queries(&self, expected: impl Into<Query>) -> Result {
        let driver = self.database_driver().ok_or(Error::MissingCollaborator)?;
        let executed = driver.executed_queries();
        debug!("Comparing against {} executed queries", executed.len());
        self.assert_equals_sql_queries(expected, executed)
    }
}
