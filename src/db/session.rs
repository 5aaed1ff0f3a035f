use anyhow::Result;

use crate::db::types::ResultSet;

/// The query capability the provider and services run on. The underlying
/// driver is treated as opaque: anything that can run a statement and hand
/// back rows qualifies, which keeps the sequence and script logic testable
/// without a live database.
pub trait SqlSession {
    /// Run a statement, returning the affected row count.
    fn execute(&self, sql: &str) -> Result<u64>;

    /// Run a query and materialize every row.
    fn query(&self, sql: &str) -> Result<ResultSet>;

    /// First column of the first row as an integer, if any.
    fn query_int(&self, sql: &str) -> Result<Option<i64>> {
        let set = self.query(sql)?;
        Ok(set
            .rows
            .first()
            .and_then(|row| row.first())
            .and_then(|value| value.as_int()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::types::{Column, Value};

    struct OneRow(Vec<Value>);

    impl SqlSession for OneRow {
        fn execute(&self, _sql: &str) -> Result<u64> {
            Ok(0)
        }

        fn query(&self, _sql: &str) -> Result<ResultSet> {
            Ok(ResultSet {
                columns: vec![Column {
                    name: "VALUE".to_string(),
                }],
                rows: vec![self.0.clone()],
            })
        }
    }

    #[test]
    fn query_int_reads_the_first_cell() {
        let session = OneRow(vec![Value::Int(42)]);
        assert_eq!(session.query_int("ignored").unwrap(), Some(42));
    }

    #[test]
    fn query_int_is_none_for_null() {
        let session = OneRow(vec![Value::Null]);
        assert_eq!(session.query_int("ignored").unwrap(), None);
    }
}
