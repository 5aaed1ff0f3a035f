use anyhow::Result;

use crate::config::ConnectionSettings;
use crate::db::connection;
use crate::db::session::SqlSession;
use crate::db::types::{Column, ResultSet, Value};
use crate::error::{AppError, ErrorKind};

/// A live Oracle session. Statements auto-commit; script execution has no
/// transactional wrapping, so a failed command leaves earlier commands
/// applied.
pub struct OracleSession {
    conn: oracle::Connection,
}

impl OracleSession {
    /// Open a session against `descriptor`, or the configured service when
    /// none is given.
    pub fn open(settings: &ConnectionSettings, descriptor: Option<&str>) -> Result<Self> {
        let descriptor = match descriptor {
            Some(text) if !text.trim().is_empty() => text.to_string(),
            _ => connection::connect_descriptor(settings),
        };
        let mut conn = oracle::Connection::connect(&settings.username, &settings.password, &descriptor)
            .map_err(|err| AppError::new(ErrorKind::Connection, err.to_string()))?;
        conn.set_autocommit(true);
        Ok(Self { conn })
    }

    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|err| AppError::new(ErrorKind::Connection, err.to_string()))?;
        Ok(())
    }
}

impl SqlSession for OracleSession {
    fn execute(&self, sql: &str) -> Result<u64> {
        let statement = self
            .conn
            .execute(sql, &[])
            .map_err(|err| AppError::new(ErrorKind::Execution, err.to_string()))?;
        let affected = statement
            .row_count()
            .map_err(|err| AppError::new(ErrorKind::Execution, err.to_string()))?;
        Ok(affected)
    }

    fn query(&self, sql: &str) -> Result<ResultSet> {
        let rows = self
            .conn
            .query(sql, &[])
            .map_err(|err| AppError::new(ErrorKind::Query, err.to_string()))?;

        let columns = rows
            .column_info()
            .iter()
            .map(|info| Column {
                name: info.name().to_string(),
            })
            .collect::<Vec<_>>();

        let mut converted = Vec::new();
        for row in rows {
            let row = row.map_err(|err| AppError::new(ErrorKind::Query, err.to_string()))?;
            let width = row.sql_values().len();
            let mut values = Vec::with_capacity(width);
            for idx in 0..width {
                values.push(map_cell(&row, idx));
            }
            converted.push(values);
        }

        Ok(ResultSet {
            columns,
            rows: converted,
        })
    }
}

/// Narrowest numeric conversion first; everything else is read back as text
/// (the driver renders dates, timestamps, and NUMBER overflow that way).
fn map_cell(row: &oracle::Row, idx: usize) -> Value {
    if let Ok(Some(value)) = row.get::<usize, Option<i64>>(idx) {
        return Value::Int(value);
    }
    if let Ok(Some(value)) = row.get::<usize, Option<f64>>(idx) {
        return Value::Float(value);
    }
    match row.get::<usize, Option<String>>(idx) {
        Ok(Some(value)) => Value::Text(value),
        _ => Value::Null,
    }
}
