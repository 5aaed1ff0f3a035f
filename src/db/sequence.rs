//! Identity emulation for a schema whose tables carry no native
//! auto-increment columns: each table gets a named sequence that hands out
//! primary key values.

use anyhow::Result;
use tracing::debug;

use crate::db::session::SqlSession;

/// Sequence name backing a table's identity column.
pub fn sequence_name(table: &str) -> String {
    format!("SIDENTITY_{}", table.to_uppercase())
}

/// Fetch the next identity value for a table.
///
/// This is a consuming read: NEXTVAL advances the sequence, so two calls in
/// a row return different values. When no value is obtainable (sequence not
/// yet created, or an empty result), the identity starts at 1.
pub fn next_value<S: SqlSession + ?Sized>(session: &S, table: &str) -> Result<i64> {
    let sql = format!("SELECT {}.NEXTVAL FROM DUAL", sequence_name(table));
    match session.query_int(&sql) {
        Ok(Some(value)) => Ok(value),
        Ok(None) => Ok(1),
        Err(err) => {
            debug!(table, %err, "identity sequence not readable, starting at 1");
            Ok(1)
        }
    }
}

/// Raise a table's identity so future values resume at or above `target`.
///
/// A target at or below the current value leaves the sequence untouched;
/// identities never decrease. Returns whether the sequence was recreated.
/// Note the read-then-recreate is not atomic across processes; the database's
/// own sequence semantics are the only guarantee concurrent callers get.
pub fn ensure_at_least<S: SqlSession + ?Sized>(
    session: &S,
    table: &str,
    target: i64,
) -> Result<bool> {
    let current = next_value(session, table)?;
    if target <= current {
        return Ok(false);
    }

    let name = sequence_name(table);
    // The sequence may not exist yet; the drop is best-effort.
    let _ = session.execute(&format!("DROP SEQUENCE {}", name));
    session.execute(&format!(
        "CREATE SEQUENCE {} START WITH {} INCREMENT BY 1",
        name, target
    ))?;
    debug!(table, target, "identity sequence recreated");
    Ok(true)
}
