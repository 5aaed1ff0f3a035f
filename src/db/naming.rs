/// Deterministic name for a foreign key constraint.
///
/// The short form drops the separator between the primary table and column,
/// which keeps generated names inside older identifier length limits.
pub fn foreign_key_name(
    foreign_table: &str,
    foreign_column: &str,
    primary_table: &str,
    primary_column: &str,
    short: bool,
) -> String {
    if short {
        format!(
            "FK_{}_{}_{}{}",
            foreign_table, foreign_column, primary_table, primary_column
        )
    } else {
        format!(
            "FK_{}_{}_{}_{}",
            foreign_table, foreign_column, primary_table, primary_column
        )
    }
}

/// Deterministic name for an index. The `short` flag is accepted for parity
/// with [`foreign_key_name`] but has never affected the output; callers rely
/// on the single form.
pub fn index_name(table: &str, column: &str, _short: bool) -> String {
    format!("IX_{}_{}", table, column)
}
