use anyhow::Result;
use serde_json::json;

use crate::cli::{CliArgs, IdentityArgs};
use crate::commands::common;
use crate::config::OutputFormat;
use crate::db::provider::{DataProvider, OracleDataProvider};
use crate::error::{AppError, ErrorKind};
use crate::model::{City, Country, Student};
use crate::output::json as json_out;

pub fn run(args: &CliArgs, cmd: &IdentityArgs) -> Result<()> {
    let resolved = common::load_config(args)?;
    let format = common::output_format(args, &resolved);
    let provider = common::build_provider(&resolved);

    let value = match cmd.at_least {
        Some(target) => {
            set_identity(&provider, &cmd.table, target)?;
            target
        }
        None => read_identity(&provider, &cmd.table)?,
    };

    if args.quiet {
        return Ok(());
    }

    if matches!(format, OutputFormat::Json) {
        let payload = json!({
            "table": cmd.table.to_uppercase(),
            "value": value,
            "raised": cmd.at_least.is_some(),
        });
        let body = json_out::emit_json_value(&payload, common::json_pretty(&resolved))?;
        println!("{}", body);
    } else if cmd.at_least.is_some() {
        println!("Identity for {} raised to at least {}", cmd.table.to_uppercase(), value);
    } else {
        println!("{}", value);
    }
    Ok(())
}

/// Note the read is consuming: printing the next identity advances the
/// sequence.
fn read_identity(provider: &OracleDataProvider, table: &str) -> Result<i64> {
    match normalize(table)? {
        Table::Student => provider.table_identity::<Student>(),
        Table::City => provider.table_identity::<City>(),
        Table::Country => provider.table_identity::<Country>(),
    }
}

fn set_identity(provider: &OracleDataProvider, table: &str, target: i64) -> Result<()> {
    match normalize(table)? {
        Table::Student => provider.set_table_identity::<Student>(target),
        Table::City => provider.set_table_identity::<City>(target),
        Table::Country => provider.set_table_identity::<Country>(target),
    }
}

#[derive(Debug)]
enum Table {
    Student,
    City,
    Country,
}

fn normalize(table: &str) -> Result<Table> {
    match table.to_lowercase().as_str() {
        "student" | "students" => Ok(Table::Student),
        "city" | "cities" => Ok(Table::City),
        "country" | "countries" => Ok(Table::Country),
        other => Err(AppError::new(
            ErrorKind::Argument,
            format!("Unknown table '{}'. Expected student, city, or country", other),
        )
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::classify_error;

    #[test]
    fn unknown_tables_are_argument_errors() {
        let err = normalize("invoices").unwrap_err();
        assert_eq!(classify_error(&err), ErrorKind::Argument);
    }

    #[test]
    fn plural_and_singular_names_resolve() {
        assert!(normalize("Student").is_ok());
        assert!(normalize("cities").is_ok());
        assert!(normalize("COUNTRIES").is_ok());
    }
}
