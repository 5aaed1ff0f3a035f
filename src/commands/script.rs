use std::fs;

use anyhow::{anyhow, Result};
use serde_json::json;

use crate::cli::{CliArgs, ScriptArgs};
use crate::commands::common;
use crate::config::{OutputFormat, ResolvedConfig};
use crate::db::provider::DataProvider;
use crate::db::script::split_script;
use crate::output::json as json_out;

pub fn run(args: &CliArgs, cmd: &ScriptArgs) -> Result<()> {
    let resolved = common::load_config(args)?;
    let format = common::output_format(args, &resolved);

    let sql_text = match (&cmd.sql, &cmd.file) {
        (Some(_), Some(_)) => return Err(anyhow!("Provide script text or --file, not both")),
        (None, None) => return Err(anyhow!("Provide script text or --file")),
        (Some(text), None) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)?,
    };

    if cmd.dry_run {
        let commands = split_script(&sql_text);
        if args.quiet {
            return Ok(());
        }
        return emit_dry_run(format, &resolved, &commands);
    }

    let provider = common::build_provider(&resolved);
    provider.execute_script(&sql_text)?;

    if args.quiet {
        return Ok(());
    }

    let count = split_script(&sql_text).len();
    if matches!(format, OutputFormat::Json) {
        let payload = json!({ "success": true, "commandCount": count });
        let body = json_out::emit_json_value(&payload, common::json_pretty(&resolved))?;
        println!("{}", body);
    } else {
        println!("Executed {} command(s)", count);
    }
    Ok(())
}

fn emit_dry_run(
    format: OutputFormat,
    resolved: &ResolvedConfig,
    commands: &[String],
) -> Result<()> {
    if matches!(format, OutputFormat::Json) {
        let payload = json!({
            "dryRun": true,
            "commandCount": commands.len(),
            "commands": commands
                .iter()
                .enumerate()
                .map(|(idx, sql)| json!({"index": idx + 1, "sql": sql}))
                .collect::<Vec<_>>(),
        });
        let body = json_out::emit_json_value(&payload, common::json_pretty(resolved))?;
        println!("{}", body);
        return Ok(());
    }

    println!("Dry run: {} command(s)", commands.len());
    for (idx, command) in commands.iter().enumerate() {
        println!("\nCommand {}:\n{}", idx + 1, command);
    }
    Ok(())
}
