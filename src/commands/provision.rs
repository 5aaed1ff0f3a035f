use anyhow::Result;
use serde_json::json;

use crate::cli::{CliArgs, ProvisionArgs};
use crate::commands::common;
use crate::config::OutputFormat;
use crate::db::provider::DataProvider;
use crate::output::json as json_out;

pub fn run(args: &CliArgs, cmd: &ProvisionArgs) -> Result<()> {
    let resolved = common::load_config(args)?;
    let format = common::output_format(args, &resolved);
    let provider = common::build_provider(&resolved);

    let existed = provider.database_exists();
    if !existed {
        provider.create_database(cmd.collation.as_deref(), cmd.tries)?;
    }

    if args.quiet {
        return Ok(());
    }

    if matches!(format, OutputFormat::Json) {
        let payload = json!({
            "service": resolved.connection.service,
            "created": !existed,
        });
        let body = json_out::emit_json_value(&payload, common::json_pretty(&resolved))?;
        println!("{}", body);
    } else if existed {
        println!("Database {} already exists", resolved.connection.service);
    } else {
        println!("Database {} created", resolved.connection.service);
    }
    Ok(())
}
