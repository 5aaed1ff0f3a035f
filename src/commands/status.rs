use std::time::Instant;

use anyhow::Result;
use serde_json::json;

use crate::cli::CliArgs;
use crate::commands::common;
use crate::config::OutputFormat;
use crate::db::connection;
use crate::db::provider::DataProvider;
use crate::output::{json as json_out, table};

pub fn run(args: &CliArgs) -> Result<()> {
    let resolved = common::load_config(args)?;
    let format = common::output_format(args, &resolved);
    let provider = common::build_provider(&resolved);

    let started = Instant::now();
    let reachable = provider.database_exists();
    let latency_ms = started.elapsed().as_millis();
    let descriptor = connection::connect_descriptor(&resolved.connection);

    if matches!(format, OutputFormat::Json) {
        let payload = json!({
            "status": if reachable { "ok" } else { "unreachable" },
            "latencyMs": latency_ms,
            "profile": resolved.profile_name,
            "server": resolved.connection.server,
            "port": resolved.connection.port,
            "service": resolved.connection.service,
            "descriptor": descriptor,
        });
        let body = json_out::emit_json_value(&payload, common::json_pretty(&resolved))?;
        if !args.quiet {
            println!("{}", body);
        }
        return Ok(());
    }

    if args.quiet {
        return Ok(());
    }

    let rows = vec![
        (
            "Status".to_string(),
            if reachable { "ok" } else { "unreachable" }.to_string(),
        ),
        ("LatencyMs".to_string(), latency_ms.to_string()),
        ("Profile".to_string(), resolved.profile_name.clone()),
        ("Server".to_string(), resolved.connection.server.clone()),
        ("Port".to_string(), resolved.connection.port.to_string()),
        ("Service".to_string(), resolved.connection.service.clone()),
        ("Descriptor".to_string(), descriptor),
    ];
    println!("{}", table::render_key_values(&rows));

    Ok(())
}
