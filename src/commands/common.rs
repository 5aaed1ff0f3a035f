use anyhow::Result;

use crate::cli::CliArgs;
use crate::config::{self, CliOverrides, OutputFormat, ResolvedConfig};
use crate::db::provider::OracleDataProvider;
use crate::error::{AppError, ErrorKind};
use crate::output;

pub fn overrides_from_args(args: &CliArgs) -> CliOverrides {
    CliOverrides {
        config_path: args.config_path.clone(),
        env_file: args.env_file.clone(),
        profile: args.profile.clone(),
        server: args.server.clone(),
        port: args.port,
        service: args.service.clone(),
        username: args.username.clone(),
        password: args.password.clone(),
    }
}

pub fn load_config(args: &CliArgs) -> Result<ResolvedConfig> {
    let overrides = overrides_from_args(args);
    config::load_from_system(&overrides)
        .map_err(|err| AppError::new(ErrorKind::Config, err.to_string()).into())
}

/// Assemble the provider from resolved settings. The services receive it by
/// reference; there is no container, construction is explicit.
pub fn build_provider(resolved: &ResolvedConfig) -> OracleDataProvider {
    OracleDataProvider::new(resolved.connection.clone())
}

pub fn output_format(args: &CliArgs, resolved: &ResolvedConfig) -> OutputFormat {
    output::select_format(&args.output, &resolved.settings)
}

pub fn json_pretty(resolved: &ResolvedConfig) -> bool {
    resolved.settings.output.json_pretty
}
