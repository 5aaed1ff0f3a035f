mod args;

pub use args::{
    build_cli, CliArgs, CommandKind, EntityArgs, IdentityArgs, OutputFlags, ProvisionArgs,
    ScriptArgs,
};

pub fn parse() -> CliArgs {
    args::parse_args()
}
