mod common;
mod entities;
mod identity;
mod provision;
mod script;
mod status;

use anyhow::Result;

use crate::cli::{CliArgs, CommandKind};

pub fn dispatch(args: &CliArgs) -> Result<()> {
    match &args.command {
        CommandKind::Status => status::run(args),
        CommandKind::Students(cmd) => entities::run_students(args, cmd),
        CommandKind::Cities(cmd) => entities::run_cities(args, cmd),
        CommandKind::Countries(cmd) => entities::run_countries(args, cmd),
        CommandKind::Script(cmd) => script::run(args, cmd),
        CommandKind::Identity(cmd) => identity::run(args, cmd),
        CommandKind::Provision(cmd) => provision::run(args, cmd),
    }
}
