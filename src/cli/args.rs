use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};

#[derive(Debug, Clone)]
pub struct OutputFlags {
    pub json: bool,
    pub pretty: bool,
}

#[derive(Debug, Clone)]
pub struct CliArgs {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
    pub profile: Option<String>,
    pub server: Option<String>,
    pub port: Option<u16>,
    pub service: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub output: OutputFlags,
    pub verbose: u8,
    pub quiet: bool,
    pub command: CommandKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandKind {
    Status,
    Students(EntityArgs),
    Cities(EntityArgs),
    Countries(EntityArgs),
    Script(ScriptArgs),
    Identity(IdentityArgs),
    Provision(ProvisionArgs),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntityArgs {
    pub id: Option<i64>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScriptArgs {
    pub sql: Option<String>,
    pub file: Option<PathBuf>,
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityArgs {
    pub table: String,
    pub at_least: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionArgs {
    pub collation: Option<String>,
    pub tries: u32,
}

pub fn build_cli() -> Command {
    let mut cmd = Command::new("plantdb")
        .about("Oracle data-access CLI: entity queries, script batches, identity sequences")
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(true)
        .subcommand_required(true)
        .subcommand_value_name("COMMAND");

    cmd = add_global_args(cmd);

    cmd = cmd.subcommand(Command::new("status").about("Connectivity smoke test"));
    cmd = cmd.subcommand(entity_command("students", "List students or fetch one by id"));
    cmd = cmd.subcommand(entity_command("cities", "List cities or fetch one by id"));
    cmd = cmd.subcommand(entity_command("countries", "List countries or fetch one by id"));
    cmd = cmd.subcommand(command_script());
    cmd = cmd.subcommand(command_identity());
    cmd = cmd.subcommand(command_provision());

    cmd
}

pub fn parse_args() -> CliArgs {
    let matches = build_cli().get_matches();
    parse_matches(&matches)
}

fn add_global_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("config")
            .long("config")
            .value_name("PATH")
            .value_hint(ValueHint::FilePath)
            .global(true)
            .help("Override config file location"),
    )
    .arg(
        Arg::new("env-file")
            .long("env-file")
            .value_name("PATH")
            .value_hint(ValueHint::FilePath)
            .global(true)
            .help("Load environment variables from file (default: .env)"),
    )
    .arg(
        Arg::new("profile")
            .long("profile")
            .value_name("NAME")
            .global(true)
            .help("Select connection profile"),
    )
    .arg(
        Arg::new("server")
            .long("server")
            .value_name("HOST")
            .global(true)
            .help("Database listener hostname"),
    )
    .arg(
        Arg::new("port")
            .long("port")
            .value_name("PORT")
            .value_parser(clap::value_parser!(u16))
            .global(true)
            .help("Database listener port (default: 1521)"),
    )
    .arg(
        Arg::new("service")
            .long("service")
            .value_name("NAME")
            .global(true)
            .help("Service name holding the schema (default: orcl)"),
    )
    .arg(
        Arg::new("user")
            .long("user")
            .value_name("USER")
            .global(true)
            .help("Database username"),
    )
    .arg(
        Arg::new("password")
            .long("password")
            .value_name("PASS")
            .global(true)
            .help("Database password"),
    )
    .arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .global(true)
            .help("Output as JSON"),
    )
    .arg(
        Arg::new("pretty")
            .long("pretty")
            .action(ArgAction::SetTrue)
            .global(true)
            .help("Force pretty-printed table output"),
    )
    .arg(
        Arg::new("verbose")
            .short('v')
            .long("verbose")
            .action(ArgAction::Count)
            .global(true)
            .help("Enable debug logging"),
    )
    .arg(
        Arg::new("quiet")
            .short('q')
            .long("quiet")
            .action(ArgAction::SetTrue)
            .global(true)
            .help("Suppress non-error output"),
    )
}

fn entity_command(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .arg(
            Arg::new("id")
                .long("id")
                .value_name("ID")
                .value_parser(clap::value_parser!(i64))
                .help("Fetch a single row by primary key"),
        )
        .arg(
            Arg::new("page")
                .long("page")
                .value_name("INDEX")
                .value_parser(clap::value_parser!(usize))
                .help("Zero-based page index"),
        )
        .arg(
            Arg::new("page-size")
                .long("page-size")
                .value_name("ROWS")
                .value_parser(clap::value_parser!(usize))
                .help("Rows per page"),
        )
}

fn command_script() -> Command {
    Command::new("script")
        .about("Execute a multi-statement SQL script (GO batch separators)")
        .arg(Arg::new("sql").value_name("SQL").help("Script text"))
        .arg(
            Arg::new("file")
                .long("file")
                .value_name("PATH")
                .value_hint(ValueHint::FilePath)
                .help("Read the script from a file"),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .action(ArgAction::SetTrue)
                .help("Show the split commands without executing them"),
        )
}

fn command_identity() -> Command {
    Command::new("identity")
        .about("Read or raise a table's identity sequence")
        .arg(
            Arg::new("table")
                .value_name("TABLE")
                .required(true)
                .help("Entity table: student, city, or country"),
        )
        .arg(
            Arg::new("at-least")
                .long("at-least")
                .value_name("VALUE")
                .value_parser(clap::value_parser!(i64))
                .help("Raise the identity so future values start at or above VALUE"),
        )
}

fn command_provision() -> Command {
    Command::new("provision")
        .about("Create the database if it does not exist")
        .arg(
            Arg::new("collation")
                .long("collation")
                .value_name("NAME")
                .help("Collation clause for the create statement"),
        )
        .arg(
            Arg::new("tries")
                .long("tries")
                .value_name("COUNT")
                .value_parser(clap::value_parser!(u32))
                .default_value("10")
                .help("Connection attempts after creation (0 skips the check)"),
        )
}

fn parse_matches(matches: &ArgMatches) -> CliArgs {
    let (name, sub) = matches
        .subcommand()
        .expect("subcommand required by parser configuration");

    let command = match name {
        "status" => CommandKind::Status,
        "students" => CommandKind::Students(parse_entity(sub)),
        "cities" => CommandKind::Cities(parse_entity(sub)),
        "countries" => CommandKind::Countries(parse_entity(sub)),
        "script" => CommandKind::Script(ScriptArgs {
            sql: sub.get_one::<String>("sql").cloned(),
            file: sub.get_one::<String>("file").map(PathBuf::from),
            dry_run: sub.get_flag("dry-run"),
        }),
        "identity" => CommandKind::Identity(IdentityArgs {
            table: sub
                .get_one::<String>("table")
                .cloned()
                .unwrap_or_default(),
            at_least: sub.get_one::<i64>("at-least").copied(),
        }),
        "provision" => CommandKind::Provision(ProvisionArgs {
            collation: sub.get_one::<String>("collation").cloned(),
            tries: sub.get_one::<u32>("tries").copied().unwrap_or(10),
        }),
        other => unreachable!("unknown subcommand: {}", other),
    };

    CliArgs {
        config_path: matches.get_one::<String>("config").map(PathBuf::from),
        env_file: matches.get_one::<String>("env-file").map(PathBuf::from),
        profile: matches.get_one::<String>("profile").cloned(),
        server: matches.get_one::<String>("server").cloned(),
        port: matches.get_one::<u16>("port").copied(),
        service: matches.get_one::<String>("service").cloned(),
        username: matches.get_one::<String>("user").cloned(),
        password: matches.get_one::<String>("password").cloned(),
        output: OutputFlags {
            json: matches.get_flag("json"),
            pretty: matches.get_flag("pretty"),
        },
        verbose: matches.get_count("verbose"),
        quiet: matches.get_flag("quiet"),
        command,
    }
}

fn parse_entity(sub: &ArgMatches) -> EntityArgs {
    EntityArgs {
        id: sub.get_one::<i64>("id").copied(),
        page: sub.get_one::<usize>("page").copied(),
        page_size: sub.get_one::<usize>("page-size").copied(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        let matches = build_cli()
            .try_get_matches_from(args)
            .expect("arguments should parse");
        parse_matches(&matches)
    }

    #[test]
    fn parses_entity_paging_flags() {
        let args = parse(&["plantdb", "students", "--page", "2", "--page-size", "25"]);
        match args.command {
            CommandKind::Students(entity) => {
                assert_eq!(entity.page, Some(2));
                assert_eq!(entity.page_size, Some(25));
                assert_eq!(entity.id, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_script_dry_run() {
        let args = parse(&["plantdb", "script", "--file", "seed.sql", "--dry-run"]);
        match args.command {
            CommandKind::Script(script) => {
                assert_eq!(script.file.as_deref(), Some(std::path::Path::new("seed.sql")));
                assert!(script.dry_run);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_connection_flags_apply_anywhere() {
        let args = parse(&[
            "plantdb", "status", "--server", "db", "--port", "1529", "--service", "plant",
        ]);
        assert_eq!(args.server.as_deref(), Some("db"));
        assert_eq!(args.port, Some(1529));
        assert_eq!(args.service.as_deref(), Some("plant"));
    }

    #[test]
    fn provision_tries_defaults_to_ten() {
        let args = parse(&["plantdb", "provision"]);
        match args.command {
            CommandKind::Provision(provision) => assert_eq!(provision.tries, 10),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
