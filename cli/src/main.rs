//! snapcli: a small snapshot-tool frontend built on `cmdparse-core`.
//!
//! Wires the base command set (`snap`, `restore`, `list`, `show`) and the
//! base `--help`/`--version` options, then hands the raw argument vector to
//! the engine. Help and version text are rendered from the registered
//! descriptors, so the tables below are the single source of truth.

use std::process::ExitCode;

use cmdparse_core::{ArgKind, CommandError, CommandSpec, Context, OptionSpec};
use tracing::debug;

const NAME: &str = "snapcli";
const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> ExitCode {
    let mut args: Vec<String> = std::env::args().collect();

    let mut ctx = Context::new(NAME, true);
    ctx.push_commands(&commands());
    ctx.push_options(&base_options());

    match ctx.extract_command(&mut args) {
        Ok(command) => match command.run(&args) {
            Some(0) => ExitCode::SUCCESS,
            Some(status) => ExitCode::from(u8::try_from(status).unwrap_or(1)),
            None => {
                eprintln!("{NAME}: command {:?} is not implemented yet", command.name);
                ExitCode::FAILURE
            }
        },
        Err(CommandError::Missing) => run_base(&ctx, &mut args),
        Err(CommandError::Unknown(_)) => {
            print_help(&ctx);
            ExitCode::FAILURE
        }
    }
}

fn commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec::new("snap", "Create a snapshot of the given paths").with_handler(snap),
        CommandSpec::new("restore", "Restore a snapshot"),
        CommandSpec::new("list", "List existing snapshots"),
        CommandSpec::new("show", "Show one snapshot in detail"),
    ]
}

fn base_options() -> Vec<OptionSpec> {
    vec![
        OptionSpec::flag("help", Some('h'), "Show this help"),
        OptionSpec::flag("version", Some('V'), "Show version information"),
    ]
}

/// The command-less invocation: only the base options apply.
fn run_base(ctx: &Context, args: &mut Vec<String>) -> ExitCode {
    let Ok(values) = ctx.parse_options(args) else {
        print_help(ctx);
        return ExitCode::FAILURE;
    };

    if values.get_bool("help") == Some(true) {
        print_help(ctx);
    } else if values.get_bool("version") == Some(true) {
        println!("{NAME} {VERSION}");
    }
    ExitCode::SUCCESS
}

/// Handler for `snapcli snap`: parses its own options through a fresh
/// context, then reports what a real implementation would write.
fn snap(args: &[String]) -> i32 {
    let mut ctx = Context::new("snapcli snap", true);
    ctx.push_options(&[
        OptionSpec::with_value("output", Some('o'), "Destination directory", ArgKind::String)
            .with_arg_name("DIR"),
        OptionSpec::flag("dry-run", None, "Resolve everything but write nothing"),
        OptionSpec::flag("verbose", Some('v'), "Enable verbose output"),
    ]);

    let mut args = args.to_vec();
    let Ok(values) = ctx.parse_options(&mut args) else {
        return 1;
    };

    let sources = args.get(1..).unwrap_or(&[]);
    if sources.is_empty() {
        eprintln!("{}: no source paths given", ctx.name());
        return 1;
    }

    let output = values.get_str("output").unwrap_or("./snapshots");
    debug!(output, sources = sources.len(), "snapshot requested");

    if values.get_bool("dry-run") == Some(true) {
        println!("would snapshot {} path(s) into {output}", sources.len());
    } else {
        // Demo frontend: the snapshot domain logic lives elsewhere.
        println!("snapshot of {} path(s) into {output}", sources.len());
        for source in sources {
            if values.get_bool("verbose") == Some(true) {
                println!("  {source}");
            }
        }
    }
    0
}

/// Renders help from the registered descriptors.
fn print_help(ctx: &Context) {
    println!("Usage: {NAME} [OPTIONS] <COMMAND> [ARGS]");
    println!();
    println!("Commands:");
    for command in ctx.commands() {
        println!("  {:<10} {}", command.name, command.tip);
    }
    println!();
    println!("Options:");
    for option in ctx.options() {
        let short = match option.short {
            Some(c) => format!("-{c}, "),
            None => "    ".to_string(),
        };
        let long = match &option.arg_name {
            Some(arg) => format!("--{} <{arg}>", option.long),
            None => format!("--{}", option.long),
        };
        println!("  {short}{long:<18} {}", option.tip);
    }
}
