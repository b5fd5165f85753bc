use anyhow::Result;
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand};
use std::env;
use std::io::{self, Write};

use growl::cross::{self, CrossOptions};
use growl::dispatch::Dispatcher;
use growl::output;
use growl::process::Invocation;
use growl::workspace::Workspace;
use growl::GrowlError;

const CROSS_HELP: &str = "\
growl cross -os [os] -arch [arch] -ldflags \"[ldflags]\" [-static] [-light] [-cgo] -out [output] -noconsole
growl cross -os [os] -a [arch] -ld \"[ldflags]\" [-s] [-l] [-c] -o [output] -nc
Default output is bin/$GOOS-$GOARCH
-noconsole (or -nc) disables the console on Windows to use only the GUI (adds the -H=windowsgui ldflag).
Use growl cross list to list available OS and CPU architectures.";

/// Growl - run the commands in growl.yaml and cross compile Go programs
#[derive(Parser)]
#[command(name = "growl", author, version, about, long_about = None)]
#[command(disable_help_subcommand = true, allow_external_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter growl.yaml in the current directory
    Init,

    /// List commands from growl.yaml
    #[command(visible_alias = "l")]
    List,

    /// Show this help, or the help of a subcommand
    #[command(visible_alias = "h")]
    Help {
        /// Subcommand to describe
        command: Option<String>,
    },

    /// Build for a target OS and arch (growl help cross for more info)
    #[command(visible_alias = "c", after_long_help = CROSS_HELP)]
    #[command(args_conflicts_with_subcommands = true)]
    Cross(CrossArgs),

    /// Run a command from growl.yaml: growl <name> [args...]
    #[command(external_subcommand)]
    Run(Vec<String>),
}

#[derive(Args)]
struct CrossArgs {
    #[command(subcommand)]
    action: Option<CrossAction>,

    /// Target operating system (GOOS)
    #[arg(long, default_value_t = cross::host_os())]
    os: String,

    /// Target architecture (GOARCH)
    #[arg(long, visible_alias = "a", default_value_t = cross::host_arch())]
    arch: String,

    /// Linker flags passed to go build
    #[arg(long, visible_alias = "ld", default_value = "", allow_hyphen_values = true)]
    ldflags: String,

    /// Output path (default bin/<os>-<arch>)
    #[arg(long, visible_alias = "o")]
    out: Option<String>,

    /// Link statically
    #[arg(long = "static", visible_alias = "s", default_value_t = false)]
    #[arg(num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    #[arg(action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    static_link: bool,

    /// Hide the console window on Windows
    #[arg(long, visible_alias = "nc", default_value_t = false)]
    #[arg(num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    #[arg(action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    noconsole: bool,

    /// Strip debug information
    #[arg(long, visible_alias = "l", default_value_t = false)]
    #[arg(num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    #[arg(action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    light: bool,

    /// Enable cgo (defaults to on when CGO_ENABLED=1; -cgo=false turns it off)
    #[arg(long, visible_alias = "c", default_value_t = cross::cgo_from_env())]
    #[arg(num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    #[arg(action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    cgo: bool,

    /// Arguments passed through to go build
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

#[derive(Subcommand)]
enum CrossAction {
    /// List available OS and CPU architectures
    List,
}

impl CrossArgs {
    /// `cross list`, also when `list` follows the flags as in `cross -os linux list`
    fn wants_catalog(&self) -> bool {
        matches!(self.action, Some(CrossAction::List))
            || self.args.first().is_some_and(|arg| arg == "list")
    }
}

impl From<CrossArgs> for CrossOptions {
    fn from(args: CrossArgs) -> Self {
        Self {
            os: args.os,
            arch: args.arch,
            ldflags: args.ldflags,
            out: args.out,
            static_link: args.static_link,
            light: args.light,
            cgo: args.cgo,
            noconsole: args.noconsole,
            args: args.args,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse_from(growl::cli::normalize_args(env::args()));

    if let Err(err) = run(cli) {
        output::print_error(&err.to_string());
        let code = err.downcast_ref::<GrowlError>().map_or(1, GrowlError::exit_code);
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> Result<()> {
    let current_dir = env::current_dir()?;
    let workspace = Workspace::new(current_dir);

    match cli.command {
        Some(Commands::Init) => {
            workspace.init()?;
            println!("Created {}", workspace.config_path().display());
        }
        Some(Commands::List) => {
            let config = workspace.load_config()?;
            output::print_commands(&config.commands)?;
        }
        Some(Commands::Help { command }) => show_help(command.as_deref())?,
        Some(Commands::Cross(args)) => {
            if args.wants_catalog() {
                output::write_catalog(&mut io::stdout().lock())?;
            } else {
                let opts = CrossOptions::from(args);
                output::write_cross_flags(&mut io::stdout().lock(), &opts)?;
                opts.build()?;
            }
        }
        Some(Commands::Run(args)) => run_named(&workspace, &args, &mut io::stdout().lock())?,
        None => go_run()?,
    }

    Ok(())
}

/// Dispatch `growl <name> [args...]`. An unknown name lists the commands to `listing`.
fn run_named<W: Write>(workspace: &Workspace, args: &[String], listing: &mut W) -> Result<()> {
    let config = workspace.load_config()?;
    let dispatcher = Dispatcher::new(&config)?;

    match dispatcher.run(args) {
        Err(err @ GrowlError::CommandNotFound(_)) => {
            output::write_commands(listing, &config.commands)?;
            Err(err.into())
        }
        other => Ok(other?),
    }
}

/// Bare `growl` runs the Go package in the current directory
fn go_run() -> Result<()> {
    let status = Invocation::new("go").args(["run", "."]).status()?;
    if !status.success() {
        return Err(GrowlError::CommandFailed {
            line: "go run .".to_string(),
            status,
        }
        .into());
    }
    Ok(())
}

fn show_help(command: Option<&str>) -> Result<()> {
    let mut app = Cli::command();
    app.build();
    let sub = command.and_then(|name| {
        app.get_subcommands_mut()
            .find(|sub| sub.get_name() == name || sub.get_all_aliases().any(|alias| alias == name))
            .map(|sub| sub.render_long_help())
    });

    match sub {
        Some(help) => println!("{}", help),
        None => app.print_long_help()?,
    }
    Ok(())
}
