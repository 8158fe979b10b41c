//! Main CLI application

use crate::error::Result;
use crate::store::ScriptStore;
use crate::ui::{Reporter, Verbosity};
use anyhow::Context as _;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use clap_complete::Shell;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Output format for the `list` command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFormat {
    Text,
    Yaml,
}

/// A parsed subcommand
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    List { format: ListFormat },
    Add { name: String, content: Option<String> },
    Run { name: String },
    Completions { shell: Shell },
}

/// Everything needed to carry out one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Explicit scripts directory, if `--scripts-dir` was given
    pub scripts_dir: Option<PathBuf>,
    pub verbosity: Verbosity,
    pub action: Action,
}

/// CLI application
pub struct App {
    /// The clap command
    command: Command,
}

impl App {
    /// Create a new app
    pub fn new() -> Self {
        App {
            command: build_command(),
        }
    }

    /// Run the application with the process arguments and standard streams
    pub fn run(mut self) -> anyhow::Result<()> {
        let matches = self.command.clone().get_matches();
        let invocation =
            parse_invocation(&matches).ok_or_else(|| anyhow::anyhow!("Unknown command"))?;

        if let Action::Completions { shell } = invocation.action {
            let name = self.command.get_name().to_string();
            clap_complete::generate(shell, &mut self.command, name, &mut io::stdout());
            return Ok(());
        }

        let mut stdin = io::stdin().lock();
        let mut stdout = io::stdout().lock();
        execute(&invocation, &mut stdin, &mut stdout)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the clap command
pub fn build_command() -> Command {
    Command::new("ronix")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Organize Lua scripts for use with an external injector")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("scripts-dir")
                .long("scripts-dir")
                .value_name("PATH")
                .help("Folder to store and read Lua scripts")
                .value_parser(value_parser!(PathBuf))
                .global(true),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print command output and errors")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("silent")
                .short('s')
                .long("silent")
                .help("Print no diagnostics")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("list").about("List available Lua scripts").arg(
                Arg::new("format")
                    .long("format")
                    .value_name("FORMAT")
                    .help("Output format")
                    .value_parser(["text", "yaml"])
                    .default_value("text"),
            ),
        )
        .subcommand(
            Command::new("add")
                .about("Create a new Lua script")
                .arg(
                    Arg::new("name")
                        .value_name("NAME")
                        .help("Name of the Lua script (without extension)")
                        .required(true),
                )
                .arg(
                    Arg::new("content")
                        .long("content")
                        .value_name("TEXT")
                        .help("Lua source code. If omitted, content is read from stdin")
                        .allow_hyphen_values(true),
                ),
        )
        .subcommand(
            Command::new("run")
                .about("Print the contents of a Lua script for injection")
                .arg(
                    Arg::new("name")
                        .value_name("NAME")
                        .help("Name of the Lua script to print")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate a shell completion script")
                .arg(
                    Arg::new("shell")
                        .value_name("SHELL")
                        .help("Shell to generate completions for")
                        .value_parser(value_parser!(Shell))
                        .required(true),
                ),
        )
}

/// Get verbosity level from matches
fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    if matches.get_flag("silent") {
        Verbosity::Silent
    } else if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}

/// Turn parsed arguments into an invocation
///
/// Returns `None` when no known subcommand was given. Global flags may
/// appear on either side of the subcommand, so they are read from the
/// subcommand's matches.
pub fn parse_invocation(matches: &ArgMatches) -> Option<Invocation> {
    let (name, sub_matches) = matches.subcommand()?;

    let action = match name {
        "list" => {
            let format = match sub_matches.get_one::<String>("format").map(String::as_str) {
                Some("yaml") => ListFormat::Yaml,
                _ => ListFormat::Text,
            };
            Action::List { format }
        }
        "add" => Action::Add {
            name: required_string(sub_matches, "name"),
            content: sub_matches.get_one::<String>("content").cloned(),
        },
        "run" => Action::Run {
            name: required_string(sub_matches, "name"),
        },
        "completions" => Action::Completions {
            shell: sub_matches
                .get_one::<Shell>("shell")
                .copied()
                .unwrap_or(Shell::Bash),
        },
        _ => return None,
    };

    Some(Invocation {
        scripts_dir: sub_matches.get_one::<PathBuf>("scripts-dir").cloned(),
        verbosity: get_verbosity(sub_matches),
        action,
    })
}

fn required_string(matches: &ArgMatches, id: &str) -> String {
    matches.get_one::<String>(id).cloned().unwrap_or_default()
}

/// Execute a store command, reading `add` content from `input` when needed
///
/// Default placeholder scripts are seeded before any command runs.
pub fn execute<R: Read, W: Write>(
    invocation: &Invocation,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<()> {
    let reporter = Reporter::new(invocation.verbosity);

    let store = ScriptStore::new(invocation.scripts_dir.clone())?;
    reporter.print_debug(&format!(
        "Using scripts directory: {}",
        store.scripts_dir().display()
    ));

    for script in store.seed_missing_defaults()? {
        reporter.print_info(&format!("Created default script: {}", script.name));
    }

    reporter.print_debug(&format!("Running command: {:?}", invocation.action));

    match &invocation.action {
        Action::List { format } => list(&store, *format, out)?,
        Action::Add { name, content } => {
            let content = match content {
                Some(content) => content.clone(),
                None => {
                    let mut buf = String::new();
                    input
                        .read_to_string(&mut buf)
                        .context("Failed to read script content from stdin")?;
                    buf
                }
            };
            add(&store, name, &content, out)?;
        }
        Action::Run { name } => print_script(&store, name, out)?,
        Action::Completions { .. } => {}
    }

    Ok(())
}

fn list<W: Write>(store: &ScriptStore, format: ListFormat, out: &mut W) -> Result<()> {
    let scripts = store.list_scripts()?;

    match format {
        ListFormat::Text => {
            for script in &scripts {
                writeln!(out, "- {} ({})", script.name, script.path.display())?;
            }
        }
        ListFormat::Yaml => {
            out.write_all(serde_yaml::to_string(&scripts)?.as_bytes())?;
        }
    }

    out.flush()?;
    Ok(())
}

fn add<W: Write>(store: &ScriptStore, name: &str, content: &str, out: &mut W) -> Result<()> {
    let script = store.add_script(name, content)?;
    writeln!(out, "Created script at {}", script.path.display())?;
    out.flush()?;
    Ok(())
}

fn print_script<W: Write>(store: &ScriptStore, name: &str, out: &mut W) -> Result<()> {
    let content = store.run_script(name)?;
    out.write_all(content.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Run the CLI application
pub fn run() -> anyhow::Result<()> {
    App::new().run()
}
