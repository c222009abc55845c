//! Dungeon CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use dungeon_content::{ContentConfig, ContentLoader, GameData};
use dungeon_records::DirectorySource;
use dungeon_runtime::{Repl, Session, SessionConfig};
use tracing_subscriber::EnvFilter;

/// CLI configuration parsed from arguments.
struct CliConfig {
    content: PathBuf,
    verbose: bool,
    check: bool,
    show_help: bool,
    show_version: bool,
    history: Option<usize>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            content: PathBuf::from("content"),
            verbose: false,
            check: false,
            show_help: false,
            show_version: false,
            history: None,
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-v" | "--verbose" => config.verbose = true,
            "--check" => config.check = true,
            "--content" => {
                i += 1;
                if i >= args.len() {
                    return Err("--content requires a directory".into());
                }
                config.content = PathBuf::from(&args[i]);
            }
            "--history" => {
                i += 1;
                if i >= args.len() {
                    return Err("--history requires a value".into());
                }
                config.history = Some(
                    args[i]
                        .parse()
                        .map_err(|_| format!("invalid --history value: {}", args[i]))?,
                );
            }
            arg => return Err(format!("unknown argument: {arg}").into()),
        }
        i += 1;
    }

    Ok(config)
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("dungeon {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(config.verbose);

    let source = DirectorySource::new(&config.content);
    let data = ContentLoader::new(source, ContentConfig::default()).load_all()?;

    if config.check {
        print_summary(&data);
        return Ok(());
    }

    let mut session_config = SessionConfig::default();
    if let Some(capacity) = config.history {
        session_config = session_config.with_history_capacity(capacity);
    }
    let session = Session::new(data, &session_config)?;
    let mut repl = Repl::new(session)?.with_prompt(session_config.prompt);
    repl.run()?;
    Ok(())
}

fn print_summary(data: &GameData) {
    println!("\x1b[1;36m=== Content ===\x1b[0m");
    println!("Items:        {}", data.item_blueprints().len());
    println!("Creatures:    {}", data.creature_presets().len());
    println!("Skills:       {}", data.skill_definitions().len());
    println!("Locations:    {}", data.location_presets().len());
    println!("Achievements: {}", data.achievements().len());
}

fn print_help() {
    println!(
        "\x1b[1mDungeon\x1b[0m - Text adventure content explorer

\x1b[1mUSAGE:\x1b[0m
    dungeon [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    --content <DIR>     Directory holding the game resources [default: content]
    --check             Load the content, print a summary and exit
    --history <N>       Number of commands kept by `history` [default: 20]
    -v, --verbose       Log every record loaded (overridden by RUST_LOG)
    -h, --help          Print help information
    -V, --version       Print version information"
    );
}
