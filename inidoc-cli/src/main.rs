//! Command-line interface for inidoc
//! This binary parses ini files and prints the resulting document in different formats.
//!
//! Usage:
//!   inidoc [--config `<file>`] [--log-level `<level>`] `<command>`
//!   inidoc parse `<path>` [--format `<format>`] [--name `<name>`]   - Parse a file (`-` for stdin)
//!   inidoc tokens `<path>`                                      - Dump the token stream
//!   inidoc demo [--format `<format>`]                           - Parse the built-in sample
//!   inidoc list-formats                                       - List available output formats
mod logging;

use anyhow::{bail, Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use inidoc::ini::formats::default_registry;
use inidoc::ini::loader::DocumentLoader;
use inidoc::{Document, Token};
use inidoc_config::{InidocConfig, Loader};
use log::LevelFilter;
use std::io::{self, Read};
use std::path::PathBuf;

const DEMO_SOURCE: &str = include_str!("demo.ini");

fn main() {
    let matches = cli().get_matches();
    if let Err(err) = run(&matches) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn cli() -> Command {
    Command::new("inidoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse ini files into structured documents")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .help("off, error, warn, info, debug or trace (overrides the configuration)")
                .value_parser(value_parser!(LevelFilter)),
        )
        .subcommand(parsing_args(
            Command::new("parse")
                .about("Parse a file and print the document")
                .arg(path_arg())
                .arg(format_arg())
                .arg(
                    Arg::new("name")
                        .long("name")
                        .short('n')
                        .help("Document name (defaults to the file stem)"),
                ),
        ))
        .subcommand(parsing_args(
            Command::new("tokens")
                .about("Print the token stream of a file")
                .arg(path_arg()),
        ))
        .subcommand(parsing_args(
            Command::new("demo")
                .about("Parse the built-in sample document")
                .arg(format_arg()),
        ))
        .subcommand(Command::new("list-formats").about("List available output formats"))
}

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the ini file, or - for standard input")
        .required(true)
        .index(1)
}

fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .short('f')
        .help("Output format (see list-formats; default from configuration)")
}

fn parsing_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("keep-empty-sections")
                .long("keep-empty-sections")
                .help("Keep headers that are followed directly by another header")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("skip-stray")
                .long("skip-stray")
                .help("Skip top-level characters that start neither a key nor a section")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("reject-dangling-keys")
                .long("reject-dangling-keys")
                .help("Fail on keys that never receive a value")
                .action(ArgAction::SetTrue),
        )
}

fn run(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;
    let level = matches
        .get_one::<LevelFilter>("log-level")
        .copied()
        .unwrap_or(config.logging.level);
    logging::init(level);

    match matches.subcommand() {
        Some(("parse", sub)) => handle_parse_command(sub, &config),
        Some(("tokens", sub)) => handle_tokens_command(sub, &config),
        Some(("demo", _)) => handle_demo_command(&config),
        Some(("list-formats", _)) => {
            handle_list_formats_command();
            Ok(())
        }
        Some((other, _)) => bail!("unknown command '{other}'"),
        None => bail!("a command is required"),
    }
}

/// Defaults, then the `--config` file, then subcommand flags.
fn load_config(matches: &ArgMatches) -> Result<InidocConfig> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        loader = loader.with_file(path);
    }
    if let Some((_, sub)) = matches.subcommand() {
        if flag(sub, "keep-empty-sections") {
            loader = loader.set_override("parsing.keep_empty_sections", true)?;
        }
        if flag(sub, "skip-stray") {
            loader = loader.set_override("parsing.stray_characters", "skip")?;
        }
        if flag(sub, "reject-dangling-keys") {
            loader = loader.set_override("parsing.dangling_keys", "reject")?;
        }
        if let Ok(Some(format)) = sub.try_get_one::<String>("format") {
            loader = loader.set_override("output.format", format.clone())?;
        }
    }
    loader.build().context("invalid configuration")
}

/// Whether a flag was given; false for flags the subcommand does not define.
fn flag(matches: &ArgMatches, id: &str) -> bool {
    matches!(matches.try_get_one::<bool>(id), Ok(Some(true)))
}

fn read_source(path: &str) -> Result<DocumentLoader> {
    if path == "-" {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("cannot read standard input")?;
        return Ok(DocumentLoader::from_string("stdin", source));
    }
    Ok(DocumentLoader::from_path(path)?)
}

fn print_document(doc: &Document, format: &str) -> Result<()> {
    let registry = default_registry();
    if !registry.has(format) {
        bail!(
            "unknown format '{format}' (available: {})",
            registry.list_formats().join(", ")
        );
    }
    let output = registry.serialize(doc, format)?;
    if output.ends_with('\n') {
        print!("{output}");
    } else {
        println!("{output}");
    }
    Ok(())
}

/// Handle the parse command
fn handle_parse_command(matches: &ArgMatches, config: &InidocConfig) -> Result<()> {
    let path = matches
        .get_one::<String>("path")
        .context("a path is required")?;
    let mut loader = read_source(path)?;
    if let Some(name) = matches.get_one::<String>("name") {
        loader = loader.named(name.clone());
    }
    let doc = loader
        .parse_with(&config.parsing)
        .with_context(|| format!("failed to parse {path}"))?;
    print_document(&doc, &config.output.format)
}

/// Handle the tokens command
fn handle_tokens_command(matches: &ArgMatches, config: &InidocConfig) -> Result<()> {
    let path = matches
        .get_one::<String>("path")
        .context("a path is required")?;
    let loader = read_source(path)?;
    for (token, span) in loader.tokenize(&config.parsing) {
        println!("{:>5}..{:<5} {:<13} {}", span.start, span.end, token.kind(), token);
        if let Token::Error(err) = token {
            return Err(err).with_context(|| format!("failed to tokenize {path}"));
        }
    }
    Ok(())
}

/// Handle the demo command
fn handle_demo_command(config: &InidocConfig) -> Result<()> {
    let doc = DocumentLoader::from_string("test", DEMO_SOURCE).parse_with(&config.parsing)?;
    print_document(&doc, &config.output.format)
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = default_registry();
    println!("Available output formats:\n");

    for name in registry.list_formats() {
        println!("  {name}");
        if let Some(formatter) = registry.get(&name) {
            println!("    {}", formatter.description());
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        cli().debug_assert();
    }

    #[test]
    fn flags_become_overrides() {
        let matches = cli()
            .try_get_matches_from(["inidoc", "parse", "x.ini", "--skip-stray", "-f", "yaml"])
            .unwrap();
        let config = load_config(&matches).unwrap();
        assert_eq!(
            config.parsing.stray_characters,
            inidoc::StrayCharacters::Skip
        );
        assert!(!config.parsing.keep_empty_sections);
        assert_eq!(config.output.format, "yaml");
    }

    #[test]
    fn flags_missing_from_a_subcommand_are_false() {
        let matches = cli()
            .try_get_matches_from(["inidoc", "list-formats"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert!(!flag(sub, "skip-stray"));
    }

    #[test]
    fn demo_source_parses() {
        let doc = DocumentLoader::from_string("test", DEMO_SOURCE)
            .parse()
            .unwrap();
        assert_eq!(doc.section_count(), 3);
        assert_eq!(doc.get("address", "zip"), Some("90210"));
    }
}
