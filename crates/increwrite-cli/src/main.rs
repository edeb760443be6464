#![deny(unsafe_code)]

//! increwrite CLI — rewrite `#include` paths to match the tree layout.

use std::ffi::OsString;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Parser};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use increwrite_config::{ConfigError, ReplacerConfig, parse_subfolder_list};
use increwrite_core::RunReport;

/// Rewrite `#include` directives in `.c`/`.h` files so they reference each
/// header's actual path relative to the folder.
#[derive(Parser, Debug)]
#[command(
    name = "increwrite",
    version = increwrite_core::build_info::version_string(),
    disable_version_flag = true,
    about,
    long_about = None,
    arg(
        Arg::new("version")
            .short('v')
            .long("version")
            .action(ArgAction::Version)
            .help("Show version information and exit.")
    ),
    after_help = "`-only` is accepted in place of `--only`. If no subfolders are \
                  specified, all files in the folder are processed."
)]
struct Cli {
    /// Folder containing the C sources. Prompted for when omitted.
    folder: Option<PathBuf>,

    /// Only rewrite #include paths in files under these subfolders.
    #[arg(
        long = "only",
        value_name = "SUBFOLDERS",
        num_args = 1,
        action = ArgAction::Append,
        allow_hyphen_values = true
    )]
    only: Option<Vec<String>>,
}

/// Flags recognised in the folder position.
const LEADING_FLAGS: [&str; 4] = ["-h", "--help", "-v", "--version"];

/// Rewrite the raw argument list into something clap parses directly.
///
/// The first argument is either a help/version flag or the folder, even
/// when it starts with `-`. Everything after `-only` is a subfolder name.
/// Other arguments after the folder are returned separately so the caller
/// can report them. Arguments need not be valid UTF-8.
fn normalize_args(raw: Vec<OsString>) -> (Vec<OsString>, Vec<OsString>) {
    let mut raw = raw.into_iter();
    let mut argv: Vec<OsString> = raw.next().into_iter().collect();
    let mut ignored = Vec::new();

    if let Some(first) = raw.next() {
        let dashed = first.as_encoded_bytes().starts_with(b"-");
        if dashed && !LEADING_FLAGS.iter().any(|flag| first == *flag) {
            argv.push(OsString::from("--"));
        }
        argv.push(first);
    }

    let rest: Vec<OsString> = raw.collect();
    match rest.iter().position(|a| a == "-only" || a == "--only") {
        Some(idx) if idx + 1 < rest.len() => {
            ignored.extend_from_slice(&rest[..idx]);
            argv.extend(rest[idx + 1..].iter().map(|name| {
                let mut flag = OsString::from("--only=");
                flag.push(name);
                flag
            }));
        }
        _ => ignored = rest,
    }

    (argv, ignored)
}

/// Print `question` and read one trimmed line of input.
///
/// End of input reads as an empty answer.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    write!(output, "{question}")?;
    output.flush()?;
    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    Ok(line.trim().to_string())
}

/// Resolve the run configuration (prompting where needed) and process it.
fn execute<R: BufRead, W: Write>(
    cli: Cli,
    ask_subfolders: bool,
    input: &mut R,
    output: &mut W,
) -> Result<RunReport> {
    let interactive = cli.folder.is_none();
    let folder = match cli.folder {
        Some(folder) => folder,
        None => PathBuf::from(prompt(input, output, "Enter the folder path: ")?),
    };

    if !folder.is_dir() {
        return Err(ConfigError::NotADirectory(folder).into());
    }

    let only = if interactive || ask_subfolders {
        let answer = prompt(
            input,
            output,
            "Specify subfolders (comma separated) or leave blank for all: ",
        )?;
        parse_subfolder_list(&answer)
    } else {
        cli.only
    };

    let config = ReplacerConfig::load(&folder, only)?;
    Ok(increwrite_core::process_folder(&config)?)
}

fn main() -> Result<()> {
    let raw: Vec<OsString> = std::env::args_os().collect();
    // `increwrite <folder>` alone asks for subfolders, like the no-argument form.
    let folder_only = raw.len() == 2;
    let (argv, ignored) = normalize_args(raw);
    let cli = Cli::parse_from(argv);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
    debug!(build = %increwrite_core::build_info::BUILD, "Starting");

    for arg in &ignored {
        warn!(arg = %arg.to_string_lossy(), "Ignoring unrecognized argument");
    }

    let stdin = io::stdin();
    let ask_subfolders = folder_only && stdin.is_terminal();
    let report = execute(cli, ask_subfolders, &mut stdin.lock(), &mut io::stdout())?;
    println!("{report}");
    Ok(())
}
