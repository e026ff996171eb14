//! Advice Markup CLI
//!
//! Usage:
//!   advice-markup [OPTIONS] [FILE]
//!
//! Options:
//!   -f, --format <FORMAT>  Output format: html, text or json
//!   -t, --theme <FILE>     Theme file for class names (TOML format)
//!   -l, --lint             Report markup that will be shown literally
//!   --transcript           Input is a JSON conversation
//!   -h, --help             Print help

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use advice_markup::chat::{
    decode, render_transcript, transcript_text, Conversation, TransactionStats,
};
use advice_markup::{
    lint, parse, read_input, render_text, render_with_config, Error, HtmlConfig, RenderConfig,
    Theme,
};

#[derive(Parser)]
#[command(name = "advice-markup")]
#[command(about = "Format finance-assistant replies as HTML or plain text")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// Theme file for class names (TOML format)
    #[arg(short, long)]
    theme: Option<PathBuf>,

    /// Leave out class attributes
    #[arg(long)]
    no_classes: bool,

    /// Put each element on its own indented line
    #[arg(short, long)]
    pretty: bool,

    /// Report markup that will be shown literally (to stderr)
    #[arg(short, long)]
    lint: bool,

    /// Input is a JSON conversation instead of a single reply
    #[arg(long)]
    transcript: bool,

    /// JSON transaction stats to summarize before the transcript
    #[arg(long, requires = "transcript")]
    stats: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Html,
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    match run(&cli) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: &Cli) -> Result<String, Error> {
    let theme = match &cli.theme {
        Some(path) => Theme::from_file(path)?,
        None => Theme::default(),
    };
    let config = RenderConfig::new()
        .with_theme(theme)
        .with_html(
            HtmlConfig::new()
                .with_classes(!cli.no_classes)
                .with_pretty_print(cli.pretty),
        )
        .with_lint(cli.lint);

    if cli.transcript {
        return run_transcript(cli, &config);
    }

    let source = read_source(cli)?;
    debug!(bytes = source.len(), "read input");

    if config.lint {
        report_lint(&source, display_name(cli));
    }

    match cli.format {
        OutputFormat::Html => Ok(render_with_config(&source, &config)),
        OutputFormat::Text => Ok(render_text(&parse(&source))),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&parse(&source))?),
    }
}

fn run_transcript(cli: &Cli, config: &RenderConfig) -> Result<String, Error> {
    let conversation = match &cli.input {
        Some(path) => Conversation::load(path)?,
        None => Conversation::from_json(&read_source(cli)?)?,
    };
    debug!(messages = conversation.len(), "loaded transcript");
    let stats = match &cli.stats {
        Some(path) => Some(decode::<TransactionStats>(&read_input(path)?)?),
        None => None,
    };

    if config.lint {
        for (index, message) in conversation.messages().iter().enumerate() {
            report_lint(message.content(), &format!("message #{}", index + 1));
        }
    }

    match cli.format {
        OutputFormat::Html => Ok(render_transcript(&conversation, stats.as_ref(), config)),
        OutputFormat::Text => Ok(transcript_text(&conversation, stats.as_ref())),
        OutputFormat::Json => Ok(conversation.to_json()?),
    }
}

fn read_source(cli: &Cli) -> Result<String, Error> {
    match &cli.input {
        Some(path) => read_input(path),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| Error::read("<stdin>", e))?;
            Ok(buffer)
        }
    }
}

fn display_name(cli: &Cli) -> &str {
    cli.input
        .as_ref()
        .and_then(|p| p.to_str())
        .unwrap_or("<stdin>")
}

fn report_lint(source: &str, name: &str) {
    let warnings = lint::check(source);
    if !warnings.is_empty() {
        warn!(count = warnings.len(), source = name, "markup will be shown literally");
    }
    for warning in &warnings {
        eprint!("{}", warning.format(source, name));
    }
}

fn print_intro() {
    println!(
        r#"Advice Markup - format finance-assistant replies

USAGE:
    advice-markup [OPTIONS] [FILE]
    echo '<reply>' | advice-markup

OPTIONS:
    -f, --format       html (default), text or json
    -t, --theme        Custom class names (TOML file)
    --no-classes       Plain tags without class attributes
    -p, --pretty       One element per line
    -l, --lint         Report unterminated or unsupported markers
    --transcript       Input is a JSON conversation [{{"role", "content"}}]
    --stats            Transaction stats JSON for the summary line
    -v, --verbose      More logging (repeat for more)
    -h, --help         Print help

MARKUP:
    # / ## / ###       Headings
    **bold**  *italic*
    - item  • item     Bullet list
    1. step            Numbered list (numbers are not kept)

QUICK START:
    echo '## Plan\n- save **20%**' | advice-markup --pretty"#
    );
}
