//! lessonmark CLI - render lesson markup as HTML, text or a block dump

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use lessonmark::{Options, render, segment_blocks_with_options};

#[derive(Parser)]
#[command(name = "lessonmark")]
#[command(about = "Render lesson markup as HTML, plain text or a block dump")]
struct Cli {
    /// Input file (`-` or omitted reads stdin)
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Treat `{{kind payload}}` lines as ordinary text
    #[arg(long)]
    no_opaque: bool,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// HTML fragment
    Html,
    /// Plain terminal text
    Text,
    /// One debug line per block
    Blocks,
    /// Block and inline trees as JSON
    Json,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),

    #[cfg(feature = "serde")]
    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(not(feature = "serde"))]
    #[error("output format `{0}` needs the `serde` feature")]
    UnsupportedFormat(&'static str),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let input = read_input(cli.input.as_deref())?;
    let options = Options {
        opaque_blocks: !cli.no_opaque,
        ..Options::default()
    };

    let blocks = segment_blocks_with_options(&input, &options);
    log::info!("parsed {} blocks", blocks.len());

    let output = match cli.format {
        Format::Html => render::render_html(&blocks, &options, &render::OpaqueRegistry::new()),
        Format::Text => render::render_text(&blocks, &options),
        Format::Blocks => dump_blocks(&blocks),
        Format::Json => json::render(&blocks, &options)?,
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn read_input(path: Option<&std::path::Path>) -> Result<String, CliError> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.display().to_string(),
                source,
            })
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| CliError::Read {
                    path: "<stdin>".into(),
                    source,
                })?;
            Ok(buf)
        }
    }
}

fn dump_blocks(blocks: &[lessonmark::Block]) -> String {
    let mut out = String::new();
    for (i, block) in blocks.iter().enumerate() {
        out.push_str(&format!("{i:>4} {:<16} {block:?}\n", block.kind_name()));
    }
    out
}

#[cfg(feature = "serde")]
mod json {
    use lessonmark::{Block, InlineNode, InlineFormatter, Options};
    use serde::Serialize;

    use super::CliError;

    /// A block together with its formatted inline content.
    #[derive(Serialize)]
    struct Entry<'a> {
        block: &'a Block,
        #[serde(skip_serializing_if = "Option::is_none")]
        inline: Option<Vec<InlineNode>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        cells: Option<Vec<Vec<Vec<InlineNode>>>>,
    }

    pub(super) fn render(blocks: &[Block], options: &Options) -> Result<String, CliError> {
        let formatter = InlineFormatter::with_options(*options);
        let entries: Vec<Entry<'_>> = blocks
            .iter()
            .map(|block| Entry {
                block,
                inline: block.text().map(|text| formatter.format(text)),
                cells: match block {
                    Block::Table { rows, .. } => Some(
                        rows.iter()
                            .map(|row| row.iter().map(|cell| formatter.format(cell)).collect())
                            .collect(),
                    ),
                    _ => None,
                },
            })
            .collect();

        let mut out = serde_json::to_string_pretty(&entries)?;
        out.push('\n');
        Ok(out)
    }
}

#[cfg(not(feature = "serde"))]
mod json {
    use lessonmark::{Block, Options};

    use super::CliError;

    pub(super) fn render(_blocks: &[Block], _options: &Options) -> Result<String, CliError> {
        Err(CliError::UnsupportedFormat("json"))
    }
}
