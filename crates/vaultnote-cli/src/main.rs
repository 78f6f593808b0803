use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process,
};
use vaultnote_config::Config;
use vaultnote_engine::{
    Block, SerializeOptions, Serializer, parse_blocks, parse_markdown, render_json,
};

#[derive(Parser)]
#[command(name = "vaultnote")]
#[command(about = "Convert between Markdown notes and block editor documents")]
struct Cli {
    /// Config file to use instead of ~/.config/vaultnote/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse Markdown into a JSON block document
    Parse {
        /// Markdown file, or `-` for stdin
        input: PathBuf,

        /// Write the JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Render a JSON block document as Markdown
    Render {
        /// JSON file, or `-` for stdin
        input: PathBuf,
    },
    /// Parse Markdown and write it back out in canonical form
    Roundtrip {
        /// Markdown file, or `-` for stdin
        input: PathBuf,

        /// Fail if the canonical form does not parse back to the same blocks
        #[arg(long)]
        check: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = load_config(cli.config.as_deref())?;
    let serializer = Serializer::new(SerializeOptions {
        image_placeholder: config.converter.image_placeholder,
    });

    match cli.command {
        Command::Parse { input, output } => {
            let markdown = read_input(&input)?;
            let json = parse_markdown(&markdown)
                .to_json_pretty()
                .context("Failed to encode block document")?;
            match output {
                Some(path) => fs::write(&path, format!("{json}\n"))
                    .with_context(|| format!("Failed to write {}", path.display()))?,
                None => println!("{json}"),
            }
        }
        Command::Render { input } => {
            let json = read_input(&input)?;
            let markdown = render_json(&json, &serializer)
                .with_context(|| format!("Failed to read block document {}", input.display()))?;
            write_stdout(&markdown)?;
        }
        Command::Roundtrip { input, check } => {
            let markdown = read_input(&input)?;
            let blocks = parse_blocks(&markdown);
            let canonical = serializer.serialize_blocks(&blocks);
            write_stdout(&canonical)?;
            if check && !reparses_to(&canonical, &blocks) {
                eprintln!(
                    "Error: canonical form of {} does not parse back to the same blocks",
                    input.display()
                );
                process::exit(1);
            }
        }
    }

    Ok(())
}

/// Loads the config from `path`, or the default location. No file means defaults.
fn load_config(path: Option<&Path>) -> Result<Config> {
    let loaded = match path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
    .context("Failed to load config file")?;

    if loaded.is_none() {
        log::debug!(
            "no config file found, using defaults (looked for {})",
            path.map_or_else(Config::config_path, Path::to_path_buf)
                .display()
        );
    }
    Ok(loaded.unwrap_or_default())
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn write_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Whether `canonical` parses back to exactly `blocks`.
fn reparses_to(canonical: &str, blocks: &[Block]) -> bool {
    let reparsed = parse_blocks(canonical);
    if reparsed != blocks {
        log::debug!(
            "canonical form parsed to {} blocks, expected {}",
            reparsed.len(),
            blocks.len()
        );
        return false;
    }
    true
}
