//! tcss-docgen — build Textual CSS documentation lookup tables.
//!
//! Supports two modes:
//!
//! - **stdin mode**: `tcss-docgen < docs/styles/display.md` prints the record
//!   extracted from one property document as JSON
//! - **tree mode**: `tcss-docgen --docs textual/docs -o generated -f rust`
//!
//! `--refresh --checkout <dir>` updates (or creates) a sparse checkout of the
//! documentation first. A failed refresh exits with status 3.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use tcss_docgen::catalog::{PropertyCatalog, TypeCatalog};
use tcss_docgen::config::{DocsConfig, DEFAULT_REPO_URL};
use tcss_docgen::links::LinkResolver;
use tcss_docgen::parser::PropertyDocParser;
use tcss_docgen::refresh::{self, RefreshConfig, RefreshError};
use tcss_docgen::{pipeline, render};
use tracing::{error, info, warn, Level};

/// Exit status for a failed documentation refresh.
const EXIT_REFRESH_FAILED: u8 = 3;

#[derive(Parser)]
#[command(
    name = "tcss-docgen",
    about = "Extract Textual CSS property documentation into static lookup tables"
)]
struct Cli {
    /// Documentation root containing the property and type directories.
    /// If omitted, a single property document is read from stdin.
    #[arg(long)]
    docs: Option<PathBuf>,

    /// Output directory (required with --docs)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: rust (default) or json
    #[arg(short = 'f', long, default_value = "rust")]
    format: String,

    /// Base URL of the published documentation
    #[arg(long)]
    base_url: Option<String>,

    /// Property directory under the documentation root
    #[arg(long, default_value = "styles")]
    styles_dir: String,

    /// Type directory under the documentation root
    #[arg(long, default_value = "css_types")]
    types_dir: String,

    /// Clone or update the documentation checkout before extracting
    #[arg(long, requires = "checkout")]
    refresh: bool,

    /// Local checkout used by --refresh; docs default to <checkout>/docs
    #[arg(long)]
    checkout: Option<PathBuf>,

    /// Repository cloned by --refresh
    #[arg(long, default_value = DEFAULT_REPO_URL)]
    repo: String,

    /// More log output (repeatable)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            if e.downcast_ref::<RefreshError>().is_some() {
                ExitCode::from(EXIT_REFRESH_FAILED)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = DocsConfig {
        properties_dir: cli.styles_dir.clone(),
        types_dir: cli.types_dir.clone(),
        ..DocsConfig::default()
    };
    if let Some(ref url) = cli.base_url {
        config.set_base_url(url);
    }

    let docs_root = if cli.refresh {
        let checkout = cli
            .checkout
            .as_deref()
            .context("--checkout is required with --refresh")?;
        let mut refresh_config = RefreshConfig::new(cli.repo.clone(), checkout);
        refresh_config.sparse_paths = vec![
            format!("docs/{}", config.properties_dir),
            format!("docs/{}", config.types_dir),
        ];
        refresh::refresh(&refresh_config)?;
        Some(
            cli.docs
                .clone()
                .unwrap_or_else(|| refresh::docs_root(checkout)),
        )
    } else {
        cli.docs.clone()
    };

    match docs_root {
        Some(root) => {
            config.docs_root = root;
            tree_mode(cli, &config)
        }
        None => stdin_mode(&config),
    }
}

/// stdin mode: extract one document and print the record as JSON.
///
/// Catalogs are empty here, so every relative link degrades to its text.
fn stdin_mode(config: &DocsConfig) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let types = TypeCatalog::default();
    let properties = PropertyCatalog::default();
    let resolver = LinkResolver::new(&types, &properties, config);
    let doc = PropertyDocParser::new(&resolver, config).parse("stdin", &input);

    println!(
        "{}",
        serde_json::to_string_pretty(&doc).context("failed to serialize record")?
    );
    Ok(())
}

/// tree mode: scan the documentation root and write one artifact.
fn tree_mode(cli: &Cli, config: &DocsConfig) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when --docs is given")?;
    let renderer = render::create_renderer(&cli.format)?;

    if !config.docs_root.is_dir() {
        warn!(
            "documentation root {} does not exist",
            config.docs_root.display()
        );
    }

    let artifact = pipeline::build(config);
    if artifact.properties.is_empty() {
        warn!(
            "no property documentation extracted from {}",
            config.docs_root.display()
        );
    }

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;
    let out_path = output_dir.join(renderer.file_name());
    fs::write(&out_path, renderer.render(&artifact)?)
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    info!("wrote {}", out_path.display());
    Ok(())
}
