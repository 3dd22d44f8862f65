//! catalog-breadcrumbs CLI
//!
//! Resolves the breadcrumb trails for a product in a collection catalog,
//! lists the selectable products, and checks catalog documents.

use anyhow::{Context, Result};
use catalog_breadcrumbs_core::{
    format_issues, format_options, format_report, load_document, validate_catalog,
    BreadcrumbResolver, DocumentFormat, OutputFormat, ResolverConfig, DEFAULT_SEPARATOR,
};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Product breadcrumbs for nested collection catalogs
#[derive(Parser, Debug)]
#[command(name = "catalog-breadcrumbs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Resolve product breadcrumbs in a nested collection catalog")]
#[command(long_about = r#"
catalog-breadcrumbs: Product Breadcrumb Resolution

Finds every path from a root collection down to the node carrying the
selected product, and prints each one as a breadcrumb trail.

Catalog documents are JSON or YAML:
  collections:
    - title: Apparel
      children:
        - title: Tees
          product: { mainProductId: p1, title: Oversized Cotton Tee }

Examples:
  catalog-breadcrumbs -c data/catalog.json resolve p1
  catalog-breadcrumbs -c data/catalog.json --format json resolve p1
  catalog-breadcrumbs -c data/catalog.json options
  catalog-breadcrumbs -c data/catalog.json validate --max-depth 6
"#)]
pub struct Args {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Catalog document (.json, .yaml, .yml)
    #[arg(short, long, global = true, default_value = "catalog.json")]
    pub catalog: PathBuf,

    /// Parse the catalog as this format regardless of extension
    #[arg(long, global = true, value_enum)]
    pub catalog_format: Option<DocumentFormatArg>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormatArg::Text)]
    pub format: OutputFormatArg,

    /// Output file (default: stdout)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Separator between trail segments
    #[arg(long, global = true, default_value = DEFAULT_SEPARATOR)]
    pub separator: String,

    /// Maximum collection nesting accepted by validation
    #[arg(long, global = true)]
    pub max_depth: Option<usize>,

    /// Skip structural validation when loading
    #[arg(long, global = true)]
    pub no_validate: bool,

    /// Disable colors in ansi output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the breadcrumb trails for a product
    Resolve {
        /// Selected product identifier (mainProductId)
        product_id: String,
    },

    /// List the products offered by the selector
    Options,

    /// Check the catalog for structural problems
    Validate,
}

/// Output format argument
#[derive(ValueEnum, Clone, Debug)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Ansi,
    Text,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Yaml => OutputFormat::Yaml,
            OutputFormatArg::Ansi => OutputFormat::Ansi,
            OutputFormatArg::Text => OutputFormat::Text,
        }
    }
}

/// Catalog format argument
#[derive(ValueEnum, Clone, Debug)]
pub enum DocumentFormatArg {
    Json,
    Yaml,
}

impl From<DocumentFormatArg> for DocumentFormat {
    fn from(arg: DocumentFormatArg) -> Self {
        match arg {
            DocumentFormatArg::Json => DocumentFormat::Json,
            DocumentFormatArg::Yaml => DocumentFormat::Yaml,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(args.verbose);

    if args.no_color || !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }

    match &args.command {
        Commands::Resolve { product_id } => run_resolve(product_id, &args),
        Commands::Options => run_options(&args),
        Commands::Validate => run_validate(&args),
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // RUST_LOG wins over -v when set
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    debug!(?level, "logging initialised");
}

/// Build configuration from args
fn build_config(args: &Args, validate: bool) -> ResolverConfig {
    let mut config = ResolverConfig::new(args.catalog.clone())
        .with_separator(args.separator.clone())
        .with_validation(validate && !args.no_validate);

    if let Some(format) = &args.catalog_format {
        config = config.with_format(format.clone().into());
    }

    if let Some(max_depth) = args.max_depth {
        config = config.with_max_depth(max_depth);
    }

    config
}

fn run_resolve(product_id: &str, args: &Args) -> Result<()> {
    let config = build_config(args, true);
    let document = load_document(&config)
        .with_context(|| format!("Failed to load catalog {}", config.catalog_path.display()))?;

    let resolver = BreadcrumbResolver::new(&document.catalog);
    let report = resolver.resolve(product_id);
    info!(
        product_id,
        matches = report.metadata.matches,
        "resolved breadcrumbs"
    );

    let output = format_report(&report, args.format.clone().into(), &config.separator)?;
    write_output(&output, args.output.as_ref())
}

fn run_options(args: &Args) -> Result<()> {
    let config = build_config(args, true);
    let document = load_document(&config)
        .with_context(|| format!("Failed to load catalog {}", config.catalog_path.display()))?;

    let options = document.selectable_options();
    let output = format_options(&options, args.format.clone().into())?;
    write_output(&output, args.output.as_ref())
}

fn run_validate(args: &Args) -> Result<()> {
    // Loading must not fail on the issues we are about to report
    let config = build_config(args, false);
    let document = load_document(&config)
        .with_context(|| format!("Failed to load catalog {}", config.catalog_path.display()))?;

    let issues = validate_catalog(&document.catalog, config.max_depth);
    let output = format_issues(&issues, args.format.clone().into())?;
    write_output(&output, args.output.as_ref())?;

    let errors = issues.iter().filter(|issue| issue.is_error()).count();
    if errors > 0 {
        anyhow::bail!("Catalog has {} error(s)", errors);
    }

    Ok(())
}

fn write_output(output: &str, path: Option<&PathBuf>) -> Result<()> {
    if let Some(path) = path {
        fs::write(path, output).context("Failed to write output file")?;
    } else {
        println!("{}", output);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_args() {
        let args = Args::try_parse_from([
            "catalog-breadcrumbs",
            "--catalog",
            "data/catalog.yaml",
            "resolve",
            "p1",
            "--separator",
            " / ",
            "--max-depth",
            "5",
        ])
        .unwrap();

        assert!(matches!(&args.command, Commands::Resolve { product_id } if product_id == "p1"));

        let config = build_config(&args, true);
        assert_eq!(config.separator, " / ");
        assert_eq!(config.max_depth, Some(5));
        assert!(config.validate);
        assert_eq!(config.document_format().unwrap(), DocumentFormat::Yaml);
    }

    #[test]
    fn test_no_validate_flag() {
        let args =
            Args::try_parse_from(["catalog-breadcrumbs", "--no-validate", "options"]).unwrap();
        assert!(!build_config(&args, true).validate);
        assert_eq!(args.separator, DEFAULT_SEPARATOR);
    }

    #[test]
    fn test_verbosity_counts() {
        let args = Args::try_parse_from(["catalog-breadcrumbs", "-vv", "validate"]).unwrap();
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_forced_catalog_format() {
        let args = Args::try_parse_from([
            "catalog-breadcrumbs",
            "-c",
            "catalog.data",
            "--catalog-format",
            "json",
            "validate",
        ])
        .unwrap();
        let config = build_config(&args, false);
        assert_eq!(config.document_format().unwrap(), DocumentFormat::Json);
    }
}
