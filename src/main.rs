use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, bail};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{error, info};

use pg_version_report::catalog::{BundledSource, FileSource, ReleaseData, ReleaseSource};
use pg_version_report::config::{self, ReportConfig};
use pg_version_report::logging::{self, LogOptions};
use pg_version_report::report::ReportAssembler;
use pg_version_report::report::render::{render_error, render_text};
use pg_version_report::share;

#[derive(Parser)]
#[command(name = "pg-version-report")]
#[command(
    version,
    about = "Show the fixes, CVEs and features a PostgreSQL server is missing"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Load the release catalog from this file instead of the bundled one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Configuration file (defaults to $XDG_CONFIG_HOME/pg-version-report/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    /// Mirror logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Report on a `SELECT version();` result (the default, reading stdin)
    Report(ReportArgs),
    /// Print the share token for a version string
    Share {
        text: String,
        /// Print a full link on this base URL instead of the bare token
        #[arg(long)]
        base: Option<String>,
    },
    /// Summarise the release catalog
    Catalog,
}

#[derive(Args, Default)]
struct ReportArgs {
    /// Output of `SELECT version();`
    text: Option<String>,

    /// Read the text from stdin
    #[arg(long, conflicts_with_all = ["text", "data"])]
    stdin: bool,

    /// Read the text from a share token
    #[arg(long, conflicts_with = "text")]
    data: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Date to compute ages and EOL countdowns against (YYYY-MM-DD)
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Also print a share link on this base URL
    #[arg(long)]
    share_base: Option<String>,
}

#[derive(Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _guard = logging::init(
        &config::log_path(),
        LogOptions {
            json: cli.log_json,
            verbose: cli.verbose,
        },
    );

    let config = ReportConfig::load(cli.config.as_deref())?;
    let data = load_catalog(cli.catalog.clone())?.with_support_years(config.eol_support_years);

    match cli.command {
        None => run_report(&data, config, ReportArgs::default()),
        Some(Command::Report(args)) => run_report(&data, config, args),
        Some(Command::Share { text, base }) => {
            match base {
                Some(base) => println!("{}", share::share_url(&base, &text)),
                None => println!("{}", share::encode(&text)),
            }
            Ok(())
        }
        Some(Command::Catalog) => {
            print_catalog(&data);
            Ok(())
        }
    }
}

fn load_catalog(path: Option<PathBuf>) -> anyhow::Result<ReleaseData> {
    let source: Box<dyn ReleaseSource> = match path {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(BundledSource),
    };
    ReleaseData::load(source.as_ref())
        .inspect_err(|e| error!("Refusing to run with invalid catalog: {}", e))
        .with_context(|| format!("failed to load {}", source.describe()))
}

fn run_report(data: &ReleaseData, config: ReportConfig, args: ReportArgs) -> anyhow::Result<()> {
    let raw = match (args.text, args.data) {
        (Some(text), _) => text,
        (None, Some(token)) => share::decode(&token),
        (None, None) if args.stdin || !std::io::IsTerminal::is_terminal(&std::io::stdin()) => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            text
        }
        (None, None) => bail!("no version string given; pass TEXT, --data or --stdin"),
    };

    let today = args
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let assembler = ReportAssembler::new(data, config);
    let result = assembler.assemble(&raw, today);

    match (&result, args.format) {
        (Ok(report), OutputFormat::Text) => print!("{}", render_text(report)),
        (Ok(report), OutputFormat::Json) => {
            println!("{}", serde_json::to_string_pretty(report)?)
        }
        (Err(e), OutputFormat::Text) => {
            info!("No report: {}", e);
            print!("{}", render_error(e))
        }
        (Err(e), OutputFormat::Json) => {
            info!("No report: {}", e);
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "error": e.to_string(),
                    "message": e.user_message(),
                }))?
            )
        }
    }

    if let Some(base) = args.share_base {
        println!("\nShare this report: {}", share::share_url(&base, &raw));
    }

    Ok(())
}

fn print_catalog(data: &ReleaseData) {
    let today = chrono::Local::now().date_naive();

    println!(
        "{} releases, latest {}",
        data.versions.len(),
        data.versions.latest_version()
    );
    println!(
        "{} bugs, {} CVEs, {} features, {} performance improvements",
        data.index.bugs().len(),
        data.index.security().len(),
        data.index.features().len(),
        data.index.performance().len()
    );
    for line in data.versions.major_lines(today) {
        let eol = line
            .eol_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "TBD".to_string());
        println!(
            "  {:<3} {} releases, first {}, EOL {}{}{}",
            line.major,
            line.releases.len(),
            line.first_release_date,
            eol,
            if line.eol_is_explicit { "" } else { " (estimated)" },
            if line.is_eol { " [EOL]" } else { "" }
        );
    }
}
