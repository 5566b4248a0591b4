use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
use tracing_appender::rolling;

mod commands;
mod ui;

#[derive(Parser)]
#[command(name = "gridloc", version, about = "Grid <-> TMS localization sync")]
struct Cli {
    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract the translatable strings of a sheet and print them
    Scan {
        /// CSV file holding the sheet
        #[arg(short, long)]
        sheet: PathBuf,
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Create or update the sheet's source strings on the TMS
    Push {
        #[arg(short, long)]
        sheet: PathBuf,
        /// Restrict to specific columns, by letter (repeatable)
        #[arg(long = "column")]
        columns: Vec<String>,
        /// Plan the create/update decisions without issuing writes
        #[arg(long, default_value_t = false)]
        dry_run: bool,
        /// Persist progress here and resume an interrupted run
        #[arg(long)]
        checkpoint: Option<PathBuf>,
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Fetch translations and write them into the language rows
    Pull {
        #[arg(short, long)]
        sheet: PathBuf,
        /// Write the updated sheet here instead of in place
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long = "column")]
        columns: Vec<String>,
        #[arg(long)]
        checkpoint: Option<PathBuf>,
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Verify credentials with a single cheap API call
    TestConnection,

    /// Probe each read endpoint and report per-endpoint status
    TestEndpoints,
}

trait Runnable {
    fn run(self, use_color: bool) -> Result<()>;
}

impl Runnable for Commands {
    fn run(self, use_color: bool) -> Result<()> {
        let cmd_name = format!("{:?}", self);
        info!("starting command: {}", cmd_name);

        let result = match self {
            Commands::Scan { sheet, format } => commands::scan::run_scan(sheet, format, use_color),
            Commands::Push {
                sheet,
                columns,
                dry_run,
                checkpoint,
                format,
            } => commands::push::run_push(sheet, columns, dry_run, checkpoint, format, use_color),
            Commands::Pull {
                sheet,
                out,
                columns,
                checkpoint,
                format,
            } => commands::pull::run_pull(sheet, out, columns, checkpoint, format, use_color),
            Commands::TestConnection => commands::connect::run_test_connection(use_color),
            Commands::TestEndpoints => commands::connect::run_test_endpoints(use_color),
        };

        match &result {
            Ok(_) => info!("finished command: {}", cmd_name),
            Err(e) => error!("command {} failed: {:?}", cmd_name, e),
        }

        result
    }
}

// The worker guard must outlive main or the file layer drops its events.
fn init_tracing() -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = rolling::daily("logs", "gridloc.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let console_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")));

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(file_writer)
        .with_filter(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    guard
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let _guard = init_tracing();

    let cli = Cli::parse();

    let use_color = !cli.no_color
        && std::io::stdout().is_terminal()
        && std::env::var_os("NO_COLOR").is_none();

    cli.cmd.run(use_color)
}
