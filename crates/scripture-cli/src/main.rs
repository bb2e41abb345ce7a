use anyhow::Result;
use clap::{Parser, Subcommand};
use scripture_acquire::config::{DEFAULT_DATA_DIR, DEFAULT_TRANSLATION};
use scripture_acquire::{AcquireConfig, Acquisition};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "scripture")]
#[command(about = "Bible text acquisition: downloads and a sample dataset")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_HASH"), ")"))]
struct Cli {
    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "info", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long, global = true)]
    utc: bool,

    /// Directory the output files are written to (created if missing)
    #[arg(short = 'd', long, global = true, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Per-request timeout in seconds (default: none)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Defaults to `sample` when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the fixed five-verse sample dataset (bible_sample.json)
    Sample,

    /// Download the whole KJV as plain text from Project Gutenberg
    Gutenberg {
        /// Override the corpus URL
        #[arg(long)]
        url: Option<String>,
    },

    /// Download books one at a time from the bible-api.com REST API
    Api {
        /// Translation identifier (e.g., KJV, WEB)
        #[arg(short, long, default_value = DEFAULT_TRANSLATION)]
        translation: String,

        /// Book to fetch; repeat for several. Defaults to all 66 books.
        #[arg(short, long = "book")]
        books: Vec<String>,

        /// Override the API base URL
        #[arg(long)]
        base_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep HTTP internals quiet at debug/trace
    let level = match cli.log_level {
        LogLevel::Error => "error",
        LogLevel::Warn  => "warn",
        LogLevel::Info  => "info",
        LogLevel::Debug => "debug,hyper=warn,hyper_util=warn,reqwest=warn,rustls=warn",
        LogLevel::Trace => "trace,hyper=warn,hyper_util=warn,reqwest=warn,rustls=warn",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Timestamp format: 2026-02-14 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z";

    if cli.utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(time_format.to_string()))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(time_format.to_string()))
            .init();
    }

    let mut config = AcquireConfig::new(&cli.data_dir);
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }

    match cli.command.unwrap_or(Commands::Sample) {
        Commands::Sample => {
            let acquisition = Acquisition::new(config)?;
            let path = acquisition.create_sample_dataset()?;
            println!("{}", path.display());
        }
        Commands::Gutenberg { url } => {
            if let Some(url) = url {
                config = config.with_corpus_url(url);
            }
            let acquisition = Acquisition::new(config)?;
            let path = acquisition.download_gutenberg_kjv().await?;
            println!("{}", path.display());
        }
        Commands::Api {
            translation,
            books,
            base_url,
        } => {
            if let Some(base_url) = base_url {
                config = config.with_api_base_url(base_url);
            }
            for book in &books {
                if scripture_model::canon_index(book).is_none() {
                    tracing::warn!(book = %book, "Not a canonical book name; requesting anyway");
                }
            }
            let acquisition = Acquisition::new(config)?;
            let books = (!books.is_empty()).then_some(books);
            let report = acquisition
                .download_books(&translation, books.as_deref())
                .await?;

            for skipped in &report.skipped {
                tracing::warn!(book = %skipped.book, reason = %skipped.reason, "Book missing from output");
            }
            if !report.is_complete() {
                tracing::warn!(
                    fetched = report.fetched,
                    skipped = report.skipped.len(),
                    "Download incomplete"
                );
            }
            println!("{}", report.path.display());
        }
    }

    Ok(())
}
