mod file_store;
mod inspect;
mod source;

use clap::{Parser, Subcommand};
use qotd::{CalendarDay, QuoteStore, QuoteWidget};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use crate::file_store::FileStore;
use crate::source::QuoteSource;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("cannot start runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "qotd", about = "Useless Thought for the Day, in the terminal")]
struct Cli {
    /// Quote document: a JSON array of strings, as a file path or http(s) URL.
    #[arg(long, env = "QOTD_QUOTES", default_value = "data/quotes.json")]
    quotes: String,

    /// JSON file holding the deck, today's quote and the dark-mode flag.
    #[arg(long, env = "QOTD_STATE_FILE", default_value = ".qotd-state.json")]
    state_file: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print today's thought (drawn once per day).
    Today,
    /// Draw a new thought now and make it today's.
    New,
    /// Explain what useless thoughts are.
    Why,
    /// Show the theme, or flip it with --toggle. Does not draw a quote.
    DarkMode {
        #[arg(long)]
        toggle: bool,
    },
    /// Show deck and storage state without drawing today's quote.
    Status,
}

type CliWidget = QuoteWidget<FileStore, StdRng>;

fn main() -> Result<(), CliError> {
    // Must run before any thread is spawned for the local offset to resolve.
    let today = local_today();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut store = FileStore::open(&cli.state_file);

    if let Command::DarkMode { toggle } = cli.command {
        println!("{}", inspect::dark_mode(&mut store, toggle).as_str());
        return Ok(());
    }

    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    let quotes = runtime.block_on(load_quotes(&cli.quotes));
    if quotes.is_fallback() {
        eprintln!("{}", qotd::quotes::LOAD_ERROR_NOTICE);
    }

    if let Command::Status = cli.command {
        println!("state file : {}", store.path().display());
        for line in inspect::status_lines(&store, &quotes, today) {
            println!("{line}");
        }
        return Ok(());
    }

    let mut widget: CliWidget = QuoteWidget::start(quotes, store, StdRng::from_os_rng(), today, false);
    match cli.command {
        Command::New => {
            widget.new_quote(today);
        }
        Command::Why => {
            widget.toggle_explanation();
        }
        Command::Today | Command::DarkMode { .. } | Command::Status => {}
    }
    println!("{}", widget.displayed_text());
    Ok(())
}

async fn load_quotes(raw: &str) -> QuoteStore {
    let source = QuoteSource::parse(raw);
    tracing::debug!(?source, "loading quotes");
    QuoteStore::load(source.fetch().await)
}

/// Today in the local timezone, or UTC when the offset cannot be determined.
fn local_today() -> CalendarDay {
    let now = time::OffsetDateTime::now_local().unwrap_or_else(|_| time::OffsetDateTime::now_utc());
    CalendarDay::new(now.date())
}
