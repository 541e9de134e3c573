use clap::{Args, Parser, Subcommand};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::env;
use std::path::PathBuf;

mod cmd;
use cmd::{batch as cmd_batch, build as cmd_build, snippet as cmd_snippet};

fn long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\nBuilt: ",
        env!("BUILD_DATE"),
        "\nCommit: ",
        env!("GIT_HASH")
    )
}

#[derive(Parser, Debug)]
#[command(
    name = "wordlist",
    about = "Build word lists (concordances) from USFM Scripture text",
    version = env!("CARGO_PKG_VERSION"),
    long_version = long_version()
)]
struct Cli {
    /// Log level: off, error, warn, info, debug, trace (fallback: $WORDLIST_LOG or warn)
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

/// Which part of the text to read and where locations point.
#[derive(Args, Debug, Clone)]
pub struct Selection {
    /// USFM file (reads stdin when omitted)
    pub file: Option<PathBuf>,
    /// Book number (fallback: \id line, then $WORDLIST_BOOK, then 1)
    #[arg(long)]
    pub book: Option<u32>,
    /// Reference chapter for chapter/verse scope
    #[arg(long, default_value_t = 1)]
    pub chapter: u32,
    /// Reference verse for verse scope
    #[arg(long, default_value_t = 1)]
    pub verse: u32,
    /// Scope: book, chapter or verse
    #[arg(long, default_value = "book")]
    pub scope: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a concordance and print it
    Build {
        #[command(flatten)]
        selection: Selection,
        /// Keep only words containing this text (case-insensitive)
        #[arg(long)]
        filter: Option<String>,
        /// Output JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print word frequencies (word cloud data)
    Cloud {
        #[command(flatten)]
        selection: Selection,
        /// Output JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Extract one snippet from a verse
    Snippet {
        /// Verse text
        #[arg(long)]
        text: String,
        /// Word to highlight
        #[arg(long)]
        word: String,
        /// Which occurrence (1-based)
        #[arg(long, default_value_t = 1)]
        occurrence: usize,
    },
    /// Build a book-scope concordance for every USFM file under a directory
    Batch {
        /// Directory to scan for .usfm / .sfm files
        dir: PathBuf,
        /// Output directory for <CODE>.json files
        #[arg(long)]
        out: PathBuf,
    },
    /// Print CLI version
    Version {},
}

fn init_logging(level: Option<&str>) {
    let raw = level
        .map(str::to_string)
        .or_else(|| env::var("WORDLIST_LOG").ok())
        .unwrap_or_else(|| "warn".to_string());
    let filter = raw.parse::<LevelFilter>().unwrap_or(LevelFilter::Warn);
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let _ = TermLogger::init(filter, config, TerminalMode::Stderr, ColorChoice::Auto);
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());
    match cli.command {
        Commands::Build { selection, filter, json } => {
            cmd_build::build(&selection, filter.as_deref(), json)?;
        }
        Commands::Cloud { selection, json } => {
            cmd_build::cloud(&selection, json)?;
        }
        Commands::Snippet { text, word, occurrence } => {
            cmd_snippet::snippet(&text, &word, occurrence)?;
        }
        Commands::Batch { dir, out } => {
            let summary = cmd_batch::run_batch(&dir, &out)?;
            println!(
                "[batch] wrote {} concordances to {} ({} skipped)",
                summary.written.len(),
                out.display(),
                summary.skipped.len()
            );
        }
        Commands::Version {} => {
            println!("wordlist {}", long_version());
        }
    }
    Ok(())
}
