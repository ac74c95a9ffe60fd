//! Tag CLI application entry point
//!
//! Sets, adds, removes, matches, finds and lists tags stored in a file's
//! extended attributes.
//!
//! # Usage
//!
//! ```bash
//! # Replace the tags of a file
//! tag --set work,draft notes.txt
//!
//! # Add and remove tags
//! tag -a final notes.txt
//! tag -r draft notes.txt
//!
//! # List the tags of everything in the current directory
//! tag
//!
//! # Print files tagged both work and final
//! tag -m work,final *.txt
//!
//! # Search the home directory for anything tagged with a proj- tag
//! tag -f 'proj-*' --home
//! ```
//!
//! # Configuration
//!
//! Settings live in the user's config directory (`~/.config/tag/config.toml`
//! on Linux). Set `TAG_LOG=debug` to trace what each run does.

use std::io::{self, Write};
use tag::{
    TagError,
    cli::{self, Cli},
    commands::Processor,
    config::TagConfig,
    status::ExitStatus,
    store::XattrStore,
};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_env("TAG_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .compact()
        .init();
}

fn run(cli: &Cli) -> Result<ExitStatus, TagError> {
    let config = TagConfig::load().unwrap_or_else(|e| {
        tracing::warn!("using default configuration: {e}");
        TagConfig::default()
    });

    let invocation = cli.invocation(config.color);
    let store = XattrStore::new(config.attribute.clone());
    let processor = Processor::new(&invocation, store).with_scopes(config.scopes);

    let stdout = io::stdout();
    let stderr = io::stderr();
    let outcome = processor.perform(&mut stdout.lock(), &mut stderr.lock())?;

    tracing::debug!(
        processed = outcome.processed,
        reported = outcome.reported,
        failed = outcome.failed,
        skipped = outcome.skipped,
        "done"
    );
    Ok(outcome.exit_status())
}

fn main() -> ExitStatus {
    init_logging();
    let cli = Cli::parse_args();

    if let Some(shell) = cli.completions {
        cli::write_completions(shell, &mut io::stdout());
        return ExitStatus::Success;
    }

    match run(&cli) {
        Ok(status) => status,
        Err(e) => {
            let _ = io::stdout().flush();
            eprintln!("tag: {e}");
            ExitStatus::from_error(&e)
        }
    }
}
