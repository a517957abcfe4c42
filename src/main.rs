//! The application binary of the trie-search project.
//!
//! Load a word list in a trie, optionally compress it, then answer the
//! queries received in [the standard input stream](std::io::stdin),
//! one per line, of the syntax `<ACTION> <TEXT>`.
//!
//! See the [trie-search-core](../trie_search_core/index.html) crate for
//! documentation about the trie and its searching functions.

use error::*;
use snafu::*;
use std::path::PathBuf;
use tracing::{info, Level};
use trie_search_core::Container;

mod error;
mod query;

/// Represents the expected parsed program arguments.
#[derive(Debug)]
struct Args {
    words_path: PathBuf,
    compress: bool,
}

/// Parse the arguments and return an error if the wrong number is given or a parsing error happens.
fn parse_args() -> Result<Args> {
    const BIN_NAME_DEFAULT: &str = "trie-search";
    let mut args = std::env::args();

    let bin_name = args.next().unwrap_or_else(|| BIN_NAME_DEFAULT.to_string());
    let cliargs_ctx = CliArgs {
        bin_name: &bin_name,
    };

    let words_path = args.next().context(cliargs_ctx)?.into();
    let compress = match args.next().as_deref() {
        None => false,
        Some("--compress") => true,
        Some(_) => return cliargs_ctx.fail(),
    };

    // Make sure no more argument has been given
    if args.next().is_some() {
        None.context(cliargs_ctx)?;
    }

    Ok(Args {
        words_path,
        compress,
    })
}

fn main() -> Result<()> {
    // Standard output is reserved for query results
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args()?;

    let mut container = Container::from_file(&args.words_path).context(WordsRead {
        path: &args.words_path,
    })?;

    if args.compress {
        container.compress();
        info!(words = container.size(), "trie compressed");
    }

    query::process_stdin_queries(&mut container)
}
