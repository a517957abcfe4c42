use crate::{error::*, Container};
use snafu::ResultExt;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};
use tracing::info;

/// Build a container from a word list, one word per line.
/// Surrounding whitespace is ignored, as are empty lines.
/// The `path` is only used to report errors.
pub fn read_words<R: BufRead>(reader: R, path: &Path) -> Result<Container> {
    let mut container = Container::new();
    for line in reader.lines() {
        let line = line.context(FileRead { path })?;
        let word = line.trim();
        if !word.is_empty() {
            container.add(word)?;
        }
    }

    info!(path = %path.display(), words = container.size(), "loaded word list");
    Ok(container)
}

impl Container {
    /// Build a container from a word list file, one word per line.
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path).context(FileOpen { path })?;
        read_words(BufReader::new(file), path)
    }
}
