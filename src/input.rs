//! Line sources: stdin or a list of files read in order.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Lines of stdin when `paths` is empty, otherwise the lines of every file
/// in order.
///
/// Files are opened lazily, one at a time, and closed once exhausted or when
/// the iterator is dropped. Line terminators are stripped.
pub fn open(paths: &[PathBuf]) -> Box<dyn Iterator<Item = Result<String>>> {
    if paths.is_empty() {
        tracing::debug!("reading lines from stdin");
        Box::new(from_reader(io::stdin().lock(), PathBuf::from("<stdin>")))
    } else {
        Box::new(from_files(paths.to_vec()))
    }
}

/// Lines of each file in turn.
pub fn from_files(paths: Vec<PathBuf>) -> impl Iterator<Item = Result<String>> {
    paths.into_iter().flat_map(|path| {
        tracing::debug!(path = %path.display(), "reading lines from file");
        let lines: Box<dyn Iterator<Item = Result<String>>> = match File::open(&path) {
            Ok(file) => Box::new(from_reader(BufReader::new(file), path)),
            Err(e) => {
                let err = anyhow::Error::new(e)
                    .context(format!("failed to open {}", path.display()));
                Box::new(std::iter::once(Err(err)))
            }
        };
        lines
    })
}

/// Lines of a reader, labelled with `source` in error messages.
pub fn from_reader<R: BufRead>(
    reader: R,
    source: PathBuf,
) -> impl Iterator<Item = Result<String>> {
    reader
        .lines()
        .map(move |line| line.with_context(|| format!("failed to read {}", source.display())))
}
