//! Input and output file handling.
//!
//! Inputs ending in `.gz` are decompressed on the fly; everything else is
//! read as plain UTF-8 text.

use crate::error::Result;
use flate2::read::GzDecoder;
use log::debug;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Opens an input file for line-oriented reading.
pub fn open_input(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    if is_gzip(path) {
        debug!("Opening {:?} as a gzip stream", path);
        Ok(Box::new(BufReader::new(GzDecoder::new(BufReader::new(file)))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Opens the output destination: the given file, or standard output.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            debug!("Writing output to {:?}", path);
            Ok(Box::new(BufWriter::new(File::create(path)?)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}
