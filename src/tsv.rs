//! Line classification for the tab-separated lexical source.
//!
//! Rows are recognized by the suffix of their second column:
//!
//! ```text
//! 01775164-a  eng:lemma  happy  content
//! 01775164-a  eng:def    0      feeling joy
//! 01775164-a  eng:exe    0      a happy smile
//! ```
//!
//! Anything else is ignored.

use crate::error::{Result, Tab2LmfError};
use crate::models::PartOfSpeech;
use log::{debug, warn};
use std::collections::BTreeSet;
use std::io::{BufRead, Lines};

const LEMMA_SUFFIX: &str = ":lemma";
const DEFINITION_SUFFIX: &str = ":def";
const EXAMPLE_SUFFIX: &str = ":exe";
const GLOSS_COLUMNS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LemmaRow {
    pub synset: String,
    pub language: String,
    pub lemma: String,
    pub variants: BTreeSet<String>,
    pub pos: PartOfSpeech,
}

/// A definition or example row; both share the same shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlossRow {
    pub synset: String,
    pub language: String,
    pub ordinal: i64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawRow {
    Lemma(LemmaRow),
    Definition(GlossRow),
    Example(GlossRow),
}

impl RawRow {
    pub fn language(&self) -> &str {
        match self {
            RawRow::Lemma(row) => &row.language,
            RawRow::Definition(row) | RawRow::Example(row) => &row.language,
        }
    }
}

fn malformed(line: usize, reason: impl Into<String>) -> Tab2LmfError {
    Tab2LmfError::MalformedRow {
        line,
        reason: reason.into(),
    }
}

/// The language code is whatever precedes the first colon of column 2.
fn language_of(line: usize, column: &str) -> Result<String> {
    match column.split(':').next() {
        Some(lang) if !lang.is_empty() => Ok(lang.to_string()),
        _ => Err(malformed(line, format!("missing language code in '{}'", column))),
    }
}

fn parse_gloss(line: usize, kind: &str, columns: &[&str]) -> Result<GlossRow> {
    if columns.len() != GLOSS_COLUMNS {
        return Err(malformed(
            line,
            format!(
                "{} row must have {} columns, found {}",
                kind,
                GLOSS_COLUMNS,
                columns.len()
            ),
        ));
    }
    let ordinal = columns[2].parse::<i64>().map_err(|e| {
        malformed(line, format!("invalid {} ordinal '{}': {}", kind, columns[2], e))
    })?;
    Ok(GlossRow {
        synset: columns[0].to_string(),
        language: language_of(line, columns[1])?,
        ordinal,
        text: columns[3].to_string(),
    })
}

fn parse_lemma(line: usize, columns: &[&str]) -> Result<LemmaRow> {
    if columns.len() < 3 {
        return Err(malformed(line, "lemma row needs a synset id, a language and a lemma"));
    }
    let synset = columns[0];
    if synset.is_empty() {
        return Err(malformed(line, "empty synset id"));
    }
    let lemma = columns[2];
    if lemma.is_empty() {
        return Err(malformed(line, "empty lemma"));
    }
    let pos = PartOfSpeech::from_synset_id(synset).ok_or_else(|| {
        malformed(line, format!("unknown part of speech in synset id '{}'", synset))
    })?;
    let variants = columns[3..]
        .iter()
        .filter(|variant| !variant.is_empty())
        .map(|variant| variant.to_string())
        .collect();
    Ok(LemmaRow {
        synset: synset.to_string(),
        language: language_of(line, columns[1])?,
        lemma: lemma.to_string(),
        variants,
        pos,
    })
}

/// Classifies one line. `Ok(None)` means the line has an ignorable shape.
pub fn classify_line(line_no: usize, line: &str) -> Result<Option<RawRow>> {
    let columns: Vec<&str> = line.split('\t').map(str::trim).collect();
    if columns.len() < 2 {
        return Ok(None);
    }
    let kind = columns[1];
    if kind.ends_with(LEMMA_SUFFIX) {
        parse_lemma(line_no, &columns).map(|row| Some(RawRow::Lemma(row)))
    } else if kind.ends_with(DEFINITION_SUFFIX) {
        parse_gloss(line_no, "definition", &columns).map(|row| Some(RawRow::Definition(row)))
    } else if kind.ends_with(EXAMPLE_SUFFIX) {
        parse_gloss(line_no, "example", &columns).map(|row| Some(RawRow::Example(row)))
    } else {
        Ok(None)
    }
}

/// Streams classified rows, paired with their 1-based line numbers.
///
/// In lenient mode malformed rows are logged and skipped; otherwise the
/// first malformed row ends the stream with an error.
pub struct TsvReader<R: BufRead> {
    lines: Lines<R>,
    line_no: usize,
    lenient: bool,
    skipped: usize,
}

impl<R: BufRead> TsvReader<R> {
    pub fn new(reader: R, lenient: bool) -> Self {
        TsvReader {
            lines: reader.lines(),
            line_no: 0,
            lenient,
            skipped: 0,
        }
    }

    /// Number of lines read so far.
    pub fn lines_read(&self) -> usize {
        self.line_no
    }

    /// Number of malformed rows skipped in lenient mode.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<R: BufRead> Iterator for TsvReader<R> {
    type Item = Result<(usize, RawRow)>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_no += 1;
            match classify_line(self.line_no, &line) {
                Ok(Some(row)) => return Some(Ok((self.line_no, row))),
                Ok(None) => debug!("Ignoring line {}", self.line_no),
                Err(e) if self.lenient => {
                    warn!("Skipping: {}", e);
                    self.skipped += 1;
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
