//! Conversion of tab-separated wordnet dumps into WN-LMF XML.
//!
//! The input holds one row per lemma, definition or example:
//!
//! ```text
//! 01775164-a	eng:lemma	happy	content
//! 01775164-a	eng:def	0	feeling joy
//! ```
//!
//! [`ingest`] folds the rows into per-language lexicons in a single pass and
//! [`Wordnet::to_lmf`] serializes them as one WN-LMF 1.0 document.

// Declare modules
pub mod aggregate;
pub mod collate;
pub mod data;
pub mod emit;
pub mod error;
pub mod ili;
pub mod meta;
pub mod models;
pub mod parse;
pub mod progress;
pub mod tsv;

// Re-export key types for easier use
pub use aggregate::Aggregation;
pub use collate::Glosses;
pub use error::{Result, Tab2LmfError};
pub use ili::IliMap;
pub use meta::{LexiconMeta, MetaTable};
pub use models::{LexicalResource, PartOfSpeech};

use log::{debug, info, warn};
use progress::{ProgressCallback, ProgressUpdate};
use std::io::BufRead;
use std::path::{Path, PathBuf};
use tsv::{RawRow, TsvReader};

/// Default ILI map file name, looked up in the working directory.
pub const DEFAULT_ILI_MAP: &str = "ili-map-pwn30.tab";
const PROGRESS_INTERVAL: usize = 10_000;
const INGEST_STAGE: &str = "Reading TSV";

/// Options controlling how rows are read.
#[derive(Debug, Default, Clone)]
pub struct IngestOptions {
    /// Only keep rows of this language.
    pub language: Option<String>,
    /// Skip malformed rows instead of failing.
    pub lenient: bool,
}

/// Options for a whole file conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub ili_map: PathBuf,
    pub ingest: IngestOptions,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            ili_map: PathBuf::from(DEFAULT_ILI_MAP),
            ingest: IngestOptions::default(),
        }
    }
}

/// The result of ingestion: aggregated lexicons plus synset glosses.
#[derive(Debug, Clone)]
pub struct Wordnet {
    pub aggregation: Aggregation,
    pub glosses: Glosses,
}

impl Wordnet {
    pub fn to_resource(&self, meta: &LexiconMeta) -> LexicalResource {
        emit::build_resource(meta, &self.aggregation, &self.glosses)
    }

    /// Serializes the wordnet as a WN-LMF document.
    pub fn to_lmf(&self, meta: &LexiconMeta) -> Result<String> {
        emit::to_lmf_string(&self.to_resource(meta))
    }
}

/// Reads every row of `reader`, in order, into a [`Wordnet`].
pub fn ingest<R: BufRead>(
    reader: R,
    wnid: &str,
    ili: &IliMap,
    options: &IngestOptions,
    mut progress: Option<ProgressCallback>,
) -> Result<Wordnet> {
    let mut report = |update: ProgressUpdate| {
        if let Some(callback) = progress.as_mut() {
            callback(update);
        }
    };
    report(ProgressUpdate::new_stage(INGEST_STAGE.to_string(), None));

    let mut rows = TsvReader::new(reader, options.lenient);
    let mut aggregation = Aggregation::new(wnid);
    let mut glosses = Glosses::new();
    let mut other_language = 0usize;
    let mut last_reported = 0usize;

    for item in rows.by_ref() {
        let (line_no, row) = item?;
        if line_no - last_reported >= PROGRESS_INTERVAL {
            last_reported = line_no;
            report(ProgressUpdate::at(
                INGEST_STAGE.to_string(),
                line_no as u64,
                Some(format!("{} lemma rows", aggregation.lemma_rows())),
            ));
        }
        if let Some(language) = &options.language {
            if row.language() != language {
                other_language += 1;
                continue;
            }
        }
        match row {
            RawRow::Lemma(lemma) => {
                aggregation.add_lemma(&lemma, ili);
            }
            RawRow::Definition(definition) => glosses.add_definition(definition),
            RawRow::Example(example) => glosses.add_example(example),
        }
    }

    let lines = rows.lines_read() as u64;
    report(ProgressUpdate {
        stage_description: INGEST_STAGE.to_string(),
        current_item: lines,
        total_items: Some(lines),
        message: Some("Done.".to_string()),
    });

    if rows.skipped() > 0 {
        warn!("Skipped {} malformed row(s).", rows.skipped());
    }
    if other_language > 0 {
        debug!("Ignored {} row(s) in other languages.", other_language);
    }
    let orphans = glosses.orphans(|synset| aggregation.owner_of(synset).is_some());
    if !orphans.is_empty() {
        warn!(
            "{} synset(s) have definitions or examples but no lemma rows; they are not emitted.",
            orphans.len()
        );
        debug!("Synsets without lemma rows: {}", orphans.join(", "));
    }
    if aggregation.lexicons().is_empty() {
        warn!("No lemma rows found; the document will contain no lexicon.");
    }
    info!(
        "Read {} lines: {} lemma rows, {} lexical entries, {} synsets in {} language(s).",
        lines,
        aggregation.lemma_rows(),
        aggregation.entry_count(),
        aggregation.synset_count(),
        aggregation.lexicons().len()
    );

    Ok(Wordnet {
        aggregation,
        glosses,
    })
}

/// Converts a TSV file into a WN-LMF document string.
pub fn convert_file(
    tsv_path: &Path,
    meta: &LexiconMeta,
    options: &ConvertOptions,
    progress: Option<ProgressCallback>,
) -> Result<String> {
    let ili = IliMap::load(&options.ili_map)?;
    info!("Reading TSV file {:?}", tsv_path);
    let reader = data::open_input(tsv_path)?;
    let wordnet = ingest(reader, &meta.id, &ili, &options.ingest, progress)?;
    wordnet.to_lmf(meta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_lmf;
    use std::sync::{Arc, Mutex};
    use tempfile::tempdir;

    const ILI_MAP: &str = "i1\t01775164-s\ni2\t02084071-n\n";

    fn okwn() -> LexiconMeta {
        MetaTable::builtin().get("okwn").unwrap().clone()
    }

    fn convert_str(tsv: &str, options: &IngestOptions) -> Result<String> {
        let ili = IliMap::from_reader(ILI_MAP.as_bytes())?;
        let meta = okwn();
        ingest(tsv.as_bytes(), &meta.id, &ili, options, None)?.to_lmf(&meta)
    }

    #[test]
    fn test_end_to_end_single_entry() {
        let tsv = "01775164-a\teng:lemma\thappy\tcontent\n01775164-a\teng:def\t0\tfeeling joy\n";
        let xml = convert_str(tsv, &IngestOptions::default()).unwrap();
        assert!(xml.contains(r#"<Definition language="eng">feeling joy</Definition>"#));

        let resource = parse_lmf(&xml).unwrap();
        assert_eq!(resource.lexicons.len(), 1);
        let lexicon = &resource.lexicons[0];
        assert_eq!(lexicon.id, "okwn-eng");
        assert_eq!(lexicon.language, "eng");
        assert_eq!(lexicon.lexical_entries.len(), 1);
        let entry = &lexicon.lexical_entries[0];
        assert_eq!(entry.lemma.written_form, "happy");
        assert_eq!(entry.forms.len(), 1);
        assert_eq!(entry.forms[0].written_form, "content");
        assert_eq!(lexicon.synsets.len(), 1);
        assert_eq!(lexicon.synsets[0].id, "okwn-eng-01775164-a");
        assert_eq!(lexicon.synsets[0].ili, "i1");
        assert_eq!(lexicon.synsets[0].definitions[0].text, "feeling joy");
    }

    #[test]
    fn test_shared_synset_defined_once() {
        let tsv = "\
02084071-n\teng:lemma\tdog
02084071-n\tcmn:lemma\t狗
02084071-n\tcmn:def\t0\t家养的犬科动物
02084071-n\teng:def\t0\ta domesticated canid
";
        let resource = parse_lmf(&convert_str(tsv, &IngestOptions::default()).unwrap()).unwrap();
        assert_eq!(resource.lexicons.len(), 2);
        let (eng, cmn) = (&resource.lexicons[0], &resource.lexicons[1]);
        assert_eq!(eng.language, "eng");
        assert_eq!(cmn.language, "cmn");
        assert_eq!(eng.synsets.len(), 1);
        assert!(cmn.synsets.is_empty());
        assert_eq!(eng.lexical_entries[0].senses[0].synset, "okwn-eng-02084071-n");
        assert_eq!(cmn.lexical_entries[0].senses[0].synset, "okwn-eng-02084071-n");

        // Definitions of every language land in the single synset element
        let languages: Vec<&str> = eng.synsets[0]
            .definitions
            .iter()
            .map(|d| d.language.as_str())
            .collect();
        assert_eq!(languages, vec!["cmn", "eng"]);
    }

    #[test]
    fn test_synset_count_matches_distinct_ids() {
        let tsv = "\
02084071-n\teng:lemma\tdog
02084071-n\tcmn:lemma\t狗
01775164-a\tcmn:lemma\t快乐
01775164-a\teng:lemma\thappy
01775164-a\teng:lemma\tglad
";
        let resource = parse_lmf(&convert_str(tsv, &IngestOptions::default()).unwrap()).unwrap();
        assert_eq!(resource.summary().synsets, 2);
        assert_eq!(resource.summary().lexical_entries, 5);
        assert_eq!(resource.lexicons[1].synsets[0].id, "okwn-cmn-01775164-a");
    }

    #[test]
    fn test_duplicate_rows_share_entry_id() {
        let tsv = "\
02084071-n\teng:lemma\tdog\tdoggy
02085998-n\teng:lemma\tdog\tdoggy
";
        let resource = parse_lmf(&convert_str(tsv, &IngestOptions::default()).unwrap()).unwrap();
        let entries = &resource.lexicons[0].lexical_entries;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "okwn-eng-lex1");
        assert_eq!(entries[0].senses.len(), 2);
    }

    #[test]
    fn test_definition_ordinals_and_examples() {
        let tsv = "\
01775164-a\teng:lemma\thappy
01775164-a\teng:def\t1\tB
01775164-a\teng:def\t0\tA
01775164-a\teng:exe\t1\tsecond
01775164-a\teng:exe\t0\tfirst
";
        let resource = parse_lmf(&convert_str(tsv, &IngestOptions::default()).unwrap()).unwrap();
        let synset = &resource.lexicons[0].synsets[0];
        assert_eq!(synset.definitions.len(), 1);
        assert_eq!(synset.definitions[0].text, "A; B");
        let examples: Vec<&str> = synset.examples.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(examples, vec!["first", "second"]);
    }

    #[test]
    fn test_satellite_synset_gets_ili_and_adjective_pos() {
        let tsv = "01775164-s\teng:lemma\thappy\n";
        let resource = parse_lmf(&convert_str(tsv, &IngestOptions::default()).unwrap()).unwrap();
        let synset = &resource.lexicons[0].synsets[0];
        assert_eq!(synset.ili, "i1");
        assert_eq!(synset.part_of_speech, PartOfSpeech::A);
        assert_eq!(synset.id, "okwn-eng-01775164-s");
    }

    #[test]
    fn test_malformed_definition_aborts() {
        let tsv = "01775164-a\teng:lemma\thappy\n01775164-a\teng:def\t0\tfeeling\tjoy\n";
        let err = convert_str(tsv, &IngestOptions::default()).unwrap_err();
        assert!(matches!(err, Tab2LmfError::MalformedRow { line: 2, .. }));
    }

    #[test]
    fn test_lenient_mode_skips_malformed_rows() {
        let tsv = "01775164-a\teng:lemma\thappy\n01775164-a\teng:def\tzero\tfeeling joy\n";
        let options = IngestOptions {
            lenient: true,
            ..IngestOptions::default()
        };
        let resource = parse_lmf(&convert_str(tsv, &options).unwrap()).unwrap();
        assert!(resource.lexicons[0].synsets[0].definitions.is_empty());
    }

    #[test]
    fn test_language_restriction() {
        let tsv = "\
02084071-n\teng:lemma\tdog
02084071-n\tcmn:lemma\t狗
02084071-n\teng:def\t0\ta domesticated canid
";
        let options = IngestOptions {
            language: Some("cmn".to_string()),
            ..IngestOptions::default()
        };
        let resource = parse_lmf(&convert_str(tsv, &options).unwrap()).unwrap();
        assert_eq!(resource.lexicons.len(), 1);
        let cmn = &resource.lexicons[0];
        assert_eq!(cmn.synsets[0].id, "okwn-cmn-02084071-n");
        // Glosses in other languages are dropped with their rows
        assert!(cmn.synsets[0].definitions.is_empty());
    }

    #[test]
    fn test_progress_reports_start_and_end() {
        let updates = Arc::new(Mutex::new(Vec::new()));
        let sink = updates.clone();
        let callback: ProgressCallback = Box::new(move |update: ProgressUpdate| {
            sink.lock().unwrap().push(update);
        });
        let ili = IliMap::default();
        ingest(
            "02084071-n\teng:lemma\tdog\n".as_bytes(),
            "okwn",
            &ili,
            &IngestOptions::default(),
            Some(callback),
        )
        .unwrap();

        let updates = updates.lock().unwrap();
        assert_eq!(updates.first().unwrap().current_item, 0);
        assert_eq!(updates.last().unwrap().total_items, Some(1));
    }

    #[test]
    fn test_progress_ticks_past_ignored_and_filtered_lines() {
        let updates = Arc::new(Mutex::new(Vec::new()));
        let sink = updates.clone();
        let callback: ProgressCallback = Box::new(move |update: ProgressUpdate| {
            sink.lock().unwrap().push(update);
        });
        let mut tsv = "\n".repeat(PROGRESS_INTERVAL);
        tsv.push_str("02084071-n\tcmn:lemma\t狗\n02084071-n\teng:lemma\tdog\n");
        let options = IngestOptions {
            language: Some("eng".to_string()),
            ..IngestOptions::default()
        };
        ingest(tsv.as_bytes(), "okwn", &IliMap::default(), &options, Some(callback)).unwrap();

        let updates = updates.lock().unwrap();
        let ticks: Vec<u64> = updates
            .iter()
            .filter(|u| u.current_item > 0 && u.total_items.is_none())
            .map(|u| u.current_item)
            .collect();
        assert_eq!(ticks, vec![PROGRESS_INTERVAL as u64 + 1]);
    }

    #[test]
    fn test_dublin_core_attributes_survive_reparse() {
        let tsv = "01775164-a\teng:lemma\thappy\n";
        let xml = convert_str(tsv, &IngestOptions::default()).unwrap();
        let resource = parse_lmf(&xml).unwrap();
        let lexicon = &resource.lexicons[0];
        assert_eq!(lexicon.dc_publisher, "Global Wordnet Association");
        assert_eq!(lexicon.dc_format, "OMW-LMF");
        assert_eq!(lexicon.dc_description, okwn().description);
    }

    #[test]
    fn test_empty_gloss_text_reparses() {
        let tsv = concat!(
            "01775164-a\teng:lemma\thappy\n",
            "01775164-a\teng:def\t0\t\n",
            "01775164-a\teng:exe\t0\t \n",
        );
        let xml = convert_str(tsv, &IngestOptions::default()).unwrap();
        assert!(xml.contains(r#"<Definition language="eng"/>"#));
        let resource = parse_lmf(&xml).unwrap();
        let synset = &resource.lexicons[0].synsets[0];
        assert_eq!(synset.definitions[0].text, "");
        assert_eq!(synset.examples.len(), 1);
        assert_eq!(synset.examples[0].text.trim(), "");
    }

    #[test]
    fn test_convert_file_reads_ili_map_and_tsv() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let ili_path = temp_dir.path().join(DEFAULT_ILI_MAP);
        let tsv_path = temp_dir.path().join("wn.tab");
        std::fs::write(&ili_path, ILI_MAP).unwrap();
        std::fs::write(&tsv_path, "02084071-n\tmcm:lemma\tkachoru\n").unwrap();

        let options = ConvertOptions {
            ili_map: ili_path,
            ..ConvertOptions::default()
        };
        let xml = convert_file(&tsv_path, &okwn(), &options, None).unwrap();
        let resource = parse_lmf(&xml).unwrap();
        assert_eq!(resource.lexicons[0].id, "okwn-mcm");
        assert_eq!(resource.lexicons[0].synsets[0].ili, "i2");
    }

    #[test]
    fn test_missing_ili_map_is_io_error() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let tsv_path = temp_dir.path().join("wn.tab");
        std::fs::write(&tsv_path, "02084071-n\tmcm:lemma\tkachoru\n").unwrap();
        let options = ConvertOptions {
            ili_map: temp_dir.path().join("missing.tab"),
            ..ConvertOptions::default()
        };
        assert!(matches!(
            convert_file(&tsv_path, &okwn(), &options, None),
            Err(Tab2LmfError::Io(_))
        ));
    }
}
