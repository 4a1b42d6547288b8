//! Aggregation of lemma rows into per-language lexical entries and synsets.
//!
//! A synset is materialized once, by the first language that mentions it, as
//! `{wnid}-{lang}-{synset}`. Later languages link their senses to that same
//! id without declaring the synset again. Lexical entries are shared within
//! a language when lemma, variants and part of speech all match.

use crate::ili::IliMap;
use crate::models::PartOfSpeech;
use crate::tsv::LemmaRow;
use log::trace;
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRecord {
    pub id: String,
    pub lemma: String,
    pub pos: PartOfSpeech,
    pub variants: BTreeSet<String>,
    /// Materialized synset ids, in the order they were first linked.
    pub synsets: Vec<String>,
}

impl EntryRecord {
    fn link(&mut self, synset_id: &str) {
        if !self.synsets.iter().any(|id| id == synset_id) {
            self.synsets.push(synset_id.to_string());
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynsetRecord {
    pub id: String,
    /// The synset id as written in the source file.
    pub original_id: String,
    pub pos: PartOfSpeech,
    /// Empty when the ILI map has no entry for the synset.
    pub ili: String,
}

type EntryKey = (String, BTreeSet<String>, PartOfSpeech);

/// Everything one language contributes: its entries and the synsets it owns.
#[derive(Debug, Clone)]
pub struct LanguageLexicon {
    pub language: String,
    entries: Vec<EntryRecord>,
    entry_index: HashMap<EntryKey, usize>,
    synsets: Vec<SynsetRecord>,
}

impl LanguageLexicon {
    fn new(language: &str) -> Self {
        LanguageLexicon {
            language: language.to_string(),
            entries: Vec::new(),
            entry_index: HashMap::new(),
            synsets: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[EntryRecord] {
        &self.entries
    }

    /// Synsets owned by this language, in materialization order.
    pub fn synsets(&self) -> &[SynsetRecord] {
        &self.synsets
    }
}

#[derive(Debug, Clone)]
pub struct Aggregation {
    wnid: String,
    lexicons: Vec<LanguageLexicon>,
    lexicon_index: HashMap<String, usize>,
    /// Original synset id -> owning language.
    owners: HashMap<String, String>,
    lemma_rows: usize,
}

impl Aggregation {
    pub fn new(wnid: &str) -> Self {
        Aggregation {
            wnid: wnid.to_string(),
            lexicons: Vec::new(),
            lexicon_index: HashMap::new(),
            owners: HashMap::new(),
            lemma_rows: 0,
        }
    }

    /// Folds one lemma row into the aggregation and returns the id of the
    /// lexical entry it landed in.
    pub fn add_lemma(&mut self, row: &LemmaRow, ili: &IliMap) -> String {
        self.lemma_rows += 1;

        let (synset_id, new_synset) = match self.owners.get(&row.synset) {
            Some(owner) => (format!("{}-{}-{}", self.wnid, owner, row.synset), false),
            None => {
                self.owners.insert(row.synset.clone(), row.language.clone());
                (format!("{}-{}-{}", self.wnid, row.language, row.synset), true)
            }
        };

        let lexicon_idx = match self.lexicon_index.get(&row.language) {
            Some(&idx) => idx,
            None => {
                self.lexicons.push(LanguageLexicon::new(&row.language));
                self.lexicon_index
                    .insert(row.language.clone(), self.lexicons.len() - 1);
                self.lexicons.len() - 1
            }
        };
        let lexicon = &mut self.lexicons[lexicon_idx];

        let key = (row.lemma.clone(), row.variants.clone(), row.pos);
        let entry_idx = match lexicon.entry_index.get(&key) {
            Some(&idx) => idx,
            None => {
                let id = format!("{}-{}-lex{}", self.wnid, row.language, self.lemma_rows);
                trace!("New lexical entry {} for '{}'", id, row.lemma);
                lexicon.entries.push(EntryRecord {
                    id,
                    lemma: row.lemma.clone(),
                    pos: row.pos,
                    variants: row.variants.clone(),
                    synsets: Vec::new(),
                });
                lexicon.entry_index.insert(key, lexicon.entries.len() - 1);
                lexicon.entries.len() - 1
            }
        };
        let entry = &mut lexicon.entries[entry_idx];
        entry.link(&synset_id);
        let entry_id = entry.id.clone();

        if new_synset {
            lexicon.synsets.push(SynsetRecord {
                id: synset_id,
                original_id: row.synset.clone(),
                pos: row.pos,
                ili: ili.get(&row.synset).unwrap_or_default().to_string(),
            });
        }

        entry_id
    }

    /// Lexicons in the order their language first appeared.
    pub fn lexicons(&self) -> &[LanguageLexicon] {
        &self.lexicons
    }

    /// The language that materialized a synset, by original synset id.
    pub fn owner_of(&self, synset: &str) -> Option<&str> {
        self.owners.get(synset).map(String::as_str)
    }

    pub fn synset_count(&self) -> usize {
        self.owners.len()
    }

    pub fn entry_count(&self) -> usize {
        self.lexicons.iter().map(|lexicon| lexicon.entries.len()).sum()
    }

    pub fn lemma_rows(&self) -> usize {
        self.lemma_rows
    }
}
