//! Collation of synset definitions and examples.
//!
//! Glosses are keyed by original synset id, then language (in order of first
//! appearance for that synset), then ordinal.

use crate::tsv::GlossRow;
use log::warn;
use std::collections::{BTreeMap, HashMap};

/// Per-language ordinal tables for one synset.
#[derive(Debug, Default, Clone)]
struct GlossTable {
    languages: Vec<(String, BTreeMap<i64, String>)>,
}

impl GlossTable {
    fn insert(&mut self, language: &str, ordinal: i64, text: String) -> Option<String> {
        let slot = match self.languages.iter().position(|(lang, _)| lang == language) {
            Some(idx) => idx,
            None => {
                self.languages.push((language.to_string(), BTreeMap::new()));
                self.languages.len() - 1
            }
        };
        self.languages[slot].1.insert(ordinal, text)
    }
}

#[derive(Debug, Default, Clone)]
pub struct Glosses {
    definitions: HashMap<String, GlossTable>,
    examples: HashMap<String, GlossTable>,
}

/// Joins ordered definitions with `; ` and trims stray separators at both ends.
fn join_definitions(parts: &BTreeMap<i64, String>) -> String {
    parts
        .values()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("; ")
        .trim_matches(|c: char| c == ';' || c == ' ')
        .to_string()
}

impl Glosses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_definition(&mut self, row: GlossRow) {
        let table = self.definitions.entry(row.synset.clone()).or_default();
        if table.insert(&row.language, row.ordinal, row.text).is_some() {
            warn!(
                "Definition {} of synset {} ({}) given twice, keeping the last one",
                row.ordinal, row.synset, row.language
            );
        }
    }

    pub fn add_example(&mut self, row: GlossRow) {
        let table = self.examples.entry(row.synset.clone()).or_default();
        if table.insert(&row.language, row.ordinal, row.text).is_some() {
            warn!(
                "Example {} of synset {} ({}) given twice, keeping the last one",
                row.ordinal, row.synset, row.language
            );
        }
    }

    /// One `(language, text)` pair per language, definitions joined in ordinal order.
    pub fn definitions_for(&self, synset: &str) -> Vec<(String, String)> {
        self.definitions
            .get(synset)
            .map(|table| {
                table
                    .languages
                    .iter()
                    .map(|(lang, parts)| (lang.clone(), join_definitions(parts)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// One `(language, text)` pair per example, grouped by language, ordinal order within.
    pub fn examples_for(&self, synset: &str) -> Vec<(String, String)> {
        self.examples
            .get(synset)
            .map(|table| {
                table
                    .languages
                    .iter()
                    .flat_map(|(lang, parts)| {
                        parts.values().map(move |text| (lang.clone(), text.trim().to_string()))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Synset ids that carry glosses but fail `is_known`.
    pub fn orphans(&self, is_known: impl Fn(&str) -> bool) -> Vec<&str> {
        let mut orphans: Vec<&str> = self
            .definitions
            .keys()
            .chain(self.examples.keys())
            .map(String::as_str)
            .filter(|synset| !is_known(*synset))
            .collect();
        orphans.sort_unstable();
        orphans.dedup();
        orphans
    }
}
