//! WN-LMF serialization of an aggregated wordnet.

use crate::aggregate::{Aggregation, EntryRecord, LanguageLexicon, SynsetRecord};
use crate::collate::Glosses;
use crate::error::Result;
use crate::meta::LexiconMeta;
use crate::models::{
    DC_NAMESPACE, Definition, Example, Form, Lemma, LexicalEntry, LexicalResource, Lexicon, Sense,
    Synset, Tag,
};
use log::debug;
use quick_xml::se::Serializer;
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use unidecode::unidecode;

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
pub const LMF_DTD: &str = "http://globalwordnet.github.io/schemas/WN-LMF-1.0.dtd";
const DC_PUBLISHER: &str = "Global Wordnet Association";
const DC_FORMAT: &str = "OMW-LMF";
const TRANSLITERATION: &str = "transliteration";
const ASCII_TAG: &str = "ascii";

/// Lower-cased ASCII rendering of `form`, if it differs from `form`.
pub fn ascii_variant(form: &str) -> Option<String> {
    let ascii = unidecode(form);
    let ascii = ascii.trim();
    if ascii.is_empty() || ascii == form {
        None
    } else {
        Some(ascii.to_lowercase())
    }
}

/// One `Form` per variant, each followed by its transliteration unless that
/// spelling is already present.
fn build_forms(variants: &BTreeSet<String>) -> Vec<Form> {
    let mut seen: HashSet<String> = variants.iter().cloned().collect();
    let mut forms = Vec::with_capacity(variants.len());
    for variant in variants {
        forms.push(Form {
            written_form: variant.clone(),
            tags: Vec::new(),
        });
        if let Some(ascii) = ascii_variant(variant) {
            if seen.insert(ascii.clone()) {
                forms.push(Form {
                    written_form: ascii,
                    tags: vec![Tag {
                        category: TRANSLITERATION.to_string(),
                        text: ASCII_TAG.to_string(),
                    }],
                });
            }
        }
    }
    forms
}

fn build_entry(entry: &EntryRecord) -> LexicalEntry {
    LexicalEntry {
        id: entry.id.clone(),
        lemma: Lemma {
            written_form: entry.lemma.clone(),
            part_of_speech: entry.pos,
        },
        forms: build_forms(&entry.variants),
        senses: entry
            .synsets
            .iter()
            .map(|synset| Sense {
                id: format!("{}-{}", synset, entry.id),
                synset: synset.clone(),
            })
            .collect(),
    }
}

fn build_synset(synset: &SynsetRecord, glosses: &Glosses) -> Synset {
    Synset {
        id: synset.id.clone(),
        ili: synset.ili.clone(),
        part_of_speech: synset.pos,
        definitions: glosses
            .definitions_for(&synset.original_id)
            .into_iter()
            .map(|(language, text)| Definition { language, text })
            .collect(),
        examples: glosses
            .examples_for(&synset.original_id)
            .into_iter()
            .map(|(language, text)| Example { language, text })
            .collect(),
    }
}

fn build_lexicon(meta: &LexiconMeta, lexicon: &LanguageLexicon, glosses: &Glosses) -> Lexicon {
    debug!(
        "Building lexicon {}-{} ({} entries, {} synsets)",
        meta.id,
        lexicon.language,
        lexicon.entries().len(),
        lexicon.synsets().len()
    );
    Lexicon {
        id: format!("{}-{}", meta.id, lexicon.language),
        label: meta.label.clone(),
        language: lexicon.language.clone(),
        email: meta.email.clone(),
        license: meta.license.clone(),
        version: meta.version.clone(),
        citation: meta.citation.clone(),
        url: meta.url.clone(),
        dc_publisher: DC_PUBLISHER.to_string(),
        dc_format: DC_FORMAT.to_string(),
        dc_description: meta.description.clone(),
        confidence_score: meta.conf.clone(),
        lexical_entries: lexicon.entries().iter().map(build_entry).collect(),
        synsets: lexicon
            .synsets()
            .iter()
            .map(|synset| build_synset(synset, glosses))
            .collect(),
    }
}

/// Builds the document model: one lexicon per language, in the order the
/// languages first appeared.
pub fn build_resource(
    meta: &LexiconMeta,
    aggregation: &Aggregation,
    glosses: &Glosses,
) -> LexicalResource {
    LexicalResource {
        xmlns_dc: DC_NAMESPACE.to_string(),
        lexicons: aggregation
            .lexicons()
            .iter()
            .map(|lexicon| build_lexicon(meta, lexicon, glosses))
            .collect(),
    }
}

/// Serializes a resource as a complete WN-LMF 1.0 document.
pub fn to_lmf_string(resource: &LexicalResource) -> Result<String> {
    let mut buffer = String::new();
    buffer.push_str(XML_DECLARATION);
    buffer.push('\n');
    buffer.push_str(&format!(
        "<!DOCTYPE LexicalResource SYSTEM \"{}\">\n",
        LMF_DTD
    ));
    let mut ser = Serializer::with_root(&mut buffer, Some("LexicalResource"))?;
    ser.indent(' ', 2);
    resource.serialize(ser)?;
    buffer.push('\n');
    Ok(buffer)
}
