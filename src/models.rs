use serde::{Deserialize, Serialize};

/// Namespace bound to the `dc:` prefix on the document root.
pub const DC_NAMESPACE: &str = "http://purl.org/dc/elements/1.1/";

// --- Top Level ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexicalResource {
    #[serde(rename = "@xmlns:dc", default)]
    pub xmlns_dc: String,
    #[serde(rename = "Lexicon", default)]
    pub lexicons: Vec<Lexicon>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lexicon {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@label")]
    pub label: String,
    #[serde(rename = "@language")]
    pub language: String,
    #[serde(rename = "@email")]
    pub email: String,
    #[serde(rename = "@license")]
    pub license: String,
    #[serde(rename = "@version")]
    pub version: String,
    #[serde(rename = "@citation", default)]
    pub citation: String,
    #[serde(rename = "@url", default)]
    pub url: String,
    // Dublin Core attributes
    #[serde(rename = "@dc:publisher", alias = "@publisher", default)]
    pub dc_publisher: String,
    #[serde(rename = "@dc:format", alias = "@format", default)]
    pub dc_format: String,
    #[serde(rename = "@dc:description", alias = "@description", default)]
    pub dc_description: String,
    // Kept as text so "1.0" is written back unchanged
    #[serde(rename = "@confidenceScore", default)]
    pub confidence_score: String,

    // Lexical Entries and Synsets
    #[serde(rename = "LexicalEntry", default)]
    pub lexical_entries: Vec<LexicalEntry>,
    #[serde(rename = "Synset", default)]
    pub synsets: Vec<Synset>,
}

// --- Lexical Entry ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexicalEntry {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "Lemma")]
    pub lemma: Lemma,
    #[serde(rename = "Form", default, skip_serializing_if = "Vec::is_empty")]
    pub forms: Vec<Form>,
    #[serde(rename = "Sense", default, skip_serializing_if = "Vec::is_empty")]
    pub senses: Vec<Sense>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lemma {
    #[serde(rename = "@writtenForm")]
    pub written_form: String,
    #[serde(rename = "@partOfSpeech")]
    pub part_of_speech: PartOfSpeech,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    #[serde(rename = "@writtenForm")]
    pub written_form: String,
    #[serde(rename = "Tag", default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(rename = "@category")]
    pub category: String,
    #[serde(rename = "$text")]
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    N, // Noun
    V, // Verb
    A, // Adjective
    R, // Adverb
    S, // Adjective Satellite
    C, // Conjunction
    P, // Adposition
    X, // Other
    U, // Unknown
}

impl PartOfSpeech {
    /// Derives the part of speech from the trailing letter of a synset id
    /// such as `01775164-a`. Satellites (`s`) are folded into adjectives.
    pub fn from_synset_id(synset_id: &str) -> Option<Self> {
        match synset_id.chars().last()? {
            'n' => Some(PartOfSpeech::N),
            'v' => Some(PartOfSpeech::V),
            'a' | 's' => Some(PartOfSpeech::A),
            'r' => Some(PartOfSpeech::R),
            'c' => Some(PartOfSpeech::C),
            'p' => Some(PartOfSpeech::P),
            'x' => Some(PartOfSpeech::X),
            'u' => Some(PartOfSpeech::U),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@synset")]
    pub synset: String, // Reference to Synset ID
}

// --- Synset ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Synset {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@ili", default)] // Empty when the ILI map has no entry
    pub ili: String,
    #[serde(rename = "@partOfSpeech")]
    pub part_of_speech: PartOfSpeech,
    #[serde(rename = "Definition", default, skip_serializing_if = "Vec::is_empty")]
    pub definitions: Vec<Definition>,
    #[serde(rename = "Example", default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Example>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Definition {
    #[serde(rename = "@language")]
    pub language: String,
    #[serde(rename = "$text", default)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Example {
    #[serde(rename = "@language")]
    pub language: String,
    #[serde(rename = "$text", default)]
    pub text: String,
}
