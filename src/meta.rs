//! Per-wordnet lexicon metadata.
//!
//! A handful of records ship with the crate. More can be given in a TOML file
//! with one table per wordnet id:
//!
//! ```toml
//! [okwn]
//! label = "Open Kristang Wordnet"
//! lang = "mcm"
//! license = "https://creativecommons.org/licenses/by/4.0/"
//! ```
//!
//! Records from the file replace built-in records with the same id.

use crate::error::{Result, Tab2LmfError};
use directories_next::ProjectDirs;
use log::{debug, info};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the metadata file looked up in the user config directory.
pub const META_FILENAME: &str = "meta.toml";
/// Subdirectory name within the user's config directory
pub const CONFIG_SUBDIR: &str = "tab2lmf-rs";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LexiconMeta {
    pub id: String,
    pub label: String,
    pub lang: String,
    pub email: String,
    pub license: String,
    pub version: String,
    pub citation: String,
    pub url: String,
    pub description: String,
    pub conf: String,
}

impl Default for LexiconMeta {
    fn default() -> Self {
        LexiconMeta {
            id: String::new(),
            label: String::new(),
            lang: String::new(),
            email: String::new(),
            license: String::new(),
            version: String::new(),
            citation: String::new(),
            url: String::new(),
            description: String::new(),
            conf: "1.0".to_string(),
        }
    }
}

impl LexiconMeta {
    /// Field names and values, in display order.
    pub fn fields(&self) -> [(&'static str, &str); 10] {
        [
            ("id", self.id.as_str()),
            ("label", self.label.as_str()),
            ("lang", self.lang.as_str()),
            ("email", self.email.as_str()),
            ("license", self.license.as_str()),
            ("version", self.version.as_str()),
            ("citation", self.citation.as_str()),
            ("url", self.url.as_str()),
            ("description", self.description.as_str()),
            ("conf", self.conf.as_str()),
        ]
    }
}

#[allow(clippy::too_many_arguments)]
fn record(
    id: &str,
    label: &str,
    lang: &str,
    email: &str,
    license: &str,
    version: &str,
    citation: &str,
    url: &str,
    description: &str,
) -> LexiconMeta {
    LexiconMeta {
        id: id.to_string(),
        label: label.to_string(),
        lang: lang.to_string(),
        email: email.to_string(),
        license: license.to_string(),
        version: version.to_string(),
        citation: citation.to_string(),
        url: url.to_string(),
        description: description.to_string(),
        conf: "1.0".to_string(),
    }
}

const CC_BY_4: &str = "https://creativecommons.org/licenses/by/4.0/";
const CC_BY_3: &str = "https://creativecommons.org/licenses/by/3.0/";

fn builtin_records() -> Vec<LexiconMeta> {
    vec![
        record(
            "okwn",
            "Open Kristang Wordnet",
            "mcm",
            "lmorgado.dacosta@gmail.com",
            CC_BY_4,
            "0.1",
            "...",
            "http://compling.hss.ntu.edu.sg/kristang/",
            "...",
        ),
        record(
            "okwnx",
            "Open Kristang Wordnet Extended",
            "mcm",
            "lmorgado.dacosta@gmail.com",
            CC_BY_4,
            "0.1",
            "...",
            "http://compling.hss.ntu.edu.sg/kristang/",
            "...",
        ),
        record(
            "cantown",
            "Cantonese Wordnet",
            "yue",
            "neosome@gmail.com, lmorgado.dacosta@gmail.com",
            CC_BY_4,
            "1.0",
            "...",
            "...",
            "...",
        ),
        record(
            "copwn",
            "Coptic Wordnet",
            "cop",
            "laurasla@ifi.uio.no",
            CC_BY_4,
            "1.0",
            "Laura Slaughter, Luis Morgado Da Costa, So Miyagawa, Marco Büchler, Amir Zeldes, Hugo Lundhaug and Heike Behlmer. 2019. The Making of Coptic Wordnet. In Global WordNet Conference 2019 Proceedings, Poland.",
            "...",
            "...",
        ),
        record(
            "albanet",
            "Albanet (Albanian Wordnet)",
            "als",
            "",
            CC_BY_3,
            "1.0",
            "Ervin Ruci. 2008. On the current state of Albanet and related applications. Technical report, University of Vlora. (http://fjalnet.com/technicalreportalbanet.pdf)",
            "http://fjalnet.com",
            "This is the original URL, but it seems to be down.",
        ),
        record(
            "awn",
            "Arabic Wordnet",
            "ar",
            "",
            CC_BY_3,
            "2.0",
            "Black W., Elkateb S., Rodriguez H., Alkhalifa M., Vossen P., Pease A., Bertran M., Fellbaum C., (2006) The Arabic WordNet Project, Proceedings of LREC 2006; Lahsen Abouenour, Karim Bouzoubaa, Paolo Rosso (2013) On the evaluation and improvement of Arabic WordNet coverage and usability, Language Resources and Evaluation 47(3) pp 891–917",
            "http://www.globalwordnet.org/AWN/",
            "",
        ),
        record(
            "dannet",
            "DanNet",
            "da",
            "bspedersen@hum.ku.dk",
            "wordnet",
            "1.0",
            "Bolette S. Pedersen, Sanni Nimb, Jørg Asmussen, Nicolai H. Sørensen, Lars Trap-Jensen og Henrik Lorentzen. DanNet – the challenge of compiling a WordNet for Danish by reusing a monolingual dictionary. Lang Resources & Evaluation (2009) 43:269–299.",
            "https://cst.ku.dk/english/projekter/dannet/",
            "",
        ),
    ]
}

/// Gets the default location of the user metadata file.
pub fn default_meta_path() -> Result<PathBuf> {
    let proj_dirs =
        ProjectDirs::from("org", "Tab2LmfRs", CONFIG_SUBDIR).ok_or(Tab2LmfError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join(META_FILENAME))
}

#[derive(Debug, Clone)]
pub struct MetaTable {
    records: HashMap<String, LexiconMeta>,
}

impl Default for MetaTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl MetaTable {
    /// The records that ship with the crate.
    pub fn builtin() -> Self {
        MetaTable {
            records: builtin_records()
                .into_iter()
                .map(|meta| (meta.id.clone(), meta))
                .collect(),
        }
    }

    /// Built-in records plus those of `path`, or of the default metadata file
    /// when `path` is `None` and that file exists.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut table = Self::builtin();
        match path {
            Some(path) => table.merge_file(path)?,
            None => match default_meta_path() {
                Ok(path) if path.exists() => table.merge_file(&path)?,
                Ok(path) => debug!("No user metadata file at {:?}", path),
                Err(e) => debug!("Skipping user metadata file: {}", e),
            },
        }
        Ok(table)
    }

    fn merge_file(&mut self, path: &Path) -> Result<()> {
        info!("Reading lexicon metadata from {:?}", path);
        let contents = fs::read_to_string(path)?;
        let added = self.merge_toml(&contents)?;
        info!("Loaded {} metadata record(s) from {:?}", added, path);
        Ok(())
    }

    /// Merges TOML records into the table, returning how many were read.
    pub fn merge_toml(&mut self, contents: &str) -> Result<usize> {
        let parsed: HashMap<String, LexiconMeta> = toml::from_str(contents)?;
        let count = parsed.len();
        for (key, mut meta) in parsed {
            if meta.id.is_empty() {
                meta.id = key.clone();
            }
            self.records.insert(key, meta);
        }
        Ok(count)
    }

    pub fn get(&self, wnid: &str) -> Result<&LexiconMeta> {
        self.records
            .get(wnid)
            .ok_or_else(|| Tab2LmfError::UnknownWordnet(wnid.to_string()))
    }

    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.records.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}
