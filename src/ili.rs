//! Interlingual Index (ILI) lookup table.
//!
//! The map file has one whitespace-separated row per synset:
//! `<ili-id> <synset-id> ...`. Only the first two columns are used.

use crate::data::open_input;
use crate::error::{Result, Tab2LmfError};
use log::{debug, info};
use std::borrow::Cow;
use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

/// Maps synset ids (with a normalized part-of-speech suffix) to ILI ids.
#[derive(Debug, Default, Clone)]
pub struct IliMap {
    map: HashMap<String, String>,
}

/// Folds the adjective-satellite suffix `-s` into `-a`.
pub fn normalize_synset_id(synset_id: &str) -> Cow<'_, str> {
    match synset_id.strip_suffix("-s") {
        Some(stem) => Cow::Owned(format!("{}-a", stem)),
        None => Cow::Borrowed(synset_id),
    }
}

impl IliMap {
    /// Loads the map from a file, decompressing `.gz` files transparently.
    pub fn load(path: &Path) -> Result<Self> {
        info!("Reading ILI map from {:?}", path);
        let map = Self::from_reader(open_input(path)?)?;
        info!("Loaded {} ILI mappings.", map.len());
        Ok(map)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut map = HashMap::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let mut columns = line.split_whitespace();
            let Some(ili) = columns.next() else {
                continue;
            };
            let synset_id = columns.next().ok_or_else(|| Tab2LmfError::MalformedIliMap {
                line: idx + 1,
                reason: format!("expected '<ili-id> <synset-id>', found '{}'", line.trim()),
            })?;
            if let Some(previous) =
                map.insert(normalize_synset_id(synset_id).into_owned(), ili.to_string())
            {
                debug!(
                    "Synset {} mapped more than once ({} replaced by {})",
                    synset_id, previous, ili
                );
            }
        }
        Ok(IliMap { map })
    }

    /// Looks up the ILI id for a synset. Both `-s` and `-a` ids resolve.
    pub fn get(&self, synset_id: &str) -> Option<&str> {
        self.map
            .get(normalize_synset_id(synset_id).as_ref())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
