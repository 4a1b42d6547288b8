use crate::error::{Tab2LmfError, Result};
use crate::models::LexicalResource;
use log::debug;
use quick_xml::de::from_str;

/// Parses WN-LMF XML content into a LexicalResource struct.
pub fn parse_lmf(xml_content: &str) -> Result<LexicalResource> {
    debug!("Starting WN-LMF XML parsing...");
    let resource = from_str(xml_content).map_err(Tab2LmfError::from)?;
    debug!("Successfully parsed WN-LMF XML into LexicalResource.");
    Ok(resource)
}

/// Element counts of a parsed document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LmfSummary {
    pub lexicons: usize,
    pub lexical_entries: usize,
    pub senses: usize,
    pub synsets: usize,
}

impl LexicalResource {
    pub fn summary(&self) -> LmfSummary {
        LmfSummary {
            lexicons: self.lexicons.len(),
            lexical_entries: self.lexicons.iter().map(|l| l.lexical_entries.len()).sum(),
            senses: self
                .lexicons
                .iter()
                .flat_map(|l| &l.lexical_entries)
                .map(|e| e.senses.len())
                .sum(),
            synsets: self.lexicons.iter().map(|l| l.synsets.len()).sum(),
        }
    }
}
