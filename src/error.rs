use thiserror::Error;

/// Custom Result type for this crate.
pub type Result<T> = std::result::Result<T, Tab2LmfError>;

/// Enum representing all possible errors in the tab2lmf_rs library.
#[derive(Error, Debug)]
pub enum Tab2LmfError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML serialization error: {0}")]
    XmlSerialize(#[from] quick_xml::SeError),

    #[error("XML parsing error: {0}")]
    XmlParse(#[from] quick_xml::DeError),

    #[error("Metadata file error: {0}")]
    MetaConfig(#[from] toml::de::Error),

    #[error("Config directory not found or could not be determined")]
    ConfigDirNotFound,

    #[error("There was no meta-info available for wordnet '{0}'. Please add a record for it.")]
    UnknownWordnet(String),

    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error("Malformed ILI map entry at line {line}: {reason}")]
    MalformedIliMap { line: usize, reason: String },
}
