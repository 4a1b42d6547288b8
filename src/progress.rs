//! Defines structures and types for progress reporting.

/// Represents a snapshot of the progress during ingestion.
#[derive(Debug, Clone)]
pub struct ProgressUpdate {
    /// A description of the current stage (e.g., "Reading TSV").
    pub stage_description: String,
    /// Number of lines processed in the current stage.
    pub current_item: u64,
    /// Total number of items expected in the current stage (if calculable).
    pub total_items: Option<u64>,
    /// An optional message providing more context (e.g., "1200 lemma rows").
    pub message: Option<String>,
}

/// Type alias for the progress callback function.
///
/// `FnMut` allows it to modify its captured state (e.g., update a spinner).
pub type ProgressCallback = Box<dyn FnMut(ProgressUpdate) + Send>;

impl ProgressUpdate {
    /// Creates a new progress update for the start of a stage.
    pub fn new_stage(description: String, total_items: Option<u64>) -> Self {
        ProgressUpdate {
            stage_description: description,
            current_item: 0,
            total_items,
            message: None,
        }
    }

    /// Creates an update part-way through a stage.
    pub fn at(description: String, current_item: u64, message: Option<String>) -> Self {
        ProgressUpdate {
            stage_description: description,
            current_item,
            total_items: None,
            message,
        }
    }
}
