//! Poem content sources.

pub mod memory;

use thiserror::Error;

/// One validated poem record.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Poem {
    pub title: String,
    pub body: String,
}

/// Why a poem record could not be produced.
///
/// All three variants are recoverable per item: the kiosk logs, skips, and
/// advances the playlist.
#[derive(Debug, Error)]
pub enum PoemError {
    #[error("poem '{id}' is unreadable: {reason}")]
    Unreadable { id: String, reason: String },
    #[error("poem '{id}' is not valid JSON: {reason}")]
    Malformed { id: String, reason: String },
    #[error("poem '{id}' has an invalid schema: {reason}")]
    Schema { id: String, reason: String },
}

/// Poem library capability.
pub trait PoemLibrary {
    /// Ids of every poem the library can serve. A listing failure surfaces
    /// as an empty set, which the kiosk treats as the empty-library state.
    fn list_ids(&mut self) -> Vec<String>;

    /// Load and validate one poem.
    fn load(&mut self, id: &str) -> Result<Poem, PoemError>;
}
