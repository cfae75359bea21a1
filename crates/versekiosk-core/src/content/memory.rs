use std::collections::BTreeMap;

use super::{Poem, PoemError, PoemLibrary};

/// In-memory poem library used during bring-up and in tests.
///
/// Records inserted as invalid model files that exist but fail validation.
#[derive(Clone, Debug, Default)]
pub struct MemoryLibrary {
    poems: BTreeMap<String, Option<Poem>>,
}

impl MemoryLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: &str, title: &str, body: &str) {
        self.poems.insert(
            id.to_string(),
            Some(Poem {
                title: title.to_string(),
                body: body.to_string(),
            }),
        );
    }

    pub fn insert_invalid(&mut self, id: &str) {
        self.poems.insert(id.to_string(), None);
    }
}

impl PoemLibrary for MemoryLibrary {
    fn list_ids(&mut self) -> Vec<String> {
        self.poems.keys().cloned().collect()
    }

    fn load(&mut self, id: &str) -> Result<Poem, PoemError> {
        match self.poems.get(id) {
            Some(Some(poem)) => Ok(poem.clone()),
            Some(None) => Err(PoemError::Schema {
                id: id.to_string(),
                reason: "title/body must be strings".to_string(),
            }),
            None => Err(PoemError::Unreadable {
                id: id.to_string(),
                reason: "no such poem".to_string(),
            }),
        }
    }
}
