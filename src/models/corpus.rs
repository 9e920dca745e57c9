use serde::{Deserialize, Serialize};

use crate::{
    error::RemapError,
    models::{CanonicalRecord, GameRow},
};

/// An in-memory tabular corpus, one row per game
///
/// Remapping produces a new corpus; a corpus is not meant to be remapped while
/// another writer is mutating it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Corpus {
    pub rows: Vec<GameRow>,
}

impl Corpus {
    pub fn new(rows: Vec<GameRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Present cells of a named column, in row order
    pub fn column(&self, name: &str) -> Result<Vec<String>, RemapError> {
        let mut cells = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            match row.cell(name) {
                Some(Some(value)) => cells.push(value),
                Some(None) => {}
                None => return Err(RemapError::UnknownColumn(name.to_string())),
            }
        }

        // An empty corpus still has to reject unknown column names
        if self.rows.is_empty() && GameRow::default().cell(name).is_none() {
            return Err(RemapError::UnknownColumn(name.to_string()));
        }

        Ok(cells)
    }
}

impl FromIterator<CanonicalRecord> for Corpus {
    fn from_iter<I: IntoIterator<Item = CanonicalRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(GameRow::from).collect())
    }
}
