//! Ladders for one spectrum: the identified peptide plus user-edited variants.
//!
//! The first ladder is always the one built from the original peptide. Each
//! edit of the peptide adds a modified variant after it, which the viewer
//! shows as `Modified1`, `Modified2`, and so on.

use log::debug;

use crate::ladder::LadderInstance;

/// Label of the ladder built from the identified peptide
pub const ORIGINAL_LABEL: &str = "Original";

/// Prefix of modified variant labels
pub const VARIANT_LABEL_PREFIX: &str = "Modified";

/// Errors that can occur when editing a ladder session
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The original ladder cannot be removed
    #[error("The original ladder cannot be removed")]
    CannotRemoveOriginal,

    /// No ladder at the requested index
    #[error("No ladder at index {index} (session holds {len})")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of ladders in the session
        len: usize,
    },
}

/// Ordered collection of ladders with a current selection
#[derive(Debug, Clone)]
pub struct LadderSession {
    ladders: Vec<LadderInstance>,
    current: usize,
}

impl LadderSession {
    /// Start a session from the ladder of the identified peptide
    pub fn new(original: LadderInstance) -> Self {
        Self {
            ladders: vec![original],
            current: 0,
        }
    }

    /// Add a modified variant and select it, returning its index
    pub fn push_variant(&mut self, ladder: LadderInstance) -> usize {
        debug!("Adding ladder variant for {}", ladder.peptide());
        self.ladders.push(ladder);
        self.current = self.ladders.len() - 1;
        self.current
    }

    /// Remove a modified variant.
    ///
    /// A selection after the removed variant follows its ladder down one
    /// index. Removing the selected variant keeps the index when possible,
    /// otherwise moves to the new last ladder.
    pub fn remove_variant(&mut self, index: usize) -> Result<LadderInstance, SessionError> {
        if index == 0 {
            return Err(SessionError::CannotRemoveOriginal);
        }
        if index >= self.ladders.len() {
            return Err(SessionError::IndexOutOfRange {
                index,
                len: self.ladders.len(),
            });
        }

        let removed = self.ladders.remove(index);
        if index < self.current {
            self.current -= 1;
        } else if self.current >= self.ladders.len() {
            self.current = self.ladders.len() - 1;
        }
        Ok(removed)
    }

    /// Drop every variant, keeping the original
    pub fn clear_variants(&mut self) {
        self.ladders.truncate(1);
        self.current = 0;
    }

    /// Change the selected ladder
    pub fn select(&mut self, index: usize) -> Result<&LadderInstance, SessionError> {
        if index >= self.ladders.len() {
            return Err(SessionError::IndexOutOfRange {
                index,
                len: self.ladders.len(),
            });
        }
        self.current = index;
        Ok(&self.ladders[index])
    }

    /// Index of the selected ladder
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The selected ladder
    pub fn current(&self) -> &LadderInstance {
        &self.ladders[self.current]
    }

    /// The ladder of the identified peptide
    pub fn original(&self) -> &LadderInstance {
        &self.ladders[0]
    }

    /// Ladder at `index`
    pub fn get(&self, index: usize) -> Option<&LadderInstance> {
        self.ladders.get(index)
    }

    /// All ladders, original first
    pub fn ladders(&self) -> &[LadderInstance] {
        &self.ladders
    }

    /// Display labels parallel to [`ladders`](Self::ladders)
    pub fn labels(&self) -> Vec<String> {
        (0..self.ladders.len())
            .map(|i| {
                if i == 0 {
                    ORIGINAL_LABEL.to_string()
                } else {
                    format!("{}{}", VARIANT_LABEL_PREFIX, i)
                }
            })
            .collect()
    }

    /// Number of ladders, original included
    pub fn len(&self) -> usize {
        self.ladders.len()
    }

    /// Always false; a session holds at least the original ladder
    pub fn is_empty(&self) -> bool {
        self.ladders.is_empty()
    }
}
