//! Scene-commit boundary and an in-memory scene
//!
//! [`SceneCommit`] is the only way placed elements enter a scene. [`Scene`] is
//! a plain in-memory implementation with snapshot undo/redo, used by the CLI
//! and tests.

use std::collections::{HashMap, HashSet};

use thiserror::Error;
use tracing::{debug, warn};

use crate::element::{Element, ElementId, GroupId};

/// Reasons a scene refuses a batch
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitError {
    #[error("cannot commit an empty batch")]
    EmptyBatch,

    #[error("element id '{id}' is already in use")]
    DuplicateId { id: String },
}

/// A mutable scene that accepts batches of elements
pub trait SceneCommit {
    /// Whether any element or group in the scene uses this identifier
    fn contains_id(&self, id: &str) -> bool;

    /// Insert all elements and record one history entry, or change nothing.
    fn add_elements(&mut self, elements: Vec<Element>) -> Result<(), CommitError>;
}

/// In-memory scene with snapshot-based undo/redo
#[derive(Debug, Clone)]
pub struct Scene {
    elements: Vec<Element>,
    index: HashMap<ElementId, usize>,
    undo_stack: Vec<Vec<Element>>,
    redo_stack: Vec<Vec<Element>>,
    max_history: usize,
}

impl Scene {
    /// Default number of undo checkpoints kept
    pub const DEFAULT_HISTORY: usize = 100;

    pub fn new() -> Self {
        Self::with_history_limit(Self::DEFAULT_HISTORY)
    }

    /// Scene keeping at most `max_history` undo checkpoints.
    ///
    /// At least one checkpoint is always kept, so the latest commit can be undone.
    pub fn with_history_limit(max_history: usize) -> Self {
        Self {
            elements: Vec::new(),
            index: HashMap::new(),
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_history: max_history.max(1),
        }
    }

    /// Elements in z-order
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn get(&self, id: &ElementId) -> Option<&Element> {
        self.index.get(id).map(|&i| &self.elements[i])
    }

    /// Elements that belong to a group, at any nesting level
    pub fn group_members(&self, group: &GroupId) -> Vec<&Element> {
        self.elements
            .iter()
            .filter(|e| e.group_ids().contains(group))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Restore the state before the last commit. Returns false if there is
    /// nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.undo_stack.pop() {
            Some(prev) => {
                let current = std::mem::replace(&mut self.elements, prev);
                self.redo_stack.push(current);
                self.reindex();
                true
            }
            None => false,
        }
    }

    /// Re-apply the last undone commit. Returns false if there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(next) => {
                let current = std::mem::replace(&mut self.elements, next);
                self.undo_stack.push(current);
                self.reindex();
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of undo checkpoints available
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    fn push_checkpoint(&mut self) {
        self.undo_stack.push(self.elements.clone());
        self.redo_stack.clear();
        while self.undo_stack.len() > self.max_history {
            self.undo_stack.remove(0);
        }
    }

    fn reindex(&mut self) {
        self.index = self
            .elements
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id().clone(), i))
            .collect();
    }

    fn check_batch(&self, elements: &[Element]) -> Result<(), CommitError> {
        if elements.is_empty() {
            return Err(CommitError::EmptyBatch);
        }
        let mut batch = HashSet::with_capacity(elements.len());
        for element in elements {
            let id = element.id();
            if self.contains_id(id.as_str()) || !batch.insert(id) {
                return Err(CommitError::DuplicateId { id: id.0.clone() });
            }
        }
        Ok(())
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneCommit for Scene {
    fn contains_id(&self, id: &str) -> bool {
        self.index.contains_key(&ElementId::new(id))
            || self
                .elements
                .iter()
                .any(|e| e.group_ids().iter().any(|g| g.as_str() == id))
    }

    fn add_elements(&mut self, elements: Vec<Element>) -> Result<(), CommitError> {
        if let Err(e) = self.check_batch(&elements) {
            warn!(error = %e, "rejected scene commit");
            return Err(e);
        }

        self.push_checkpoint();
        let start = self.elements.len();
        for (offset, element) in elements.into_iter().enumerate() {
            self.index.insert(element.id().clone(), start + offset);
            self.elements.push(element);
        }
        debug!(
            added = self.elements.len() - start,
            total = self.elements.len(),
            "committed elements"
        );
        Ok(())
    }
}
