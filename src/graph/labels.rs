use std::collections::HashMap;

use crate::graph::VertexId;

/// Two-way mapping between string labels and dense integer vertex ids.
///
/// Ids are handed out in insertion order starting at zero, so they can index
/// the per-vertex adjacency vectors directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelMap {
    label_to_id: HashMap<String, VertexId>,
    id_to_label: Vec<String>,
}

impl LabelMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        LabelMap {
            label_to_id: HashMap::with_capacity(capacity),
            id_to_label: Vec::with_capacity(capacity),
        }
    }

    /// Returns the id for `label`, allocating the next id if the label is new
    pub fn get_or_insert(&mut self, label: &str) -> VertexId {
        if let Some(&id) = self.label_to_id.get(label) {
            return id;
        }
        let id = self.id_to_label.len();
        self.label_to_id.insert(label.to_string(), id);
        self.id_to_label.push(label.to_string());
        id
    }

    pub fn id(&self, label: &str) -> Option<VertexId> {
        self.label_to_id.get(label).copied()
    }

    pub fn label(&self, id: VertexId) -> Option<&str> {
        self.id_to_label.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.id_to_label.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_to_label.is_empty()
    }
}
