//! Element storage.
//!
//! [`ElementStore`] is the persistence boundary of the graph model: generators
//! create scapes and elements through it, and the document serializer reads
//! them back in creation order. [`MemoryStore`] is the in-memory
//! implementation used by the library and the CLI.
//!
//! # Reference rules
//!
//! Creating an element validates its references:
//! - every referenced element must exist and belong to the same scape
//! - a `parent` reference must point at an element of the `nodes` group
//!
//! Deleting an element also deletes every element that uses it as `source` or
//! `target`, and clears `parent` on elements nested inside it. Deleting a scape
//! deletes all of its elements.

use indexmap::{IndexMap, IndexSet};
use log::{debug, trace};

use crate::{
    element::{GraphElement, Group, NewElement},
    error::ModelError,
    identifier::{ElementId, ScapeId},
    scape::{Scape, ScapeDraft},
};

/// Repository of scapes and their elements.
///
/// Element sequences are returned in creation order.
pub trait ElementStore {
    /// Creates an empty scape and returns its id.
    fn create_scape(&mut self, draft: ScapeDraft) -> Result<ScapeId, ModelError>;

    fn scape(&self, id: ScapeId) -> Option<&Scape>;

    /// Deletes a scape together with all of its elements.
    fn delete_scape(&mut self, id: ScapeId) -> Result<(), ModelError>;

    /// Validates and persists a new element, returning its assigned id.
    fn create(&mut self, element: NewElement) -> Result<ElementId, ModelError>;

    fn element(&self, id: ElementId) -> Option<&GraphElement>;

    /// Deletes an element, cascading to the edges that reference it.
    fn delete(&mut self, id: ElementId) -> Result<(), ModelError>;

    /// Returns all elements of a scape.
    fn all_for_scape(&self, scape: ScapeId) -> Vec<&GraphElement>;

    /// Returns the elements of a scape in the `nodes` group.
    fn nodes_for_scape(&self, scape: ScapeId) -> Vec<&GraphElement>;

    fn count_nodes(&self, scape: ScapeId) -> usize {
        self.nodes_for_scape(scape).len()
    }

    /// Returns the node at the 0-based `index` of [`ElementStore::nodes_for_scape`].
    fn node_at(&self, scape: ScapeId, index: usize) -> Option<&GraphElement> {
        self.nodes_for_scape(scape).get(index).copied()
    }
}

/// Insertion-ordered in-memory [`ElementStore`].
///
/// Scape and element ids are assigned sequentially starting at 1.
#[derive(Debug, Default)]
pub struct MemoryStore {
    scapes: IndexMap<ScapeId, Scape>,
    elements: IndexMap<ElementId, GraphElement>,
    last_scape_id: u64,
    last_element_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of elements across all scapes.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn validate(&self, element: &NewElement) -> Result<(), ModelError> {
        let scape = element.scape_id();
        if !self.scapes.contains_key(&scape) {
            return Err(ModelError::UnknownScape(scape));
        }

        for referenced in element.references() {
            let target = self
                .elements
                .get(&referenced)
                .ok_or(ModelError::UnknownElement(referenced))?;
            if target.scape_id() != scape {
                return Err(ModelError::CrossScapeReference {
                    scape,
                    referenced,
                    referenced_scape: target.scape_id(),
                });
            }
        }

        if let Some(parent) = element.parent() {
            let is_node = self
                .elements
                .get(&parent)
                .is_some_and(|parent| parent.group() == Group::Nodes);
            if !is_node {
                return Err(ModelError::InvalidParentTarget { parent });
            }
        }

        Ok(())
    }

    /// Collects `id` and every element that transitively uses it as an endpoint.
    fn cascade_from(&self, id: ElementId) -> IndexSet<ElementId> {
        let mut doomed = IndexSet::from([id]);
        let mut cursor = 0;
        while let Some(&current) = doomed.get_index(cursor) {
            for element in self.elements.values() {
                if element.connects(current) {
                    doomed.insert(element.id());
                }
            }
            cursor += 1;
        }
        doomed
    }
}

impl ElementStore for MemoryStore {
    fn create_scape(&mut self, draft: ScapeDraft) -> Result<ScapeId, ModelError> {
        self.last_scape_id += 1;
        let id = ScapeId::new(self.last_scape_id);
        debug!(scape_id = id.get(), name = draft.name(); "Scape created");
        self.scapes.insert(id, draft.assign_id(id));
        Ok(id)
    }

    fn scape(&self, id: ScapeId) -> Option<&Scape> {
        self.scapes.get(&id)
    }

    fn delete_scape(&mut self, id: ScapeId) -> Result<(), ModelError> {
        self.scapes
            .shift_remove(&id)
            .ok_or(ModelError::UnknownScape(id))?;

        let before = self.elements.len();
        self.elements.retain(|_, element| element.scape_id() != id);
        debug!(
            scape_id = id.get(),
            removed_elements = before - self.elements.len();
            "Scape deleted"
        );
        Ok(())
    }

    fn create(&mut self, element: NewElement) -> Result<ElementId, ModelError> {
        self.validate(&element)?;

        self.last_element_id += 1;
        let id = ElementId::new(self.last_element_id);
        let element = element.assign_id(id);
        trace!(element:?; "Element created");
        self.elements.insert(id, element);
        Ok(id)
    }

    fn element(&self, id: ElementId) -> Option<&GraphElement> {
        self.elements.get(&id)
    }

    fn delete(&mut self, id: ElementId) -> Result<(), ModelError> {
        if !self.elements.contains_key(&id) {
            return Err(ModelError::UnknownElement(id));
        }

        let doomed = self.cascade_from(id);
        self.elements
            .retain(|element_id, _| !doomed.contains(element_id));

        for element in self.elements.values_mut() {
            if element.parent().is_some_and(|parent| doomed.contains(&parent)) {
                element.clear_parent();
            }
        }

        debug!(element_id = id.get(), removed_elements = doomed.len(); "Element deleted");
        Ok(())
    }

    fn all_for_scape(&self, scape: ScapeId) -> Vec<&GraphElement> {
        self.elements
            .values()
            .filter(|element| element.scape_id() == scape)
            .collect()
    }

    fn nodes_for_scape(&self, scape: ScapeId) -> Vec<&GraphElement> {
        self.elements
            .values()
            .filter(|element| element.scape_id() == scape && element.group() == Group::Nodes)
            .collect()
    }

    fn count_nodes(&self, scape: ScapeId) -> usize {
        self.elements
            .values()
            .filter(|element| element.scape_id() == scape && element.group() == Group::Nodes)
            .count()
    }

    fn node_at(&self, scape: ScapeId, index: usize) -> Option<&GraphElement> {
        self.elements
            .values()
            .filter(|element| element.scape_id() == scape && element.group() == Group::Nodes)
            .nth(index)
    }
}
