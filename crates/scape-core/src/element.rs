//! Graph elements: nodes, edges, and compound parent links.
//!
//! Elements are stored as flat records ([`GraphElement`]) with optional
//! `parent`, `source`, and `target` references, the way a relational table
//! would hold them. The domain view of a record is the [`ElementKind`] tagged
//! union returned by [`GraphElement::kind`]; every other classification helper
//! is derived from it.
//!
//! # Example
//!
//! ```
//! # use scape_core::element::{ElementKind, NewElement};
//! # use scape_core::identifier::{ElementId, ScapeId};
//! let scape = ScapeId::new(1);
//! let edge = NewElement::edge(scape, ElementId::new(1), ElementId::new(2));
//!
//! assert_eq!(
//!     edge.kind(),
//!     ElementKind::Edge { source: ElementId::new(1), target: ElementId::new(2) }
//! );
//! ```

use std::fmt;

use crate::identifier::{ElementId, ScapeId};

/// Element group as understood by the visualization front end.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    #[default]
    Nodes,
    Edges,
}

impl Group {
    /// Returns the front-end name of this group.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Nodes => "nodes",
            Self::Edges => "edges",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// User-interaction flags of an element.
///
/// Defaults to an unselected, selectable, unlocked, grabbable element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interaction {
    pub selected: bool,
    pub selectable: bool,
    pub locked: bool,
    pub grabbable: bool,
}

impl Default for Interaction {
    fn default() -> Self {
        Self {
            selected: false,
            selectable: true,
            locked: false,
            grabbable: true,
        }
    }
}

/// Domain classification of a graph element.
///
/// The variants are mutually exclusive. A record carrying a parent reference
/// is a [`ElementKind::ParentLink`] even if it also has source and target set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// A plain node.
    Node,
    /// A directed edge between two elements.
    Edge { source: ElementId, target: ElementId },
    /// A node nested inside the compound node `parent`.
    ParentLink { parent: ElementId },
}

impl ElementKind {
    /// Classifies a record from its nullable reference columns.
    ///
    /// This is the only place where the precedence between parent links,
    /// edges, and nodes is decided.
    pub fn classify(
        parent: Option<ElementId>,
        source: Option<ElementId>,
        target: Option<ElementId>,
    ) -> Self {
        match (parent, source, target) {
            (Some(parent), _, _) => Self::ParentLink { parent },
            (None, Some(source), Some(target)) => Self::Edge { source, target },
            _ => Self::Node,
        }
    }
}

/// An element that has not been persisted yet.
///
/// Use [`NewElement::node`] or [`NewElement::edge`] and the `with_*` methods,
/// then hand it to [`ElementStore::create`](crate::store::ElementStore::create),
/// which validates the references and assigns an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewElement {
    scape_id: ScapeId,
    group: Group,
    parent: Option<ElementId>,
    source: Option<ElementId>,
    target: Option<ElementId>,
    interaction: Interaction,
    classes: Option<String>,
    label: Option<String>,
}

impl NewElement {
    /// A node in the `nodes` group.
    pub fn node(scape_id: ScapeId) -> Self {
        Self {
            scape_id,
            group: Group::Nodes,
            parent: None,
            source: None,
            target: None,
            interaction: Interaction::default(),
            classes: None,
            label: None,
        }
    }

    /// An edge in the `edges` group going from `source` to `target`.
    pub fn edge(scape_id: ScapeId, source: ElementId, target: ElementId) -> Self {
        Self {
            group: Group::Edges,
            source: Some(source),
            target: Some(target),
            ..Self::node(scape_id)
        }
    }

    /// Places this element inside the compound node `parent`.
    pub fn with_parent(mut self, parent: ElementId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the space separated class list.
    pub fn with_classes(mut self, classes: impl Into<String>) -> Self {
        self.classes = Some(classes.into());
        self
    }

    pub fn with_interaction(mut self, interaction: Interaction) -> Self {
        self.interaction = interaction;
        self
    }

    pub fn scape_id(&self) -> ScapeId {
        self.scape_id
    }

    pub fn group(&self) -> Group {
        self.group
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    pub fn kind(&self) -> ElementKind {
        ElementKind::classify(self.parent, self.source, self.target)
    }

    /// Returns every element this one refers to, in `parent`, `source`,
    /// `target` order.
    pub fn references(&self) -> impl Iterator<Item = ElementId> {
        [self.parent, self.source, self.target].into_iter().flatten()
    }

    /// Turns this draft into a stored record with the given id.
    ///
    /// Store implementations call this after validating the draft.
    pub fn assign_id(self, id: ElementId) -> GraphElement {
        GraphElement {
            id,
            scape_id: self.scape_id,
            group: self.group,
            parent: self.parent,
            source: self.source,
            target: self.target,
            interaction: self.interaction,
            classes: self.classes,
            label: self.label,
        }
    }
}

/// A persisted node, edge, or compound parent link of a scape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphElement {
    id: ElementId,
    scape_id: ScapeId,
    group: Group,
    parent: Option<ElementId>,
    source: Option<ElementId>,
    target: Option<ElementId>,
    interaction: Interaction,
    classes: Option<String>,
    label: Option<String>,
}

impl GraphElement {
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Returns the scape owning this element.
    pub fn scape_id(&self) -> ScapeId {
        self.scape_id
    }

    pub fn group(&self) -> Group {
        self.group
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    pub fn source(&self) -> Option<ElementId> {
        self.source
    }

    pub fn target(&self) -> Option<ElementId> {
        self.target
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    pub fn classes(&self) -> Option<&str> {
        self.classes.as_deref()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the label, or the id when no label is set.
    pub fn display_label(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| self.id.to_string())
    }

    /// Classifies this element. See [`ElementKind::classify`].
    pub fn kind(&self) -> ElementKind {
        ElementKind::classify(self.parent, self.source, self.target)
    }

    pub fn is_parent_link(&self) -> bool {
        matches!(self.kind(), ElementKind::ParentLink { .. })
    }

    pub fn is_edge(&self) -> bool {
        matches!(self.kind(), ElementKind::Edge { .. })
    }

    pub fn is_node(&self) -> bool {
        matches!(self.kind(), ElementKind::Node)
    }

    /// Returns `true` if this element uses `id` as its source or target.
    pub fn connects(&self, id: ElementId) -> bool {
        self.source == Some(id) || self.target == Some(id)
    }

    pub(crate) fn clear_parent(&mut self) {
        self.parent = None;
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    fn optional_id() -> impl Strategy<Value = Option<ElementId>> {
        proptest::option::of((1u64..50).prop_map(ElementId::new))
    }

    proptest! {
        #[test]
        fn classification_is_total_and_exclusive(
            parent in optional_id(),
            source in optional_id(),
            target in optional_id(),
        ) {
            let kind = ElementKind::classify(parent, source, target);
            let element = GraphElement {
                id: ElementId::new(100),
                scape_id: ScapeId::new(1),
                group: Group::Nodes,
                parent,
                source,
                target,
                interaction: Interaction::default(),
                classes: None,
                label: None,
            };

            let flags = [element.is_parent_link(), element.is_edge(), element.is_node()];
            prop_assert_eq!(flags.iter().filter(|flag| **flag).count(), 1);
            prop_assert_eq!(element.kind(), kind);
            prop_assert_eq!(element.is_parent_link(), parent.is_some());
        }
    }
}
