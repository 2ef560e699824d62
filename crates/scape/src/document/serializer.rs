//! Conversion of a stored scape into a [`Document`].

use std::collections::HashSet;

use log::{debug, info};

use scape_core::{
    element::{ElementKind, GraphElement},
    error::ModelError,
    identifier::ElementId,
    scape::Scape,
    store::ElementStore,
};

use super::{Document, ElementEntry, EntryLink, LayoutBlock, Selector, StyleBlock};

/// Builds [`Document`]s from scapes.
///
/// Elements are emitted in store order, one entry per element. Only ids and
/// references are written; labels, classes, and interaction flags are not
/// part of the entry. Style blocks are emitted for `node`, `edge`, and
/// `parent` in that order, each only when its style text is non-empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentSerializer;

impl DocumentSerializer {
    pub fn new() -> Self {
        Self
    }

    /// Serializes `scape` as read from `store`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DanglingReference`] if an element refers to an
    /// element that is not part of the scape.
    pub fn serialize<S>(&self, store: &S, scape: &Scape) -> Result<Document, ModelError>
    where
        S: ElementStore + ?Sized,
    {
        info!(scape_id = scape.id().get(); "Serializing scape");

        let elements = store.all_for_scape(scape.id());
        let known: HashSet<ElementId> = elements.iter().map(|element| element.id()).collect();

        let entries = elements
            .iter()
            .map(|element| entry_for(element, &known))
            .collect::<Result<Vec<_>, _>>()?;

        let layout = LayoutBlock::new(
            scape.layout_name().as_str(),
            non_empty(scape.layout_options()).map(str::to_string),
        );

        let style = [
            (Selector::Node, scape.node_styles()),
            (Selector::Edge, scape.edge_styles()),
            (Selector::Parent, scape.parent_styles()),
        ]
        .into_iter()
        .filter_map(|(selector, text)| non_empty(text).map(|text| StyleBlock::new(selector, text)))
        .collect::<Vec<_>>();

        debug!(elements = entries.len(), style_blocks = style.len(); "Scape serialized");
        Ok(Document::new(
            scape.container_element_id(),
            entries,
            layout,
            style,
        ))
    }
}

fn entry_for(
    element: &GraphElement,
    known: &HashSet<ElementId>,
) -> Result<ElementEntry, ModelError> {
    let resolve = |referenced: ElementId| {
        if known.contains(&referenced) {
            Ok(referenced.to_string())
        } else {
            Err(ModelError::DanglingReference {
                element: element.id(),
                referenced,
            })
        }
    };

    let link = match element.kind() {
        ElementKind::Node => EntryLink::None,
        ElementKind::ParentLink { parent } => EntryLink::Parent(resolve(parent)?),
        ElementKind::Edge { source, target } => EntryLink::Edge {
            source: resolve(source)?,
            target: resolve(target)?,
        },
    };

    Ok(ElementEntry::new(element.id().to_string(), link))
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|text| !text.is_empty())
}
