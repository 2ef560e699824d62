//! Error types for the scape graph model.

use thiserror::Error;

use crate::identifier::{ElementId, ScapeId};

/// Errors raised while building, sampling, or serializing a scape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A node was requested from a scape that has no nodes.
    #[error("scape {scape} has no nodes")]
    EmptyGraph { scape: ScapeId },

    /// An element referenced another element that lives in a different scape.
    #[error("element {referenced} belongs to scape {referenced_scape}, not to scape {scape}")]
    CrossScapeReference {
        scape: ScapeId,
        referenced: ElementId,
        referenced_scape: ScapeId,
    },

    /// A compound parent reference pointed at an element that is not a node.
    #[error("parent {parent} is not a node")]
    InvalidParentTarget { parent: ElementId },

    /// A reference could not be resolved within the scape being serialized.
    #[error("element {element} references element {referenced}, which is not in the scape")]
    DanglingReference {
        element: ElementId,
        referenced: ElementId,
    },

    #[error("unknown scape {0}")]
    UnknownScape(ScapeId),

    #[error("unknown element {0}")]
    UnknownElement(ElementId),
}
